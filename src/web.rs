//! Single-predicate web formats.
//!
//! These formats are simple collaborators with little internal structure:
//! most expose only `test`. They deliberately stay pragmatic — the email
//! shape is not the full RFC 5322 grammar and the IRI check does no
//! normalization; they answer "does this look like one" for inputs that
//! already arrived through a typed channel. Where a format does expose
//! `parts`/`parse` (IPv4, email), the three-tier contract holds as
//! everywhere else.

use crate::scan::Scanner;

/// IP address literals.
pub mod ip {
    /// Dotted-quad IPv4, octets 0–255, leading zeros allowed.
    pub mod v4 {
        use crate::scan::Scanner;

        /// The four octet substrings, verbatim.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct Ipv4Parts<'a> {
            pub octets: [&'a str; 4],
        }

        fn scan_octet<'a>(s: &mut Scanner<'a>) -> Option<&'a str> {
            let run = s.digits();
            if !matches!(run.len(), 1..=3) {
                return None;
            }
            let value: u16 = run.parse().ok()?;
            (value <= 255).then_some(run)
        }

        fn scan(input: &str) -> Option<Ipv4Parts<'_>> {
            let mut s = Scanner::new(input);
            let mut octets = [""; 4];
            for (index, slot) in octets.iter_mut().enumerate() {
                if index > 0 && !s.eat('.') {
                    return None;
                }
                *slot = scan_octet(&mut s)?;
            }
            s.at_end().then_some(Ipv4Parts { octets })
        }

        pub fn test(value: &str) -> bool {
            scan(value).is_some()
        }

        pub fn parts(value: &str) -> Option<Ipv4Parts<'_>> {
            scan(value)
        }

        pub fn parse(value: &str) -> Option<[u8; 4]> {
            let p = parts(value)?;
            let mut out = [0u8; 4];
            for (slot, octet) in out.iter_mut().zip(p.octets) {
                *slot = octet.parse().ok()?;
            }
            Some(out)
        }
    }

    /// Textual IPv6: the full eight-group form, a single `::` compression,
    /// and an optional embedded IPv4 tail.
    pub mod v6 {
        fn hex_group(text: &str) -> bool {
            !text.is_empty() && text.len() <= 4 && text.chars().all(|c| c.is_ascii_hexdigit())
        }

        /// Counts colon-separated groups; a final piece containing `.` is
        /// validated as an embedded IPv4 address (worth two groups).
        fn tail_groups(text: &str) -> Option<(usize, bool)> {
            if text.is_empty() {
                return Some((0, false));
            }
            let pieces: Vec<&str> = text.split(':').collect();
            let mut count = 0;
            for (index, piece) in pieces.iter().enumerate() {
                if index + 1 == pieces.len() && piece.contains('.') {
                    return super::v4::test(piece).then_some((count, true));
                }
                if !hex_group(piece) {
                    return None;
                }
                count += 1;
            }
            Some((count, false))
        }

        pub fn test(value: &str) -> bool {
            match value.find("::") {
                Some(split) => {
                    let (left, right) = (&value[..split], &value[split + 2..]);
                    if right.contains("::") || right.starts_with(':') {
                        return false;
                    }
                    let Some((left_groups, false)) = tail_groups(left) else {
                        return false;
                    };
                    let Some((right_groups, v4)) = tail_groups(right) else {
                        return false;
                    };
                    // The compression must stand for at least one group.
                    left_groups + right_groups + 2 * usize::from(v4) <= 7
                }
                None => match tail_groups(value) {
                    Some((groups, v4)) => groups + 2 * usize::from(v4) == 8,
                    None => false,
                },
            }
        }
    }

    /// Either address family.
    pub fn test(value: &str) -> bool {
        v4::test(value) || v6::test(value)
    }
}

/// A pragmatic email shape: `local@domain.tld` with restricted character
/// sets and the usual dot-placement rejections.
pub mod email {
    /// The local part and the domain, split at the `@`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EmailParts<'a> {
        pub local: &'a str,
        pub domain: &'a str,
    }

    fn is_local_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~.".contains(c)
    }

    fn is_domain_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '.' || c == '-'
    }

    pub fn parts(value: &str) -> Option<EmailParts<'_>> {
        let at = value.find('@')?;
        let (local, domain) = (&value[..at], &value[at + 1..]);
        if local.is_empty() || !local.chars().all(is_local_char) {
            return None;
        }
        let dot = domain.rfind('.')?;
        let (head, tld) = (&domain[..dot], &domain[dot + 1..]);
        if head.is_empty() || !head.chars().all(is_domain_char) {
            return None;
        }
        if tld.is_empty() || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        // Dot placement: not leading, not adjacent to the @, not doubled
        // in the domain.
        if local.starts_with('.')
            || local.ends_with('.')
            || domain.starts_with('.')
            || domain.contains("..")
        {
            return None;
        }
        Some(EmailParts { local, domain })
    }

    pub fn test(value: &str) -> bool {
        parts(value).is_some()
    }
}

/// An IRI shape: a scheme, a colon, and a tail free of whitespace and a
/// small set of forbidden characters.
pub mod iri {
    /// The scheme on its own.
    pub mod prefix {
        pub fn test(value: &str) -> bool {
            let mut chars = value.chars();
            match chars.next() {
                Some(first) if first.is_ascii_alphabetic() => {}
                _ => return false,
            }
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
        }
    }

    pub fn test(value: &str) -> bool {
        let Some(colon) = value.find(':') else {
            return false;
        };
        prefix::test(&value[..colon])
            && value[colon + 1..]
                .chars()
                .all(|c| !c.is_whitespace() && !"\"<>\\^`{|}".contains(c))
    }
}

/// An http(s) URL shape with optional port, path, query and fragment.
pub mod url {
    use super::Scanner;

    fn is_word(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }

    fn is_host_char(c: char) -> bool {
        is_word(c) || c == '-' || c == '.'
    }

    fn is_path_char(c: char) -> bool {
        is_word(c) || matches!(c, '-' | '.' | ':' | '&' | '%' | '@' | '~' | '+')
    }

    fn is_query_char(c: char) -> bool {
        is_path_char(c) || matches!(c, ',' | ';' | '=')
    }

    fn strip_scheme(value: &str) -> Option<&str> {
        for scheme in ["https://", "http://"] {
            if let Some(prefix) = value.get(..scheme.len()) {
                if prefix.eq_ignore_ascii_case(scheme) {
                    return Some(&value[scheme.len()..]);
                }
            }
        }
        None
    }

    pub fn test(value: &str) -> bool {
        let Some(rest) = strip_scheme(value) else {
            return false;
        };
        let mut s = Scanner::new(rest);
        if s.take_while(is_host_char).is_empty() {
            return false;
        }
        if s.eat(':') && s.digits1().is_none() {
            return false;
        }
        while s.eat('/') {
            s.take_while(is_path_char);
        }
        if s.eat('?') {
            s.take_while(is_query_char);
        }
        if s.eat('#') {
            s.take_while(|c| is_word(c) || c == '-');
        }
        s.at_end()
    }

    /// A path on its own: zero or more `/segment` groups.
    pub mod path {
        use super::*;

        pub fn test(value: &str) -> bool {
            let mut s = Scanner::new(value);
            while s.eat('/') {
                s.take_while(is_path_char);
            }
            s.at_end()
        }
    }
}

/// A language tag shape: a 1–3 letter primary subtag plus `-`-separated
/// alphanumeric subtags of up to eight characters, case-insensitive.
pub mod language {
    pub fn test(value: &str) -> bool {
        let mut subtags = value.split('-');
        let primary = subtags.next().unwrap_or("");
        matches!(primary.len(), 1..=3)
            && primary.chars().all(|c| c.is_ascii_alphabetic())
            && subtags.all(|tag| {
                matches!(tag.len(), 1..=8) && tag.chars().all(|c| c.is_ascii_alphanumeric())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv4_accepts_and_parses() {
        assert!(ip::v4::test("0.0.0.0"));
        assert!(ip::v4::test("255.255.255.255"));
        assert!(ip::v4::test("000.000.000.000"));
        assert_eq!(ip::v4::parse("192.168.0.1"), Some([192, 168, 0, 1]));
        assert_eq!(ip::v4::parse("010.001.0.1"), Some([10, 1, 0, 1]));

        let p = ip::v4::parts("192.168.0.1").unwrap();
        assert_eq!(p.octets, ["192", "168", "0", "1"]);
    }

    #[test]
    fn ipv4_rejects() {
        assert!(!ip::v4::test("256.0.0.1"));
        assert!(!ip::v4::test("1.2.3"));
        assert!(!ip::v4::test("1.2.3.4.5"));
        assert!(!ip::v4::test("1.2.3.0004"));
        assert!(!ip::v4::test("1.2.3.4 "));
        assert!(!ip::v4::test(""));
    }

    #[test]
    fn ipv6_full_form() {
        assert!(ip::v6::test("0:0:0:0:0:0:0:1"));
        assert!(ip::v6::test("FFFF:ffff:FFFF:ffff:FFFF:ffff:FFFF:ffff"));
        assert!(ip::v6::test("0:0:0:0:0:FFFF:192.168.0.1"));
        assert!(!ip::v6::test("1:2:3:4:5:6:7"));
        assert!(!ip::v6::test("1:2:3:4:5:6:7:8:9"));
        assert!(!ip::v6::test("1:2:3:4:5:6:7:fffff"));
    }

    #[test]
    fn ipv6_compressed_form() {
        assert!(ip::v6::test("::"));
        assert!(ip::v6::test("::1"));
        assert!(ip::v6::test("fe80::1"));
        assert!(ip::v6::test("::1:192.168.0.1"));
        assert!(ip::v6::test("::ffff:192.168.0.1"));
        assert!(ip::v6::test("1:2:3:4:5:6:7::"));
        assert!(!ip::v6::test("1:2:3:4:5:6:7:8::"));
        assert!(!ip::v6::test("1::2::3"));
        assert!(!ip::v6::test(":::"));
        assert!(!ip::v6::test(":1:2:3"));
    }

    #[test]
    fn ip_either_family() {
        assert!(ip::test("127.0.0.1"));
        assert!(ip::test("::1"));
        assert!(!ip::test("localhost"));
    }

    #[test]
    fn email_shapes() {
        assert!(email::test("test@example.com"));
        assert!(email::test("a.b+c@sub.example.org"));
        assert!(!email::test("test@example"));
        assert!(!email::test("@example.com"));
        assert!(!email::test(".test@example.com"));
        assert!(!email::test("test.@example.com"));
        assert!(!email::test("test@.example.com"));
        assert!(!email::test("test@exa..mple.com"));
        assert!(!email::test("test@example.c0m"));

        let p = email::parts("test@example.com").unwrap();
        assert_eq!((p.local, p.domain), ("test", "example.com"));
    }

    #[test]
    fn iri_shapes() {
        assert!(iri::test("http://example.org/path"));
        assert!(iri::test("urn:uuid:1234"));
        assert!(iri::test("MAILTO:someone@example.org"));
        assert!(!iri::test("no-colon"));
        assert!(!iri::test("1http://x"));
        assert!(!iri::test("http://bad space"));

        assert!(iri::prefix::test("https"));
        assert!(iri::prefix::test("x-custom"));
        assert!(!iri::prefix::test("9x"));
        assert!(!iri::prefix::test(""));
    }

    #[test]
    fn url_shapes() {
        assert!(url::test("http://example.org"));
        assert!(url::test("HTTPS://example.org:8080/a/b.c?x=1&y=2#frag"));
        assert!(url::test("http://example.org/"));
        assert!(!url::test("ftp://example.org"));
        assert!(!url::test("http://"));
        assert!(!url::test("http://example.org:port"));
        assert!(!url::test("http://example.org/a b"));

        assert!(url::path::test(""));
        assert!(url::path::test("/a/b"));
        assert!(!url::path::test("a/b"));
    }

    #[test]
    fn language_tags() {
        assert!(language::test("en"));
        assert!(language::test("en-US"));
        assert!(language::test("zh-Hant-TW"));
        assert!(language::test("x-1234"));
        assert!(!language::test(""));
        assert!(!language::test("english"));
        assert!(!language::test("en-"));
        assert!(!language::test("en-waytoolong1"));
    }
}
