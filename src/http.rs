//! Media-type header values.
//!
//! [`content_type`] parses a single `type/subtype` value with an optional
//! `; name=value` parameter list, the value syntax of a `Content-Type`
//! header. Header folding and any other transport concerns are out of
//! scope; the input is one already-extracted header value.
//!
//! The parameter list is matched one unit at a time at the current scan
//! position, never as a single greedy match over the whole tail: quoted
//! parameter values may themselves contain the `;` delimiter. The header is
//! valid only when the unit scan consumes the input exactly — a trailing
//! delimiter with nothing after it, or any other unmatched tail, rejects
//! the whole value even though a prefix matched.
//!
//! Quoted values are kept verbatim: the surrounding quotes are dropped but
//! escape sequences inside are preserved, the payload being treated as
//! opaque text.
//!
//! ## Examples
//!
//! ```rust
//! use lexform::http::content_type;
//!
//! let media = content_type::parse("text/html; charset=utf-8").unwrap();
//! assert_eq!(media.format, "text/html");
//! assert_eq!(media.param.get("charset").unwrap().as_str(), Some("utf-8"));
//!
//! assert!(!content_type::test("text/html; charset=utf-8; "));
//! ```

use crate::map::ParamMap;
use crate::scan::Scanner;
use serde::Serialize;

/// A parsed media-type header value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaType<'a> {
    /// The `type/subtype` pair, verbatim.
    pub format: &'a str,
    /// Parameters in first-seen order, repeats aggregated into lists.
    pub param: ParamMap<'a>,
}

/// Token characters per RFC 7230: letters, digits and a fixed punctuation
/// set, excluding all delimiters.
fn is_tchar(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '.' | '^' | '_' | '`' | '|'
                | '~'
        )
}

/// Characters allowed unescaped inside a quoted string.
fn is_qdtext(c: char) -> bool {
    matches!(c, '\t' | ' ' | '\x21' | '\x23'..='\x5b' | '\x5d'..='\x7e') || c >= '\u{80}'
}

/// Characters allowed after a backslash inside a quoted string.
fn is_escapable(c: char) -> bool {
    matches!(c, '\t' | ' ' | '\x21'..='\x7e') || c >= '\u{80}'
}

fn skip_ows(s: &mut Scanner<'_>) {
    s.take_while(|c| c == ' ' || c == '\t');
}

fn scan_token<'a>(s: &mut Scanner<'a>) -> Option<&'a str> {
    let run = s.take_while(is_tchar);
    if run.is_empty() {
        None
    } else {
        Some(run)
    }
}

/// A parameter value: a bare token, or a quoted string returned without its
/// quotes and with escapes intact.
fn scan_value<'a>(s: &mut Scanner<'a>) -> Option<&'a str> {
    if !s.eat('"') {
        return scan_token(s);
    }
    let start = s.pos();
    loop {
        match s.peek()? {
            '"' => {
                let value = s.slice(start);
                s.bump();
                return Some(value);
            }
            '\\' => {
                s.bump();
                let escaped = s.peek()?;
                if !is_escapable(escaped) {
                    return None;
                }
                s.bump();
            }
            c if is_qdtext(c) => {
                s.bump();
            }
            _ => return None,
        }
    }
}

fn scan_parameter<'a>(s: &mut Scanner<'a>) -> Option<(&'a str, &'a str)> {
    let name = scan_token(s)?;
    s.eat('=').then_some(())?;
    let value = scan_value(s)?;
    Some((name, value))
}

/// The `Content-Type` value grammar:
/// `type "/" subtype *( OWS ";" OWS parameter )`.
pub mod content_type {
    use super::*;

    /// Named components: the `type/subtype` pair and the raw parameter
    /// pairs in occurrence order, before any aggregation.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ContentTypeParts<'a> {
        pub format: &'a str,
        pub params: Vec<(&'a str, &'a str)>,
    }

    fn scan(input: &str) -> Option<ContentTypeParts<'_>> {
        let mut s = Scanner::new(input);
        let start = s.pos();
        scan_token(&mut s)?;
        s.eat('/').then_some(())?;
        scan_token(&mut s)?;
        let format = s.slice(start);
        let mut params = Vec::new();
        // One unit per iteration; valid only if the loop ends exactly at
        // the end of input.
        while !s.at_end() {
            skip_ows(&mut s);
            s.eat(';').then_some(())?;
            skip_ows(&mut s);
            params.push(scan_parameter(&mut s)?);
        }
        Some(ContentTypeParts { format, params })
    }

    pub fn test(value: &str) -> bool {
        scan(value).is_some()
    }

    pub fn parts(value: &str) -> Option<ContentTypeParts<'_>> {
        scan(value)
    }

    pub fn parse(value: &str) -> Option<MediaType<'_>> {
        let p = scan(value)?;
        Some(MediaType {
            format: p.format,
            param: p.params.into_iter().collect(),
        })
    }

    /// A parameter list on its own, without the `type/subtype` prefix.
    /// The empty string is a valid empty list.
    pub mod param {
        use super::*;

        fn scan(input: &str) -> Option<Vec<(&str, &str)>> {
            let mut s = Scanner::new(input);
            let mut params = Vec::new();
            if s.at_end() {
                return Some(params);
            }
            loop {
                params.push(scan_parameter(&mut s)?);
                if s.at_end() {
                    return Some(params);
                }
                skip_ows(&mut s);
                s.eat(';').then_some(())?;
                skip_ows(&mut s);
                // A delimiter must introduce another parameter.
                if s.at_end() {
                    return None;
                }
            }
        }

        pub fn test(value: &str) -> bool {
            scan(value).is_some()
        }

        pub fn parts(value: &str) -> Option<Vec<(&str, &str)>> {
            scan(value)
        }

        pub fn parse(value: &str) -> Option<ParamMap<'_>> {
            Some(scan(value)?.into_iter().collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::ParamValue;

    #[test]
    fn bare_media_type() {
        assert!(content_type::test("text/plain"));
        let media = content_type::parse("text/plain").unwrap();
        assert_eq!(media.format, "text/plain");
        assert!(media.param.is_empty());
    }

    #[test]
    fn rejects_without_separator() {
        assert!(!content_type::test("Hello World!"));
        assert!(!content_type::test("text"));
        assert!(!content_type::test("text/"));
        assert!(!content_type::test("/plain"));
        assert!(content_type::parts("Hello World!").is_none());
        assert!(content_type::parse("Hello World!").is_none());
    }

    #[test]
    fn parameters_with_ows() {
        assert!(content_type::test("text/html; charset=utf-8; boundary=something"));
        assert!(content_type::test("text/html;charset=utf-8"));
        assert!(content_type::test("text/html  ;\tcharset=utf-8"));

        let media = content_type::parse("text/html;charset=utf-8").unwrap();
        assert_eq!(media.param.get("charset").unwrap().as_str(), Some("utf-8"));
    }

    #[test]
    fn full_consumption_is_required() {
        assert!(!content_type::test("text/html; charset=utf-8; "));
        assert!(!content_type::test("text/html; charset=utf-8;"));
        assert!(!content_type::test("text/html; charset"));
        assert!(!content_type::test("text/html; charset=utf-8 x"));
        assert!(!content_type::test("text/html "));
    }

    #[test]
    fn quoted_values_may_contain_delimiters() {
        let media = content_type::parse("multipart/mixed; boundary=\"a;b=c\"").unwrap();
        assert_eq!(media.param.get("boundary").unwrap().as_str(), Some("a;b=c"));
    }

    #[test]
    fn escapes_are_preserved_verbatim() {
        let media = content_type::parse("text/plain; note=\"say \\\"hi\\\"\"").unwrap();
        assert_eq!(
            media.param.get("note").unwrap().as_str(),
            Some("say \\\"hi\\\"")
        );
    }

    #[test]
    fn unterminated_quote_rejects() {
        assert!(!content_type::test("text/plain; a=\"open"));
        assert!(!content_type::test("text/plain; a=\"bad\\"));
        assert!(!content_type::test("text/plain; a=\"bad\\\n\""));
    }

    #[test]
    fn duplicate_names_aggregate_in_order() {
        let media = content_type::parse(
            "text/html; charset=utf-8; boundary=something; literal=\"Hello World!\"; literal=\"\"",
        )
        .unwrap();
        assert_eq!(media.format, "text/html");
        assert_eq!(media.param.get("charset").unwrap().as_str(), Some("utf-8"));
        assert_eq!(
            media.param.get("boundary").unwrap().as_str(),
            Some("something")
        );
        assert_eq!(
            media.param.get("literal"),
            Some(&ParamValue::Many(vec!["Hello World!", ""]))
        );
    }

    #[test]
    fn param_list_alone() {
        assert!(content_type::param::test(""));
        assert!(content_type::param::test("charset=utf-8; boundary=something"));
        assert!(!content_type::param::test("Hello World!"));
        assert!(!content_type::param::test("charset=utf-8; "));
        assert!(!content_type::param::test("  charset=utf-8 "));

        let map = content_type::param::parse(
            "charset=utf-8; boundary=something; literal=\"Hello World!\"; literal=\"\"",
        )
        .unwrap();
        assert_eq!(map.get("charset").unwrap().as_str(), Some("utf-8"));
        assert_eq!(map.get("boundary").unwrap().as_str(), Some("something"));
        assert_eq!(map.get("literal").unwrap().as_list(), ["Hello World!", ""]);
    }

    #[test]
    fn empty_quoted_value() {
        let map = content_type::param::parse("a=\"\"").unwrap();
        assert_eq!(map.get("a").unwrap().as_str(), Some(""));
    }

    #[test]
    fn serde_record_shape() {
        let media = content_type::parse("text/html; a=1; a=2; b=x").unwrap();
        assert_eq!(
            serde_json::to_value(&media).unwrap(),
            serde_json::json!({
                "format": "text/html",
                "param": {"a": ["1", "2"], "b": "x"}
            })
        );
    }
}
