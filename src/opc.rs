//! Structured node identifiers.
//!
//! [`nid`] parses compound identifiers of the form `ns=<namespace>;<kind>=
//! <payload>`: a namespace selector (numeric index or `http(s)` URI)
//! paired with a discriminated payload — integer id (`i=`), string id
//! (`s=`, at most 4096 non-whitespace characters), GUID-shaped token
//! (`g=`, hex groups 8-4-4-4-12) or opaque token (`o=`, at most 4096
//! characters of any content). The four branches are prefix-disjoint;
//! dispatch order is integer, string, guid, opaque.
//!
//! Numeric namespace indices are bounded to `u32` and numeric ids to
//! `u64`; a digit run outside those bounds fails the match in all three
//! tiers.
//!
//! ## Examples
//!
//! ```rust
//! use lexform::opc::{nid, Identifier, Namespace};
//!
//! let id = nid::parse("ns=2;s=hello").unwrap();
//! assert_eq!(id.ns, Namespace::Index(2));
//! assert_eq!(id.id, Identifier::Str("hello"));
//! assert_eq!(id.id.kind(), 's');
//! ```

use crate::scan::Scanner;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

const MAX_PAYLOAD_CHARS: usize = 4096;

/// Named captures of a node identifier: exactly one namespace capture and
/// exactly one payload capture are present for a valid input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeIdParts<'a> {
    pub ns_index: Option<&'a str>,
    pub ns_uri: Option<&'a str>,
    pub numeric_id: Option<&'a str>,
    pub string_id: Option<&'a str>,
    pub guid_id: Option<&'a str>,
    pub opaque_id: Option<&'a str>,
}

/// A namespace selector: numeric index or URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Namespace<'a> {
    Index(u32),
    Uri(&'a str),
}

/// A discriminated identifier payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier<'a> {
    Numeric(u64),
    Str(&'a str),
    Guid(&'a str),
    Opaque(&'a str),
}

impl Identifier<'_> {
    /// The one-character kind discriminator: `i`, `s`, `g` or `o`.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> char {
        match self {
            Identifier::Numeric(_) => 'i',
            Identifier::Str(_) => 's',
            Identifier::Guid(_) => 'g',
            Identifier::Opaque(_) => 'o',
        }
    }
}

/// A parsed node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId<'a> {
    pub ns: Namespace<'a>,
    pub id: Identifier<'a>,
}

impl Serialize for NodeId<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut record = serializer.serialize_struct("NodeId", 3)?;
        record.serialize_field("ns", &self.ns)?;
        record.serialize_field("type", &self.id.kind())?;
        match &self.id {
            Identifier::Numeric(id) => record.serialize_field("id", id)?,
            Identifier::Str(id) | Identifier::Guid(id) | Identifier::Opaque(id) => {
                record.serialize_field("id", id)?;
            }
        }
        record.end()
    }
}

fn scan_guid<'a>(s: &mut Scanner<'a>) -> Option<&'a str> {
    let start = s.pos();
    s.hex_run(8)?;
    for width in [4, 4, 4, 12] {
        s.eat('-').then_some(())?;
        s.hex_run(width)?;
    }
    Some(s.slice(start))
}

fn scan_node_id(input: &str) -> Option<NodeIdParts<'_>> {
    let mut s = Scanner::new(input);
    s.eat_str("ns=").then_some(())?;
    let mut parts = NodeIdParts::default();
    if s.peek().is_some_and(|c| c.is_ascii_digit()) {
        let run = s.digits();
        run.parse::<u32>().ok()?;
        parts.ns_index = Some(run);
    } else {
        let start = s.pos();
        s.eat_str("http").then_some(())?;
        s.eat('s');
        s.eat_str("://").then_some(())?;
        if s.take_while(|c| c != ';').is_empty() {
            return None;
        }
        parts.ns_uri = Some(s.slice(start));
    }
    s.eat(';').then_some(())?;
    if s.eat_str("i=") {
        let run = s.digits1()?;
        run.parse::<u64>().ok()?;
        s.at_end().then_some(())?;
        parts.numeric_id = Some(run);
    } else if s.eat_str("s=") {
        let run = s.take_while(|c| !c.is_whitespace());
        if run.is_empty() || run.chars().count() > MAX_PAYLOAD_CHARS || !s.at_end() {
            return None;
        }
        parts.string_id = Some(run);
    } else if s.eat_str("g=") {
        let run = scan_guid(&mut s)?;
        s.at_end().then_some(())?;
        parts.guid_id = Some(run);
    } else if s.eat_str("o=") {
        let run = s.rest();
        if run.chars().count() > MAX_PAYLOAD_CHARS {
            return None;
        }
        parts.opaque_id = Some(run);
    } else {
        return None;
    }
    Some(parts)
}

/// The node-identifier grammar.
pub mod nid {
    use super::*;

    pub fn test(value: &str) -> bool {
        scan_node_id(value).is_some()
    }

    pub fn parts(value: &str) -> Option<NodeIdParts<'_>> {
        scan_node_id(value)
    }

    pub fn parse(value: &str) -> Option<NodeId<'_>> {
        let p = parts(value)?;
        let ns = match p.ns_uri {
            Some(uri) => Namespace::Uri(uri),
            None => Namespace::Index(p.ns_index.and_then(|run| run.parse().ok()).unwrap_or(0)),
        };
        let id = if let Some(run) = p.numeric_id {
            Identifier::Numeric(run.parse().ok()?)
        } else if let Some(text) = p.string_id {
            Identifier::Str(text)
        } else if let Some(guid) = p.guid_id {
            Identifier::Guid(guid)
        } else {
            Identifier::Opaque(p.opaque_id?)
        };
        Some(NodeId { ns, id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_namespace_and_string_id() {
        let id = nid::parse("ns=2;s=hello").unwrap();
        assert_eq!(id.ns, Namespace::Index(2));
        assert_eq!(id.id, Identifier::Str("hello"));
        assert_eq!(id.id.kind(), 's');
    }

    #[test]
    fn uri_namespace_and_integer_id() {
        let id = nid::parse("ns=http://x;i=42").unwrap();
        assert_eq!(id.ns, Namespace::Uri("http://x"));
        assert_eq!(id.id, Identifier::Numeric(42));
        assert_eq!(id.id.kind(), 'i');

        let id = nid::parse("ns=https://example.org/ua;i=0").unwrap();
        assert_eq!(id.ns, Namespace::Uri("https://example.org/ua"));
    }

    #[test]
    fn guid_id_shape() {
        let value = "ns=1;g=09087e75-8e5e-499b-954f-f2a9603db28a";
        let id = nid::parse(value).unwrap();
        assert_eq!(id.id.kind(), 'g');
        assert_eq!(id.id, Identifier::Guid("09087e75-8e5e-499b-954f-f2a9603db28a"));

        assert!(!nid::test("ns=1;g=09087e75-8e5e-499b-954f"));
        assert!(!nid::test("ns=1;g=09087g75-8e5e-499b-954f-f2a9603db28a"));
    }

    #[test]
    fn opaque_id_accepts_anything_bounded() {
        let id = nid::parse("ns=3;o=").unwrap();
        assert_eq!(id.id, Identifier::Opaque(""));

        let id = nid::parse("ns=3;o=a;b c=d").unwrap();
        assert_eq!(id.id, Identifier::Opaque("a;b c=d"));
        assert_eq!(id.id.kind(), 'o');

        let long = format!("ns=3;o={}", "x".repeat(4096));
        assert!(nid::test(&long));
        let too_long = format!("ns=3;o={}", "x".repeat(4097));
        assert!(!nid::test(&too_long));
    }

    #[test]
    fn string_id_bounds() {
        assert!(!nid::test("ns=2;s="));
        assert!(!nid::test("ns=2;s=he llo"));
        let long = format!("ns=2;s={}", "x".repeat(4096));
        assert!(nid::test(&long));
        let too_long = format!("ns=2;s={}", "x".repeat(4097));
        assert!(!nid::test(&too_long));
    }

    #[test]
    fn malformed_shapes_reject() {
        assert!(!nid::test("ns=2"));
        assert!(!nid::test("ns=2;x=1"));
        assert!(!nid::test("ns=2;i=1x"));
        assert!(!nid::test("ns=2;i="));
        assert!(!nid::test("ns=;i=1"));
        assert!(!nid::test("ns=ftp://x;i=1"));
        assert!(!nid::test("ns=http://;i=1"));
        assert!(!nid::test("i=1"));
    }

    #[test]
    fn numeric_bounds_fail_every_tier() {
        let huge_ns = "ns=99999999999;i=1";
        assert!(!nid::test(huge_ns));
        assert!(nid::parts(huge_ns).is_none());
        assert!(nid::parse(huge_ns).is_none());

        let huge_id = "ns=1;i=99999999999999999999999";
        assert!(!nid::test(huge_id));
    }

    #[test]
    fn parts_captures_one_branch() {
        let p = nid::parts("ns=2;s=hello").unwrap();
        assert_eq!(p.ns_index, Some("2"));
        assert_eq!(p.ns_uri, None);
        assert_eq!(p.string_id, Some("hello"));
        assert_eq!(p.numeric_id, None);
    }

    #[test]
    fn serde_record_shape() {
        let id = nid::parse("ns=2;s=hello").unwrap();
        assert_eq!(
            serde_json::to_value(id).unwrap(),
            serde_json::json!({"ns": 2, "type": "s", "id": "hello"})
        );

        let id = nid::parse("ns=http://x;i=42").unwrap();
        assert_eq!(
            serde_json::to_value(id).unwrap(),
            serde_json::json!({"ns": "http://x", "type": "i", "id": 42})
        );
    }
}
