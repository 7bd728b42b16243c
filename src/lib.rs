//! # lexform
//!
//! Validators, matchers and parsers for a family of textual micro-formats:
//! XML-Schema (XSD) primitive lexical representations, media-type header
//! values, and compound node identifiers, plus a set of simple web-format
//! predicates.
//!
//! ## The three-tier surface
//!
//! Every format answers three questions about an input string, through
//! three functions over one shared grammar:
//!
//! - **`test`** — is the whole string valid? Partial matches never count.
//! - **`parts`** — what are its named syntactic components? Substrings
//!   borrowed from the input, `None` for invalid input.
//! - **`parse`** — what is its canonical typed value? Normalized (signs
//!   defaulted, zeros stripped, offsets computed), `None` for invalid
//!   input.
//!
//! The three tiers always agree: `test(s)` is `true` exactly when
//! `parts(s)` and `parse(s)` are present. Malformed input is an expected,
//! first-class outcome — never a panic, never an `Err`. The only fallible
//! operations are conversions *out of* parsed values (see [`error`]).
//!
//! ## Key features
//!
//! - **Explicit scanning**: every grammar is matched by a forward-only
//!   cursor, not a backtracking pattern engine, so matching is linear in
//!   the input and safe on hostile input.
//! - **Zero-copy components**: `parts` and string-bearing values borrow
//!   from the input.
//! - **One normalization path**: timezone offsets, UTC flags and
//!   fractional-second rounding are computed in a single place shared by
//!   all calendar formats.
//! - **Serde-ready values**: parsed records serialize to the natural JSON
//!   shapes, omitting absent fields.
//!
//! ## Quick start
//!
//! ```rust
//! use lexform::{http, opc, xsd};
//!
//! // XSD lexical values.
//! assert_eq!(xsd::integer::parse("+007").unwrap(), 7);
//! assert_eq!(xsd::float::parse("-INF"), Some(f64::NEG_INFINITY));
//!
//! let time = xsd::time::parse("12:03:59.123").unwrap();
//! assert_eq!(time.millisecond, 123);
//!
//! let date = xsd::date::parse("2024-01-01Z").unwrap();
//! assert!(date.tz.utc);
//!
//! // Media-type header values.
//! let media = http::content_type::parse("text/html; charset=utf-8").unwrap();
//! assert_eq!(media.format, "text/html");
//! assert_eq!(media.param.get("charset").unwrap().as_str(), Some("utf-8"));
//!
//! // A trailing delimiter invalidates the whole header.
//! assert!(!http::content_type::test("text/html; charset=utf-8; "));
//!
//! // Node identifiers.
//! let id = opc::nid::parse("ns=2;s=hello").unwrap();
//! assert_eq!(id.id.kind(), 's');
//! ```
//!
//! ## Format catalogue
//!
//! - [`xsd`] — decimal, integer, float, the calendar family, duration and
//!   timezone lexical forms.
//! - [`http`] — `Content-Type` header values with parameter aggregation.
//! - [`opc`] — `ns=…;kind=…` node identifiers.
//! - [`web`] — IP, email, IRI, URL and language-tag predicates.
//!
//! The accepted grammars and normalization rules are documented in
//! [`spec`].

pub mod error;
pub mod http;
pub mod map;
pub mod opc;
mod scan;
pub mod spec;
pub mod value;
pub mod web;
pub mod xsd;

pub use error::{Error, Result};
pub use http::MediaType;
pub use map::{ParamMap, ParamValue};
pub use opc::{Identifier, Namespace, NodeId};
pub use value::{Int, Timezone};
