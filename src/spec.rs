//! Format reference
//!
//! This module documents the grammars accepted by this crate and the
//! normalization rules their parsers apply. It contains no code.
//!
//! # The three-tier surface
//!
//! Every format module exposes up to three functions over the same
//! grammar:
//!
//! - `test(value) -> bool` — full-string validity. The entire input must
//!   match; a valid prefix followed by anything else is invalid.
//! - `parts(value) -> Option<Parts>` — the named syntactic components,
//!   borrowed from the input. Present exactly when `test` is `true`;
//!   never a partial result for an invalid input.
//! - `parse(value) -> Option<Value>` — the normalized, typed value,
//!   built from the components. Present exactly when `parts` is.
//!
//! The three tiers agree for every input because they drive one shared
//! scan per format. Single-predicate formats (the `web` module) expose
//! `test` alone and satisfy the contract trivially.
//!
//! Malformed input is an expected outcome, reported as `false`/`None`.
//! No format function panics, performs I/O, or touches shared state; all
//! scanning state is local to the call.
//!
//! # XSD lexical forms
//!
//! ## Numeric
//!
//! ```text
//! decimal  = [+-]? ( digits [ "." digits* ] | "." digits )
//! integer  = [+-]? digits
//! float    = "NaN" | [+-]? "INF" | decimal [ ("e"|"E") [+-]? digits ]
//! ```
//!
//! Component normalization (applied by `parts`):
//!
//! - a missing sign reads as `+`;
//! - leading zeros of integer components and trailing zeros of decimal
//!   fractions are stripped; a run of only zeros becomes `"0"`;
//! - `NaN` and `INF` are whole-string sentinels dispatched before any
//!   numeric assembly.
//!
//! `integer` parses into [`Int`](crate::Int), which is arbitrary
//! precision; `decimal` and `float` parse into `f64` with that type's
//! usual rounding.
//!
//! ## Calendar
//!
//! ```text
//! year     = "-"? nonzero-digit digits*          (year 0 excluded)
//! month    = "01".."12"        day    = "01".."31"
//! hour     = "00".."23"        minute = "00".."59"
//! second   = "00".."59" [ "." digits ]
//! tz       = "Z" | ("+"|"-") "00".."12" ":" "00".."59"
//!
//! date          = year "-" month "-" day  tz?
//! time          = hour ":" minute ":" second  tz?
//! dateTime      = date "T" time  tz?             (one tz, after the time)
//! dateTimeStamp = date "T" time "Z"              (literal Z only)
//! gYear         = year tz?           gMonth    = "--" month tz?
//! gDay          = "---" day tz?      gYearMonth = year "-" month tz?
//! gMonthDay     = "--" month "-" day tz?
//! ```
//!
//! Day bounds are lexical only — `--02-31` is accepted; projecting onto a
//! real calendar is the job of the chrono conversions, which reject it.
//!
//! Parsed values carry:
//!
//! - `offset`: signed total minutes, present iff an explicit `±hh:mm`
//!   suffix was given (`-05:30` → `-330`);
//! - `utc`: `true` iff the suffix was a literal `Z` or the computed
//!   offset is exactly zero (`+00:00` and `-00:00` both qualify);
//! - `millisecond = round(1000 × (seconds − floor(seconds)))`. The
//!   rounding does not carry: `…:59.9999` yields `millisecond: 1000`.
//!
//! Formats with an optional `tz` also expose a `tz` submodule requiring
//! it. Years must fit `i64`; a longer digit run fails the match in all
//! three tiers.
//!
//! ## Duration
//!
//! ```text
//! duration = "-"? "P" (digits "Y")? (digits "M")? (digits "D")?
//!            ( "T" (digits "H")? (digits "M")? (digits? ("." digits)? "S")? )?
//! ```
//!
//! At least one component must be present: `P` and `PT` alone are
//! invalid, as is a `T` with nothing after it. The seconds component
//! admits an empty integer part (`PT.5S`, `PTS`). Components read as zero
//! when absent; the fractional seconds round to milliseconds as above.
//!
//! ## Timezone
//!
//! The `tz` suffix as a standalone format, parsing to
//! [`Timezone`](crate::Timezone).
//!
//! # Media-type header values
//!
//! ```text
//! media-type    = token "/" token *( OWS ";" OWS parameter )
//! parameter     = token "=" ( token | quoted-string )
//! token         = 1*( ALPHA / DIGIT / "!#$%&'*+-.^_`|~" )
//! quoted-string = DQUOTE *( qdtext / "\" escapable ) DQUOTE
//! OWS           = *( SP / HTAB )
//! ```
//!
//! `qdtext` covers HTAB, SP, `!`, `#`–`[`, `]`–`~` and everything above
//! ASCII; `escapable` additionally covers `"` and `\`. Parameters are
//! matched one unit at a time at the current position, and the value is
//! valid only when the scan ends exactly at the end of input: a trailing
//! `;` with nothing after it rejects the whole header. Quoted values are
//! returned without their quotes but otherwise verbatim — escapes are
//! not decoded.
//!
//! Repeated parameter names aggregate into lists in occurrence order;
//! the first occurrence fixes the name's position in the map.
//!
//! # Node identifiers
//!
//! ```text
//! nid       = "ns=" ( digits | ("http" | "https") "://" 1*(not ";") ) ";" payload
//! payload   = "i=" digits                  integer id, u64
//!           | "s=" 1*4096( not whitespace )  string id
//!           | "g=" 8HEX "-" 4HEX "-" 4HEX "-" 4HEX "-" 12HEX
//!           | "o=" 0*4096( any )             opaque id
//! ```
//!
//! Exactly one payload branch matches; the parser reports the branch as a
//! one-character kind (`i`, `s`, `g`, `o`). A numeric namespace index must
//! fit `u32` and a numeric id `u64`; longer runs fail the match.

// Documentation only.
