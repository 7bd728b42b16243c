//! Shared value vocabulary for the format parsers.
//!
//! Two types are used across several formats and therefore live here rather
//! than with any single grammar:
//!
//! - [`Int`]: an integer parsed from an unbounded decimal lexical form,
//!   kept as an `i64` when it fits and promoted to a [`BigInt`] otherwise.
//! - [`Timezone`]: normalized timezone information — a signed offset in
//!   total minutes plus a UTC flag — shared by all calendar formats and by
//!   the standalone timezone format.
//!
//! ## Examples
//!
//! ```rust
//! use lexform::{xsd, Int};
//!
//! let small = xsd::integer::parse("+007").unwrap();
//! assert_eq!(small, 7);
//!
//! let big = xsd::integer::parse("123456789012345678901234567890").unwrap();
//! assert!(big.as_i64().is_none());
//! ```

use crate::error::Error;
use num_bigint::BigInt;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An integer parsed from a decimal lexical form of unbounded length.
///
/// The lexical space of `xsd:integer` has no size limit, so parsing cannot
/// lose values to a fixed-width type: anything outside `i64` is promoted to
/// an arbitrary-precision [`BigInt`].
///
/// # Examples
///
/// ```rust
/// use lexform::Int;
///
/// let n = Int::from(42);
/// assert_eq!(n.as_i64(), Some(42));
/// assert_eq!(n, 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Int {
    Small(i64),
    Big(BigInt),
}

impl Int {
    /// Parses an optionally signed decimal string. `None` only for text
    /// that is not a decimal integer at all.
    pub(crate) fn from_decimal_str(text: &str) -> Option<Self> {
        if let Ok(small) = text.parse::<i64>() {
            return Some(Int::Small(small));
        }
        text.parse::<BigInt>().ok().map(Int::Big)
    }

    /// Returns `true` if the value fits in an `i64`.
    #[inline]
    #[must_use]
    pub const fn is_small(&self) -> bool {
        matches!(self, Int::Small(_))
    }

    /// Returns the value as `i64` when it fits.
    ///
    /// `Big` values are only ever constructed for magnitudes outside the
    /// `i64` range, so this is `None` exactly for them.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Int::Small(small) => Some(*small),
            Int::Big(_) => None,
        }
    }

    /// Returns the value as `f64`, with the usual precision loss for large
    /// magnitudes (saturating to infinity far beyond `f64` range).
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Int::Small(small) => *small as f64,
            Int::Big(big) => big.to_string().parse().unwrap_or(f64::NAN),
        }
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Int::Small(small) => write!(f, "{small}"),
            Int::Big(big) => write!(f, "{big}"),
        }
    }
}

impl From<i64> for Int {
    fn from(value: i64) -> Self {
        Int::Small(value)
    }
}

impl From<BigInt> for Int {
    fn from(value: BigInt) -> Self {
        Int::Big(value)
    }
}

impl PartialEq<i64> for Int {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == Some(*other)
    }
}

impl TryFrom<Int> for i64 {
    type Error = Error;

    fn try_from(value: Int) -> Result<Self, Error> {
        match value {
            Int::Small(small) => Ok(small),
            Int::Big(big) => Err(Error::out_of_range("i64", big)),
        }
    }
}

impl Serialize for Int {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Int::Small(small) => serializer.serialize_i64(*small),
            // Outside i64, a decimal string is the only faithful wire form.
            Int::Big(big) => serializer.collect_str(big),
        }
    }
}

impl<'de> Deserialize<'de> for Int {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IntVisitor;

        impl Visitor<'_> for IntVisitor {
            type Value = Int;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or a decimal integer string")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Int, E> {
                Ok(Int::Small(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Int, E> {
                Ok(i64::try_from(value)
                    .map(Int::Small)
                    .unwrap_or_else(|_| Int::Big(BigInt::from(value))))
            }

            fn visit_str<E>(self, value: &str) -> Result<Int, E>
            where
                E: de::Error,
            {
                Int::from_decimal_str(value)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_any(IntVisitor)
    }
}

/// Normalized timezone information.
///
/// `offset` is the signed total offset in minutes and is present exactly
/// when the input carried an explicit `±hh:mm` suffix. `utc` is `true` when
/// the input carried an explicit `Z` marker or when the computed offset is
/// exactly zero. A value parsed from timezone-less input has neither.
///
/// Calendar values embed a `Timezone` with serde `flatten`, so records
/// serialize with `offset`/`utc` present only when meaningful.
///
/// # Examples
///
/// ```rust
/// use lexform::xsd;
///
/// let date = xsd::date::parse("2024-01-01+00:00").unwrap();
/// assert_eq!(date.tz.offset, Some(0));
/// assert!(date.tz.utc);
///
/// let date = xsd::date::parse("2024-01-01").unwrap();
/// assert!(!date.tz.is_present());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timezone {
    /// Signed offset from UTC in total minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i16>,
    /// Explicit UTC marker, or a computed offset of exactly zero.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub utc: bool,
}

impl Timezone {
    /// Builds a timezone from scanned suffix components. The single place
    /// where offset computation and UTC-flag derivation happen.
    pub(crate) fn from_parts(
        sign: Option<char>,
        hour: Option<u8>,
        minute: Option<u8>,
        utc_marker: bool,
    ) -> Self {
        let mut tz = Timezone::default();
        if let (Some(sign), Some(hour), Some(minute)) = (sign, hour, minute) {
            let total = 60 * i16::from(hour) + i16::from(minute);
            tz.offset = Some(if sign == '-' { -total } else { total });
        }
        if utc_marker || tz.offset == Some(0) {
            tz.utc = true;
        }
        tz
    }

    /// `true` when any timezone information was present in the input.
    #[inline]
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.offset.is_some() || self.utc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_small_and_big() {
        assert_eq!(Int::from_decimal_str("-42"), Some(Int::Small(-42)));
        assert_eq!(Int::from_decimal_str("+42"), Some(Int::Small(42)));
        assert_eq!(Int::from_decimal_str("x"), None);

        let big = Int::from_decimal_str("123456789012345678901234567890").unwrap();
        assert!(!big.is_small());
        assert_eq!(big.as_i64(), None);
        assert_eq!(big.to_string(), "123456789012345678901234567890");
    }

    #[test]
    fn int_compares_against_i64() {
        assert_eq!(Int::Small(7), 7);
        assert_ne!(Int::from_decimal_str("99999999999999999999").unwrap(), 0);
    }

    #[test]
    fn int_narrowing() {
        assert_eq!(i64::try_from(Int::Small(5)), Ok(5));
        let big = Int::from_decimal_str("99999999999999999999").unwrap();
        assert!(i64::try_from(big).is_err());
    }

    #[test]
    fn int_as_f64_survives_big_values() {
        let big = Int::from_decimal_str("100000000000000000000").unwrap();
        assert_eq!(big.as_f64(), 1e20);
    }

    #[test]
    fn int_serde_shapes() {
        let small = serde_json::to_value(Int::Small(42)).unwrap();
        assert_eq!(small, serde_json::json!(42));

        let big = Int::from_decimal_str("123456789012345678901234567890").unwrap();
        let json = serde_json::to_value(&big).unwrap();
        assert_eq!(json, serde_json::json!("123456789012345678901234567890"));

        let back: Int = serde_json::from_value(json).unwrap();
        assert_eq!(back, big);
    }

    #[test]
    fn timezone_offset_computation() {
        let tz = Timezone::from_parts(Some('-'), Some(5), Some(30), false);
        assert_eq!(tz.offset, Some(-330));
        assert!(!tz.utc);

        let tz = Timezone::from_parts(Some('+'), Some(1), Some(0), false);
        assert_eq!(tz.offset, Some(60));
    }

    #[test]
    fn timezone_utc_derivation() {
        let explicit = Timezone::from_parts(None, None, None, true);
        assert!(explicit.utc);
        assert_eq!(explicit.offset, None);

        let zero = Timezone::from_parts(Some('+'), Some(0), Some(0), false);
        assert!(zero.utc);
        assert_eq!(zero.offset, Some(0));

        let negative_zero = Timezone::from_parts(Some('-'), Some(0), Some(0), false);
        assert!(negative_zero.utc);
        assert_eq!(negative_zero.offset, Some(0));
    }

    #[test]
    fn timezone_serde_omits_absent_fields() {
        let none = Timezone::default();
        assert_eq!(serde_json::to_value(none).unwrap(), serde_json::json!({}));

        let utc = Timezone::from_parts(None, None, None, true);
        assert_eq!(
            serde_json::to_value(utc).unwrap(),
            serde_json::json!({"utc": true})
        );
    }
}
