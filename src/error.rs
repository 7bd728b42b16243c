//! Error types for value conversions.
//!
//! Malformed input is not an error in this crate: the grammar operations
//! (`test` / `parts` / `parse`) signal it by returning `false` or `None`,
//! and they never panic. [`Error`] exists solely for the fallible
//! conversions *out of* an already parsed value — narrowing a big integer,
//! or projecting a lexically valid calendar value onto a real calendar.
//!
//! ## Examples
//!
//! ```rust
//! use lexform::xsd;
//!
//! // Lexically valid, but February has no 30th day.
//! let date = xsd::date::parse("2024-02-30").unwrap();
//! assert!(date.to_naive_date().is_err());
//! ```

use thiserror::Error;

/// Errors produced by conversions out of parsed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A parsed component does not fit the requested machine type.
    #[error("{value} is out of range for {target}")]
    OutOfRange { target: &'static str, value: String },

    /// A lexically valid date that names no real calendar day.
    #[error("no such calendar date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i64, month: u8, day: u8 },

    /// A lexically valid time of day that the target representation rejects.
    #[error("no such time of day: {hour:02}:{minute:02}:{second:02}.{millisecond:03}")]
    InvalidTime {
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    },
}

impl Error {
    pub(crate) fn out_of_range(target: &'static str, value: impl ToString) -> Self {
        Error::OutOfRange {
            target,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_value() {
        let err = Error::out_of_range("u32", "99999999999");
        assert!(err.to_string().contains("99999999999"));
        assert!(err.to_string().contains("u32"));
    }

    #[test]
    fn display_formats_calendar_fields() {
        let err = Error::InvalidDate {
            year: 2024,
            month: 2,
            day: 30,
        };
        assert_eq!(err.to_string(), "no such calendar date: 2024-02-30");
    }
}
