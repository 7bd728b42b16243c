//! Lexical forms of the XML-Schema scalar types.
//!
//! Each format is a module with the three-tier surface described in the
//! crate docs: `test` (full-string validity), `parts` (named components,
//! borrowed from the input) and `parse` (normalized typed value). The
//! calendar formats share one parameterized scanner selecting a field
//! subset, so bounds checking, timezone-offset computation, UTC-flag
//! derivation and fractional-second rounding each live in exactly one
//! place.
//!
//! | Format | Shape | Parsed value |
//! |---|---|---|
//! | [`decimal`] | `[+-]? digits [. digits]` | `f64` |
//! | [`integer`] | `[+-]? digits` | [`Int`] |
//! | [`float`] | `NaN`, `[+-]?INF`, or decimal with exponent | `f64` |
//! | [`date`] | `YYYY-MM-DD` `tz?` | [`DateValue`] |
//! | [`time`] | `hh:mm:ss[.fff]` `tz?` | [`TimeValue`] |
//! | [`date_time`] | `YYYY-MM-DDThh:mm:ss[.fff]` `tz?` | [`DateTimeValue`] |
//! | [`date_time_stamp`] | `YYYY-MM-DDThh:mm:ss[.fff]Z` | [`DateTimeStampValue`] |
//! | [`g_year`] | `YYYY` `tz?` | [`GYearValue`] |
//! | [`g_month`] | `--MM` `tz?` | [`GMonthValue`] |
//! | [`g_day`] | `---DD` `tz?` | [`GDayValue`] |
//! | [`g_year_month`] | `YYYY-MM` `tz?` | [`GYearMonthValue`] |
//! | [`g_month_day`] | `--MM-DD` `tz?` | [`GMonthDayValue`] |
//! | [`duration`] | `[-]P…[T…]` | [`DurationValue`] |
//! | [`time_zone`] | `Z` or `±hh:mm` | [`Timezone`] |
//!
//! Calendar formats whose timezone suffix is optional also expose a `tz`
//! submodule with the same grammar but the suffix required, e.g.
//! [`date::tz::test`].
//!
//! Years and duration components may be arbitrarily long digit runs in the
//! XSD lexical space; here they accumulate with checked arithmetic and a
//! run outside `i64` fails the match, in all three tiers alike. Only
//! [`integer`] keeps the unbounded space, through its [`Int`] result.

use crate::error::{Error, Result};
use crate::scan::Scanner;
use crate::value::{Int, Timezone};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Structural parts
// ---------------------------------------------------------------------------

/// Named components of a calendar lexical form. Fields not selected by the
/// format's layout stay `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarParts<'a> {
    /// Year digits, including a leading `-` for negative years.
    pub year: Option<&'a str>,
    pub month: Option<&'a str>,
    pub day: Option<&'a str>,
    pub hour: Option<&'a str>,
    pub minute: Option<&'a str>,
    /// Seconds digits, including the fractional part when present.
    pub second: Option<&'a str>,
    pub tz_sign: Option<char>,
    pub tz_hour: Option<&'a str>,
    pub tz_minute: Option<&'a str>,
    /// `true` when the suffix was an explicit `Z`.
    pub utc_marker: bool,
}

/// Components of a decimal literal, sign defaulted and zeros stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalParts<'a> {
    pub sign: char,
    pub integer: &'a str,
    pub fraction: &'a str,
}

/// Components of an integer literal, sign defaulted and leading zeros
/// stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerParts<'a> {
    pub sign: char,
    pub digits: &'a str,
}

/// Components of a float literal: which branch matched, plus normalized
/// numeric components for the finite branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatParts<'a> {
    NaN,
    Infinite {
        sign: char,
    },
    Finite {
        sign: char,
        base: &'a str,
        exp_sign: char,
        exponent: &'a str,
    },
}

/// Components of a duration literal. Absent components stay `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationParts<'a> {
    pub negative: bool,
    pub years: Option<&'a str>,
    pub months: Option<&'a str>,
    pub days: Option<&'a str>,
    pub hours: Option<&'a str>,
    pub minutes: Option<&'a str>,
    /// Seconds digits, including the fractional part when present.
    pub seconds: Option<&'a str>,
}

/// Components of a standalone timezone literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimezoneParts<'a> {
    pub sign: Option<char>,
    pub hour: Option<&'a str>,
    pub minute: Option<&'a str>,
    pub utc_marker: bool,
}

// ---------------------------------------------------------------------------
// Parsed values
// ---------------------------------------------------------------------------

/// A parsed `xsd:date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateValue {
    pub year: i64,
    pub month: u8,
    pub day: u8,
    #[serde(flatten)]
    pub tz: Timezone,
}

/// A parsed `xsd:time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeValue {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
    #[serde(flatten)]
    pub tz: Timezone,
}

/// A parsed `xsd:dateTime`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeValue {
    pub year: i64,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
    #[serde(flatten)]
    pub tz: Timezone,
}

/// A parsed `xsd:dateTimeStamp`. The grammar requires a literal `Z`, so
/// the value carries no timezone fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeStampValue {
    pub year: i64,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

/// A parsed `xsd:gYear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GYearValue {
    pub year: i64,
    #[serde(flatten)]
    pub tz: Timezone,
}

/// A parsed `xsd:gMonth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GMonthValue {
    pub month: u8,
    #[serde(flatten)]
    pub tz: Timezone,
}

/// A parsed `xsd:gDay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GDayValue {
    pub day: u8,
    #[serde(flatten)]
    pub tz: Timezone,
}

/// A parsed `xsd:gYearMonth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GYearMonthValue {
    pub year: i64,
    pub month: u8,
    #[serde(flatten)]
    pub tz: Timezone,
}

/// A parsed `xsd:gMonthDay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GMonthDayValue {
    pub month: u8,
    pub day: u8,
    #[serde(flatten)]
    pub tz: Timezone,
}

/// A parsed `xsd:duration`. Absent components read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationValue {
    /// `1` or `-1`.
    pub sign: i32,
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: u16,
}

// ---------------------------------------------------------------------------
// Chrono bridge
// ---------------------------------------------------------------------------

fn naive_date(year: i64, month: u8, day: u8) -> Result<NaiveDate> {
    let chrono_year =
        i32::try_from(year).map_err(|_| Error::out_of_range("chrono year", year))?;
    NaiveDate::from_ymd_opt(chrono_year, u32::from(month), u32::from(day))
        .ok_or(Error::InvalidDate { year, month, day })
}

fn naive_time(hour: u8, minute: u8, second: u8, millisecond: u16) -> Result<NaiveTime> {
    NaiveTime::from_hms_milli_opt(
        u32::from(hour),
        u32::from(minute),
        u32::from(second),
        u32::from(millisecond),
    )
    .ok_or(Error::InvalidTime {
        hour,
        minute,
        second,
        millisecond,
    })
}

impl DateValue {
    /// Projects onto a real calendar day. Fails for lexically valid days
    /// the month does not have, or years outside chrono's range.
    pub fn to_naive_date(&self) -> Result<NaiveDate> {
        naive_date(self.year, self.month, self.day)
    }
}

impl TimeValue {
    pub fn to_naive_time(&self) -> Result<NaiveTime> {
        naive_time(self.hour, self.minute, self.second, self.millisecond)
    }
}

impl DateTimeValue {
    /// Combines date, time and offset into a [`DateTime<FixedOffset>`].
    /// A value without timezone information is taken as UTC.
    pub fn to_datetime(&self) -> Result<DateTime<FixedOffset>> {
        let date = naive_date(self.year, self.month, self.day)?;
        let time = naive_time(self.hour, self.minute, self.second, self.millisecond)?;
        let seconds = 60 * i32::from(self.tz.offset.unwrap_or(0));
        let offset =
            FixedOffset::east_opt(seconds).ok_or(Error::out_of_range("utc offset", seconds))?;
        date.and_time(time)
            .and_local_timezone(offset)
            .single()
            .ok_or(Error::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            })
    }
}

impl DateTimeStampValue {
    pub fn to_datetime(&self) -> Result<DateTime<Utc>> {
        let date = naive_date(self.year, self.month, self.day)?;
        let time = naive_time(self.hour, self.minute, self.second, self.millisecond)?;
        Ok(date.and_time(time).and_utc())
    }
}

// ---------------------------------------------------------------------------
// Calendar scanning
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    Date,
    Time,
    DateTime,
    GYear,
    GMonth,
    GDay,
    GYearMonth,
    GMonthDay,
}

fn scan_year<'a>(s: &mut Scanner<'a>) -> Option<&'a str> {
    let start = s.pos();
    s.eat('-');
    // No leading zero: year 0 is excluded by the grammar.
    match s.peek() {
        Some(c) if matches!(c, '1'..='9') => {}
        _ => return None,
    }
    s.digits();
    let year = s.slice(start);
    year.parse::<i64>().ok()?;
    Some(year)
}

fn scan_date<'a>(s: &mut Scanner<'a>, parts: &mut CalendarParts<'a>) -> Option<()> {
    parts.year = Some(scan_year(s)?);
    s.eat('-').then_some(())?;
    parts.month = Some(s.two_digits(1, 12)?);
    s.eat('-').then_some(())?;
    parts.day = Some(s.two_digits(1, 31)?);
    Some(())
}

fn scan_time<'a>(s: &mut Scanner<'a>, parts: &mut CalendarParts<'a>) -> Option<()> {
    parts.hour = Some(s.two_digits(0, 23)?);
    s.eat(':').then_some(())?;
    parts.minute = Some(s.two_digits(0, 59)?);
    s.eat(':').then_some(())?;
    let start = s.pos();
    s.two_digits(0, 59)?;
    if s.eat('.') {
        s.digits1()?;
    }
    parts.second = Some(s.slice(start));
    Some(())
}

fn scan_timezone_suffix<'a>(
    s: &mut Scanner<'a>,
    parts: &mut CalendarParts<'a>,
    required: bool,
) -> Option<()> {
    match s.peek() {
        Some('Z') => {
            s.bump();
            parts.utc_marker = true;
        }
        Some(sign @ ('+' | '-')) => {
            s.bump();
            parts.tz_sign = Some(sign);
            parts.tz_hour = Some(s.two_digits(0, 12)?);
            s.eat(':').then_some(())?;
            parts.tz_minute = Some(s.two_digits(0, 59)?);
        }
        _ if required => return None,
        _ => {}
    }
    Some(())
}

fn scan_calendar(layout: Layout, require_tz: bool, input: &str) -> Option<CalendarParts<'_>> {
    let mut s = Scanner::new(input);
    let mut parts = CalendarParts::default();
    match layout {
        Layout::Date => scan_date(&mut s, &mut parts)?,
        Layout::Time => scan_time(&mut s, &mut parts)?,
        Layout::DateTime => {
            scan_date(&mut s, &mut parts)?;
            s.eat('T').then_some(())?;
            scan_time(&mut s, &mut parts)?;
        }
        Layout::GYear => parts.year = Some(scan_year(&mut s)?),
        Layout::GMonth => {
            s.eat_str("--").then_some(())?;
            parts.month = Some(s.two_digits(1, 12)?);
        }
        Layout::GDay => {
            s.eat_str("---").then_some(())?;
            parts.day = Some(s.two_digits(1, 31)?);
        }
        Layout::GYearMonth => {
            parts.year = Some(scan_year(&mut s)?);
            s.eat('-').then_some(())?;
            parts.month = Some(s.two_digits(1, 12)?);
        }
        Layout::GMonthDay => {
            s.eat_str("--").then_some(())?;
            parts.month = Some(s.two_digits(1, 12)?);
            s.eat('-').then_some(())?;
            parts.day = Some(s.two_digits(1, 31)?);
        }
    }
    scan_timezone_suffix(&mut s, &mut parts, require_tz)?;
    s.at_end().then_some(parts)
}

// ---------------------------------------------------------------------------
// Normalization helpers
// ---------------------------------------------------------------------------

fn trim_integer(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

fn trim_fraction(digits: &str) -> &str {
    let trimmed = digits.trim_end_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

fn field_i64(field: Option<&str>) -> i64 {
    field.and_then(|text| text.parse().ok()).unwrap_or(0)
}

fn field_u8(field: Option<&str>) -> u8 {
    field.and_then(|text| text.parse().ok()).unwrap_or(0)
}

/// Splits a `digits[.digits]` seconds field into its whole part and the
/// rounded millisecond remainder.
fn split_seconds(text: &str) -> (i64, u16) {
    let whole_digits = text.split('.').next().unwrap_or("");
    let whole: i64 = whole_digits.parse().unwrap_or(0);
    if !text.contains('.') {
        return (whole, 0);
    }
    let float: f64 = text.parse().unwrap_or(0.0);
    let millis = ((float - whole as f64) * 1000.0).round() as u16;
    (whole, millis)
}

fn seconds_field(field: Option<&str>) -> (u8, u16) {
    let (whole, millis) = split_seconds(field.unwrap_or(""));
    (u8::try_from(whole).unwrap_or(0), millis)
}

fn build_tz(parts: &CalendarParts<'_>) -> Timezone {
    Timezone::from_parts(
        parts.tz_sign,
        parts.tz_hour.and_then(|text| text.parse().ok()),
        parts.tz_minute.and_then(|text| text.parse().ok()),
        parts.utc_marker,
    )
}

fn build_date(parts: &CalendarParts<'_>) -> DateValue {
    DateValue {
        year: field_i64(parts.year),
        month: field_u8(parts.month),
        day: field_u8(parts.day),
        tz: build_tz(parts),
    }
}

fn build_time(parts: &CalendarParts<'_>) -> TimeValue {
    let (second, millisecond) = seconds_field(parts.second);
    TimeValue {
        hour: field_u8(parts.hour),
        minute: field_u8(parts.minute),
        second,
        millisecond,
        tz: build_tz(parts),
    }
}

fn build_date_time(parts: &CalendarParts<'_>) -> DateTimeValue {
    let (second, millisecond) = seconds_field(parts.second);
    DateTimeValue {
        year: field_i64(parts.year),
        month: field_u8(parts.month),
        day: field_u8(parts.day),
        hour: field_u8(parts.hour),
        minute: field_u8(parts.minute),
        second,
        millisecond,
        tz: build_tz(parts),
    }
}

fn build_g_year(parts: &CalendarParts<'_>) -> GYearValue {
    GYearValue {
        year: field_i64(parts.year),
        tz: build_tz(parts),
    }
}

fn build_g_month(parts: &CalendarParts<'_>) -> GMonthValue {
    GMonthValue {
        month: field_u8(parts.month),
        tz: build_tz(parts),
    }
}

fn build_g_day(parts: &CalendarParts<'_>) -> GDayValue {
    GDayValue {
        day: field_u8(parts.day),
        tz: build_tz(parts),
    }
}

fn build_g_year_month(parts: &CalendarParts<'_>) -> GYearMonthValue {
    GYearMonthValue {
        year: field_i64(parts.year),
        month: field_u8(parts.month),
        tz: build_tz(parts),
    }
}

fn build_g_month_day(parts: &CalendarParts<'_>) -> GMonthDayValue {
    GMonthDayValue {
        month: field_u8(parts.month),
        day: field_u8(parts.day),
        tz: build_tz(parts),
    }
}

// ---------------------------------------------------------------------------
// Calendar format modules
// ---------------------------------------------------------------------------

macro_rules! calendar_format {
    ($(#[$doc:meta])* $name:ident, $layout:expr, $value:ident, $build:ident) => {
        $(#[$doc])*
        pub mod $name {
            use super::*;

            /// Full-grammar validity of `value`.
            pub fn test(value: &str) -> bool {
                scan_calendar($layout, false, value).is_some()
            }

            /// Named components of `value`, or `None` when invalid.
            pub fn parts(value: &str) -> Option<CalendarParts<'_>> {
                scan_calendar($layout, false, value)
            }

            /// Normalized value of `value`, or `None` when invalid.
            pub fn parse(value: &str) -> Option<$value> {
                parts(value).map(|p| $build(&p))
            }

            /// The same grammar with the timezone suffix required.
            pub mod tz {
                use super::super::*;

                pub fn test(value: &str) -> bool {
                    scan_calendar($layout, true, value).is_some()
                }
            }
        }
    };
}

calendar_format! {
    /// `xsd:date` — `YYYY-MM-DD` with an optional timezone suffix.
    date, Layout::Date, DateValue, build_date
}

calendar_format! {
    /// `xsd:time` — `hh:mm:ss` with optional fractional seconds and an
    /// optional timezone suffix.
    time, Layout::Time, TimeValue, build_time
}

calendar_format! {
    /// `xsd:dateTime` — date and time joined by `T`, optional timezone.
    date_time, Layout::DateTime, DateTimeValue, build_date_time
}

calendar_format! {
    /// `xsd:gYear` — a year on its own, optional timezone.
    g_year, Layout::GYear, GYearValue, build_g_year
}

calendar_format! {
    /// `xsd:gMonth` — `--MM`, optional timezone.
    g_month, Layout::GMonth, GMonthValue, build_g_month
}

calendar_format! {
    /// `xsd:gDay` — `---DD`, optional timezone.
    g_day, Layout::GDay, GDayValue, build_g_day
}

calendar_format! {
    /// `xsd:gYearMonth` — `YYYY-MM`, optional timezone.
    g_year_month, Layout::GYearMonth, GYearMonthValue, build_g_year_month
}

calendar_format! {
    /// `xsd:gMonthDay` — `--MM-DD`, optional timezone.
    g_month_day, Layout::GMonthDay, GMonthDayValue, build_g_month_day
}

/// `xsd:dateTimeStamp` — a `dateTime` whose timezone is a mandatory
/// literal `Z`. Numeric offsets are not part of this grammar, so the value
/// carries no timezone fields.
pub mod date_time_stamp {
    use super::*;

    fn scan(input: &str) -> Option<CalendarParts<'_>> {
        let mut s = Scanner::new(input);
        let mut parts = CalendarParts::default();
        scan_date(&mut s, &mut parts)?;
        s.eat('T').then_some(())?;
        scan_time(&mut s, &mut parts)?;
        s.eat('Z').then_some(())?;
        parts.utc_marker = true;
        s.at_end().then_some(parts)
    }

    pub fn test(value: &str) -> bool {
        scan(value).is_some()
    }

    pub fn parts(value: &str) -> Option<CalendarParts<'_>> {
        scan(value)
    }

    pub fn parse(value: &str) -> Option<DateTimeStampValue> {
        let p = parts(value)?;
        let (second, millisecond) = seconds_field(p.second);
        Some(DateTimeStampValue {
            year: field_i64(p.year),
            month: field_u8(p.month),
            day: field_u8(p.day),
            hour: field_u8(p.hour),
            minute: field_u8(p.minute),
            second,
            millisecond,
        })
    }
}

/// A standalone timezone literal: `Z` or `±hh:mm`.
pub mod time_zone {
    use super::*;

    pub fn test(value: &str) -> bool {
        parts(value).is_some()
    }

    pub fn parts(value: &str) -> Option<TimezoneParts<'_>> {
        let mut s = Scanner::new(value);
        let mut parts = TimezoneParts::default();
        match s.peek()? {
            'Z' => {
                s.bump();
                parts.utc_marker = true;
            }
            sign @ ('+' | '-') => {
                s.bump();
                parts.sign = Some(sign);
                parts.hour = Some(s.two_digits(0, 12)?);
                s.eat(':').then_some(())?;
                parts.minute = Some(s.two_digits(0, 59)?);
            }
            _ => return None,
        }
        s.at_end().then_some(parts)
    }

    pub fn parse(value: &str) -> Option<Timezone> {
        let p = parts(value)?;
        Some(Timezone::from_parts(
            p.sign,
            p.hour.and_then(|text| text.parse().ok()),
            p.minute.and_then(|text| text.parse().ok()),
            p.utc_marker,
        ))
    }
}

// ---------------------------------------------------------------------------
// Numeric formats
// ---------------------------------------------------------------------------

fn scan_sign(s: &mut Scanner<'_>) -> Option<char> {
    match s.peek() {
        Some(sign @ ('+' | '-')) => {
            s.bump();
            Some(sign)
        }
        _ => None,
    }
}

/// Scans `digits [. digits]` where at least one digit group is non-empty.
fn scan_unsigned_decimal<'a>(s: &mut Scanner<'a>) -> Option<(&'a str, &'a str)> {
    let integer = s.digits();
    let fraction = if s.eat('.') { s.digits() } else { "" };
    if integer.is_empty() && fraction.is_empty() {
        return None;
    }
    Some((integer, fraction))
}

/// `xsd:decimal` — an optionally signed decimal literal without exponent.
pub mod decimal {
    use super::*;

    fn scan(input: &str) -> Option<(Option<char>, &str, &str)> {
        let mut s = Scanner::new(input);
        let sign = scan_sign(&mut s);
        let (integer, fraction) = scan_unsigned_decimal(&mut s)?;
        s.at_end().then_some((sign, integer, fraction))
    }

    pub fn test(value: &str) -> bool {
        scan(value).is_some()
    }

    /// Sign defaults to `+`; leading zeros of the integer part and trailing
    /// zeros of the fraction are stripped, a bare zero run becoming `"0"`.
    pub fn parts(value: &str) -> Option<DecimalParts<'_>> {
        let (sign, integer, fraction) = scan(value)?;
        Some(DecimalParts {
            sign: sign.unwrap_or('+'),
            integer: trim_integer(integer),
            fraction: trim_fraction(fraction),
        })
    }

    pub fn parse(value: &str) -> Option<f64> {
        let p = parts(value)?;
        format!("{}{}.{}", p.sign, p.integer, p.fraction).parse().ok()
    }
}

/// `xsd:integer` — an optionally signed digit run of any length.
pub mod integer {
    use super::*;

    fn scan(input: &str) -> Option<(Option<char>, &str)> {
        let mut s = Scanner::new(input);
        let sign = scan_sign(&mut s);
        let digits = s.digits1()?;
        s.at_end().then_some((sign, digits))
    }

    pub fn test(value: &str) -> bool {
        scan(value).is_some()
    }

    pub fn parts(value: &str) -> Option<IntegerParts<'_>> {
        let (sign, digits) = scan(value)?;
        Some(IntegerParts {
            sign: sign.unwrap_or('+'),
            digits: trim_integer(digits),
        })
    }

    pub fn parse(value: &str) -> Option<Int> {
        let p = parts(value)?;
        Int::from_decimal_str(&format!("{}{}", p.sign, p.digits))
    }
}

/// `xsd:float` — `NaN`, signed `INF`, or a decimal literal with an
/// optional exponent.
pub mod float {
    use super::*;

    enum Raw<'a> {
        NaN,
        Inf(Option<char>),
        Num {
            sign: Option<char>,
            base: &'a str,
            exp_sign: Option<char>,
            exponent: &'a str,
        },
    }

    fn scan(input: &str) -> Option<Raw<'_>> {
        if input == "NaN" {
            return Some(Raw::NaN);
        }
        let mut s = Scanner::new(input);
        let sign = scan_sign(&mut s);
        if s.eat_str("INF") {
            return s.at_end().then_some(Raw::Inf(sign));
        }
        let base_start = s.pos();
        scan_unsigned_decimal(&mut s)?;
        let base = s.slice(base_start);
        let (exp_sign, exponent) = if s.eat('e') || s.eat('E') {
            let exp_sign = scan_sign(&mut s);
            (exp_sign, s.digits1()?)
        } else {
            (None, "")
        };
        s.at_end().then_some(Raw::Num {
            sign,
            base,
            exp_sign,
            exponent,
        })
    }

    pub fn test(value: &str) -> bool {
        scan(value).is_some()
    }

    pub fn parts(value: &str) -> Option<FloatParts<'_>> {
        Some(match scan(value)? {
            Raw::NaN => FloatParts::NaN,
            Raw::Inf(sign) => FloatParts::Infinite {
                sign: sign.unwrap_or('+'),
            },
            Raw::Num {
                sign,
                base,
                exp_sign,
                exponent,
            } => FloatParts::Finite {
                sign: sign.unwrap_or('+'),
                base: trim_integer(base),
                exp_sign: exp_sign.unwrap_or('+'),
                exponent: trim_integer(exponent),
            },
        })
    }

    pub fn parse(value: &str) -> Option<f64> {
        Some(match parts(value)? {
            FloatParts::NaN => f64::NAN,
            FloatParts::Infinite { sign: '-' } => f64::NEG_INFINITY,
            FloatParts::Infinite { .. } => f64::INFINITY,
            FloatParts::Finite {
                sign,
                base,
                exp_sign,
                exponent,
            } => format!("{sign}{base}e{exp_sign}{exponent}").parse().ok()?,
        })
    }
}

/// `xsd:duration` — `[-]P` with tagged date components and an optional
/// `T` section of tagged time components; at least one component must be
/// present, so `P` and `PT` alone are invalid.
pub mod duration {
    use super::*;

    /// One `digits TAG` component; the cursor rewinds when the tag does
    /// not follow, so a run can still be claimed by a later component.
    fn scan_tagged<'a>(s: &mut Scanner<'a>, tag: char) -> Option<&'a str> {
        let start = s.pos();
        let run = s.digits();
        if !run.is_empty() && run.parse::<i64>().is_ok() && s.eat(tag) {
            return Some(run);
        }
        s.rewind(start);
        None
    }

    /// The trailing `S` component admits an empty integer part (`.5S`) and
    /// even a bare `S`, both reading as fractions of zero seconds.
    fn scan_seconds<'a>(s: &mut Scanner<'a>) -> Option<&'a str> {
        let start = s.pos();
        let whole = s.digits();
        if s.eat('.') && s.digits().is_empty() {
            s.rewind(start);
            return None;
        }
        let run = s.slice(start);
        if (whole.is_empty() || whole.parse::<i64>().is_ok()) && s.eat('S') {
            return Some(run);
        }
        s.rewind(start);
        None
    }

    fn scan(input: &str) -> Option<DurationParts<'_>> {
        let mut s = Scanner::new(input);
        let negative = s.eat('-');
        s.eat('P').then_some(())?;
        if s.at_end() {
            return None;
        }
        let mut parts = DurationParts {
            negative,
            ..DurationParts::default()
        };
        parts.years = scan_tagged(&mut s, 'Y');
        parts.months = scan_tagged(&mut s, 'M');
        parts.days = scan_tagged(&mut s, 'D');
        if s.eat('T') {
            if s.at_end() {
                return None;
            }
            parts.hours = scan_tagged(&mut s, 'H');
            parts.minutes = scan_tagged(&mut s, 'M');
            parts.seconds = scan_seconds(&mut s);
        }
        s.at_end().then_some(parts)
    }

    pub fn test(value: &str) -> bool {
        scan(value).is_some()
    }

    pub fn parts(value: &str) -> Option<DurationParts<'_>> {
        scan(value)
    }

    pub fn parse(value: &str) -> Option<DurationValue> {
        let p = parts(value)?;
        let (seconds, milliseconds) = split_seconds(p.seconds.unwrap_or(""));
        Some(DurationValue {
            sign: if p.negative { -1 } else { 1 },
            years: field_i64(p.years),
            months: field_i64(p.months),
            days: field_i64(p.days),
            hours: field_i64(p.hours),
            minutes: field_i64(p.minutes),
            seconds,
            milliseconds,
        })
    }
}
