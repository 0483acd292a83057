//! Date/time types: `date`, `timestamp`, `timestamptz`.
//!
//! Text follows PostgreSQL's ISO output style:
//! - `date`: `YYYY-MM-DD`
//! - `timestamp`: `YYYY-MM-DD HH:MM:SS[.ffffff]`, fraction trimmed of
//!   trailing zeros and omitted when zero
//! - `timestamptz`: as `timestamp` followed by `+HH[:MM[:SS]]`
//!
//! Years before 1 AD are written PostgreSQL's way, counted back from 1 BC
//! with a trailing ` BC` (`0001-12-31 BC` is the day before `0001-01-01`),
//! and years past 9999 simply get more digits. The
//! supported span is chrono's, roughly 262000 BC to 262000 AD; there is no
//! year zero. The JSON mirror keeps chrono's astronomical year, where `0`
//! is 1 BC.
//!
//! Values are held at microsecond precision; finer input is rounded.
//! A bare JSON number is read as Unix milliseconds (UTC).

use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike,
};
use serde_json::{json, Map, Value};

use crate::core::object::{expect_object, field_i64, field_i64_or, json_kind, whole_number};
use crate::core::{scalar_input, PgValue, ValueInput};
use crate::error::{ParseError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Strip a trailing ` BC` or ` AD` era marker, reporting whether it was BC.
fn split_era(text: &str) -> (&str, bool) {
    let trimmed = text.trim();
    let cut = trimmed.len().saturating_sub(3);
    match trimmed.get(cut..) {
        Some(suffix) if suffix.eq_ignore_ascii_case(" BC") => (trimmed[..cut].trim_end(), true),
        Some(suffix) if suffix.eq_ignore_ascii_case(" AD") => (trimmed[..cut].trim_end(), false),
        _ => (trimmed, false),
    }
}

/// Rewrite the leading PostgreSQL year as a signed astronomical year, the
/// form chrono's `%Y` reads at any width.
fn signed_year(text: &str, bc: bool) -> Option<String> {
    let text = text.trim();
    let digits = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let year: i32 = text[..digits].parse().ok()?;
    if year == 0 {
        return None;
    }
    let year = if bc { 1 - year } else { year };
    Some(format!("{:+}{}", year, &text[digits..]))
}

fn parse_naive_date(text: &str) -> Option<NaiveDate> {
    let (body, bc) = split_era(text);
    parse_date_in_era(body, bc)
}

fn parse_date_in_era(text: &str, bc: bool) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&signed_year(text, bc)?, DATE_FORMAT).ok()
}

fn parse_naive_timestamp(text: &str) -> Option<NaiveDateTime> {
    let (body, bc) = split_era(text);
    parse_timestamp_in_era(body, bc)
}

fn parse_timestamp_in_era(text: &str, bc: bool) -> Option<NaiveDateTime> {
    let signed = signed_year(text, bc)?;
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&signed, format).ok())
        .or_else(|| parse_date_in_era(text, bc).and_then(|d| d.and_hms_opt(0, 0, 0)))
        .map(round_to_micros)
}

fn round_to_micros(dt: NaiveDateTime) -> NaiveDateTime {
    let nanos = dt.nanosecond() % 1_000_000_000;
    let micros = i64::from((nanos + 500) / 1_000);
    let base = dt.with_nanosecond(0).unwrap_or(dt);
    base.checked_add_signed(Duration::microseconds(micros))
        .unwrap_or(base)
}

/// `YYYY-MM-DD` with the PostgreSQL year; the era marker is left to the
/// caller since it goes after any time and offset.
fn format_naive_date(date: &NaiveDate, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let year = if date.year() <= 0 {
        1 - date.year()
    } else {
        date.year()
    };
    write!(f, "{:04}-{:02}-{:02}", year, date.month(), date.day())
}

fn era_suffix(date: &NaiveDate) -> &'static str {
    if date.year() <= 0 {
        " BC"
    } else {
        ""
    }
}

fn format_naive_timestamp(dt: &NaiveDateTime, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    format_naive_date(&dt.date(), f)?;
    write!(f, " {}", dt.format("%H:%M:%S"))?;
    let micros = dt.nanosecond() / 1_000;
    if micros != 0 {
        let fraction = format!("{:06}", micros);
        write!(f, ".{}", fraction.trim_end_matches('0'))?;
    }
    Ok(())
}

fn from_unix_millis(millis: i64, type_name: &str) -> Result<DateTime<chrono::Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| ParseError::invalid_string(type_name, millis.to_string()))
}

fn date_from_fields(map: &Map<String, Value>, type_name: &str) -> Result<NaiveDate> {
    let year = field_i64(map, "year")?;
    let month = field_i64(map, "month")?;
    let day = field_i64(map, "day")?;
    i32::try_from(year)
        .ok()
        .zip(u32::try_from(month).ok())
        .zip(u32::try_from(day).ok())
        .and_then(|((y, m), d)| NaiveDate::from_ymd_opt(y, m, d))
        .ok_or_else(|| {
            ParseError::invalid_string(type_name, format!("{}-{}-{}", year, month, day))
        })
}

fn timestamp_from_fields(map: &Map<String, Value>, type_name: &str) -> Result<NaiveDateTime> {
    let date = date_from_fields(map, type_name)?;
    let hour = field_i64_or(map, "hour", 0)?;
    let minute = field_i64_or(map, "minute", 0)?;
    let second = field_i64_or(map, "second", 0)?;
    let microsecond = field_i64_or(map, "microsecond", 0)?;
    u32::try_from(hour)
        .ok()
        .zip(u32::try_from(minute).ok())
        .zip(u32::try_from(second).ok())
        .zip(u32::try_from(microsecond).ok())
        .and_then(|(((h, m), s), us)| NaiveTime::from_hms_micro_opt(h, m, s, us))
        .map(|time| date.and_time(time))
        .ok_or_else(|| {
            ParseError::invalid_string(
                type_name,
                format!(
                    "{} {}:{}:{}.{}",
                    date.format(DATE_FORMAT),
                    hour,
                    minute,
                    second,
                    microsecond
                ),
            )
        })
}

fn timestamp_json(dt: &NaiveDateTime) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("year".into(), json!(dt.year()));
    map.insert("month".into(), json!(dt.month()));
    map.insert("day".into(), json!(dt.day()));
    map.insert("hour".into(), json!(dt.hour()));
    map.insert("minute".into(), json!(dt.minute()));
    map.insert("second".into(), json!(dt.second()));
    map.insert("microsecond".into(), json!(dt.nanosecond() / 1_000));
    map
}

const TIME_KEYS: &[&str] = &["hour", "minute", "second", "microsecond"];

// =============================================================================
// date
// =============================================================================

/// PostgreSQL `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Wrap a calendar date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build from year, month and day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                ParseError::invalid_string(Self::TYPE_NAME, format!("{}-{}-{}", year, month, day))
            })
    }

    /// The calendar date.
    pub fn get(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Date {
    fn from(v: NaiveDate) -> Self {
        Self(v)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_naive_date(&self.0, f)?;
        f.write_str(era_suffix(&self.0))
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_text(s)
    }
}

impl TryFrom<&str> for Date {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse_text(s)
    }
}

scalar_input!(Date, NaiveDate);

impl PgValue for Date {
    const TYPE_NAME: &'static str = "date";
    type Input = ValueInput<Self>;

    fn parse_text(text: &str) -> Result<Self> {
        parse_naive_date(text)
            .map(Self)
            .ok_or_else(|| ParseError::invalid_string(Self::TYPE_NAME, text))
    }

    fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Self::parse_text(s),
            Value::Number(n) => {
                let utc = from_unix_millis(whole_number(n)?, Self::TYPE_NAME)?;
                Ok(Self(utc.date_naive()))
            }
            Value::Object(_) => {
                let map = expect_object(value, "date object", &["year", "month", "day"], &[])?;
                date_from_fields(map, Self::TYPE_NAME).map(Self)
            }
            other => Err(ParseError::invalid_type(
                "string | number | object",
                json_kind(other),
            )),
        }
    }

    fn to_json(&self) -> Value {
        json!({
            "year": self.0.year(),
            "month": self.0.month(),
            "day": self.0.day(),
        })
    }
}

// =============================================================================
// timestamp
// =============================================================================

/// PostgreSQL `timestamp` (without time zone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Wrap a date-time, rounding to microseconds.
    pub fn new(value: NaiveDateTime) -> Self {
        Self(round_to_micros(value))
    }

    /// The date-time.
    pub fn get(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(v: NaiveDateTime) -> Self {
        Self::new(v)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_naive_timestamp(&self.0, f)?;
        f.write_str(era_suffix(&self.0.date()))
    }
}

impl FromStr for Timestamp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_text(s)
    }
}

impl TryFrom<&str> for Timestamp {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse_text(s)
    }
}

scalar_input!(Timestamp, NaiveDateTime);

impl PgValue for Timestamp {
    const TYPE_NAME: &'static str = "timestamp";
    type Input = ValueInput<Self>;

    fn parse_text(text: &str) -> Result<Self> {
        parse_naive_timestamp(text)
            .map(Self)
            .ok_or_else(|| ParseError::invalid_string(Self::TYPE_NAME, text))
    }

    fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Self::parse_text(s),
            Value::Number(n) => {
                let utc = from_unix_millis(whole_number(n)?, Self::TYPE_NAME)?;
                Ok(Self(utc.naive_utc()))
            }
            Value::Object(_) => {
                let map = expect_object(
                    value,
                    "timestamp object",
                    &["year", "month", "day"],
                    TIME_KEYS,
                )?;
                timestamp_from_fields(map, Self::TYPE_NAME).map(Self)
            }
            other => Err(ParseError::invalid_type(
                "string | number | object",
                json_kind(other),
            )),
        }
    }

    fn to_json(&self) -> Value {
        Value::Object(timestamp_json(&self.0))
    }
}

// =============================================================================
// timestamptz
// =============================================================================

/// PostgreSQL `timestamptz`.
///
/// The UTC offset of the input is kept and printed back. Ordering compares
/// instants, so `10:00+02` and `08:00+00` are equal under `Ord` but render
/// differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamptz(DateTime<FixedOffset>);

impl Timestamptz {
    /// Wrap an offset date-time, rounding to microseconds.
    pub fn new(value: DateTime<FixedOffset>) -> Self {
        let local = round_to_micros(value.naive_local());
        let offset = *value.offset();
        Self(
            local
                .and_local_timezone(offset)
                .single()
                .unwrap_or(value),
        )
    }

    /// The offset date-time.
    pub fn get(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl From<DateTime<FixedOffset>> for Timestamptz {
    fn from(v: DateTime<FixedOffset>) -> Self {
        Self::new(v)
    }
}

impl fmt::Display for Timestamptz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let local = self.0.naive_local();
        format_naive_timestamp(&local, f)?;
        let seconds = self.0.offset().local_minus_utc();
        let sign = if seconds < 0 { '-' } else { '+' };
        let seconds = seconds.abs();
        write!(f, "{}{:02}", sign, seconds / 3600)?;
        if seconds % 3600 != 0 {
            write!(f, ":{:02}", (seconds % 3600) / 60)?;
            if seconds % 60 != 0 {
                write!(f, ":{:02}", seconds % 60)?;
            }
        }
        f.write_str(era_suffix(&local.date()))
    }
}

impl FromStr for Timestamptz {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_text(s)
    }
}

impl TryFrom<&str> for Timestamptz {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse_text(s)
    }
}

scalar_input!(Timestamptz, DateTime<FixedOffset>);

/// Split `text` into the date-time part and the offset in seconds.
///
/// Accepts `Z`, `+HH`, `+HHMM`, `+HH:MM` and `+HH:MM:SS`. A missing offset
/// means UTC.
fn split_offset(text: &str) -> Option<(&str, i32)> {
    if let Some(rest) = text.strip_suffix(['Z', 'z']) {
        return Some((rest, 0));
    }

    // The date part itself contains '-', so only look after it.
    let Some(search_from) = text.char_indices().nth(10).map(|(i, _)| i) else {
        return Some((text, 0));
    };
    let Some(at) = text[search_from..]
        .rfind(['+', '-'])
        .map(|i| i + search_from)
    else {
        return Some((text, 0));
    };

    let (datetime, offset) = text.split_at(at);
    let sign = if offset.starts_with('-') { -1 } else { 1 };
    let digits = &offset[1..];
    if !digits.is_ascii() {
        return None;
    }
    let parts: Vec<&str> = if digits.contains(':') {
        digits.split(':').collect()
    } else if digits.len() == 4 {
        vec![&digits[..2], &digits[2..]]
    } else {
        vec![digits]
    };
    if parts.is_empty() || parts.len() > 3 {
        return None;
    }

    let mut seconds = 0i32;
    for (part, scale) in parts.iter().zip([3600, 60, 1]) {
        if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        seconds += part.parse::<i32>().ok()? * scale;
    }

    Some((datetime.trim_end(), sign * seconds))
}

impl PgValue for Timestamptz {
    const TYPE_NAME: &'static str = "timestamptz";
    type Input = ValueInput<Self>;

    fn parse_text(text: &str) -> Result<Self> {
        let invalid = || ParseError::invalid_string(Self::TYPE_NAME, text);
        let (body, bc) = split_era(text);
        let (datetime, offset) = split_offset(body).ok_or_else(invalid)?;
        let offset = FixedOffset::east_opt(offset).ok_or_else(invalid)?;
        let local = parse_timestamp_in_era(datetime, bc).ok_or_else(invalid)?;
        local
            .and_local_timezone(offset)
            .single()
            .map(Self)
            .ok_or_else(invalid)
    }

    fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Self::parse_text(s),
            Value::Number(n) => {
                let utc = from_unix_millis(whole_number(n)?, Self::TYPE_NAME)?;
                Ok(Self(utc.fixed_offset()))
            }
            Value::Object(_) => {
                let optional: Vec<&str> = TIME_KEYS.iter().copied().chain(["offset"]).collect();
                let map = expect_object(
                    value,
                    "timestamptz object",
                    &["year", "month", "day"],
                    &optional,
                )?;
                let local = timestamp_from_fields(map, Self::TYPE_NAME)?;
                let offset = field_i64_or(map, "offset", 0)?;
                i32::try_from(offset)
                    .ok()
                    .and_then(FixedOffset::east_opt)
                    .and_then(|tz| local.and_local_timezone(tz).single())
                    .map(Self)
                    .ok_or_else(|| {
                        ParseError::invalid_key_type("offset", "offset in seconds", offset.to_string())
                    })
            }
            other => Err(ParseError::invalid_type(
                "string | number | object",
                json_kind(other),
            )),
        }
    }

    fn to_json(&self) -> Value {
        let mut map = timestamp_json(&self.0.naive_local());
        map.insert(
            "offset".into(),
            json!(self.0.offset().local_minus_utc()),
        );
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // date
    // =========================================================================

    #[test]
    fn test_date_text() {
        let date = Date::parse_text("2004-10-19").unwrap();
        assert_eq!(date.to_string(), "2004-10-19");
        assert_eq!(Date::parse_text(" 2004-10-19 ").unwrap(), date);
        assert_eq!(
            Date::parse_text("2004-13-01").unwrap_err(),
            ParseError::invalid_string("date", "2004-13-01")
        );
    }

    #[test]
    fn test_date_json() {
        let date = Date::from_ymd(2004, 10, 19).unwrap();
        assert_eq!(date.to_json(), json!({"year": 2004, "month": 10, "day": 19}));
        assert!(date.equals(date.to_json()).unwrap());
        assert_eq!(
            Date::from_json(&json!({"year": 2023, "month": 2, "day": 30})).unwrap_err(),
            ParseError::invalid_string("date", "2023-2-30")
        );
        assert!(matches!(
            Date::from_json(&json!({"year": 2023, "month": 2})).unwrap_err(),
            ParseError::MissingKeys { .. }
        ));
    }

    #[test]
    fn test_date_from_unix_millis() {
        // 2004-10-19T10:23:54Z
        let date = Date::from_json(&json!(1_098_181_434_000i64)).unwrap();
        assert_eq!(date.to_string(), "2004-10-19");
    }

    #[test]
    fn test_date_years_outside_four_digits() {
        let date = Date::from_ymd(10000, 1, 1).unwrap();
        assert_eq!(date.to_string(), "10000-01-01");
        assert_eq!(Date::parse_text("10000-01-01").unwrap(), date);

        // chrono's year 0 is 1 BC, year -1 is 2 BC
        let date = Date::from_ymd(-1, 12, 31).unwrap();
        assert_eq!(date.to_string(), "0002-12-31 BC");
        assert_eq!(Date::parse_text("0002-12-31 BC").unwrap(), date);
        assert_eq!(Date::parse_text("0002-12-31 bc").unwrap(), date);
        assert_eq!(
            Date::parse_text("0001-01-01 BC").unwrap(),
            Date::from_ymd(0, 1, 1).unwrap()
        );
        assert_eq!(
            Date::parse_text("2004-10-19 AD").unwrap(),
            Date::from_ymd(2004, 10, 19).unwrap()
        );

        for text in ["0000-01-01", "-0001-12-31", "+2004-10-19", "0000-01-01 BC"] {
            assert_eq!(
                Date::parse_text(text).unwrap_err(),
                ParseError::invalid_string("date", text)
            );
        }
    }

    // =========================================================================
    // timestamp
    // =========================================================================

    #[test]
    fn test_timestamp_text() {
        let ts = Timestamp::parse_text("2004-10-19 10:23:54").unwrap();
        assert_eq!(ts.to_string(), "2004-10-19 10:23:54");

        let ts = Timestamp::parse_text("2004-10-19T10:23:54.500").unwrap();
        assert_eq!(ts.to_string(), "2004-10-19 10:23:54.5");

        let ts = Timestamp::parse_text("2004-10-19").unwrap();
        assert_eq!(ts.to_string(), "2004-10-19 00:00:00");

        assert!(Timestamp::parse_text("yesterday-ish").is_err());
    }

    #[test]
    fn test_timestamp_rounds_to_microseconds() {
        let ts = Timestamp::parse_text("2004-10-19 10:23:54.1234567").unwrap();
        assert_eq!(ts.to_string(), "2004-10-19 10:23:54.123457");
    }

    #[test]
    fn test_timestamp_json() {
        let ts = Timestamp::parse_text("2004-10-19 10:23:54.25").unwrap();
        assert_eq!(
            ts.to_json(),
            json!({
                "year": 2004, "month": 10, "day": 19,
                "hour": 10, "minute": 23, "second": 54, "microsecond": 250000
            })
        );
        assert!(ts.equals(ts.to_json()).unwrap());

        let midnight = Timestamp::from_json(&json!({"year": 2004, "month": 10, "day": 19})).unwrap();
        assert_eq!(midnight.to_string(), "2004-10-19 00:00:00");

        let from_millis = Timestamp::from_json(&json!(1_098_181_434_000i64)).unwrap();
        assert_eq!(from_millis.to_string(), "2004-10-19 10:23:54");
    }

    #[test]
    fn test_timestamp_years_outside_four_digits() {
        let ts = Timestamp::from_json(&json!(253_402_300_800_000i64)).unwrap();
        assert_eq!(ts.to_string(), "10000-01-01 00:00:00");
        assert_eq!(Timestamp::parse_text(&ts.to_string()).unwrap(), ts);

        let ts = Timestamp::parse_text("0044-03-15 12:00:00.5 BC").unwrap();
        assert_eq!(ts.get().year(), -43);
        assert_eq!(ts.to_string(), "0044-03-15 12:00:00.5 BC");
    }

    // =========================================================================
    // timestamptz
    // =========================================================================

    #[test]
    fn test_timestamptz_offsets() {
        let ts = Timestamptz::parse_text("2004-10-19 10:23:54+02").unwrap();
        assert_eq!(ts.to_string(), "2004-10-19 10:23:54+02");

        let ts = Timestamptz::parse_text("2004-10-19 10:23:54+05:30").unwrap();
        assert_eq!(ts.to_string(), "2004-10-19 10:23:54+05:30");

        let ts = Timestamptz::parse_text("2004-10-19T10:23:54-0800").unwrap();
        assert_eq!(ts.to_string(), "2004-10-19 10:23:54-08");

        let ts = Timestamptz::parse_text("2004-10-19 10:23:54Z").unwrap();
        assert_eq!(ts.to_string(), "2004-10-19 10:23:54+00");

        let ts = Timestamptz::parse_text("2004-10-19 10:23:54").unwrap();
        assert_eq!(ts.to_string(), "2004-10-19 10:23:54+00");

        let ts = Timestamptz::parse_text("0001-12-31 10:00:00+02 BC").unwrap();
        assert_eq!(ts.get().naive_local().year(), 0);
        assert_eq!(ts.to_string(), "0001-12-31 10:00:00+02 BC");
    }

    #[test]
    fn test_timestamptz_rejects_bad_offset() {
        assert!(Timestamptz::parse_text("2004-10-19 10:23:54+2x").is_err());
        assert!(Timestamptz::parse_text("2004-10-19 10:23:54+99").is_err());
    }

    #[test]
    fn test_timestamptz_orders_by_instant() {
        let a = Timestamptz::parse_text("2004-10-19 10:00:00+02").unwrap();
        let b = Timestamptz::parse_text("2004-10-19 08:00:00+00").unwrap();
        assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
        assert!(!a.equals(b.to_string()).unwrap());
    }

    #[test]
    fn test_timestamptz_json() {
        let ts = Timestamptz::parse_text("2004-10-19 10:23:54-03:30").unwrap();
        assert_eq!(ts.to_json()["offset"], json!(-12600));
        assert!(ts.equals(ts.to_json()).unwrap());
    }
}
