//! Display formatting for the backend's timestamps.
//!
//! The backend hands out times as display strings, epoch milliseconds, or
//! nothing at all. `format_date_time` renders any of them as
//! `YYYY-MM-DD HH:mm:ss` in the local timezone. It never fails: absent values
//! render as `""` and values that do not parse are returned as they came.
//!
//! Epoch (`0`) is a real instant and formats as one; only absent values and
//! empty text produce `""`.

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde_json::Value;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Largest distance from the epoch, in milliseconds, that counts as a valid
/// timestamp. Matches the range of the browser `Date` the console was built on.
const MAX_TIMESTAMP_MS: i64 = 8_640_000_000_000_000;

/// Date-time layouts without an offset; they name a local wall-clock time.
const WALL_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
];

/// Any time value the formatter accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum DateTimeValue {
    Absent,
    /// Text as received; parsed when formatting.
    Text(String),
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    Instant(DateTime<Utc>),
    /// A local wall-clock time with no zone attached.
    Wall(NaiveDateTime),
}

impl From<&str> for DateTimeValue {
    fn from(text: &str) -> Self {
        DateTimeValue::Text(text.to_string())
    }
}

impl From<String> for DateTimeValue {
    fn from(text: String) -> Self {
        DateTimeValue::Text(text)
    }
}

impl From<i64> for DateTimeValue {
    fn from(millis: i64) -> Self {
        DateTimeValue::Timestamp(millis)
    }
}

impl From<NaiveDateTime> for DateTimeValue {
    fn from(wall: NaiveDateTime) -> Self {
        DateTimeValue::Wall(wall)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateTimeValue {
    fn from(instant: DateTime<Tz>) -> Self {
        DateTimeValue::Instant(instant.with_timezone(&Utc))
    }
}

impl<T: Into<DateTimeValue>> From<Option<T>> for DateTimeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(DateTimeValue::Absent, Into::into)
    }
}

impl From<&Value> for DateTimeValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => DateTimeValue::Absent,
            Value::String(text) => DateTimeValue::Text(text.clone()),
            Value::Number(n) => match n.as_i64() {
                Some(millis) => DateTimeValue::Timestamp(millis),
                None => match n.as_f64() {
                    Some(f) if f.is_finite() && f.abs() <= MAX_TIMESTAMP_MS as f64 => {
                        DateTimeValue::Timestamp(f.trunc() as i64)
                    }
                    _ => DateTimeValue::Text(n.to_string()),
                },
            },
            other => DateTimeValue::Text(other.to_string()),
        }
    }
}

/// Format `value` as `YYYY-MM-DD HH:mm:ss` in the process-local timezone.
pub fn format_date_time(value: impl Into<DateTimeValue>) -> String {
    format_date_time_in(value, &Local)
}

/// Format `value` as `YYYY-MM-DD HH:mm:ss` in `tz`.
pub fn format_date_time_in<Tz>(value: impl Into<DateTimeValue>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    match value.into() {
        DateTimeValue::Absent => String::new(),
        DateTimeValue::Text(text) => {
            if text.is_empty() {
                return String::new();
            }
            match parse_text(&text) {
                Some(DateTimeValue::Instant(instant)) => render_instant(instant, tz),
                Some(DateTimeValue::Wall(wall)) => wall.format(DISPLAY_FORMAT).to_string(),
                _ => text,
            }
        }
        DateTimeValue::Timestamp(millis) => {
            if millis.unsigned_abs() > MAX_TIMESTAMP_MS.unsigned_abs() {
                return millis.to_string();
            }
            match DateTime::from_timestamp_millis(millis) {
                Some(instant) => render_instant(instant, tz),
                None => millis.to_string(),
            }
        }
        DateTimeValue::Instant(instant) => render_instant(instant, tz),
        DateTimeValue::Wall(wall) => wall.format(DISPLAY_FORMAT).to_string(),
    }
}

fn render_instant<Tz>(instant: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    instant.with_timezone(tz).format(DISPLAY_FORMAT).to_string()
}

/// Parse display text into an `Instant` or a `Wall` value.
///
/// Text with an offset and ISO date-only text name an instant (date-only
/// means UTC midnight); date-time text without an offset is a wall-clock
/// time.
fn parse_text(text: &str) -> Option<DateTimeValue> {
    let text = text.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(DateTimeValue::Instant(instant.with_timezone(&Utc)));
    }
    if let Ok(instant) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(DateTimeValue::Instant(instant.with_timezone(&Utc)));
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        let midnight = date.and_time(NaiveTime::MIN);
        return Some(DateTimeValue::Instant(Utc.from_utc_datetime(&midnight)));
    }
    for format in WALL_FORMATS {
        if let Ok(wall) = NaiveDateTime::parse_from_str(text, format) {
            return Some(DateTimeValue::Wall(wall));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y/%m/%d") {
        return Some(DateTimeValue::Wall(date.and_time(NaiveTime::MIN)));
    }
    None
}
