//! Date and time parsing utilities.
//!
//! Clients send dates in a handful of shapes: plain calendar days in query strings, and
//! full timestamps (with or without a zone suffix) in request bodies. Everything is
//! normalized to a naive UTC timestamp, which is how the database stores it.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use crate::server::error::Error;

/// Calendar-day format, also used by the holiday feed.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.3fZ"];

/// Parses a date or timestamp into a naive UTC timestamp.
///
/// Accepted shapes, tried in order:
/// - `2024-01-31` (midnight of that day)
/// - `2024-01-31T09:30:00`
/// - `2024-01-31T09:30:00.000Z`
/// - any RFC 3339 timestamp, converted to UTC
///
/// # Returns
/// - `Ok(NaiveDateTime)` - Parsed timestamp in UTC
/// - `Err(Error::ParseError)` - Input matched none of the accepted shapes
pub fn parse_time(input: &str) -> Result<NaiveDateTime, Error> {
    if let Ok(date) = NaiveDate::parse_from_str(input, DATE_FORMAT) {
        return Ok(date.and_time(chrono::NaiveTime::MIN));
    }

    for format in DATETIME_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(timestamp);
        }
    }

    DateTime::parse_from_rfc3339(input)
        .map(|timestamp| timestamp.naive_utc())
        .map_err(|_| Error::ParseError(format!("unrecognised time format: {}", input)))
}

/// Returns the half-open `[start, end)` bounds of the calendar day containing `timestamp`.
///
/// `None` when the following midnight is past the last representable timestamp.
pub fn day_bounds(timestamp: NaiveDateTime) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let start = timestamp.date().and_time(chrono::NaiveTime::MIN);

    start
        .checked_add_signed(Duration::days(1))
        .map(|end| (start, end))
}

/// Serde adapter for required timestamps accepted by [`parse_time`].
pub fn deserialize_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    parse_time(&raw).map_err(serde::de::Error::custom)
}

/// Serde adapter for optional timestamps; `null` and `""` both mean absent.
pub fn deserialize_optional_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => parse_time(&raw).map(Some).map_err(serde::de::Error::custom),
    }
}
