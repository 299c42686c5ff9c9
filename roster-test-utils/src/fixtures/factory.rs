//! Plain value helpers shared across fixtures.

use chrono::{NaiveDate, NaiveDateTime};

/// Parses a `YYYY-MM-DD` date (midnight) or `YYYY-MM-DDTHH:MM:SS` timestamp.
///
/// # Panics
/// Panics if `value` matches neither format
pub fn timestamp(value: &str) -> NaiveDateTime {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).unwrap();
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .unwrap_or_else(|_| panic!("invalid test timestamp {:?}", value))
}
