//! Date normalization for journal entry dates.
//!
//! Entry dates cross the persistence boundary as strings. They are reduced to
//! a date-only `NaiveDate` as soon as they enter the engine; the time of day
//! (if any) is dropped.

use chrono::{DateTime, NaiveDate};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Normalizes a date string to a calendar date.
///
/// Accepts a leading `YYYY-MM-DD` (anything after it, such as a time
/// component, is ignored), an RFC 3339 timestamp, or an RFC 2822 timestamp.
/// Returns `None` if the value cannot be read as a date.
#[must_use]
pub fn normalize_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Some(prefix) = value.get(..10)
        && has_iso_date_shape(prefix)
    {
        return NaiveDate::parse_from_str(prefix, ISO_DATE_FORMAT).ok();
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }

    DateTime::parse_from_rfc2822(value)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}

/// Returns true if the value is exactly `YYYY-MM-DD` and a real calendar date.
#[must_use]
pub fn is_strict_iso_date(value: &str) -> bool {
    value.len() == 10
        && has_iso_date_shape(value)
        && NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).is_ok()
}

fn has_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
