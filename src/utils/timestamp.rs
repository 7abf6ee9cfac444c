//! Parsing and rendering of record timestamps.

use crate::error::AppError;
use chrono::{DateTime, NaiveDateTime, Timelike, Utc};

/// Input format accepted for `expires_at`: minute precision, no zone, read as UTC.
pub const EXPIRES_AT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parses a client-supplied expiration time.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the value does not match
/// [`EXPIRES_AT_FORMAT`].
pub fn parse_expires_at(value: &str) -> Result<DateTime<Utc>, AppError> {
    NaiveDateTime::parse_from_str(value, EXPIRES_AT_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| {
            AppError::bad_request(format!(
                "Invalid expires_at '{}', expected format YYYY-MM-DDTHH:MM",
                value
            ))
        })
}

/// Renders a timestamp as a zone-less ISO-8601 string in UTC.
///
/// Microseconds are only emitted when non-zero, e.g. `2099-01-01T00:00:00`
/// or `2024-03-01T12:00:00.250000`.
pub fn to_iso8601(at: DateTime<Utc>) -> String {
    let naive = at.naive_utc();
    if naive.nanosecond() / 1_000 == 0 {
        naive.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        naive.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}
