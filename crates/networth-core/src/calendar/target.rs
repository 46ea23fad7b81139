//! Parsing of countdown target timestamps.
//!
//! Targets arrive as ISO-8601-like text. Without an explicit offset they are
//! read as wall-clock time in the caller's zone; no normalisation happens.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use super::months::resolve_local;
use crate::error::TargetError;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a target timestamp into an instant in `tz`.
///
/// Accepted: `YYYY-MM-DD` (midnight), `YYYY-MM-DDTHH:MM[:SS[.fff]]` (a space
/// may replace the `T`), and RFC 3339 with an offset, which is converted
/// into `tz`.
pub fn parse_target<Tz: TimeZone>(text: &str, tz: &Tz) -> Result<DateTime<Tz>, TargetError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TargetError::Missing);
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(text) {
        return Ok(with_offset.with_timezone(tz));
    }

    let wall = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| TargetError::Malformed(text.to_string()))?;

    resolve_local(tz, &wall).ok_or_else(|| TargetError::OutOfRange(text.to_string()))
}
