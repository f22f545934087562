//! UTC timestamp parsing and formatting.
//!
//! # Responsibilities
//! - Parse HTTP `Date` headers (RFC 1123) and ISO-8601 strings into one UTC instant
//! - Render instants with caller-supplied strftime patterns
//!
//! # Design Decisions
//! - Format is auto-detected by trying parsers in order, no flag needed
//! - Offsets other than UTC are converted, not discarded
//! - Naive inputs (no zone) are read as UTC

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

/// Internal timestamp representation, always UTC.
pub type UtcTimestamp = DateTime<Utc>;

/// ISO-8601 pattern used for the `dateTime` query parameter.
pub const ISO_8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Compact pattern used to stamp retrieved configurations and written files.
pub const COMPACT_FORMAT: &str = "%Y%m%dT%H%M%SZ";

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
const NAIVE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors raised while converting timestamps.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    /// The input matched none of the supported formats.
    #[error("unrecognised timestamp '{0}'")]
    Unrecognised(String),

    /// The output pattern contains an invalid strftime specifier.
    #[error("invalid timestamp format pattern '{0}'")]
    InvalidPattern(String),
}

/// Parse an HTTP date or ISO-8601 string into a UTC instant.
pub fn parse_utc_timestamp(raw: &str) -> Result<UtcTimestamp, TimestampError> {
    let trimmed = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    if let Some(naive) = NaiveDate::parse_from_str(trimmed, NAIVE_DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(Utc.from_utc_datetime(&naive));
    }

    Err(TimestampError::Unrecognised(raw.to_string()))
}

/// Render a timestamp with a strftime pattern.
///
/// Pass [`ISO_8601_FORMAT`] for the default `YYYY-MM-DDTHH:mm:ssZ` rendering.
pub fn format_utc_timestamp(ts: &UtcTimestamp, pattern: &str) -> Result<String, TimestampError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(TimestampError::InvalidPattern(pattern.to_string()));
    }
    Ok(ts.format_with_items(items.into_iter()).to_string())
}

/// Parse `raw` and immediately render it with `pattern`.
pub fn convert_raw_utc_timestamp_to_string(
    raw: &str,
    pattern: &str,
) -> Result<String, TimestampError> {
    format_utc_timestamp(&parse_utc_timestamp(raw)?, pattern)
}
