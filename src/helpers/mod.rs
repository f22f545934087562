//! Timestamp and query-string helpers.
//!
//! # Data Flow
//! ```text
//! user input / Date header
//!     → timestamp.rs (parse to UTC, render with a pattern)
//!     → query.rs (dateTime=<iso>, joined onto the endpoint)
//!     → transport (GET with point-in-time query)
//! ```

pub mod query;
pub mod timestamp;

pub use query::{join_base_url_and_query_string, prepare_timestamp_query_string, DATE_TIME_PARAM};
pub use timestamp::{
    convert_raw_utc_timestamp_to_string, format_utc_timestamp, parse_utc_timestamp,
    TimestampError, UtcTimestamp, COMPACT_FORMAT, ISO_8601_FORMAT,
};
