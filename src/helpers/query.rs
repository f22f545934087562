//! Query-string construction for point-in-time retrieval.

/// Query parameter the service reads the point in time from.
pub const DATE_TIME_PARAM: &str = "dateTime";

/// Build `dateTime=<iso_timestamp>`.
///
/// The timestamp is inserted verbatim; no percent-encoding is applied.
pub fn prepare_timestamp_query_string(iso_timestamp: &str) -> String {
    format!("{}={}", DATE_TIME_PARAM, iso_timestamp)
}

/// Append `?<query_string>` to `base_url`, dropping a trailing `/` first.
pub fn join_base_url_and_query_string(base_url: &str, query_string: &str) -> String {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    let query = query_string.strip_prefix('?').unwrap_or(query_string);
    format!("{}?{}", base, query)
}
