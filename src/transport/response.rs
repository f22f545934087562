//! Response classification.
//!
//! # Responsibilities
//! - Map non-200 statuses to typed failures, separately for submit and retrieve
//! - Pull the server-supplied detail out of 401 bodies
//! - Decide the point in time a retrieved configuration belongs to
//!
//! # Design Decisions
//! - Pure functions over status, headers and body so they test without a socket
//! - Only 200 counts as success; any other 2xx is reported by status code
//! - A 404 on retrieval is its own variant, callers treat it as an expected outcome

use std::path::PathBuf;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use url::{form_urlencoded, Url};

use crate::helpers::{convert_raw_utc_timestamp_to_string, TimestampError, COMPACT_FORMAT, DATE_TIME_PARAM};

/// Failures of the network round trip, classified by HTTP outcome.
#[derive(Debug, Error)]
pub enum TransportError {
    /// 400: the service rejected the CSV despite local validation.
    #[error("request failed with status code 400: input CSV file is improperly formatted")]
    ImproperFormat,

    /// 401: credentials were refused. Shown as `Error: Unauthorized` and
    /// `Error description: full authentication is required.`
    #[error(
        "request failed with status code 401\nError: {}\nError description: {}.",
        capitalize(.error),
        .description.trim_end_matches('.').to_lowercase()
    )]
    Unauthorized { error: String, description: String },

    /// 404 on retrieval: no configuration was active at the requested time.
    #[error("request failed with status code 404: no active configuration for the given date and time")]
    NoActiveConfiguration,

    /// 500: the request as a whole failed server side.
    #[error("request failed with status code 500: the request as a whole failed")]
    ServerFailure,

    #[error("request failed with status code {0}")]
    UnexpectedStatus(u16),

    #[error("response is missing the Date header")]
    MissingDateHeader,

    #[error("invalid response body: {0}")]
    InvalidBody(#[source] serde_json::Error),

    #[error("invalid endpoint '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid timestamp in response: {0}")]
    Timestamp(#[from] TimestampError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl TransportError {
    /// The HTTP status behind this failure, if the server answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TransportError::ImproperFormat => Some(400),
            TransportError::Unauthorized { .. } => Some(401),
            TransportError::NoActiveConfiguration => Some(404),
            TransportError::ServerFailure => Some(500),
            TransportError::UnexpectedStatus(code) => Some(*code),
            TransportError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AuthErrorBody {
    error: String,
    error_description: String,
}

/// Classify a non-200 answer to a submission.
pub fn submission_failure(status: StatusCode, body: &[u8]) -> TransportError {
    match status {
        StatusCode::BAD_REQUEST => TransportError::ImproperFormat,
        StatusCode::UNAUTHORIZED => {
            let detail: AuthErrorBody = serde_json::from_slice(body).unwrap_or_default();
            TransportError::Unauthorized {
                error: non_empty_or(detail.error, "unauthorized"),
                description: non_empty_or(detail.error_description, "credentials were rejected"),
            }
        }
        StatusCode::INTERNAL_SERVER_ERROR => TransportError::ServerFailure,
        other => TransportError::UnexpectedStatus(other.as_u16()),
    }
}

/// Classify a non-200 answer to a retrieval.
pub fn retrieval_failure(status: StatusCode) -> TransportError {
    match status {
        StatusCode::NOT_FOUND => TransportError::NoActiveConfiguration,
        other => TransportError::UnexpectedStatus(other.as_u16()),
    }
}

/// First character upper case, the rest lower case.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

/// The `dateTime` query parameter of a request URL, if any.
///
/// Percent escapes are decoded but a literal `+` stays a `+`, so UTC offsets
/// such as `+01:00` survive.
pub fn requested_point_in_time(url: &Url) -> Option<String> {
    let query = url.query()?.replace('+', "%2B");
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == DATE_TIME_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// Compact timestamp for a retrieved configuration.
///
/// The requested `dateTime` wins; otherwise the response `Date` header is used.
pub fn infer_retrieval_timestamp(
    url: &Url,
    date_header: Option<&str>,
) -> Result<String, TransportError> {
    let raw = match requested_point_in_time(url) {
        Some(requested) => requested,
        None => date_header
            .ok_or(TransportError::MissingDateHeader)?
            .to_string(),
    };
    Ok(convert_raw_utc_timestamp_to_string(&raw, COMPACT_FORMAT)?)
}
