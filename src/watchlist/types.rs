//! Result records produced by the transport.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Server-side account of what a submission changed.
///
/// Counts and lists default to empty when the service omits them or sends
/// `null`. Fields this
/// type does not know about are kept in `extra` so nothing is lost when the
/// summary is written back out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub nb_created: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub nb_updated: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub nb_duplicated: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub nb_unchanged: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub nb_failed: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub nb_deactivated: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub created: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub updated: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub duplicated: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub unchanged: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub failed: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub deactivated: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSummary {
    /// The response `Date` header, verbatim.
    pub submission_time: String,
    pub summary: ConfigSummary,
}

/// Outcome of a successful retrieval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievedConfig {
    /// Point in time of the configuration, `YYYYMMDDTHHMMSSZ`.
    pub timestamp: String,
    /// Response body, unmodified.
    pub config_body: Vec<u8>,
}
