//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Production host of the watchlist API.
pub const DEFAULT_BASE_URL: &str = "https://watchlistapi.icedatavault.icedataservices.com";

/// Resource path of watchlist configurations.
pub const DEFAULT_RESOURCE_PATH: &str = "/v1/configurations/watchlists";

/// Root configuration for the watchlist client.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Remote service location.
    pub api: ApiConfig,

    /// Timeouts applied to the HTTP client.
    pub timeouts: TimeoutConfig,

    /// Where results are written.
    pub output: OutputConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl ClientConfig {
    /// Full URL of the watchlist configuration resource.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.api.base_url.trim_end_matches('/'),
            self.api.resource_path.trim_start_matches('/')
        )
    }
}

/// Remote service location.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme and host, e.g. "https://watchlistapi.example.com".
    pub base_url: String,

    /// Path of the configurations resource.
    pub resource_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            resource_path: DEFAULT_RESOURCE_PATH.to_string(),
        }
    }
}

/// Timeout configuration for the HTTP client.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 10,
            request_secs: 60,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory summaries and retrieved configurations are written to.
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
