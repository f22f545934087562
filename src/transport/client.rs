//! HTTP client for the watchlist configuration service.
//!
//! # Responsibilities
//! - Upload a configuration file as multipart field `file` (POST)
//! - Fetch the configuration active now or at a given time (GET)
//! - Authenticate every call with HTTP Basic credentials
//!
//! # Design Decisions
//! - One request per call, no retries, no backoff
//! - Timeouts live on the underlying `reqwest::Client` only
//! - Credentials are checked before the file is read or a socket is opened

use std::path::Path;
use std::time::Duration;

use reqwest::header::DATE;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use url::Url;

use crate::config::schema::TimeoutConfig;
use crate::error::WatchlistResult;
use crate::transport::response::{
    infer_retrieval_timestamp, retrieval_failure, submission_failure, TransportError,
};
use crate::watchlist::{ConfigSummary, Credentials, RequestSummary, RetrievedConfig};

/// Multipart field the service expects the CSV under.
pub const FILE_FIELD: &str = "file";

const DEFAULT_FILE_NAME: &str = "watchlist.csv";

/// Stateless client; every call is independent of the previous one.
#[derive(Debug, Clone, Default)]
pub struct WatchlistClient {
    http: Client,
}

impl WatchlistClient {
    /// Client with reqwest defaults (no timeouts).
    pub fn new() -> Self {
        Self::default()
    }

    /// Client with the configured connect and request timeouts.
    pub fn from_config(timeouts: &TimeoutConfig) -> Result<Self, TransportError> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.request_secs))
            .build()?;
        Ok(Self { http })
    }

    /// Wrap an already configured reqwest client.
    pub fn with_http_client(http: Client) -> Self {
        Self { http }
    }

    /// Submit the file at `file_path`. The file is expected to be validated already.
    pub async fn submit_config(
        &self,
        endpoint: &str,
        credentials: &Credentials,
        file_path: &Path,
    ) -> WatchlistResult<RequestSummary> {
        let (username, password) = credentials.validate()?;
        Ok(self.post_file(endpoint, username, password, file_path).await?)
    }

    /// Retrieve a configuration. `endpoint` may carry a `dateTime` query parameter.
    pub async fn retrieve_config(
        &self,
        endpoint: &str,
        credentials: &Credentials,
    ) -> WatchlistResult<RetrievedConfig> {
        let (username, password) = credentials.validate()?;
        Ok(self.get_config(endpoint, username, password).await?)
    }

    async fn post_file(
        &self,
        endpoint: &str,
        username: &str,
        password: &str,
        file_path: &Path,
    ) -> Result<RequestSummary, TransportError> {
        let url = parse_endpoint(endpoint)?;

        let contents = tokio::fs::read(file_path)
            .await
            .map_err(|source| TransportError::Io {
                path: file_path.to_path_buf(),
                source,
            })?;
        let file_name = file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());
        let size = contents.len();
        let part = Part::bytes(contents).file_name(file_name).mime_str("text/csv")?;
        let form = Form::new().part(FILE_FIELD, part);

        tracing::debug!(url = %url, bytes = size, "Submitting watchlist configuration");

        let response = self
            .http
            .post(url)
            .basic_auth(username, Some(password))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Submission answered");

        if status != StatusCode::OK {
            // Only a 401 body carries detail; a broken body never hides the status.
            let body = if status == StatusCode::UNAUTHORIZED {
                response.bytes().await.unwrap_or_default()
            } else {
                Default::default()
            };
            return Err(submission_failure(status, &body));
        }

        let submission_time = date_header(&response)
            .ok_or(TransportError::MissingDateHeader)?
            .to_string();
        let body = response.bytes().await?;
        let summary: ConfigSummary =
            serde_json::from_slice(&body).map_err(TransportError::InvalidBody)?;

        Ok(RequestSummary {
            submission_time,
            summary,
        })
    }

    async fn get_config(
        &self,
        endpoint: &str,
        username: &str,
        password: &str,
    ) -> Result<RetrievedConfig, TransportError> {
        let url = parse_endpoint(endpoint)?;

        tracing::debug!(url = %url, "Retrieving watchlist configuration");

        let response = self
            .http
            .get(url.clone())
            .basic_auth(username, Some(password))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Retrieval answered");

        if status != StatusCode::OK {
            return Err(retrieval_failure(status));
        }

        let timestamp = infer_retrieval_timestamp(&url, date_header(&response))?;
        let config_body = response.bytes().await?.to_vec();

        Ok(RetrievedConfig {
            timestamp,
            config_body,
        })
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, TransportError> {
    Url::parse(endpoint).map_err(|source| TransportError::InvalidEndpoint {
        url: endpoint.to_string(),
        source,
    })
}

fn date_header(response: &Response) -> Option<&str> {
    response.headers().get(DATE).and_then(|value| value.to_str().ok())
}
