//! HTTP transport for the Overpass interpreter.
//!
//! [`OverpassClient`] posts Overpass QL as the `data` form field and returns
//! the response body untouched. Decoding is left to the parser so that the
//! same text can be cached or replayed.

use std::time::Duration;

use async_trait::async_trait;
use geo::Rect;
use log::debug;
use railgraph_core::{AreaFetch, FetchError};
use reqwest::Client;
use thiserror::Error;
use url::Url;

use super::query::{area_query, bbox_query};

/// Public Overpass interpreter endpoint.
pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

/// Default user agent for Overpass requests.
pub const DEFAULT_USER_AGENT: &str = "railgraph/0.1";

/// Default request timeout in seconds.
///
/// Country-sized extracts routinely take minutes to compute.
const DEFAULT_TIMEOUT_SECS: u64 = 180;

/// Errors raised while constructing an [`OverpassClient`].
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// The configured interpreter URL is not an absolute HTTP(S) URL.
    #[error("invalid Overpass URL `{url}`: {message}")]
    InvalidUrl {
        /// Rejected URL.
        url: String,
        /// Why the URL was rejected.
        message: String,
    },
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Configuration for [`OverpassClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverpassClientConfig {
    /// Interpreter endpoint receiving the query.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for OverpassClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OVERPASS_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl OverpassClientConfig {
    /// Create a configuration targeting `base_url` with default settings.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// [`AreaFetch`] implementation backed by an Overpass interpreter.
#[derive(Debug, Clone)]
pub struct OverpassClient {
    client: Client,
    config: OverpassClientConfig,
}

impl OverpassClient {
    /// Create a client for the public interpreter with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new() -> Result<Self, ClientBuildError> {
        Self::with_config(OverpassClientConfig::default())
    }

    /// Create a client with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `config.base_url` is not an absolute HTTP(S) URL
    /// or the HTTP client fails to build.
    pub fn with_config(config: OverpassClientConfig) -> Result<Self, ClientBuildError> {
        validate_base_url(&config.base_url)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ClientBuildError::HttpClient)?;
        Ok(Self { client, config })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &OverpassClientConfig {
        &self.config
    }

    /// Fetch railway features inside `bounds`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the request fails, times out or the
    /// interpreter answers with a non-success status.
    pub async fn fetch_bbox(&self, bounds: &Rect<f64>) -> Result<String, FetchError> {
        self.execute(&bbox_query(bounds)).await
    }

    async fn execute(&self, query: &str) -> Result<String, FetchError> {
        let url = self.config.base_url.as_str();
        debug!("Posting {} byte Overpass query to {url}", query.len());

        let response = self
            .client
            .post(url)
            .form(&[("data", query)])
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, url))?;

        let body = response.text().await.map_err(|err| FetchError::Body {
            url: url.to_owned(),
            message: err.to_string(),
        })?;
        debug!("Received {} bytes from {url}", body.len());
        Ok(body)
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> FetchError {
        if error.is_timeout() {
            return FetchError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return FetchError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        FetchError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

#[async_trait]
impl AreaFetch for OverpassClient {
    async fn fetch_area(&self, area_name: &str) -> Result<String, FetchError> {
        if area_name.trim().is_empty() {
            return Err(FetchError::EmptyAreaName);
        }
        self.execute(&area_query(area_name)).await
    }
}

fn validate_base_url(base_url: &str) -> Result<(), ClientBuildError> {
    let invalid = |message: String| ClientBuildError::InvalidUrl {
        url: base_url.to_owned(),
        message,
    };
    let parsed = Url::parse(base_url).map_err(|err| invalid(err.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme `{other}`"))),
    }
}
