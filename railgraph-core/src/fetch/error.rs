use thiserror::Error;

/// Transport failures raised by an [`AreaFetch`](super::AreaFetch)
/// implementation.
///
/// The importer propagates these unchanged and never retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No area name was provided.
    #[error("area name must not be empty")]
    EmptyAreaName,
    /// The request could not reach the service.
    #[error("request to {url} failed: {message}")]
    Network {
        /// Endpoint that was contacted.
        url: String,
        /// Transport diagnostic.
        message: String,
    },
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Endpoint that was contacted.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success status.
    #[error("{url} returned HTTP {status}: {message}")]
    Http {
        /// Endpoint that was contacted.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Status diagnostic.
        message: String,
    },
    /// The response body could not be read.
    #[error("failed to read response body from {url}: {message}")]
    Body {
        /// Endpoint that was contacted.
        url: String,
        /// Read diagnostic.
        message: String,
    },
}
