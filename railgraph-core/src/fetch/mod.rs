//! Retrieve raw query-result text for a named area.
//!
//! [`AreaFetch`] is the single suspension point of an import: callers await
//! the fetch, then hand the text to the synchronous parser and builder.
//! Retries, rate limiting and caching belong to implementations.

mod error;

use async_trait::async_trait;

pub use error::FetchError;

/// Asynchronous source of raw Overpass query results.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use railgraph_core::{AreaFetch, FetchError};
///
/// struct EmptyArea;
///
/// #[async_trait]
/// impl AreaFetch for EmptyArea {
///     async fn fetch_area(&self, area_name: &str) -> Result<String, FetchError> {
///         if area_name.is_empty() {
///             return Err(FetchError::EmptyAreaName);
///         }
///         Ok(r#"{"version": 0.6, "elements": []}"#.to_owned())
///     }
/// }
/// ```
#[async_trait]
pub trait AreaFetch: Send + Sync {
    /// Return the raw query result for `area_name`.
    ///
    /// Implementations must return `Err(FetchError::EmptyAreaName)` when
    /// `area_name` is empty or whitespace.
    async fn fetch_area(&self, area_name: &str) -> Result<String, FetchError>;
}
