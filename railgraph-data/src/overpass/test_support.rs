//! Test utilities for area fetchers.
//!
//! [`StubAreaFetch`] is a deterministic [`AreaFetch`] that returns canned
//! text or a canned error without touching the network.

use std::sync::Mutex;

use async_trait::async_trait;
use railgraph_core::{AreaFetch, FetchError};

/// Stub `AreaFetch` for testing.
///
/// # Example
///
/// ```
/// use railgraph_core::AreaFetch;
/// use railgraph_data::overpass::test_support::StubAreaFetch;
///
/// # tokio_test_block(async {
/// let fetch = StubAreaFetch::with_document(r#"{"version": 0.6, "elements": []}"#);
/// let text = fetch.fetch_area("Bern").await?;
/// assert!(text.contains("elements"));
/// assert_eq!(fetch.requested_areas(), vec!["Bern".to_owned()]);
/// # Ok::<(), railgraph_core::FetchError>(())
/// # });
/// # fn tokio_test_block<F: std::future::Future>(future: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(future)
/// # }
/// ```
#[derive(Debug)]
pub struct StubAreaFetch {
    response: StubResponse,
    requests: Mutex<Vec<String>>,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Document(String),
    Error(FetchError),
}

impl StubAreaFetch {
    /// Create a fetcher that returns `document` for every non-empty area.
    #[must_use]
    pub fn with_document(document: impl Into<String>) -> Self {
        Self::from_response(StubResponse::Document(document.into()))
    }

    /// Create a fetcher that fails with `error` for every non-empty area.
    ///
    /// Empty area names still fail with [`FetchError::EmptyAreaName`].
    #[must_use]
    pub fn with_error(error: FetchError) -> Self {
        Self::from_response(StubResponse::Error(error))
    }

    const fn from_response(response: StubResponse) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Area names requested so far, in call order.
    #[must_use]
    pub fn requested_areas(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    fn record(&self, area_name: &str) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(area_name.to_owned());
        }
    }
}

#[async_trait]
impl AreaFetch for StubAreaFetch {
    async fn fetch_area(&self, area_name: &str) -> Result<String, FetchError> {
        if area_name.trim().is_empty() {
            return Err(FetchError::EmptyAreaName);
        }
        self.record(area_name);
        match &self.response {
            StubResponse::Document(document) => Ok(document.clone()),
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}
