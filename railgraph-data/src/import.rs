//! End-to-end import: document text or fetched area into a [`RailwayGraph`].
//!
//! Parsing and building are synchronous and pure. [`fetch_and_import`] adds
//! the single suspension point, the area fetch, in front of them.

use log::info;
use railgraph_core::{
    AreaFetch, FetchError, ImportError, RailwayGraph, RailwayGraphBuilder, TrackFilter,
};
use serde_json::Value;
use thiserror::Error;

use crate::overpass::{ParseReport, parse_document_report};

/// Settings applied while turning elements into a graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOptions {
    /// Predicate deciding which ways become edges.
    pub filter: TrackFilter,
}

impl ImportOptions {
    /// Options accepting every resolvable way.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the way filter.
    #[must_use]
    pub const fn with_filter(mut self, filter: TrackFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// Failure of [`fetch_and_import`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AreaImportError {
    /// The raw document could not be retrieved.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The retrieved document could not be imported.
    #[error(transparent)]
    Import(#[from] ImportError),
}

/// Import raw document text with default options.
///
/// # Errors
///
/// Returns [`ImportError::MalformedInput`] when the document cannot be
/// decoded. Unusable elements never cause an error.
///
/// # Examples
/// ```
/// use railgraph_data::import_graph;
///
/// let text = r#"{"version": 0.6, "elements": [
///     {"type": "node", "id": 1, "lat": 50.1109, "lon": 8.6821, "tags": {"railway": "station"}},
///     {"type": "node", "id": 2, "lat": 50.1119, "lon": 8.6831, "tags": {"railway": "station"}},
///     {"type": "way", "id": 3, "nodes": [1, 2], "tags": {"railway": "rail"}}
/// ]}"#;
/// let graph = import_graph(text)?;
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// # Ok::<(), railgraph_core::ImportError>(())
/// ```
pub fn import_graph(text: &str) -> Result<RailwayGraph, ImportError> {
    import_graph_with(text, &ImportOptions::default())
}

/// Import raw document text with explicit options.
///
/// # Errors
///
/// Returns [`ImportError::MalformedInput`] when the document cannot be
/// decoded.
pub fn import_graph_with(text: &str, options: &ImportOptions) -> Result<RailwayGraph, ImportError> {
    let report = parse_document_report(text)?;
    Ok(build(report, options))
}

/// Import an already-parsed JSON document.
///
/// # Errors
///
/// Returns [`ImportError::MalformedInput`] when the document lacks the
/// expected top-level shape.
pub fn import_value(value: &Value, options: &ImportOptions) -> Result<RailwayGraph, ImportError> {
    let report = crate::overpass::parse::parse_value_report(value)?;
    Ok(build(report, options))
}

/// Fetch the document for `area_name` and import it.
///
/// Fetch failures are propagated unchanged; no retry is attempted.
///
/// # Errors
///
/// Returns [`AreaImportError::Fetch`] when retrieval fails and
/// [`AreaImportError::Import`] when the retrieved document is malformed.
pub async fn fetch_and_import(
    fetcher: &dyn AreaFetch,
    area_name: &str,
    options: &ImportOptions,
) -> Result<RailwayGraph, AreaImportError> {
    let text = fetcher.fetch_area(area_name).await?;
    let graph = import_graph_with(&text, options)?;
    info!(
        "Imported area {area_name:?}: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn build(report: ParseReport, options: &ImportOptions) -> RailwayGraph {
    let ParseReport { elements, skipped } = report;
    let mut builder = RailwayGraphBuilder::new().with_filter(options.filter);
    builder.extend(elements);
    let (graph, summary) = builder.build_with_summary();
    info!(
        "Built railway graph with {} nodes and {} edges ({} entries undecodable, {} ways skipped)",
        summary.nodes,
        summary.edges,
        skipped,
        summary.skipped_ways()
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overpass::test_support::StubAreaFetch;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn document() -> Value {
        json!({
            "version": 0.6,
            "elements": [
                {"type": "node", "id": 1, "lat": 50.1109, "lon": 8.6821, "tags": {"railway": "station"}},
                {"type": "node", "id": 2, "lat": 50.1119, "lon": 8.6831, "tags": {"railway": "station"}},
                {"type": "way", "id": 3, "nodes": [1, 2], "tags": {"railway": "rail"},
                 "geometry": [{"lat": 50.1109, "lon": 8.6821}, {"lat": 50.1119, "lon": 8.6831}]},
                {"type": "way", "id": 4, "nodes": [2, 1], "tags": {"railway": "platform"}}
            ]
        })
    }

    #[rstest]
    fn value_import_matches_text_import(document: Value) {
        let from_value =
            import_value(&document, &ImportOptions::default()).expect("valid document");
        let from_text = import_graph(&document.to_string()).expect("valid document");
        assert_eq!(from_value, from_text);
        assert_eq!(from_text.edge_count(), 2);
    }

    #[rstest]
    fn options_select_track_filter(document: Value) {
        let options = ImportOptions::new().with_filter(TrackFilter::RailwayTagged);
        let graph = import_value(&document, &options).expect("valid document");
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_edge(3));
    }

    #[rstest]
    #[tokio::test]
    async fn fetch_and_import_builds_from_fetched_text(document: Value) {
        let fetch = StubAreaFetch::with_document(document.to_string());
        let graph = fetch_and_import(&fetch, "Frankfurt", &ImportOptions::default())
            .await
            .expect("import should succeed");
        assert_eq!(graph.node_count(), 2);
        assert_eq!(fetch.requested_areas(), vec!["Frankfurt".to_owned()]);
    }

    #[rstest]
    #[tokio::test]
    async fn fetch_errors_pass_through_unchanged() {
        let error = FetchError::Http {
            url: "http://example.com/api/interpreter".to_owned(),
            status: 429,
            message: "Too Many Requests".to_owned(),
        };
        let fetch = StubAreaFetch::with_error(error.clone());
        let err = fetch_and_import(&fetch, "Frankfurt", &ImportOptions::default())
            .await
            .expect_err("fetch should fail");
        assert_eq!(err, AreaImportError::Fetch(error));
    }

    #[rstest]
    #[tokio::test]
    async fn malformed_fetched_text_is_an_import_error() {
        let fetch = StubAreaFetch::with_document(r#"{"version": 0.6}"#);
        let err = fetch_and_import(&fetch, "Frankfurt", &ImportOptions::default())
            .await
            .expect_err("document is malformed");
        assert!(matches!(
            err,
            AreaImportError::Import(ImportError::MalformedInput { .. })
        ));
    }
}
