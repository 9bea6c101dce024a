//! Overpass document decoding and area import for railgraph.
//!
//! Responsibilities:
//! - Decode Overpass JSON documents into [`railgraph_core::Element`]s.
//! - Run the parse and build pipeline behind the `import_*` entry points.
//! - Fetch raw query results from an Overpass interpreter over HTTP.
//!
//! Boundaries:
//! - Graph construction rules live in `railgraph-core`.
//! - No retries or caching around network calls.
//!
//! Invariants:
//! - A malformed document never yields a partial graph.
//! - No global mutable state.

#![forbid(unsafe_code)]

pub mod import;
pub mod overpass;

pub use import::{
    AreaImportError, ImportOptions, fetch_and_import, import_graph, import_graph_with,
    import_value,
};
pub use overpass::{
    ClientBuildError, DEFAULT_OVERPASS_URL, DEFAULT_USER_AGENT, OverpassClient,
    OverpassClientConfig, ParseReport, parse_document, parse_document_report, parse_value,
};
