//! Facade crate for the railgraph import engine.
//!
//! This crate re-exports the core graph types and, behind the `overpass`
//! feature, the Overpass document importer and HTTP client.

#![forbid(unsafe_code)]

pub use railgraph_core::{
    AreaFetch, BuildSummary, EdgeId, Element, ElementKind, FetchError, GraphStatistics,
    ImportError, NodeElement, NodeId, RailwayEdge, RailwayGraph, RailwayGraphBuilder,
    RailwayNode, Tags, TrackFilter, WayElement, build_graph,
};

#[cfg(feature = "overpass")]
pub use railgraph_data::{
    AreaImportError, ImportOptions, OverpassClient, OverpassClientConfig, ParseReport,
    fetch_and_import, import_graph, import_graph_with, import_value, parse_document,
    parse_document_report, parse_value,
};
