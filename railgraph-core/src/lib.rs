//! Core domain types for the railgraph import engine.
//!
//! Responsibilities:
//! - Model decoded Overpass elements as a tagged [`Element`] variant.
//! - Build an immutable [`RailwayGraph`] from an element sequence via
//!   [`RailwayGraphBuilder`].
//! - Define the [`AreaFetch`] boundary that retrieves raw query results.
//!
//! Boundaries:
//! - No network or file I/O. Decoding of raw documents lives in
//!   `railgraph-data`.
//! - No route-finding. The graph only exposes structural queries.
//!
//! Invariants:
//! - Every edge endpoint resolves to a node held by the same graph.
//! - A graph never changes after construction; transformations return a new
//!   graph.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod builder;
pub mod edge;
pub mod element;
pub mod error;
pub mod fetch;
pub mod graph;
pub mod node;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

use std::collections::HashMap;

pub use builder::{BuildSummary, RailwayGraphBuilder, TrackFilter, build_graph};
pub use edge::RailwayEdge;
pub use element::{Element, ElementKind, NodeElement, WayElement};
pub use error::ImportError;
pub use fetch::{AreaFetch, FetchError};
pub use graph::{GraphStatistics, RailwayGraph};
pub use node::RailwayNode;

/// Identifier of a railway node, taken verbatim from the source node element.
pub type NodeId = i64;

/// Identifier of a railway edge, taken verbatim from the source way element.
///
/// Edge and node identifiers live in separate namespaces and may collide.
pub type EdgeId = i64;

/// OpenStreetMap-style free-form key/value tags.
pub type Tags = HashMap<String, String>;
