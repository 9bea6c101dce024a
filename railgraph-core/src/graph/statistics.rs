//! Whole-graph summary figures.

use geo::Rect;

use super::RailwayGraph;

/// Summary figures describing a [`RailwayGraph`].
///
/// Serialises to JSON for command-line reporting when the `serde` feature is
/// enabled.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GraphStatistics {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of edges.
    pub edge_count: usize,
    /// Nodes without any incident edge.
    pub isolated_nodes: usize,
    /// Sum of edge lengths in metres.
    pub total_length_m: f64,
    /// Rectangle covering all nodes, absent for an empty graph.
    pub bounds: Option<Rect<f64>>,
}

impl GraphStatistics {
    pub(super) fn from_graph(graph: &RailwayGraph) -> Self {
        let isolated_nodes = graph
            .adjacency
            .iter()
            .filter(|incident| incident.is_empty())
            .count();
        Self {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            isolated_nodes,
            total_length_m: graph.total_length_m(),
            bounds: graph.bounding_box(),
        }
    }
}
