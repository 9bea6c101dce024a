//! Two-pass construction of a [`RailwayGraph`] from decoded elements.
//!
//! Pass one collects node elements keyed by identifier, with later elements
//! replacing earlier ones. Pass two resolves each way's first and last node
//! references against that table and emits one edge per resolvable way.
//! Nothing in either pass fails the import: unusable elements are dropped
//! and tallied in a [`BuildSummary`].

mod filter;

use std::collections::HashMap;

use geo::Coord;
use log::{debug, warn};

use crate::edge::oriented_geometry;
use crate::element::{Element, NodeElement, WayElement};
use crate::graph::RailwayGraph;
use crate::{EdgeId, NodeId, RailwayEdge, RailwayNode};

pub use filter::TrackFilter;

/// Tally of what a build kept and what it dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BuildSummary {
    /// Nodes retained after deduplication.
    pub nodes: usize,
    /// Edges retained after deduplication.
    pub edges: usize,
    /// Node elements that replaced an earlier node with the same identifier.
    pub replaced_nodes: usize,
    /// Way elements that replaced an earlier edge with the same identifier.
    pub replaced_edges: usize,
    /// Node elements dropped for non-finite or out-of-range coordinates.
    pub invalid_nodes: usize,
    /// Ways dropped for referencing fewer than two nodes.
    pub short_ways: usize,
    /// Ways dropped because an endpoint did not resolve to a node.
    pub unresolved_ways: usize,
    /// Ways rejected by the [`TrackFilter`].
    pub filtered_ways: usize,
}

impl BuildSummary {
    /// Total number of way elements that did not become edges.
    #[must_use]
    pub const fn skipped_ways(&self) -> usize {
        self.short_ways + self.unresolved_ways + self.filtered_ways
    }
}

/// Accumulates elements and seals them into an immutable [`RailwayGraph`].
///
/// Elements may arrive in any order: ways are held back until
/// [`build`](Self::build) so that every node is known before endpoints are
/// resolved.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use railgraph_core::{Element, NodeElement, RailwayGraphBuilder, Tags, WayElement};
///
/// let mut builder = RailwayGraphBuilder::new();
/// builder.push(Element::Way(WayElement::new(3, vec![1, 2], Tags::new())));
/// builder.push(Element::Node(NodeElement::with_empty_tags(1, Coord { x: 8.68, y: 50.11 })));
/// builder.push(Element::Node(NodeElement::with_empty_tags(2, Coord { x: 8.69, y: 50.12 })));
///
/// let graph = builder.build();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RailwayGraphBuilder {
    filter: TrackFilter,
    nodes: Vec<RailwayNode>,
    node_slots: HashMap<NodeId, usize>,
    ways: Vec<WayElement>,
    summary: BuildSummary,
}

impl RailwayGraphBuilder {
    /// Create a builder that accepts every resolvable way.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the predicate deciding which ways become edges.
    #[must_use]
    pub fn with_filter(mut self, filter: TrackFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Add a single element.
    pub fn push(&mut self, element: Element) {
        match element {
            Element::Node(node) => self.push_node(node),
            Element::Way(way) => self.ways.push(way),
        }
    }

    fn push_node(&mut self, element: NodeElement) {
        let Some(location) = validated_coord(element.location) else {
            debug!(
                "Skipped node {}: coordinate ({}, {}) is not a valid WGS84 position",
                element.id, element.location.y, element.location.x
            );
            self.summary.invalid_nodes += 1;
            return;
        };
        let node = RailwayNode::new(element.id, location, element.tags);
        match self.node_slots.get(&node.id).copied() {
            Some(slot) => {
                if let Some(existing) = self.nodes.get_mut(slot) {
                    debug!("Node {} replaced by a later element", node.id);
                    *existing = node;
                    self.summary.replaced_nodes += 1;
                }
            }
            None => {
                self.node_slots.insert(node.id, self.nodes.len());
                self.nodes.push(node);
            }
        }
    }

    /// Seal the accumulated elements into a graph.
    #[must_use]
    pub fn build(self) -> RailwayGraph {
        self.build_with_summary().0
    }

    /// Seal the accumulated elements into a graph and report what was kept.
    #[must_use]
    pub fn build_with_summary(mut self) -> (RailwayGraph, BuildSummary) {
        let ways = std::mem::take(&mut self.ways);
        let mut edges: Vec<RailwayEdge> = Vec::new();
        let mut edge_slots: HashMap<EdgeId, usize> = HashMap::new();

        for way in ways {
            let Some(edge) = self.resolve_way(way) else {
                continue;
            };
            match edge_slots.get(&edge.id).copied() {
                Some(slot) => {
                    if let Some(existing) = edges.get_mut(slot) {
                        debug!("Edge {} replaced by a later way", edge.id);
                        *existing = edge;
                        self.summary.replaced_edges += 1;
                    }
                }
                None => {
                    edge_slots.insert(edge.id, edges.len());
                    edges.push(edge);
                }
            }
        }

        if self.summary.unresolved_ways > 0 {
            warn!(
                "Skipped {} ways whose endpoints reference unknown nodes",
                self.summary.unresolved_ways
            );
        }

        self.summary.nodes = self.nodes.len();
        self.summary.edges = edges.len();
        let graph = RailwayGraph::from_parts(self.nodes, edges);
        (graph, self.summary)
    }

    fn resolve_way(&mut self, way: WayElement) -> Option<RailwayEdge> {
        let Some((source, target)) = way.endpoints() else {
            debug!(
                "Skipped way {}: {} node references cannot form an edge",
                way.id,
                way.node_refs.len()
            );
            self.summary.short_ways += 1;
            return None;
        };
        if !self.filter.accepts(&way.tags) {
            debug!("Skipped way {}: rejected by {:?}", way.id, self.filter);
            self.summary.filtered_ways += 1;
            return None;
        }
        let (Some(source_location), Some(target_location)) =
            (self.location_of(source), self.location_of(target))
        else {
            debug!(
                "Skipped way {}: endpoint {} or {} is not a known node",
                way.id, source, target
            );
            self.summary.unresolved_ways += 1;
            return None;
        };
        let geometry = oriented_geometry(&way.geometry, source_location, target_location);
        Some(RailwayEdge::new(way.id, source, target, way.tags, geometry))
    }

    fn location_of(&self, id: NodeId) -> Option<Coord<f64>> {
        let slot = self.node_slots.get(&id)?;
        self.nodes.get(*slot).map(|node| node.location)
    }
}

impl Extend<Element> for RailwayGraphBuilder {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

/// Build a graph from `elements` using `filter` to select track ways.
///
/// # Examples
/// ```
/// use railgraph_core::{build_graph, TrackFilter};
///
/// let graph = build_graph(Vec::new(), TrackFilter::AnyWay);
/// assert_eq!(graph.node_count(), 0);
/// assert!(graph.get_node_by_id(1).is_none());
/// ```
#[must_use]
pub fn build_graph<I>(elements: I, filter: TrackFilter) -> RailwayGraph
where
    I: IntoIterator<Item = Element>,
{
    let mut builder = RailwayGraphBuilder::new().with_filter(filter);
    builder.extend(elements);
    builder.build()
}

/// `location` when it is a finite WGS84 position within range.
pub(crate) fn validated_coord(location: Coord<f64>) -> Option<Coord<f64>> {
    let Coord { x: lon, y: lat } = location;
    (lon.is_finite()
        && lat.is_finite()
        && (-180.0..=180.0).contains(&lon)
        && (-90.0..=90.0).contains(&lat))
    .then_some(location)
}
