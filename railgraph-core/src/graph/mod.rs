//! The frozen, queryable railway network.
//!
//! Nodes and edges live in contiguous arenas addressed by position. Separate
//! identifier tables resolve node and edge ids, so the two namespaces never
//! collide. A per-node adjacency list and an R\*-tree over node locations are
//! built once when the graph is sealed.

mod spatial;
mod statistics;

use std::collections::HashMap;
use std::fmt;

use geo::{Coord, Intersects, Rect};

use crate::builder::validated_coord;
use crate::{EdgeId, NodeId, RailwayEdge, RailwayNode};

use spatial::NodeIndex;

pub use statistics::GraphStatistics;

/// Immutable railway network produced by
/// [`RailwayGraphBuilder`](crate::RailwayGraphBuilder).
///
/// # Examples
/// ```
/// use geo::Coord;
/// use railgraph_core::{build_graph, Element, NodeElement, Tags, TrackFilter, WayElement};
///
/// let elements = vec![
///     Element::Node(NodeElement::with_empty_tags(1, Coord { x: 8.6821, y: 50.1109 })),
///     Element::Node(NodeElement::with_empty_tags(2, Coord { x: 8.6831, y: 50.1119 })),
///     Element::Way(WayElement::new(3, vec![1, 2], Tags::new())),
/// ];
/// let graph = build_graph(elements, TrackFilter::AnyWay);
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
///
/// let edge = graph.get_edge_by_id(3).expect("way 3 becomes an edge");
/// assert!(graph.get_node_by_id(edge.source).is_some());
/// assert!(graph.get_node_by_id(42).is_none());
/// ```
pub struct RailwayGraph {
    nodes: Vec<RailwayNode>,
    edges: Vec<RailwayEdge>,
    node_positions: HashMap<NodeId, usize>,
    edge_positions: HashMap<EdgeId, usize>,
    adjacency: Vec<Vec<usize>>,
    spatial: NodeIndex,
}

impl RailwayGraph {
    /// Seal `nodes` and `edges` into a graph.
    ///
    /// Callers guarantee unique identifiers and that every edge endpoint is
    /// present in `nodes`; edges violating the latter are dropped here.
    pub(crate) fn from_parts(nodes: Vec<RailwayNode>, edges: Vec<RailwayEdge>) -> Self {
        let node_positions: HashMap<NodeId, usize> = nodes
            .iter()
            .enumerate()
            .map(|(position, node)| (node.id, position))
            .collect();

        let edges: Vec<RailwayEdge> = edges
            .into_iter()
            .filter(|edge| {
                node_positions.contains_key(&edge.source)
                    && node_positions.contains_key(&edge.target)
            })
            .collect();

        let mut adjacency = vec![Vec::new(); nodes.len()];
        for (position, edge) in edges.iter().enumerate() {
            Self::link(&mut adjacency, &node_positions, edge.source, position);
            if edge.target != edge.source {
                Self::link(&mut adjacency, &node_positions, edge.target, position);
            }
        }

        let edge_positions = edges
            .iter()
            .enumerate()
            .map(|(position, edge)| (edge.id, position))
            .collect();
        let spatial = NodeIndex::new(&nodes);

        Self {
            nodes,
            edges,
            node_positions,
            edge_positions,
            adjacency,
            spatial,
        }
    }

    fn link(
        adjacency: &mut [Vec<usize>],
        node_positions: &HashMap<NodeId, usize>,
        node: NodeId,
        edge_position: usize,
    ) {
        if let Some(list) = node_positions
            .get(&node)
            .and_then(|position| adjacency.get_mut(*position))
        {
            list.push(edge_position);
        }
    }

    /// Number of distinct nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct edges.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph holds no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by identifier.
    #[must_use]
    pub fn get_node_by_id(&self, id: NodeId) -> Option<&RailwayNode> {
        let position = self.node_positions.get(&id)?;
        self.nodes.get(*position)
    }

    /// Look up an edge by identifier.
    #[must_use]
    pub fn get_edge_by_id(&self, id: EdgeId) -> Option<&RailwayEdge> {
        let position = self.edge_positions.get(&id)?;
        self.edges.get(*position)
    }

    /// Whether a node with `id` exists.
    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node_positions.contains_key(&id)
    }

    /// Whether an edge with `id` exists.
    #[must_use]
    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edge_positions.contains_key(&id)
    }

    /// Nodes in the order their identifiers first appeared in the input.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &RailwayNode> + '_ {
        self.nodes.iter()
    }

    /// Edges in the order their identifiers first appeared in the input.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = &RailwayEdge> + '_ {
        self.edges.iter()
    }

    /// Edges incident to `node`. Unknown nodes have no edges.
    #[must_use]
    pub fn edges_of_node(&self, node: NodeId) -> Vec<&RailwayEdge> {
        self.incident_positions(node)
            .iter()
            .filter_map(|position| self.edges.get(*position))
            .collect()
    }

    /// Nodes sharing an edge with `node`, without repeats.
    ///
    /// A self-loop makes a node its own neighbour.
    #[must_use]
    pub fn neighbours(&self, node: NodeId) -> Vec<NodeId> {
        let mut seen: Vec<NodeId> = Vec::new();
        for edge in self.edges_of_node(node) {
            if let Some(other) = edge.opposite(node)
                && !seen.contains(&other)
            {
                seen.push(other);
            }
        }
        seen
    }

    /// An edge joining `a` and `b` in either direction.
    #[must_use]
    pub fn railway_edge(&self, a: NodeId, b: NodeId) -> Option<&RailwayEdge> {
        self.edges_of_node(a)
            .into_iter()
            .find(|edge| edge.connects(a, b))
    }

    /// Smallest rectangle covering every node, or `None` for an empty graph.
    ///
    /// Coordinates are WGS84 with `x = longitude`, `y = latitude`.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Rect<f64>> {
        let mut locations = self.nodes.iter().map(|node| node.location);
        let first = locations.next()?;
        let (min, max) = locations.fold((first, first), |(min, max), location| {
            (
                Coord {
                    x: min.x.min(location.x),
                    y: min.y.min(location.y),
                },
                Coord {
                    x: max.x.max(location.x),
                    y: max.y.max(location.y),
                },
            )
        });
        Some(Rect::new(min, max))
    }

    /// Sum of all edge lengths in metres.
    #[must_use]
    pub fn total_length_m(&self) -> f64 {
        self.edges.iter().map(|edge| edge.length_m).sum()
    }

    /// Node closest to `location`.
    ///
    /// Returns `None` for an empty graph or when `location` is not a finite
    /// WGS84 position. Distances are planar in degrees, which is adequate for
    /// picking the nearest node within a regional network.
    #[must_use]
    pub fn nearest_node(&self, location: Coord<f64>) -> Option<&RailwayNode> {
        let query = validated_coord(location)?;
        let position = self.spatial.nearest(query)?;
        self.nodes.get(position)
    }

    /// A new graph holding the nodes inside `area` and the edges whose
    /// endpoints both lie inside it.
    ///
    /// Points on the boundary count as inside.
    #[must_use]
    pub fn filter_to_bbox(&self, area: &Rect<f64>) -> Self {
        let nodes: Vec<RailwayNode> = self
            .nodes
            .iter()
            .filter(|node| area.intersects(&node.location))
            .cloned()
            .collect();
        let edges: Vec<RailwayEdge> = self
            .edges
            .iter()
            .filter(|edge| {
                self.located_within(edge.source, area) && self.located_within(edge.target, area)
            })
            .cloned()
            .collect();
        Self::from_parts(nodes, edges)
    }

    fn located_within(&self, node: NodeId, area: &Rect<f64>) -> bool {
        self.get_node_by_id(node)
            .is_some_and(|node| area.intersects(&node.location))
    }

    fn incident_positions(&self, node: NodeId) -> &[usize] {
        self.node_positions
            .get(&node)
            .and_then(|position| self.adjacency.get(*position))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Summary figures for reporting.
    #[must_use]
    pub fn statistics(&self) -> GraphStatistics {
        GraphStatistics::from_graph(self)
    }
}

impl Default for RailwayGraph {
    fn default() -> Self {
        Self::from_parts(Vec::new(), Vec::new())
    }
}

impl Clone for RailwayGraph {
    fn clone(&self) -> Self {
        Self::from_parts(self.nodes.clone(), self.edges.clone())
    }
}

impl PartialEq for RailwayGraph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

impl fmt::Debug for RailwayGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RailwayGraph")
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .field("spatial", &"<rstar::RTree>")
            .finish_non_exhaustive()
    }
}
