//! Typed representation of decoded Overpass elements.
//!
//! Elements are the hand-off format between document decoding and graph
//! construction. Coordinates are WGS84 with `x = longitude`, `y = latitude`.

use geo::Coord;

use crate::{EdgeId, NodeId, Tags};

/// Discriminant of an [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A point feature.
    Node,
    /// A line feature referencing nodes.
    Way,
}

/// A single decoded feature.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use railgraph_core::{Element, ElementKind, NodeElement};
///
/// let element = Element::Node(NodeElement::with_empty_tags(7, Coord { x: 8.68, y: 50.11 }));
/// assert_eq!(element.id(), 7);
/// assert_eq!(element.kind(), ElementKind::Node);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Point feature with a coordinate.
    Node(NodeElement),
    /// Line feature with node references and optional geometry.
    Way(WayElement),
}

impl Element {
    /// Identifier of the underlying feature within its own namespace.
    #[must_use]
    pub const fn id(&self) -> i64 {
        match self {
            Self::Node(node) => node.id,
            Self::Way(way) => way.id,
        }
    }

    /// Kind discriminant of the element.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::Node(_) => ElementKind::Node,
            Self::Way(_) => ElementKind::Way,
        }
    }
}

/// A point feature as it appeared in the source document.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeElement {
    /// Node identifier.
    pub id: NodeId,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Free-form tags.
    pub tags: Tags,
}

impl NodeElement {
    /// Construct a node element with the provided tags.
    #[must_use]
    pub const fn new(id: NodeId, location: Coord<f64>, tags: Tags) -> Self {
        Self { id, location, tags }
    }

    /// Construct a node element without tags.
    #[must_use]
    pub fn with_empty_tags(id: NodeId, location: Coord<f64>) -> Self {
        Self::new(id, location, Tags::new())
    }
}

/// A line feature as it appeared in the source document.
///
/// `node_refs` keeps the full reference list; only the first and last entries
/// are used as edge endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct WayElement {
    /// Way identifier.
    pub id: EdgeId,
    /// Ordered node references.
    pub node_refs: Vec<NodeId>,
    /// Physical path of the way, empty when the source supplied none.
    pub geometry: Vec<Coord<f64>>,
    /// Free-form tags.
    pub tags: Tags,
}

impl WayElement {
    /// Construct a way element without geometry.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use railgraph_core::{Tags, WayElement};
    ///
    /// let way = WayElement::new(3, vec![1, 2], Tags::new())
    ///     .with_geometry(vec![Coord { x: 8.68, y: 50.11 }, Coord { x: 8.69, y: 50.12 }]);
    /// assert_eq!(way.endpoints(), Some((1, 2)));
    /// assert_eq!(way.geometry.len(), 2);
    /// ```
    #[must_use]
    pub const fn new(id: EdgeId, node_refs: Vec<NodeId>, tags: Tags) -> Self {
        Self {
            id,
            node_refs,
            geometry: Vec::new(),
            tags,
        }
    }

    /// Attach a geometry to the way.
    #[must_use]
    pub fn with_geometry(mut self, geometry: Vec<Coord<f64>>) -> Self {
        self.geometry = geometry;
        self
    }

    /// First and last node references, if the way references at least two
    /// nodes.
    #[must_use]
    pub fn endpoints(&self) -> Option<(NodeId, NodeId)> {
        match self.node_refs.as_slice() {
            [first, .., last] => Some((*first, *last)),
            _ => None,
        }
    }
}
