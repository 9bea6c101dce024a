//! Railway track segments joining two graph nodes.

use geo::{Coord, Distance, Haversine, LineString, Point};

use crate::{EdgeId, NodeId, Tags};

/// A railway line feature connecting exactly two nodes.
///
/// `geometry` runs from `source` to `target` and is empty when the source
/// document carried no geometry for the way.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RailwayEdge {
    /// Edge identifier, equal to the originating way identifier.
    pub id: EdgeId,
    /// Node at the first reference of the way.
    pub source: NodeId,
    /// Node at the last reference of the way.
    pub target: NodeId,
    /// Free-form tags copied from the source way.
    pub tags: Tags,
    /// Physical path between the endpoints.
    pub geometry: LineString<f64>,
    /// Geodesic length of `geometry` in metres.
    pub length_m: f64,
}

impl RailwayEdge {
    /// Construct an edge, computing its length from the geometry.
    ///
    /// # Examples
    /// ```
    /// use geo::{Coord, LineString};
    /// use railgraph_core::{RailwayEdge, Tags};
    ///
    /// let path = LineString::from(vec![
    ///     Coord { x: 8.6821, y: 50.1109 },
    ///     Coord { x: 8.6831, y: 50.1119 },
    /// ]);
    /// let edge = RailwayEdge::new(3, 1, 2, Tags::new(), path);
    /// assert!(edge.length_m > 130.0 && edge.length_m < 135.0);
    /// ```
    #[must_use]
    pub fn new(
        id: EdgeId,
        source: NodeId,
        target: NodeId,
        tags: Tags,
        geometry: LineString<f64>,
    ) -> Self {
        let length_m = geodesic_length(&geometry);
        Self {
            id,
            source,
            target,
            tags,
            geometry,
            length_m,
        }
    }

    /// Whether the edge joins `a` and `b` in either direction.
    #[must_use]
    pub const fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    /// The endpoint opposite `node`, or `None` if `node` is not an endpoint.
    #[must_use]
    pub const fn opposite(&self, node: NodeId) -> Option<NodeId> {
        if self.source == node {
            Some(self.target)
        } else if self.target == node {
            Some(self.source)
        } else {
            None
        }
    }

    /// Value of the tag `key`, if present.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}

/// Sum of haversine distances between consecutive points, in metres.
pub(crate) fn geodesic_length(geometry: &LineString<f64>) -> f64 {
    geometry
        .lines()
        .map(|line| Haversine.distance(Point::from(line.start), Point::from(line.end)))
        .sum()
}

/// Orient `path` so that it starts at the endpoint nearest its first point.
///
/// Overpass returns way geometry in the way's own node order, which can run
/// against the endpoint order once references are resolved.
pub(crate) fn oriented_geometry(
    path: &[Coord<f64>],
    source: Coord<f64>,
    target: Coord<f64>,
) -> LineString<f64> {
    let Some(first) = path.first().copied().map(Point::from) else {
        return LineString::new(Vec::new());
    };
    let from_source = Haversine.distance(Point::from(source), first);
    let from_target = Haversine.distance(Point::from(target), first);
    if from_source > from_target {
        path.iter().rev().copied().collect()
    } else {
        path.iter().copied().collect()
    }
}
