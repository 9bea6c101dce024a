//! Railway point features held by the graph.

use geo::Coord;

use crate::{NodeId, Tags};

/// A railway point feature: station, switch, junction or similar.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use railgraph_core::{RailwayNode, Tags};
///
/// let node = RailwayNode::new(
///     1,
///     Coord { x: 8.6090232, y: 50.1191127 },
///     Tags::from([("railway".into(), "station".into())]),
/// );
/// assert_eq!(node.lat(), 50.1191127);
/// assert_eq!(node.tag("railway"), Some("station"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RailwayNode {
    /// Node identifier.
    pub id: NodeId,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Free-form tags copied from the source element.
    pub tags: Tags,
}

impl RailwayNode {
    /// Construct a node.
    #[must_use]
    pub const fn new(id: NodeId, location: Coord<f64>, tags: Tags) -> Self {
        Self { id, location, tags }
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.location.y
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.location.x
    }

    /// Value of the tag `key`, if present.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}
