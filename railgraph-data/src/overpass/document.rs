//! Wire types for Overpass `[out:json]` elements.
//!
//! Only the fields the importer reads are modelled; everything else in the
//! payload is ignored.

use geo::Coord;
use railgraph_core::{EdgeId, Element, NodeElement, NodeId, Tags, WayElement};
use serde::Deserialize;

/// A single entry of the `elements` array, discriminated by `type`.
///
/// Relations and any other element type fail to decode and are skipped by
/// the parser.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(super) enum RawElement {
    Node(RawNode),
    Way(RawWay),
}

#[derive(Debug, Deserialize)]
pub(super) struct RawNode {
    id: NodeId,
    lat: f64,
    lon: f64,
    #[serde(default)]
    tags: Tags,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawWay {
    id: EdgeId,
    #[serde(default)]
    nodes: Vec<NodeId>,
    /// `out geom` emits `null` for member nodes outside the query area.
    #[serde(default)]
    geometry: Vec<Option<RawPoint>>,
    #[serde(default)]
    tags: Tags,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct RawPoint {
    lat: f64,
    lon: f64,
}

impl From<RawPoint> for Coord<f64> {
    fn from(point: RawPoint) -> Self {
        Self {
            x: point.lon,
            y: point.lat,
        }
    }
}

impl From<RawElement> for Element {
    fn from(raw: RawElement) -> Self {
        match raw {
            RawElement::Node(node) => Self::Node(NodeElement::new(
                node.id,
                Coord {
                    x: node.lon,
                    y: node.lat,
                },
                node.tags,
            )),
            RawElement::Way(way) => {
                let geometry = way.geometry.into_iter().flatten().map(Coord::from).collect();
                Self::Way(WayElement::new(way.id, way.nodes, way.tags).with_geometry(geometry))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn decode(value: &serde_json::Value) -> Result<Element, serde_json::Error> {
        RawElement::deserialize(value).map(Element::from)
    }

    #[rstest]
    fn node_without_tags_gets_empty_tags() {
        let element = decode(&json!({"type": "node", "id": 7, "lat": 50.1, "lon": 8.6}))
            .expect("node decodes");
        let Element::Node(node) = element else {
            panic!("expected a node");
        };
        assert_eq!(node.location, Coord { x: 8.6, y: 50.1 });
        assert!(node.tags.is_empty());
    }

    #[rstest]
    fn way_skips_null_geometry_points() {
        let element = decode(&json!({
            "type": "way",
            "id": 3,
            "nodes": [1, 2, 4],
            "geometry": [{"lat": 50.0, "lon": 8.0}, null, {"lat": 50.2, "lon": 8.2}],
            "tags": {"railway": "rail"}
        }))
        .expect("way decodes");
        let Element::Way(way) = element else {
            panic!("expected a way");
        };
        assert_eq!(way.node_refs, vec![1, 2, 4]);
        assert_eq!(way.geometry.len(), 2);
        assert_eq!(way.tags.get("railway").map(String::as_str), Some("rail"));
    }

    #[rstest]
    fn way_without_nodes_decodes_empty() {
        let element = decode(&json!({"type": "way", "id": 3})).expect("way decodes");
        assert!(matches!(element, Element::Way(way) if way.node_refs.is_empty()));
    }

    #[rstest]
    #[case::relation(json!({"type": "relation", "id": 1, "members": []}))]
    #[case::missing_type(json!({"id": 1, "lat": 50.0, "lon": 8.0}))]
    #[case::node_without_lat(json!({"type": "node", "id": 1, "lon": 8.0}))]
    #[case::string_id(json!({"type": "node", "id": "one", "lat": 50.0, "lon": 8.0}))]
    fn undecodable_entries_fail(#[case] value: serde_json::Value) {
        assert!(decode(&value).is_err());
    }
}
