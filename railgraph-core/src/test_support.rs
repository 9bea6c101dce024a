//! Element constructors shared by unit tests and integration tests.

use geo::Coord;

use crate::{EdgeId, Element, NodeElement, NodeId, Tags, WayElement};

/// Collect borrowed key/value pairs into owned [`Tags`].
#[must_use]
pub fn tags(pairs: &[(&str, &str)]) -> Tags {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect()
}

/// A node element at `lat`/`lon` carrying `pairs` as tags.
#[must_use]
pub fn node_element(id: NodeId, lat: f64, lon: f64, pairs: &[(&str, &str)]) -> Element {
    Element::Node(NodeElement::new(id, Coord { x: lon, y: lat }, tags(pairs)))
}

/// A node element tagged `railway=station`.
#[must_use]
pub fn station(id: NodeId, lat: f64, lon: f64) -> Element {
    node_element(id, lat, lon, &[("railway", "station")])
}

/// A way element carrying `pairs` as tags, without geometry.
#[must_use]
pub fn way(id: EdgeId, node_refs: Vec<NodeId>, pairs: &[(&str, &str)]) -> Element {
    Element::Way(WayElement::new(id, node_refs, tags(pairs)))
}

/// A way element tagged `railway=rail` without geometry.
#[must_use]
pub fn track(id: EdgeId, node_refs: Vec<NodeId>) -> Element {
    way(id, node_refs, &[("railway", "rail")])
}

/// A way element tagged `railway=rail` following `path` of `(lat, lon)` pairs.
#[must_use]
pub fn track_with_path(id: EdgeId, node_refs: Vec<NodeId>, path: &[(f64, f64)]) -> Element {
    let geometry = path.iter().map(|&(lat, lon)| Coord { x: lon, y: lat }).collect();
    Element::Way(
        WayElement::new(id, node_refs, tags(&[("railway", "rail")])).with_geometry(geometry),
    )
}

/// Two stations joined by one rail way with a two-point geometry.
///
/// Node ids are 1 and 2, the way id is 3.
#[must_use]
pub fn two_station_line() -> Vec<Element> {
    vec![
        station(1, 50.1109, 8.6821),
        station(2, 50.1119, 8.6831),
        track_with_path(3, vec![1, 2], &[(50.1109, 8.6821), (50.1119, 8.6831)]),
    ]
}
