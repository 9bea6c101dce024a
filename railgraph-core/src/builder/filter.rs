//! Way eligibility for edge creation.
//!
//! Provides [`TrackFilter`] to decide whether a way's tags qualify it as
//! railway track.

use crate::Tags;

/// `railway=*` values treated as running track by [`TrackFilter::RailwayTagged`].
const TRACK_VALUES: &[&str] = &[
    "rail",
    "light_rail",
    "subway",
    "tram",
    "narrow_gauge",
    "funicular",
    "monorail",
    "preserved",
    "miniature",
];

/// Predicate deciding which ways may become edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrackFilter {
    /// Every way with two resolvable endpoints becomes an edge.
    ///
    /// Overpass queries already restrict results to railway features, so the
    /// document is trusted as-is.
    #[default]
    AnyWay,
    /// Only ways tagged `railway=<track value>` become edges.
    RailwayTagged,
}

impl TrackFilter {
    /// Returns true when a way carrying `tags` is eligible.
    ///
    /// # Examples
    /// ```
    /// use railgraph_core::{Tags, TrackFilter};
    ///
    /// let rail = Tags::from([("railway".into(), "rail".into())]);
    /// let platform = Tags::from([("railway".into(), "platform".into())]);
    /// assert!(TrackFilter::RailwayTagged.accepts(&rail));
    /// assert!(!TrackFilter::RailwayTagged.accepts(&platform));
    /// assert!(TrackFilter::AnyWay.accepts(&platform));
    /// ```
    #[must_use]
    pub fn accepts(self, tags: &Tags) -> bool {
        match self {
            Self::AnyWay => true,
            Self::RailwayTagged => tags
                .get("railway")
                .is_some_and(|value| is_track_value(value)),
        }
    }
}

fn is_track_value(value: &str) -> bool {
    TRACK_VALUES.contains(&value)
}
