//! Overpass QL text for railway extracts.
//!
//! Both queries select `railway=rail` ways and `railway=switch` nodes and ask
//! for inline way geometry with `out geom`.

use geo::Rect;

/// Query selecting railway features inside the area named `area_name`.
///
/// # Examples
/// ```
/// use railgraph_data::overpass::area_query;
///
/// let query = area_query("Frankfurt am Main");
/// assert!(query.starts_with(r#"[out:json];area[name="Frankfurt am Main"]"#));
/// ```
#[must_use]
pub fn area_query(area_name: &str) -> String {
    format!(
        "[out:json];area[name=\"{}\"]->.searchArea;\
         (way(area.searchArea)[\"railway\"=\"rail\"];\
         node(area.searchArea)[\"railway\"=\"switch\"];);out geom;",
        escape(area_name)
    )
}

/// Query selecting railway features inside `bounds`.
///
/// `bounds` uses `x = longitude`, `y = latitude`; Overpass expects
/// `south,west,north,east`.
#[must_use]
pub fn bbox_query(bounds: &Rect<f64>) -> String {
    let min = bounds.min();
    let max = bounds.max();
    let filter = format!("{},{},{},{}", min.y, min.x, max.y, max.x);
    format!(
        "[out:json];(way({filter})[\"railway\"=\"rail\"];\
         node({filter})[\"railway\"=\"switch\"];);out geom;"
    )
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
