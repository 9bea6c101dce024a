//! Decode Overpass documents into element sequences.
//!
//! The top level must be an object with a numeric `version` and an
//! `elements` array; anything else rejects the whole document. Individual
//! entries that fail to decode are skipped and counted.

use log::debug;
use railgraph_core::{Element, ImportError};
use serde::Deserialize;
use serde_json::Value;

use super::document::RawElement;

/// Elements decoded from a document together with the entries dropped on
/// the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    /// Decoded elements in document order.
    pub elements: Vec<Element>,
    /// Entries skipped for an unknown `type` or undecodable fields.
    pub skipped: usize,
}

/// Decode raw document text into elements.
///
/// # Errors
///
/// Returns [`ImportError::MalformedInput`] when `text` is not JSON or lacks
/// the expected top-level shape.
///
/// # Examples
/// ```
/// use railgraph_data::parse_document;
///
/// let text = r#"{"version": 0.6, "elements": [
///     {"type": "node", "id": 1, "lat": 50.11, "lon": 8.68},
///     {"type": "relation", "id": 9}
/// ]}"#;
/// let elements = parse_document(text)?;
/// assert_eq!(elements.len(), 1);
///
/// assert!(parse_document(r#"{"version": 0.6}"#).is_err());
/// # Ok::<(), railgraph_core::ImportError>(())
/// ```
pub fn parse_document(text: &str) -> Result<Vec<Element>, ImportError> {
    parse_document_report(text).map(|report| report.elements)
}

/// Decode raw document text, reporting how many entries were skipped.
///
/// # Errors
///
/// Returns [`ImportError::MalformedInput`] as [`parse_document`] does.
pub fn parse_document_report(text: &str) -> Result<ParseReport, ImportError> {
    let value: Value = serde_json::from_str(text).map_err(ImportError::malformed)?;
    parse_value_report(&value)
}

/// Decode an already-parsed JSON document into elements.
///
/// # Errors
///
/// Returns [`ImportError::MalformedInput`] when `value` lacks the expected
/// top-level shape.
pub fn parse_value(value: &Value) -> Result<Vec<Element>, ImportError> {
    parse_value_report(value).map(|report| report.elements)
}

pub(crate) fn parse_value_report(value: &Value) -> Result<ParseReport, ImportError> {
    let entries = top_level_elements(value)?;
    let mut report = ParseReport {
        elements: Vec::with_capacity(entries.len()),
        skipped: 0,
    };
    for (position, entry) in entries.iter().enumerate() {
        match RawElement::deserialize(entry) {
            Ok(raw) => report.elements.push(Element::from(raw)),
            Err(err) => {
                debug!("Skipped element at position {position}: {err}");
                report.skipped += 1;
            }
        }
    }
    Ok(report)
}

fn top_level_elements(value: &Value) -> Result<&[Value], ImportError> {
    let Some(document) = value.as_object() else {
        return Err(ImportError::malformed("document must be a JSON object"));
    };
    if !document.get("version").is_some_and(Value::is_number) {
        return Err(ImportError::malformed("missing numeric `version` field"));
    }
    document
        .get("elements")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| ImportError::malformed("missing `elements` array"))
}
