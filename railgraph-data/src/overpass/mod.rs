//! Overpass API support: document decoding, query text and HTTP transport.
//!
//! # Example
//!
//! ```no_run
//! use railgraph_core::AreaFetch;
//! use railgraph_data::overpass::{OverpassClient, OverpassClientConfig, parse_document};
//! use std::time::Duration;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = OverpassClientConfig::default().with_timeout(Duration::from_secs(60));
//! let client = OverpassClient::with_config(config)?;
//!
//! let text = client.fetch_area("Frankfurt am Main").await?;
//! let elements = parse_document(&text)?;
//! println!("{} elements", elements.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod document;
pub(crate) mod parse;
mod query;

#[doc(hidden)]
pub mod test_support;

pub use client::{
    ClientBuildError, DEFAULT_OVERPASS_URL, DEFAULT_USER_AGENT, OverpassClient,
    OverpassClientConfig,
};
pub use parse::{ParseReport, parse_document, parse_document_report, parse_value};
pub use query::{area_query, bbox_query};
