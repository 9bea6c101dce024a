//! Error types emitted by the railgraph CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use railgraph_core::ImportError;
use railgraph_data::{AreaImportError, ClientBuildError};
use thiserror::Error;

/// Errors emitted by the railgraph CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// Neither an area nor an input document was configured.
    #[error("missing input (set --{area} or --{input}, or {env})")]
    MissingSource {
        /// Flag selecting an area fetch.
        area: &'static str,
        /// Flag selecting a local document.
        input: &'static str,
        /// Environment variable selecting an area fetch.
        env: &'static str,
    },
    /// Both an area and an input document were configured.
    #[error("--{area} and --{input} cannot be combined")]
    ConflictingSources {
        /// Flag selecting an area fetch.
        area: &'static str,
        /// Flag selecting a local document.
        input: &'static str,
    },
    /// Reading the input document failed.
    #[error("failed to read input document at {path:?}: {source}")]
    ReadInput {
        /// Path that could not be read.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The input document could not be imported.
    #[error("failed to import {path:?}: {source}")]
    ImportDocument {
        /// Path of the rejected document.
        path: Utf8PathBuf,
        /// Import failure.
        #[source]
        source: ImportError,
    },
    /// Constructing the Overpass client failed.
    #[error("failed to build Overpass client for {base_url:?}: {source}")]
    BuildClient {
        /// Configured interpreter URL.
        base_url: String,
        /// Construction failure.
        #[source]
        source: ClientBuildError,
    },
    /// Fetching or importing the requested area failed.
    #[error("failed to import area {area:?}: {source}")]
    ImportArea {
        /// Requested area name.
        area: String,
        /// Fetch or import failure.
        #[source]
        source: AreaImportError,
    },
    /// Starting the async runtime failed.
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// Serialising the graph statistics failed.
    #[error("failed to serialise graph statistics: {0}")]
    SerialiseStatistics(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
