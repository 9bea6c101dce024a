//! `import` command: read or fetch a document and report graph statistics.

use std::io::Write;
use std::time::Duration;

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use railgraph_core::{AreaFetch, GraphStatistics, RailwayGraph, TrackFilter};
use railgraph_data::{
    ImportOptions, OverpassClient, OverpassClientConfig, fetch_and_import, import_graph_with,
};
use serde::{Deserialize, Serialize};

use crate::fs::read_utf8_file;
use crate::{
    ARG_AREA, ARG_INPUT, ARG_OVERPASS_URL, ARG_RAILWAY_ONLY, ARG_TIMEOUT_SECS, CliError, ENV_AREA,
};

/// CLI arguments for the `import` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Build a railway graph from either a named area fetched \
                 from an Overpass interpreter or a saved Overpass JSON \
                 document, then print summary statistics as JSON. Options \
                 can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Import railway data and print graph statistics"
)]
#[ortho_config(prefix = "RAILGRAPH")]
pub(crate) struct ImportArgs {
    /// Name of the area to fetch (e.g. "Frankfurt am Main").
    #[arg(long = ARG_AREA, value_name = "name")]
    #[serde(default)]
    pub(crate) area: Option<String>,
    /// Path to a saved Overpass JSON document.
    #[arg(long = ARG_INPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Overpass interpreter endpoint.
    #[arg(long = ARG_OVERPASS_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) overpass_url: Option<String>,
    /// Request timeout for area fetches.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "seconds")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// Keep only ways tagged as railway track.
    #[arg(
        long = ARG_RAILWAY_ONLY,
        value_name = "bool",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) railway_only: Option<bool>,
}

impl ImportArgs {
    pub(crate) fn into_config(self) -> Result<ImportConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ImportConfig::try_from(merged)
    }
}

/// Where the document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ImportSource {
    /// Fetch the named area from Overpass.
    Area(String),
    /// Read a saved document from disk.
    File(Utf8PathBuf),
}

/// Resolved `import` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ImportConfig {
    pub(crate) source: ImportSource,
    pub(crate) client: OverpassClientConfig,
    pub(crate) options: ImportOptions,
}

impl TryFrom<ImportArgs> for ImportConfig {
    type Error = CliError;

    fn try_from(args: ImportArgs) -> Result<Self, Self::Error> {
        let source = match (args.area, args.input) {
            (Some(area), None) => ImportSource::Area(area),
            (None, Some(path)) => ImportSource::File(path),
            (Some(_), Some(_)) => {
                return Err(CliError::ConflictingSources {
                    area: ARG_AREA,
                    input: ARG_INPUT,
                });
            }
            (None, None) => {
                return Err(CliError::MissingSource {
                    area: ARG_AREA,
                    input: ARG_INPUT,
                    env: ENV_AREA,
                });
            }
        };

        let mut client = OverpassClientConfig::default();
        if let Some(url) = args.overpass_url {
            client.base_url = url;
        }
        if let Some(secs) = args.timeout_secs {
            client = client.with_timeout(Duration::from_secs(secs));
        }

        let filter = if args.railway_only.unwrap_or(false) {
            TrackFilter::RailwayTagged
        } else {
            TrackFilter::AnyWay
        };

        Ok(Self {
            source,
            client,
            options: ImportOptions::new().with_filter(filter),
        })
    }
}

/// Builds the area fetcher for an `import` invocation.
pub(crate) trait AreaFetchBuilder {
    fn build(&self, config: &OverpassClientConfig) -> Result<Box<dyn AreaFetch>, CliError>;
}

pub(crate) struct OverpassFetchBuilder;

impl AreaFetchBuilder for OverpassFetchBuilder {
    fn build(&self, config: &OverpassClientConfig) -> Result<Box<dyn AreaFetch>, CliError> {
        let client =
            OverpassClient::with_config(config.clone()).map_err(|source| CliError::BuildClient {
                base_url: config.base_url.clone(),
                source,
            })?;
        Ok(Box::new(client))
    }
}

pub(crate) fn run_import(args: ImportArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let mut stdout = std::io::stdout().lock();
    run_import_with(&config, &OverpassFetchBuilder, &mut stdout)
}

pub(crate) fn run_import_with(
    config: &ImportConfig,
    builder: &dyn AreaFetchBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let graph = load_graph(config, builder)?;
    write_statistics(writer, &graph.statistics())
}

fn load_graph(
    config: &ImportConfig,
    builder: &dyn AreaFetchBuilder,
) -> Result<RailwayGraph, CliError> {
    match &config.source {
        ImportSource::File(path) => {
            info!("Reading Overpass document from {path}");
            let text = read_utf8_file(path).map_err(|source| CliError::ReadInput {
                path: path.clone(),
                source,
            })?;
            import_graph_with(&text, &config.options).map_err(|source| {
                CliError::ImportDocument {
                    path: path.clone(),
                    source,
                }
            })
        }
        ImportSource::Area(area) => {
            info!("Fetching area {area:?} from {}", config.client.base_url);
            let fetcher = builder.build(&config.client)?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(CliError::Runtime)?;
            runtime
                .block_on(fetch_and_import(fetcher.as_ref(), area, &config.options))
                .map_err(|source| CliError::ImportArea {
                    area: area.clone(),
                    source,
                })
        }
    }
}

fn write_statistics(writer: &mut dyn Write, statistics: &GraphStatistics) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(statistics).map_err(CliError::SerialiseStatistics)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ImportConfig, CliError> {
    let merged = ImportArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ImportConfig::try_from(merged)
}
