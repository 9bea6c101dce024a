//! Command-line interface for importing railway graphs.
//!
//! `railgraph import` reads a saved Overpass document or fetches a named
//! area, builds the railway graph and prints its statistics as JSON.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod import;

pub use error::CliError;

use import::ImportArgs;

pub(crate) const ARG_AREA: &str = "area";
pub(crate) const ARG_INPUT: &str = "input";
pub(crate) const ARG_OVERPASS_URL: &str = "overpass-url";
pub(crate) const ARG_TIMEOUT_SECS: &str = "timeout-secs";
pub(crate) const ARG_RAILWAY_ONLY: &str = "railway-only";
pub(crate) const ENV_AREA: &str = "RAILGRAPH_CMDS_IMPORT_AREA";

/// Run the railgraph CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when arguments or configuration are invalid, the
/// input cannot be read or imported, or the output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Import(args) => import::run_import(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "railgraph",
    about = "Build railway network graphs from OpenStreetMap data",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Import an area or a saved document and print graph statistics.
    Import(ImportArgs),
}

#[cfg(test)]
mod tests;
