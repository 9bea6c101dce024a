//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use railgraph_cli::CliError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    match railgraph_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("railgraph: {err}");
            std::process::exit(1);
        }
    }
}
