//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use affinity_cli::CliError;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

fn main() {
    init_logging();
    match affinity_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("affinity: {err}");
            std::process::exit(1);
        }
    }
}

/// Route `log` records to stderr, filtered by `RUST_LOG`.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
