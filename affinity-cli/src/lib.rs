//! Command-line interface for the Affinity recommender.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod recommend;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};

const ARG_RATINGS: &str = "ratings";
const ARG_USER: &str = "user";
const ARG_NEIGHBOURS: &str = "neighbours";
const ARG_TOP: &str = "top";
const ARG_FORMAT: &str = "format";
const ENV_NEIGHBOURS: &str = "AFFINITY_CMDS_RECOMMEND_NEIGHBOURS";
const ENV_TOP: &str = "AFFINITY_CMDS_RECOMMEND_TOP";

/// Run the Affinity CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when argument parsing, configuration, loading, or
/// output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "affinity",
    about = "User-based collaborative filtering over explicit ratings",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend unrated items for a user.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
