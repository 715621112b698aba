//! Recommend command implementation for the Affinity CLI.

use affinity_core::RecommendationReport;
use affinity_data::fs::{PathKind, inspect};
use affinity_recommender::{DEFAULT_NEIGHBOURHOOD_SIZE, DEFAULT_TOP_N, Recommender};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{
    ARG_FORMAT, ARG_NEIGHBOURS, ARG_RATINGS, ARG_TOP, ARG_USER, CliError, ENV_NEIGHBOURS, ENV_TOP,
};

/// Ratings file read when no path is configured.
pub(crate) const DEFAULT_RATINGS_PATH: &str = "data/dataset.csv";
/// User recommended for when no id is configured.
pub(crate) const DEFAULT_USER: u64 = 1;

/// Rendering used for the recommendation report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON report.
    Json,
}

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Recommend unrated items for a user by finding the most \
                 similar users (Pearson correlation over co-rated items) \
                 and summing their similarity-weighted ratings.",
    about = "Recommend items for a user"
)]
#[ortho_config(prefix = "AFFINITY")]
pub(crate) struct RecommendArgs {
    /// Path to a `user,item,rating` file (defaults to `data/dataset.csv`).
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) ratings: Option<Utf8PathBuf>,
    /// User to recommend for (defaults to 1).
    #[arg(long = ARG_USER, value_name = "id")]
    #[serde(default)]
    pub(crate) user: Option<u64>,
    /// Number of neighbours consulted (defaults to 10).
    #[arg(long = ARG_NEIGHBOURS, value_name = "count")]
    #[serde(default)]
    pub(crate) neighbours: Option<usize>,
    /// Number of recommendations printed (defaults to 5).
    #[arg(long = ARG_TOP, value_name = "count")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_name = "format", value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) ratings: Utf8PathBuf,
    pub(crate) user: u64,
    pub(crate) neighbours: usize,
    pub(crate) top: usize,
    pub(crate) format: OutputFormat,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.ratings, ARG_RATINGS)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match inspect(path) {
            Ok(PathKind::File) => Ok(()),
            Ok(PathKind::NotFile) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Ok(PathKind::Missing) => Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn recommender(&self) -> Recommender {
        Recommender::new()
            .with_neighbourhood_size(self.neighbours)
            .with_top_n(self.top)
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let neighbours = positive_count(
            args.neighbours.unwrap_or(DEFAULT_NEIGHBOURHOOD_SIZE),
            ARG_NEIGHBOURS,
            ENV_NEIGHBOURS,
        )?;
        let top = positive_count(args.top.unwrap_or(DEFAULT_TOP_N), ARG_TOP, ENV_TOP)?;
        Ok(Self {
            ratings: args
                .ratings
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_RATINGS_PATH)),
            user: args.user.unwrap_or(DEFAULT_USER),
            neighbours,
            top,
            format: args.format.unwrap_or_default(),
        })
    }
}

fn positive_count(
    value: usize,
    field: &'static str,
    env: &'static str,
) -> Result<usize, CliError> {
    if value == 0 {
        Err(CliError::InvalidCount { field, env })
    } else {
        Ok(value)
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_recommend_config(args)?;
    let report = execute_recommend(&config)?;
    write_report(writer, &report, config.top, config.format)
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_recommend(config: &RecommendConfig) -> Result<RecommendationReport, CliError> {
    let matrix =
        affinity_data::load_ratings(&config.ratings).map_err(|source| CliError::LoadRatings {
            path: config.ratings.clone(),
            source,
        })?;
    debug!(
        "recommending for user {} with {} neighbours",
        config.user, config.neighbours
    );
    Ok(config.recommender().report(&matrix, config.user)?)
}

pub(super) fn write_report(
    writer: &mut dyn Write,
    report: &RecommendationReport,
    top: usize,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => write_text(writer, report, top).map_err(CliError::WriteOutput),
        OutputFormat::Json => {
            let payload =
                serde_json::to_string_pretty(report).map_err(CliError::SerializeReport)?;
            writer
                .write_all(payload.as_bytes())
                .map_err(CliError::WriteOutput)?;
            writer.write_all(b"\n").map_err(CliError::WriteOutput)
        }
    }
}

fn write_text(
    writer: &mut dyn Write,
    report: &RecommendationReport,
    top: usize,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "Top {top} recommendations for user {}:",
        report.user
    )?;
    for recommendation in &report.recommendations {
        writeln!(
            writer,
            "Item: {}, Predicted Score: {:.4}",
            recommendation.item, recommendation.score
        )?;
    }
    Ok(())
}

