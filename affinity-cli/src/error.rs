//! Error types emitted by the Affinity CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use affinity_core::RecommendError;
use affinity_data::LoadRatingsError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the Affinity CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A count option was zero after configuration merging.
    #[error("{field} must be at least 1 (set --{field} or {env})")]
    InvalidCount {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading or parsing the ratings file failed.
    #[error("failed to load ratings from {path:?}: {source}")]
    LoadRatings {
        path: Utf8PathBuf,
        #[source]
        source: LoadRatingsError,
    },
    /// The recommender rejected the request.
    #[error("recommendation failed: {0}")]
    Recommend(#[from] RecommendError),
    /// Serializing the recommendation report failed.
    #[error("failed to serialize recommendations: {0}")]
    SerializeReport(#[source] serde_json::Error),
    /// Writing the report failed.
    #[error("failed to write recommendations: {0}")]
    WriteOutput(#[source] std::io::Error),
}
