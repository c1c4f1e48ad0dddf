//! Error types emitted by the hirematch CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use hirematch_core::ScoringConfigError;
use hirematch_fuzzy::FuzzyError;
use hirematch_scorer::{ScorerBuildError, ScoringError};
use thiserror::Error;

use crate::telemetry::TelemetryError;

/// Errors emitted by the hirematch CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag of the option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// An option was present but unusable.
    #[error("invalid --{field}: {reason}")]
    InvalidArgument {
        /// Long flag of the option.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },
    /// The recruiter's scoring parameters were rejected.
    #[error("invalid scoring configuration: {0}")]
    ScoringConfig(#[from] ScoringConfigError),
    /// Logging could not be initialised.
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    /// Opening an input file failed.
    #[error("failed to open {field} at {path:?}: {source}")]
    OpenInput {
        /// Long flag naming the input.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The candidate CSV could not be read.
    #[error("failed to read candidate CSV at {path:?}: {source}")]
    ReadCandidates {
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
    /// The fuzzy system JSON could not be decoded.
    #[error("failed to parse fuzzy system JSON at {path:?}: {source}")]
    ParseFuzzySystem {
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// The fuzzy system definition failed validation.
    #[error("fuzzy system in {path:?} is invalid: {source}")]
    InvalidFuzzySystem {
        /// Offending path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: FuzzyError,
    },
    /// The fuzzy system cannot be fed by the feature extractor.
    #[error("fuzzy system in {path:?} cannot score candidates: {source}")]
    IncompatibleFuzzySystem {
        /// Offending path.
        path: Utf8PathBuf,
        /// Why the pairing failed.
        #[source]
        source: ScorerBuildError,
    },
    /// The fuzzy system's inputs are not `skills`, `cgpa` and `experience`.
    #[error("fuzzy system in {path:?} must declare inputs skills, cgpa, experience; found {found:?}")]
    FuzzySystemInputs {
        /// Offending path.
        path: Utf8PathBuf,
        /// Input names in declaration order.
        found: Vec<String>,
    },
    /// The built-in reference system failed to build.
    #[error("failed to build the reference fuzzy system: {0}")]
    ReferenceSystem(#[source] FuzzyError),
    /// Batch scoring was abandoned.
    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),
    /// Serialising the command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
