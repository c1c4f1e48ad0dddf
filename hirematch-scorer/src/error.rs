//! Error types raised while building scorers and scoring batches.

use std::time::Duration;

use thiserror::Error;

/// Batch-level failures. Per-candidate problems are reported in
/// [`BatchOutcome::failures`](crate::BatchOutcome::failures) instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScoringError {
    /// The batch ran past its deadline and was abandoned.
    #[error("scoring timed out after {limit:?} with {completed} of {total} candidates scored")]
    Timeout {
        /// Configured time limit.
        limit: Duration,
        /// Candidates scored before workers stopped.
        completed: usize,
        /// Candidates in the batch.
        total: usize,
    },
    /// A worker thread panicked.
    #[error("a scoring worker panicked")]
    WorkerPanicked,
}

/// Errors raised when pairing a fuzzy system with the feature extractor.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ScorerBuildError {
    /// The system does not take one input per extracted feature.
    #[error("fuzzy system must take {expected} inputs (skills, cgpa, experience), found {actual}")]
    InputArity {
        /// Inputs the extractor produces.
        expected: usize,
        /// Inputs the system declares.
        actual: usize,
    },
}
