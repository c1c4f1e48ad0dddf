//! Candidate scoring engines for hirematch.
//!
//! The crate turns [`CandidateRecord`](hirematch_core::CandidateRecord)s into
//! scores:
//! - **Feature extraction** maps skills, CGPA and experience onto the crisp
//!   scales of the fuzzy inputs through pluggable [`TierPolicy`] tables, and
//!   short-circuits candidates below the recruiter's thresholds.
//! - **[`FuzzyCandidateScorer`]** feeds those features to a
//!   [`FuzzySystem`](hirematch_fuzzy::FuzzySystem).
//! - **[`AdditiveScorer`]** sums the same features with the legacy point
//!   tables.
//! - **[`BatchScorer`]** scores whole uploads on a scoped worker pool with an
//!   optional deadline.
//!
//! # Examples
//!
//! ```
//! use hirematch_core::{CandidateRecord, Cgpa, ScoringConfig, rank};
//! use hirematch_scorer::{BatchScorer, FuzzyCandidateScorer};
//!
//! let scorer = FuzzyCandidateScorer::reference().expect("reference system builds");
//! let config = ScoringConfig::new(["Python", "SQL"]).expect("valid config");
//! let records = vec![
//!     CandidateRecord::new("Ada", ["Python", "SQL"], Some(Cgpa::Value(3.8)), Some(24)),
//!     CandidateRecord::new("Bob", ["Excel"], Some(Cgpa::Value(2.2)), Some(0)),
//! ];
//! let outcome = BatchScorer::new(scorer)
//!     .score_candidates(&records, &config)
//!     .expect("batch completes");
//! let ranked = rank(outcome.results);
//! assert_eq!(ranked.first().map(|r| r.candidate.as_str()), Some("Ada"));
//! ```

#![forbid(unsafe_code)]

mod additive;
mod batch;
mod error;
mod features;
mod fuzzy;
mod tiering;

#[cfg(test)]
mod tests;

pub use additive::AdditiveScorer;
pub use batch::{BatchConfig, BatchOutcome, BatchScorer, CandidateFailure};
pub use error::{ScorerBuildError, ScoringError};
pub use features::{
    CANONICAL_SKILLS, CrispFeatures, Extraction, FeatureExtractor, SkillMatchMode,
};
pub use fuzzy::FuzzyCandidateScorer;
pub use tiering::{Band, TierPolicy, TierStrategy};
