//! Test helpers shared across hirematch crates.
//!
//! Enabled for this crate's own tests and for downstream crates through the
//! `test-support` feature.

use std::collections::HashMap;

use crate::{
    CandidateError, CandidateRecord, CandidateScorer, Cgpa, RequiredField, ScoreResult,
    ScoringConfig,
};

/// Scorer returning canned scores keyed by candidate name.
///
/// Unknown candidates score `0.0`. Records without experience are reported
/// as [`CandidateError::MissingRequiredField`] so batch failure handling can
/// be exercised without a real engine.
#[derive(Debug, Clone, Default)]
pub struct FixedScorer {
    scores: HashMap<String, f64>,
}

impl FixedScorer {
    /// Register a canned score for `candidate`.
    #[must_use]
    pub fn with_score(mut self, candidate: &str, score: f64) -> Self {
        self.scores.insert(candidate.to_owned(), score);
        self
    }
}

impl CandidateScorer for FixedScorer {
    fn score(
        &self,
        record: &CandidateRecord,
        _config: &ScoringConfig,
    ) -> Result<ScoreResult, CandidateError> {
        if record.experience_months().is_none() {
            return Err(CandidateError::MissingRequiredField {
                field: RequiredField::Experience,
            });
        }
        let score = self.scores.get(record.name()).copied().unwrap_or(0.0);
        Ok(ScoreResult::scored(record.name(), Self::sanitise(score)))
    }
}

/// Build a complete record with the given name, skills, CGPA and experience.
#[must_use]
pub fn record(name: &str, skills: &[&str], cgpa: f64, experience_months: u32) -> CandidateRecord {
    CandidateRecord::new(
        name,
        skills.iter().copied(),
        Some(Cgpa::Value(cgpa)),
        Some(experience_months),
    )
}
