//! Additive point scoring, the predecessor of fuzzy scoring.

use hirematch_core::{
    CandidateError, CandidateRecord, CandidateScorer, ScoreResult, ScoringConfig,
};

use crate::{Extraction, FeatureExtractor, TierPolicy};

/// Sums the extracted features and caps the total.
///
/// [`AdditiveScorer::legacy`] reproduces the legacy point tables, where a
/// perfect candidate tops out at 70.
#[derive(Debug, Clone, PartialEq)]
pub struct AdditiveScorer {
    extractor: FeatureExtractor,
    max_total: f64,
}

impl AdditiveScorer {
    /// Sum features from `extractor`, capping the total at `max_total`.
    #[must_use]
    pub const fn new(extractor: FeatureExtractor, max_total: f64) -> Self {
        Self {
            extractor,
            max_total,
        }
    }

    /// Legacy point tables: CGPA `0/5/10/15`, experience `9/18/27`, two
    /// points per skill, capped at 70.
    #[must_use]
    pub fn legacy() -> Self {
        let extractor = FeatureExtractor::default()
            .with_cgpa_policy(TierPolicy::legacy_cgpa())
            .with_experience_policy(TierPolicy::legacy_experience());
        Self::new(extractor, 70.0)
    }

    /// Replace the extractor, keeping the cap.
    #[must_use]
    pub fn with_extractor(mut self, extractor: FeatureExtractor) -> Self {
        self.extractor = extractor;
        self
    }
}

impl Default for AdditiveScorer {
    fn default() -> Self {
        Self::legacy()
    }
}

impl CandidateScorer for AdditiveScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "additive scoring sums feature points"
    )]
    fn score(
        &self,
        record: &CandidateRecord,
        config: &ScoringConfig,
    ) -> Result<ScoreResult, CandidateError> {
        match self.extractor.extract(record, config)? {
            Extraction::Features(features) => {
                let total = (features.skills + features.cgpa + features.experience)
                    .min(self.max_total);
                Ok(ScoreResult::scored(record.name(), Self::sanitise(total)))
            }
            Extraction::Disqualified(reason) => {
                Ok(ScoreResult::disqualified(record.name(), reason))
            }
        }
    }
}
