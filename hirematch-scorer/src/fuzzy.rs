//! Candidate scoring through the fuzzy inference engine.

use hirematch_core::{
    CandidateError, CandidateRecord, CandidateScorer, ScoreResult, ScoringConfig,
};
use hirematch_fuzzy::{FuzzyError, FuzzySystem, InferenceError, reference};
use log::debug;

use crate::{Extraction, FeatureExtractor, ScorerBuildError};

/// Number of crisp inputs the extractor produces.
const FEATURE_COUNT: usize = 3;

/// Scores candidates with a [`FuzzySystem`] fed by a [`FeatureExtractor`].
///
/// The system's inputs are bound positionally to `skills`, `cgpa` and
/// `experience`.
///
/// # Examples
/// ```
/// use hirematch_core::{CandidateRecord, CandidateScorer, Cgpa, ScoringConfig};
/// use hirematch_scorer::FuzzyCandidateScorer;
///
/// let scorer = FuzzyCandidateScorer::reference().expect("reference system builds");
/// let config = ScoringConfig::new(["Python", "SQL"]).expect("valid config");
/// let record = CandidateRecord::new("Ada", ["Python"], Some(Cgpa::Value(3.8)), Some(24));
/// let result = scorer.score(&record, &config).expect("scored");
/// assert!((0.0..=100.0).contains(&result.score));
/// ```
#[derive(Debug, Clone)]
pub struct FuzzyCandidateScorer {
    system: FuzzySystem,
    extractor: FeatureExtractor,
}

impl FuzzyCandidateScorer {
    /// Wrap `system` with the default extractor.
    ///
    /// # Errors
    /// Returns [`ScorerBuildError::InputArity`] when the system does not
    /// take exactly three inputs.
    pub fn new(system: FuzzySystem) -> Result<Self, ScorerBuildError> {
        let inputs = system.inputs().len();
        if inputs != FEATURE_COUNT {
            return Err(ScorerBuildError::InputArity {
                expected: FEATURE_COUNT,
                actual: inputs,
            });
        }
        Ok(Self {
            system,
            extractor: FeatureExtractor::default(),
        })
    }

    /// Scorer over the reference hiring system.
    ///
    /// # Errors
    /// Propagates [`FuzzyError`] from building the reference system.
    pub fn reference() -> Result<Self, FuzzyError> {
        Ok(Self {
            system: reference::hiring_system()?,
            extractor: FeatureExtractor::default(),
        })
    }

    /// Replace the feature extractor.
    #[must_use]
    pub fn with_extractor(mut self, extractor: FeatureExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Underlying fuzzy system.
    #[must_use]
    pub const fn system(&self) -> &FuzzySystem {
        &self.system
    }
}

impl CandidateScorer for FuzzyCandidateScorer {
    fn score(
        &self,
        record: &CandidateRecord,
        config: &ScoringConfig,
    ) -> Result<ScoreResult, CandidateError> {
        let features = match self.extractor.extract(record, config)? {
            Extraction::Features(features) => features,
            Extraction::Disqualified(reason) => {
                return Ok(ScoreResult::disqualified(record.name(), reason));
            }
        };
        let inference = self
            .system
            .infer(&features.to_array())
            .map_err(|err| match err {
                InferenceError::NoRuleFired => CandidateError::NoRuleFired,
                other @ InferenceError::InputArity { .. } => CandidateError::Inference {
                    reason: other.to_string(),
                },
            })?;
        debug!(
            "candidate `{}` features {features:?} scored {:.2}",
            record.name(),
            inference.score()
        );
        Ok(ScoreResult::scored(
            record.name(),
            Self::sanitise(inference.score()),
        ))
    }
}
