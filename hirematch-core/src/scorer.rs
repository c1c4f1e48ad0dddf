//! Score candidate records against a scoring configuration.
//!
//! The `CandidateScorer` trait assigns a match score to a
//! [`CandidateRecord`](crate::CandidateRecord) given the recruiter's
//! [`ScoringConfig`](crate::ScoringConfig).

use crate::{CandidateError, CandidateRecord, ScoreResult, ScoringConfig};

/// Calculate a match score for a candidate.
///
/// Higher scores indicate a better match between the candidate and the
/// recruiter's requirements. Implementations must be thread-safe
/// (`Send` + `Sync`) so batches can be scored across worker threads, and must
/// hold no mutable state: scoring the same record twice yields the same
/// result.
///
/// Implementations must:
/// - Produce finite (`f64::is_finite`) scores.
/// - Normalise results to the range `0.0..=100.0`.
///
/// Use [`CandidateScorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use hirematch_core::{
///     CandidateError, CandidateRecord, CandidateScorer, ScoreResult, ScoringConfig,
/// };
///
/// struct SkillCountScorer;
///
/// impl CandidateScorer for SkillCountScorer {
///     fn score(
///         &self,
///         record: &CandidateRecord,
///         config: &ScoringConfig,
///     ) -> Result<ScoreResult, CandidateError> {
///         let matched = record
///             .skills()
///             .intersection(config.required_skills())
///             .count();
///         let raw = f64::from(u32::try_from(matched).unwrap_or(u32::MAX)) * 10.0;
///         Ok(ScoreResult::scored(record.name(), Self::sanitise(raw)))
///     }
/// }
///
/// let config = ScoringConfig::new(["Rust"]).expect("valid config");
/// let record = CandidateRecord::new("Ferris", ["rust"], None, None);
/// let result = SkillCountScorer.score(&record, &config).expect("scored");
/// assert_eq!(result.score, 10.0);
/// ```
pub trait CandidateScorer: Send + Sync {
    /// Return a score for `record` according to `config`.
    ///
    /// # Errors
    /// Returns [`CandidateError`] when the record lacks required fields or
    /// the engine cannot produce a score for it.
    fn score(
        &self,
        record: &CandidateRecord,
        config: &ScoringConfig,
    ) -> Result<ScoreResult, CandidateError>;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=100.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FixedScorer;
    use rstest::rstest;

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(f64::INFINITY, 0.0)]
    #[case(-3.0, 0.0)]
    #[case(140.0, 100.0)]
    #[case(42.5, 42.5)]
    fn sanitise_clamps_into_range(#[case] raw: f64, #[case] expected: f64) {
        assert_eq!(FixedScorer::sanitise(raw), expected);
    }

    #[rstest]
    fn scorers_are_usable_as_trait_objects() {
        let scorer: Box<dyn CandidateScorer> =
            Box::new(FixedScorer::default().with_score("Ada", 70.0));
        let config = ScoringConfig::new(["Rust"]).expect("valid config");
        let record = CandidateRecord::new("Ada", ["Rust"], None, Some(0));
        let result = scorer.score(&record, &config).expect("fixed score");
        assert_eq!(result.score, 70.0);
    }
}
