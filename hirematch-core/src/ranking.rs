//! Ranking stage: order scored candidates for presentation.

use crate::ScoreResult;

/// Sort results by score, highest first.
///
/// The sort is stable: candidates with equal scores keep their relative
/// input order. Disqualified candidates score zero and therefore sink to the
/// bottom alongside any genuine zero scores.
///
/// # Examples
/// ```
/// use hirematch_core::{ScoreResult, rank};
///
/// let ranked = rank(vec![
///     ScoreResult::scored("first", 80.0),
///     ScoreResult::scored("second", 95.0),
///     ScoreResult::scored("third", 80.0),
/// ]);
/// let names: Vec<&str> = ranked.iter().map(|r| r.candidate.as_str()).collect();
/// assert_eq!(names, ["second", "first", "third"]);
/// ```
#[must_use]
pub fn rank(mut results: Vec<ScoreResult>) -> Vec<ScoreResult> {
    // `sort_by` is a stable merge sort.
    results.sort_by(|left, right| right.score.total_cmp(&left.score));
    results
}
