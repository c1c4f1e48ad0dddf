//! Unit coverage for the batch worker pool.
#![forbid(unsafe_code)]

use std::num::NonZeroUsize;
use std::time::Duration;

use hirematch_core::test_support::{FixedScorer, record};
use hirematch_core::{
    CandidateError, CandidateRecord, CandidateScorer, Cgpa, RequiredField, ScoreResult,
    ScoringConfig,
};
use rstest::{fixture, rstest};

use crate::{BatchConfig, BatchScorer, CandidateFailure, ScoringError};

struct PanickingScorer;

impl CandidateScorer for PanickingScorer {
    fn score(
        &self,
        record: &CandidateRecord,
        _config: &ScoringConfig,
    ) -> Result<ScoreResult, CandidateError> {
        assert_ne!(record.name(), "boom", "scorer exploded");
        Ok(ScoreResult::scored(record.name(), 1.0))
    }
}

#[fixture]
fn config() -> ScoringConfig {
    ScoringConfig::new(["Rust"]).expect("valid config")
}

fn roster(size: usize) -> Vec<CandidateRecord> {
    (0..size)
        .map(|i| record(&format!("candidate-{i}"), &["Rust"], 3.0, 12))
        .collect()
}

fn workers(count: usize) -> BatchConfig {
    BatchConfig::default().with_workers(NonZeroUsize::new(count).expect("non-zero workers"))
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(16)]
fn results_keep_input_order(config: ScoringConfig, #[case] count: usize) {
    let records = roster(40);
    let scorer = records
        .iter()
        .enumerate()
        .fold(FixedScorer::default(), |scorer, (i, candidate)| {
            scorer.with_score(candidate.name(), f64::from(u8::try_from(i).unwrap_or(0)))
        });
    let outcome = BatchScorer::new(scorer)
        .with_config(workers(count))
        .score_candidates(&records, &config)
        .expect("batch completes");
    let names: Vec<&str> = outcome.results.iter().map(|r| r.candidate.as_str()).collect();
    let expected: Vec<&str> = records.iter().map(CandidateRecord::name).collect();
    assert_eq!(names, expected);
    assert!(outcome.failures.is_empty());
}

#[rstest]
fn failures_are_isolated(config: ScoringConfig) {
    let records = vec![
        record("first", &["Rust"], 3.0, 12),
        CandidateRecord::new("incomplete", ["Rust"], Some(Cgpa::Value(3.0)), None),
        record("third", &["Rust"], 3.0, 12),
    ];
    let outcome = BatchScorer::new(FixedScorer::default().with_score("third", 60.0))
        .with_config(workers(2))
        .score_candidates(&records, &config)
        .expect("batch completes");
    assert_eq!(outcome.results.len(), 2);
    assert_eq!(
        outcome.failures,
        vec![CandidateFailure {
            index: 1,
            candidate: "incomplete".to_owned(),
            error: CandidateError::MissingRequiredField {
                field: RequiredField::Experience,
            },
        }]
    );
    let (ranked, _) = outcome.into_ranked();
    assert_eq!(ranked.first().map(|r| r.candidate.as_str()), Some("third"));
}

#[rstest]
fn empty_batches_succeed(config: ScoringConfig) {
    let outcome = BatchScorer::new(FixedScorer::default())
        .with_config(BatchConfig::default().with_timeout(Duration::ZERO))
        .score_candidates(&[], &config)
        .expect("nothing to score");
    assert!(outcome.results.is_empty());
    assert!(outcome.failures.is_empty());
}

#[rstest]
fn expired_deadline_discards_partial_results(config: ScoringConfig) {
    let records = roster(8);
    let err = BatchScorer::new(FixedScorer::default())
        .with_config(workers(2).with_timeout(Duration::ZERO))
        .score_candidates(&records, &config)
        .expect_err("deadline already passed");
    assert_eq!(
        err,
        ScoringError::Timeout {
            limit: Duration::ZERO,
            completed: 0,
            total: 8,
        }
    );
}

#[rstest]
fn generous_deadline_completes(config: ScoringConfig) {
    let records = roster(8);
    let outcome = BatchScorer::new(FixedScorer::default())
        .with_config(workers(2).with_timeout(Duration::from_secs(60)))
        .score_candidates(&records, &config)
        .expect("deadline is far away");
    assert_eq!(outcome.results.len(), 8);
}

#[rstest]
fn worker_panics_are_reported(config: ScoringConfig) {
    let mut records = roster(4);
    records.push(record("boom", &["Rust"], 3.0, 12));
    let err = BatchScorer::new(PanickingScorer)
        .with_config(workers(2))
        .score_candidates(&records, &config)
        .expect_err("worker panics");
    assert_eq!(err, ScoringError::WorkerPanicked);
}

#[rstest]
fn more_workers_than_records_is_fine(config: ScoringConfig) {
    let records = roster(2);
    let outcome = BatchScorer::new(FixedScorer::default())
        .with_config(workers(64))
        .score_candidates(&records, &config)
        .expect("batch completes");
    assert_eq!(outcome.results.len(), 2);
}
