//! Score a batch of candidates on a scoped worker pool.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use hirematch_core::{
    CandidateError, CandidateRecord, CandidateScorer, ScoreResult, ScoringConfig, rank,
};
use log::{debug, warn};

use crate::ScoringError;

type Scored = (usize, Result<ScoreResult, CandidateError>);

/// Worker pool settings.
///
/// `Default` uses one worker per available CPU and no time limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchConfig {
    workers: Option<NonZeroUsize>,
    timeout: Option<Duration>,
}

impl BatchConfig {
    /// Fix the number of worker threads.
    #[must_use]
    pub const fn with_workers(mut self, workers: NonZeroUsize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Abandon the batch once `timeout` has elapsed.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Configured worker count, if fixed.
    #[must_use]
    pub const fn workers(&self) -> Option<NonZeroUsize> {
        self.workers
    }

    /// Configured time limit, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// A candidate that could not be scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFailure {
    /// Position of the record in the input slice.
    pub index: usize,
    /// Candidate name as recorded.
    pub candidate: String,
    /// Why scoring failed.
    pub error: CandidateError,
}

/// Results of a completed batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    /// Scored candidates in input order.
    pub results: Vec<ScoreResult>,
    /// Candidates that failed, in input order.
    pub failures: Vec<CandidateFailure>,
}

impl BatchOutcome {
    /// Consume the outcome, returning results ranked best first and the
    /// failures.
    #[must_use]
    pub fn into_ranked(self) -> (Vec<ScoreResult>, Vec<CandidateFailure>) {
        (rank(self.results), self.failures)
    }
}

/// Scores record slices in parallel with a shared [`CandidateScorer`].
///
/// Workers claim records through a shared cursor, so the scorer, the
/// records and the scoring configuration are only ever borrowed. Output is
/// reassembled in input order and does not depend on scheduling.
///
/// # Examples
/// ```
/// use hirematch_core::{CandidateRecord, Cgpa, ScoringConfig};
/// use hirematch_scorer::{BatchScorer, FuzzyCandidateScorer};
///
/// let scorer = FuzzyCandidateScorer::reference().expect("reference system builds");
/// let batch = BatchScorer::new(scorer);
/// let config = ScoringConfig::new(["Rust"]).expect("valid config");
/// let records = vec![
///     CandidateRecord::new("Ferris", ["Rust"], Some(Cgpa::Value(3.9)), Some(24)),
///     CandidateRecord::new("Nobody", ["Cobol"], None, Some(0)),
/// ];
/// let outcome = batch.score_candidates(&records, &config).expect("no timeout");
/// assert_eq!(outcome.results.len(), 1);
/// assert_eq!(outcome.failures.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct BatchScorer<S> {
    scorer: S,
    config: BatchConfig,
}

impl<S: CandidateScorer> BatchScorer<S> {
    /// Wrap `scorer` with the default pool settings.
    pub const fn new(scorer: S) -> Self {
        Self {
            scorer,
            config: BatchConfig {
                workers: None,
                timeout: None,
            },
        }
    }

    /// Replace the pool settings.
    #[must_use]
    pub fn with_config(mut self, config: BatchConfig) -> Self {
        self.config = config;
        self
    }

    /// The wrapped scorer.
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Score every record against `config`.
    ///
    /// Per-candidate errors are collected in [`BatchOutcome::failures`] and
    /// never abort the batch.
    ///
    /// # Errors
    /// - [`ScoringError::Timeout`] when the deadline passes before every
    ///   record has been scored; partial results are discarded.
    /// - [`ScoringError::WorkerPanicked`] when a worker thread panics.
    pub fn score_candidates(
        &self,
        records: &[CandidateRecord],
        config: &ScoringConfig,
    ) -> Result<BatchOutcome, ScoringError> {
        if records.is_empty() {
            return Ok(BatchOutcome::default());
        }
        let workers = self.worker_count(records.len());
        let started = Instant::now();
        let deadline = self
            .config
            .timeout
            .and_then(|limit| started.checked_add(limit));
        let cursor = AtomicUsize::new(0);
        let expired = AtomicBool::new(false);
        debug!("scoring {} candidates on {workers} workers", records.len());

        let joined: Vec<thread::Result<Vec<Scored>>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    scope.spawn(|| self.work(records, config, &cursor, &expired, deadline))
                })
                .collect();
            handles.into_iter().map(|handle| handle.join()).collect()
        });

        let mut slots: Vec<Option<Result<ScoreResult, CandidateError>>> =
            records.iter().map(|_| None).collect();
        for batch in joined {
            let Ok(scored) = batch else {
                return Err(ScoringError::WorkerPanicked);
            };
            for (index, outcome) in scored {
                if let Some(slot) = slots.get_mut(index) {
                    *slot = Some(outcome);
                }
            }
        }

        if expired.load(Ordering::Acquire) {
            let completed = slots.iter().filter(|slot| slot.is_some()).count();
            let limit = self.config.timeout.unwrap_or_default();
            warn!(
                "scoring timed out after {limit:?}: {completed} of {} candidates scored",
                records.len()
            );
            return Err(ScoringError::Timeout {
                limit,
                completed,
                total: records.len(),
            });
        }

        Ok(assemble(records, slots))
    }

    fn worker_count(&self, records: usize) -> usize {
        let configured = self.config.workers.map_or_else(
            || thread::available_parallelism().map_or(1, NonZeroUsize::get),
            NonZeroUsize::get,
        );
        configured.min(records).max(1)
    }

    fn work(
        &self,
        records: &[CandidateRecord],
        config: &ScoringConfig,
        cursor: &AtomicUsize,
        expired: &AtomicBool,
        deadline: Option<Instant>,
    ) -> Vec<Scored> {
        let mut scored = Vec::new();
        loop {
            if expired.load(Ordering::Acquire) {
                break;
            }
            let index = cursor.fetch_add(1, Ordering::Relaxed);
            let Some(record) = records.get(index) else {
                break;
            };
            // A claimed record left unscored means the batch is incomplete.
            if deadline.is_some_and(|limit| Instant::now() >= limit) {
                expired.store(true, Ordering::Release);
                break;
            }
            scored.push((index, self.scorer.score(record, config)));
        }
        scored
    }
}

fn assemble(
    records: &[CandidateRecord],
    slots: Vec<Option<Result<ScoreResult, CandidateError>>>,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for (index, (record, slot)) in records.iter().zip(slots).enumerate() {
        match slot {
            Some(Ok(result)) => outcome.results.push(result),
            Some(Err(error)) => {
                warn!("candidate `{}` (row {index}) not scored: {error}", record.name());
                outcome.failures.push(CandidateFailure {
                    index,
                    candidate: record.name().to_owned(),
                    error,
                });
            }
            None => {}
        }
    }
    outcome
}
