//! Facade crate for the hirematch candidate ranking engine.
//!
//! This crate re-exports the core domain types and the fuzzy inference
//! engine, and exposes the concrete scorers behind the `scorer` feature.

#![forbid(unsafe_code)]

pub use hirematch_core::{
    CandidateError, CandidateRecord, CandidateScorer, Cgpa, CgpaParseError, Disqualification,
    RequiredField, ScoreResult, ScoringConfig, ScoringConfigError, normalise_skill, rank,
};

pub use hirematch_fuzzy::{
    Antecedent, FuzzyError, FuzzySystem, FuzzyVariable, Inference, InferenceError, Rule,
    reference,
};

#[cfg(feature = "serde")]
pub use hirematch_fuzzy::SystemDefinition;

#[cfg(feature = "scorer")]
pub use hirematch_scorer::{
    AdditiveScorer, BatchConfig, BatchOutcome, BatchScorer, CandidateFailure, FeatureExtractor,
    FuzzyCandidateScorer, ScorerBuildError, ScoringError, SkillMatchMode, TierPolicy,
};
