//! Core domain types for the hirematch candidate ranking engine.
//!
//! These models describe the records a recruiter uploads, the per-request
//! scoring configuration, and the scored output. Constructors return
//! `Result` to surface invalid input early, and the [`CandidateScorer`] trait
//! is the seam where concrete scoring engines plug in.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod candidate;
mod config;
mod ranking;
mod result;
mod scorer;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use candidate::{CandidateRecord, Cgpa, CgpaParseError, normalise_skill};
pub use config::{ScoringConfig, ScoringConfigError};
pub use ranking::rank;
pub use result::{CandidateError, Disqualification, RequiredField, ScoreResult};
pub use scorer::CandidateScorer;
