//! Mamdani fuzzy inference for hirematch.
//!
//! A [`FuzzySystem`] combines input [`FuzzyVariable`]s, one output variable
//! and an ordered rule base. [`FuzzySystem::infer`] fuzzifies crisp inputs,
//! evaluates rules with `AND = min` and `OR = max`, clips and aggregates the
//! output terms and defuzzifies by centroid.
//!
//! The [`reference`] module builds the hiring system used by the default
//! scorer. With the `serde` feature, [`SystemDefinition`] lets callers load
//! their own variables and rules from JSON.

#![forbid(unsafe_code)]

#[cfg(feature = "serde")]
mod definition;
mod error;
mod membership;
pub mod reference;
mod rule;
mod system;
mod variable;

#[cfg(feature = "serde")]
pub use definition::{RuleDefinition, SystemDefinition, TermDefinition, VariableDefinition};
pub use error::{FuzzyError, InferenceError};
pub use membership::{MAX_SAMPLES, TriangleError, Triangular, Universe};
pub use rule::{Antecedent, Rule};
pub use system::{FuzzySystem, Inference};
pub use variable::{FuzzyVariable, Term, VariableBuilder};
