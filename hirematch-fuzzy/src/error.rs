//! Error types raised while building or evaluating a fuzzy system.

use thiserror::Error;

use crate::membership::TriangleError;

/// Configuration errors rejected when a fuzzy system is built.
///
/// These are fatal at start-up; a system that builds successfully never
/// produces them while scoring.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FuzzyError {
    /// A variable's universe of discourse was unusable.
    #[error(
        "variable `{variable}` has an invalid universe [{min}, {max}] with step {step}"
    )]
    InvalidUniverse {
        /// Variable being defined.
        variable: String,
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
        /// Requested sampling step.
        step: f64,
    },
    /// A term's triangular breakpoints were malformed.
    #[error("term `{term}` of variable `{variable}` has an invalid membership function")]
    InvalidMembershipFunction {
        /// Variable owning the term.
        variable: String,
        /// Offending term.
        term: String,
        /// Underlying breakpoint violation.
        #[source]
        source: TriangleError,
    },
    /// A term's whole support lay outside the variable's universe.
    #[error("term `{term}` of variable `{variable}` lies entirely outside [{min}, {max}]")]
    TermOutsideUniverse {
        /// Variable owning the term.
        variable: String,
        /// Offending term.
        term: String,
        /// Universe lower bound.
        min: f64,
        /// Universe upper bound.
        max: f64,
    },
    /// Two terms of one variable shared a name.
    #[error("variable `{variable}` defines term `{term}` more than once")]
    DuplicateTerm {
        /// Variable owning the terms.
        variable: String,
        /// Repeated term name.
        term: String,
    },
    /// A variable had fewer than two terms.
    #[error("variable `{variable}` needs at least two terms (got {count})")]
    TooFewTerms {
        /// Variable being defined.
        variable: String,
        /// Number of terms supplied.
        count: usize,
    },
    /// The system declared no input variables.
    #[error("a fuzzy system needs at least one input variable")]
    NoInputs,
    /// Two variables shared a name.
    #[error("variable `{variable}` is defined more than once")]
    DuplicateVariable {
        /// Repeated variable name.
        variable: String,
    },
    /// A name did not refer to a variable of the system.
    #[error("unknown variable `{variable}`")]
    UnknownVariable {
        /// The unresolved name.
        variable: String,
    },
    /// A name did not refer to a term of the variable.
    #[error("variable `{variable}` has no term `{term}`")]
    UnknownTerm {
        /// Variable searched.
        variable: String,
        /// The unresolved term name.
        term: String,
    },
    /// A rule referenced something the system does not define.
    #[error("rule {index} is invalid")]
    InvalidRule {
        /// Zero-based position of the rule in the rule base.
        index: usize,
        /// Why the rule was rejected.
        #[source]
        source: Box<Self>,
    },
    /// The rule base was empty.
    #[error("the rule base must contain at least one rule")]
    EmptyRuleBase,
}

/// Errors raised while evaluating a built system.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InferenceError {
    /// Every rule evaluated to zero so the aggregated set is empty.
    ///
    /// This usually points at a mismatch between the rule base and the
    /// variable ranges rather than a genuinely zero match.
    #[error("no rule fired: the aggregated output set is empty")]
    NoRuleFired,
    /// The number of crisp inputs did not match the system's inputs.
    #[error("expected {expected} crisp inputs, got {actual}")]
    InputArity {
        /// Inputs declared by the system.
        expected: usize,
        /// Inputs supplied by the caller.
        actual: usize,
    },
}
