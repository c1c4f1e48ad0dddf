//! Scored output and per-candidate failures.

use std::fmt;

use thiserror::Error;

/// Why a candidate was scored zero without running inference.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", tag = "reason"))]
pub enum Disqualification {
    /// The candidate's CGPA fell below the configured minimum.
    CgpaBelowMinimum {
        /// Configured threshold.
        minimum: f64,
        /// Effective CGPA of the candidate.
        actual: f64,
    },
    /// The candidate's experience fell below the configured minimum.
    ExperienceBelowMinimum {
        /// Configured threshold in months.
        minimum: u32,
        /// Recorded experience in months.
        actual: u32,
    },
}

impl fmt::Display for Disqualification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CgpaBelowMinimum { minimum, actual } => {
                write!(f, "CGPA {actual:.2} below minimum {minimum:.2}")
            }
            Self::ExperienceBelowMinimum { minimum, actual } => {
                write!(f, "experience {actual} months below minimum {minimum}")
            }
        }
    }
}

/// A candidate's crisp match score.
///
/// Scores live in `0.0..=100.0`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreResult {
    /// Candidate full name.
    pub candidate: String,
    /// Match score in `0.0..=100.0`.
    pub score: f64,
    /// Set when a threshold short-circuited the candidate to zero.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub disqualification: Option<Disqualification>,
}

impl ScoreResult {
    /// A result produced by the scoring engine.
    pub fn scored(candidate: impl Into<String>, score: f64) -> Self {
        Self {
            candidate: candidate.into(),
            score,
            disqualification: None,
        }
    }

    /// A zero result for a candidate that failed a threshold.
    pub fn disqualified(candidate: impl Into<String>, reason: Disqualification) -> Self {
        Self {
            candidate: candidate.into(),
            score: 0.0,
            disqualification: Some(reason),
        }
    }

    /// Report whether a threshold short-circuited this result.
    #[must_use]
    pub const fn is_disqualified(&self) -> bool {
        self.disqualification.is_some()
    }
}

/// Record fields the scoring engine cannot do without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RequiredField {
    /// Candidate full name.
    Name,
    /// CGPA value or band.
    Cgpa,
    /// Months of experience.
    Experience,
}

impl RequiredField {
    /// Return the field as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Cgpa => "cgpa",
            Self::Experience => "experience",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors isolated to a single candidate.
///
/// These never abort a batch; callers report them alongside successful
/// results.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CandidateError {
    /// A field required for scoring was absent.
    #[error("record is missing required field `{field}`")]
    MissingRequiredField {
        /// The absent field.
        field: RequiredField,
    },
    /// Every rule evaluated to zero, leaving nothing to defuzzify.
    #[error("no fuzzy rule fired for the extracted features")]
    NoRuleFired,
    /// Inference failed for another reason.
    #[error("inference failed: {reason}")]
    Inference {
        /// Description of the failure.
        reason: String,
    },
}
