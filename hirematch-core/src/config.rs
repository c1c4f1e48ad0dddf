//! Per-request scoring configuration.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::candidate::skill_set;

/// Recruiter-supplied parameters for one scoring request.
///
/// # Examples
/// ```
/// use hirematch_core::ScoringConfig;
///
/// # fn main() -> Result<(), hirematch_core::ScoringConfigError> {
/// let config = ScoringConfig::new(["Python", "SQL"])?
///     .with_min_cgpa(3.0)?
///     .with_min_experience_months(6);
/// assert!(config.required_skills().contains("python"));
/// assert_eq!(config.min_experience_months(), Some(6));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringConfig {
    required_skills: BTreeSet<String>,
    min_cgpa: Option<f64>,
    min_experience_months: Option<u32>,
}

/// Errors returned while building a [`ScoringConfig`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScoringConfigError {
    /// No usable required skill was supplied.
    #[error("at least one required skill must be supplied")]
    EmptyRequiredSkills,
    /// The minimum CGPA was negative or not finite.
    #[error("minimum CGPA must be a finite, non-negative number (got {value})")]
    InvalidMinimumCgpa {
        /// The rejected threshold.
        value: f64,
    },
}

impl ScoringConfig {
    /// Validate and construct a configuration without thresholds.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError::EmptyRequiredSkills`] when every label
    /// is blank.
    pub fn new<I, S>(required_skills: I) -> Result<Self, ScoringConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let skills = skill_set(required_skills);
        if skills.is_empty() {
            return Err(ScoringConfigError::EmptyRequiredSkills);
        }
        Ok(Self {
            required_skills: skills,
            min_cgpa: None,
            min_experience_months: None,
        })
    }

    /// Require candidates to reach `min_cgpa`.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError::InvalidMinimumCgpa`] for negative or
    /// non-finite values.
    pub fn with_min_cgpa(mut self, min_cgpa: f64) -> Result<Self, ScoringConfigError> {
        if !min_cgpa.is_finite() || min_cgpa < 0.0 {
            return Err(ScoringConfigError::InvalidMinimumCgpa { value: min_cgpa });
        }
        self.min_cgpa = Some(min_cgpa);
        Ok(self)
    }

    /// Require candidates to have at least `months` of experience.
    #[must_use]
    pub const fn with_min_experience_months(mut self, months: u32) -> Self {
        self.min_experience_months = Some(months);
        self
    }

    /// Normalised required skills.
    #[must_use]
    pub const fn required_skills(&self) -> &BTreeSet<String> {
        &self.required_skills
    }

    /// Minimum CGPA, if configured.
    #[must_use]
    pub const fn min_cgpa(&self) -> Option<f64> {
        self.min_cgpa
    }

    /// Minimum months of experience, if configured.
    #[must_use]
    pub const fn min_experience_months(&self) -> Option<u32> {
        self.min_experience_months
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn rejects_blank_required_skills() {
        let result = ScoringConfig::new(["", "   "]);
        assert_eq!(result, Err(ScoringConfigError::EmptyRequiredSkills));
    }

    #[rstest]
    #[case(-0.5)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_invalid_minimum_cgpa(#[case] value: f64) {
        let config = ScoringConfig::new(["Rust"]).expect("valid skills");
        let err = config.with_min_cgpa(value).expect_err("invalid threshold");
        assert!(matches!(err, ScoringConfigError::InvalidMinimumCgpa { .. }));
    }

    #[rstest]
    fn required_skills_are_normalised() {
        let config = ScoringConfig::new(["Python", " python", "SQL "]).expect("valid skills");
        let skills: Vec<&str> = config.required_skills().iter().map(String::as_str).collect();
        assert_eq!(skills, vec!["python", "sql"]);
        assert_eq!(config.min_cgpa(), None);
    }
}
