//! Feature extraction: turn a candidate record into crisp fuzzy inputs.

use std::collections::BTreeSet;

use hirematch_core::{
    CandidateError, CandidateRecord, Disqualification, RequiredField, ScoringConfig,
    normalise_skill,
};
use log::debug;

use crate::tiering::{TierPolicy, TierStrategy};

/// Skills recognised in [`SkillMatchMode::Canonical`] mode by default.
pub const CANONICAL_SKILLS: [&str; 14] = [
    "python",
    "java",
    "javascript",
    "sql",
    "c++",
    "c#",
    "html",
    "css",
    "react",
    "node.js",
    "machine learning",
    "data analysis",
    "git",
    "aws",
];

/// Which skill set a candidate's skills are matched against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SkillMatchMode {
    /// The recruiter's required skills.
    #[default]
    Required,
    /// A fixed list of normalised skill labels.
    Canonical(BTreeSet<String>),
}

impl SkillMatchMode {
    /// Canonical mode over `labels`, normalised like candidate skills.
    pub fn canonical<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::Canonical(
            labels
                .into_iter()
                .map(|label| normalise_skill(label.as_ref()))
                .filter(|label| !label.is_empty())
                .collect(),
        )
    }

    /// Canonical mode over [`CANONICAL_SKILLS`].
    #[must_use]
    pub fn reference_canonical() -> Self {
        Self::canonical(CANONICAL_SKILLS)
    }
}

/// Crisp inputs for the fuzzy system, each on its variable's scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrispFeatures {
    /// Skills score, `matched × points` capped at the maximum.
    pub skills: f64,
    /// CGPA tier.
    pub cgpa: f64,
    /// Experience tier.
    pub experience: f64,
}

impl CrispFeatures {
    /// Inputs ordered `skills, cgpa, experience`.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.skills, self.cgpa, self.experience]
    }
}

/// Outcome of extracting one record.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// The record passed every threshold.
    Features(CrispFeatures),
    /// A threshold short-circuited the record to a zero score.
    Disqualified(Disqualification),
}

/// Derives [`CrispFeatures`] from records using configurable tiering.
///
/// `Default` yields the reference configuration: required-skill matching at
/// two points per skill capped at 28, [`TierPolicy::cgpa_bands`] and
/// [`TierPolicy::experience_buckets`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureExtractor {
    skill_mode: SkillMatchMode,
    points_per_skill: f64,
    max_skills_score: f64,
    cgpa_policy: TierPolicy,
    experience_policy: TierPolicy,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self {
            skill_mode: SkillMatchMode::Required,
            points_per_skill: 2.0,
            max_skills_score: 28.0,
            cgpa_policy: TierPolicy::cgpa_bands(),
            experience_policy: TierPolicy::experience_buckets(),
        }
    }
}

impl FeatureExtractor {
    /// Replace the skill matching mode.
    #[must_use]
    pub fn with_skill_mode(mut self, mode: SkillMatchMode) -> Self {
        self.skill_mode = mode;
        self
    }

    /// Replace the points awarded per matched skill and their cap.
    #[must_use]
    pub const fn with_skill_points(mut self, points_per_skill: f64, max_skills_score: f64) -> Self {
        self.points_per_skill = points_per_skill;
        self.max_skills_score = max_skills_score;
        self
    }

    /// Replace the CGPA tiering policy.
    #[must_use]
    pub fn with_cgpa_policy(mut self, policy: TierPolicy) -> Self {
        self.cgpa_policy = policy;
        self
    }

    /// Replace the experience tiering policy.
    #[must_use]
    pub fn with_experience_policy(mut self, policy: TierPolicy) -> Self {
        self.experience_policy = policy;
        self
    }

    /// Active skill matching mode.
    #[must_use]
    pub const fn skill_mode(&self) -> &SkillMatchMode {
        &self.skill_mode
    }

    /// Extract crisp features, or a disqualification, from `record`.
    ///
    /// Thresholds in `config` are checked before any tiering. Values a
    /// policy does not cover are logged and map to a tier of `0.0`.
    ///
    /// # Errors
    /// Returns [`CandidateError::MissingRequiredField`] when the record has
    /// no name, CGPA or experience.
    pub fn extract(
        &self,
        record: &CandidateRecord,
        config: &ScoringConfig,
    ) -> Result<Extraction, CandidateError> {
        if record.name().is_empty() {
            return Err(missing(RequiredField::Name));
        }
        let cgpa = record
            .cgpa()
            .ok_or_else(|| missing(RequiredField::Cgpa))?
            .effective();
        let months = record
            .experience_months()
            .ok_or_else(|| missing(RequiredField::Experience))?;

        if let Some(reason) = disqualification(config, cgpa, months) {
            debug!("candidate `{}` disqualified: {reason}", record.name());
            return Ok(Extraction::Disqualified(reason));
        }

        let targets = match &self.skill_mode {
            SkillMatchMode::Required => config.required_skills(),
            SkillMatchMode::Canonical(skills) => skills,
        };
        let matched = record.skills().intersection(targets).count();

        Ok(Extraction::Features(CrispFeatures {
            skills: self.skills_score(matched),
            cgpa: tier_or_zero(&self.cgpa_policy, cgpa, "cgpa", record.name()),
            experience: tier_or_zero(
                &self.experience_policy,
                f64::from(months),
                "experience",
                record.name(),
            ),
        }))
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "skills score is matched count times points per skill"
    )]
    fn skills_score(&self, matched: usize) -> f64 {
        let count = f64::from(u32::try_from(matched).unwrap_or(u32::MAX));
        (count * self.points_per_skill).min(self.max_skills_score)
    }
}

const fn missing(field: RequiredField) -> CandidateError {
    CandidateError::MissingRequiredField { field }
}

fn disqualification(config: &ScoringConfig, cgpa: f64, months: u32) -> Option<Disqualification> {
    if let Some(minimum) = config.min_cgpa()
        && cgpa < minimum
    {
        return Some(Disqualification::CgpaBelowMinimum {
            minimum,
            actual: cgpa,
        });
    }
    if let Some(minimum) = config.min_experience_months()
        && months < minimum
    {
        return Some(Disqualification::ExperienceBelowMinimum {
            minimum,
            actual: months,
        });
    }
    None
}

fn tier_or_zero(policy: &impl TierStrategy, value: f64, feature: &str, candidate: &str) -> f64 {
    policy.tier(value).unwrap_or_else(|| {
        debug!("unmapped {feature} value {value} for candidate `{candidate}`; using tier 0");
        0.0
    })
}
