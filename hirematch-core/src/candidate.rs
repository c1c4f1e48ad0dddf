//! Candidate records as read from a recruiter's upload.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Normalise a skill label for set comparisons.
///
/// Labels are trimmed and lower-cased so `" Python"` and `"python"` collapse
/// into the same entry.
///
/// # Examples
/// ```
/// use hirematch_core::normalise_skill;
///
/// assert_eq!(normalise_skill("  Machine Learning "), "machine learning");
/// ```
#[must_use]
pub fn normalise_skill(label: &str) -> String {
    label.trim().to_lowercase()
}

pub(crate) fn skill_set<I, S>(labels: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .map(|label| normalise_skill(label.as_ref()))
        .filter(|label| !label.is_empty())
        .collect()
}

/// A cumulative grade point average as recorded for a candidate.
///
/// Uploads carry either a plain number or a hyphenated band such as
/// `"3.00-3.49"`. Bands compare by their upper bound.
///
/// # Examples
/// ```
/// use hirematch_core::Cgpa;
///
/// let band: Cgpa = "3.00-3.49".parse().expect("valid band");
/// assert_eq!(band.effective(), 3.49);
/// let value: Cgpa = "3.7".parse().expect("valid value");
/// assert_eq!(value.effective(), 3.7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Cgpa {
    /// A single numeric CGPA.
    Value(f64),
    /// An inclusive band of CGPA values.
    Band {
        /// Lower edge of the band.
        lower: f64,
        /// Upper edge of the band.
        upper: f64,
    },
}

/// Errors returned when parsing a [`Cgpa`] from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CgpaParseError {
    /// The text was empty after trimming.
    #[error("CGPA value is empty")]
    Empty,
    /// The text was not a number or a `lower-upper` band.
    #[error("'{raw}' is not a CGPA value or band")]
    Malformed {
        /// The rejected input.
        raw: String,
    },
    /// The band's lower edge exceeded its upper edge.
    #[error("CGPA band '{raw}' has its lower edge above its upper edge")]
    InvertedBand {
        /// The rejected input.
        raw: String,
    },
}

impl Cgpa {
    /// Build a band, rejecting inverted or non-finite edges.
    ///
    /// # Errors
    /// Returns [`CgpaParseError::InvertedBand`] when `lower > upper` and
    /// [`CgpaParseError::Malformed`] when either edge is not finite.
    pub fn band(lower: f64, upper: f64) -> Result<Self, CgpaParseError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(CgpaParseError::Malformed {
                raw: format!("{lower}-{upper}"),
            });
        }
        if lower > upper {
            return Err(CgpaParseError::InvertedBand {
                raw: format!("{lower}-{upper}"),
            });
        }
        Ok(Self::Band { lower, upper })
    }

    /// The value used for tiering and threshold checks.
    #[must_use]
    pub const fn effective(&self) -> f64 {
        match *self {
            Self::Value(value) => value,
            Self::Band { upper, .. } => upper,
        }
    }
}

impl fmt::Display for Cgpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value:.2}"),
            Self::Band { lower, upper } => write!(f, "{lower:.2}-{upper:.2}"),
        }
    }
}

impl FromStr for Cgpa {
    type Err = CgpaParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(CgpaParseError::Empty);
        }
        let malformed = || CgpaParseError::Malformed {
            raw: raw.to_owned(),
        };
        if let Some(value) = parse_finite(raw) {
            return Ok(Self::Value(value));
        }
        let (lower, upper) = split_band(raw).ok_or_else(malformed)?;
        let lower_value = parse_finite(lower).ok_or_else(malformed)?;
        let upper_value = parse_finite(upper).ok_or_else(malformed)?;
        Self::band(lower_value, upper_value).map_err(|_| CgpaParseError::InvertedBand {
            raw: raw.to_owned(),
        })
    }
}

/// Split `lower-upper` on the first hyphen after a possible leading sign.
fn split_band(raw: &str) -> Option<(&str, &str)> {
    let (index, _) = raw.match_indices('-').find(|&(index, _)| index > 0)?;
    let (lower, rest) = raw.split_at(index);
    Some((lower, rest.strip_prefix('-')?))
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// One candidate row handed over by the upload layer.
///
/// Skill labels are normalised with [`normalise_skill`] and stored with set
/// semantics, so duplicates collapse. CGPA and experience stay optional here:
/// a missing value is reported per candidate when scoring rather than
/// rejecting the whole upload.
///
/// # Examples
/// ```
/// use hirematch_core::{CandidateRecord, Cgpa};
///
/// let record = CandidateRecord::new(
///     "Ada Lovelace",
///     ["Python", "python", "SQL"],
///     Some(Cgpa::Value(3.8)),
///     Some(24),
/// );
/// assert_eq!(record.skills().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateRecord {
    name: String,
    skills: BTreeSet<String>,
    cgpa: Option<Cgpa>,
    experience_months: Option<u32>,
}

impl CandidateRecord {
    /// Construct a record, normalising the skill labels.
    pub fn new<I, S>(
        name: impl Into<String>,
        skills: I,
        cgpa: Option<Cgpa>,
        experience_months: Option<u32>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.into().trim().to_owned(),
            skills: skill_set(skills),
            cgpa,
            experience_months,
        }
    }

    /// Candidate full name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalised skill labels.
    #[must_use]
    pub const fn skills(&self) -> &BTreeSet<String> {
        &self.skills
    }

    /// Recorded CGPA, if any.
    #[must_use]
    pub const fn cgpa(&self) -> Option<Cgpa> {
        self.cgpa
    }

    /// Months of professional experience, if recorded.
    #[must_use]
    pub const fn experience_months(&self) -> Option<u32> {
        self.experience_months
    }
}
