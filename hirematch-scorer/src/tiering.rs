//! Tiering policies mapping raw record values onto fuzzy input scales.

use std::cmp::Ordering;

/// Map a raw value to a tier score.
///
/// Returning `None` signals a value the policy does not cover; callers fall
/// back to a tier of `0.0`.
pub trait TierStrategy {
    /// Tier score for `value`, or `None` when unmapped.
    fn tier(&self, value: f64) -> Option<f64>;
}

/// A numeric band `[lower, upper)` or `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    lower: f64,
    upper: f64,
    closed: bool,
    score: f64,
}

impl Band {
    /// Band covering `[lower, upper)`.
    #[must_use]
    pub const fn half_open(lower: f64, upper: f64, score: f64) -> Self {
        Self {
            lower,
            upper,
            closed: false,
            score,
        }
    }

    /// Band covering `[lower, upper]`.
    #[must_use]
    pub const fn closed(lower: f64, upper: f64, score: f64) -> Self {
        Self {
            lower,
            upper,
            closed: true,
            score,
        }
    }

    fn contains(&self, value: f64) -> bool {
        if value < self.lower {
            return false;
        }
        if self.closed {
            value <= self.upper
        } else {
            value < self.upper
        }
    }
}

/// The tiering policies a [`FeatureExtractor`](crate::FeatureExtractor) can
/// apply.
#[derive(Debug, Clone, PartialEq)]
pub enum TierPolicy {
    /// First band containing the value wins.
    Bands(Vec<Band>),
    /// Exact value lookup with a catch-all tier.
    Exact {
        /// `(value, tier)` pairs.
        points: Vec<(f64, f64)>,
        /// Tier for any other value.
        otherwise: f64,
    },
    /// Binary split: values strictly above `threshold` map to `above`.
    Threshold {
        /// Split point.
        threshold: f64,
        /// Tier for values above the split.
        above: f64,
        /// Tier for values at or below the split.
        otherwise: f64,
    },
}

impl TierPolicy {
    /// CGPA bands `[2.00, 2.50) → 5`, `[2.50, 3.00) → 10`,
    /// `[3.00, 3.50) → 15` and `[3.50, 4.00] → 20`.
    #[must_use]
    pub fn cgpa_bands() -> Self {
        Self::Bands(vec![
            Band::half_open(2.0, 2.5, 5.0),
            Band::half_open(2.5, 3.0, 10.0),
            Band::half_open(3.0, 3.5, 15.0),
            Band::closed(3.5, 4.0, 20.0),
        ])
    }

    /// Experience buckets `0 → 7`, `12 → 14`, anything else `→ 21`.
    #[must_use]
    pub fn experience_buckets() -> Self {
        Self::Exact {
            points: vec![(0.0, 7.0), (12.0, 14.0)],
            otherwise: 21.0,
        }
    }

    /// Experience split: more than `months` maps to `21`, otherwise `7`.
    #[must_use]
    pub fn experience_threshold(months: u32) -> Self {
        Self::Threshold {
            threshold: f64::from(months),
            above: 21.0,
            otherwise: 7.0,
        }
    }

    /// CGPA points used by the additive scorer: `2.00-2.49 → 0`,
    /// `2.50-2.99 → 5`, `3.00-3.49 → 10`, `3.50-4.00 → 15`.
    #[must_use]
    pub fn legacy_cgpa() -> Self {
        Self::Bands(vec![
            Band::half_open(2.0, 2.5, 0.0),
            Band::half_open(2.5, 3.0, 5.0),
            Band::half_open(3.0, 3.5, 10.0),
            Band::closed(3.5, 4.0, 15.0),
        ])
    }

    /// Experience points used by the additive scorer: `0 → 9`, `6 → 18`,
    /// anything else `→ 27`.
    #[must_use]
    pub fn legacy_experience() -> Self {
        Self::Exact {
            points: vec![(0.0, 9.0), (6.0, 18.0)],
            otherwise: 27.0,
        }
    }
}

impl TierStrategy for TierPolicy {
    fn tier(&self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        match self {
            Self::Bands(bands) => bands
                .iter()
                .find(|band| band.contains(value))
                .map(|band| band.score),
            Self::Exact { points, otherwise } => Some(
                points
                    .iter()
                    .find(|(point, _)| point.total_cmp(&value) == Ordering::Equal)
                    .map_or(*otherwise, |(_, tier)| *tier),
            ),
            Self::Threshold {
                threshold,
                above,
                otherwise,
            } => Some(if value > *threshold { *above } else { *otherwise }),
        }
    }
}
