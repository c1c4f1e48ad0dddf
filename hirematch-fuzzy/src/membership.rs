//! Triangular membership functions and sampled universes of discourse.

use std::cmp::Ordering;

use thiserror::Error;

/// Upper bound on the number of samples a universe may produce.
///
/// Keeps a mistyped step (for example `1e-12`) from allocating gigabytes
/// during defuzzification.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Breakpoint violations for a [`Triangular`] membership function.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum TriangleError {
    /// One or more breakpoints was NaN or infinite.
    #[error("breakpoints ({a}, {b}, {c}) must be finite")]
    NonFinite {
        /// Left foot.
        a: f64,
        /// Peak.
        b: f64,
        /// Right foot.
        c: f64,
    },
    /// Breakpoints were not ordered `a <= b <= c`.
    #[error("breakpoints ({a}, {b}, {c}) must satisfy a <= b <= c")]
    Unordered {
        /// Left foot.
        a: f64,
        /// Peak.
        b: f64,
        /// Right foot.
        c: f64,
    },
}

/// A triangular membership function with feet `a`, `c` and peak `b`.
///
/// The degree is `0` outside `[a, c]`, `1` at `b` and linear in between.
/// Coincident breakpoints form shoulders: when `a == b` or `b == c` the peak
/// wins, so the shared point has degree `1`.
///
/// # Examples
/// ```
/// use hirematch_fuzzy::Triangular;
///
/// let medium = Triangular::new(10.0, 14.0, 21.0).expect("ordered breakpoints");
/// assert_eq!(medium.degree(14.0), 1.0);
/// assert_eq!(medium.degree(21.0), 0.0);
/// assert_eq!(medium.degree(12.0), 0.5);
///
/// let shoulder = Triangular::new(0.0, 0.0, 10.0).expect("left shoulder");
/// assert_eq!(shoulder.degree(0.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangular {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangular {
    /// Validate and build a triangle.
    ///
    /// # Errors
    /// Returns [`TriangleError`] when a breakpoint is not finite or the
    /// breakpoints are out of order.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, TriangleError> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(TriangleError::NonFinite { a, b, c });
        }
        if a > b || b > c {
            return Err(TriangleError::Unordered { a, b, c });
        }
        Ok(Self { a, b, c })
    }

    /// Breakpoints as `(a, b, c)`.
    #[must_use]
    pub const fn breakpoints(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Degree of membership of `x`, always within `0.0..=1.0`.
    ///
    /// NaN is treated as lying outside the support.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "membership interpolates linearly between breakpoints"
    )]
    pub fn degree(&self, x: f64) -> f64 {
        if x.is_nan() || x < self.a || x > self.c {
            return 0.0;
        }
        let degree = match x.partial_cmp(&self.b) {
            // x in [a, b) implies a < b.
            Some(Ordering::Less) => (x - self.a) / (self.b - self.a),
            // x in (b, c] implies b < c.
            Some(Ordering::Greater) => (self.c - x) / (self.c - self.b),
            _ => 1.0,
        };
        degree.clamp(0.0, 1.0)
    }

    pub(crate) fn overlaps(&self, min: f64, max: f64) -> bool {
        self.c >= min && self.a <= max
    }
}

/// Closed numeric range of a fuzzy variable, sampled every `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Universe {
    min: f64,
    max: f64,
    step: f64,
}

impl Universe {
    /// Build a universe, returning `None` when the bounds are unusable.
    ///
    /// Bounds must be finite with `min < max`; `step` must be finite,
    /// positive and produce at most [`MAX_SAMPLES`] samples.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "sample count depends on the width of the range"
    )]
    pub fn new(min: f64, max: f64, step: f64) -> Option<Self> {
        let finite = min.is_finite() && max.is_finite() && step.is_finite();
        if !finite || min >= max || step <= 0.0 {
            return None;
        }
        let intervals = ((max - min) / step).floor();
        #[expect(
            clippy::cast_precision_loss,
            reason = "MAX_SAMPLES is far below the f64 mantissa limit"
        )]
        let limit = MAX_SAMPLES as f64;
        (intervals < limit).then_some(Self { min, max, step })
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Sampling step.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Report whether `x` lies within the closed range.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        (self.min..=self.max).contains(&x)
    }

    /// Clamp `x` into the range.
    #[must_use]
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    /// Sample points `min + i * step` for every `i` that stays within range.
    ///
    /// Points are computed by multiplication rather than accumulation so
    /// they are identical on every call.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "sample positions are offsets from the lower bound"
    )]
    pub fn samples(&self) -> Vec<f64> {
        let intervals = ((self.max - self.min) / self.step).floor();
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "construction bounds intervals to 0..MAX_SAMPLES"
        )]
        let count = intervals as usize + 1;
        (0..count)
            .map(|i| {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "i is below MAX_SAMPLES"
                )]
                let offset = i as f64 * self.step;
                (self.min + offset).min(self.max)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 7.0, 14.0, 7.0, 1.0)]
    #[case(0.0, 7.0, 14.0, 3.5, 0.5)]
    #[case(0.0, 7.0, 14.0, 14.0, 0.0)]
    #[case(0.0, 7.0, 14.0, -1.0, 0.0)]
    #[case(0.0, 7.0, 14.0, 15.0, 0.0)]
    #[case(14.0, 21.0, 28.0, 21.0, 1.0)]
    #[case(10.0, 14.0, 21.0, 21.0, 0.0)]
    #[case(0.0, 0.0, 10.0, 0.0, 1.0)]
    #[case(0.0, 0.0, 10.0, 5.0, 0.5)]
    #[case(10.0, 20.0, 20.0, 20.0, 1.0)]
    #[case(10.0, 20.0, 20.0, 15.0, 0.5)]
    #[case(3.0, 3.0, 3.0, 3.0, 1.0)]
    fn degree_matches_table(
        #[case] a: f64,
        #[case] b: f64,
        #[case] c: f64,
        #[case] x: f64,
        #[case] expected: f64,
    ) {
        let triangle = Triangular::new(a, b, c).expect("valid triangle");
        assert_eq!(triangle.degree(x), expected);
    }

    #[rstest]
    fn nan_input_has_zero_degree() {
        let triangle = Triangular::new(0.0, 1.0, 2.0).expect("valid triangle");
        assert_eq!(triangle.degree(f64::NAN), 0.0);
        assert_eq!(triangle.degree(f64::INFINITY), 0.0);
    }

    #[rstest]
    #[case(2.0, 1.0, 3.0)]
    #[case(0.0, 4.0, 3.0)]
    fn unordered_breakpoints_are_rejected(#[case] a: f64, #[case] b: f64, #[case] c: f64) {
        assert_eq!(
            Triangular::new(a, b, c),
            Err(TriangleError::Unordered { a, b, c })
        );
    }

    #[rstest]
    fn non_finite_breakpoints_are_rejected() {
        assert!(matches!(
            Triangular::new(0.0, f64::NAN, 1.0),
            Err(TriangleError::NonFinite { .. })
        ));
    }

    #[rstest]
    #[case(1.0, 1.0, 1.0)]
    #[case(2.0, 1.0, 1.0)]
    #[case(0.0, 1.0, 0.0)]
    #[case(0.0, 1.0, -1.0)]
    #[case(0.0, f64::INFINITY, 1.0)]
    #[case(0.0, 1.0, 1e-9)]
    fn bad_universes_are_rejected(#[case] min: f64, #[case] max: f64, #[case] step: f64) {
        assert!(Universe::new(min, max, step).is_none());
    }

    #[rstest]
    fn samples_cover_the_closed_range() {
        let universe = Universe::new(0.0, 100.0, 1.0).expect("valid universe");
        let samples = universe.samples();
        assert_eq!(samples.len(), 101);
        assert_eq!(samples.first(), Some(&0.0));
        assert_eq!(samples.last(), Some(&100.0));
    }

    #[rstest]
    fn uneven_steps_stop_inside_the_range() {
        let universe = Universe::new(0.0, 1.0, 0.3).expect("valid universe");
        let samples = universe.samples();
        assert_eq!(samples.len(), 4);
        assert!(samples.iter().all(|x| universe.contains(*x)));
    }
}
