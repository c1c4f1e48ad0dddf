//! Linguistic variables: a universe plus named triangular terms.

use std::collections::HashSet;

use crate::{FuzzyError, Triangular, Universe};

/// A named term of a [`FuzzyVariable`].
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    name: String,
    shape: Triangular,
}

impl Term {
    /// Term name, unique within its variable.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Membership function backing the term.
    #[must_use]
    pub const fn shape(&self) -> &Triangular {
        &self.shape
    }
}

/// A validated linguistic variable.
///
/// Build one with [`FuzzyVariable::builder`]:
///
/// ```
/// use hirematch_fuzzy::FuzzyVariable;
///
/// let cgpa = FuzzyVariable::builder("cgpa", 0.0, 20.0, 1.0)
///     .term("low", 0.0, 0.0, 10.0)
///     .term("medium", 5.0, 10.0, 15.0)
///     .term("high", 10.0, 20.0, 20.0)
///     .build()
///     .expect("valid variable");
/// assert_eq!(cgpa.membership("medium", 7.5), Some(0.5));
/// assert_eq!(cgpa.membership("missing", 7.5), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyVariable {
    name: String,
    universe: Universe,
    terms: Vec<Term>,
}

impl FuzzyVariable {
    /// Start describing a variable over `[min, max]` sampled every `step`.
    #[must_use]
    pub fn builder(name: impl Into<String>, min: f64, max: f64, step: f64) -> VariableBuilder {
        VariableBuilder {
            name: name.into(),
            min,
            max,
            step,
            terms: Vec::new(),
        }
    }

    /// Variable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Universe of discourse.
    #[must_use]
    pub const fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Terms in declaration order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Position of the term called `name`.
    #[must_use]
    pub fn term_index(&self, name: &str) -> Option<usize> {
        self.terms.iter().position(|term| term.name == name)
    }

    /// Degree of `x` in the term called `term`, or `None` for unknown terms.
    #[must_use]
    pub fn membership(&self, term: &str, x: f64) -> Option<f64> {
        self.terms
            .iter()
            .find(|candidate| candidate.name == term)
            .map(|found| found.shape.degree(x))
    }

    /// Degrees of `x` in every term, in declaration order.
    pub(crate) fn fuzzify(&self, x: f64) -> Vec<f64> {
        self.terms.iter().map(|term| term.shape.degree(x)).collect()
    }
}

/// Accumulates terms for a [`FuzzyVariable`] and validates them on
/// [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct VariableBuilder {
    name: String,
    min: f64,
    max: f64,
    step: f64,
    terms: Vec<(String, [f64; 3])>,
}

impl VariableBuilder {
    /// Add a triangular term with breakpoints `a <= b <= c`.
    #[must_use]
    pub fn term(mut self, name: impl Into<String>, a: f64, b: f64, c: f64) -> Self {
        self.terms.push((name.into(), [a, b, c]));
        self
    }

    /// Validate the universe and terms.
    ///
    /// # Errors
    /// Returns [`FuzzyError::InvalidUniverse`],
    /// [`FuzzyError::InvalidMembershipFunction`],
    /// [`FuzzyError::TermOutsideUniverse`], [`FuzzyError::DuplicateTerm`] or
    /// [`FuzzyError::TooFewTerms`] describing the first problem found.
    pub fn build(self) -> Result<FuzzyVariable, FuzzyError> {
        let Self {
            name,
            min,
            max,
            step,
            terms: specs,
        } = self;
        let Some(universe) = Universe::new(min, max, step) else {
            return Err(FuzzyError::InvalidUniverse {
                variable: name,
                min,
                max,
                step,
            });
        };

        let mut seen = HashSet::new();
        let mut terms = Vec::with_capacity(specs.len());
        for (term, [a, b, c]) in specs {
            let shape = match Triangular::new(a, b, c) {
                Ok(shape) => shape,
                Err(source) => {
                    return Err(FuzzyError::InvalidMembershipFunction {
                        variable: name,
                        term,
                        source,
                    });
                }
            };
            if !shape.overlaps(min, max) {
                return Err(FuzzyError::TermOutsideUniverse {
                    variable: name,
                    term,
                    min,
                    max,
                });
            }
            if !seen.insert(term.clone()) {
                return Err(FuzzyError::DuplicateTerm {
                    variable: name,
                    term,
                });
            }
            terms.push(Term { name: term, shape });
        }

        if terms.len() < 2 {
            return Err(FuzzyError::TooFewTerms {
                variable: name,
                count: terms.len(),
            });
        }

        Ok(FuzzyVariable {
            name,
            universe,
            terms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::TriangleError;
    use rstest::{fixture, rstest};

    #[fixture]
    fn skills() -> FuzzyVariable {
        FuzzyVariable::builder("skills", 0.0, 28.0, 1.0)
            .term("low", 0.0, 7.0, 14.0)
            .term("medium", 10.0, 14.0, 21.0)
            .term("high", 14.0, 21.0, 28.0)
            .build()
            .expect("valid skills variable")
    }

    #[rstest]
    fn high_skills_peak_excludes_medium(skills: FuzzyVariable) {
        assert_eq!(skills.membership("high", 21.0), Some(1.0));
        assert_eq!(skills.membership("medium", 21.0), Some(0.0));
    }

    #[rstest]
    fn fuzzify_follows_declaration_order(skills: FuzzyVariable) {
        assert_eq!(skills.fuzzify(14.0), vec![0.0, 1.0, 0.0]);
        assert_eq!(skills.term_index("high"), Some(2));
    }

    #[rstest]
    fn out_of_universe_values_have_zero_degree(skills: FuzzyVariable) {
        assert!(skills.fuzzify(40.0).iter().all(|degree| *degree == 0.0));
    }

    #[rstest]
    fn rejects_invalid_universe() {
        let err = FuzzyVariable::builder("x", 5.0, 5.0, 1.0)
            .term("a", 0.0, 1.0, 2.0)
            .term("b", 1.0, 2.0, 3.0)
            .build()
            .expect_err("empty range");
        assert!(matches!(err, FuzzyError::InvalidUniverse { .. }));
    }

    #[rstest]
    fn rejects_unordered_term() {
        let err = FuzzyVariable::builder("x", 0.0, 10.0, 1.0)
            .term("a", 0.0, 1.0, 2.0)
            .term("b", 5.0, 3.0, 8.0)
            .build()
            .expect_err("unordered breakpoints");
        assert_eq!(
            err,
            FuzzyError::InvalidMembershipFunction {
                variable: "x".to_owned(),
                term: "b".to_owned(),
                source: TriangleError::Unordered {
                    a: 5.0,
                    b: 3.0,
                    c: 8.0,
                },
            }
        );
    }

    #[rstest]
    fn rejects_term_outside_universe() {
        let err = FuzzyVariable::builder("x", 0.0, 10.0, 1.0)
            .term("a", 0.0, 1.0, 2.0)
            .term("far", 11.0, 12.0, 13.0)
            .build()
            .expect_err("term beyond max");
        assert!(matches!(err, FuzzyError::TermOutsideUniverse { ref term, .. } if term == "far"));
    }

    #[rstest]
    fn accepts_term_touching_the_edge() {
        let variable = FuzzyVariable::builder("x", 0.0, 10.0, 1.0)
            .term("a", 0.0, 1.0, 2.0)
            .term("edge", 10.0, 12.0, 14.0)
            .build()
            .expect("edge overlap is allowed");
        assert_eq!(variable.membership("edge", 10.0), Some(0.0));
    }

    #[rstest]
    fn rejects_duplicate_terms() {
        let err = FuzzyVariable::builder("x", 0.0, 10.0, 1.0)
            .term("a", 0.0, 1.0, 2.0)
            .term("a", 1.0, 2.0, 3.0)
            .build()
            .expect_err("duplicate name");
        assert!(matches!(err, FuzzyError::DuplicateTerm { .. }));
    }

    #[rstest]
    fn rejects_single_term_variables() {
        let err = FuzzyVariable::builder("x", 0.0, 10.0, 1.0)
            .term("only", 0.0, 5.0, 10.0)
            .build()
            .expect_err("one term");
        assert_eq!(
            err,
            FuzzyError::TooFewTerms {
                variable: "x".to_owned(),
                count: 1,
            }
        );
    }
}
