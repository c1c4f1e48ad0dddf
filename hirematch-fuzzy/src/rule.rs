//! Rule base: antecedent trees and their compiled, index-resolved form.

use std::fmt;

use crate::{FuzzyError, FuzzyVariable};

/// Condition tree of a rule.
///
/// Leaves test one input variable against one of its terms; `And` takes the
/// minimum of its branches and `Or` the maximum.
///
/// With the `serde` feature the tree serialises externally tagged:
///
/// ```json
/// { "and": [ { "leaf": { "variable": "skills", "term": "low" } },
///            { "leaf": { "variable": "cgpa", "term": "high" } } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Antecedent {
    /// `variable is term`.
    Leaf {
        /// Input variable name.
        variable: String,
        /// Term of that variable.
        term: String,
    },
    /// Both branches hold (minimum).
    And(Box<Self>, Box<Self>),
    /// Either branch holds (maximum).
    Or(Box<Self>, Box<Self>),
}

impl Antecedent {
    /// Leaf condition `variable is term`.
    pub fn is(variable: impl Into<String>, term: impl Into<String>) -> Self {
        Self::Leaf {
            variable: variable.into(),
            term: term.into(),
        }
    }

    /// Conjunction of `self` and `other`.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    /// Disjunction of `self` and `other`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }

    fn compile(&self, inputs: &[FuzzyVariable]) -> Result<Compiled, FuzzyError> {
        match self {
            Self::Leaf { variable, term } => {
                let (index, input) = inputs
                    .iter()
                    .enumerate()
                    .find(|(_, input)| input.name() == variable)
                    .ok_or_else(|| FuzzyError::UnknownVariable {
                        variable: variable.clone(),
                    })?;
                let term_index =
                    input
                        .term_index(term)
                        .ok_or_else(|| FuzzyError::UnknownTerm {
                            variable: variable.clone(),
                            term: term.clone(),
                        })?;
                Ok(Compiled::Leaf {
                    input: index,
                    term: term_index,
                })
            }
            Self::And(left, right) => Ok(Compiled::And(
                Box::new(left.compile(inputs)?),
                Box::new(right.compile(inputs)?),
            )),
            Self::Or(left, right) => Ok(Compiled::Or(
                Box::new(left.compile(inputs)?),
                Box::new(right.compile(inputs)?),
            )),
        }
    }

    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf { .. } => write!(f, "{self}"),
            Self::And(..) | Self::Or(..) => write!(f, "({self})"),
        }
    }
}

impl fmt::Display for Antecedent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf { variable, term } => write!(f, "{variable} is {term}"),
            Self::And(left, right) => {
                left.fmt_nested(f)?;
                f.write_str(" AND ")?;
                right.fmt_nested(f)
            }
            Self::Or(left, right) => {
                left.fmt_nested(f)?;
                f.write_str(" OR ")?;
                right.fmt_nested(f)
            }
        }
    }
}

/// `IF antecedent THEN output is term`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    antecedent: Antecedent,
    output: String,
    term: String,
}

impl Rule {
    /// Build a rule concluding `output is term` when `antecedent` holds.
    pub fn new(antecedent: Antecedent, output: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            antecedent,
            output: output.into(),
            term: term.into(),
        }
    }

    /// Condition tree.
    #[must_use]
    pub const fn antecedent(&self) -> &Antecedent {
        &self.antecedent
    }

    /// Output variable named by the consequent.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Output term named by the consequent.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    pub(crate) fn compile(
        &self,
        inputs: &[FuzzyVariable],
        output: &FuzzyVariable,
    ) -> Result<CompiledRule, FuzzyError> {
        let antecedent = self.antecedent.compile(inputs)?;
        if self.output != output.name() {
            return Err(FuzzyError::UnknownVariable {
                variable: self.output.clone(),
            });
        }
        let consequent = output
            .term_index(&self.term)
            .ok_or_else(|| FuzzyError::UnknownTerm {
                variable: self.output.clone(),
                term: self.term.clone(),
            })?;
        Ok(CompiledRule {
            antecedent,
            consequent,
        })
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IF {} THEN {} is {}",
            self.antecedent, self.output, self.term
        )
    }
}

/// Antecedent with names resolved to input and term positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Compiled {
    Leaf { input: usize, term: usize },
    And(Box<Self>, Box<Self>),
    Or(Box<Self>, Box<Self>),
}

impl Compiled {
    /// Firing strength given per-input, per-term membership degrees.
    pub(crate) fn strength(&self, degrees: &[Vec<f64>]) -> f64 {
        match self {
            Self::Leaf { input, term } => degrees
                .get(*input)
                .and_then(|terms| terms.get(*term))
                .copied()
                .unwrap_or(0.0),
            Self::And(left, right) => left.strength(degrees).min(right.strength(degrees)),
            Self::Or(left, right) => left.strength(degrees).max(right.strength(degrees)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompiledRule {
    pub(crate) antecedent: Compiled,
    pub(crate) consequent: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_parenthesises_nested_branches() {
        let antecedent = Antecedent::is("skills", "low")
            .and(Antecedent::is("cgpa", "low").or(Antecedent::is("experience", "low")));
        assert_eq!(
            antecedent.to_string(),
            "skills is low AND (cgpa is low OR experience is low)"
        );
        let rule = Rule::new(antecedent, "match", "poor");
        assert!(rule.to_string().ends_with("THEN match is poor"));
    }

    #[rstest]
    #[case(Compiled::Leaf { input: 0, term: 1 }, 0.25)]
    #[case(
        Compiled::And(
            Box::new(Compiled::Leaf { input: 0, term: 1 }),
            Box::new(Compiled::Leaf { input: 1, term: 0 }),
        ),
        0.25
    )]
    #[case(
        Compiled::Or(
            Box::new(Compiled::Leaf { input: 0, term: 1 }),
            Box::new(Compiled::Leaf { input: 1, term: 0 }),
        ),
        0.75
    )]
    #[case(Compiled::Leaf { input: 5, term: 0 }, 0.0)]
    fn strength_uses_min_and_max(#[case] tree: Compiled, #[case] expected: f64) {
        let degrees = vec![vec![0.0, 0.25], vec![0.75, 0.0]];
        assert_eq!(tree.strength(&degrees), expected);
    }
}
