//! Mamdani inference over a validated variable set and rule base.

use std::collections::HashSet;

use log::debug;

use crate::{
    FuzzyError, FuzzyVariable, InferenceError, Rule,
    rule::CompiledRule,
};

/// A built fuzzy inference system.
///
/// Holds the input variables, the single output variable and the rule base
/// with every name resolved. The value is immutable once built and can be
/// shared by reference across threads.
#[derive(Debug, Clone)]
pub struct FuzzySystem {
    inputs: Vec<FuzzyVariable>,
    output: FuzzyVariable,
    rules: Vec<Rule>,
    compiled: Vec<CompiledRule>,
    samples: Vec<f64>,
    // Output term degrees at every sample, indexed [term][sample].
    curves: Vec<Vec<f64>>,
}

/// Outcome of one inference.
#[derive(Debug, Clone, PartialEq)]
pub struct Inference {
    score: f64,
    activations: Vec<(String, f64)>,
}

impl Inference {
    /// Defuzzified crisp output.
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// Strongest firing strength reached by any rule concluding `term`.
    #[must_use]
    pub fn activation(&self, term: &str) -> Option<f64> {
        self.activations
            .iter()
            .find(|(name, _)| name == term)
            .map(|(_, strength)| *strength)
    }

    /// Activation of every output term in declaration order.
    pub fn activations(&self) -> impl Iterator<Item = (&str, f64)> {
        self.activations
            .iter()
            .map(|(name, strength)| (name.as_str(), *strength))
    }
}

impl FuzzySystem {
    /// Validate and build a system.
    ///
    /// # Errors
    /// - [`FuzzyError::NoInputs`] when `inputs` is empty.
    /// - [`FuzzyError::DuplicateVariable`] when two variables share a name.
    /// - [`FuzzyError::EmptyRuleBase`] when `rules` is empty.
    /// - [`FuzzyError::InvalidRule`] when a rule names an unknown variable or
    ///   term.
    pub fn new(
        inputs: Vec<FuzzyVariable>,
        output: FuzzyVariable,
        rules: Vec<Rule>,
    ) -> Result<Self, FuzzyError> {
        if inputs.is_empty() {
            return Err(FuzzyError::NoInputs);
        }
        let mut names = HashSet::new();
        for variable in inputs.iter().chain(std::iter::once(&output)) {
            if !names.insert(variable.name()) {
                return Err(FuzzyError::DuplicateVariable {
                    variable: variable.name().to_owned(),
                });
            }
        }
        if rules.is_empty() {
            return Err(FuzzyError::EmptyRuleBase);
        }

        let compiled = rules
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                rule.compile(&inputs, &output)
                    .map_err(|source| FuzzyError::InvalidRule {
                        index,
                        source: Box::new(source),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let samples = output.universe().samples();
        let curves = output
            .terms()
            .iter()
            .map(|term| samples.iter().map(|x| term.shape().degree(*x)).collect())
            .collect();

        debug!(
            "built fuzzy system with {} inputs, {} rules and {} output samples",
            inputs.len(),
            compiled.len(),
            samples.len()
        );
        Ok(Self {
            inputs,
            output,
            rules,
            compiled,
            samples,
            curves,
        })
    }

    /// Input variables in positional order.
    #[must_use]
    pub fn inputs(&self) -> &[FuzzyVariable] {
        &self.inputs
    }

    /// Output variable.
    #[must_use]
    pub const fn output(&self) -> &FuzzyVariable {
        &self.output
    }

    /// Rule base in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Degree of `x` in `term` of the input or output `variable`.
    ///
    /// Values outside the variable's universe are evaluated against the
    /// triangle as-is and therefore usually yield `0.0`.
    ///
    /// # Errors
    /// Returns [`FuzzyError::UnknownVariable`] or [`FuzzyError::UnknownTerm`]
    /// when either name is not defined.
    pub fn membership(&self, variable: &str, term: &str, x: f64) -> Result<f64, FuzzyError> {
        let found = self
            .inputs
            .iter()
            .chain(std::iter::once(&self.output))
            .find(|candidate| candidate.name() == variable)
            .ok_or_else(|| FuzzyError::UnknownVariable {
                variable: variable.to_owned(),
            })?;
        found
            .membership(term, x)
            .ok_or_else(|| FuzzyError::UnknownTerm {
                variable: variable.to_owned(),
                term: term.to_owned(),
            })
    }

    /// Run Mamdani inference on one crisp value per input.
    ///
    /// Inputs outside their universe fuzzify to zero rather than failing.
    /// Clipping each output term at the strongest rule concluding it and
    /// then taking the pointwise maximum gives the same aggregate as
    /// clipping per rule, since `max(min(μ, s1), min(μ, s2)) = min(μ,
    /// max(s1, s2))`.
    ///
    /// # Errors
    /// - [`InferenceError::InputArity`] when `crisp` has the wrong length.
    /// - [`InferenceError::NoRuleFired`] when the aggregated set is empty.
    ///
    /// # Examples
    /// ```
    /// use hirematch_fuzzy::reference;
    ///
    /// let system = reference::hiring_system().expect("reference system builds");
    /// let inference = system.infer(&[28.0, 20.0, 21.0]).expect("rules fire");
    /// assert!(inference.score() > 80.0);
    /// assert_eq!(inference.activation("excellent"), Some(1.0));
    /// ```
    #[expect(
        clippy::float_arithmetic,
        reason = "centroid defuzzification is a weighted average"
    )]
    pub fn infer(&self, crisp: &[f64]) -> Result<Inference, InferenceError> {
        if crisp.len() != self.inputs.len() {
            return Err(InferenceError::InputArity {
                expected: self.inputs.len(),
                actual: crisp.len(),
            });
        }

        let degrees: Vec<Vec<f64>> = self
            .inputs
            .iter()
            .zip(crisp)
            .map(|(variable, x)| variable.fuzzify(*x))
            .collect();

        let mut strengths = vec![0.0_f64; self.output.terms().len()];
        for rule in &self.compiled {
            let strength = rule.antecedent.strength(&degrees);
            if let Some(slot) = strengths.get_mut(rule.consequent) {
                *slot = slot.max(strength);
            }
        }

        let mut numerator = 0.0_f64;
        let mut denominator = 0.0_f64;
        for (index, x) in self.samples.iter().enumerate() {
            let aggregated = self
                .curves
                .iter()
                .zip(&strengths)
                .map(|(curve, strength)| {
                    curve.get(index).copied().unwrap_or(0.0).min(*strength)
                })
                .fold(0.0_f64, f64::max);
            numerator += x * aggregated;
            denominator += aggregated;
        }

        if denominator <= 0.0 {
            return Err(InferenceError::NoRuleFired);
        }

        let activations = self
            .output
            .terms()
            .iter()
            .zip(strengths)
            .map(|(term, strength)| (term.name().to_owned(), strength))
            .collect();
        Ok(Inference {
            score: self.output.universe().clamp(numerator / denominator),
            activations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Antecedent;
    use rstest::{fixture, rstest};

    fn variable(name: &str) -> FuzzyVariable {
        FuzzyVariable::builder(name, 0.0, 10.0, 1.0)
            .term("low", 0.0, 0.0, 5.0)
            .term("high", 5.0, 10.0, 10.0)
            .build()
            .expect("valid variable")
    }

    #[fixture]
    fn system() -> FuzzySystem {
        FuzzySystem::new(
            vec![variable("x")],
            variable("y"),
            vec![
                Rule::new(Antecedent::is("x", "low"), "y", "low"),
                Rule::new(Antecedent::is("x", "high"), "y", "high"),
            ],
        )
        .expect("valid system")
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "test compares mirrored centroids"
    )]
    fn extreme_inputs_mirror_each_other(system: FuzzySystem) {
        let low = system.infer(&[0.0]).expect("low fires");
        let high = system.infer(&[10.0]).expect("high fires");
        assert!(low.score() < 5.0);
        assert!(high.score() > 5.0);
        let midpoint = low.score() + high.score();
        assert!((midpoint - 10.0).abs() < 1e-9, "centroids mirror: {midpoint}");
    }

    #[rstest]
    fn reports_no_rule_fired(system: FuzzySystem) {
        assert_eq!(system.infer(&[5.0]), Err(InferenceError::NoRuleFired));
    }

    #[rstest]
    fn out_of_universe_inputs_do_not_raise(system: FuzzySystem) {
        assert_eq!(system.infer(&[-50.0]), Err(InferenceError::NoRuleFired));
    }

    #[rstest]
    #[case(&[])]
    #[case(&[1.0, 2.0])]
    fn rejects_wrong_arity(system: FuzzySystem, #[case] crisp: &[f64]) {
        assert_eq!(
            system.infer(crisp),
            Err(InferenceError::InputArity {
                expected: 1,
                actual: crisp.len(),
            })
        );
    }

    #[rstest]
    fn activations_follow_output_terms(system: FuzzySystem) {
        let inference = system.infer(&[2.5]).expect("low fires");
        assert_eq!(inference.activation("low"), Some(0.5));
        assert_eq!(inference.activation("high"), Some(0.0));
        assert_eq!(inference.activation("none"), None);
        let names: Vec<&str> = inference.activations().map(|(name, _)| name).collect();
        assert_eq!(names, ["low", "high"]);
    }

    #[rstest]
    fn membership_resolves_inputs_and_output(system: FuzzySystem) {
        assert_eq!(system.membership("x", "low", 2.5), Ok(0.5));
        assert_eq!(system.membership("y", "high", 10.0), Ok(1.0));
        assert_eq!(system.membership("x", "low", 99.0), Ok(0.0));
        assert!(matches!(
            system.membership("z", "low", 1.0),
            Err(FuzzyError::UnknownVariable { .. })
        ));
        assert!(matches!(
            system.membership("x", "mid", 1.0),
            Err(FuzzyError::UnknownTerm { .. })
        ));
    }

    #[rstest]
    fn rejects_empty_inputs() {
        let err = FuzzySystem::new(Vec::new(), variable("y"), Vec::new())
            .expect_err("no inputs");
        assert_eq!(err, FuzzyError::NoInputs);
    }

    #[rstest]
    fn rejects_duplicate_variables() {
        let err = FuzzySystem::new(
            vec![variable("x")],
            variable("x"),
            vec![Rule::new(Antecedent::is("x", "low"), "x", "low")],
        )
        .expect_err("output reuses input name");
        assert!(matches!(err, FuzzyError::DuplicateVariable { .. }));
    }

    #[rstest]
    fn rejects_empty_rule_base() {
        let err = FuzzySystem::new(vec![variable("x")], variable("y"), Vec::new())
            .expect_err("no rules");
        assert_eq!(err, FuzzyError::EmptyRuleBase);
    }

    #[rstest]
    #[case(Rule::new(Antecedent::is("z", "low"), "y", "low"), "unknown variable `z`")]
    #[case(Rule::new(Antecedent::is("x", "mid"), "y", "low"), "variable `x` has no term `mid`")]
    #[case(Rule::new(Antecedent::is("x", "low"), "x", "low"), "unknown variable `x`")]
    #[case(Rule::new(Antecedent::is("x", "low"), "y", "mid"), "variable `y` has no term `mid`")]
    fn rejects_unresolvable_rules(#[case] bad: Rule, #[case] cause: &str) {
        let err = FuzzySystem::new(
            vec![variable("x")],
            variable("y"),
            vec![Rule::new(Antecedent::is("x", "low"), "y", "low"), bad],
        )
        .expect_err("unresolvable rule");
        let FuzzyError::InvalidRule { index, source } = err else {
            panic!("expected InvalidRule, got {err:?}");
        };
        assert_eq!(index, 1);
        assert_eq!(source.to_string(), cause);
    }
}
