//! Serialisable system definitions.
//!
//! A [`SystemDefinition`] is the plain-data form of a [`FuzzySystem`]. It is
//! what recruiters edit to tune variables and rules without recompiling:
//!
//! ```
//! use hirematch_fuzzy::{FuzzySystem, SystemDefinition, reference};
//!
//! let system = reference::hiring_system().expect("reference system builds");
//! let json = serde_json::to_string(&SystemDefinition::from(&system)).expect("serialises");
//! let parsed: SystemDefinition = serde_json::from_str(&json).expect("parses");
//! let rebuilt = FuzzySystem::try_from(parsed).expect("still valid");
//! assert_eq!(rebuilt.rules().len(), system.rules().len());
//! ```

use serde::{Deserialize, Serialize};

use crate::{Antecedent, FuzzyError, FuzzySystem, FuzzyVariable, Rule};

/// Inputs, output and rules of a fuzzy system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemDefinition {
    /// Input variables in positional order.
    pub inputs: Vec<VariableDefinition>,
    /// The single output variable.
    pub output: VariableDefinition,
    /// Rules in evaluation order; consequents refer to `output`.
    pub rules: Vec<RuleDefinition>,
}

/// One variable and its terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariableDefinition {
    /// Variable name.
    pub name: String,
    /// Universe lower bound.
    pub min: f64,
    /// Universe upper bound.
    pub max: f64,
    /// Sampling step, `1.0` when omitted.
    #[serde(default = "default_step")]
    pub step: f64,
    /// Triangular terms.
    pub terms: Vec<TermDefinition>,
}

/// A named triangle `[a, b, c]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TermDefinition {
    /// Term name.
    pub name: String,
    /// Breakpoints `a <= b <= c`.
    pub points: [f64; 3],
}

/// `IF when THEN output is then`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDefinition {
    /// Condition tree.
    pub when: Antecedent,
    /// Output term concluded by the rule.
    pub then: String,
}

const fn default_step() -> f64 {
    1.0
}

impl TryFrom<VariableDefinition> for FuzzyVariable {
    type Error = FuzzyError;

    fn try_from(definition: VariableDefinition) -> Result<Self, Self::Error> {
        definition
            .terms
            .into_iter()
            .fold(
                Self::builder(definition.name, definition.min, definition.max, definition.step),
                |builder, TermDefinition { name, points: [a, b, c] }| builder.term(name, a, b, c),
            )
            .build()
    }
}

impl TryFrom<SystemDefinition> for FuzzySystem {
    type Error = FuzzyError;

    /// Validate the definition exactly as [`FuzzySystem::new`] would.
    fn try_from(definition: SystemDefinition) -> Result<Self, Self::Error> {
        let inputs = definition
            .inputs
            .into_iter()
            .map(FuzzyVariable::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let output = FuzzyVariable::try_from(definition.output)?;
        let rules = definition
            .rules
            .into_iter()
            .map(|rule| Rule::new(rule.when, output.name(), rule.then))
            .collect();
        Self::new(inputs, output, rules)
    }
}

impl From<&FuzzyVariable> for VariableDefinition {
    fn from(variable: &FuzzyVariable) -> Self {
        let universe = variable.universe();
        Self {
            name: variable.name().to_owned(),
            min: universe.min(),
            max: universe.max(),
            step: universe.step(),
            terms: variable
                .terms()
                .iter()
                .map(|term| {
                    let (a, b, c) = term.shape().breakpoints();
                    TermDefinition {
                        name: term.name().to_owned(),
                        points: [a, b, c],
                    }
                })
                .collect(),
        }
    }
}

impl From<&FuzzySystem> for SystemDefinition {
    fn from(system: &FuzzySystem) -> Self {
        Self {
            inputs: system.inputs().iter().map(VariableDefinition::from).collect(),
            output: VariableDefinition::from(system.output()),
            rules: system
                .rules()
                .iter()
                .map(|rule| RuleDefinition {
                    when: rule.antecedent().clone(),
                    then: rule.term().to_owned(),
                })
                .collect(),
        }
    }
}
