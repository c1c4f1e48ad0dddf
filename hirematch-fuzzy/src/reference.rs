//! The reference hiring system.
//!
//! Three inputs measured on tiered scales (`skills`, `cgpa`, `experience`)
//! and one output, `match`, on `0..=100`.

use crate::{Antecedent, FuzzyError, FuzzySystem, FuzzyVariable, Rule};

/// Name of the skills input.
pub const SKILLS: &str = "skills";
/// Name of the CGPA input.
pub const CGPA: &str = "cgpa";
/// Name of the experience input.
pub const EXPERIENCE: &str = "experience";
/// Name of the output variable.
pub const MATCH: &str = "match";

/// Skills scale `0..=28` with five terms.
///
/// `minimal` and `expert` cover the ends of the scale so that every skills
/// value belongs to at least one term.
///
/// # Errors
/// Never fails for the built-in table; the `Result` mirrors
/// [`FuzzyVariable::builder`].
pub fn skills() -> Result<FuzzyVariable, FuzzyError> {
    FuzzyVariable::builder(SKILLS, 0.0, 28.0, 1.0)
        .term("minimal", 0.0, 0.0, 7.0)
        .term("low", 0.0, 7.0, 14.0)
        .term("medium", 10.0, 14.0, 21.0)
        .term("high", 14.0, 21.0, 28.0)
        .term("expert", 21.0, 28.0, 28.0)
        .build()
}

/// CGPA tier scale `0..=20`.
///
/// # Errors
/// Never fails for the built-in table.
pub fn cgpa() -> Result<FuzzyVariable, FuzzyError> {
    FuzzyVariable::builder(CGPA, 0.0, 20.0, 1.0)
        .term("low", 0.0, 0.0, 10.0)
        .term("medium", 5.0, 10.0, 15.0)
        .term("high", 10.0, 20.0, 20.0)
        .build()
}

/// Experience tier scale `0..=21`.
///
/// # Errors
/// Never fails for the built-in table.
pub fn experience() -> Result<FuzzyVariable, FuzzyError> {
    FuzzyVariable::builder(EXPERIENCE, 0.0, 21.0, 1.0)
        .term("low", 0.0, 7.0, 14.0)
        .term("medium", 7.0, 14.0, 21.0)
        .term("high", 14.0, 21.0, 21.0)
        .build()
}

/// Output scale `0..=100`.
///
/// # Errors
/// Never fails for the built-in table.
pub fn match_score() -> Result<FuzzyVariable, FuzzyError> {
    FuzzyVariable::builder(MATCH, 0.0, 100.0, 1.0)
        .term("poor", 0.0, 0.0, 40.0)
        .term("average", 20.0, 50.0, 80.0)
        .term("excellent", 60.0, 100.0, 100.0)
        .build()
}

/// The nine hiring rules, in evaluation order.
#[must_use]
pub fn rules() -> Vec<Rule> {
    let skills = |term: &str| Antecedent::is(SKILLS, term);
    let cgpa = |term: &str| Antecedent::is(CGPA, term);
    let experience = |term: &str| Antecedent::is(EXPERIENCE, term);
    vec![
        Rule::new(skills("minimal"), MATCH, "poor"),
        Rule::new(
            skills("low").and(cgpa("low").or(experience("low"))),
            MATCH,
            "poor",
        ),
        Rule::new(cgpa("low").and(experience("low")), MATCH, "poor"),
        Rule::new(
            skills("low").and(cgpa("medium").or(cgpa("high"))),
            MATCH,
            "average",
        ),
        Rule::new(skills("medium"), MATCH, "average"),
        Rule::new(
            skills("medium").and(cgpa("high")).and(experience("high")),
            MATCH,
            "excellent",
        ),
        Rule::new(skills("high"), MATCH, "average"),
        Rule::new(
            skills("high").and(cgpa("high").or(experience("high"))),
            MATCH,
            "excellent",
        ),
        Rule::new(skills("expert"), MATCH, "excellent"),
    ]
}

/// Build the reference hiring system with inputs ordered
/// `skills, cgpa, experience`.
///
/// # Errors
/// Never fails for the built-in tables; the `Result` mirrors
/// [`FuzzySystem::new`].
pub fn hiring_system() -> Result<FuzzySystem, FuzzyError> {
    FuzzySystem::new(
        vec![skills()?, cgpa()?, experience()?],
        match_score()?,
        rules(),
    )
}
