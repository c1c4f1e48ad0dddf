//! Property-based tests for membership functions and inference.
//!
//! # Invariants tested
//!
//! - **Triangle shape:** `μ(a) = 0`, `μ(b) = 1`, `μ(c) = 0` for strictly
//!   ordered breakpoints, rising on `[a, b]` and falling on `[b, c]`.
//! - **Bounded degrees:** every degree lies in `[0, 1]`.
//! - **Bounded scores:** reference scores stay within `[0, 100]`.
//! - **Order independence:** permuting the rule base leaves scores unchanged.
//! - **Idempotence:** inferring twice yields bit-identical scores.

use hirematch_fuzzy::{FuzzySystem, Rule, Triangular, reference};
use proptest::prelude::*;

const EPSILON: f64 = 1e-9;

/// Strictly ordered breakpoints `a < b < c` on a modest range.
fn ordered_breakpoints() -> impl Strategy<Value = (f64, f64, f64)> {
    (-100.0_f64..100.0, 0.5_f64..50.0, 0.5_f64..50.0)
        .prop_map(|(a, left, right)| (a, a + left, a + left + right))
}

fn reference_inputs() -> impl Strategy<Value = [f64; 3]> {
    (0.0_f64..=28.0, 0.0_f64..=20.0, 0.0_f64..=21.0)
        .prop_map(|(skills, cgpa, experience)| [skills, cgpa, experience])
}

fn reference_system() -> FuzzySystem {
    reference::hiring_system().expect("reference system builds")
}

fn reference_with_rules(rules: Vec<Rule>) -> FuzzySystem {
    let system = reference_system();
    FuzzySystem::new(system.inputs().to_vec(), system.output().clone(), rules)
        .expect("permuted rule base is valid")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: feet have degree zero and the peak has degree one.
    #[test]
    fn triangle_hits_its_breakpoints((a, b, c) in ordered_breakpoints()) {
        let triangle = Triangular::new(a, b, c).expect("ordered breakpoints");
        prop_assert_eq!(triangle.degree(a), 0.0);
        prop_assert_eq!(triangle.degree(b), 1.0);
        prop_assert_eq!(triangle.degree(c), 0.0);
    }

    /// Property: the degree rises on `[a, b]` and falls on `[b, c]`.
    #[test]
    fn triangle_is_monotone_on_each_side(
        (a, b, c) in ordered_breakpoints(),
        t1 in 0.0_f64..=1.0,
        t2 in 0.0_f64..=1.0,
    ) {
        let triangle = Triangular::new(a, b, c).expect("ordered breakpoints");
        let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };

        // Tolerance absorbs rounding where `a + (b - a) * 1.0` overshoots `b`.
        let rising = |t: f64| triangle.degree(a + (b - a) * t);
        prop_assert!(rising(lo) <= rising(hi) + EPSILON);

        let falling = |t: f64| triangle.degree(b + (c - b) * t);
        prop_assert!(falling(lo) + EPSILON >= falling(hi));
    }

    /// Property: degrees never leave the unit interval, wherever `x` lies.
    #[test]
    fn degrees_stay_in_unit_interval(
        (a, b, c) in ordered_breakpoints(),
        x in -500.0_f64..500.0,
    ) {
        let triangle = Triangular::new(a, b, c).expect("ordered breakpoints");
        let degree = triangle.degree(x);
        prop_assert!((0.0..=1.0).contains(&degree), "degree {degree} at {x}");
    }

    /// Property: reference scores are finite and within `[0, 100]`.
    #[test]
    fn reference_scores_are_bounded(inputs in reference_inputs()) {
        let system = reference_system();
        if let Ok(inference) = system.infer(&inputs) {
            let score = inference.score();
            prop_assert!(score.is_finite());
            prop_assert!((0.0..=100.0).contains(&score), "score {score}");
        }
    }

    /// Property: out-of-range inputs never raise anything but `NoRuleFired`.
    #[test]
    fn out_of_range_inputs_never_panic(
        skills in -100.0_f64..200.0,
        cgpa in -100.0_f64..200.0,
        experience in -100.0_f64..200.0,
    ) {
        let system = reference_system();
        if let Ok(inference) = system.infer(&[skills, cgpa, experience]) {
            prop_assert!((0.0..=100.0).contains(&inference.score()));
        }
    }

    /// Property: the score does not depend on rule order.
    #[test]
    fn rule_order_does_not_change_scores(
        inputs in reference_inputs(),
        order in Just((0..9).collect::<Vec<usize>>()).prop_shuffle(),
    ) {
        let baseline = reference_system().infer(&inputs);
        let rules = reference::rules();
        let permuted: Vec<Rule> = order
            .iter()
            .filter_map(|index| rules.get(*index).cloned())
            .collect();
        let shuffled = reference_with_rules(permuted).infer(&inputs);
        prop_assert_eq!(
            baseline.map(|inference| inference.score().to_bits()),
            shuffled.map(|inference| inference.score().to_bits())
        );
    }

    /// Property: inference is a pure function of its inputs.
    #[test]
    fn inference_is_idempotent(inputs in reference_inputs()) {
        let system = reference_system();
        let first = system.infer(&inputs);
        let second = system.infer(&inputs);
        prop_assert_eq!(first, second);
    }
}
