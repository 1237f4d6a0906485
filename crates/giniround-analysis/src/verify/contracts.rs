//! Contract definitions and checking for rounding primitives

use crate::oracle::tie_candidates;
use giniround_core::{bridge, RoundToInt};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    pub preconditions: Vec<Condition>,
    pub postconditions: Vec<Condition>,
    pub invariants: Vec<Condition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    pub name: String,
    pub expression: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionResult {
    pub name: String,
    pub holds: bool,
    pub detail: Option<String>,
}

impl ConditionResult {
    fn holds(name: &str) -> Self {
        Self {
            name: name.to_string(),
            holds: true,
            detail: None,
        }
    }

    fn violated(name: &str, detail: String) -> Self {
        Self {
            name: name.to_string(),
            holds: false,
            detail: Some(detail),
        }
    }
}

/// Magnitude below which every f32 converts to i32 without saturating.
const I32_RANGE: f32 = 2_147_483_648.0;

pub struct ContractChecker;

impl ContractChecker {
    /// The contract every conforming rounder satisfies.
    pub fn rounding_contract() -> Contract {
        Contract {
            preconditions: vec![Condition {
                name: "finite_input".to_string(),
                expression: "x is finite and |x| < 2^31".to_string(),
                description: "Input must be representable as i32 after rounding".to_string(),
            }],
            postconditions: vec![Condition {
                name: "nearest_integer".to_string(),
                expression: "|result - x| <= 0.5".to_string(),
                description: "Result must be a nearest integer to the input".to_string(),
            }],
            invariants: vec![Condition {
                name: "tie_convention".to_string(),
                expression: "tie(x) => result in {away(x), even(x)}".to_string(),
                description: "Ties must resolve away from zero or to even".to_string(),
            }],
        }
    }

    /// Check `rounder` against the rounding contract at `x`.
    ///
    /// When the precondition fails the remaining conditions are not checked.
    pub fn check<R: RoundToInt + ?Sized>(rounder: &R, x: f32) -> Vec<ConditionResult> {
        let mut results = Vec::with_capacity(3);

        if !x.is_finite() || x.abs() >= I32_RANGE {
            results.push(ConditionResult::violated(
                "finite_input",
                format!("input {x} is outside the convertible range"),
            ));
            return results;
        }
        results.push(ConditionResult::holds("finite_input"));

        let actual = bridge(rounder, x);
        let distance = (f64::from(actual) - f64::from(x)).abs();
        if distance <= 0.5 {
            results.push(ConditionResult::holds("nearest_integer"));
        } else {
            results.push(ConditionResult::violated(
                "nearest_integer",
                format!("{} returned {actual} for {x} (distance {distance})", rounder.name()),
            ));
        }

        results.push(Self::check_tie(rounder.name(), x, actual));
        results
    }

    fn check_tie(name: &str, x: f32, actual: i32) -> ConditionResult {
        // Only exact ties constrain the convention.
        if x.fract().abs() != 0.5 {
            return ConditionResult::holds("tie_convention");
        }
        match tie_candidates(x) {
            Some((away, even)) if actual == away || actual == even => ConditionResult::holds("tie_convention"),
            Some((away, even)) => ConditionResult::violated(
                "tie_convention",
                format!("{name} resolved tie {x} to {actual}, expected {away} or {even}"),
            ),
            None => ConditionResult::holds("tie_convention"),
        }
    }

    pub fn all_hold(results: &[ConditionResult]) -> bool {
        results.iter().all(|r| r.holds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use giniround_core::{TiesAway, TiesToEven, Truncate};

    #[test]
    fn test_rounding_contract_shape() {
        let contract = ContractChecker::rounding_contract();
        assert_eq!(contract.preconditions.len(), 1);
        assert_eq!(contract.postconditions[0].name, "nearest_integer");
        assert_eq!(contract.invariants[0].name, "tie_convention");
    }

    #[test]
    fn test_conforming_rounders_hold() {
        for x in [42.7f32, 42.5, -42.5, 0.0, -0.8, 2.5] {
            assert!(ContractChecker::all_hold(&ContractChecker::check(&TiesToEven, x)));
            assert!(ContractChecker::all_hold(&ContractChecker::check(&TiesAway, x)));
        }
    }

    #[test]
    fn test_truncate_breaks_nearest_integer() {
        let results = ContractChecker::check(&Truncate, 42.7);
        let nearest = results.iter().find(|r| r.name == "nearest_integer").unwrap();
        assert!(!nearest.holds);
        assert!(nearest.detail.as_deref().unwrap().contains("truncate"));
    }

    #[test]
    fn test_truncate_breaks_negative_tie() {
        // -2.5 truncates to -2, which is the even candidate.
        assert!(ContractChecker::all_hold(&ContractChecker::check(&Truncate, -2.5)));
        // -1.5 truncates to -1; both conventions give -2.
        let results = ContractChecker::check(&Truncate, -1.5);
        let tie = results.iter().find(|r| r.name == "tie_convention").unwrap();
        assert!(!tie.holds);
    }

    #[test]
    fn test_precondition_short_circuits() {
        let results = ContractChecker::check(&TiesToEven, f32::NAN);
        assert_eq!(results.len(), 1);
        assert!(!results[0].holds);

        let results = ContractChecker::check(&TiesToEven, 3.0e9);
        assert_eq!(results[0].name, "finite_input");
        assert!(!results[0].holds);
    }
}
