//! Reference computation for judging a rounder's output
//!
//! The oracle never asks which convention the rounder follows. It computes
//! the round-half-away-from-zero value and, for inputs that sit on a tie,
//! additionally accepts any even result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance used to classify an input as a `.5` tie.
pub const HALF_CASE_EPSILON: f32 = 1e-5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn is_pass(self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => f.write_str("PASS"),
            Verdict::Fail => f.write_str("FAIL"),
        }
    }
}

/// Which rule accepted (or rejected) an observed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Acceptance {
    /// Matched the away-from-zero expectation.
    AwayFromZero,
    /// Missed it, but the input is a tie and the result is even.
    HalfToEven,
    Rejected,
}

impl Acceptance {
    pub fn verdict(self) -> Verdict {
        match self {
            Acceptance::AwayFromZero | Acceptance::HalfToEven => Verdict::Pass,
            Acceptance::Rejected => Verdict::Fail,
        }
    }
}

/// Outcome of judging one input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub input: f32,
    pub actual: i32,
    pub expected_half_away: i32,
    pub is_half_case: bool,
    pub acceptance: Acceptance,
    pub verdict: Verdict,
}

/// `trunc(x + 0.5)` for `x >= 0`, `trunc(x - 0.5)` otherwise, in f32.
pub fn round_half_away_from_zero(x: f32) -> i32 {
    if x >= 0.0 {
        (x + 0.5) as i32
    } else {
        (x - 0.5) as i32
    }
}

/// True when the fractional part of `x` is within [`HALF_CASE_EPSILON`] of 0.5.
pub fn is_half_case(x: f32) -> bool {
    let fractional_part = (x - x.trunc()).abs();
    (fractional_part - 0.5).abs() < HALF_CASE_EPSILON
}

/// The two integers a tie may legitimately resolve to, as `(away, even)`.
///
/// Returns `None` unless `x` is a half case.
pub fn tie_candidates(x: f32) -> Option<(i32, i32)> {
    if !is_half_case(x) {
        return None;
    }
    let away = round_half_away_from_zero(x);
    let toward = if x >= 0.0 { away - 1 } else { away + 1 };
    let even = if away % 2 == 0 { away } else { toward };
    Some((away, even))
}

fn classify(actual: i32, expected_away: i32, half: bool) -> Acceptance {
    if actual == expected_away {
        Acceptance::AwayFromZero
    } else if half && actual % 2 == 0 {
        Acceptance::HalfToEven
    } else {
        Acceptance::Rejected
    }
}

/// Judge `actual` as the rounding of `x`.
pub fn evaluate(x: f32, actual: i32) -> Verdict {
    classify(actual, round_half_away_from_zero(x), is_half_case(x)).verdict()
}

/// Like [`evaluate`], keeping every intermediate value for reporting.
pub fn assess(x: f32, actual: i32) -> RoundResult {
    let expected_half_away = round_half_away_from_zero(x);
    let half = is_half_case(x);
    let acceptance = classify(actual, expected_half_away, half);
    RoundResult {
        input: x,
        actual,
        expected_half_away,
        is_half_case: half,
        acceptance,
        verdict: acceptance.verdict(),
    }
}
