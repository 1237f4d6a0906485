//! Property checks over sampled gini values
//!
//! Inputs are whole hundredths: a deterministic grid across `[-100, 100]`
//! plus quickcheck-generated values strictly below `±10_000` in magnitude.
//! Two-decimal values never fall within f32 noise of a tie unless they are one.

use super::{PropertyStatus, VerificationResult};
use crate::oracle::{evaluate, is_half_case, round_half_away_from_zero, tie_candidates};
use giniround_core::{bridge, RoundToInt};
use quickcheck::{Arbitrary, Gen};
use tracing::debug;

const GRID_LIMIT: i32 = 10_000;
const MAX_COUNTEREXAMPLES: usize = 10;

pub struct PropertyVerifier {
    samples: usize,
    gen_size: usize,
}

impl Default for PropertyVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyVerifier {
    pub fn new() -> Self {
        Self {
            samples: 1_000,
            gen_size: 100,
        }
    }

    /// Number of random samples drawn on top of the fixed grid.
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn inputs(&self) -> Vec<f32> {
        let mut g = Gen::new(self.gen_size);
        let grid = (-GRID_LIMIT..=GRID_LIMIT).map(|k| k as f32 / 100.0);
        let random = (0..self.samples).map(|_| {
            let n: i32 = Arbitrary::arbitrary(&mut g);
            (n % 1_000_000) as f32 / 100.0
        });
        grid.chain(random).collect()
    }

    pub fn verify_all<R: RoundToInt + ?Sized>(&self, rounder: &R) -> Vec<VerificationResult> {
        let inputs = self.inputs();
        debug!(rounder = rounder.name(), inputs = inputs.len(), "verifying rounding properties");
        vec![
            Self::non_half_unique(rounder, &inputs),
            Self::half_two_way(rounder, &inputs),
            Self::idempotent(rounder, &inputs),
        ]
    }

    /// Off ties the away-from-zero value is the only correct answer.
    pub fn non_half_unique<R: RoundToInt + ?Sized>(rounder: &R, inputs: &[f32]) -> VerificationResult {
        Self::collect("non_half_unique", inputs.iter().filter(|&&x| !is_half_case(x)), |x| {
            let actual = bridge(rounder, x);
            let expected = round_half_away_from_zero(x);
            (actual != expected || !evaluate(x, actual).is_pass())
                .then(|| format!("{x} -> {actual} (expected {expected})"))
        })
    }

    /// On ties the oracle passes exactly when the result is one of the two
    /// candidates.
    pub fn half_two_way<R: RoundToInt + ?Sized>(rounder: &R, inputs: &[f32]) -> VerificationResult {
        Self::collect("half_two_way", inputs.iter().filter(|&&x| is_half_case(x)), |x| {
            let actual = bridge(rounder, x);
            let (away, even) = tie_candidates(x)?;
            let candidate = actual == away || actual == even;
            (!candidate || !evaluate(x, actual).is_pass())
                .then(|| format!("{x} -> {actual} (accepted: {away}, {even})"))
        })
    }

    pub fn idempotent<R: RoundToInt + ?Sized>(rounder: &R, inputs: &[f32]) -> VerificationResult {
        Self::collect("idempotent", inputs.iter(), |x| {
            let first = bridge(rounder, x);
            let second = bridge(rounder, x);
            (first != second).then(|| format!("{x} -> {first} then {second}"))
        })
    }

    fn collect<'a, I, F>(property: &str, inputs: I, mut check: F) -> VerificationResult
    where
        I: Iterator<Item = &'a f32>,
        F: FnMut(f32) -> Option<String>,
    {
        let mut checked = 0usize;
        let mut violations = 0usize;
        let mut counterexamples = Vec::new();
        for &x in inputs {
            checked += 1;
            if let Some(example) = check(x) {
                violations += 1;
                if counterexamples.len() < MAX_COUNTEREXAMPLES {
                    counterexamples.push(example);
                }
            }
        }

        let status = if violations == 0 {
            PropertyStatus::Proven
        } else {
            PropertyStatus::Violated(format!("{violations} of {checked} inputs"))
        };
        VerificationResult {
            property: property.to_string(),
            status,
            checked,
            counterexamples,
        }
    }
}
