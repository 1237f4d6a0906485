//! Sequential conformance run over a fixed list of inputs
//!
//! Each case goes through the bridge, is judged by the oracle, handed to a
//! [`Reporter`], and tallied into a [`Summary`]. Nothing is retained beyond
//! the tally.

use crate::oracle::{assess, RoundResult, Verdict};
use giniround_core::{bridge, RoundToInt};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Inputs exercised when no explicit list is given: positives, `.5` ties,
/// negatives, negative ties.
pub const DEFAULT_INPUTS: [f32; 21] = [
    42.7, 42.3, 42.0, 0.0, 0.8, 1.0, //
    42.5, 41.5, 0.5, 1.5, 2.5, //
    -0.2, -0.8, -1.0, -42.7, -42.3, //
    -0.5, -1.5, -2.5, -41.5, -42.5,
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: f32,
}

impl From<f32> for TestCase {
    fn from(input: f32) -> Self {
        Self { input }
    }
}

/// Running pass/fail tally. `failures <= total` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub failures: usize,
}

impl Summary {
    pub fn record(&mut self, verdict: Verdict) {
        self.total += 1;
        if !verdict.is_pass() {
            self.failures += 1;
        }
    }

    pub fn passed(&self) -> usize {
        self.total - self.failures
    }

    pub fn all_passed(&self) -> bool {
        self.failures == 0
    }

    /// Failure count as a process exit status, saturated at 255 so that a
    /// non-zero tally never wraps to zero.
    pub fn exit_code(&self) -> i32 {
        self.failures.min(255) as i32
    }
}

/// Sink for per-case results and the final summary.
pub trait Reporter {
    fn on_start(&mut self, _rounder: &str, _total: usize) {}
    fn on_case(&mut self, index: usize, result: &RoundResult);
    fn on_summary(&mut self, summary: &Summary);
}

/// Collects results in memory.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub results: Vec<RoundResult>,
    pub summary: Option<Summary>,
}

impl Reporter for CollectingReporter {
    fn on_case(&mut self, _index: usize, result: &RoundResult) {
        self.results.push(*result);
    }

    fn on_summary(&mut self, summary: &Summary) {
        self.summary = Some(*summary);
    }
}

pub struct Harness {
    cases: Vec<TestCase>,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness {
    pub fn new() -> Self {
        Self::with_inputs(DEFAULT_INPUTS)
    }

    pub fn with_inputs(inputs: impl IntoIterator<Item = f32>) -> Self {
        Self {
            cases: inputs.into_iter().map(TestCase::from).collect(),
        }
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn run<R, P>(&self, rounder: &R, reporter: &mut P) -> Summary
    where
        R: RoundToInt + ?Sized,
        P: Reporter + ?Sized,
    {
        reporter.on_start(rounder.name(), self.cases.len());

        let mut summary = Summary::default();
        for (index, case) in self.cases.iter().enumerate() {
            let actual = bridge(rounder, case.input);
            let result = assess(case.input, actual);
            debug!(
                input = case.input,
                actual,
                expected = result.expected_half_away,
                half = result.is_half_case,
                "evaluated case"
            );
            if !result.verdict.is_pass() {
                warn!(input = case.input, actual, "rounding rejected by oracle");
            }
            summary.record(result.verdict);
            reporter.on_case(index, &result);
        }

        info!(
            rounder = rounder.name(),
            total = summary.total,
            failures = summary.failures,
            "conformance run finished"
        );
        reporter.on_summary(&summary);
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use giniround_core::{TiesAway, TiesToEven, Truncate};

    #[test]
    fn test_default_inputs_pass_for_conforming_rounders() {
        let harness = Harness::new();
        let mut reporter = CollectingReporter::default();
        let summary = harness.run(&TiesToEven, &mut reporter);
        assert_eq!(summary, Summary { total: 21, failures: 0 });
        assert_eq!(reporter.results.len(), 21);

        let summary = harness.run(&TiesAway, &mut CollectingReporter::default());
        assert_eq!(summary.exit_code(), 0);
    }

    #[test]
    fn test_truncation_is_rejected() {
        let mut reporter = CollectingReporter::default();
        let summary = Harness::new().run(&Truncate, &mut reporter);
        let counted = reporter
            .results
            .iter()
            .filter(|r| r.verdict == Verdict::Fail)
            .count();
        assert_eq!(summary.failures, counted);
        assert!(summary.failures > 0);
        assert!(summary.failures <= summary.total);
        assert_eq!(reporter.summary, Some(summary));
    }

    #[test]
    fn test_summary_record() {
        let mut summary = Summary::default();
        summary.record(Verdict::Pass);
        summary.record(Verdict::Fail);
        summary.record(Verdict::Pass);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.failures, 1);
        assert_eq!(summary.passed(), 2);
        assert!(!summary.all_passed());
        assert_eq!(summary.exit_code(), 1);
    }

    #[test]
    fn test_exit_code_saturates() {
        let summary = Summary { total: 300, failures: 300 };
        assert_eq!(summary.exit_code(), 255);
    }

    #[test]
    fn test_empty_harness() {
        let summary = Harness::with_inputs(Vec::new()).run(&TiesToEven, &mut CollectingReporter::default());
        assert_eq!(summary, Summary::default());
        assert!(summary.all_passed());
    }
}
