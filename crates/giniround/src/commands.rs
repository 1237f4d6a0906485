//! Subcommand implementations

use anyhow::{Context, Result};
use giniround_analysis::config::HarnessConfig;
use giniround_analysis::harness::{Summary, DEFAULT_INPUTS};
use giniround_analysis::oracle::assess;
use giniround_analysis::records::{find_latest_valid_gini, parse_indicator_response, valid_history};
use giniround_analysis::verify::{ContractChecker, PropertyStatus, PropertyVerifier};
use giniround_core::bridge;
use std::io::Write;
use tracing::{debug, info};

use crate::cli::{CheckArgs, LatestArgs, VerifyArgs};
use crate::report::{ConsoleReporter, JsonReporter};

/// Run the conformance cases. Command-line flags override the config file.
pub fn check<W: Write>(args: &CheckArgs, color: bool, out: W) -> Result<Summary> {
    let mut config = match &args.config {
        Some(path) => HarnessConfig::from_file(path)?,
        None => HarnessConfig::default(),
    };
    if let Some(rounder) = args.rounder {
        config.rounder = rounder;
    }
    if !args.values.is_empty() {
        config.cases = args.values.clone();
    }
    debug!(?config, "harness configuration");

    let rounder = config.rounder.build();
    let harness = config.harness();
    let summary = if args.json {
        let mut reporter = JsonReporter::new(out);
        let summary = harness.run(rounder.as_ref(), &mut reporter);
        reporter.finish().context("failed to write JSON report")?;
        summary
    } else {
        let mut reporter = ConsoleReporter::new(out, color);
        let summary = harness.run(rounder.as_ref(), &mut reporter);
        reporter.finish().context("failed to write report")?;
        summary
    };
    Ok(summary)
}

/// Run contract and property verification. Returns whether everything held.
pub fn verify<W: Write>(args: &VerifyArgs, mut out: W) -> Result<bool> {
    let rounder = args.rounder.build();
    let mut all_hold = true;

    writeln!(out, "--- contract checks: {} ---", args.rounder)?;
    let contract = ContractChecker::rounding_contract();
    let conditions = contract
        .preconditions
        .iter()
        .chain(&contract.postconditions)
        .chain(&contract.invariants);
    for condition in conditions {
        writeln!(out, "  {}: {}", condition.name, condition.expression)?;
    }
    for &x in &DEFAULT_INPUTS {
        for result in ContractChecker::check(rounder.as_ref(), x) {
            if let Some(detail) = result.detail {
                all_hold = false;
                writeln!(out, "  violated {}: {detail}", result.name)?;
            }
        }
    }

    writeln!(out, "--- property verification: {} ---", args.rounder)?;
    let results = PropertyVerifier::new().with_samples(args.samples).verify_all(rounder.as_ref());
    for result in &results {
        match &result.status {
            PropertyStatus::Proven => writeln!(out, "  {}: proven over {} inputs", result.property, result.checked)?,
            PropertyStatus::Violated(why) => {
                all_hold = false;
                writeln!(out, "  {}: violated ({why})", result.property)?;
                for example in &result.counterexamples {
                    writeln!(out, "    {example}")?;
                }
            }
        }
    }

    info!(rounder = %args.rounder, all_hold, "verification finished");
    Ok(all_hold)
}

/// Round the latest valid gini value found in a saved payload.
pub fn latest<W: Write>(args: &LatestArgs, mut out: W) -> Result<()> {
    let json = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read payload {}", args.file.display()))?;
    let records = parse_indicator_response(&json)
        .with_context(|| format!("failed to parse payload {}", args.file.display()))?;
    debug!(records = records.len(), "parsed indicator payload");

    if records.is_empty() {
        writeln!(out, "no gini data available")?;
        return Ok(());
    }
    let latest = find_latest_valid_gini(&records).and_then(|r| r.value.map(|v| (r, v)));
    let Some((record, value)) = latest else {
        writeln!(out, "no valid gini values among {} records", records.len())?;
        return Ok(());
    };

    let gini = value as f32;
    let rounded = bridge(args.rounder.build().as_ref(), gini);
    let result = assess(gini, rounded);
    writeln!(
        out,
        "{} ({}): gini {value} -> {rounded} [{}]",
        record.country, record.year, result.verdict
    )?;

    if args.history {
        writeln!(out, "history:")?;
        for entry in valid_history(&records) {
            if let Some(v) = entry.value {
                writeln!(out, "  {}: {v:>6.2}", entry.year)?;
            }
        }
    }
    Ok(())
}
