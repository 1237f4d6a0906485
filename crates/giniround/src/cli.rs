//! Command-line interface

use clap::{Args, Parser, Subcommand};
use giniround_core::RounderKind;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "giniround", version, about = "Check gini rounding primitives against a two-convention oracle")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the conformance cases and exit with the number of failures
    Check(CheckArgs),
    /// Run contract checks and sampled property verification
    Verify(VerifyArgs),
    /// Round the most recent gini value from a saved indicator payload
    Latest(LatestArgs),
}

#[derive(Debug, Default, Args)]
pub struct CheckArgs {
    /// Rounder to exercise (ties-to-even, ties-away, truncate)
    #[arg(short, long)]
    pub rounder: Option<RounderKind>,

    /// Input value to check; repeat to build a custom case list
    #[arg(long = "value", allow_negative_numbers = true)]
    pub values: Vec<f32>,

    /// JSON harness configuration (`rounder`, `cases`)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Emit one JSON object per case plus a summary object
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct VerifyArgs {
    #[arg(short, long, default_value_t = RounderKind::TiesToEven)]
    pub rounder: RounderKind,

    /// Random samples drawn on top of the fixed grid
    #[arg(long, default_value_t = 1_000)]
    pub samples: usize,
}

#[derive(Debug, Args)]
pub struct LatestArgs {
    /// Indicator payload saved from the World Bank API
    #[arg(short, long)]
    pub file: PathBuf,

    #[arg(short, long, default_value_t = RounderKind::TiesToEven)]
    pub rounder: RounderKind,

    /// Also list every valid record, oldest year first
    #[arg(long)]
    pub history: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_with_negative_values() {
        let cli = Cli::parse_from(["giniround", "check", "--value", "-42.5", "--value", "0.8", "-r", "away"]);
        let Some(Command::Check(args)) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(args.values, vec![-42.5, 0.8]);
        assert_eq!(args.rounder, Some(RounderKind::TiesAway));
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["giniround", "-vv"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 2);
    }
}
