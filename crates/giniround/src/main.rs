use anyhow::Result;
use clap::Parser;
use giniround::cli::{CheckArgs, Cli, Command};
use giniround::commands;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }
    let color = !cli.no_color;
    let stdout = io::stdout().lock();

    match cli.command {
        Some(Command::Check(args)) => {
            let summary = commands::check(&args, color, stdout)?;
            Ok(ExitCode::from(summary.exit_code() as u8))
        }
        None => {
            let summary = commands::check(&CheckArgs::default(), color, stdout)?;
            Ok(ExitCode::from(summary.exit_code() as u8))
        }
        Some(Command::Verify(args)) => {
            let all_hold = commands::verify(&args, stdout)?;
            Ok(if all_hold { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Some(Command::Latest(args)) => {
            commands::latest(&args, stdout)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
