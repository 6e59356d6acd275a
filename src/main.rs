//! modsync - go.mod version mismatch checker and updater
//!
//! Compares the `require` block of go.mod files across project directories,
//! or rewrites one dependency's version in all of them.

use anyhow::Context;
use clap::Parser;
use modsync::cli::CliArgs;
use modsync::orchestrator::Orchestrator;
use modsync::output::{create_formatter, OutputConfig};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter
const LOG_ENV: &str = "MODSYNC_LOG";

fn main() -> ExitCode {
    let args = CliArgs::parse();

    init_tracing(args.verbose);

    // Run the main logic and handle errors
    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr so stdout stays parseable
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let orchestrator = Orchestrator::new(args.clone());

    let outcome = match orchestrator.run() {
        Ok(outcome) => outcome,
        Err(e) if e.is_validation() => {
            // Validation failures are reported on stdout
            println!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    let output_config = OutputConfig::from_cli(
        args.json,
        args.verbose,
        args.quiet,
        io::stdout().is_terminal(),
    );
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter
        .format(&outcome, &mut stdout)
        .context("failed to write output")?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
