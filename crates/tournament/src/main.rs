//! Round-robin tournament CLI
//!
//! Validates the participant count, runs the tournament and prints the
//! final standings.

use anyhow::Context;
use round_robin::cli::{self, CliOptions, Command};
use round_robin::{run_tournament_with, MatchEngine, RockPaperScissors, TournamentReport};
use std::env;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(options: CliOptions) -> anyhow::Result<()> {
    let engine = RockPaperScissors::new();
    info!(
        participants = options.participants,
        seed = ?options.config.seed,
        "Running tournament"
    );

    let outcome = run_tournament_with(options.participants, &options.config, &engine)
        .context("tournament aborted")?;

    let report = TournamentReport::from_outcome(engine.name(), &outcome);
    println!();
    report.print_report();

    if let Some(path) = options.json_path {
        report
            .save(&path)
            .with_context(|| format!("failed to export report to {}", path.display()))?;
        println!("Report saved to {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match cli::parse_args(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            println!("{}", cli::usage());
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", cli::usage());
            return ExitCode::FAILURE;
        }
    };

    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
