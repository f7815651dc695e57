//! Command-line parsing
//!
//! Everything is validated here, before a scoreboard exists or a worker starts.

use std::num::IntErrorKind;
use std::path::PathBuf;

use crate::config::TournamentConfig;
use crate::error::{Result, TournamentError};

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;

/// Largest accepted participant count
pub const MAX_PARTICIPANTS: i64 = i32::MAX as i64;

pub fn usage() -> String {
    [
        "Round-robin rock/scissors/paper tournament",
        "",
        "Usage:",
        "  round_robin <participants> [options]",
        "",
        "Options:",
        "  --config <file>   Load settings from a TOML file",
        "  --seed <n>        Seed the run for reproducible results",
        "  --pace-ms <n>     Pause after each match (0 = yield only)",
        "  --fast            Disable all delays",
        "  --quiet           Do not print a line per match",
        "  --json <file>     Also write the final report as JSON",
        "",
        "Examples:",
        "  round_robin 5",
        "  round_robin 8 --fast --seed 42 --json results.json",
    ]
    .join("\n")
}

/// Validate a participant count: a whole number in `1..=i32::MAX`
pub fn parse_participant_count(value: &str) -> Result<usize> {
    let count: i64 = value.parse().map_err(|e: std::num::ParseIntError| {
        let reason = match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => "number is out of range",
            IntErrorKind::Empty => "value is empty",
            _ => "not a whole number",
        };
        TournamentError::invalid_argument(value, reason)
    })?;

    if count <= 0 {
        return Err(TournamentError::invalid_argument(
            value,
            "participant count must be positive",
        ));
    }
    if count > MAX_PARTICIPANTS {
        return Err(TournamentError::invalid_argument(
            value,
            format!("participant count must not exceed {}", MAX_PARTICIPANTS),
        ));
    }

    usize::try_from(count)
        .map_err(|_| TournamentError::invalid_argument(value, "too large for this platform"))
}

/// Parsed invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub participants: usize,
    pub config: TournamentConfig,
    pub json_path: Option<PathBuf>,
}

/// What the binary should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(CliOptions),
    Help,
}

fn option_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| TournamentError::invalid_argument(flag, "missing value"))
}

fn parse_u64(value: &str, what: &str) -> Result<u64> {
    value.parse().map_err(|_| {
        TournamentError::invalid_argument(value, format!("{} must be a non-negative integer", what))
    })
}

/// Parse arguments (without the program name)
pub fn parse_args(args: &[String]) -> Result<Command> {
    let Some(first) = args.first() else {
        return Err(TournamentError::invalid_argument(
            "",
            "missing participant count",
        ));
    };
    if matches!(first.as_str(), "help" | "--help" | "-h") {
        return Ok(Command::Help);
    }

    let participants = parse_participant_count(first)?;

    // Flags are applied after the config file, whatever their order
    let mut config_path = None;
    let mut seed = None;
    let mut pace_ms = None;
    let mut fast = false;
    let mut quiet = false;
    let mut json_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                config_path = Some(PathBuf::from(option_value(args, i, "--config")?));
                i += 1;
            }
            "--seed" | "-s" => {
                seed = Some(parse_u64(option_value(args, i, "--seed")?, "seed")?);
                i += 1;
            }
            "--pace-ms" => {
                pace_ms = Some(parse_u64(option_value(args, i, "--pace-ms")?, "pace")?);
                i += 1;
            }
            "--json" | "-j" => {
                json_path = Some(PathBuf::from(option_value(args, i, "--json")?));
                i += 1;
            }
            "--fast" => fast = true,
            "--quiet" | "-q" => quiet = true,
            other => {
                return Err(TournamentError::invalid_argument(other, "unknown option"));
            }
        }
        i += 1;
    }

    let mut config = match config_path {
        Some(path) => TournamentConfig::load(&path)?,
        None => TournamentConfig::default(),
    };
    if fast {
        config = config.without_delays();
    }
    if let Some(ms) = pace_ms {
        config.pace_ms = ms;
    }
    if let Some(seed) = seed {
        config.seed = Some(seed);
    }
    if quiet {
        config.verbose = false;
    }

    Ok(Command::Run(CliOptions {
        participants,
        config,
        json_path,
    }))
}
