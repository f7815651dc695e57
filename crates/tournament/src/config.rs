//! Tournament configuration
//!
//! Timing knobs only slow the run down; none of them affect correctness.
//! [`TournamentConfig::headless`] turns every delay off for tests and batch runs.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{Result, TournamentError};

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

/// Configuration for a tournament run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Pause after each match, outside the lock (0 = just yield)
    pub pace_ms: u64,
    /// Simulated match length, spent while holding the lock
    pub match_duration_ms: u64,
    /// Delay between spawning consecutive workers
    pub spawn_stagger_ms: u64,
    /// Run seed; every worker derives its own stream from it.
    /// `None` seeds each worker from OS entropy.
    pub seed: Option<u64>,
    /// Print a line for every applied match
    pub verbose: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            pace_ms: 3000,
            match_duration_ms: 1000,
            spawn_stagger_ms: 1000,
            seed: None,
            verbose: true,
        }
    }
}

impl TournamentConfig {
    /// No delays, no narration
    pub fn headless() -> Self {
        Self {
            pace_ms: 0,
            match_duration_ms: 0,
            spawn_stagger_ms: 0,
            seed: None,
            verbose: false,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Zero every delay but keep the other settings
    pub fn without_delays(mut self) -> Self {
        self.pace_ms = 0;
        self.match_duration_ms = 0;
        self.spawn_stagger_ms = 0;
        self
    }

    pub fn pace(&self) -> Pacing {
        Pacing::from_millis(self.pace_ms)
    }

    pub fn match_duration(&self) -> Duration {
        Duration::from_millis(self.match_duration_ms)
    }

    pub fn spawn_stagger(&self) -> Duration {
        Duration::from_millis(self.spawn_stagger_ms)
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(contents: &str, origin: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|source| TournamentError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load config from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| TournamentError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&contents, path)
    }
}

/// How a worker waits between matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Cooperative yield only
    Yield,
    /// Sleep for a fixed time
    Sleep(Duration),
}

impl Pacing {
    pub fn from_millis(ms: u64) -> Self {
        if ms == 0 {
            Pacing::Yield
        } else {
            Pacing::Sleep(Duration::from_millis(ms))
        }
    }

    /// Wait once. Must never be called while holding the scoreboard lock.
    pub fn pause(self) {
        match self {
            Pacing::Yield => std::thread::yield_now(),
            Pacing::Sleep(duration) => std::thread::sleep(duration),
        }
    }
}
