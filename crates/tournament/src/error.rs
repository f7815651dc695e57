//! Error types for the tournament
//!
//! Every failure here is fatal: nothing is retried, and errors propagate
//! straight to the caller of [`run_tournament`](crate::run_tournament) or the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for tournament operations
#[derive(Debug, Error)]
pub enum TournamentError {
    // ========== Input Errors ==========

    /// Participant count (or another option) is malformed or out of range
    #[error("Invalid argument `{value}`: {reason}")]
    InvalidArgument { value: String, reason: String },

    // ========== Startup Errors ==========

    /// Scoreboard storage could not be allocated
    #[error("Failed to allocate scoreboard for {participants} participants: {reason}")]
    ResourceAcquisition { participants: usize, reason: String },

    /// OS thread for a worker could not be created
    #[error("Failed to spawn worker {index}: {source}")]
    WorkerSpawn {
        index: usize,
        #[source]
        source: std::io::Error,
    },

    // ========== Runtime Errors ==========

    /// Worker thread panicked before finishing its matches
    #[error("Worker {index} panicked")]
    WorkerPanicked { index: usize },

    /// Scoreboard lock was poisoned by a panicking worker
    #[error("Scoreboard lock poisoned")]
    ScoreBoardPoisoned,

    // ========== Config / Report Errors ==========

    /// Configuration file could not be read
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`TournamentConfig`](crate::TournamentConfig)
    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Report could not be serialized
    #[error("Failed to serialize report: {0}")]
    ReportSerialize(#[from] serde_json::Error),

    /// Report could not be written
    #[error("Failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TournamentError {
    /// Shorthand for [`TournamentError::InvalidArgument`]
    pub fn invalid_argument(value: impl Into<String>, reason: impl Into<String>) -> Self {
        TournamentError::InvalidArgument {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for tournament operations
pub type Result<T> = std::result::Result<T, TournamentError>;
