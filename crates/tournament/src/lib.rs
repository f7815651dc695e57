//! Concurrent round-robin tournament
//!
//! This crate provides:
//! - A shared [`ScoreBoard`] guarded by one tournament-wide lock
//! - Rock/scissors/paper match resolution behind the [`MatchEngine`] trait
//! - One worker thread per participant, each playing every higher index
//! - A coordinator that joins all workers and derives the winners
//!
//! # Usage
//!
//! ```bash
//! # Five participants with the classic pacing
//! cargo run -p round_robin -- 5
//!
//! # Eight participants, no delays, reproducible results
//! cargo run -p round_robin -- 8 --fast --seed 42
//! ```

pub mod cli;
mod config;
mod coordinator;
mod error;
mod match_engine;
mod report;
mod scoreboard;
mod worker;

pub use config::*;
pub use coordinator::*;
pub use error::*;
pub use match_engine::*;
pub use report::*;
pub use scoreboard::*;
pub use worker::*;
