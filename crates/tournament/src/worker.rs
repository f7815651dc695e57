//! Per-participant worker
//!
//! Worker `i` plays participant `j` for every `j > i`, in increasing order.
//! Each match is played and applied under the scoreboard lock, then the
//! worker pauses outside the lock before the next opponent.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::ops::Range;
use std::time::Duration;
use tracing::{debug, trace};

use crate::config::{Pacing, TournamentConfig};
use crate::error::Result;
use crate::match_engine::{MatchEngine, MatchResult};
use crate::scoreboard::SharedScoreBoard;

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;

/// Derive a worker's seed from the run seed.
///
/// Streams for different workers are independent but reproducible.
pub fn worker_seed(run_seed: u64, index: usize) -> u64 {
    run_seed.wrapping_add((index as u64).wrapping_add(1).wrapping_mul(0x9E3779B97F4A7C15))
}

/// Human-readable line for one applied match
pub fn narrate(first: usize, second: usize, result: MatchResult) -> String {
    match result {
        MatchResult::Draw => format!("Participant {} and participant {} drew.", first, second),
        MatchResult::WinFirst => format!("Participant {} beat participant {}.", first, second),
        MatchResult::WinSecond => format!("Participant {} lost to participant {}.", first, second),
    }
}

/// Summary returned by a finished worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerReport {
    pub index: usize,
    pub matches_played: usize,
}

/// One participant's share of the tournament
pub struct Worker<'a, E: MatchEngine + ?Sized> {
    index: usize,
    participants: usize,
    board: &'a SharedScoreBoard,
    engine: &'a E,
    rng: ChaCha8Rng,
    pacing: Pacing,
    match_duration: Duration,
    verbose: bool,
}

impl<'a, E: MatchEngine + ?Sized> Worker<'a, E> {
    pub fn new(
        index: usize,
        participants: usize,
        board: &'a SharedScoreBoard,
        engine: &'a E,
        config: &TournamentConfig,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(worker_seed(seed, index)),
            None => ChaCha8Rng::from_entropy(),
        };

        Self {
            index,
            participants,
            board,
            engine,
            rng,
            pacing: config.pace(),
            match_duration: config.match_duration(),
            verbose: config.verbose,
        }
    }

    /// Participants this worker is responsible for playing
    pub fn opponents(&self) -> Range<usize> {
        (self.index + 1)..self.participants
    }

    /// Play every scheduled match, then finish
    pub fn run(mut self) -> Result<WorkerReport> {
        let opponents = self.opponents();
        debug!(worker = self.index, matches = opponents.len(), "Worker started");

        let mut matches_played = 0;
        for opponent in opponents {
            self.play_against(opponent)?;
            matches_played += 1;
            self.pacing.pause();
        }

        debug!(worker = self.index, matches_played, "Worker finished");
        Ok(WorkerReport {
            index: self.index,
            matches_played,
        })
    }

    /// Play and apply one match while holding the lock
    fn play_against(&mut self, opponent: usize) -> Result<MatchResult> {
        let mut board = self.board.lock()?;

        if !self.match_duration.is_zero() {
            std::thread::sleep(self.match_duration);
        }
        let result = self.engine.play_match(&mut self.rng);
        board.apply(self.index, opponent, result);

        if self.verbose {
            println!("{}", narrate(self.index, opponent, result));
        }
        trace!(first = self.index, second = opponent, ?result, "Match applied");

        Ok(result)
    }
}
