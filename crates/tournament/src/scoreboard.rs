//! Shared scoreboard
//!
//! One [`ScoreRow`] per participant, all guarded by a single lock in
//! [`SharedScoreBoard`]. A match updates two rows under one guard, so no
//! reader ever sees only half of it.

use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};

use crate::error::{Result, TournamentError};
use crate::match_engine::MatchResult;

#[cfg(test)]
#[path = "scoreboard_tests.rs"]
mod scoreboard_tests;

/// Cumulative results for one participant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub total_points: u32,
}

impl ScoreRow {
    pub fn games_played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    /// `total_points == 2 * wins + draws`
    pub fn is_consistent(&self) -> bool {
        self.total_points == 2 * self.wins + self.draws
    }

    fn record_win(&mut self) {
        self.wins += 1;
        self.total_points += 2;
    }

    fn record_draw(&mut self) {
        self.draws += 1;
        self.total_points += 1;
    }

    fn record_loss(&mut self) {
        self.losses += 1;
    }
}

/// Fixed-size table of results, indexed by participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    rows: Vec<ScoreRow>,
    matches_played: u64,
}

impl ScoreBoard {
    /// Allocate a zeroed board for `participants` rows.
    ///
    /// Allocation is fallible so that an oversized tournament is reported
    /// instead of aborting the process.
    pub fn new(participants: usize) -> Result<Self> {
        let mut rows = Vec::new();
        rows.try_reserve_exact(participants)
            .map_err(|e| TournamentError::ResourceAcquisition {
                participants,
                reason: e.to_string(),
            })?;
        rows.resize(participants, ScoreRow::default());

        Ok(Self {
            rows,
            matches_played: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[ScoreRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&ScoreRow> {
        self.rows.get(index)
    }

    /// Number of matches applied so far
    pub fn matches_played(&self) -> u64 {
        self.matches_played
    }

    /// Apply one match between `first` and `second`.
    ///
    /// Both indices must be in range and distinct.
    pub fn apply(&mut self, first: usize, second: usize, result: MatchResult) {
        assert!(first != second, "participant {first} cannot play itself");
        assert!(
            first < self.rows.len() && second < self.rows.len(),
            "match {first} vs {second} out of range for {} participants",
            self.rows.len()
        );

        match result {
            MatchResult::Draw => {
                self.rows[first].record_draw();
                self.rows[second].record_draw();
            }
            MatchResult::WinFirst => {
                self.rows[first].record_win();
                self.rows[second].record_loss();
            }
            MatchResult::WinSecond => {
                self.rows[first].record_loss();
                self.rows[second].record_win();
            }
        }
        self.matches_played += 1;
    }

    /// Highest total across all rows, `None` for an empty board
    pub fn max_points(&self) -> Option<u32> {
        self.rows.iter().map(|row| row.total_points).max()
    }

    /// Every participant whose total equals the maximum, in index order
    pub fn winners(&self) -> Vec<usize> {
        let Some(max) = self.max_points() else {
            return Vec::new();
        };
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.total_points == max)
            .map(|(index, _)| index)
            .collect()
    }
}

/// Scoreboard behind its single tournament-wide lock
#[derive(Debug)]
pub struct SharedScoreBoard {
    inner: Mutex<ScoreBoard>,
}

impl SharedScoreBoard {
    pub fn new(board: ScoreBoard) -> Self {
        Self {
            inner: Mutex::new(board),
        }
    }

    /// Block until the lock is free. There is no timeout.
    pub fn lock(&self) -> Result<MutexGuard<'_, ScoreBoard>> {
        self.inner.lock().map_err(|_| TournamentError::ScoreBoardPoisoned)
    }

    /// Copy of the current board, taken under the lock
    pub fn snapshot(&self) -> Result<ScoreBoard> {
        Ok(self.lock()?.clone())
    }

    /// Release the lock for good and hand back the final board
    pub fn into_inner(self) -> Result<ScoreBoard> {
        self.inner.into_inner().map_err(|_| TournamentError::ScoreBoardPoisoned)
    }
}
