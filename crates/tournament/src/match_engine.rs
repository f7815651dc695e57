//! Match engine: rock/scissors/paper between two participants
//!
//! A match is independent of who plays it. Each side throws a uniformly
//! random [`Hand`] and [`resolve`] decides the [`MatchResult`].

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "match_engine_tests.rs"]
mod match_engine_tests;

/// The choice a participant throws in a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Rock = 0,
    Scissors = 1,
    Paper = 2,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Scissors, Hand::Paper];

    /// Draw a hand uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Rock beats scissors, scissors beat paper, paper beats rock
    pub fn beats(self, other: Hand) -> bool {
        matches!(
            (self, other),
            (Hand::Rock, Hand::Scissors) | (Hand::Scissors, Hand::Paper) | (Hand::Paper, Hand::Rock)
        )
    }
}

/// Result of a single match, from the first participant's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    Draw,
    WinFirst,
    WinSecond,
}

/// Resolve two thrown hands into a match result
pub fn resolve(first: Hand, second: Hand) -> MatchResult {
    if first == second {
        MatchResult::Draw
    } else if first.beats(second) {
        MatchResult::WinFirst
    } else {
        MatchResult::WinSecond
    }
}

/// Anything that can decide a match.
///
/// Engines are shared by every worker thread, so they hold no mutable state;
/// randomness comes from the calling worker's own generator.
pub trait MatchEngine: Send + Sync {
    /// Play one match and report the outcome for the first participant
    fn play_match(&self, rng: &mut dyn RngCore) -> MatchResult;

    /// Get the engine name
    fn name(&self) -> &str;
}

/// Both sides throw a random hand
#[derive(Debug, Clone, Copy, Default)]
pub struct RockPaperScissors;

impl RockPaperScissors {
    pub fn new() -> Self {
        Self
    }
}

impl MatchEngine for RockPaperScissors {
    fn play_match(&self, rng: &mut dyn RngCore) -> MatchResult {
        let first = Hand::random(rng);
        let second = Hand::random(rng);
        resolve(first, second)
    }

    fn name(&self) -> &str {
        "rock-scissors-paper"
    }
}

/// Engine that always reports the same result, for scripted runs
#[derive(Debug, Clone, Copy)]
pub struct FixedOutcome(pub MatchResult);

impl MatchEngine for FixedOutcome {
    fn play_match(&self, _rng: &mut dyn RngCore) -> MatchResult {
        self.0
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
