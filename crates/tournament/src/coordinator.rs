//! Tournament coordinator
//!
//! Allocates the scoreboard, spawns one worker thread per participant, waits
//! for all of them and derives the winners from the final board.

use std::fmt;
use std::thread;
use tracing::{error, info};

use crate::config::TournamentConfig;
use crate::error::{Result, TournamentError};
use crate::match_engine::{MatchEngine, RockPaperScissors};
use crate::scoreboard::{ScoreBoard, SharedScoreBoard};
use crate::worker::{Worker, WorkerReport};

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod coordinator_tests;

/// Lifecycle of a tournament run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TournamentState {
    Initialized,
    Running,
    Completed,
}

impl fmt::Display for TournamentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TournamentState::Initialized => "initialized",
            TournamentState::Running => "running",
            TournamentState::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// Number of matches in a full round robin of `participants`
pub fn expected_matches(participants: usize) -> u64 {
    let n = participants as u64;
    n * n.saturating_sub(1) / 2
}

/// Final state of a completed tournament
#[derive(Debug, Clone)]
pub struct TournamentOutcome {
    pub board: ScoreBoard,
    /// Participants sharing the highest total, in index order
    pub winners: Vec<usize>,
    pub seed: Option<u64>,
}

impl TournamentOutcome {
    pub fn participants(&self) -> usize {
        self.board.len()
    }

    pub fn max_points(&self) -> u32 {
        self.board.max_points().unwrap_or(0)
    }

    pub fn matches_played(&self) -> u64 {
        self.board.matches_played()
    }
}

/// A round robin among `participants` players
pub struct Tournament<'e, E: MatchEngine + ?Sized> {
    participants: usize,
    config: TournamentConfig,
    engine: &'e E,
    state: TournamentState,
}

impl<'e, E: MatchEngine + ?Sized> Tournament<'e, E> {
    /// `participants` must already be validated as at least 1
    pub fn new(participants: usize, config: TournamentConfig, engine: &'e E) -> Self {
        Self {
            participants,
            config,
            engine,
            state: TournamentState::Initialized,
        }
    }

    pub fn state(&self) -> TournamentState {
        self.state
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Run every match and block until all workers have joined.
    ///
    /// The scoreboard is allocated before any thread starts, so allocation
    /// failures never leave workers behind. A spawn failure aborts the run;
    /// workers that were already started are still joined before returning.
    pub fn run(mut self) -> Result<TournamentOutcome> {
        let board = SharedScoreBoard::new(ScoreBoard::new(self.participants)?);

        self.transition(TournamentState::Running);
        let reports = self.spawn_and_join(&board)?;

        let board = board.into_inner()?;
        debug_assert_eq!(
            reports.iter().map(|r| r.matches_played as u64).sum::<u64>(),
            board.matches_played()
        );

        let winners = board.winners();
        self.transition(TournamentState::Completed);
        info!(
            participants = self.participants,
            matches = board.matches_played(),
            max_points = board.max_points().unwrap_or(0),
            winners = ?winners,
            "Tournament finished"
        );

        Ok(TournamentOutcome {
            board,
            winners,
            seed: self.config.seed,
        })
    }

    fn spawn_and_join(&self, board: &SharedScoreBoard) -> Result<Vec<WorkerReport>> {
        let participants = self.participants;
        let stagger = self.config.spawn_stagger();

        let (spawn_error, joined) = thread::scope(|scope| {
            let mut handles = Vec::with_capacity(participants);
            let mut spawn_error = None;

            for index in 0..participants {
                if index > 0 && !stagger.is_zero() {
                    thread::sleep(stagger);
                }

                let worker = Worker::new(index, participants, board, self.engine, &self.config);
                match thread::Builder::new()
                    .name(format!("worker-{}", index))
                    .spawn_scoped(scope, move || worker.run())
                {
                    Ok(handle) => handles.push((index, handle)),
                    Err(source) => {
                        error!(worker = index, "Failed to spawn worker: {}", source);
                        spawn_error = Some(TournamentError::WorkerSpawn { index, source });
                        break;
                    }
                }
            }

            // Every handle is joined here so that no panic is left for the scope to re-raise
            let joined: Vec<(usize, thread::Result<Result<WorkerReport>>)> = handles
                .into_iter()
                .map(|(index, handle)| (index, handle.join()))
                .collect();
            (spawn_error, joined)
        });

        if let Some(err) = spawn_error {
            return Err(err);
        }

        // A panic is the root cause of any poisoned lock, so it is reported first
        if let Some((index, _)) = joined.iter().find(|(_, result)| result.is_err()) {
            error!(worker = *index, "Worker panicked");
            return Err(TournamentError::WorkerPanicked { index: *index });
        }

        joined
            .into_iter()
            .map(|(index, result)| match result {
                Ok(report) => report,
                Err(_) => Err(TournamentError::WorkerPanicked { index }),
            })
            .collect()
    }

    fn transition(&mut self, next: TournamentState) {
        info!(from = %self.state, to = %next, participants = self.participants, "Tournament state");
        self.state = next;
    }
}

/// Run a rock/scissors/paper round robin
pub fn run_tournament(participants: usize, config: &TournamentConfig) -> Result<TournamentOutcome> {
    run_tournament_with(participants, config, &RockPaperScissors::new())
}

/// Run a round robin using a custom match engine
pub fn run_tournament_with<E: MatchEngine + ?Sized>(
    participants: usize,
    config: &TournamentConfig,
    engine: &E,
) -> Result<TournamentOutcome> {
    info!(participants, engine = engine.name(), "Starting tournament");
    Tournament::new(participants, config.clone(), engine).run()
}
