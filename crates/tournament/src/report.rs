//! Tournament report rendering and export

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::coordinator::TournamentOutcome;
use crate::error::{Result, TournamentError};

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;

/// Final results of a round robin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentReport {
    /// Name of the match engine used
    pub engine: String,
    pub participants: usize,
    pub matches_played: u64,
    /// One entry per participant, in index order
    pub standings: Vec<Standing>,
    pub max_points: u32,
    pub winners: Vec<usize>,
    /// Run seed, if the tournament was seeded
    pub seed: Option<u64>,
}

/// One participant's line in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub participant: usize,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub total_points: u32,
}

impl TournamentReport {
    pub fn from_outcome(engine: &str, outcome: &TournamentOutcome) -> Self {
        let standings = outcome
            .board
            .rows()
            .iter()
            .enumerate()
            .map(|(participant, row)| Standing {
                participant,
                wins: row.wins,
                draws: row.draws,
                losses: row.losses,
                total_points: row.total_points,
            })
            .collect();

        Self {
            engine: engine.to_string(),
            participants: outcome.participants(),
            matches_played: outcome.matches_played(),
            standings,
            max_points: outcome.max_points(),
            winners: outcome.winners.clone(),
            seed: outcome.seed,
        }
    }

    /// Save report to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| TournamentError::ReportWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Round Robin: {} participants ===\n\n",
            self.participants
        ));
        report.push_str(&format!(
            "Engine: {}, matches played: {}",
            self.engine, self.matches_played
        ));
        if let Some(seed) = self.seed {
            report.push_str(&format!(", seed: {}", seed));
        }
        report.push_str("\n\n");

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<14} {:>5} {:>5} {:>5} {:>7}\n",
            "Player", "W", "D", "L", "Points"
        ));
        report.push_str(&"-".repeat(40));
        report.push('\n');

        for standing in &self.standings {
            report.push_str(&format!(
                "{:<14} {:>5} {:>5} {:>5} {:>7}\n",
                standing.participant,
                standing.wins,
                standing.draws,
                standing.losses,
                standing.total_points
            ));
        }

        let winners: Vec<String> = self.winners.iter().map(|w| w.to_string()).collect();
        report.push_str(&format!(
            "\nWinners ({} points): {}\n",
            self.max_points,
            winners.join(", ")
        ));

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
