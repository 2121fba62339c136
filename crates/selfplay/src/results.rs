//! Self-play results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::SelfPlayConfig;
use crate::error::SelfPlayError;
use crate::match_runner::{GameOutcome, GameRecord, GameResult};

/// Win/loss/draw totals from engine 1's perspective
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Tally {
    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score as a fraction (draws count half)
    pub fn score(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.5;
        }
        (self.wins as f64 + self.draws as f64 * 0.5) / total as f64
    }

    fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }
}

/// Complete self-play results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlayResults {
    pub engine1: String,
    pub engine2: String,
    pub config: SelfPlayConfig,
    pub tally: Tally,
    pub games: Vec<GameRecord>,
}

impl SelfPlayResults {
    pub fn new(engine1: &str, engine2: &str, config: SelfPlayConfig) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            config,
            tally: Tally::default(),
            games: Vec::new(),
        }
    }

    /// Add a finished game and update the tally
    pub fn add_game(&mut self, record: GameRecord) {
        self.tally.record(record.engine1_result());
        self.games.push(record);
    }

    /// Number of games that ended with the given outcome
    pub fn count(&self, outcome: GameOutcome) -> usize {
        self.games.iter().filter(|g| g.outcome == outcome).count()
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), SelfPlayError> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, SelfPlayError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Self-play: {} vs {} ===\n\n",
            self.engine1, self.engine2
        ));
        report.push_str(&format!(
            "Config: {} games, {} ply cap, seed {}\n\n",
            self.config.games,
            self.config.max_plies,
            self.config
                .seed
                .map_or_else(|| "none".to_string(), |s| s.to_string())
        ));

        report.push_str(&format!(
            "{:>4} {:<6} {:<5} {:>6}  {}\n",
            "#", "E1", "Res", "Plies", "Outcome"
        ));
        report.push_str(&"-".repeat(50));
        report.push('\n');

        for game in &self.games {
            report.push_str(&format!(
                "{:>4} {:<6} {:<5} {:>6}  {:?}\n",
                game.number,
                if game.engine1_white { "white" } else { "black" },
                game.outcome.score_str(),
                game.plies,
                game.outcome
            ));
        }

        report.push('\n');
        report.push_str(&format!(
            "{}: {} wins, {} losses, {} draws (score {:.1}%)\n",
            self.engine1,
            self.tally.wins,
            self.tally.losses,
            self.tally.draws,
            self.tally.score() * 100.0
        ));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
