//! Match runner for playing games between engines

use chess_rules::{move_to_coord, new_game, status, Color, Engine, GameStatus};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::SelfPlayConfig;
use crate::error::SelfPlayError;
use crate::results::SelfPlayResults;

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
    InsufficientMaterial,
    /// Abandoned at the configured ply cap
    PlyLimit,
}

impl GameOutcome {
    fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Ongoing => None,
            GameStatus::Checkmate { winner } => Some(Self::Checkmate { winner }),
            GameStatus::Stalemate => Some(Self::Stalemate),
            GameStatus::FiftyMoveRule => Some(Self::FiftyMoveRule),
            GameStatus::InsufficientMaterial => Some(Self::InsufficientMaterial),
        }
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            Self::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }

    /// PGN-style result string
    pub fn score_str(self) -> &'static str {
        match self.winner() {
            Some(Color::White) => "1-0",
            Some(Color::Black) => "0-1",
            None => "1/2",
        }
    }
}

/// One played game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// 1-based game number within the run
    pub number: u32,
    /// Whether engine 1 had the white pieces
    pub engine1_white: bool,
    pub outcome: GameOutcome,
    pub plies: u32,
    /// Moves in coordinate notation
    pub moves: Vec<String>,
    pub final_fen: String,
}

impl GameRecord {
    /// Result from engine 1's point of view
    pub fn engine1_result(&self) -> GameResult {
        match self.outcome.winner() {
            None => GameResult::Draw,
            Some(Color::White) if self.engine1_white => GameResult::Win,
            Some(Color::Black) if !self.engine1_white => GameResult::Win,
            Some(_) => GameResult::Loss,
        }
    }
}

/// Result of a single game for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// Runs self-play matches between two engines
pub struct MatchRunner {
    config: SelfPlayConfig,
}

impl MatchRunner {
    pub fn new(config: SelfPlayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }

    /// Run every configured game between two engines
    ///
    /// Tallies are kept from engine1's perspective
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> Result<SelfPlayResults, SelfPlayError> {
        let mut results = SelfPlayResults::new(engine1.name(), engine2.name(), self.config.clone());

        for game_idx in 0..self.config.games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_idx % 2 == 0;

            let mut record = if engine1_white {
                self.play_game(engine1, engine2)?
            } else {
                self.play_game(engine2, engine1)?
            };
            record.number = game_idx + 1;
            record.engine1_white = engine1_white;

            info!(
                game = record.number,
                of = self.config.games,
                result = record.outcome.score_str(),
                outcome = ?record.outcome,
                plies = record.plies,
                engine1 = if engine1_white { "white" } else { "black" },
                "game finished"
            );
            results.add_game(record);
        }

        Ok(results)
    }

    /// Play a single game from the standard start position
    pub fn play_game(
        &self,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
    ) -> Result<GameRecord, SelfPlayError> {
        let mut state = new_game(self.config.perspective);
        let mut moves = Vec::new();
        white.new_game();
        black.new_game();

        let outcome = loop {
            if let Some(outcome) = GameOutcome::from_status(status(&state)?) {
                break outcome;
            }
            if moves.len() as u32 >= self.config.max_plies {
                warn!(plies = moves.len(), fen = %state.to_fen(), "ply cap reached, abandoning game");
                break GameOutcome::PlyLimit;
            }

            let engine: &mut dyn Engine = match state.side_to_move() {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            let Some(mv) = engine.choose_move(&state)? else {
                return Err(SelfPlayError::NoMove {
                    engine: engine.name().to_string(),
                });
            };
            let played = state.apply_move(mv)?;
            debug!(ply = moves.len() + 1, mv = %played, "ply");
            moves.push(move_to_coord(played));
        };

        Ok(GameRecord {
            number: 1,
            engine1_white: true,
            outcome,
            plies: moves.len() as u32,
            moves,
            final_fen: state.to_fen(),
        })
    }
}
