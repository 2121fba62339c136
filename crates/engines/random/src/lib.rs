//! Random Move Engine
//!
//! Selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Driving self-play games through the rules engine
//! - Baseline comparisons (any real mover should easily beat this)
//! - Stress testing move generation and application

use chess_rules::{legal_moves, ChessError, Engine, GameState, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::trace;


/// An engine that plays random legal moves.
///
/// Built with [`RandomEngine::seeded`] it replays the same sequence of
/// choices, which makes whole games reproducible.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    seed: Option<u64>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn choose_move(&mut self, state: &GameState) -> Result<Option<Move>, ChessError> {
        let moves = legal_moves(state)?;
        let choice = moves.choose(&mut self.rng).copied();
        trace!(candidates = moves.len(), choice = ?choice.map(|m| m.to_string()), "random pick");
        Ok(choice)
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
