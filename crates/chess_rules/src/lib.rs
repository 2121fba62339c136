//! Chess rules engine.
//!
//! A deterministic move-legality oracle and board-mutation core: feed it a
//! [`GameState`], ask for [`legal_moves`], commit one with [`apply_move`].
//! Rendering, learning and networking layers sit outside and call in.

pub mod attacks;
pub mod board;
pub mod castling;
pub mod error;
pub mod fen;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod status;
pub mod types;
pub mod view;

pub use attacks::{is_king_attacked, is_square_attacked};
pub use board::Board;
pub use castling::{castling_moves, CastleSide, CastlingRights};
pub use error::ChessError;
pub use fen::START_FEN;
pub use game::{apply_move, is_checkmate, is_in_check, is_stalemate, new_game, GameState};
pub use movegen::{legal_moves, legal_moves_into, piece_moves, pseudo_legal_moves};
pub use notation::{move_to_coord, parse_coord_move, play_coord_moves};
pub use perft::perft;
pub use status::{insufficient_material, status, GameStatus};
pub use types::*;
pub use view::{from_view, render, render_board, to_view};

// =============================================================================
// Engine trait: implemented by anything that picks moves (random, search, UI)
// =============================================================================

/// Trait for move pickers that drive a game through the rules engine.
pub trait Engine: Send {
    /// Pick a move for the side to move, or `None` when there is no legal move.
    fn choose_move(&mut self, state: &GameState) -> Result<Option<Move>, ChessError>;

    /// Returns the engine's name for reports.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
