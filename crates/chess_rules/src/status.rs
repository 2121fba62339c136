use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::ChessError;
use crate::game::{is_in_check, GameState};
use crate::movegen::legal_moves;
use crate::types::*;

/// Half-moves without a pawn move or capture after which the game is drawn.
pub const FIFTY_MOVE_LIMIT: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
    InsufficientMaterial,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::FiftyMoveRule => write!(f, "draw by fifty-move rule"),
            GameStatus::InsufficientMaterial => write!(f, "draw by insufficient material"),
        }
    }
}

/// Classifies the position. Checkmate and stalemate take precedence over the
/// draw rules.
pub fn status(state: &GameState) -> Result<GameStatus, ChessError> {
    let mover = state.side_to_move();
    if legal_moves(state)?.is_empty() {
        return Ok(if is_in_check(state, mover)? {
            GameStatus::Checkmate {
                winner: mover.other(),
            }
        } else {
            GameStatus::Stalemate
        });
    }
    if state.halfmove_clock() >= FIFTY_MOVE_LIMIT {
        return Ok(GameStatus::FiftyMoveRule);
    }
    if insufficient_material(state.board()) {
        return Ok(GameStatus::InsufficientMaterial);
    }
    Ok(GameStatus::Ongoing)
}

/// Neither side can deliver mate: bare kings, a single minor piece, or one
/// bishop each on squares of the same shade.
pub fn insufficient_material(board: &Board) -> bool {
    let mut minors = Vec::with_capacity(2);
    for (sq, pc) in board.pieces() {
        match pc.kind {
            PieceKind::King => {}
            PieceKind::Knight | PieceKind::Bishop => minors.push((sq, pc)),
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
        }
    }
    match minors.as_slice() {
        [] | [_] => true,
        [(sa, a), (sb, b)] => {
            a.kind == PieceKind::Bishop
                && b.kind == PieceKind::Bishop
                && a.color != b.color
                && sa.is_dark() == sb.is_dark()
        }
        _ => false,
    }
}
