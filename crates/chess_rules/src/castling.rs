//! Castling rights and castling move generation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attacks::is_king_attacked;
use crate::board::Board;
use crate::error::ChessError;
use crate::game::GameState;
use crate::types::*;

const KING_HOME_COL: u8 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    fn idx(self) -> usize {
        match self {
            CastleSide::KingSide => 0,
            CastleSide::QueenSide => 1,
        }
    }

    fn rook_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    fn king_to_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    fn rook_to_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// The color and wing whose rook starts on `sq`, if `sq` is a corner.
    pub fn for_corner(sq: Square) -> Option<(Color, CastleSide)> {
        let color = match sq.row() {
            0 => Color::White,
            7 => Color::Black,
            _ => return None,
        };
        match sq.col() {
            0 => Some((color, CastleSide::QueenSide)),
            7 => Some((color, CastleSide::KingSide)),
            _ => None,
        }
    }
}

/// Per-color, per-wing castling eligibility.
///
/// Rights can be revoked but never granted back once a game is running; the
/// only way to set one is when a position is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastlingRights {
    rights: [[bool; 2]; 2],
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            rights: [[true; 2]; 2],
        }
    }

    pub fn none() -> Self {
        Self {
            rights: [[false; 2]; 2],
        }
    }

    pub fn has(&self, color: Color, side: CastleSide) -> bool {
        self.rights[color.idx()][side.idx()]
    }

    pub fn any(&self, color: Color) -> bool {
        self.rights[color.idx()].iter().any(|&r| r)
    }

    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        self.rights[color.idx()][side.idx()] = false;
    }

    pub fn revoke_all(&mut self, color: Color) {
        self.rights[color.idx()] = [false; 2];
    }

    /// Returns these rights with one more wing enabled. Used when building
    /// positions, never while playing.
    pub fn with(mut self, color: Color, side: CastleSide) -> Self {
        self.rights[color.idx()][side.idx()] = true;
        self
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

/// FEN castling field: any of `KQkq`, or `-`.
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ];
        let mut wrote = false;
        for (color, side, c) in flags {
            if self.has(color, side) {
                write!(f, "{c}")?;
                wrote = true;
            }
        }
        if !wrote {
            write!(f, "-")?;
        }
        Ok(())
    }
}

/// Appends the legal castling moves for the side to move (zero, one or two).
///
/// Each wing needs its right, the king and rook on their home squares, an
/// empty path between them, and a king that is not attacked on its current
/// square, the square it crosses, or its destination.
pub fn castling_moves(state: &GameState, out: &mut Vec<Move>) -> Result<(), ChessError> {
    let color = state.side_to_move();
    let rights = state.castling();
    if !rights.any(color) {
        return Ok(());
    }

    let board = state.board();
    let row = color.home_row();
    let king_from = Square::at(row, KING_HOME_COL);
    if board.get(king_from) != Some(Piece::new(color, PieceKind::King)) {
        return Ok(());
    }

    for side in CastleSide::BOTH {
        if !rights.has(color, side) {
            continue;
        }
        let rook_from = Square::at(row, side.rook_col());
        if board.get(rook_from) != Some(Piece::new(color, PieceKind::Rook)) {
            continue;
        }

        let lo = KING_HOME_COL.min(side.rook_col()) + 1;
        let hi = KING_HOME_COL.max(side.rook_col());
        if (lo..hi).any(|col| board.get(Square::at(row, col)).is_some()) {
            continue;
        }

        let king_to = Square::at(row, side.king_to_col());
        if !king_path_safe(board, king_from, king_to, color)? {
            continue;
        }

        out.push(Move {
            from: king_from,
            to: king_to,
            promo: None,
            kind: MoveKind::Castle {
                rook_from,
                rook_to: Square::at(row, side.rook_to_col()),
            },
        });
    }
    Ok(())
}

/// Simulates the king on every square from `from` to `to` inclusive.
fn king_path_safe(board: &Board, from: Square, to: Square, color: Color) -> Result<bool, ChessError> {
    let step: i8 = if to.col() > from.col() { 1 } else { -1 };
    let mut cur = Some(from);
    while let Some(sq) = cur {
        let mut scratch = *board;
        let king = scratch.take(from);
        scratch.set(sq, king);
        if is_king_attacked(&scratch, color)? {
            return Ok(false);
        }
        if sq == to {
            break;
        }
        cur = sq.offset(0, step);
    }
    Ok(true)
}

#[cfg(test)]
#[path = "castling_tests.rs"]
mod castling_tests;
