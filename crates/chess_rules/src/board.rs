use std::fmt;

use crate::error::ChessError;
use crate::types::*;

/// 8x8 grid of optional pieces, indexed `[row][col]`.
///
/// The board is `Copy`: legality checks work on value copies and never alias
/// the live game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// The standard initial arrangement, White on rows 0 and 1.
    pub fn standard() -> Self {
        let mut b = Self::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            for color in [Color::White, Color::Black] {
                b.cells[color.home_row() as usize][col] = Some(Piece::new(color, kind));
                b.cells[color.pawn_row() as usize][col] =
                    Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        b
    }

    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    pub fn set(&mut self, sq: Square, pc: Option<Piece>) {
        self.cells[sq.row() as usize][sq.col() as usize] = pc;
    }

    pub fn put(&mut self, sq: Square, pc: Piece) {
        self.set(sq, Some(pc));
    }

    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize].take()
    }

    /// Occupied squares with their pieces, in `Square::all` order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|pc| (sq, pc)))
    }

    pub fn count(&self, pc: Piece) -> usize {
        self.pieces().filter(|&(_, p)| p == pc).count()
    }

    /// Locates `color`'s king. A board without one is malformed and is
    /// reported rather than guessed around.
    pub fn king_square(&self, color: Color) -> Result<Square, ChessError> {
        let king = Piece::new(color, PieceKind::King);
        self.pieces()
            .find(|&(_, pc)| pc == king)
            .map(|(sq, _)| sq)
            .ok_or_else(|| ChessError::InconsistentState(format!("no {color} king on the board")))
    }

    /// Applies the board effect of `mv` without any legality checks and
    /// returns the captured piece, if any.
    ///
    /// Handles relocation, capture by overwrite, removal of an en-passant
    /// victim, the rook half of a castle and promotion.
    pub fn play(&mut self, mv: &Move) -> Option<Piece> {
        let moving = self.take(mv.from);
        let mut captured = self.take(mv.to);
        match mv.kind {
            MoveKind::EnPassant { captured: victim } => captured = self.take(victim),
            MoveKind::Castle { rook_from, rook_to } => {
                let rook = self.take(rook_from);
                self.set(rook_to, rook);
            }
            MoveKind::Normal | MoveKind::DoublePush => {}
        }
        let placed = match (moving, mv.promo) {
            (Some(pc), Some(kind)) => Some(Piece::new(pc.color, kind)),
            (pc, _) => pc,
        };
        self.set(mv.to, placed);
        captured
    }
}

/// Plain FEN-letter grid, rank 8 at the top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8u8).rev() {
            for col in 0..8u8 {
                let c = self
                    .get(Square::at(row, col))
                    .map_or('.', Piece::fen_char);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
