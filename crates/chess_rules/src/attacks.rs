//! Attack and check detection.
//!
//! Attacks are found by scanning outward from the target square, only for the
//! piece kinds the attacking side actually has on the board.

use crate::board::Board;
use crate::error::ChessError;
use crate::types::*;

pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Set of piece kinds one side has on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KindSet(u8);

impl KindSet {
    pub fn of(board: &Board, color: Color) -> Self {
        let mut set = KindSet::default();
        for (_, pc) in board.pieces() {
            if pc.color == color {
                set.0 |= 1 << pc.kind.idx();
            }
        }
        set
    }

    pub fn contains(self, kind: PieceKind) -> bool {
        self.0 & (1 << kind.idx()) != 0
    }
}

/// Whether any piece of `by` attacks `target`.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    let kinds = KindSet::of(board, by);
    let holds = |sq: Option<Square>, kind: PieceKind| {
        sq.and_then(|s| board.get(s)) == Some(Piece::new(by, kind))
    };

    if kinds.contains(PieceKind::Pawn) {
        // Attacking pawns stand one row behind the target along their advance.
        let dr = -by.forward();
        if [-1i8, 1].iter().any(|&dc| holds(target.offset(dr, dc), PieceKind::Pawn)) {
            return true;
        }
    }

    if kinds.contains(PieceKind::Knight)
        && KNIGHT_OFFSETS
            .iter()
            .any(|&(dr, dc)| holds(target.offset(dr, dc), PieceKind::Knight))
    {
        return true;
    }

    if kinds.contains(PieceKind::King)
        && KING_OFFSETS
            .iter()
            .any(|&(dr, dc)| holds(target.offset(dr, dc), PieceKind::King))
    {
        return true;
    }

    let queens = kinds.contains(PieceKind::Queen);
    if (queens || kinds.contains(PieceKind::Rook))
        && ORTHOGONAL
            .iter()
            .any(|&dir| ray_attacks(board, target, dir, by, PieceKind::Rook))
    {
        return true;
    }
    if (queens || kinds.contains(PieceKind::Bishop))
        && DIAGONAL
            .iter()
            .any(|&dir| ray_attacks(board, target, dir, by, PieceKind::Bishop))
    {
        return true;
    }

    false
}

/// Whether `color`'s king is attacked. Fails if `color` has no king.
pub fn is_king_attacked(board: &Board, color: Color) -> Result<bool, ChessError> {
    let king = board.king_square(color)?;
    Ok(is_square_attacked(board, king, color.other()))
}

/// First occupied square's piece walking from `from` along `(dr, dc)`.
fn first_piece_along(board: &Board, from: Square, (dr, dc): (i8, i8)) -> Option<Piece> {
    let mut cur = from.offset(dr, dc);
    while let Some(sq) = cur {
        if let Some(pc) = board.get(sq) {
            return Some(pc);
        }
        cur = sq.offset(dr, dc);
    }
    None
}

/// A ray hits only if its first blocker is an enemy `line` piece or queen.
fn ray_attacks(board: &Board, target: Square, dir: (i8, i8), by: Color, line: PieceKind) -> bool {
    match first_piece_along(board, target, dir) {
        Some(pc) => pc.color == by && (pc.kind == line || pc.kind == PieceKind::Queen),
        None => false,
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
