use tracing::trace;

use crate::attacks::{is_king_attacked, DIAGONAL, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL};
use crate::board::Board;
use crate::castling::castling_moves;
use crate::error::ChessError;
use crate::game::GameState;
use crate::types::*;

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(state: &GameState) -> Result<Vec<Move>, ChessError> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(state, &mut out)?;
    Ok(out)
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// Every pseudo-legal move is played on a copy of the board and kept only if
/// the mover's king is safe afterwards; castling moves are appended last.
pub fn legal_moves_into(state: &GameState, out: &mut Vec<Move>) -> Result<(), ChessError> {
    out.clear();
    let mover = state.side_to_move();
    let board = *state.board();
    // Fails with InconsistentState when the mover has no king.
    board.king_square(mover)?;

    for mv in pseudo_legal_moves(state) {
        if !leaves_king_attacked(&board, &mv, mover)? {
            out.push(mv);
        }
    }
    castling_moves(state, out)?;

    trace!(side = %mover, count = out.len(), "generated legal moves");
    Ok(())
}

/// Whether playing `mv` on a copy of `board` exposes `mover`'s king.
pub fn leaves_king_attacked(board: &Board, mv: &Move, mover: Color) -> Result<bool, ChessError> {
    let mut scratch = *board;
    scratch.play(mv);
    is_king_attacked(&scratch, mover)
}

/// Every move of the side to move that is geometrically valid, ignoring king
/// safety. Castling is not included.
pub fn pseudo_legal_moves(state: &GameState) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for (from, pc) in state.board().pieces() {
        if pc.color == state.side_to_move() {
            piece_moves(state, from, &mut out);
        }
    }
    out
}

/// Pseudo-legal moves of the piece on `from`. Nothing is produced for an
/// empty square or a piece that is not the side to move's.
pub fn piece_moves(state: &GameState, from: Square, out: &mut Vec<Move>) {
    let board = state.board();
    let pc = match board.get(from) {
        Some(p) if p.color == state.side_to_move() => p,
        _ => return,
    };
    let c = pc.color;
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, state.en_passant(), from, c, out),
        PieceKind::Knight => gen_leaper(board, from, c, &KNIGHT_OFFSETS, out),
        PieceKind::Bishop => gen_slider(board, from, c, &DIAGONAL, out),
        PieceKind::Rook => gen_slider(board, from, c, &ORTHOGONAL, out),
        PieceKind::Queen => {
            gen_slider(board, from, c, &ORTHOGONAL, out);
            gen_slider(board, from, c, &DIAGONAL, out);
        }
        PieceKind::King => gen_leaper(board, from, c, &KING_OFFSETS, out),
    }
}

fn gen_pawn(board: &Board, ep: Option<Square>, from: Square, c: Color, out: &mut Vec<Move>) {
    let dir = c.forward();

    // forward 1
    if let Some(to) = from.offset(dir, 0) {
        if board.get(to).is_none() {
            push_pawn_move(out, from, to, c);

            // forward 2 from start
            if from.row() == c.pawn_row() {
                if let Some(to2) = from.offset(2 * dir, 0) {
                    if board.get(to2).is_none() {
                        out.push(Move {
                            from,
                            to: to2,
                            promo: None,
                            kind: MoveKind::DoublePush,
                        });
                    }
                }
            }
        }
    }

    // captures + en-passant
    for dc in [-1, 1] {
        let Some(to) = from.offset(dir, dc) else {
            continue;
        };
        match board.get(to) {
            Some(target) if target.color != c => push_pawn_move(out, from, to, c),
            Some(_) => {}
            None if ep == Some(to) => {
                // The victim stands beside the capturing pawn, on its row.
                let captured = Square::at(from.row(), to.col());
                if board.get(captured) == Some(Piece::new(c.other(), PieceKind::Pawn)) {
                    out.push(Move {
                        from,
                        to,
                        promo: None,
                        kind: MoveKind::EnPassant { captured },
                    });
                }
            }
            None => {}
        }
    }
}

/// Pushes a pawn move, expanded into one move per promotion kind when it
/// lands on the far rank.
fn push_pawn_move(out: &mut Vec<Move>, from: Square, to: Square, c: Color) {
    if to.row() == c.promotion_row() {
        for pk in PieceKind::PROMOTIONS {
            out.push(Move::new(from, to).with_promo(pk));
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_leaper(board: &Board, from: Square, c: Color, offsets: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            match board.get(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match board.get(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
