use crate::error::ChessError;
use crate::game::{apply_move, GameState};
use crate::movegen::legal_moves;
use crate::types::*;

/// Coordinate notation: `e2e4`, `e7e8q`, castling as the king's move `e1g1`.
pub fn move_to_coord(mv: Move) -> String {
    mv.to_string()
}

/// Parses coordinate notation and resolves it against the legal moves, so the
/// returned move carries the right tag (castle, en passant, double push).
pub fn parse_coord_move(state: &GameState, txt: &str) -> Result<Move, ChessError> {
    let txt = txt.trim();
    if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
        return Err(ChessError::IllegalMove(txt.to_string()));
    }
    let from: Square = txt[0..2].parse()?;
    let to: Square = txt[2..4].parse()?;
    let promo = match txt[4..].chars().next() {
        None => None,
        Some(c) => match PieceKind::from_letter(c) {
            Some(kind) if PieceKind::PROMOTIONS.contains(&kind) => Some(kind),
            _ => return Err(ChessError::IllegalMove(txt.to_string())),
        },
    };

    let wanted = Move {
        from,
        to,
        promo,
        kind: MoveKind::Normal,
    };
    legal_moves(state)?
        .into_iter()
        .find(|m| m.same_squares(&wanted))
        .ok_or_else(|| ChessError::IllegalMove(txt.to_string()))
}

/// Plays a scripted line of coordinate moves, stopping at the first bad one.
pub fn play_coord_moves(state: &mut GameState, moves: &[&str]) -> Result<(), ChessError> {
    for txt in moves {
        let mv = parse_coord_move(state, txt)?;
        apply_move(state, mv)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
