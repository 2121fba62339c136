//! Forsyth-Edwards Notation for interchange with storage, network and
//! training layers.

use crate::board::Board;
use crate::castling::{CastleSide, CastlingRights};
use crate::error::ChessError;
use crate::game::GameState;
use crate::types::*;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn invalid(msg: impl Into<String>) -> ChessError {
    ChessError::InvalidFen(msg.into())
}

impl GameState {
    /// Parses a FEN record. The two move counters are optional and default
    /// to `0` and `1`.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&parts.len()) {
            return Err(invalid(format!(
                "expected 4 to 6 fields, found {}",
                parts.len()
            )));
        }

        let board = parse_placement(parts[0])?;
        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(invalid(format!("bad side to move '{other}'"))),
        };
        let castling = parse_castling(parts[2])?;
        let en_passant = parse_en_passant(parts[3], side_to_move)?;
        let halfmove = parse_counter(parts.get(4).copied(), 0, "half-move clock")?;
        let fullmove = parse_counter(parts.get(5).copied(), 1, "full-move number")?;

        Ok(GameState::from_parts(board, side_to_move, castling, en_passant)?
            .with_counters(halfmove, fullmove))
    }

    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for row in (0..8u8).rev() {
            let mut empty = 0;
            for col in 0..8u8 {
                match self.board().get(Square::at(row, col)) {
                    Some(pc) => {
                        if empty > 0 {
                            placement.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placement.push(pc.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
            if row > 0 {
                placement.push('/');
            }
        }

        let side = match self.side_to_move() {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let ep = self
            .en_passant()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());
        format!(
            "{placement} {side} {} {ep} {} {}",
            self.castling(),
            self.halfmove_clock(),
            self.fullmove_number()
        )
    }
}

fn parse_placement(text: &str) -> Result<Board, ChessError> {
    let ranks: Vec<&str> = text.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid(format!("expected 8 ranks, found {}", ranks.len())));
    }

    let mut board = Board::empty();
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        // FEN lists rank 8 first.
        let row = 7 - rank_idx as u8;
        let mut col: u8 = 0;
        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10) {
                if !(1..=8).contains(&d) {
                    return Err(invalid(format!("bad empty-run digit '{ch}'")));
                }
                col += d as u8;
            } else {
                let pc = Piece::from_fen_char(ch)
                    .ok_or_else(|| invalid(format!("bad piece letter '{ch}'")))?;
                if col >= 8 {
                    return Err(invalid(format!("rank '{rank_str}' is too long")));
                }
                board.put(Square::at(row, col), pc);
                col += 1;
            }
            if col > 8 {
                return Err(invalid(format!("rank '{rank_str}' is too long")));
            }
        }
        if col != 8 {
            return Err(invalid(format!("rank '{rank_str}' is too short")));
        }
    }
    Ok(board)
}

fn parse_castling(text: &str) -> Result<CastlingRights, ChessError> {
    let mut rights = CastlingRights::none();
    if text == "-" {
        return Ok(rights);
    }
    for c in text.chars() {
        let (color, side) = match c {
            'K' => (Color::White, CastleSide::KingSide),
            'Q' => (Color::White, CastleSide::QueenSide),
            'k' => (Color::Black, CastleSide::KingSide),
            'q' => (Color::Black, CastleSide::QueenSide),
            _ => return Err(invalid(format!("bad castling flag '{c}'"))),
        };
        rights = rights.with(color, side);
    }
    Ok(rights)
}

/// The target must sit on the row just behind the pawn that double-pushed.
fn parse_en_passant(text: &str, side_to_move: Color) -> Result<Option<Square>, ChessError> {
    if text == "-" {
        return Ok(None);
    }
    let sq: Square = text
        .parse()
        .map_err(|_| invalid(format!("bad en-passant square '{text}'")))?;
    let expected_row = match side_to_move {
        Color::White => 5,
        Color::Black => 2,
    };
    if sq.row() != expected_row {
        return Err(invalid(format!(
            "en-passant square {sq} is not on the expected rank"
        )));
    }
    Ok(Some(sq))
}

fn parse_counter(text: Option<&str>, default: u32, what: &str) -> Result<u32, ChessError> {
    match text {
        None => Ok(default),
        Some(t) => t
            .parse()
            .map_err(|_| invalid(format!("bad {what} '{t}'"))),
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
