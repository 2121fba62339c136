//! Presentation transform between the engine's fixed orientation and a screen
//! grid, plus a Unicode text renderer.
//!
//! Screen row 0 is the top of the display. The perspective's own pieces are
//! drawn at the bottom. Nothing in the rules engine calls into this module.

use crate::board::Board;
use crate::error::ChessError;
use crate::game::GameState;
use crate::types::*;

/// Screen `(row, col)` of an engine square.
pub fn to_view(sq: Square, perspective: Color) -> (u8, u8) {
    match perspective {
        Color::White => (7 - sq.row(), sq.col()),
        Color::Black => (sq.row(), 7 - sq.col()),
    }
}

/// Engine square under a screen cell; rejects cells outside the 8x8 grid.
pub fn from_view(screen_row: u8, screen_col: u8, perspective: Color) -> Result<Square, ChessError> {
    if screen_row >= 8 || screen_col >= 8 {
        return Err(ChessError::InvalidSquare(format!(
            "screen cell ({screen_row}, {screen_col})"
        )));
    }
    Ok(view_square(screen_row, screen_col, perspective))
}

fn view_square(screen_row: u8, screen_col: u8, perspective: Color) -> Square {
    match perspective {
        Color::White => Square::at(7 - screen_row, screen_col),
        Color::Black => Square::at(screen_row, 7 - screen_col),
    }
}

/// Renders the game from the perspective it was started for.
pub fn render(state: &GameState) -> String {
    render_board(state.board(), state.perspective())
}

pub fn render_board(board: &Board, perspective: Color) -> String {
    let mut out = String::new();
    for screen_row in 0..8u8 {
        let rank = view_square(screen_row, 0, perspective).row() + 1;
        out.push_str(&format!("{rank} "));
        for screen_col in 0..8u8 {
            let sq = view_square(screen_row, screen_col, perspective);
            if screen_col > 0 {
                out.push(' ');
            }
            out.push(board.get(sq).map_or('.', Piece::figure));
        }
        out.push('\n');
    }
    out.push_str("  ");
    for screen_col in 0..8u8 {
        if screen_col > 0 {
            out.push(' ');
        }
        out.push((b'a' + view_square(0, screen_col, perspective).col()) as char);
    }
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod view_tests;
