use tracing::debug;

use crate::attacks::is_king_attacked;
use crate::board::Board;
use crate::castling::{CastleSide, CastlingRights};
use crate::error::ChessError;
use crate::movegen::legal_moves;
use crate::types::*;

/// Everything needed to continue a game: the board, whose turn it is,
/// castling rights and the en-passant window, plus the move counters.
///
/// The state only changes through [`apply_move`]. `perspective` is the color
/// the game was started for; it matters to presentation only.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    perspective: Color,
}

/// Standard initial position. White moves first whichever side the game is
/// started for; `starting_color` only orients [`crate::view::render`].
pub fn new_game(starting_color: Color) -> GameState {
    GameState {
        board: Board::standard(),
        side_to_move: Color::White,
        castling: CastlingRights::all(),
        en_passant: None,
        halfmove_clock: 0,
        fullmove_number: 1,
        perspective: starting_color,
    }
}

impl GameState {
    /// Builds a state from its parts. The board must hold exactly one king of
    /// each color.
    pub fn from_parts(
        board: Board,
        side_to_move: Color,
        castling: CastlingRights,
        en_passant: Option<Square>,
    ) -> Result<Self, ChessError> {
        for color in [Color::White, Color::Black] {
            let kings = board.count(Piece::new(color, PieceKind::King));
            if kings != 1 {
                return Err(ChessError::InconsistentState(format!(
                    "expected one {color} king, found {kings}"
                )));
            }
        }
        Ok(Self {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock: 0,
            fullmove_number: 1,
            perspective: Color::White,
        })
    }

    pub fn with_counters(mut self, halfmove_clock: u32, fullmove_number: u32) -> Self {
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
        self
    }

    pub fn with_perspective(mut self, perspective: Color) -> Self {
        self.perspective = perspective;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Color drawn at the bottom by [`crate::view::render`].
    pub fn perspective(&self) -> Color {
        self.perspective
    }

    pub fn legal_moves(&self) -> Result<Vec<Move>, ChessError> {
        legal_moves(self)
    }

    pub fn apply_move(&mut self, mv: Move) -> Result<Move, ChessError> {
        apply_move(self, mv)
    }

    /// Commits a move already known to be legal.
    pub(crate) fn commit(&mut self, mv: Move) {
        let mover = self.side_to_move;
        let moved = self.board.get(mv.from);
        let captured = self.board.play(&mv);

        if moved.map(|pc| pc.kind) == Some(PieceKind::King) {
            self.castling.revoke_all(mover);
        }
        // A rook leaving or being taken on its corner ends that wing.
        for sq in [mv.from, mv.to] {
            if let Some((color, side)) = CastleSide::for_corner(sq) {
                self.castling.revoke(color, side);
            }
        }

        self.en_passant = match mv.kind {
            MoveKind::DoublePush => mv.from.offset(mover.forward(), 0),
            _ => None,
        };

        let pawn_move = moved.map(|pc| pc.kind) == Some(PieceKind::Pawn);
        self.halfmove_clock = if pawn_move || captured.is_some() {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        if mover == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = mover.other();

        debug!(
            side = %mover,
            mv = %mv,
            captured = ?captured.map(|pc| pc.kind),
            castling = %self.castling,
            "applied move"
        );
    }
}

/// Applies `mv` to `state` if it matches a legal move.
///
/// Matching compares origin, destination and promotion; the move's tag is
/// taken from the legal move list, so callers may pass a bare
/// `Move::new(from, to)`. Returns the move as actually applied. On error the
/// state is left untouched.
pub fn apply_move(state: &mut GameState, mv: Move) -> Result<Move, ChessError> {
    let legal = legal_moves(state)?;
    let Some(resolved) = legal.into_iter().find(|m| m.same_squares(&mv)) else {
        debug!(mv = %mv, side = %state.side_to_move, "rejected move outside the legal set");
        return Err(ChessError::IllegalMove(mv.to_string()));
    };
    state.commit(resolved);
    Ok(resolved)
}

pub fn is_in_check(state: &GameState, color: Color) -> Result<bool, ChessError> {
    is_king_attacked(&state.board, color)
}

/// The side to move has no legal moves and is in check.
pub fn is_checkmate(state: &GameState) -> Result<bool, ChessError> {
    Ok(legal_moves(state)?.is_empty() && is_in_check(state, state.side_to_move)?)
}

/// The side to move has no legal moves and is not in check.
pub fn is_stalemate(state: &GameState) -> Result<bool, ChessError> {
    Ok(legal_moves(state)?.is_empty() && !is_in_check(state, state.side_to_move)?)
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
