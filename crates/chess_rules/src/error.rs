use thiserror::Error;

/// Errors surfaced by the rules engine. None of them are retried internally:
/// each one points at bad input from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A row/column outside `0..8` or a malformed square name.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// The move is not a member of the current legal move set.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// The board violates an engine invariant, e.g. a side has no king.
    #[error("inconsistent state: {0}")]
    InconsistentState(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}
