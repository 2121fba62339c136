use crate::{error::ChessError, game::GameState, movegen::legal_moves};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
pub fn perft(state: &GameState, depth: u8) -> Result<u64, ChessError> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = legal_moves(state)?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut next = state.clone();
        next.commit(mv);
        nodes += perft(&next, depth - 1)?;
    }
    Ok(nodes)
}
