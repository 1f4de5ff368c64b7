//! Rebuilding positions from a recorded move list, for reviewing finished
//! games move by move.

use crate::{
    board::Board,
    error::RulesError,
    movegen::is_legal,
    types::{Move, Side},
};

/// Replays `moves` from the starting layout.
///
/// Returns one board per ply plus the starting board, so `frames[i]` is the
/// position before move `i` and the last frame is the final position. Each
/// move is checked against the rules, against turn order (red first, then
/// alternating) and against its own recorded flags.
pub fn replay(moves: &[Move]) -> Result<Vec<Board>, RulesError> {
    let mut frames = Vec::with_capacity(moves.len() + 1);
    let mut board = Board::initial();
    let mut to_move = Side::Red;
    frames.push(board);

    for recorded in moves {
        let illegal = || RulesError::IllegalMove {
            from: recorded.from,
            to: recorded.to,
        };
        let mover = board
            .get(recorded.from)?
            .ok_or(RulesError::EmptySquare(recorded.from))?;
        if recorded.mover != to_move
            || mover.side != to_move
            || !is_legal(&board, recorded.from, recorded.to)?
        {
            return Err(illegal());
        }
        let (next, applied) = board.apply_move(recorded.from, recorded.to)?;
        if applied.is_capture != recorded.is_capture
            || applied.captured != recorded.captured
            || applied.promoted != recorded.promoted
        {
            return Err(illegal());
        }
        board = next;
        to_move = to_move.other();
        frames.push(board);
    }
    Ok(frames)
}

/// Indices of the jumps in `moves`.
pub fn capture_indices(moves: &[Move]) -> Vec<usize> {
    moves
        .iter()
        .enumerate()
        .filter(|(_, m)| m.is_capture)
        .map(|(i, _)| i)
        .collect()
}
