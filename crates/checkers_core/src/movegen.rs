use crate::{board::Board, error::RulesError, types::*};

/// Legal destinations for the piece on `from`.
///
/// Capture precedence is applied per piece: when the piece has at least one
/// jump, only its jumps are returned. Whether some *other* piece of the same
/// side could capture is not considered here. An empty square yields no moves.
pub fn legal_moves(board: &Board, from: Position) -> Result<Vec<Position>, RulesError> {
    let piece = match board.get(from)? {
        Some(p) => p,
        None => return Ok(Vec::new()),
    };

    let jumps = gen_jumps(board, from, piece);
    if !jumps.is_empty() {
        return Ok(jumps);
    }
    Ok(gen_steps(board, from, piece))
}

/// Every legal (from, to) pair for `side`, piece by piece in row-major order.
pub fn side_moves(board: &Board, side: Side) -> Vec<Step> {
    let mut out = Vec::with_capacity(16);
    for from in board.pieces(side) {
        let Some(piece) = board.at(from) else {
            continue;
        };
        let mut dests = gen_jumps(board, from, piece);
        if dests.is_empty() {
            dests = gen_steps(board, from, piece);
        }
        out.extend(dests.into_iter().map(|to| Step::new(from, to)));
    }
    out
}

/// Whether `to` is a legal destination for the piece on `from`.
pub fn is_legal(board: &Board, from: Position, to: Position) -> Result<bool, RulesError> {
    Ok(legal_moves(board, from)?.contains(&to))
}

fn gen_jumps(board: &Board, from: Position, piece: Piece) -> Vec<Position> {
    let mut out = Vec::new();
    for &(dr, dc) in piece.directions() {
        let (Some(over), Some(land)) = (from.offset(dr, dc), from.offset(2 * dr, 2 * dc)) else {
            continue;
        };
        let opposing = board.at(over).is_some_and(|pc| pc.side != piece.side);
        if opposing && board.at(land).is_none() {
            out.push(land);
        }
    }
    out
}

fn gen_steps(board: &Board, from: Position, piece: Piece) -> Vec<Position> {
    piece
        .directions()
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&to| board.at(to).is_none())
        .collect()
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
