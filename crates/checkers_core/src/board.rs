use std::fmt;

use crate::error::RulesError;
use crate::types::*;

/// An 8x8 checkers board.
///
/// `Board` is a small `Copy` value: every transformation returns a new board
/// and leaves the receiver untouched, so a board handed to one computation can
/// never be observed half-updated by another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self { cells: [None; 64] }
    }

    /// Standard starting layout: black men on the dark squares of rows 0..=2,
    /// red men on the dark squares of rows 5..=7.
    pub fn initial() -> Self {
        let mut b = Self::empty();
        for row in 0..BOARD_SIZE {
            let side = match row {
                0..=2 => Side::Black,
                5..=7 => Side::Red,
                _ => continue,
            };
            for col in 0..BOARD_SIZE {
                let pos = Position::new(row, col);
                if pos.is_playable() {
                    b.set(pos, Some(Piece::man(side)));
                }
            }
        }
        b
    }

    pub fn get(&self, pos: Position) -> Result<Cell, RulesError> {
        Ok(self.cells[pos.check()?.index()])
    }

    /// Returns a copy of this board with `pos` occupied by `piece`.
    pub fn with_piece(&self, pos: Position, piece: Piece) -> Result<Board, RulesError> {
        let pos = pos.check()?;
        if !pos.is_playable() {
            return Err(RulesError::InvalidEncoding(format!(
                "{pos} is not a playable square"
            )));
        }
        let mut b = *self;
        b.set(pos, Some(piece));
        Ok(b)
    }

    /// Callers must have bounds-checked `pos`.
    pub(crate) fn at(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    pub fn piece_count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|pc| pc.side == side)
            .count()
    }

    /// Squares holding pieces of `side`, in row-major order.
    pub fn pieces(&self, side: Side) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_some_and(|pc| pc.side == side))
            .map(|(i, _)| Position::new((i / 8) as i8, (i % 8) as i8))
            .collect()
    }

    /// Moves the piece on `from` to `to`, removing the jumped piece for
    /// two-square moves and crowning men that reach their far row.
    ///
    /// Legality is not re-checked here: `to` is expected to come from
    /// [`legal_moves`](crate::legal_moves). Only one jump is made per call.
    pub fn apply_move(&self, from: Position, to: Position) -> Result<(Board, Move), RulesError> {
        let from = from.check()?;
        let to = to.check()?;
        let piece = self.at(from).ok_or(RulesError::EmptySquare(from))?;
        let step = Step::new(from, to);

        let mut next = *self;
        next.set(from, None);

        let captured = step.midpoint();
        if let Some(mid) = captured {
            next.set(mid, None);
        }

        let promoted = !piece.king && to.row == piece.side.promotion_row();
        let placed = if promoted { piece.crowned() } else { piece };
        next.set(to, Some(placed));

        let mv = Move {
            from,
            to,
            is_capture: captured.is_some(),
            captured,
            mover: piece.side,
            promoted,
        };
        Ok((next, mv))
    }

    pub fn apply_step(&self, step: Step) -> Result<(Board, Move), RulesError> {
        self.apply_move(step.from, step.to)
    }

    /// Encodes the board as 8 rows of 8 characters joined by `|`, using
    /// `e` for empty squares and `r`/`R`/`b`/`B` for men and kings.
    pub fn encode(&self) -> String {
        self.cells
            .chunks(BOARD_SIZE as usize)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('e', Piece::code))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("|")
    }

    pub fn decode(encoded: &str) -> Result<Board, RulesError> {
        let rows: Vec<&str> = encoded.trim().split('|').collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(RulesError::InvalidEncoding(format!(
                "expected 8 rows, found {}",
                rows.len()
            )));
        }

        let mut board = Board::empty();
        for (r, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != BOARD_SIZE as usize {
                return Err(RulesError::InvalidEncoding(format!(
                    "row {r} has {} squares",
                    chars.len()
                )));
            }
            for (c, ch) in chars.into_iter().enumerate() {
                let pos = Position::new(r as i8, c as i8);
                if ch == 'e' {
                    continue;
                }
                let piece = Piece::from_code(ch).ok_or_else(|| {
                    RulesError::InvalidEncoding(format!("unknown square code '{ch}'"))
                })?;
                if !pos.is_playable() {
                    return Err(RulesError::InvalidEncoding(format!(
                        "piece on light square {pos}"
                    )));
                }
                board.set(pos, Some(piece));
            }
        }

        for side in [Side::Red, Side::Black] {
            if board.piece_count(side) > MAX_PIECES {
                return Err(RulesError::InvalidEncoding(format!(
                    "{side} has more than {MAX_PIECES} pieces"
                )));
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            write!(f, "{} ", BOARD_SIZE - row)?;
            for col in 0..BOARD_SIZE {
                let pos = Position::new(row, col);
                let ch = match self.at(pos) {
                    Some(pc) => pc.code(),
                    None if pos.is_playable() => '.',
                    None => ' ',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", (b'a' + col as u8) as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
