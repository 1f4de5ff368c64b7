use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RulesError;

pub const BOARD_SIZE: i8 = 8;

/// Most pieces a side can ever have on the board.
pub const MAX_PIECES: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Red,
    Black,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Row delta a man of this side moves along. Red starts on rows 5..=7 and
    /// heads for row 0, black starts on rows 0..=2 and heads for row 7.
    pub fn forward(self) -> i8 {
        match self {
            Side::Red => -1,
            Side::Black => 1,
        }
    }

    /// Row on which a man of this side is crowned.
    pub fn promotion_row(self) -> i8 {
        match self {
            Side::Red => 0,
            Side::Black => BOARD_SIZE - 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Red => "red",
            Side::Black => "black",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub side: Side,
    pub king: bool,
}

impl Piece {
    pub fn man(side: Side) -> Self {
        Self { side, king: false }
    }

    pub fn king(side: Side) -> Self {
        Self { side, king: true }
    }

    pub fn crowned(self) -> Self {
        Self { king: true, ..self }
    }

    /// Diagonal directions this piece may travel in, as (row, col) deltas.
    pub fn directions(self) -> &'static [(i8, i8)] {
        const RED: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
        const BLACK: [(i8, i8); 2] = [(1, -1), (1, 1)];
        const ALL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
        match (self.king, self.side) {
            (true, _) => &ALL,
            (false, Side::Red) => &RED,
            (false, Side::Black) => &BLACK,
        }
    }

    /// Single-character code used by the board encoding.
    pub fn code(self) -> char {
        match (self.side, self.king) {
            (Side::Red, false) => 'r',
            (Side::Red, true) => 'R',
            (Side::Black, false) => 'b',
            (Side::Black, true) => 'B',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'r' => Some(Piece::man(Side::Red)),
            'R' => Some(Piece::king(Side::Red)),
            'b' => Some(Piece::man(Side::Black)),
            'B' => Some(Piece::king(Side::Black)),
            _ => None,
        }
    }
}

/// Contents of one square.
pub type Cell = Option<Piece>;

/// A (row, col) coordinate. Values outside 0..8 are representable so that
/// coordinates arriving from outside the engine can be rejected with
/// [`RulesError::OutOfBounds`] instead of being clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Dark squares, the only ones pieces ever stand on.
    pub fn is_playable(self) -> bool {
        self.in_bounds() && (self.row + self.col) % 2 == 1
    }

    /// The square `dr` rows and `dc` columns away, if it is on the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Position> {
        let p = Position::new(self.row.checked_add(dr)?, self.col.checked_add(dc)?);
        p.in_bounds().then_some(p)
    }

    pub fn check(self) -> Result<Position, RulesError> {
        if self.in_bounds() {
            Ok(self)
        } else {
            Err(RulesError::OutOfBounds {
                row: self.row,
                col: self.col,
            })
        }
    }

    pub(crate) fn index(self) -> usize {
        (self.row as usize) * (BOARD_SIZE as usize) + self.col as usize
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_bounds() {
            f.write_str(&crate::notation::square_name(*self))
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// A requested transition, before it has been committed to a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    pub from: Position,
    pub to: Position,
}

impl Step {
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    pub fn is_jump(&self) -> bool {
        (i16::from(self.to.row) - i16::from(self.from.row)).abs() == 2
    }

    /// Square jumped over, for two-square moves.
    pub fn midpoint(&self) -> Option<Position> {
        let mid = |a: i8, b: i8| ((i16::from(a) + i16::from(b)) / 2) as i8;
        self.is_jump().then(|| {
            Position::new(
                mid(self.from.row, self.to.row),
                mid(self.from.col, self.to.col),
            )
        })
    }
}

/// A committed move, as recorded in a game's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub is_capture: bool,
    pub captured: Option<Position>,
    pub mover: Side,
    #[serde(default)]
    pub promoted: bool,
}

impl Move {
    pub fn step(&self) -> Step {
        Step::new(self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}
