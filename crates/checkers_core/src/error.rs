use thiserror::Error;

use crate::types::Position;

/// Errors raised by the rules engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// A coordinate outside the 8x8 board was used.
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: i8, col: i8 },

    /// A move was requested from a square with no piece on it.
    #[error("no piece on {0}")]
    EmptySquare(Position),

    /// The destination is not among the legal moves of the piece.
    #[error("illegal move {from} -> {to}")]
    IllegalMove { from: Position, to: Position },

    /// A board string could not be decoded.
    #[error("invalid board encoding: {0}")]
    InvalidEncoding(String),

    /// A square or move in text form could not be parsed.
    #[error("invalid notation: {0}")]
    InvalidNotation(String),
}
