//! Terminal state detection.
//!
//! Status is always derived from a board on demand and never stored, so it
//! cannot drift out of sync with the position it describes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::Board;
use crate::types::Side;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    InProgress,
    RedWins,
    BlackWins,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::RedWins => Some(Side::Red),
            GameStatus::BlackWins => Some(Side::Black),
        }
    }

    pub fn won_by(side: Side) -> Self {
        match side {
            Side::Red => GameStatus::RedWins,
            Side::Black => GameStatus::BlackWins,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameStatus::InProgress => "in-progress",
            GameStatus::RedWins => "red-wins",
            GameStatus::BlackWins => "black-wins",
        })
    }
}

/// A side with no pieces left has lost. Running out of legal moves is not
/// considered here.
pub fn status(board: &Board) -> GameStatus {
    if board.piece_count(Side::Red) == 0 {
        GameStatus::BlackWins
    } else if board.piece_count(Side::Black) == 0 {
        GameStatus::RedWins
    } else {
        GameStatus::InProgress
    }
}
