//! Turn controller for a human-vs-automated checkers game

use checkers_core::{
    is_legal, legal_moves, side_moves, status, Board, Engine, GameStatus, Move, Position, Side,
    Step,
};
use random_engine::candidate_moves;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::SessionError;

/// The human plays red and moves first.
pub const HUMAN_SIDE: Side = Side::Red;

/// The automated policy plays black.
pub const AUTOMATED_SIDE: Side = Side::Black;

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndReason {
    /// The loser has no pieces left.
    AllPiecesCaptured,
    /// The automated side could not move. Only checked for the automated
    /// side; a human with no legal moves is not declared lost.
    NoMovesAvailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Side,
    pub reason: EndReason,
}

impl Outcome {
    pub fn status(&self) -> GameStatus {
        GameStatus::won_by(self.winner)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    RedToMove,
    BlackToMove,
    GameOver(Outcome),
}

impl TurnState {
    fn to_move(side: Side) -> Self {
        match side {
            Side::Red => TurnState::RedToMove,
            Side::Black => TurnState::BlackToMove,
        }
    }
}

/// Result of selecting a piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Moves {
        from: Position,
        destinations: Vec<Position>,
    },
    /// The piece is stuck; the player should pick another one.
    NoMoves { from: Position },
}

/// A game in progress.
///
/// Sessions are values: commands take `&self` and hand back a new session,
/// leaving the original untouched. A rejected command returns an error and
/// there is nothing to roll back.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    board: Board,
    history: Vec<Move>,
    turn: TurnState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            history: Vec::new(),
            turn: TurnState::RedToMove,
        }
    }

    /// Start from an arbitrary position with `to_move` on turn.
    pub fn from_board(board: Board, to_move: Side) -> Self {
        let turn = match status(&board).winner() {
            Some(winner) => TurnState::GameOver(Outcome {
                winner,
                reason: EndReason::AllPiecesCaptured,
            }),
            None => TurnState::to_move(to_move),
        };
        Self {
            board,
            history: Vec::new(),
            turn,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    pub fn side_to_move(&self) -> Option<Side> {
        match self.turn {
            TurnState::RedToMove => Some(Side::Red),
            TurnState::BlackToMove => Some(Side::Black),
            TurnState::GameOver(_) => None,
        }
    }

    /// Material-only status of the current board.
    pub fn status(&self) -> GameStatus {
        status(&self.board)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.turn {
            TurnState::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Lists where the human's piece on `pos` may go.
    pub fn select_piece(&self, pos: Position) -> Result<Selection, SessionError> {
        self.expect_turn(HUMAN_SIDE)?;
        self.expect_owner(HUMAN_SIDE, pos)?;

        let destinations = legal_moves(&self.board, pos)?;
        debug!(square = %pos, moves = destinations.len(), "piece selected");
        if destinations.is_empty() {
            Ok(Selection::NoMoves { from: pos })
        } else {
            Ok(Selection::Moves {
                from: pos,
                destinations,
            })
        }
    }

    /// Plays a human move.
    pub fn play(&self, from: Position, to: Position) -> Result<Session, SessionError> {
        self.expect_turn(HUMAN_SIDE)?;
        self.commit(HUMAN_SIDE, from, to)
    }

    /// Plays the automated side's choice. `None` means it found no move,
    /// which ends the game in the human's favour.
    ///
    /// The automated side must jump whenever any of its pieces can, so a
    /// simple move is rejected while a capture exists elsewhere.
    pub fn play_automated(&self, step: Option<Step>) -> Result<Session, SessionError> {
        self.expect_turn(AUTOMATED_SIDE)?;
        match step {
            Some(step) => {
                self.expect_owner(AUTOMATED_SIDE, step.from)?;
                if !candidate_moves(&self.board, AUTOMATED_SIDE).contains(&step) {
                    return Err(SessionError::IllegalMove {
                        from: step.from,
                        to: step.to,
                    });
                }
                self.commit(AUTOMATED_SIDE, step.from, step.to)
            }
            None => {
                if !side_moves(&self.board, AUTOMATED_SIDE).is_empty() {
                    return Err(SessionError::MovesAvailable);
                }
                let outcome = Outcome {
                    winner: HUMAN_SIDE,
                    reason: EndReason::NoMovesAvailable,
                };
                info!(winner = %outcome.winner, "automated side has no moves");
                Ok(Session {
                    board: self.board,
                    history: self.history.clone(),
                    turn: TurnState::GameOver(outcome),
                })
            }
        }
    }

    /// Lets `engine` pick and play the automated side's move.
    pub fn automated_turn(&self, engine: &mut dyn Engine) -> Result<Session, SessionError> {
        self.expect_turn(AUTOMATED_SIDE)?;
        let step = engine.choose_move(&self.board, AUTOMATED_SIDE);
        debug!(engine = engine.name(), ?step, "automated move chosen");
        self.play_automated(step)
    }

    fn expect_turn(&self, side: Side) -> Result<(), SessionError> {
        match self.side_to_move() {
            None => Err(SessionError::GameOver),
            Some(s) if s == side => Ok(()),
            Some(_) => Err(SessionError::NotYourTurn),
        }
    }

    fn expect_owner(&self, side: Side, pos: Position) -> Result<(), SessionError> {
        match self.board.get(pos)? {
            Some(pc) if pc.side == side => Ok(()),
            _ => Err(SessionError::NotYourPiece(pos)),
        }
    }

    fn commit(&self, side: Side, from: Position, to: Position) -> Result<Session, SessionError> {
        self.expect_owner(side, from)?;
        if !is_legal(&self.board, from, to)? {
            return Err(SessionError::IllegalMove { from, to });
        }

        let (board, mv) = self.board.apply_move(from, to)?;
        let mut history = self.history.clone();
        history.push(mv);

        info!(%side, mv = %mv, "move played");
        let turn = match status(&board).winner() {
            Some(winner) => {
                info!(%winner, plies = history.len(), "game over");
                TurnState::GameOver(Outcome {
                    winner,
                    reason: EndReason::AllPiecesCaptured,
                })
            }
            None => TurnState::to_move(side.other()),
        };

        Ok(Session {
            board,
            history,
            turn,
        })
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
