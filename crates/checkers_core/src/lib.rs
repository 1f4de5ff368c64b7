//! Checkers rules engine.
//!
//! Board representation, per-piece move generation with capture precedence,
//! move application (single jumps, crowning) and terminal state detection.
//! Everything here is a pure function of its inputs; boards are values.

pub mod board;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod replay;
pub mod status;
pub mod types;

pub use board::*;
pub use error::RulesError;
pub use movegen::*;
pub use notation::*;
pub use replay::{capture_indices, replay};
pub use status::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every move-selection policy
// =============================================================================

/// A policy that picks a move for one side.
pub trait Engine: Send {
    /// Choose a move for `side` on `board`.
    ///
    /// Returns `None` when `side` has no legal move at all.
    fn choose_move(&mut self, board: &Board, side: Side) -> Option<Step>;

    fn name(&self) -> &str;

    /// Reset any per-game state.
    fn new_game(&mut self) {}
}
