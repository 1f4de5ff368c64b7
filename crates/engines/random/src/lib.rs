//! Random Move Checkers Engine
//!
//! Picks uniformly among a side's moves, restricted to jumps whenever any
//! piece of that side can jump. The same policy drives both the automated
//! opponent and the local fallback for coach suggestions, so the two can
//! never disagree about capture priority.

use checkers_core::{side_moves, Board, Engine, Side, Step};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[cfg(test)]
mod lib_tests;

/// Candidate moves for `side` after side-wide capture filtering: all jumps if
/// there are any, otherwise every simple move.
pub fn candidate_moves(board: &Board, side: Side) -> Vec<Step> {
    let all = side_moves(board, side);
    let jumps: Vec<Step> = all.iter().copied().filter(Step::is_jump).collect();
    if jumps.is_empty() {
        all
    } else {
        jumps
    }
}

/// Picks a move for `side`, or `None` if it has no legal move.
pub fn pick_move<R: Rng + ?Sized>(board: &Board, side: Side, rng: &mut R) -> Option<Step> {
    candidate_moves(board, side).choose(rng).copied()
}

/// An engine that plays the capture-first random policy.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    seed: Option<u64>,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Deterministic engine, for reproducible games and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }
}

impl Engine for RandomEngine {
    fn choose_move(&mut self, board: &Board, side: Side) -> Option<Step> {
        pick_move(board, side, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        if let Some(seed) = self.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }
}
