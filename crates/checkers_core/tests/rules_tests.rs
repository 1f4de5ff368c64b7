//! Rule-level properties of the engine
//!
//! - Move generation stays on the board and off occupied squares
//! - Per-piece capture precedence
//! - Piece counts only fall by one, and only on captures
//! - Crowning on the far row
//! - Terminal status tracks piece counts

use checkers_core::{
    legal_moves, side_moves, status, Board, GameStatus, Piece, Position, Side, Step,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn pos(row: i8, col: i8) -> Position {
    Position::new(row, col)
}

/// Plays random legal moves, alternating sides, and hands every
/// (before, step, after) triple to `check`.
fn random_playouts(games: u64, max_plies: usize, mut check: impl FnMut(&Board, Step, &Board)) {
    for seed in 0..games {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::initial();
        let mut side = Side::Red;
        for _ in 0..max_plies {
            if status(&board).is_terminal() {
                break;
            }
            let moves = side_moves(&board, side);
            let Some(&step) = moves.choose(&mut rng) else {
                break;
            };
            let (next, _) = board.apply_step(step).unwrap();
            check(&board, step, &next);
            board = next;
            side = side.other();
        }
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_jump_scenario() {
    let board = Board::empty()
        .with_piece(pos(2, 3), Piece::man(Side::Black))
        .unwrap()
        .with_piece(pos(3, 4), Piece::man(Side::Red))
        .unwrap();

    let moves = legal_moves(&board, pos(3, 4)).unwrap();
    assert_eq!(moves, vec![pos(1, 2)]);
    assert!(!moves.contains(&pos(2, 5)));

    let (after, mv) = board.apply_move(pos(3, 4), pos(1, 2)).unwrap();
    assert_eq!(after.get(pos(2, 3)).unwrap(), None);
    assert_eq!(after.get(pos(1, 2)).unwrap(), Some(Piece::man(Side::Red)));
    assert_eq!(mv.captured, Some(pos(2, 3)));
}

#[test]
fn test_red_wins_when_last_black_piece_is_taken() {
    // Two black men in a line that a red king can take one after another.
    let mut board = Board::empty()
        .with_piece(pos(4, 3), Piece::king(Side::Red))
        .unwrap()
        .with_piece(pos(3, 4), Piece::man(Side::Black))
        .unwrap()
        .with_piece(pos(1, 4), Piece::man(Side::Black))
        .unwrap()
        .with_piece(pos(7, 0), Piece::man(Side::Red))
        .unwrap();

    let (next, _) = board.apply_move(pos(4, 3), pos(2, 5)).unwrap();
    board = next;
    assert_eq!(status(&board), GameStatus::InProgress);

    assert_eq!(legal_moves(&board, pos(2, 5)).unwrap(), vec![pos(0, 3)]);
    let (next, _) = board.apply_move(pos(2, 5), pos(0, 3)).unwrap();
    board = next;

    // Decided by material alone, regardless of whose turn it would be.
    assert_eq!(board.piece_count(Side::Black), 0);
    assert_eq!(status(&board), GameStatus::RedWins);
}

// =============================================================================
// Properties over random games
// =============================================================================

#[test]
fn test_destinations_on_board_and_empty() {
    random_playouts(40, 200, |before, _, _| {
        for side in [Side::Red, Side::Black] {
            for from in before.pieces(side) {
                for to in legal_moves(before, from).unwrap() {
                    assert!(to.in_bounds(), "{to:?} off the board");
                    assert!(to.is_playable());
                    assert_eq!(before.get(to).unwrap(), None, "{to:?} is occupied");
                }
            }
        }
    });
}

#[test]
fn test_captures_never_mixed_with_simple_moves() {
    random_playouts(40, 200, |before, _, _| {
        for side in [Side::Red, Side::Black] {
            for from in before.pieces(side) {
                let moves = legal_moves(before, from).unwrap();
                let jumps = moves
                    .iter()
                    .filter(|&&to| Step::new(from, to).is_jump())
                    .count();
                assert!(jumps == 0 || jumps == moves.len());
            }
        }
    });
}

#[test]
fn test_piece_counts_change_only_by_capture() {
    random_playouts(40, 200, |before, step, after| {
        let mover = before.get(step.from).unwrap().unwrap().side;
        let opponent = mover.other();
        assert_eq!(after.piece_count(mover), before.piece_count(mover));
        let expected = before.piece_count(opponent) - usize::from(step.is_jump());
        assert_eq!(after.piece_count(opponent), expected);
    });
}

#[test]
fn test_crowning_only_on_far_row() {
    random_playouts(40, 200, |before, step, after| {
        let moved = before.get(step.from).unwrap().unwrap();
        let landed = after.get(step.to).unwrap().unwrap();
        if moved.king {
            assert!(landed.king);
        } else if step.to.row == moved.side.promotion_row() {
            assert!(landed.king, "man reaching {:?} was not crowned", step.to);
        } else {
            assert!(!landed.king, "man crowned away from the far row");
        }
    });
}

#[test]
fn test_status_follows_piece_counts() {
    random_playouts(40, 300, |_, _, after| {
        let red = after.piece_count(Side::Red);
        let black = after.piece_count(Side::Black);
        let expected = match (red, black) {
            (0, _) => GameStatus::BlackWins,
            (_, 0) => GameStatus::RedWins,
            _ => GameStatus::InProgress,
        };
        assert_eq!(status(after), expected);
        assert!(red <= 12 && black <= 12);
    });
}
