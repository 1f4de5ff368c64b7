use super::*;
use checkers_core::{legal_moves, Piece, Position};

fn pos(row: i8, col: i8) -> Position {
    Position::new(row, col)
}

/// One black man with a jump, another with only a simple move.
fn capture_available() -> Board {
    Board::empty()
        .with_piece(pos(2, 1), Piece::man(Side::Black))
        .unwrap()
        .with_piece(pos(3, 2), Piece::man(Side::Red))
        .unwrap()
        .with_piece(pos(0, 7), Piece::man(Side::Black))
        .unwrap()
}

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::with_seed(1);
    let board = Board::initial();

    for side in [Side::Red, Side::Black] {
        let step = engine.choose_move(&board, side).unwrap();
        assert!(legal_moves(&board, step.from).unwrap().contains(&step.to));
        assert_eq!(board.get(step.from).unwrap().unwrap().side, side);
    }
}

#[test]
fn random_engine_prefers_captures_side_wide() {
    let board = capture_available();
    // The man on (0,7) has a simple move, but the side has a jump, so the
    // policy never picks it.
    for seed in 0..50 {
        let mut engine = RandomEngine::with_seed(seed);
        let step = engine.choose_move(&board, Side::Black).unwrap();
        assert_eq!(step, Step::new(pos(2, 1), pos(4, 3)));
    }
}

#[test]
fn candidate_moves_without_captures_is_everything() {
    let board = Board::initial();
    assert_eq!(
        candidate_moves(&board, Side::Red),
        checkers_core::side_moves(&board, Side::Red)
    );
}

#[test]
fn random_engine_handles_no_moves() {
    // A black man already on row 7 that was never crowned cannot go anywhere.
    let board = Board::empty()
        .with_piece(pos(7, 0), Piece::man(Side::Black))
        .unwrap()
        .with_piece(pos(5, 2), Piece::man(Side::Red))
        .unwrap();
    let mut engine = RandomEngine::with_seed(3);
    assert_eq!(engine.choose_move(&board, Side::Black), None);
}

#[test]
fn random_engine_handles_no_pieces() {
    let mut engine = RandomEngine::with_seed(3);
    assert_eq!(engine.choose_move(&Board::empty(), Side::Red), None);
}

#[test]
fn seeded_engines_agree() {
    let board = Board::initial();
    let mut a = RandomEngine::with_seed(99);
    let mut b = RandomEngine::with_seed(99);
    for _ in 0..10 {
        assert_eq!(
            a.choose_move(&board, Side::Red),
            b.choose_move(&board, Side::Red)
        );
    }
}

#[test]
fn new_game_rewinds_seeded_engine() {
    let board = Board::initial();
    let mut engine = RandomEngine::with_seed(5);
    let first: Vec<_> = (0..5).map(|_| engine.choose_move(&board, Side::Black)).collect();
    engine.new_game();
    let again: Vec<_> = (0..5).map(|_| engine.choose_move(&board, Side::Black)).collect();
    assert_eq!(first, again);
}
