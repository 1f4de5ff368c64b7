use super::*;

fn pos(row: i8, col: i8) -> Position {
    Position::new(row, col)
}

#[test]
fn test_initial_layout() {
    let b = Board::initial();
    assert_eq!(b.piece_count(Side::Red), 12);
    assert_eq!(b.piece_count(Side::Black), 12);

    for row in 0..8 {
        for col in 0..8 {
            let p = pos(row, col);
            let cell = b.get(p).unwrap();
            if !p.is_playable() || (3..=4).contains(&row) {
                assert_eq!(cell, None, "{p:?} should be empty");
            } else if row <= 2 {
                assert_eq!(cell, Some(Piece::man(Side::Black)));
            } else {
                assert_eq!(cell, Some(Piece::man(Side::Red)));
            }
        }
    }
}

#[test]
fn test_get_out_of_bounds() {
    let b = Board::initial();
    assert_eq!(
        b.get(pos(8, 0)),
        Err(RulesError::OutOfBounds { row: 8, col: 0 })
    );
    assert_eq!(
        b.get(pos(0, -1)),
        Err(RulesError::OutOfBounds { row: 0, col: -1 })
    );
}

#[test]
fn test_apply_leaves_input_untouched() {
    let b = Board::initial();
    let before = b;
    let (after, mv) = b.apply_move(pos(5, 2), pos(4, 3)).unwrap();

    assert_eq!(b, before);
    assert_ne!(after, before);
    assert_eq!(after.get(pos(5, 2)).unwrap(), None);
    assert_eq!(after.get(pos(4, 3)).unwrap(), Some(Piece::man(Side::Red)));
    assert!(!mv.is_capture);
    assert_eq!(mv.captured, None);
    assert_eq!(mv.mover, Side::Red);
}

#[test]
fn test_apply_jump_removes_midpoint() {
    let b = Board::empty()
        .with_piece(pos(3, 4), Piece::man(Side::Red))
        .unwrap()
        .with_piece(pos(2, 3), Piece::man(Side::Black))
        .unwrap();

    let (after, mv) = b.apply_move(pos(3, 4), pos(1, 2)).unwrap();
    assert_eq!(after.get(pos(2, 3)).unwrap(), None);
    assert_eq!(after.get(pos(1, 2)).unwrap(), Some(Piece::man(Side::Red)));
    assert_eq!(after.piece_count(Side::Black), 0);
    assert!(mv.is_capture);
    assert_eq!(mv.captured, Some(pos(2, 3)));
}

#[test]
fn test_promotion_on_far_row() {
    let red = Board::empty()
        .with_piece(pos(1, 2), Piece::man(Side::Red))
        .unwrap();
    let (after, mv) = red.apply_move(pos(1, 2), pos(0, 1)).unwrap();
    assert_eq!(after.get(pos(0, 1)).unwrap(), Some(Piece::king(Side::Red)));
    assert!(mv.promoted);

    let black = Board::empty()
        .with_piece(pos(6, 1), Piece::man(Side::Black))
        .unwrap();
    let (after, _) = black.apply_move(pos(6, 1), pos(7, 2)).unwrap();
    assert_eq!(after.get(pos(7, 2)).unwrap(), Some(Piece::king(Side::Black)));
}

#[test]
fn test_no_promotion_short_of_far_row() {
    let b = Board::empty()
        .with_piece(pos(2, 1), Piece::man(Side::Red))
        .unwrap();
    let (after, mv) = b.apply_move(pos(2, 1), pos(1, 2)).unwrap();
    assert_eq!(after.get(pos(1, 2)).unwrap(), Some(Piece::man(Side::Red)));
    assert!(!mv.promoted);
}

#[test]
fn test_king_moving_backwards_stays_king_without_promotion_flag() {
    let b = Board::empty()
        .with_piece(pos(1, 2), Piece::king(Side::Red))
        .unwrap();
    let (after, mv) = b.apply_move(pos(1, 2), pos(0, 1)).unwrap();
    assert_eq!(after.get(pos(0, 1)).unwrap(), Some(Piece::king(Side::Red)));
    assert!(!mv.promoted);
}

#[test]
fn test_apply_from_empty_square() {
    let b = Board::initial();
    assert_eq!(
        b.apply_move(pos(4, 1), pos(3, 2)),
        Err(RulesError::EmptySquare(pos(4, 1)))
    );
}

#[test]
fn test_with_piece_rejects_light_square() {
    assert!(Board::empty().with_piece(pos(0, 0), Piece::man(Side::Red)).is_err());
}

#[test]
fn test_encode_initial() {
    assert_eq!(
        Board::initial().encode(),
        "ebebebeb|bebebebe|ebebebeb|eeeeeeee|eeeeeeee|rererere|erererer|rererere"
    );
}

#[test]
fn test_decode_initial() {
    let b = Board::decode(&Board::initial().encode()).unwrap();
    assert_eq!(b, Board::initial());
}

#[test]
fn test_decode_kings() {
    let b = Board::decode("eReeeeee|eeeeeeee|eeeeeeee|eeeeeeee|eeeeeeee|eeeeeeee|eeeeeeee|eeeeeBee")
        .unwrap();
    assert_eq!(b.get(pos(0, 1)).unwrap(), Some(Piece::king(Side::Red)));
    assert_eq!(b.get(pos(7, 5)).unwrap(), Some(Piece::king(Side::Black)));
}

#[test]
fn test_decode_rejects_malformed() {
    // seven rows
    assert!(Board::decode("eeeeeeee|eeeeeeee|eeeeeeee|eeeeeeee|eeeeeeee|eeeeeeee|eeeeeeee").is_err());
    // short row
    assert!(Board::decode("eeeeeee|eeeeeeee|eeeeeeee|eeeeeeee|eeeeeeee|eeeeeeee|eeeeeeee|eeeeeeee").is_err());
    // unknown code
    assert!(Board::decode("eeeeeeex|eeeeeeee|eeeeeeee|eeeeeeee|eeeeeeee|eeeeeeee|eeeeeeee|eeeeeeee").is_err());
    // piece on a light square
    assert!(Board::decode("reeeeeee|eeeeeeee|eeeeeeee|eeeeeeee|eeeeeeee|eeeeeeee|eeeeeeee|eeeeeeee").is_err());
}

#[test]
fn test_decode_rejects_too_many_pieces() {
    let mut rows: Vec<String> = Board::initial().encode().split('|').map(String::from).collect();
    // 13th red man on an empty dark square of row 4
    rows[4] = "ereeeeee".to_string();
    assert!(Board::decode(&rows.join("|")).is_err());
}

#[test]
fn test_pieces_row_major() {
    let pieces = Board::initial().pieces(Side::Black);
    assert_eq!(pieces.len(), 12);
    assert_eq!(pieces[0], pos(0, 1));
    assert_eq!(pieces[11], pos(2, 7));
}

#[test]
fn test_display_labels() {
    let txt = Board::initial().to_string();
    let lines: Vec<&str> = txt.lines().collect();
    assert_eq!(lines.len(), 9);
    assert!(lines[0].starts_with("8 "));
    assert!(lines[8].contains("a b c d e f g h"));
}
