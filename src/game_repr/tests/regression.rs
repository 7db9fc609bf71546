// Regression tests for previously found bugs

use super::*;

// ==================== PAWN EDGE SQUARE BUG TEST ====================

#[test]
fn test_pawn_edge_square_capture_bug() {
    // a pawn on the a-file must not wrap around to capture on the h-file
    let mut pos = empty_board();
    place_piece(&mut pos, 16, black(Type::Pawn)); // a3
    place_piece(&mut pos, 7, white(Type::Rook)); // h1
    place_piece(&mut pos, 4, white(Type::King));
    place_piece(&mut pos, 60, black(Type::King));

    let moves = pos.piece_legal_moves(16);
    assert_eq!(moves.len(), 1, "Black pawn at a3 should only have 1 move (a2)");
    assert!(has_move(&moves, 16, 8));
    assert!(!has_move(&moves, 16, 7));
}

#[test]
fn test_pawn_edge_square_right_edge() {
    let mut pos = empty_board();
    place_piece(&mut pos, 23, white(Type::Pawn)); // h3
    place_piece(&mut pos, 32, black(Type::Rook)); // a5
    place_piece(&mut pos, 24, black(Type::Knight)); // a4
    place_piece(&mut pos, 4, white(Type::King));
    place_piece(&mut pos, 60, black(Type::King));

    let moves = pos.piece_legal_moves(23);
    assert_eq!(moves.len(), 1, "White pawn at h3 should only push to h4");
    assert!(has_move(&moves, 23, 31));
}

#[test]
fn test_knight_does_not_wrap_around_board() {
    let pos = fen("4k3/8/8/8/8/8/8/4K2N w - - 0 1");
    let moves = pos.piece_legal_moves(7);
    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, 7, 13)); // f2
    assert!(has_move(&moves, 7, 22)); // g3
}

#[test]
fn test_en_passant_square_cleared_by_unmake() {
    let mut pos = Position::default();
    let mv = Move::new(sq("e2"), sq("e4"), MoveType::Normal);
    let undo = pos.make_move_undoable(mv).unwrap();
    assert_eq!(pos.en_passant, Some(sq("e3")));

    pos.unmake_move(mv, undo);
    assert_eq!(pos.en_passant, None);
    assert_eq!(pos.side_to_move, Color::White);
}

#[test]
fn test_make_move_on_empty_square_is_noop() {
    let mut pos = Position::default();
    let mv = Move::new(sq("e4"), sq("e5"), MoveType::Normal);
    assert!(pos.make_move_undoable(mv).is_none());
    assert!(!pos.play(mv));
    assert_eq!(pos.to_fen(), START_FEN);
}
