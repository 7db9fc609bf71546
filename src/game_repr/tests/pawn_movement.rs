use super::*;

// ==================== PAWN MOVEMENT TESTS ====================

#[test]
fn test_pawn_single_and_double_push() {
    let pos = Position::default();
    let moves = pos.piece_legal_moves(12); // e2

    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, 12, 20));
    assert!(has_move(&moves, 12, 28));
}

#[test]
fn test_pawn_double_push_blocked() {
    let mut pos = empty_board();
    place_piece(&mut pos, 12, white(Type::Pawn)); // e2
    place_piece(&mut pos, 28, black(Type::Knight)); // e4
    place_piece(&mut pos, 4, white(Type::King));
    place_piece(&mut pos, 60, black(Type::King));

    let moves = pos.piece_legal_moves(12);
    assert_eq!(moves.len(), 1);
    assert!(has_move(&moves, 12, 20));
}

#[test]
fn test_pawn_fully_blocked() {
    let mut pos = empty_board();
    place_piece(&mut pos, 12, white(Type::Pawn)); // e2
    place_piece(&mut pos, 20, black(Type::Knight)); // e3
    place_piece(&mut pos, 0, white(Type::King));
    place_piece(&mut pos, 63, black(Type::King));

    assert!(pos.piece_legal_moves(12).is_empty());
}

#[test]
fn test_pawn_captures_diagonally() {
    let mut pos = empty_board();
    place_piece(&mut pos, 28, white(Type::Pawn)); // e4
    place_piece(&mut pos, 35, black(Type::Pawn)); // d5
    place_piece(&mut pos, 37, black(Type::Knight)); // f5
    place_piece(&mut pos, 36, black(Type::Bishop)); // e5 blocks the push
    place_piece(&mut pos, 7, white(Type::King));
    place_piece(&mut pos, 63, black(Type::King));

    let moves = pos.piece_legal_moves(28);
    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(|m| m.is_capture()));
}

#[test]
fn test_black_pawn_moves_down() {
    let pos = fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
    let moves = pos.piece_legal_moves(51); // d7

    assert!(has_move(&moves, 51, 43));
    assert!(has_move(&moves, 51, 35));
}
