use super::*;

// ==================== PROMOTION TESTS ====================

#[test]
fn test_pawn_promotion_on_back_rank() {
    let pos = fen("k7/6P1/8/8/8/8/8/4K3 w - - 0 1");
    let moves = pos.piece_legal_moves(sq("g7").index());

    assert_eq!(moves.len(), 1, "Only queen promotions are generated");
    assert_eq!(moves[0].move_type(), MoveType::Promotion);
    assert!(moves[0].is_promotion());
}

#[test]
fn test_pawn_promotion_execution() {
    let mut pos = fen("k7/6P1/8/8/8/8/8/4K3 w - - 0 1");
    play(&mut pos, "g7g8");

    assert_eq!(pos.position[62], Some(white(Type::Queen)));
    assert_eq!(pos.position[54], None);
}

#[test]
fn test_pawn_promotion_on_capture() {
    let mut pos = fen("k4rn1/6P1/8/8/8/8/8/4K3 w - - 0 1");
    let moves = pos.piece_legal_moves(sq("g7").index());
    assert!(has_move(&moves, 54, 61), "gxf8=Q");
    assert!(!has_move(&moves, 54, 62), "g8 is blocked by the knight");
    assert!(moves.iter().all(|m| m.is_promotion()));

    let mv = play(&mut pos, "g7f8q");
    assert!(mv.is_capture());
    assert_eq!(pos.position[61], Some(white(Type::Queen)));
}

#[test]
fn test_black_pawn_promotion() {
    let mut pos = fen("4k3/8/8/8/8/8/1p6/7K b - - 0 1");
    play(&mut pos, "b2b1");
    assert_eq!(pos.position[1], Some(black(Type::Queen)));
}

#[test]
fn test_underpromotion_is_rejected() {
    let mut pos = fen("k7/6P1/8/8/8/8/8/4K3 w - - 0 1");
    let before = pos.to_fen();
    assert!(pos.make_move_squares(sq("g7"), sq("g8"), Some(Type::Knight)).is_none());
    assert_eq!(pos.to_fen(), before);
}

#[test]
fn test_promotion_undo_restores_pawn() {
    let mut pos = fen("k4rn1/6P1/8/8/8/8/8/4K3 w - - 0 1");
    let before = pos.to_fen();
    play(&mut pos, "g7f8");
    pos.take_back();

    assert_eq!(pos.to_fen(), before);
    assert_eq!(pos.position[54], Some(white(Type::Pawn)));
    assert_eq!(pos.position[61], Some(black(Type::Rook)));
}
