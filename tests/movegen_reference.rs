//! Legal move counts checked against the `chess` crate.
//!
//! Promotions here are queen-only, so the reference moves are filtered to
//! queen promotions before counting.

use std::str::FromStr;

use chess::{Board, MoveGen};
use solo_chess::game_repr::{Position, Rules};

const POSITIONS: [&str; 6] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
];

fn reference_count(fen: &str) -> usize {
    let board = Board::from_str(fen).unwrap_or_else(|err| panic!("reference rejected {}: {:?}", fen, err));
    MoveGen::new_legal(&board)
        .filter(|mv| matches!(mv.get_promotion(), None | Some(chess::Piece::Queen)))
        .count()
}

fn check(position: &Position) {
    let fen = position.to_fen();
    assert_eq!(
        position.legal_moves().len(),
        reference_count(&fen),
        "legal move count differs in {}",
        fen
    );
}

#[test]
fn test_root_move_counts() {
    for fen in POSITIONS {
        check(&Position::from_fen(fen).unwrap());
    }
}

#[test]
fn test_move_counts_two_plies_deep() {
    for fen in POSITIONS {
        let mut position = Position::from_fen(fen).unwrap();
        for first in position.legal_moves() {
            position.make_move(first).unwrap();
            check(&position);

            for second in position.legal_moves() {
                position.make_move(second).unwrap();
                check(&position);
                position.undo_last_move().unwrap();
            }
            position.undo_last_move().unwrap();
        }
        assert_eq!(position.to_fen(), Position::from_fen(fen).unwrap().to_fen());
    }
}
