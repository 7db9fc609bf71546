use super::*;

// ==================== HELPER FUNCTIONS ====================

pub fn empty_board() -> Position {
    Position::empty()
}

/// Places a piece by square index (a1 = 0)
pub fn place_piece(pos: &mut Position, idx: usize, piece: Piece) {
    pos.place(Square::new(idx as u8), piece);
}

pub fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

pub fn white(piece_type: Type) -> Piece {
    Piece::new(Color::White, piece_type)
}

pub fn black(piece_type: Type) -> Piece {
    Piece::new(Color::Black, piece_type)
}

pub fn fen(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

pub fn has_move(moves: &[Move], from: usize, to: usize) -> bool {
    moves.iter().any(|m| m.from().index() == from && m.to().index() == to)
}

pub fn count_move_type(moves: &[Move], move_type: MoveType) -> usize {
    moves.iter().filter(|m| m.move_type() == move_type).count()
}

/// Finds and plays the legal move written in coordinate notation
pub fn play(pos: &mut Position, text: &str) -> Move {
    let coords = parse_coordinate_move(text).unwrap();
    pos.make_move_squares(coords.from, coords.to, coords.promotion)
        .unwrap_or_else(|| panic!("{} is not legal in {}", text, pos.to_fen()))
}

// ==================== TEST MODULES ====================

mod pawn_movement;
mod promotion;
mod regression;
mod perft;
