use crate::game_repr::bitboards::tables::KING_ATTACKS;
use crate::game_repr::{CastlingRights, Color, Move, MoveList, MoveType, Piece, Position, Square, Type};

impl Position {
    pub(crate) fn king_moves_into(&self, idx: usize, moves: &mut MoveList) {
        let Some(king) = self.position[idx] else {
            return;
        };
        let targets = KING_ATTACKS[idx] & self.friendly_mask(idx);
        self.push_targets(idx, targets, moves);

        let home = match king.color {
            Color::White => 4,
            Color::Black => 60,
        };
        if idx != home || self.king_in_check(king.color) {
            return;
        }

        let opponent = king.color.opposite();
        let rook = Some(Piece::new(king.color, Type::Rook));
        let empty = |squares: &[usize]| squares.iter().all(|&sq| self.position[sq].is_none());
        let safe = |squares: &[usize]| squares.iter().all(|&sq| !self.is_square_attacked(sq, opponent));
        let from = Square::new(home as u8);

        // kingside: f and g empty and unattacked
        if self.castling.has(CastlingRights::kingside(king.color))
            && self.position[home + 3] == rook
            && empty(&[home + 1, home + 2])
            && safe(&[home + 1, home + 2])
        {
            moves.push(Move::new(from, Square::new(home as u8 + 2), MoveType::Castling));
        }

        // queenside: b, c and d empty, only c and d must be unattacked
        if self.castling.has(CastlingRights::queenside(king.color))
            && self.position[home - 4] == rook
            && empty(&[home - 1, home - 2, home - 3])
            && safe(&[home - 1, home - 2])
        {
            moves.push(Move::new(from, Square::new(home as u8 - 2), MoveType::Castling));
        }
    }
}
