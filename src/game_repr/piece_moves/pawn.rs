use crate::game_repr::bitboards::{pop_lsb, tables::PAWN_ATTACKS};
use crate::game_repr::{Color, Move, MoveList, MoveType, Piece, Position, Square, Type};

impl Position {
    pub(crate) fn pawn_moves_into(&self, idx: usize, moves: &mut MoveList) {
        let Some(pawn) = self.position[idx] else {
            return;
        };
        let from = Square::new(idx as u8);
        let (forward, start_rank, promotion_rank) = match pawn.color {
            Color::White => (1, 1, 7),
            Color::Black => (-1, 6, 0),
        };

        // pushes
        if let Some(one) = from.offset(0, forward) {
            if self.position[one.index()].is_none() {
                push_pawn_move(moves, from, one, promotion_rank, false);

                if from.rank() == start_rank {
                    if let Some(two) = one.offset(0, forward) {
                        if self.position[two.index()].is_none() {
                            moves.push(Move::new(from, two, MoveType::Normal));
                        }
                    }
                }
            }
        }

        // captures
        let attacks = PAWN_ATTACKS[pawn.color.index()][idx];
        let mut captures = attacks & self.bitboards.occupied_by_color(pawn.color.opposite());
        while captures != 0 {
            let to = Square::new(pop_lsb(&mut captures) as u8);
            push_pawn_move(moves, from, to, promotion_rank, true);
        }

        // en passant: target must sit behind an enemy pawn that just double pushed
        if let Some(ep) = self.en_passant {
            let victim = ep.offset(0, -forward);
            let enemy_pawn = Some(Piece::new(pawn.color.opposite(), Type::Pawn));
            if attacks & (1u64 << ep.index()) != 0
                && victim.map_or(false, |sq| self.position[sq.index()] == enemy_pawn)
            {
                moves.push(Move::new(from, ep, MoveType::EnPassant).with_capture());
            }
        }
    }
}

fn push_pawn_move(moves: &mut MoveList, from: Square, to: Square, promotion_rank: u8, capture: bool) {
    let move_type = if to.rank() == promotion_rank {
        MoveType::Promotion
    } else {
        MoveType::Normal
    };
    let mv = Move::new(from, to, move_type);
    moves.push(if capture { mv.with_capture() } else { mv });
}
