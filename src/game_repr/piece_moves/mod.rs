pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use crate::game_repr::bitboards::pop_lsb;
use crate::game_repr::{Move, MoveList, MoveType, Position, Square};

impl Position {
    /// Pushes a normal move to every square in `targets`, flagging captures
    pub(crate) fn push_targets(&self, idx: usize, mut targets: u64, moves: &mut MoveList) {
        let Some(piece) = self.position[idx] else {
            return;
        };
        let enemies = self.bitboards.occupied_by_color(piece.color.opposite());
        let from = Square::new(idx as u8);

        while targets != 0 {
            let target_sq = pop_lsb(&mut targets);
            let mv = Move::new(from, Square::new(target_sq as u8), MoveType::Normal);
            if enemies & (1u64 << target_sq) != 0 {
                moves.push(mv.with_capture());
            } else {
                moves.push(mv);
            }
        }
    }

    /// Own pieces block every move
    pub(crate) fn friendly_mask(&self, idx: usize) -> u64 {
        match self.position[idx] {
            Some(piece) => !self.bitboards.occupied_by_color(piece.color),
            None => 0,
        }
    }
}
