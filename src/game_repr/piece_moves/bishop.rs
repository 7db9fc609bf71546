use crate::game_repr::bitboards::bishop_attacks;
use crate::game_repr::{MoveList, Position};

impl Position {
    pub(crate) fn bishop_moves_into(&self, idx: usize, moves: &mut MoveList) {
        let occupied = self.bitboards.all_occupied();
        let targets = bishop_attacks(idx, occupied) & self.friendly_mask(idx);
        self.push_targets(idx, targets, moves);
    }
}
