use crate::game_repr::{MoveList, Position};

impl Position {
    pub(crate) fn queen_moves_into(&self, idx: usize, moves: &mut MoveList) {
        self.bishop_moves_into(idx, moves);
        self.rook_moves_into(idx, moves);
    }
}
