// Move ordering for the root and for interior search nodes

use crate::game_repr::Move;
use rand::seq::SliceRandom;
use rand::Rng;

/// Checks first, then captures. Equal keys keep their generation order.
pub fn order_root_moves(moves: &mut [Move]) {
    moves.sort_by_key(|m| (!m.is_check(), !m.is_capture()));
}

/// Random order with captures moved to the front
pub fn order_search_moves<R: Rng + ?Sized>(moves: &mut [Move], rng: &mut R) {
    moves.shuffle(rng);
    moves.sort_by_key(|m| !m.is_capture());
}
