use super::*;

// Reference counts exclude under-promotions, so every position here is
// searched only to depths where no pawn reaches the last rank.

mod starting_position;
mod kiwipete;
mod endgame;
mod middle_game;
