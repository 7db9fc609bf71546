// Computer opponent
//
// A fixed-depth minimax search with alpha-beta pruning over a hand-tuned
// evaluation: material with piece-square tables, mobility, pawn structure,
// king safety, center control and development. Small random jitter on every
// evaluation and random tie-breaking at the root keep games varied.
//
// Everything is written against the `Rules` trait, so the search runs on any
// move generator that can play and take back moves.

mod computer_player;
mod engine;
mod minimax;
mod search;
pub mod evaluation;
pub mod move_ordering;
pub mod piece_square_tables;

pub use computer_player::ComputerPlayer;
pub use engine::{Engine, SearchStats};
pub use minimax::{minimax, INFINITY, MATE_SCORE};
pub use search::{get_best_move, search_root, SearchResult};

#[cfg(test)]
mod tests;
