mod fen;
mod moves;
mod notation;
mod piece;
mod position;
mod piece_moves;
mod rules;
mod square;
pub mod bitboards;

#[cfg(test)]
mod tests;

pub use moves::*;
pub use notation::*;
pub use piece::*;
pub use position::*;
pub use rules::*;
pub use square::*;
