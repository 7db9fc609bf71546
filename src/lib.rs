//! Play chess against the computer at a terminal.
//!
//! [`game_repr`] holds the rules: board, move generation, FEN and notation.
//! [`agent`] holds the players, including the minimax engine in
//! [`agent::ai`]. [`game`] is the session shown to the user and
//! [`orchestrator`] runs the turn loop.

pub mod agent;
pub mod config;
pub mod error;
pub mod game;
pub mod game_repr;
pub mod orchestrator;
