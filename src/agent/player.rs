//! Player trait and associated types for chess game agents.
//!
//! A player is anything the orchestrator can ask for a move: a person typing
//! at a terminal, the computer opponent, or a scripted test double. The trait
//! has no constructor; each implementation takes what it needs.
//!
//! `get_move()` is synchronous. The orchestrator calls it and waits, which is
//! all a turn-based terminal game needs.

use crate::game::Game;
use crate::game_repr::{Color, Move};

/// Result of a completed chess game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Black was checkmated or resigned
    WhiteWins,
    /// White was checkmated or resigned
    BlackWins,
    /// Insufficient material, fifty-move rule or threefold repetition
    Draw,
    /// The side to move has no legal moves but is not in check
    Stalemate,
}

impl GameResult {
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            GameResult::Draw | GameResult::Stalemate => None,
        }
    }
}

/// Something that can provide chess moves.
///
/// Only `get_move()` must be implemented.
pub trait Player {
    /// Request the next move for the side to move in `game`.
    ///
    /// The player may inspect the game and, for commands like undo, change
    /// it, but it must not play the returned move itself; the orchestrator
    /// validates and executes it.
    ///
    /// Returns `None` when the player resigns or its input is exhausted.
    fn get_move(&mut self, game: &mut Game) -> Option<Move>;

    /// Called after the opponent's move has been executed
    fn opponent_moved(&mut self, _mv: Move) {}

    fn game_ended(&mut self, _result: GameResult) {}

    fn name(&self) -> &str {
        "Player"
    }
}
