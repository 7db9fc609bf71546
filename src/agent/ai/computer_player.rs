//! ComputerPlayer - the engine's seat at the board
//!
//! Picks a depth for the current position with [`Engine::choose_depth`],
//! runs the root search and hands the chosen move back to the orchestrator.
//! The statistics of the last search are kept for display and tests.

use super::engine::Engine;
use super::search::{search_root, SearchResult};
use crate::agent::player::{GameResult, Player};
use crate::config::{Difficulty, EngineConfig};
use crate::game::Game;
use crate::game_repr::{Move, Rules};

pub struct ComputerPlayer {
    engine: Engine,
    name: String,
    last_result: Option<SearchResult>,
}

impl ComputerPlayer {
    pub fn new(config: EngineConfig, name: String) -> Self {
        Self {
            engine: Engine::new(config),
            name,
            last_result: None,
        }
    }

    /// Player named after the preset, e.g. "Computer (Easy)"
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.config(), format!("Computer ({})", difficulty.name()))
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }

    /// Searches `rules` and returns the chosen move; `None` when there is no legal move
    pub fn choose_move<R: Rules + ?Sized>(&mut self, rules: &mut R) -> Option<Move> {
        let depth = self.engine.choose_depth(rules);
        let result = search_root(&mut self.engine, rules, depth);

        match result.best_move {
            Some(mv) => log::info!(
                "{} plays {} (depth {}, score {:.2}, {} nodes, {}ms)",
                self.name,
                mv,
                result.depth,
                result.score,
                result.nodes_searched,
                result.time_ms
            ),
            None => log::info!("{} has no legal moves", self.name),
        }

        let best_move = result.best_move;
        self.last_result = Some(result);
        best_move
    }
}

impl Player for ComputerPlayer {
    fn get_move(&mut self, game: &mut Game) -> Option<Move> {
        self.choose_move(game.position_mut())
    }

    fn game_ended(&mut self, result: GameResult) {
        let stats = self.engine.stats();
        log::debug!(
            "{} finished ({:?}) after {} evaluations over {} nodes",
            self.name,
            result,
            stats.evaluations,
            stats.nodes
        );
        self.engine.reset_stats();
    }

    fn name(&self) -> &str {
        &self.name
    }
}
