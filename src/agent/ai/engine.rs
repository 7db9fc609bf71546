//! The engine: configuration, random source and search counters in one place.
//!
//! Evaluation, ordering and search all take `&mut Engine` so the jitter and
//! the move shuffling draw from a single seeded generator. A game seeded with
//! [`EngineConfig::seed`] replays identically.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::evaluation::{self, raw_material, snapshot};
use crate::config::{EngineConfig, MAX_JITTER};
use crate::game_repr::Rules;

/// Counters accumulated across searches until [`Engine::reset_stats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls to [`Engine::evaluate_board`]
    pub evaluations: u64,
    /// Interior and leaf nodes visited by minimax
    pub nodes: u64,
}

pub struct Engine {
    config: EngineConfig,
    rng: StdRng,
    pub(crate) stats: SearchStats,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    pub(crate) fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Score of the position from white's point of view, with jitter
    pub fn evaluate_board<R: Rules + ?Sized>(&mut self, rules: &R) -> f64 {
        self.stats.evaluations += 1;
        let jitter = self.config.jitter;
        let noise = if jitter > 0.0 {
            let jitter = jitter.min(MAX_JITTER);
            self.rng.gen_range(-jitter..jitter)
        } else {
            0.0
        };
        match evaluation::evaluate(rules, &self.config.weights) {
            Ok(score) => score + noise,
            Err(err) => {
                log::debug!("evaluation failed ({}), counting material", err);
                raw_material(&snapshot(rules))
            }
        }
    }

    /// Deterministic part of [`Engine::evaluate_board`]
    pub fn evaluate_static<R: Rules + ?Sized>(&self, rules: &R) -> f64 {
        evaluation::evaluate(rules, &self.config.weights)
            .unwrap_or_else(|_| raw_material(&snapshot(rules)))
    }

    /// Search depth for the current position under the configured policy
    pub fn choose_depth<R: Rules + ?Sized>(&self, rules: &R) -> u32 {
        self.config.depth_for(rules.legal_moves().len())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
