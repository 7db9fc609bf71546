use super::*;
use crate::config::EngineConfig;
use crate::game_repr::{parse_coordinate_move, Move, Position, Rules};

// ==================== HELPER FUNCTIONS ====================

pub fn fen(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

/// Engine without jitter at a fixed depth, seeded for repeatable tie-breaks
pub fn quiet_engine(depth: u32) -> Engine {
    Engine::new(EngineConfig {
        jitter: 0.0,
        fixed_depth: Some(depth),
        seed: Some(7),
        ..EngineConfig::default()
    })
}

pub fn is_move(mv: Move, text: &str) -> bool {
    let coords = parse_coordinate_move(text).unwrap();
    mv.from() == coords.from && mv.to() == coords.to
}

/// Plain minimax without pruning, in the same score frame as `minimax`
pub fn full_width<R: Rules>(engine: &Engine, rules: &mut R, depth: u32, maximizing: bool) -> f64 {
    let to_move = rules.side_to_move();
    let perspective = if maximizing { to_move } else { to_move.opposite() };
    if depth == 0 {
        return perspective.sign() * engine.evaluate_static(rules);
    }

    let moves = rules.legal_moves();
    if moves.is_empty() {
        if rules.is_checkmate() {
            return if maximizing { -MATE_SCORE } else { MATE_SCORE };
        }
        return 0.0;
    }

    let mut best = if maximizing { -MATE_SCORE } else { MATE_SCORE };
    for mv in moves {
        rules.make_move(mv).unwrap();
        let score = full_width(engine, rules, depth - 1, !maximizing);
        rules.undo_last_move().unwrap();
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    best
}

// ==================== TEST MODULES ====================
