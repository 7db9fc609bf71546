// Minimax search with alpha-beta pruning
//
// Scores are kept in the frame of the side the root is choosing for: the
// "maximizing" layers belong to that side. At the leaves the white-relative
// evaluation is multiplied by the perspective sign, so black searching for
// itself sees a winning capture as a positive score.

use super::engine::Engine;
use super::move_ordering::order_search_moves;
use crate::error::SearchError;
use crate::game_repr::Rules;

/// Score of a side that has been checkmated (or has delivered mate)
pub const MATE_SCORE: f64 = 9999.0;

/// Initial window bound, outside every reachable score
pub const INFINITY: f64 = 10000.0;

/// Searches `depth` plies below the current position.
///
/// The position is left exactly as it was found on every return path,
/// including errors.
pub fn minimax<R: Rules + ?Sized>(
    engine: &mut Engine,
    rules: &mut R,
    depth: u32,
    maximizing: bool,
    mut alpha: f64,
    mut beta: f64,
) -> Result<f64, SearchError> {
    engine.stats.nodes += 1;

    let to_move = rules.side_to_move();
    let perspective = if maximizing { to_move } else { to_move.opposite() };

    if depth == 0 {
        return Ok(perspective.sign() * engine.evaluate_board(rules));
    }

    let mut moves = rules.legal_moves();
    if moves.is_empty() {
        if rules.is_checkmate() {
            return Ok(if maximizing { -MATE_SCORE } else { MATE_SCORE });
        }
        return Ok(0.0);
    }
    order_search_moves(&mut moves, engine.rng());

    let mut best = if maximizing { -MATE_SCORE } else { MATE_SCORE };
    for mv in moves {
        if rules.make_move(mv).is_none() {
            return Err(SearchError::RejectedMove(mv));
        }
        let score = minimax(engine, rules, depth - 1, !maximizing, alpha, beta);
        if rules.undo_last_move().is_none() {
            return Err(SearchError::EmptyHistory);
        }
        let score = score?;

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }

    Ok(best)
}
