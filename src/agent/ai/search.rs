// Root move selection
//
// Every root move is searched to the requested depth with minimax, then
// nudged by small tactical bonuses. The best score wins; equal scores are
// broken at random so the engine does not always play the same game.

use rand::seq::SliceRandom;
use std::time::Instant;

use super::engine::Engine;
use super::minimax::{minimax, INFINITY, MATE_SCORE};
use super::move_ordering::order_root_moves;
use crate::error::SearchError;
use crate::game_repr::{squares, Move, Rules};

const CAPTURE_BONUS: f64 = 0.2;
const CHECK_BONUS: f64 = 0.3;
const CENTER_BONUS: f64 = 0.1;

/// Result of a search operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Root score of `best_move`, bonuses included, in the mover's frame
    pub score: f64,
    pub depth: u32,
    /// Root moves that shared the best score
    pub candidates: usize,
    pub moves_searched: usize,
    pub nodes_searched: u64,
    pub evaluations: u64,
    pub time_ms: u64,
    /// The deadline stopped the root loop before every move was searched
    pub timed_out: bool,
}

/// Best move for the side to move, searching `depth` plies.
///
/// Returns `None` only when there are no legal moves.
pub fn get_best_move<R: Rules + ?Sized>(engine: &mut Engine, rules: &mut R, depth: u32) -> Option<Move> {
    search_root(engine, rules, depth).best_move
}

/// Like [`get_best_move`], with the statistics of the search
pub fn search_root<R: Rules + ?Sized>(engine: &mut Engine, rules: &mut R, depth: u32) -> SearchResult {
    let start_time = Instant::now();
    let before = engine.stats();

    let mut moves = rules.legal_moves();
    let mut result = SearchResult {
        depth,
        ..SearchResult::default()
    };

    match moves.len() {
        0 => return result,
        1 => {
            result.best_move = Some(moves[0]);
            result.candidates = 1;
            return result;
        }
        _ => {}
    }

    order_root_moves(&mut moves);

    match select(engine, rules, &moves, depth, &start_time, &mut result) {
        Ok(ties) => {
            result.candidates = ties.len();
            result.best_move = ties.choose(engine.rng()).copied().or(Some(moves[0]));
        }
        Err(err) => {
            log::warn!("move selection failed ({}), playing a random move", err);
            result.best_move = moves.choose(engine.rng()).copied();
        }
    }

    let after = engine.stats();
    result.nodes_searched = after.nodes - before.nodes;
    result.evaluations = after.evaluations - before.evaluations;
    result.time_ms = start_time.elapsed().as_millis() as u64;

    log::debug!(
        "depth {} score {:.2} moves {} nodes {} evals {} time {}ms",
        result.depth,
        result.score,
        result.moves_searched,
        result.nodes_searched,
        result.evaluations,
        result.time_ms
    );

    result
}

/// Scores the root moves in order and returns the ones tied for best
fn select<R: Rules + ?Sized>(
    engine: &mut Engine,
    rules: &mut R,
    moves: &[Move],
    depth: u32,
    start_time: &Instant,
    result: &mut SearchResult,
) -> Result<Vec<Move>, SearchError> {
    let time_limit = engine.config().time_limit_ms;
    let mut best_score = -INFINITY;
    let mut ties = Vec::new();

    for (i, &mv) in moves.iter().enumerate() {
        if i > 0 && is_time_up(start_time, time_limit) {
            log::warn!(
                "time limit of {}ms reached after {} of {} root moves",
                time_limit,
                i,
                moves.len()
            );
            result.timed_out = true;
            break;
        }

        let score = score_root_move(engine, rules, mv, depth)?;
        result.moves_searched += 1;
        log::trace!("{} scored {:.3}", mv, score);

        if score > best_score {
            best_score = score;
            ties.clear();
            ties.push(mv);
        } else if score == best_score {
            ties.push(mv);
        }
    }

    result.score = best_score;
    Ok(ties)
}

fn score_root_move<R: Rules + ?Sized>(
    engine: &mut Engine,
    rules: &mut R,
    mv: Move,
    depth: u32,
) -> Result<f64, SearchError> {
    if rules.make_move(mv).is_none() {
        return Err(SearchError::RejectedMove(mv));
    }
    let searched = minimax(engine, rules, depth.saturating_sub(1), false, -INFINITY, INFINITY);
    if rules.undo_last_move().is_none() {
        return Err(SearchError::EmptyHistory);
    }

    let mut score = match searched {
        Ok(score) => score,
        Err(err) => {
            log::debug!("search below {} failed: {}", mv, err);
            return Ok(-MATE_SCORE);
        }
    };

    if mv.is_capture() {
        score += CAPTURE_BONUS;
    }
    if mv.is_check() {
        score += CHECK_BONUS;
    }
    if squares::CENTER.contains(&mv.to()) {
        score += CENTER_BONUS;
    }
    Ok(score)
}

fn is_time_up(start_time: &Instant, time_limit_ms: u64) -> bool {
    start_time.elapsed().as_millis() as u64 >= time_limit_ms
}
