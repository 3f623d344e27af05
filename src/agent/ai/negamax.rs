// Negamax Search with Alpha-Beta Pruning
//
// Fixed-depth negamax over the legal move generator. Every node makes a move,
// asks for the replies (which also refreshes the checkmate/stalemate flags the
// evaluation reads), recurses with the window negated and swapped, and takes
// the move back. Root moves are shuffled so equal scores don't always pick the
// same move.
//
// Scores are from the perspective of the side to move at each node.

use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::SearchConfig;
use crate::game_repr::{GameState, Move, ProbeGuard};
use super::evaluation::{score_board, CHECKMATE};

/// Below any real score, so the first root move is always recorded
const NO_SCORE: i32 = -CHECKMATE - 1;

/// Outcome of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// None only when the root had no legal moves or the search was stopped
    pub best_move: Option<Move>,
    pub score: i32,
    pub nodes: u64,
}

/// Per-search accumulator threaded through the recursion
pub(crate) struct SearchContext<'a> {
    max_depth: u8,
    best_move: Option<Move>,
    nodes: u64,
    stop: &'a AtomicBool,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(max_depth: u8, stop: &'a AtomicBool) -> Self {
        Self { max_depth, best_move: None, nodes: 0, stop }
    }
}

/// Negamax with alpha-beta pruning.
///
/// `moves` must be the legal moves of `state`, generated right before the
/// call. `turn` is +1 when white is to move and -1 for black.
pub(crate) fn negamax(
    state: &mut GameState,
    moves: Vec<Move>,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    turn: i32,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.nodes += 1;
    if depth == 0 || moves.is_empty() {
        return turn * score_board(state);
    }

    let mut max_score = NO_SCORE;
    for mv in moves {
        if ctx.stop.load(Ordering::Relaxed) {
            break;
        }

        let score = {
            let mut child = ProbeGuard::new(state, mv);
            let replies = child.get_valid_moves();
            -negamax(&mut child, replies, depth - 1, -beta, -alpha, -turn, ctx)
        };

        if score > max_score {
            max_score = score;
            if depth == ctx.max_depth {
                ctx.best_move = Some(mv);
            }
        }

        alpha = alpha.max(max_score);
        if alpha >= beta {
            break;
        }
    }
    max_score
}

/// Search `state` to the configured depth.
///
/// The position is restored before returning. `stop` aborts the search at
/// the next node; the result is then meaningless.
pub fn find_best_move(state: &mut GameState, config: &SearchConfig, stop: &AtomicBool) -> SearchResult {
    let mut moves = state.get_valid_moves();
    match config.seed {
        Some(seed) => moves.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => moves.shuffle(&mut rand::thread_rng()),
    }

    let depth = config.depth.max(1);
    let turn = if state.white_to_move() { 1 } else { -1 };
    let mut ctx = SearchContext::new(depth, stop);
    let score = negamax(state, moves, depth, -CHECKMATE, CHECKMATE, turn, &mut ctx);

    debug!(
        "search depth {} visited {} nodes, score {}, best {}",
        depth,
        ctx.nodes,
        score,
        ctx.best_move.map_or_else(|| "none".to_string(), |m| m.chess_notation()),
    );

    SearchResult { best_move: ctx.best_move, score, nodes: ctx.nodes }
}

/// Uniformly random legal move
pub fn find_random_move<R: Rng + ?Sized>(moves: &[Move], rng: &mut R) -> Option<Move> {
    moves.choose(rng).copied()
}
