// AI Agent - Negamax with Alpha-Beta Pruning
//
// Fixed-depth negamax over the legal move generator with a material plus
// piece-square evaluation. Searches run on a worker thread so the caller
// can keep polling for input.

mod evaluation;
mod negamax;
mod piece_square_tables;
mod worker;

pub use evaluation::{score_board, piece_value, CHECKMATE, STALEMATE};
pub use negamax::{find_best_move, find_random_move, SearchResult};
pub use worker::{spawn_search, SearchHandle, SearchStatus};
