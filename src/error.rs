//! Error types for the engine boundary.
//!
//! Every variant is a local, recoverable condition: callers either ignore the
//! input that produced it or re-prompt. Nothing here is fatal to the process.

use crate::game_repr::Square;

/// Errors surfaced by boundary operations (user input, undo, FEN parsing, search).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// Undo requested with an empty move history
    #[error("no moves to undo")]
    NothingToUndo,

    /// A proposed move is not in the current legal-move list
    #[error("illegal move: {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    /// Promotion selection outside of Q, R, B, N
    #[error("invalid promotion piece: {0:?} (expected one of Q, R, B, N)")]
    InvalidPromotion(char),

    /// Promotion selection supplied while no promotion is waiting for one
    #[error("no promotion is pending")]
    NoPendingPromotion,

    /// Malformed FEN string
    #[error("invalid FEN string: {0}")]
    InvalidFen(String),

    /// Malformed algebraic square
    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    /// Root search returned without a move although legal moves existed
    #[error("search produced no move")]
    SearchProducedNoMove,
}

pub type Result<T> = std::result::Result<T, ChessError>;
