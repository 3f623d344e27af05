//! Chess rules engine with a negamax player.
//!
//! [`game_repr`] holds the rules: board state, make/undo, pins and checks,
//! legal move generation and perft. [`agent::ai`] searches positions on a
//! worker thread. [`board::Board`] ties both together for a front end.

pub mod agent;
pub mod board;
pub mod config;
pub mod error;
pub mod game_repr;

pub use error::{ChessError, Result};
