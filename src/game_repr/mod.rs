mod square;
mod piece;
mod moves;
mod castling;
mod game_state;
mod analyzer;
mod legal;
mod piece_moves;

#[cfg(test)]
mod tests;

pub use square::*;
pub use piece::*;
pub use moves::*;
pub use castling::*;
pub use game_state::*;
pub use analyzer::*;
