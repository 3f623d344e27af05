use super::*;
use crate::error::ChessError;

// ==================== HELPER FUNCTIONS ====================

/// Board with no pieces, white to move
pub fn empty_board() -> GameState {
    GameState::empty()
}

pub fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

pub fn place_piece(state: &mut GameState, square: &str, color: Color, piece_type: Type) {
    state.place_piece(sq(square), Piece::new(color, piece_type));
}

pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves.iter().any(|m| m.start == sq(from) && m.end == sq(to))
}

pub fn moves_from(moves: &[Move], from: &str) -> Vec<Move> {
    moves.iter().copied().filter(|m| m.start == sq(from)).collect()
}

pub fn count_castles(moves: &[Move]) -> usize {
    moves.iter().filter(|m| m.is_castle).count()
}

/// Find the legal move written as "e2e4" and make it
pub fn play(state: &mut GameState, notation: &str) -> Move {
    let mv = state
        .get_valid_moves()
        .into_iter()
        .find(|m| m.chess_notation() == notation)
        .unwrap_or_else(|| panic!("{notation} is not legal in {}", state.to_fen()));
    state.make_move(mv);
    mv
}

pub fn fen(text: &str) -> GameState {
    GameState::from_fen(text).unwrap()
}

// ==================== TEST MODULES ====================

mod castling;
mod promotion;
mod checkmate;
mod perft;
