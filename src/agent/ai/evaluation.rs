// Position evaluation function
// Scores are in tenths of a pawn, positive = good for white

use crate::game_repr::{Color, GameState, Square, Type};
use super::piece_square_tables::get_pst_value;

/// Score of a won position. Larger than any material total.
pub const CHECKMATE: i32 = 10_000;
pub const STALEMATE: i32 = 0;

// Material values in tenths of a pawn
const PAWN_VALUE: i32 = 10;
const KNIGHT_VALUE: i32 = 30;
const BISHOP_VALUE: i32 = 30;
const ROOK_VALUE: i32 = 50;
const QUEEN_VALUE: i32 = 100;

pub fn piece_value(piece_type: Type) -> i32 {
    match piece_type {
        Type::Pawn => PAWN_VALUE,
        Type::Knight => KNIGHT_VALUE,
        Type::Bishop => BISHOP_VALUE,
        Type::Rook => ROOK_VALUE,
        Type::Queen => QUEEN_VALUE,
        Type::King => 0,
    }
}

/// Static score from white's point of view.
///
/// Reads the checkmate/stalemate flags, so call `get_valid_moves` on the
/// position first.
pub fn score_board(state: &GameState) -> i32 {
    if state.checkmate() {
        return match state.side_to_move() {
            Color::White => -CHECKMATE,
            Color::Black => CHECKMATE,
        };
    }
    if state.stalemate() {
        return STALEMATE;
    }

    let mut score = 0;
    for (row, rank) in state.board().iter().enumerate() {
        for (col, square) in rank.iter().enumerate() {
            let Some(piece) = square else { continue };
            let value = piece_value(piece.piece_type)
                + get_pst_value(*piece, Square::new(row as u8, col as u8));
            match piece.color {
                Color::White => score += value,
                Color::Black => score -= value,
            }
        }
    }
    score
}
