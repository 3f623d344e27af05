// Piece-square tables for positional evaluation
// Indexed [row][col] on the board grid, row 0 = rank 8.
// Values are in tenths of a pawn; kings have no table.

use crate::game_repr::{Color, Piece, Square, Type};

pub type Table = [[i32; 8]; 8];

// Knights want squares with the most reach
pub const KNIGHT_TABLE: Table = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];

// Long diagonals
pub const BISHOP_TABLE: Table = [
    [4, 3, 2, 1, 1, 2, 3, 4],
    [3, 4, 3, 2, 2, 3, 4, 3],
    [2, 3, 4, 3, 3, 4, 3, 2],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [2, 3, 4, 3, 3, 4, 3, 2],
    [3, 4, 3, 2, 2, 3, 4, 3],
    [4, 3, 2, 1, 1, 2, 3, 4],
];

pub const QUEEN_TABLE: Table = [
    [1, 1, 1, 3, 1, 1, 1, 1],
    [1, 2, 3, 3, 3, 1, 1, 1],
    [1, 4, 3, 3, 3, 4, 2, 1],
    [1, 2, 3, 3, 3, 2, 2, 1],
    [1, 2, 3, 3, 3, 2, 2, 1],
    [1, 4, 3, 3, 3, 4, 2, 1],
    [1, 1, 2, 3, 3, 1, 1, 1],
    [1, 1, 1, 3, 1, 1, 1, 1],
];

// Back ranks and seventh ranks
pub const ROOK_TABLE: Table = [
    [4, 3, 4, 4, 4, 4, 3, 4],
    [4, 4, 4, 4, 4, 4, 4, 4],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [4, 4, 4, 4, 4, 4, 4, 4],
    [4, 3, 4, 4, 4, 4, 3, 4],
];

pub const WHITE_PAWN_TABLE: Table = [
    [8, 8, 8, 8, 8, 8, 8, 8],
    [8, 8, 8, 8, 8, 8, 8, 8],
    [5, 6, 6, 7, 7, 6, 6, 5],
    [2, 3, 3, 5, 5, 3, 3, 2],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [1, 1, 1, 0, 0, 1, 1, 1],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

pub const BLACK_PAWN_TABLE: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 0, 0, 1, 1, 1],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [2, 3, 3, 5, 5, 3, 3, 2],
    [5, 6, 6, 7, 7, 6, 6, 5],
    [8, 8, 8, 8, 8, 8, 8, 8],
    [8, 8, 8, 8, 8, 8, 8, 8],
];

/// Positional bonus for `piece` standing on `square`
pub fn get_pst_value(piece: Piece, square: Square) -> i32 {
    let table = match (piece.piece_type, piece.color) {
        (Type::King, _) => return 0,
        (Type::Pawn, Color::White) => &WHITE_PAWN_TABLE,
        (Type::Pawn, Color::Black) => &BLACK_PAWN_TABLE,
        (Type::Knight, _) => &KNIGHT_TABLE,
        (Type::Bishop, _) => &BISHOP_TABLE,
        (Type::Rook, _) => &ROOK_TABLE,
        (Type::Queen, _) => &QUEEN_TABLE,
    };
    table[square.row as usize][square.col as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn test_pawn_prefers_advancement() {
        let pawn = Piece::new(Color::White, Type::Pawn);
        assert!(get_pst_value(pawn, sq("d7")) > get_pst_value(pawn, sq("d2")));
    }

    #[test]
    fn test_knight_prefers_center() {
        let knight = Piece::new(Color::Black, Type::Knight);
        assert!(get_pst_value(knight, sq("d4")) > get_pst_value(knight, sq("a1")));
    }

    #[test]
    fn test_pawn_tables_mirror() {
        let white = Piece::new(Color::White, Type::Pawn);
        let black = Piece::new(Color::Black, Type::Pawn);
        for sq in Square::all() {
            let mirrored = Square::new(7 - sq.row, sq.col);
            assert_eq!(get_pst_value(white, sq), get_pst_value(black, mirrored));
        }
    }

    #[test]
    fn test_king_has_no_table() {
        let king = Piece::new(Color::White, Type::King);
        assert!(Square::all().all(|sq| get_pst_value(king, sq) == 0));
    }
}
