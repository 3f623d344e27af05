use super::super::*;

impl GameState {
    /// Castling moves for the king on `sq`.
    ///
    /// Needs the right, the rook at home, empty squares between, and no
    /// attack on the king's start, transit or landing square.
    pub fn castle_moves_into(&self, sq: Square, moves: &mut Vec<Move>) {
        let Some(king) = self.piece_at(sq) else { return };
        let color = king.color;
        if self.analysis.in_check || sq != Square::new(color.back_row(), 4) {
            return;
        }

        let row = sq.row;
        let rook = Some(Piece::new(color, Type::Rook));
        let empty = |cols: &[u8]| cols.iter().all(|&c| self.piece_at(Square::new(row, c)).is_none());
        let safe = |cols: &[u8]| cols.iter().all(|&c| !self.square_under_attack(Square::new(row, c), color.opposite()));

        if self.castling_rights.king_side(color)
            && self.piece_at(Square::new(row, 7)) == rook
            && empty(&[5, 6])
            && safe(&[5, 6])
        {
            moves.push(Move::new(sq, Square::new(row, 6), king, None).castle());
        }

        // b-file only has to be empty, the king never crosses it
        if self.castling_rights.queen_side(color)
            && self.piece_at(Square::new(row, 0)) == rook
            && empty(&[1, 2, 3])
            && safe(&[2, 3])
        {
            moves.push(Move::new(sq, Square::new(row, 2), king, None).castle());
        }
    }
}
