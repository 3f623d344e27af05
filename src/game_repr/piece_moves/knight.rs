use super::super::*;

impl GameState {
    /// A pinned knight can never stay on the pin line, so it gets no moves
    pub fn knight_moves_into(&self, sq: Square, moves: &mut Vec<Move>) {
        let Some(piece) = self.piece_at(sq) else { return };
        if self.pin_on(sq).is_some() {
            return;
        }

        for &offset in KNIGHT_OFFSETS.iter() {
            let Some(end) = sq.offset(offset, 1) else { continue };
            match self.piece_at(end) {
                Some(target) if target.is(piece.color) => {}
                target => moves.push(Move::new(sq, end, piece, target)),
            }
        }
    }
}
