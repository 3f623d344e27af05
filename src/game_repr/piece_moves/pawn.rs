use super::super::*;

impl GameState {
    /// Pushes, double pushes, captures, en passant and promotions.
    ///
    /// En passant candidates still need the discovered-check probe done by
    /// `get_valid_moves`.
    pub fn pawn_moves_into(&self, sq: Square, moves: &mut Vec<Move>) {
        let Some(pawn) = self.piece_at(sq) else { return };
        let color = pawn.color;
        let forward = color.pawn_direction();
        let pin = self.pin_on(sq);
        let allowed = |dir: Direction| pin.map_or(true, |p| p.allows(dir));

        // pushes
        if allowed((forward, 0)) {
            if let Some(one) = sq.offset((forward, 0), 1).filter(|&s| self.piece_at(s).is_none()) {
                push_pawn_move(moves, Move::new(sq, one, pawn, None), color);
                if sq.row == color.pawn_start_row() {
                    if let Some(two) = sq.offset((forward, 0), 2).filter(|&s| self.piece_at(s).is_none()) {
                        moves.push(Move::new(sq, two, pawn, None));
                    }
                }
            }
        }

        // captures
        for side in [-1, 1] {
            let dir = (forward, side);
            if !allowed(dir) {
                continue;
            }
            let Some(end) = sq.offset(dir, 1) else { continue };
            match self.piece_at(end) {
                Some(target) if !target.is(color) => {
                    push_pawn_move(moves, Move::new(sq, end, pawn, Some(target)), color);
                }
                None if self.en_passant == Some(end) => {
                    let victim = Piece::new(color.opposite(), Type::Pawn);
                    if self.piece_at(Square::new(sq.row, end.col)) == Some(victim) {
                        moves.push(Move::new(sq, end, pawn, None).en_passant(victim));
                    }
                }
                _ => {}
            }
        }
    }
}

/// Expand a move onto the last rank into the four promotion choices
fn push_pawn_move(moves: &mut Vec<Move>, mv: Move, color: Color) {
    if mv.end.row == color.promotion_row() {
        moves.extend(Type::PROMOTIONS.iter().map(|&p| mv.promote(p)));
    } else {
        moves.push(mv);
    }
}
