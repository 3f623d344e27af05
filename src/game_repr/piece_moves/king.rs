use super::super::*;

impl GameState {
    /// King steps that don't walk into an attacked square.
    ///
    /// Each destination is checked with a ray scan from that square; the
    /// board is never touched.
    pub fn king_moves_into(&self, sq: Square, moves: &mut Vec<Move>) {
        let Some(king) = self.piece_at(sq) else { return };

        for &dir in ALL_DIRECTIONS.iter() {
            let Some(end) = sq.offset(dir, 1) else { continue };
            let target = self.piece_at(end);
            if target.is_some_and(|t| t.is(king.color)) {
                continue;
            }
            if !self.scan_from(end, king.color).in_check {
                moves.push(Move::new(sq, end, king, target));
            }
        }
    }
}
