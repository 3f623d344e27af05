use super::super::*;

impl GameState {
    pub fn rook_moves_into(&self, sq: Square, moves: &mut Vec<Move>) {
        self.slide_moves_into(sq, &ORTHOGONAL, moves);
    }
}
