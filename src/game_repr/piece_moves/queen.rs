use super::super::*;

impl GameState {
    pub fn queen_moves_into(&self, sq: Square, moves: &mut Vec<Move>) {
        self.bishop_moves_into(sq, moves);
        self.rook_moves_into(sq, moves);
    }
}
