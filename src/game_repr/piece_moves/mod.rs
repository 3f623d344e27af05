pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;
pub mod castling;

use super::*;

impl GameState {
    /// Moves for every piece of the side to move. Respects pins, ignores
    /// checks and castling.
    pub fn get_all_possible_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.all_moves_into(&mut moves);
        moves
    }

    pub(crate) fn all_moves_into(&self, moves: &mut Vec<Move>) {
        let color = self.side_to_move;
        for sq in Square::all() {
            match self.piece_at(sq) {
                Some(piece) if piece.is(color) => self.piece_moves_into(sq, piece, moves),
                _ => {}
            }
        }
    }

    fn piece_moves_into(&self, sq: Square, piece: Piece, moves: &mut Vec<Move>) {
        match piece.piece_type {
            Type::Pawn => self.pawn_moves_into(sq, moves),
            Type::Knight => self.knight_moves_into(sq, moves),
            Type::Bishop => self.bishop_moves_into(sq, moves),
            Type::Rook => self.rook_moves_into(sq, moves),
            Type::Queen => self.queen_moves_into(sq, moves),
            Type::King => self.king_moves_into(sq, moves),
        }
    }

    /// Walk each ray until the edge, a friendly piece, or a capture
    pub(crate) fn slide_moves_into(&self, sq: Square, directions: &[Direction], moves: &mut Vec<Move>) {
        let Some(piece) = self.piece_at(sq) else { return };
        let pin = self.pin_on(sq);

        for &dir in directions {
            if pin.is_some_and(|p| !p.allows(dir)) {
                continue;
            }
            for i in 1..8 {
                let Some(end) = sq.offset(dir, i) else { break };
                match self.piece_at(end) {
                    None => moves.push(Move::new(sq, end, piece, None)),
                    Some(target) if !target.is(piece.color) => {
                        moves.push(Move::new(sq, end, piece, Some(target)));
                        break;
                    }
                    Some(_) => break,
                }
            }
        }
    }
}
