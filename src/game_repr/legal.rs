use super::*;

impl GameState {
    /// Fully legal moves for the side to move.
    ///
    /// Refreshes the pin/check analysis and the checkmate and stalemate
    /// flags as a side effect. The position itself is left unchanged.
    pub fn get_valid_moves(&mut self) -> Vec<Move> {
        self.analysis = self.check_for_pins_and_checks();
        let color = self.side_to_move;
        let king = self.king_square(color);

        let mut moves = Vec::with_capacity(64);
        match self.analysis.checks.as_slice() {
            [] => {
                self.all_moves_into(&mut moves);
                self.castle_moves_into(king, &mut moves);
            }
            [check] => {
                let check = *check;
                let blocks = check.blocking_squares(king);
                self.all_moves_into(&mut moves);
                moves.retain(|mv| {
                    mv.piece_moved.piece_type == Type::King
                        || blocks.contains(&mv.end)
                        || (mv.is_en_passant && mv.capture_square() == check.square)
                });
            }
            // double check, only the king can answer
            _ => self.king_moves_into(king, &mut moves),
        }

        // en passant empties two squares on one rank, which the pin scan can't see
        let mut legal = Vec::with_capacity(moves.len());
        for mv in moves {
            if mv.is_en_passant && !self.en_passant_is_safe(mv) {
                continue;
            }
            legal.push(mv);
        }

        let no_moves = legal.is_empty();
        self.checkmate = no_moves && self.analysis.in_check;
        self.stalemate = no_moves && !self.analysis.in_check;
        legal
    }

    fn en_passant_is_safe(&mut self, mv: Move) -> bool {
        let color = mv.piece_moved.color;
        let probe = ProbeGuard::new(self, mv);
        !probe.square_under_attack(probe.king_square(color), color.opposite())
    }

    /// Count leaf nodes of the legal move tree
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.get_valid_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .into_iter()
            .map(|mv| ProbeGuard::new(self, mv).perft(depth - 1))
            .sum()
    }

    /// Per-root-move perft counts, in generation order
    pub fn perft_divide(&mut self, depth: u32) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        let moves = self.get_valid_moves();
        moves
            .into_iter()
            .map(|mv| (mv, ProbeGuard::new(self, mv).perft(depth - 1)))
            .collect()
    }
}
