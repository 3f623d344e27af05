use super::{Color, Square};

/// Castling rights snapshot, one flag per colour and side.
///
/// A flag only ever goes from true to false while playing forward; undo
/// restores earlier snapshots from the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

impl CastlingRights {
    pub const fn all() -> Self {
        Self {
            white_king_side: true,
            white_queen_side: true,
            black_king_side: true,
            black_queen_side: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            white_king_side: false,
            white_queen_side: false,
            black_king_side: false,
            black_queen_side: false,
        }
    }

    pub fn king_side(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_side,
            Color::Black => self.black_king_side,
        }
    }

    pub fn queen_side(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queen_side,
            Color::Black => self.black_queen_side,
        }
    }

    pub fn revoke_all(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_king_side = false;
                self.white_queen_side = false;
            }
            Color::Black => {
                self.black_king_side = false;
                self.black_queen_side = false;
            }
        }
    }

    /// Revoke the right tied to a rook's home corner, if `square` is one
    pub fn revoke_corner(&mut self, square: Square) {
        match (square.row, square.col) {
            (7, 0) => self.white_queen_side = false,
            (7, 7) => self.white_king_side = false,
            (0, 0) => self.black_queen_side = false,
            (0, 7) => self.black_king_side = false,
            _ => {}
        }
    }

    /// FEN castling field, "-" when no rights remain
    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        if self.white_king_side { out.push('K'); }
        if self.white_queen_side { out.push('Q'); }
        if self.black_king_side { out.push('k'); }
        if self.black_queen_side { out.push('q'); }
        if out.is_empty() {
            out.push('-');
        }
        out
    }

    pub fn from_fen(field: &str) -> Option<Self> {
        let mut rights = Self::none();
        if field == "-" {
            return Some(rights);
        }
        for c in field.chars() {
            match c {
                'K' => rights.white_king_side = true,
                'Q' => rights.white_queen_side = true,
                'k' => rights.black_king_side = true,
                'q' => rights.black_queen_side = true,
                _ => return None,
            }
        }
        Some(rights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_revocation() {
        let mut rights = CastlingRights::all();
        rights.revoke_corner(Square::new(7, 7));
        assert!(!rights.white_king_side);
        assert!(rights.white_queen_side);
        rights.revoke_corner(Square::new(4, 4));
        assert_eq!(rights.to_fen(), "Qkq");
    }

    #[test]
    fn test_fen_field() {
        assert_eq!(CastlingRights::from_fen("Kq"), Some(CastlingRights {
            white_king_side: true,
            white_queen_side: false,
            black_king_side: false,
            black_queen_side: true,
        }));
        assert_eq!(CastlingRights::from_fen("-"), Some(CastlingRights::none()));
        assert_eq!(CastlingRights::from_fen("X"), None);
    }
}
