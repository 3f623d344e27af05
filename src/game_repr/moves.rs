use std::fmt;
use std::hash::{Hash, Hasher};

use super::{Piece, Square, Type};

/// One ply, built by the generator from an already-known position.
///
/// Never mutated after construction. Equality only looks at the board
/// transformation (squares plus annotations), so a move assembled from two
/// clicks compares equal to the generated one.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    /// For en passant this is the captured pawn, which does not sit on `end`
    pub piece_captured: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub promotion: Option<Type>,
}

impl Move {
    pub fn new(start: Square, end: Square, piece_moved: Piece, piece_captured: Option<Piece>) -> Self {
        Self {
            start,
            end,
            piece_moved,
            piece_captured,
            is_en_passant: false,
            is_castle: false,
            promotion: None,
        }
    }

    pub fn en_passant(mut self, captured_pawn: Piece) -> Self {
        self.is_en_passant = true;
        self.piece_captured = Some(captured_pawn);
        self
    }

    pub fn castle(mut self) -> Self {
        self.is_castle = true;
        self
    }

    pub fn promote(mut self, piece_type: Type) -> Self {
        self.promotion = Some(piece_type);
        self
    }

    pub fn is_pawn_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Square the captured piece actually stood on
    pub fn capture_square(&self) -> Square {
        if self.is_en_passant {
            Square::new(self.start.row, self.end.col)
        } else {
            self.end
        }
    }

    pub fn is_king_side_castle(&self) -> bool {
        self.is_castle && self.end.col > self.start.col
    }

    /// Coordinate form, e.g. "e2e4" or "e7e8q"
    pub fn chess_notation(&self) -> String {
        let mut out = format!("{}{}", self.start, self.end);
        if let Some(p) = self.promotion {
            out.push(p.letter().to_ascii_lowercase());
        }
        out
    }

    fn key(&self) -> (Square, Square, bool, bool, Option<Type>) {
        (self.start, self.end, self.is_en_passant, self.is_castle, self.promotion)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_castle {
            return f.write_str(if self.is_king_side_castle() { "O-O" } else { "O-O-O" });
        }
        match self.piece_moved.piece_type {
            Type::Pawn => {
                if self.is_capture() {
                    write!(f, "{}x", self.start.file_char())?;
                }
                write!(f, "{}", self.end)?;
                if let Some(p) = self.promotion {
                    write!(f, "={}", p.letter())?;
                }
                Ok(())
            }
            other => {
                let capture = if self.is_capture() { "x" } else { "" };
                write!(f, "{}{}{}", other.letter(), capture, self.end)
            }
        }
    }
}
