//! Pins, checks and square attacks.
//!
//! Everything here is a ray walk outward from one square: eight sliding
//! directions (orthogonal first) plus the knight jumps. No pseudo-legal
//! generation for the opponent is involved.

use smallvec::SmallVec;

use super::*;

/// A friendly piece that shields its king from an enemy slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    /// Ray from the king through the pinned piece
    pub direction: Direction,
}

impl Pin {
    /// Whether a step along `dir` keeps the piece on the pin line
    pub fn allows(&self, dir: Direction) -> bool {
        dir == self.direction || dir == (-self.direction.0, -self.direction.1)
    }
}

/// An enemy piece giving check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub square: Square,
    /// Ray from the king towards the checker, or the knight offset
    pub direction: Direction,
    pub by_knight: bool,
}

impl Check {
    /// Squares a non-king move may land on to answer this check,
    /// the checker's own square included
    pub fn blocking_squares(&self, king: Square) -> SmallVec<[Square; 8]> {
        let mut squares = SmallVec::new();
        if self.by_knight {
            squares.push(self.square);
            return squares;
        }
        for i in 1..8 {
            let Some(sq) = king.offset(self.direction, i) else { break };
            squares.push(sq);
            if sq == self.square {
                break;
            }
        }
        squares
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinsAndChecks {
    pub in_check: bool,
    pub pins: SmallVec<[Pin; 8]>,
    pub checks: SmallVec<[Check; 2]>,
}

impl GameState {
    /// Analyze the king of the side to move
    pub fn check_for_pins_and_checks(&self) -> PinsAndChecks {
        let ally = self.side_to_move;
        self.scan_from(self.king_square(ally), ally)
    }

    /// True when any piece of `by` attacks `square`. Pawn pushes don't count.
    pub fn square_under_attack(&self, square: Square, by: Color) -> bool {
        self.scan_from(square, by.opposite()).in_check
    }

    /// Walk every ray out of `origin` as if an `ally` king stood there.
    ///
    /// The real `ally` king is transparent, so a king stepping back along a
    /// checking ray is still seen as attacked.
    pub(crate) fn scan_from(&self, origin: Square, ally: Color) -> PinsAndChecks {
        let enemy = ally.opposite();
        let mut result = PinsAndChecks::default();

        for (j, &dir) in ALL_DIRECTIONS.iter().enumerate() {
            let mut possible_pin: Option<Square> = None;
            for i in 1..8 {
                let Some(sq) = origin.offset(dir, i) else { break };
                let Some(piece) = self.piece_at(sq) else { continue };

                if piece.is(ally) {
                    if piece.piece_type == Type::King {
                        continue;
                    }
                    if possible_pin.is_some() {
                        break;
                    }
                    possible_pin = Some(sq);
                    continue;
                }

                let orthogonal = j < 4;
                let attacks = match piece.piece_type {
                    Type::Queen => true,
                    Type::Rook => orthogonal,
                    Type::Bishop => !orthogonal,
                    Type::King => i == 1,
                    // a pawn only hits diagonally forward, towards the origin
                    Type::Pawn => i == 1 && !orthogonal && dir.0 == -enemy.pawn_direction(),
                    Type::Knight => false,
                };
                if attacks {
                    match possible_pin {
                        None => {
                            result.in_check = true;
                            result.checks.push(Check { square: sq, direction: dir, by_knight: false });
                        }
                        Some(pinned) => result.pins.push(Pin { square: pinned, direction: dir }),
                    }
                }
                break;
            }
        }

        for &offset in KNIGHT_OFFSETS.iter() {
            let Some(sq) = origin.offset(offset, 1) else { continue };
            if self.piece_at(sq) == Some(Piece::new(enemy, Type::Knight)) {
                result.in_check = true;
                result.checks.push(Check { square: sq, direction: offset, by_knight: true });
            }
        }

        result
    }

    /// Pin on the piece standing at `square`, from the last analysis
    pub(crate) fn pin_on(&self, square: Square) -> Option<Pin> {
        self.analysis.pins.iter().copied().find(|pin| pin.square == square)
    }
}
