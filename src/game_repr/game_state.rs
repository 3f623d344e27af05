use std::fmt;
use std::ops::{Deref, DerefMut};

use super::*;
use crate::error::{ChessError, Result};

/*
 * MODULE IS RESPONSIBLE FOR
 * BOARD STATE AND MAKE/UNDO
 */

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub type Grid = [[Option<Piece>; 8]; 8];

/// Authoritative game state.
///
/// Only `make_move` / `undo_move` mutate the grid during play. The three
/// history stacks always have the same length.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Grid,
    pub(crate) side_to_move: Color,
    /// Indexed by `Color::index`
    pub(crate) king_squares: [Square; 2],
    pub(crate) en_passant: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) move_log: Vec<Move>,
    pub(crate) castling_log: Vec<CastlingRights>,
    pub(crate) en_passant_log: Vec<Option<Square>>,
    /// Analyzer output for the current ply, reset on make/undo
    pub(crate) analysis: PinsAndChecks,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        let mut board: Grid = [[None; 8]; 8];
        let back = [Type::Rook, Type::Knight, Type::Bishop, Type::Queen, Type::King, Type::Bishop, Type::Knight, Type::Rook];
        for (col, &piece_type) in back.iter().enumerate() {
            board[0][col] = Some(Piece::new(Color::Black, piece_type));
            board[1][col] = Some(Piece::new(Color::Black, Type::Pawn));
            board[6][col] = Some(Piece::new(Color::White, Type::Pawn));
            board[7][col] = Some(Piece::new(Color::White, piece_type));
        }
        Self::from_parts(board, Color::White, CastlingRights::all(), None)
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board with no pieces, white to move, no castling rights
    pub fn empty() -> Self {
        Self::from_parts([[None; 8]; 8], Color::White, CastlingRights::none(), None)
    }

    fn from_parts(board: Grid, side_to_move: Color, castling_rights: CastlingRights, en_passant: Option<Square>) -> Self {
        let mut state = Self {
            board,
            side_to_move,
            king_squares: [Square::new(7, 4), Square::new(0, 4)],
            en_passant,
            castling_rights,
            move_log: Vec::new(),
            castling_log: Vec::new(),
            en_passant_log: Vec::new(),
            analysis: PinsAndChecks::default(),
            checkmate: false,
            stalemate: false,
        };
        for sq in Square::all() {
            if let Some(Piece { color, piece_type: Type::King }) = state.piece_at(sq) {
                state.king_squares[color.index()] = sq;
            }
        }
        state
    }

    /// Parse a FEN string. Halfmove and fullmove counters are accepted and ignored.
    pub fn from_fen(fen: &str) -> Result<GameState> {
        let bad = |why: &str| ChessError::InvalidFen(format!("{why}: {fen:?}"));
        let mut parts = fen.split_whitespace();

        let placement = parts.next().ok_or_else(|| bad("empty"))?;
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(bad("expected 8 ranks"));
        }

        let mut board: Grid = [[None; 8]; 8];
        let mut kings = [0usize; 2];
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(bad("bad empty-square count"));
                    }
                    col += skip as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or_else(|| bad("unknown piece letter"))?;
                    if col >= 8 {
                        return Err(bad("rank too long"));
                    }
                    if piece.piece_type == Type::King {
                        kings[piece.color.index()] += 1;
                    }
                    board[row][col] = Some(piece);
                    col += 1;
                }
                if col > 8 {
                    return Err(bad("rank too long"));
                }
            }
            if col != 8 {
                return Err(bad("rank too short"));
            }
        }
        if kings != [1, 1] {
            return Err(bad("each side needs exactly one king"));
        }

        let side_to_move = match parts.next().unwrap_or("w") {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(bad("side to move must be w or b")),
        };

        let castling_rights = CastlingRights::from_fen(parts.next().unwrap_or("-"))
            .ok_or_else(|| bad("bad castling field"))?;

        let en_passant = match parts.next().unwrap_or("-") {
            "-" => None,
            text => Some(Square::from_algebraic(text).map_err(|_| bad("bad en passant square"))?),
        };

        let mut state = Self::from_parts(board, side_to_move, castling_rights, en_passant);
        state.drop_unbacked_castling_rights();
        Ok(state)
    }

    /// Rights are only kept while king and rook still stand on their home squares
    fn drop_unbacked_castling_rights(&mut self) {
        for color in [Color::White, Color::Black] {
            let row = color.back_row();
            let home = |col: u8, piece_type: Type| self.piece_at(Square::new(row, col)) == Some(Piece::new(color, piece_type));
            let king_home = home(4, Type::King);
            let king_rook = king_home && home(7, Type::Rook);
            let queen_rook = king_home && home(0, Type::Rook);
            if !king_rook {
                self.castling_rights.revoke_corner(Square::new(row, 7));
            }
            if !queen_rook {
                self.castling_rights.revoke_corner(Square::new(row, 0));
            }
        }
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for (row, rank) in self.board.iter().enumerate() {
            let mut empty = 0;
            for square in rank {
                match square {
                    None => empty += 1,
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_char());
                    }
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }

        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self.en_passant.map_or_else(|| "-".to_string(), |sq| sq.to_string());
        fen.push_str(&format!(" {} {} {} 0 1", side, self.castling_rights.to_fen(), ep));
        fen
    }

    // ==================== ACCESSORS ====================

    pub fn board(&self) -> &Grid {
        &self.board
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.row as usize][square.col as usize]
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    /// Check flag from the last analyzer run
    pub fn in_check(&self) -> bool {
        self.analysis.in_check
    }

    pub fn pins(&self) -> &[Pin] {
        &self.analysis.pins
    }

    pub fn checks(&self) -> &[Check] {
        &self.analysis.checks
    }

    /// Valid only right after `get_valid_moves`
    pub fn checkmate(&self) -> bool {
        self.checkmate
    }

    /// Valid only right after `get_valid_moves`
    pub fn stalemate(&self) -> bool {
        self.stalemate
    }

    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.row as usize][square.col as usize] = piece;
    }

    /// Setup helper: put a piece on the board outside of play
    pub(crate) fn place_piece(&mut self, square: Square, piece: Piece) {
        self.set(square, Some(piece));
        if piece.piece_type == Type::King {
            self.king_squares[piece.color.index()] = square;
        }
    }

    fn reset_analysis(&mut self) {
        self.analysis = PinsAndChecks::default();
        self.checkmate = false;
        self.stalemate = false;
    }

    // ==================== MAKE / UNDO ====================

    /// Apply a move produced by the generator. No validation happens here.
    pub fn make_move(&mut self, mv: Move) {
        let color = mv.piece_moved.color;

        self.castling_log.push(self.castling_rights);
        self.en_passant_log.push(self.en_passant);

        self.set(mv.start, None);
        self.set(mv.end, Some(mv.piece_moved));

        if mv.piece_moved.piece_type == Type::King {
            self.king_squares[color.index()] = mv.end;
        }

        if mv.is_en_passant {
            self.set(mv.capture_square(), None);
        }

        self.en_passant = if mv.piece_moved.piece_type == Type::Pawn && mv.start.row.abs_diff(mv.end.row) == 2 {
            Some(Square::new((mv.start.row + mv.end.row) / 2, mv.start.col))
        } else {
            None
        };

        if let Some(promoted) = mv.promotion {
            self.set(mv.end, Some(Piece::new(color, promoted)));
        }

        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(&mv);
            let rook = self.piece_at(rook_from);
            self.set(rook_from, None);
            self.set(rook_to, rook);
        }

        if mv.piece_moved.piece_type == Type::King {
            self.castling_rights.revoke_all(color);
        }
        // anything leaving or landing on a corner means that rook moved or was taken
        self.castling_rights.revoke_corner(mv.start);
        self.castling_rights.revoke_corner(mv.end);

        self.move_log.push(mv);
        self.side_to_move = color.opposite();
        self.reset_analysis();
    }

    /// Take back the last move, returning it
    pub fn undo_move(&mut self) -> Result<Move> {
        let mv = self.move_log.pop().ok_or(ChessError::NothingToUndo)?;
        let color = mv.piece_moved.color;

        self.set(mv.start, Some(mv.piece_moved));
        if mv.is_en_passant {
            self.set(mv.end, None);
            self.set(mv.capture_square(), mv.piece_captured);
        } else {
            self.set(mv.end, mv.piece_captured);
        }

        if mv.piece_moved.piece_type == Type::King {
            self.king_squares[color.index()] = mv.start;
        }

        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(&mv);
            let rook = self.piece_at(rook_to);
            self.set(rook_to, None);
            self.set(rook_from, rook);
        }

        if let Some(rights) = self.castling_log.pop() {
            self.castling_rights = rights;
        }
        if let Some(ep) = self.en_passant_log.pop() {
            self.en_passant = ep;
        }

        self.side_to_move = color;
        self.reset_analysis();
        Ok(mv)
    }
}

/// Text diagram, white at the bottom
impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, rank) in self.board.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for square in rank {
                write!(f, " {}", square.map_or('.', |p| p.to_char()))?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

/// Rook (from, to) for a castling move
fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let row = mv.end.row;
    if mv.is_king_side_castle() {
        (Square::new(row, 7), Square::new(row, mv.end.col - 1))
    } else {
        (Square::new(row, 0), Square::new(row, mv.end.col + 1))
    }
}

/// Plays a move for the lifetime of the guard and takes it back on drop.
///
/// The analyzer output of the probed-from ply is restored too, so nothing
/// outside the guard ever sees the intermediate position.
pub(crate) struct ProbeGuard<'a> {
    state: &'a mut GameState,
    saved: (PinsAndChecks, bool, bool),
}

impl<'a> ProbeGuard<'a> {
    pub(crate) fn new(state: &'a mut GameState, mv: Move) -> Self {
        let saved = (state.analysis.clone(), state.checkmate, state.stalemate);
        state.make_move(mv);
        Self { state, saved }
    }
}

impl Deref for ProbeGuard<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.state
    }
}

impl DerefMut for ProbeGuard<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        self.state
    }
}

impl Drop for ProbeGuard<'_> {
    fn drop(&mut self) {
        // the guard made exactly one move, so the history is never empty here
        let _ = self.state.undo_move();
        let (analysis, checkmate, stalemate) = std::mem::take(&mut self.saved);
        self.state.analysis = analysis;
        self.state.checkmate = checkmate;
        self.state.stalemate = stalemate;
    }
}
