use log::{debug, info, warn};
use smallvec::SmallVec;

use crate::agent::ai::{find_random_move, spawn_search, SearchHandle, SearchStatus};
use crate::config::{GameConfig, GameMode, PlayerConfig, SearchConfig};
use crate::error::{ChessError, Result};
use crate::game_repr::{Color, GameState, Move, Square, Type};

/// What a click did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// First square of a pair stored
    Selected,
    /// Same square clicked twice, selection cleared
    Deselected,
    /// The pair matched a legal move, which was played
    Moved(Move),
    /// The pair matched a promotion; call `choose_promotion`
    PromotionPending,
    /// Input ignored: game over, not a human turn, or a promotion is pending
    Rejected,
}

/// Board controller: the boundary between a front end and the engine.
///
/// Owns the game state and everything a front end needs between frames:
/// the legal moves for the current ply, the click buffer, a pending
/// promotion and at most one background search.
///
/// # Usage
///
/// ```rust,ignore
/// let mut board = Board::new(GameConfig::pvai(Color::White, Difficulty::Medium));
/// board.click(Square::from_algebraic("e2")?)?;
/// board.click(Square::from_algebraic("e4")?)?;
///
/// // once per frame
/// board.start_ai_turn();
/// if let Some(reply) = board.poll_ai() {
///     println!("engine played {reply}");
/// }
/// ```
pub struct Board {
    state: GameState,

    /// Legal moves for the side to move, refreshed after every change
    valid_moves: SmallVec<[Move; 64]>,

    selected: Option<Square>,
    clicks: SmallVec<[Square; 2]>,

    /// (from, to) of a promotion waiting for a piece choice
    pending_promotion: Option<(Square, Square)>,

    config: GameConfig,
    search: Option<SearchHandle>,
    search_seed: Option<u64>,

    /// Set by undo/reset so the engine doesn't immediately replay the
    /// move that was just taken back. Cleared by the next move.
    ai_paused: bool,
}

impl Board {
    pub fn new(config: GameConfig) -> Self {
        Self::with_state(GameState::new(), config)
    }

    pub fn from_fen(fen: &str, config: GameConfig) -> Result<Self> {
        Ok(Self::with_state(GameState::from_fen(fen)?, config))
    }

    fn with_state(state: GameState, config: GameConfig) -> Self {
        let mut board = Self {
            state,
            valid_moves: SmallVec::new(),
            selected: None,
            clicks: SmallVec::new(),
            pending_promotion: None,
            config,
            search: None,
            search_seed: None,
            ai_paused: false,
        };
        board.refresh_moves();
        board
    }

    /// Make every engine search reproducible
    pub fn with_search_seed(mut self, seed: u64) -> Self {
        self.search_seed = Some(seed);
        self
    }

    // ===========================
    // Read access
    // ===========================

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn valid_moves(&self) -> &[Move] {
        &self.valid_moves
    }

    /// Legal moves of the piece on `square`, for highlighting
    pub fn moves_from(&self, square: Square) -> impl Iterator<Item = &Move> + '_ {
        self.valid_moves.iter().filter(move |m| m.start == square)
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn pending_promotion(&self) -> Option<(Square, Square)> {
        self.pending_promotion
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_game_over(&self) -> bool {
        self.state.checkmate() || self.state.stalemate()
    }

    /// End-of-game banner, None while the game is running
    pub fn status_text(&self) -> Option<&'static str> {
        if self.state.stalemate() {
            Some("Stalemate")
        } else if self.state.checkmate() {
            match self.state.side_to_move() {
                Color::White => Some("Black wins by checkmate"),
                Color::Black => Some("White wins by checkmate"),
            }
        } else {
            None
        }
    }

    /// Numbered move list, e.g. "1. e4 e5 2. Nf3"
    pub fn move_log_text(&self) -> String {
        let mut parts = Vec::with_capacity(self.state.move_log().len());
        let mut number = 1;
        let mut white_moved = false;
        for mv in self.state.move_log() {
            match mv.piece_moved.color {
                Color::White => {
                    parts.push(format!("{number}. {mv}"));
                    white_moved = true;
                }
                Color::Black => {
                    if white_moved {
                        parts.push(mv.to_string());
                    } else {
                        parts.push(format!("{number}... {mv}"));
                    }
                    number += 1;
                    white_moved = false;
                }
            }
        }
        parts.join(" ")
    }

    pub fn is_human_turn(&self) -> bool {
        !self.config.player(self.state.side_to_move()).is_ai()
    }

    /// Side drawn at the bottom: the human's side against the engine, the
    /// side to move in a two-player game, white when engines play each other
    pub fn perspective(&self) -> Color {
        match self.config.mode {
            GameMode::PvP => self.state.side_to_move(),
            GameMode::PvAI => self.config.human_color().unwrap_or(Color::White),
            GameMode::AIvAI => Color::White,
        }
    }

    pub fn is_ai_thinking(&self) -> bool {
        self.search.is_some()
    }

    // ===========================
    // Human input
    // ===========================

    /// Handle a click on `square`.
    ///
    /// The first click selects, the second tries the pair against the legal
    /// moves. An illegal pair returns `IllegalMove` and keeps the second
    /// square selected as the start of a new pair.
    pub fn click(&mut self, square: Square) -> Result<ClickOutcome> {
        if self.is_game_over() || self.pending_promotion.is_some() {
            return Ok(ClickOutcome::Rejected);
        }

        if self.selected == Some(square) {
            self.clear_selection();
            return Ok(ClickOutcome::Deselected);
        }

        self.selected = Some(square);
        self.clicks.push(square);
        if self.clicks.len() < 2 {
            return Ok(ClickOutcome::Selected);
        }
        if !self.is_human_turn() {
            self.restart_clicks_at(square);
            return Ok(ClickOutcome::Rejected);
        }

        let (from, to) = (self.clicks[0], self.clicks[1]);
        let Some(mv) = self.valid_moves.iter().copied().find(|m| m.start == from && m.end == to) else {
            let err = ChessError::IllegalMove { from, to };
            debug!("{err}");
            self.restart_clicks_at(square);
            return Err(err);
        };

        self.clear_selection();
        if mv.is_pawn_promotion() {
            self.pending_promotion = Some((from, to));
            return Ok(ClickOutcome::PromotionPending);
        }

        self.apply(mv);
        Ok(ClickOutcome::Moved(mv))
    }

    /// Finish a pending promotion with 'q', 'r', 'b' or 'n' (any case).
    ///
    /// A bad letter keeps the promotion pending so the caller can ask again.
    pub fn choose_promotion(&mut self, choice: char) -> Result<Move> {
        let (from, to) = self.pending_promotion.ok_or(ChessError::NoPendingPromotion)?;
        let Some(piece_type) = Type::from_promotion_char(choice) else {
            debug!("rejected promotion choice {choice:?}");
            return Err(ChessError::InvalidPromotion(choice));
        };

        let mv = self
            .valid_moves
            .iter()
            .copied()
            .find(|m| m.start == from && m.end == to && m.promotion == Some(piece_type))
            .ok_or(ChessError::IllegalMove { from, to })?;

        self.pending_promotion = None;
        self.apply(mv);
        Ok(mv)
    }

    pub fn cancel_promotion(&mut self) {
        self.pending_promotion = None;
    }

    /// Take back one ply. Any running search is dropped.
    pub fn undo(&mut self) -> Result<Move> {
        self.search = None;
        self.pending_promotion = None;
        self.clear_selection();

        let mv = self.state.undo_move().inspect_err(|err| debug!("{err}"))?;
        self.refresh_moves();
        self.ai_paused = true;
        Ok(mv)
    }

    /// Back to the initial position. Any running search is dropped.
    pub fn reset(&mut self) {
        self.search = None;
        self.pending_promotion = None;
        self.clear_selection();
        self.state = GameState::new();
        self.refresh_moves();
        self.ai_paused = true;
    }

    /// Let the engine move again after an undo or reset
    pub fn resume_ai(&mut self) {
        self.ai_paused = false;
    }

    // ===========================
    // Engine turns
    // ===========================

    /// Start a background search if the side to move is engine-controlled.
    /// Returns whether a search was started.
    pub fn start_ai_turn(&mut self) -> bool {
        if self.search.is_some() || self.ai_paused || self.is_game_over() {
            return false;
        }
        let PlayerConfig::Ai { difficulty } = self.config.player(self.state.side_to_move()) else {
            return false;
        };

        let mut config = SearchConfig::from(difficulty);
        config.seed = self.search_seed;
        debug!("starting {} search at depth {}", difficulty.display_name(), config.depth);
        self.search = Some(spawn_search(self.state.clone(), config));
        true
    }

    /// Play the engine's move once it has arrived
    pub fn poll_ai(&mut self) -> Option<Move> {
        let status = self.search.as_ref()?.try_result();
        self.finish_search(status)
    }

    /// Block until the engine answers, then play its move
    pub fn wait_for_ai(&mut self) -> Option<Move> {
        loop {
            let status = self.search.as_ref()?.try_result();
            if status != SearchStatus::Running {
                return self.finish_search(status);
            }
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
    }

    // ===========================
    // Internals
    // ===========================

    /// Consume a status already taken from the channel
    fn finish_search(&mut self, status: SearchStatus) -> Option<Move> {
        let result = match status {
            SearchStatus::Running => return None,
            SearchStatus::Abandoned => {
                self.search = None;
                return None;
            }
            SearchStatus::Done(result) => {
                self.search = None;
                result
            }
        };

        let mv = match result.best_move {
            Some(mv) if self.valid_moves.contains(&mv) => mv,
            _ => {
                warn!("{}, playing a random move", ChessError::SearchProducedNoMove);
                find_random_move(&self.valid_moves, &mut rand::thread_rng())?
            }
        };
        self.apply(mv);
        Some(mv)
    }

    fn apply(&mut self, mv: Move) {
        self.state.make_move(mv);
        self.ai_paused = false;
        self.refresh_moves();

        if let Some(text) = self.status_text() {
            info!("game over after {}: {}", mv, text);
        }
    }

    fn refresh_moves(&mut self) {
        self.valid_moves = SmallVec::from_vec(self.state.get_valid_moves());
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.clicks.clear();
    }

    fn restart_clicks_at(&mut self, square: Square) {
        self.clicks.clear();
        self.clicks.push(square);
        self.selected = Some(square);
    }
}
