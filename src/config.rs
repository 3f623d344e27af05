//! Game and search configuration.
//!
//! A [`GameConfig`] says who controls each side; an AI side carries a
//! [`Difficulty`] which resolves to a fixed-depth [`SearchConfig`].

use crate::game_repr::Color;

/// Search depth presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Depth 2
    Easy,
    /// Depth 3
    Medium,
    /// Depth 4, the classic setting
    #[default]
    Hard,
    /// Depth 5, noticeably slow in the middlegame
    Expert,
}

impl Difficulty {
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard, Difficulty::Expert]
    }

    /// Plies searched at this level
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
            Difficulty::Expert => 5,
        }
    }

    /// Nearest preset for a requested depth
    pub fn from_depth(depth: u8) -> Self {
        match depth {
            0..=2 => Difficulty::Easy,
            3 => Difficulty::Medium,
            4 => Difficulty::Hard,
            _ => Difficulty::Expert,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

/// Parameters for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Fixed search depth in plies, at least 1
    pub depth: u8,
    /// Seeds the root move shuffle. `None` draws from the thread rng.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::from(Difficulty::default())
    }
}

impl From<Difficulty> for SearchConfig {
    fn from(difficulty: Difficulty) -> Self {
        Self { depth: difficulty.max_depth(), seed: None }
    }
}

impl SearchConfig {
    pub fn with_depth(depth: u8) -> Self {
        Self { depth: depth.max(1), seed: None }
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Configuration for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConfig {
    /// Moves come from `Board::click`
    Human,
    /// Moves come from the search worker
    Ai { difficulty: Difficulty },
}

impl PlayerConfig {
    pub fn is_ai(&self) -> bool {
        matches!(self, PlayerConfig::Ai { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    PvP,
    PvAI,
    AIvAI,
}

/// Who plays which side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    pub white_player: PlayerConfig,
    pub black_player: PlayerConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::pvp()
    }
}

impl GameConfig {
    pub fn pvp() -> Self {
        Self {
            mode: GameMode::PvP,
            white_player: PlayerConfig::Human,
            black_player: PlayerConfig::Human,
        }
    }

    /// Human plays `user_color`, the engine takes the other side
    pub fn pvai(user_color: Color, ai_difficulty: Difficulty) -> Self {
        let ai = PlayerConfig::Ai { difficulty: ai_difficulty };
        let (white_player, black_player) = match user_color {
            Color::White => (PlayerConfig::Human, ai),
            Color::Black => (ai, PlayerConfig::Human),
        };

        Self {
            mode: GameMode::PvAI,
            white_player,
            black_player,
        }
    }

    pub fn aivai(white_difficulty: Difficulty, black_difficulty: Difficulty) -> Self {
        Self {
            mode: GameMode::AIvAI,
            white_player: PlayerConfig::Ai { difficulty: white_difficulty },
            black_player: PlayerConfig::Ai { difficulty: black_difficulty },
        }
    }

    pub fn player(&self, color: Color) -> PlayerConfig {
        match color {
            Color::White => self.white_player,
            Color::Black => self.black_player,
        }
    }

    /// The human's colour in a PvAI game, None otherwise
    pub fn human_color(&self) -> Option<Color> {
        match self.mode {
            GameMode::PvAI => {
                if matches!(self.white_player, PlayerConfig::Human) {
                    Some(Color::White)
                } else {
                    Some(Color::Black)
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pvp_config() {
        let config = GameConfig::pvp();
        assert_eq!(config.mode, GameMode::PvP);
        assert!(!config.player(Color::White).is_ai());
        assert!(!config.player(Color::Black).is_ai());
    }

    #[test]
    fn test_pvai_config_black() {
        let config = GameConfig::pvai(Color::Black, Difficulty::Easy);
        assert_eq!(config.white_player, PlayerConfig::Ai { difficulty: Difficulty::Easy });
        assert_eq!(config.black_player, PlayerConfig::Human);
        assert_eq!(config.human_color(), Some(Color::Black));
    }

    #[test]
    fn test_aivai_config() {
        let config = GameConfig::aivai(Difficulty::Medium, Difficulty::Expert);
        assert_eq!(config.mode, GameMode::AIvAI);
        assert_eq!(config.player(Color::Black), PlayerConfig::Ai { difficulty: Difficulty::Expert });
        assert_eq!(config.human_color(), None);
    }

    #[test]
    fn test_difficulty_depths() {
        let depths: Vec<u8> = Difficulty::all().iter().map(|d| d.max_depth()).collect();
        assert_eq!(depths, vec![2, 3, 4, 5]);
        assert_eq!(SearchConfig::default().depth, 4);
        assert_eq!(SearchConfig::with_depth(0).depth, 1);
        assert_eq!(Difficulty::from_depth(3), Difficulty::Medium);
        assert_eq!(Difficulty::from_depth(9), Difficulty::Expert);
    }
}
