//! Game configuration.
//!
//! Loaded from JSON; every field has a default so a partial file is valid.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Colour, Palette};
use crate::goal::GoalError;

/// Deepest supported board.
pub const MAX_SUPPORTED_DEPTH: u8 = 10;

/// Errors that can occur while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("palette is empty")]
    EmptyPalette,

    #[error("palette lists {0} more than once")]
    DuplicateColour(Colour),

    #[error("max depth {0} exceeds the supported maximum of {max}", max = MAX_SUPPORTED_DEPTH)]
    DepthTooLarge(u8),

    #[error("board size {size} is not divisible into 2^{max_depth} unit cells")]
    BoardSize { size: u32, max_depth: u8 },

    #[error("no players configured")]
    NoPlayers,

    #[error(transparent)]
    Goals(#[from] GoalError),
}

/// Settings for one game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the root block.
    pub board_size: u32,
    /// Depth of unit cells.
    pub max_depth: u8,
    pub palette: Palette,
    pub random_players: usize,
    /// Trial budget of each greedy player, in creation order.
    pub smart_players: Vec<usize>,
    pub max_turns: usize,
    /// RNG seed, 0 for entropy.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: 512,
            max_depth: 3,
            palette: Palette::default(),
            random_players: 1,
            smart_players: vec![3],
            max_turns: 20,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Reads and validates a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parses and validates a JSON configuration string.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn num_players(&self) -> usize {
        self.random_players + self.smart_players.len()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if let Some(colour) = self.palette.first_duplicate() {
            return Err(ConfigError::DuplicateColour(colour));
        }
        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(ConfigError::DepthTooLarge(self.max_depth));
        }
        let cells = 1u32 << self.max_depth;
        if self.board_size == 0 || self.board_size % cells != 0 {
            return Err(ConfigError::BoardSize {
                size: self.board_size,
                max_depth: self.max_depth,
            });
        }
        let players = self.num_players();
        if players == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if players > self.palette.len() {
            return Err(GoalError::NotEnoughColours {
                requested: players,
                available: self.palette.len(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::colour::{NamedColour, REAL_RED};

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{"max_depth": 4, "seed": 42}"#).unwrap();
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.seed, 42);
        assert_eq!(config.board_size, 512);
        assert_eq!(config.palette, Palette::default());
    }

    #[test]
    fn rejects_bad_board_size() {
        let config = GameConfig { board_size: 100, ..GameConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::BoardSize { size: 100, max_depth: 3 })));
    }

    #[test]
    fn rejects_deep_boards() {
        let config = GameConfig { max_depth: 11, board_size: 1 << 11, ..GameConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::DepthTooLarge(11))));
    }

    #[test]
    fn rejects_duplicate_palette_colours() {
        let red = |name: &str| NamedColour { name: name.to_string(), rgb: REAL_RED };
        let config = GameConfig {
            palette: Palette::new(vec![red("a"), red("b")]),
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::DuplicateColour(c)) if c == REAL_RED));
    }

    #[test]
    fn rejects_more_players_than_colours() {
        let config = GameConfig { random_players: 3, smart_players: vec![1, 2], ..GameConfig::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Goals(GoalError::NotEnoughColours { requested: 5, available: 4 }))
        ));
    }

    #[test]
    fn rejects_empty_game() {
        let config = GameConfig { random_players: 0, smart_players: vec![], ..GameConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::NoPlayers)));
        let empty = GameConfig { palette: Palette::new(vec![]), ..GameConfig::default() };
        assert!(matches!(empty.validate(), Err(ConfigError::EmptyPalette)));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(GameConfig::from_json("{"), Err(ConfigError::Json(_))));
    }
}
