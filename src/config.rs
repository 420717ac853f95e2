//! Runtime game settings.

use thiserror::Error;

use crate::constants::{CONVENTIONAL_SIZES, DEFAULT_BOARD_SIZE, DEFAULT_KOMI, MAX_BOARD_SIZE};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("board size must be positive")]
    ZeroBoardSize,
    #[error("board size {0} exceeds the maximum of {max}", max = MAX_BOARD_SIZE)]
    BoardTooLarge(usize),
    #[error("komi must be a finite number, got {0}")]
    InvalidKomi(f32),
}

/// Settings chosen when a game starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub board_size: usize,
    /// Added to Player 2's area score when deciding the winner.
    pub komi: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            komi: DEFAULT_KOMI,
        }
    }
}

impl GameConfig {
    pub fn with_board_size(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::ZeroBoardSize);
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge(self.board_size));
        }
        if !self.komi.is_finite() {
            return Err(ConfigError::InvalidKomi(self.komi));
        }
        Ok(())
    }

    /// Whether the size is one of the usual 9, 13 or 19.
    pub fn is_conventional(&self) -> bool {
        CONVENTIONAL_SIZES.contains(&self.board_size)
    }
}
