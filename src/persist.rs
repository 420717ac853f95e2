//! Saving and restoring a game in progress.
//!
//! A saved game is the whole undo stack plus the current state, written as
//! JSON. Nothing but this crate reads the format.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::history::MoveHistory;
use crate::state::BoardState;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to access saved game: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed saved game: {0}")]
    Json(#[from] serde_json::Error),
    #[error("history entry {index} has board size {found}, expected {expected}")]
    SizeMismatch {
        index: usize,
        found: usize,
        expected: usize,
    },
}

/// Everything needed to resume a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedGame {
    pub komi: f32,
    pub game_over: bool,
    pub history: MoveHistory,
    pub current: BoardState,
}

impl SavedGame {
    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a saved game, checking every state is on the same board size.
    pub fn from_json(s: &str) -> Result<Self, PersistError> {
        let saved: SavedGame = serde_json::from_str(s)?;
        let expected = saved.current.board_size();
        if let Some((index, state)) = saved
            .history
            .states()
            .iter()
            .enumerate()
            .find(|(_, st)| st.board_size() != expected)
        {
            return Err(PersistError::SizeMismatch {
                index,
                found: state.board_size(),
                expected,
            });
        }
        Ok(saved)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PersistError> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}
