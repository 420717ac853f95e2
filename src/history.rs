//! Undo stack of prior game states.

use serde::{Deserialize, Serialize};

use crate::state::BoardState;

/// Ordered stack of the states a game has passed through, most recent last.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveHistory {
    states: Vec<BoardState>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the state that was current before the latest transition.
    pub fn record_prior_state(&mut self, prior: BoardState) {
        self.states.push(prior);
    }

    /// Remove and return the most recently recorded state.
    pub fn undo(&mut self) -> Option<BoardState> {
        self.states.pop()
    }

    pub fn peek_last(&self) -> Option<&BoardState> {
        self.states.last()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> &[BoardState] {
        &self.states
    }

    /// True when `current` has exactly the same stones as the most recent
    /// prior state, which only happens after a pass.
    ///
    /// Called before a second pass is played, this signals two passes in a
    /// row and thus the end of the game.
    pub fn detect_double_pass(&self, current: &BoardState) -> bool {
        match self.peek_last() {
            Some(prior) => prior.board() == current.board(),
            None => false,
        }
    }
}

impl From<Vec<BoardState>> for MoveHistory {
    fn from(states: Vec<BoardState>) -> Self {
        Self { states }
    }
}
