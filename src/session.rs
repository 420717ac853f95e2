//! A single game in progress: the current state, its undo history, and
//! game-end tracking.
//!
//! The session owns the only mutable game data. It threads immutable
//! [`BoardState`] values through [`crate::rules`] and records each prior
//! state so moves and passes can be undone.

use log::info;

use crate::board::{Coord, Piece};
use crate::config::GameConfig;
use crate::history::MoveHistory;
use crate::persist::SavedGame;
use crate::rules::{MoveError, check_legal_and_input, pass_turn};
use crate::scoring::{AreaScore, GameResult, calculate_area_score};
use crate::state::BoardState;

#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    current: BoardState,
    history: MoveHistory,
    game_over: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            current: BoardState::new(config.board_size),
            config,
            history: MoveHistory::new(),
            game_over: false,
        }
    }

    /// Start over on an empty board of `board_size`, keeping the komi.
    pub fn new_game(&mut self, board_size: usize) {
        *self = Self::new(GameConfig {
            board_size,
            ..self.config
        });
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn set_komi(&mut self, komi: f32) {
        self.config.komi = komi;
    }

    pub fn current(&self) -> &BoardState {
        &self.current
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn active_player(&self) -> Piece {
        self.current.active_player()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Play `piece` at `coord`. A rejected move changes nothing.
    ///
    /// Once the game is over every move is rejected with
    /// [`MoveError::GameOver`] until [`undo`](Self::undo) reopens it.
    ///
    /// # Panics
    /// Panics if `coord` is off the board.
    pub fn attempt_move(&mut self, coord: Coord, piece: Piece) -> Result<(), MoveError> {
        if self.game_over {
            info!("rejected {piece} at {coord}: game is over");
            return Err(MoveError::GameOver);
        }
        match check_legal_and_input(&self.current, coord, piece) {
            Ok(next) => {
                self.advance(next);
                Ok(())
            }
            Err(e) => {
                info!("rejected {piece} at {coord}: {e}");
                Err(e)
            }
        }
    }

    /// Pass the turn. Returns true if this was the second pass in a row,
    /// which ends the game. Passing in a finished game records nothing.
    pub fn pass(&mut self) -> bool {
        if self.game_over {
            return true;
        }
        if self.history.detect_double_pass(&self.current) {
            self.game_over = true;
            info!("two consecutive passes, game over");
        }
        let next = pass_turn(&self.current);
        self.advance(next);
        self.game_over
    }

    /// Step back one turn. Returns false, changing nothing, when there is no
    /// earlier state.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(prior) => {
                self.current = prior;
                self.game_over = false;
                true
            }
            None => false,
        }
    }

    pub fn score(&self) -> AreaScore {
        calculate_area_score(self.current.board())
    }

    pub fn result(&self) -> GameResult {
        GameResult::new(self.score(), self.config.komi)
    }

    /// Text announcing the result, e.g. "Player 1 wins (45 to 43.5)".
    pub fn game_over_text(&self) -> String {
        self.result().to_string()
    }

    pub fn to_saved(&self) -> SavedGame {
        SavedGame {
            komi: self.config.komi,
            game_over: self.game_over,
            history: self.history.clone(),
            current: self.current.clone(),
        }
    }

    pub fn from_saved(saved: SavedGame) -> Self {
        Self {
            config: GameConfig {
                board_size: saved.current.board_size(),
                komi: saved.komi,
            },
            current: saved.current,
            history: saved.history,
            game_over: saved.game_over,
        }
    }

    fn advance(&mut self, next: BoardState) {
        let prior = std::mem::replace(&mut self.current, next);
        self.history.record_prior_state(prior);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_records_history() {
        let mut session = GameSession::new(GameConfig::with_board_size(9));
        session.attempt_move(Coord::new(2, 2), Piece::Player1).unwrap();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.active_player(), Piece::Player2);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut session = GameSession::new(GameConfig::with_board_size(9));
        let before = session.current().clone();
        assert_eq!(
            session.attempt_move(Coord::new(2, 2), Piece::Player2),
            Err(MoveError::WrongPlayerToMove(Piece::Player2))
        );
        assert_eq!(session.current(), &before);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_two_passes_end_game() {
        let mut session = GameSession::new(GameConfig::with_board_size(5));
        session.attempt_move(Coord::new(2, 2), Piece::Player1).unwrap();
        assert!(!session.pass());
        assert!(session.pass());
        assert!(session.is_game_over());
    }

    #[test]
    fn test_two_passes_at_start_end_game() {
        let mut session = GameSession::new(GameConfig::with_board_size(5));
        assert!(!session.pass());
        assert!(session.pass());
    }

    #[test]
    fn test_pass_move_pass_continues() {
        let mut session = GameSession::new(GameConfig::with_board_size(5));
        session.attempt_move(Coord::new(0, 0), Piece::Player1).unwrap();
        assert!(!session.pass());
        session.attempt_move(Coord::new(4, 4), Piece::Player1).unwrap();
        assert!(!session.pass());
        assert!(!session.is_game_over());
    }

    #[test]
    fn test_undo() {
        let mut session = GameSession::new(GameConfig::with_board_size(5));
        assert!(!session.undo());

        let start = session.current().clone();
        session.attempt_move(Coord::new(1, 1), Piece::Player1).unwrap();
        assert!(session.undo());
        assert_eq!(session.current(), &start);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_undo_reopens_finished_game() {
        let mut session = GameSession::new(GameConfig::with_board_size(5));
        session.pass();
        session.pass();
        assert!(session.is_game_over());
        assert!(session.undo());
        assert!(!session.is_game_over());
    }

    #[test]
    fn test_finished_game_rejects_moves() {
        let mut session = GameSession::new(GameConfig::with_board_size(5));
        session.attempt_move(Coord::new(2, 2), Piece::Player1).unwrap();
        session.pass();
        assert!(session.pass());
        let before = session.current().clone();
        let turns = session.history().len();

        let player = session.active_player();
        assert_eq!(
            session.attempt_move(Coord::new(0, 0), player),
            Err(MoveError::GameOver)
        );
        assert!(session.pass());
        assert_eq!(session.current(), &before);
        assert_eq!(session.history().len(), turns);
        assert!(session.is_game_over());

        // undo reopens play
        assert!(session.undo());
        let player = session.active_player();
        assert!(session.attempt_move(Coord::new(0, 0), player).is_ok());
    }

    #[test]
    fn test_new_game_keeps_komi() {
        let mut session = GameSession::new(GameConfig {
            board_size: 9,
            komi: 0.5,
        });
        session.attempt_move(Coord::new(1, 1), Piece::Player1).unwrap();
        session.new_game(13);
        assert_eq!(session.current().board_size(), 13);
        assert_eq!(session.config().komi, 0.5);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_game_over_text() {
        let mut session = GameSession::new(GameConfig {
            board_size: 3,
            komi: 0.0,
        });
        session.attempt_move(Coord::new(1, 1), Piece::Player1).unwrap();
        assert_eq!(session.game_over_text(), "Player 1 wins (9 to 0)");
    }

    #[test]
    fn test_saved_roundtrip() {
        let mut session = GameSession::new(GameConfig::with_board_size(7));
        session.attempt_move(Coord::new(3, 3), Piece::Player1).unwrap();
        session.pass();

        let restored = GameSession::from_saved(session.to_saved());
        assert_eq!(restored.current(), session.current());
        assert_eq!(restored.history(), session.history());
        assert_eq!(restored.config(), session.config());
        assert_eq!(restored.is_game_over(), session.is_game_over());
    }
}
