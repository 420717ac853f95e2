//! Immutable game snapshots.
//!
//! A [`BoardState`] is never changed after it is handed out; every move or
//! pass produces a new one (see [`crate::rules`]).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, Coord, Piece};
use crate::constants::MAX_BOARD_SIZE;

/// Reasons a serialized board state is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("grid has {rows} rows but board size is {size}")]
    RowCount { rows: usize, size: usize },
    #[error("grid row {row} has {len} points but board size is {size}")]
    RowLength { row: usize, len: usize, size: usize },
    #[error("active player must be a player, not {0}")]
    NoActivePlayer(Piece),
    #[error("ko point {0} is off the board")]
    KoOffBoard(Coord),
    #[error("board size must be positive")]
    ZeroSize,
    #[error("board size {0} exceeds the maximum of {max}", max = MAX_BOARD_SIZE)]
    TooLarge(usize),
}

/// A full game snapshot: whose turn it is, the grid, and the ko restriction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateRepr", into = "StateRepr")]
pub struct BoardState {
    active_player: Piece,
    board: Board,
    ko_point: Option<Coord>,
}

impl BoardState {
    /// Start of a game: empty board, Player 1 to move, no ko.
    pub fn new(board_size: usize) -> Self {
        Self {
            active_player: Piece::Player1,
            board: Board::new(board_size),
            ko_point: None,
        }
    }

    pub(crate) fn from_parts(active_player: Piece, board: Board, ko_point: Option<Coord>) -> Self {
        debug_assert!(active_player.is_stone());
        Self {
            active_player,
            board,
            ko_point,
        }
    }

    /// The player whose turn it is.
    pub fn active_player(&self) -> Piece {
        self.active_player
    }

    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The point the active player may not play this turn.
    pub fn ko_point(&self) -> Option<Coord> {
        self.ko_point
    }

    pub fn cell_at(&self, coord: Coord) -> Piece {
        self.board.cell_at(coord)
    }

    /// Serialize to the JSON text stored by the persistence layer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}

/// On-disk shape of a [`BoardState`].
#[derive(Serialize, Deserialize)]
struct StateRepr {
    active_player: Piece,
    board_size: usize,
    grid: Vec<Vec<Piece>>,
    ko_point: Option<Coord>,
}

impl From<BoardState> for StateRepr {
    fn from(state: BoardState) -> Self {
        Self {
            active_player: state.active_player,
            board_size: state.board.size(),
            grid: state.board.rows(),
            ko_point: state.ko_point,
        }
    }
}

impl TryFrom<StateRepr> for BoardState {
    type Error = StateError;

    fn try_from(repr: StateRepr) -> Result<Self, Self::Error> {
        let size = repr.board_size;
        if size == 0 {
            return Err(StateError::ZeroSize);
        }
        if size > MAX_BOARD_SIZE {
            return Err(StateError::TooLarge(size));
        }
        if repr.grid.len() != size {
            return Err(StateError::RowCount {
                rows: repr.grid.len(),
                size,
            });
        }
        if let Some((row, r)) = repr.grid.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(StateError::RowLength {
                row,
                len: r.len(),
                size,
            });
        }
        if !repr.active_player.is_stone() {
            return Err(StateError::NoActivePlayer(repr.active_player));
        }
        let board = Board::from_rows(&repr.grid).ok_or(StateError::RowCount {
            rows: repr.grid.len(),
            size,
        })?;
        if let Some(ko) = repr.ko_point {
            if !board.contains(ko) {
                return Err(StateError::KoOffBoard(ko));
            }
        }
        Ok(Self {
            active_player: repr.active_player,
            board,
            ko_point: repr.ko_point,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = BoardState::new(13);
        assert_eq!(state.active_player(), Piece::Player1);
        assert_eq!(state.board_size(), 13);
        assert_eq!(state.ko_point(), None);
        assert_eq!(state.board().count(Piece::Empty), 169);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut board = Board::new(5);
        board.set(Coord::new(0, 1), Piece::Player1);
        board.set(Coord::new(4, 4), Piece::Player2);
        let state = BoardState::from_parts(Piece::Player2, board, Some(Coord::new(2, 3)));

        let json = state.to_json().unwrap();
        assert_eq!(BoardState::from_json(&json).unwrap(), state);
    }

    #[test]
    fn test_json_shape() {
        let state = BoardState::new(2);
        let value: serde_json::Value = serde_json::from_str(&state.to_json().unwrap()).unwrap();
        assert_eq!(value["active_player"], "player1");
        assert_eq!(value["board_size"], 2);
        assert_eq!(value["grid"][1][1], "empty");
        assert!(value["ko_point"].is_null());
    }

    #[test]
    fn test_rejects_mismatched_grid() {
        let json = r#"{"active_player":"player1","board_size":2,"grid":[["empty","empty"]],"ko_point":null}"#;
        assert!(BoardState::from_json(json).is_err());

        let json = r#"{"active_player":"player1","board_size":2,"grid":[["empty","empty"],["empty"]],"ko_point":null}"#;
        assert!(BoardState::from_json(json).is_err());
    }

    #[test]
    fn test_rejects_oversized_board() {
        let json = r#"{"active_player":"player1","board_size":100000,"grid":[],"ko_point":null}"#;
        let err = BoardState::from_json(json).unwrap_err();
        assert!(err.to_string().contains("exceeds the maximum of 25"), "{err}");
    }

    #[test]
    fn test_rejects_empty_active_player() {
        let json = r#"{"active_player":"empty","board_size":1,"grid":[["empty"]],"ko_point":null}"#;
        assert!(BoardState::from_json(json).is_err());
    }

    #[test]
    fn test_rejects_off_board_ko() {
        let json = r#"{"active_player":"player2","board_size":1,"grid":[["empty"]],"ko_point":{"row":1,"col":0}}"#;
        assert!(BoardState::from_json(json).is_err());
    }

    #[test]
    fn test_state_error_messages() {
        let err = StateError::RowLength { row: 1, len: 1, size: 2 };
        assert_eq!(err.to_string(), "grid row 1 has 1 points but board size is 2");
    }
}
