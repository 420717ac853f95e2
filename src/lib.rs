//! Goban-Rules: a rules engine for the game of Go.
//!
//! Given a board state and a proposed move, the engine decides legality,
//! removes captured stones, tracks the ko restriction, and computes area
//! scores at the end of the game. Every state is an immutable value; moves
//! and passes produce new states.
//!
//! ## Modules
//!
//! - [`constants`] - Default board size, komi and self-play limits
//! - [`config`] - Runtime game settings
//! - [`board`] - Pieces, coordinates and the board grid
//! - [`group`] - Group and liberty analysis
//! - [`state`] - Immutable game snapshots
//! - [`rules`] - Move validation and execution
//! - [`history`] - Undo stack and double-pass detection
//! - [`scoring`] - Area scoring
//! - [`session`] - A game in progress
//! - [`persist`] - Saving and restoring games as JSON
//! - [`playout`] - Random self-play
//! - [`console`] - Line-oriented text front-end
//!
//! ## Example
//!
//! ```
//! use goban_rules::board::{Coord, Piece};
//! use goban_rules::rules::check_legal_and_input;
//! use goban_rules::state::BoardState;
//!
//! let state = BoardState::new(9);
//! let next = check_legal_and_input(&state, Coord::new(4, 4), Piece::Player1).unwrap();
//! assert_eq!(next.active_player(), Piece::Player2);
//! assert_eq!(next.cell_at(Coord::new(4, 4)), Piece::Player1);
//! ```

pub mod board;
pub mod config;
pub mod console;
pub mod constants;
pub mod group;
pub mod history;
pub mod persist;
pub mod playout;
pub mod rules;
pub mod scoring;
pub mod session;
pub mod state;
