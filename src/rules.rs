//! Move validation and execution.
//!
//! This is the only place new game states are made. Every operation borrows
//! the current [`BoardState`] and returns a fresh one, so a rejected move
//! leaves the caller's state exactly as it was.
//!
//! Legality is checked in two phases:
//! - preliminary: turn order, occupied point, ko
//! - after placement and captures: self-capture

use log::debug;
use thiserror::Error;

use crate::board::{Coord, Piece};
use crate::group::{LibertyResult, has_liberties};
use crate::state::BoardState;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The piece played is not the active player
    #[error("illegal move: not {0}'s turn")]
    WrongPlayerToMove(Piece),
    /// Point is not empty
    #[error("illegal move: point not empty")]
    Occupied,
    /// Move retakes a ko
    #[error("illegal move: retakes ko")]
    Ko,
    /// The played group would have no liberties after captures
    #[error("illegal move: self-capture")]
    SelfCapture,
    /// The game has ended; raised by [`crate::session::GameSession`]
    #[error("illegal move: game is over")]
    GameOver,
}

/// Check that `piece` may play at `coord`, then play it.
///
/// On success returns the new state with the stone placed, captured enemy
/// groups removed, the turn passed to the opponent, and the ko point
/// updated.
///
/// # Panics
/// Panics if `coord` is off the board or `piece` is `Empty`.
pub fn check_legal_and_input(
    state: &BoardState,
    coord: Coord,
    piece: Piece,
) -> Result<BoardState, MoveError> {
    check_preliminary(state, coord, piece)?;

    let candidate = apply_move(state, coord, piece);
    if let LibertyResult::NoLiberty(_) = has_liberties(candidate.board(), coord) {
        return Err(MoveError::SelfCapture);
    }
    Ok(candidate)
}

/// Turn order, occupancy and ko; everything that can be decided before the
/// stone is placed.
pub fn check_preliminary(state: &BoardState, coord: Coord, piece: Piece) -> Result<(), MoveError> {
    assert!(piece.is_stone(), "only a player can move, got {piece}");
    if piece != state.active_player() {
        return Err(MoveError::WrongPlayerToMove(piece));
    }
    if state.cell_at(coord) != Piece::Empty {
        return Err(MoveError::Occupied);
    }
    if state.ko_point() == Some(coord) {
        return Err(MoveError::Ko);
    }
    Ok(())
}

/// Place `piece` at `coord` and resolve captures, without any legality check.
///
/// Ko is set only when the move captured exactly one stone in total; the
/// point of that stone becomes forbidden to the opponent for one turn.
pub fn apply_move(state: &BoardState, coord: Coord, piece: Piece) -> BoardState {
    let opponent = piece.opponent();
    let mut board = state.board().clone();
    board.set(coord, piece);

    let mut captured = 0usize;
    let mut last_captured = None;
    for n in board.neighbors(coord) {
        if board.cell_at(n) != opponent {
            continue;
        }
        // Removing as we go means a group touching several sides is only
        // taken once.
        if let LibertyResult::NoLiberty(group) = has_liberties(&board, n) {
            for &stone in &group {
                board.set(stone, Piece::Empty);
            }
            captured += group.len();
            last_captured = group.first().copied();
        }
    }

    let ko_point = if captured == 1 { last_captured } else { None };
    if captured > 0 {
        debug!(
            "{piece} at {coord} captured {captured} stone(s), ko {}",
            ko_point.map_or_else(|| "none".to_string(), |k| k.to_string())
        );
    }

    BoardState::from_parts(opponent, board, ko_point)
}

/// Pass the turn: same grid, other player to move, no ko.
pub fn pass_turn(state: &BoardState) -> BoardState {
    BoardState::from_parts(state.active_player().opponent(), state.board().clone(), None)
}
