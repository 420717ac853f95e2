//! Random self-play.
//!
//! A playout plays random legal moves until both players pass in a row or
//! the turn limit is reached. Players never fill their own eye-like points,
//! so games settle instead of filling the board.

use crate::board::{Board, Coord, Piece};
use crate::config::GameConfig;
use crate::constants::max_game_len;
use crate::rules::check_legal_and_input;
use crate::session::GameSession;
use crate::state::BoardState;

/// Play a random game from an empty board and return the finished session.
pub fn random_game(config: GameConfig, rng: &mut fastrand::Rng) -> GameSession {
    let mut session = GameSession::new(config);
    play_out(&mut session, rng);
    session
}

/// Continue `session` with random moves until it ends.
///
/// Returns the number of turns played, passes included.
pub fn play_out(session: &mut GameSession, rng: &mut fastrand::Rng) -> usize {
    let limit = max_game_len(session.current().board_size());
    let mut turns = 0;

    while !session.is_game_over() && turns < limit {
        turns += 1;
        match choose_random_move(session.current(), rng) {
            Some(pt) => {
                let player = session.active_player();
                // chosen moves are already known to be legal
                if session.attempt_move(pt, player).is_err() {
                    session.pass();
                }
            }
            None => {
                session.pass();
            }
        }
    }
    turns
}

/// Pick a random legal move for the active player that does not fill one of
/// its own eye-like points.
pub fn choose_random_move(state: &BoardState, rng: &mut fastrand::Rng) -> Option<Coord> {
    let player = state.active_player();
    let board = state.board();
    let mut candidates: Vec<Coord> = board
        .coords()
        .filter(|&pt| board.cell_at(pt) == Piece::Empty && !is_eyeish(board, pt, player))
        .collect();

    // Shuffle lazily and stop at the first legal candidate
    let n = candidates.len();
    for i in 0..n {
        let j = rng.usize(i..n);
        candidates.swap(i, j);
        let pt = candidates[i];
        if check_legal_and_input(state, pt, player).is_ok() {
            return Some(pt);
        }
    }
    None
}

/// Whether every on-board neighbor of `pt` is a stone of `color`.
///
/// This also accepts false eyes, which is fine for random play.
fn is_eyeish(board: &Board, pt: Coord, color: Piece) -> bool {
    board.neighbors(pt).all(|n| board.cell_at(n) == color)
}
