//! Group and liberty analysis.
//!
//! A group is a maximal set of same-colored stones connected orthogonally.
//! The search walks the group with an explicit stack, so its depth is bounded
//! by the heap rather than the call stack even on very large boards.

use std::collections::BTreeSet;

use crate::board::{Board, Coord, Piece};

/// Outcome of a liberty search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LibertyResult {
    /// The group touches at least one empty point. Its members are not listed.
    HasLiberty,
    /// The group has no liberties; these are all of its stones.
    NoLiberty(BTreeSet<Coord>),
}

impl LibertyResult {
    pub fn has_liberty(&self) -> bool {
        matches!(self, LibertyResult::HasLiberty)
    }
}

/// Decide whether the group containing `start` has at least one liberty.
///
/// The search stops at the first empty neighbor found anywhere in the group.
/// Only when every stone has been visited without finding one is the full
/// group returned, ready to be captured.
///
/// An empty `start` point is itself a liberty and answers `HasLiberty`.
pub fn has_liberties(board: &Board, start: Coord) -> LibertyResult {
    let color = board.cell_at(start);
    if color == Piece::Empty {
        return LibertyResult::HasLiberty;
    }

    let size = board.size();
    let mut visited = vec![false; size * size];
    let mut stack = vec![start];
    let mut group = BTreeSet::new();
    visited[start.row * size + start.col] = true;

    while let Some(pt) = stack.pop() {
        group.insert(pt);
        for n in board.neighbors(pt) {
            match board.cell_at(n) {
                Piece::Empty => return LibertyResult::HasLiberty,
                c if c == color => {
                    let i = n.row * size + n.col;
                    if !visited[i] {
                        visited[i] = true;
                        stack.push(n);
                    }
                }
                _ => {}
            }
        }
    }
    LibertyResult::NoLiberty(group)
}
