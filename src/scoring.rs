//! Area scoring.
//!
//! A player's area is the number of their stones on the board plus every
//! empty point in a region bordered only by their stones. Regions touching
//! both colors (or neither) are dame and count for nobody.

use std::fmt;

use crate::board::{Board, Coord, Piece};

/// Area totals for both players, before komi.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AreaScore {
    pub player1: u32,
    pub player2: u32,
}

impl AreaScore {
    pub fn total(&self) -> u32 {
        self.player1 + self.player2
    }

    fn add(&mut self, piece: Piece, points: u32) {
        match piece {
            Piece::Player1 => self.player1 += points,
            Piece::Player2 => self.player2 += points,
            Piece::Empty => {}
        }
    }
}

/// A maximal connected set of empty points and the colors bordering it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmptyRegion {
    pub points: Vec<Coord>,
    pub borders_player1: bool,
    pub borders_player2: bool,
}

impl EmptyRegion {
    /// The player owning this region, if exactly one color borders it.
    pub fn owner(&self) -> Option<Piece> {
        match (self.borders_player1, self.borders_player2) {
            (true, false) => Some(Piece::Player1),
            (false, true) => Some(Piece::Player2),
            _ => None,
        }
    }
}

/// Score every point of `board`.
pub fn calculate_area_score(board: &Board) -> AreaScore {
    let size = board.size();
    let mut score = AreaScore::default();
    let mut attributed = vec![false; size * size];

    for pt in board.coords() {
        match board.cell_at(pt) {
            Piece::Empty => {
                if attributed[pt.row * size + pt.col] {
                    continue;
                }
                let region = flood_empty_region(board, pt, &mut attributed);
                if let Some(owner) = region.owner() {
                    score.add(owner, region.points.len() as u32);
                }
            }
            stone => score.add(stone, 1),
        }
    }
    score
}

/// Collect the empty region containing `start`, marking each point in
/// `visited` (a row-major flag per board point).
///
/// # Panics
/// Panics if `start` is not empty.
pub fn flood_empty_region(board: &Board, start: Coord, visited: &mut [bool]) -> EmptyRegion {
    assert_eq!(board.cell_at(start), Piece::Empty, "flood fill must start on an empty point");
    let size = board.size();
    let mut region = EmptyRegion {
        points: Vec::new(),
        borders_player1: false,
        borders_player2: false,
    };
    let mut stack = vec![start];
    visited[start.row * size + start.col] = true;

    while let Some(pt) = stack.pop() {
        region.points.push(pt);
        for n in board.neighbors(pt) {
            match board.cell_at(n) {
                Piece::Empty => {
                    let i = n.row * size + n.col;
                    if !visited[i] {
                        visited[i] = true;
                        stack.push(n);
                    }
                }
                Piece::Player1 => region.borders_player1 = true,
                Piece::Player2 => region.borders_player2 = true,
            }
        }
    }
    region
}

/// Final outcome of a game: area totals plus komi for Player 2.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GameResult {
    pub score: AreaScore,
    pub komi: f32,
}

impl GameResult {
    pub fn new(score: AreaScore, komi: f32) -> Self {
        Self { score, komi }
    }

    pub fn player1_total(&self) -> f32 {
        self.score.player1 as f32
    }

    pub fn player2_total(&self) -> f32 {
        self.score.player2 as f32 + self.komi
    }

    /// The winning player, or `None` on a draw.
    pub fn winner(&self) -> Option<Piece> {
        let (p1, p2) = (self.player1_total(), self.player2_total());
        if p1 > p2 {
            Some(Piece::Player1)
        } else if p2 > p1 {
            Some(Piece::Player2)
        } else {
            None
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(p) => write!(f, "{p} wins")?,
            None => write!(f, "It's a draw")?,
        }
        write!(f, " ({} to {})", self.player1_total(), self.player2_total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(text: &[&str]) -> Board {
        let rows: Vec<Vec<Piece>> = text
            .iter()
            .map(|line| {
                line.chars()
                    .map(|ch| match ch {
                        'X' => Piece::Player1,
                        'O' => Piece::Player2,
                        _ => Piece::Empty,
                    })
                    .collect()
            })
            .collect();
        Board::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_empty_board_scores_nothing() {
        let score = calculate_area_score(&Board::new(9));
        assert_eq!(score, AreaScore::default());
    }

    #[test]
    fn test_single_stone_owns_the_board() {
        let board = board_from(&["...", ".X.", "..."]);
        assert_eq!(
            calculate_area_score(&board),
            AreaScore {
                player1: 9,
                player2: 0
            }
        );
    }

    #[test]
    fn test_split_board() {
        // left two columns are Player 1's, right two Player 2's, middle is a wall
        let board = board_from(&["..XO.", "..XO.", "..XO.", "..XO.", "..XO."]);
        let score = calculate_area_score(&board);
        assert_eq!(score.player1, 15);
        assert_eq!(score.player2, 10);
    }

    #[test]
    fn test_dame_counts_for_nobody() {
        let board = board_from(&["X.O", "X.O", "X.O"]);
        let score = calculate_area_score(&board);
        assert_eq!(score.player1, 3);
        assert_eq!(score.player2, 3);
    }

    #[test]
    fn test_regions_are_counted_once() {
        let board = board_from(&["....", ".X..", "....", "...."]);
        let score = calculate_area_score(&board);
        assert_eq!(score.player1, 16);
        assert_eq!(score.total(), 16);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let board = board_from(&["XX.O.", "X.XO.", ".XO..", "XXO.O", "..O.."]);
        assert_eq!(calculate_area_score(&board), calculate_area_score(&board));
    }

    #[test]
    fn test_flood_region_borders() {
        let board = board_from(&["X.O", "XXO", "..."]);
        let mut visited = vec![false; 9];
        let region = flood_empty_region(&board, Coord::new(0, 1), &mut visited);
        assert_eq!(region.points, vec![Coord::new(0, 1)]);
        assert!(region.borders_player1 && region.borders_player2);
        assert_eq!(region.owner(), None);

        let region = flood_empty_region(&board, Coord::new(2, 0), &mut visited);
        assert_eq!(region.points.len(), 3);
        assert!(visited[6] && visited[7] && visited[8]);
    }

    #[test]
    fn test_winner_with_komi() {
        let score = AreaScore {
            player1: 45,
            player2: 36,
        };
        let result = GameResult::new(score, 7.5);
        assert_eq!(result.winner(), Some(Piece::Player1));
        assert_eq!(result.to_string(), "Player 1 wins (45 to 43.5)");

        let result = GameResult::new(score, 9.5);
        assert_eq!(result.winner(), Some(Piece::Player2));

        let result = GameResult::new(score, 9.0);
        assert_eq!(result.winner(), None);
        assert_eq!(result.to_string(), "It's a draw (45 to 45)");
    }
}
