//! Board snapshot: stone colors, coordinates, and neighbor queries.
//!
//! The grid is stored as a flat row-major `Vec<Piece>`. Cloning a [`Board`]
//! yields a fully independent snapshot, so two boards never alias.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{EMPTY, MAX_VERTEX_SIZE, STONE_PLAYER1, STONE_PLAYER2};

/// Contents of a single board point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Piece {
    Player1,
    Player2,
    Empty,
}

impl Piece {
    /// The other player. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Piece {
        match self {
            Piece::Player1 => Piece::Player2,
            Piece::Player2 => Piece::Player1,
            Piece::Empty => Piece::Empty,
        }
    }

    pub fn is_stone(self) -> bool {
        self != Piece::Empty
    }

    fn symbol(self) -> char {
        match self {
            Piece::Player1 => STONE_PLAYER1,
            Piece::Player2 => STONE_PLAYER2,
            Piece::Empty => EMPTY,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Player1 => write!(f, "Player 1"),
            Piece::Player2 => write!(f, "Player 2"),
            Piece::Empty => write!(f, "empty"),
        }
    }
}

/// A (row, column) pair, 0-indexed from the top-left corner.
///
/// Ordering is row-major, which keeps coordinate sets deterministic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parse a vertex such as `"D4"` for a board of the given size.
    ///
    /// Columns use letters `A..Z` without `I`; rows are numbered from the
    /// bottom edge starting at 1. Returns `None` for malformed or
    /// off-board vertices.
    pub fn parse_vertex(s: &str, size: usize) -> Option<Coord> {
        if size > MAX_VERTEX_SIZE {
            return None;
        }
        let mut chars = s.trim().chars();
        let col_char = chars.next()?.to_ascii_uppercase();
        if !col_char.is_ascii_uppercase() || col_char == 'I' {
            return None;
        }
        let mut col = (col_char as u8 - b'A') as usize;
        // Skip 'I' column (Go convention to avoid confusion with 'J')
        if col_char > 'I' {
            col -= 1;
        }

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let number: usize = digits.parse().ok()?;
        if number == 0 || number > size || col >= size {
            return None;
        }
        Some(Coord::new(size - number, col))
    }

    /// Format this coordinate as a vertex string (e.g. `"D4"`). Returns
    /// `None` when the point is off the board or the board is too large
    /// for letter columns.
    pub fn to_vertex(self, size: usize) -> Option<String> {
        if size > MAX_VERTEX_SIZE || self.row >= size || self.col >= size {
            return None;
        }
        let mut c = b'A' + self.col as u8;
        if c >= b'I' {
            c += 1;
        }
        Some(format!("{}{}", c as char, size - self.row))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An NxN grid of pieces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Piece>,
}

impl Board {
    /// A board of `size` x `size` empty points.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Piece::Empty; size * size],
        }
    }

    /// Build a board from rows of pieces. Returns `None` unless the rows form
    /// a square grid.
    pub fn from_rows(rows: &[Vec<Piece>]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return None;
        }
        Some(Self {
            size,
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Piece at `coord`.
    ///
    /// # Panics
    /// Panics if `coord` lies outside the board. Validated callers never
    /// produce such a coordinate.
    pub fn cell_at(&self, coord: Coord) -> Piece {
        assert!(
            self.contains(coord),
            "invalid coordinate {coord} on a {0}x{0} board",
            self.size
        );
        self.cells[self.idx(coord)]
    }

    pub fn try_cell_at(&self, coord: Coord) -> Option<Piece> {
        self.contains(coord).then(|| self.cells[self.idx(coord)])
    }

    pub(crate) fn set(&mut self, coord: Coord, piece: Piece) {
        let i = self.idx(coord);
        self.cells[i] = piece;
    }

    pub fn neighbor_above(&self, coord: Coord) -> Option<Coord> {
        (coord.row > 0).then(|| Coord::new(coord.row - 1, coord.col))
    }

    pub fn neighbor_below(&self, coord: Coord) -> Option<Coord> {
        (coord.row + 1 < self.size).then(|| Coord::new(coord.row + 1, coord.col))
    }

    pub fn neighbor_left(&self, coord: Coord) -> Option<Coord> {
        (coord.col > 0).then(|| Coord::new(coord.row, coord.col - 1))
    }

    pub fn neighbor_right(&self, coord: Coord) -> Option<Coord> {
        (coord.col + 1 < self.size).then(|| Coord::new(coord.row, coord.col + 1))
    }

    /// The in-bounds orthogonal neighbors of `coord` (above, below, left, right).
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + use<> {
        [
            self.neighbor_above(coord),
            self.neighbor_below(coord),
            self.neighbor_left(coord),
            self.neighbor_right(coord),
        ]
        .into_iter()
        .flatten()
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }

    /// The grid as a list of rows.
    pub fn rows(&self) -> Vec<Vec<Piece>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.size).map(<[Piece]>::to_vec).collect()
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|&&p| p == piece).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = self.cells[self.idx(Coord::new(row, col))].symbol();
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
