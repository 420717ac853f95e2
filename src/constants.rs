//! Constants for board sizes, scoring defaults, and self-play limits.
//!
//! # Board Size Configuration
//!
//! The default board size is controlled by Cargo features:
//! - `board9x9` (default): 9x9 board
//! - `board13x13`: 13x13 board
//! - `board19x19`: 19x19 board
//!
//! The rules themselves accept any positive size; the feature only picks what
//! a new game uses when nothing else is requested.
//! ```sh
//! cargo build                                               # 9x9 (default)
//! cargo build --no-default-features --features board19x19   # 19x19
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN) for new games.
#[cfg(feature = "board9x9")]
pub const DEFAULT_BOARD_SIZE: usize = 9;

#[cfg(feature = "board13x13")]
pub const DEFAULT_BOARD_SIZE: usize = 13;

#[cfg(feature = "board19x19")]
pub const DEFAULT_BOARD_SIZE: usize = 19;

#[cfg(any(
    all(feature = "board9x9", feature = "board13x13"),
    all(feature = "board9x9", feature = "board19x19"),
    all(feature = "board13x13", feature = "board19x19"),
))]
compile_error!("Enable only one of 'board9x9', 'board13x13' or 'board19x19'");

#[cfg(not(any(feature = "board9x9", feature = "board13x13", feature = "board19x19")))]
compile_error!("Must enable exactly one board size feature: 'board9x9', 'board13x13' or 'board19x19'");

/// Board sizes offered to players. Other positive sizes are still legal.
pub const CONVENTIONAL_SIZES: [usize; 3] = [9, 13, 19];

/// Largest board that vertex notation ("A1".."Z25", no 'I') can address.
pub const MAX_VERTEX_SIZE: usize = 25;

/// Largest board a game may be played on.
pub const MAX_BOARD_SIZE: usize = MAX_VERTEX_SIZE;

// =============================================================================
// Scoring
// =============================================================================

/// Default komi (compensation points added to Player 2's area score).
pub const DEFAULT_KOMI: f32 = 7.5;

// =============================================================================
// Self-play
// =============================================================================

/// Random games are cut off after this many turns per board point.
pub const MAX_GAME_LEN_FACTOR: usize = 3;

/// Turn limit for a random game on a board of the given size.
pub const fn max_game_len(size: usize) -> usize {
    size * size * MAX_GAME_LEN_FACTOR
}

// =============================================================================
// Text Rendering
// =============================================================================

/// Player 1 stone.
pub const STONE_PLAYER1: char = 'X';

/// Player 2 stone.
pub const STONE_PLAYER2: char = 'O';

/// Empty point.
pub const EMPTY: char = '.';
