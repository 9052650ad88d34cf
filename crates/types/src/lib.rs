//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Geometry
//!
//! The board is a square `dimension x dimension` grid addressed by [`Coord`]:
//!
//! - **row**: 0 is the top row
//! - **col**: 0 is the leftmost column
//! - **dimension**: between [`MIN_DIMENSION`] and [`MAX_DIMENSION`], default [`DEFAULT_DIMENSION`]
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `QUEUE_DELAY_MS` | 300 | Minimum gap between two board-changing moves |
//! | `ANIMATION_MS` | 120 | Highlight duration for moved/merged/inserted tiles |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Cell, Coord, Direction};
//!
//! let dir = Direction::from_str("LEFT").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.as_str(), "left");
//!
//! assert_eq!(Cell::Tile(8).value(), Some(8));
//! assert!(Cell::Empty.is_empty());
//!
//! let c = Coord::new(1, 2);
//! assert_eq!((c.row, c.col), (1, 2));
//! ```

/// Default board dimension (classic 4x4)
pub const DEFAULT_DIMENSION: usize = 4;

/// Smallest supported board dimension
pub const MIN_DIMENSION: usize = 2;

/// Largest supported board dimension.
///
/// Lines are processed in fixed-capacity stack buffers of this size.
pub const MAX_DIMENSION: usize = 16;

/// Default winning tile value
pub const DEFAULT_THRESHOLD: u32 = 2048;

/// Smallest accepted winning tile value
pub const MIN_THRESHOLD: u32 = 8;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Debounce between two board-changing moves (300ms)
pub const QUEUE_DELAY_MS: u32 = 300;

/// Maximum number of move commands waiting in the queue
pub const MAX_PENDING_MOVES: usize = 100;

/// Highlight duration for tiles touched by the last move (120ms)
pub const ANIMATION_MS: u32 = 120;

/// Number of tiles placed on an empty board when a game starts
pub const STARTING_TILES: usize = 2;

/// Value of the tiles placed at game start and, usually, after each move
pub const BASE_TILE_VALUE: u32 = 2;

/// A new tile is a 4 once every `FOUR_TILE_ODDS` insertions on average
pub const FOUR_TILE_ODDS: u32 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_defaults() {
        assert_eq!(DEFAULT_DIMENSION, 4);
        assert_eq!(DEFAULT_THRESHOLD, 2048);
        assert_eq!(QUEUE_DELAY_MS, 300);
        assert_eq!(MAX_PENDING_MOVES, 100);
        assert!(MIN_DIMENSION <= DEFAULT_DIMENSION && DEFAULT_DIMENSION <= MAX_DIMENSION);
        assert!(DEFAULT_THRESHOLD >= MIN_THRESHOLD);
    }

    #[test]
    fn direction_round_trips_through_str() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
        assert_eq!(Direction::from_str("u"), Some(Direction::Up));
        assert_eq!(Direction::from_str("sideways"), None);
    }

    #[test]
    fn cell_value_accessors() {
        assert_eq!(Cell::Empty.value(), None);
        assert_eq!(Cell::Tile(4).value(), Some(4));
        assert!(!Cell::Tile(4).is_empty());
        assert_eq!(Cell::default(), Cell::Empty);
    }

    #[test]
    fn status_finished() {
        assert!(!GameStatus::Playing.is_finished());
        assert!(!GameStatus::Won.is_finished());
        assert!(GameStatus::Lost.is_finished());
    }
}

/// Slide direction of a move.
///
/// The direction names the edge tiles travel towards: `Up` packs every
/// column against row 0, `Right` packs every row against the last column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("R"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A cell on the game board
///
/// - `Empty`: no tile
/// - `Tile(value)`: a tile carrying a positive value (never 0)
///
/// Cells have no identity beyond their position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Tile(u32),
}

impl Cell {
    /// Tile value, or `None` for an empty cell
    #[inline]
    pub fn value(&self) -> Option<u32> {
        match *self {
            Cell::Empty => None,
            Cell::Tile(v) => Some(v),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Board coordinate, `row` from the top and `col` from the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Where a session stands.
///
/// `Won` is not terminal: play may continue after reaching the threshold
/// until the board locks up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// True once no further move can change the board.
    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::Lost)
    }
}
