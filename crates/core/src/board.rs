//! Board module - manages the game grid
//!
//! The board is a `dimension x dimension` grid where each cell is empty or holds a tile.
//! Uses a flat vector in row-major order (row * dimension + col).
//! Coordinates are (row, col) with row 0 at the top and col 0 at the left.
//!
//! Every access is bounds-checked and out-of-range coordinates panic: the board is
//! only ever addressed by the game itself, so a bad coordinate is a bug.

use arrayvec::ArrayVec;

use crate::types::{Cell, Coord, Direction, MAX_DIMENSION};

/// The ordered coordinates of one line, index 0 at the leading edge of a move.
pub type LineCoords = ArrayVec<Coord, MAX_DIMENSION>;

/// The game board - square grid using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dimension: usize,
    /// Flat array of cells, row-major order (row * dimension + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(dimension: usize) -> Self {
        assert!(
            (1..=MAX_DIMENSION).contains(&dimension),
            "board dimension {dimension} outside 1..={MAX_DIMENSION}"
        );
        Self {
            dimension,
            cells: vec![Cell::Empty; dimension * dimension],
        }
    }

    /// Build a board from row-major tile values, `0` meaning empty.
    ///
    /// Panics if `values` is not a perfect square of a supported dimension.
    pub fn from_values(values: &[u32]) -> Self {
        let dimension = (1..=MAX_DIMENSION)
            .find(|d| d * d == values.len())
            .unwrap_or_else(|| panic!("{} values do not form a square board", values.len()));
        let cells = values
            .iter()
            .map(|&v| if v == 0 { Cell::Empty } else { Cell::Tile(v) })
            .collect();
        Self { dimension, cells }
    }

    /// Calculate flat index from coordinates
    #[inline(always)]
    fn index(&self, at: Coord) -> usize {
        assert!(
            at.row < self.dimension && at.col < self.dimension,
            "coordinate ({}, {}) out of range for {}x{} board",
            at.row,
            at.col,
            self.dimension,
            self.dimension
        );
        at.row * self.dimension + at.col
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Get cell at `at`
    pub fn get(&self, at: Coord) -> Cell {
        self.cells[self.index(at)]
    }

    /// Set cell at `at`
    pub fn set(&mut self, at: Coord, cell: Cell) {
        assert!(cell != Cell::Tile(0), "tile value 0 written at {at:?}");
        let idx = self.index(at);
        self.cells[idx] = cell;
    }

    pub fn is_empty_at(&self, at: Coord) -> bool {
        self.get(at).is_empty()
    }

    /// Coordinates of all empty cells, row by row
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.coords().filter(|&c| self.is_empty_at(c)).collect()
    }

    /// Check if every cell holds a tile
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Iterate all coordinates in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let d = self.dimension;
        (0..d).flat_map(move |row| (0..d).map(move |col| Coord::new(row, col)))
    }

    /// Coordinates of line `index` for a move in `direction`.
    ///
    /// Index 0 of the result is the cell tiles slide towards: moving up, line `c`
    /// is column `c` from the top row down; moving right, line `r` is row `r`
    /// from the last column back to the first.
    pub fn line_coords(&self, direction: Direction, index: usize) -> LineCoords {
        let d = self.dimension;
        assert!(index < d, "line {index} out of range for {d}x{d} board");
        (0..d)
            .map(|i| match direction {
                Direction::Up => Coord::new(i, index),
                Direction::Down => Coord::new(d - i - 1, index),
                Direction::Left => Coord::new(index, i),
                Direction::Right => Coord::new(index, d - i - 1),
            })
            .collect()
    }

    /// Sum of all tile values
    pub fn total(&self) -> u64 {
        self.cells.iter().filter_map(Cell::value).map(u64::from).sum()
    }

    /// Largest tile on the board
    pub fn max_tile(&self) -> Option<u32> {
        self.cells.iter().filter_map(Cell::value).max()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row-major tile values with `0` for empty cells
    pub fn to_values(&self) -> Vec<u32> {
        self.cells.iter().map(|c| c.value().unwrap_or(0)).collect()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_DIMENSION)
    }
}
