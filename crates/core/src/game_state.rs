//! Game state module - the move orchestrator
//!
//! [`Game`] owns the board and the score. It applies moves line by line through the
//! [`line`](crate::line) transform, inserts new tiles and answers the win/loss
//! questions. Every mutation is reported to the observer as it happens.

use arrayvec::ArrayVec;
use rand::Rng;
use tracing::{debug, info};

use crate::board::{Board, LineCoords};
use crate::config::GameConfig;
use crate::line::{transform, MoveOrder};
use crate::observer::GameObserver;
use crate::rng::random_tile_value;
use crate::types::{Cell, Coord, Direction, GameStatus, MAX_DIMENSION};

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game<O, R> {
    config: GameConfig,
    board: Board,
    score: u32,
    status: GameStatus,
    /// Set once the threshold tile first appears; later moves keep playing.
    reached_threshold: bool,
    moves: u32,
    observer: O,
    rng: R,
}

impl<O: GameObserver, R: Rng> Game<O, R> {
    /// Create an empty board for `config`
    pub fn new(config: GameConfig, observer: O, rng: R) -> Self {
        Self {
            board: Board::new(config.dimension()),
            config,
            score: 0,
            status: GameStatus::Playing,
            reached_threshold: false,
            moves: 0,
            observer,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn dimension(&self) -> usize {
        self.board.dimension()
    }

    pub fn threshold(&self) -> u32 {
        self.config.threshold()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of board-changing moves since the last reset
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Clear score and board
    pub fn reset(&mut self) {
        self.board.clear();
        self.status = GameStatus::Playing;
        self.reached_threshold = false;
        self.moves = 0;
        self.set_score(0);
        info!(dimension = self.dimension(), "game reset");
    }

    /// Slide every line towards `direction`.
    ///
    /// Returns true iff at least one tile moved or merged.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let mut changed = false;

        for index in 0..self.dimension() {
            let coords = self.board.line_coords(direction, index);
            let line: ArrayVec<Cell, MAX_DIMENSION> =
                coords.iter().map(|&c| self.board.get(c)).collect();

            let orders = transform(&line);
            changed |= !orders.is_empty();

            for order in orders {
                self.apply_order(&coords, order);
            }
        }

        if changed {
            self.moves += 1;
            debug!(
                direction = direction.as_str(),
                score = self.score,
                moves = self.moves,
                "move applied"
            );
        }
        changed
    }

    fn apply_order(&mut self, coords: &LineCoords, order: MoveOrder) {
        match order {
            MoveOrder::Single {
                source,
                destination,
                value,
                was_merge,
            } => {
                let (from, to) = (coords[source], coords[destination]);
                if was_merge {
                    self.add_score(value);
                }
                self.board.set(from, Cell::Empty);
                self.board.set(to, Cell::Tile(value));
                self.observer.tile_moved(from, to, value);
            }
            MoveOrder::Double {
                first,
                second,
                destination,
                value,
            } => {
                let (a, b, to) = (coords[first], coords[second], coords[destination]);
                self.add_score(value);
                self.board.set(a, Cell::Empty);
                self.board.set(b, Cell::Empty);
                self.board.set(to, Cell::Tile(value));
                self.observer.tiles_merged((a, b), to, value);
            }
        }
    }

    fn add_score(&mut self, points: u32) {
        self.set_score(self.score.saturating_add(points));
    }

    fn set_score(&mut self, score: u32) {
        self.score = score;
        self.observer.score_changed(score);
    }

    /// Place a tile at `at` if that cell is empty
    pub fn insert_tile(&mut self, at: Coord, value: u32) -> bool {
        if !self.board.is_empty_at(at) {
            return false;
        }
        self.board.set(at, Cell::Tile(value));
        self.observer.tile_inserted(at, value);
        true
    }

    /// Place a tile on a uniformly chosen empty cell.
    ///
    /// Returns where it went, or `None` (and changes nothing) on a full board.
    pub fn insert_random(&mut self, value: u32) -> Option<Coord> {
        let empty = self.board.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let at = empty[self.rng.gen_range(0..empty.len())];
        self.insert_tile(at, value);
        Some(at)
    }

    /// Some cell holding a tile at or above the threshold, if any
    pub fn has_won(&self) -> Option<Coord> {
        let threshold = self.threshold();
        self.board
            .coords()
            .find(|&c| matches!(self.board.get(c), Cell::Tile(v) if v >= threshold))
    }

    /// True when the board is full and no two neighbours share a value
    pub fn has_lost(&self) -> bool {
        if !self.board.is_full() {
            return false;
        }

        let d = self.dimension();
        for at in self.board.coords() {
            let Cell::Tile(value) = self.board.get(at) else {
                panic!("board reported full but {at:?} is empty");
            };
            let right = (at.col + 1 < d).then(|| Coord::new(at.row, at.col + 1));
            let below = (at.row + 1 < d).then(|| Coord::new(at.row + 1, at.col));
            if [right, below]
                .into_iter()
                .flatten()
                .any(|n| self.board.get(n) == Cell::Tile(value))
            {
                return false;
            }
        }
        true
    }

    /// Bookkeeping after a board-changing move.
    ///
    /// The first time the threshold is reached the status becomes `Won` and no tile
    /// is added for that move. Otherwise a random 2 or 4 is inserted and the status
    /// becomes `Lost` if the board then locks up.
    pub fn follow_up(&mut self) -> GameStatus {
        if !self.reached_threshold {
            if let Some(at) = self.has_won() {
                self.reached_threshold = true;
                self.status = GameStatus::Won;
                info!(row = at.row, col = at.col, score = self.score, "threshold reached");
                return self.status;
            }
        }

        let value = random_tile_value(&mut self.rng);
        self.insert_random(value);

        if self.has_lost() {
            self.status = GameStatus::Lost;
            info!(score = self.score, moves = self.moves, "no moves left");
        }
        self.status
    }

    /// Replace the board wholesale (scenario setup for tools and tests).
    ///
    /// Panics if the board dimension differs from the configured one.
    pub fn load_board(&mut self, board: Board) {
        assert_eq!(
            board.dimension(),
            self.dimension(),
            "loaded board has the wrong dimension"
        );
        self.board = board;
    }
}
