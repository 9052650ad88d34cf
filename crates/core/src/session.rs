//! Session - the game plus its move queue, as seen by a frontend
//!
//! A frontend only talks to the session: it requests moves, resets and tile
//! insertions, and advances the clock once per frame. Everything runs on the
//! caller's thread; results come back through the move callbacks and the
//! game's observer.

use rand::Rng;
use tracing::info;

use crate::config::GameConfig;
use crate::game_state::Game;
use crate::observer::GameObserver;
use crate::scheduler::{MoveScheduler, ScheduleError};
use crate::types::{Coord, Direction, BASE_TILE_VALUE, STARTING_TILES};

#[derive(Debug)]
pub struct Session<O, R> {
    game: Game<O, R>,
    scheduler: MoveScheduler<O, R>,
}

impl<O: GameObserver, R: Rng> Session<O, R> {
    pub fn new(config: GameConfig, observer: O, rng: R) -> Self {
        Self {
            scheduler: MoveScheduler::with_config(
                config.queue_delay_ms(),
                config.max_pending_moves(),
            ),
            game: Game::new(config, observer, rng),
        }
    }

    /// Place the opening tiles.
    pub fn start(&mut self) {
        for _ in 0..STARTING_TILES {
            self.game.insert_random(BASE_TILE_VALUE);
        }
        info!(
            dimension = self.game.dimension(),
            threshold = self.game.threshold(),
            "game started"
        );
    }

    pub fn game(&self) -> &Game<O, R> {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game<O, R> {
        &mut self.game
    }

    pub fn scheduler(&self) -> &MoveScheduler<O, R> {
        &self.scheduler
    }

    /// Queue a move; `on_applied` runs once it has been applied.
    pub fn request_move(
        &mut self,
        direction: Direction,
        on_applied: impl FnOnce(&mut Game<O, R>, bool) + 'static,
    ) -> Result<(), ScheduleError> {
        self.scheduler.enqueue(&mut self.game, direction, on_applied)
    }

    /// Queue a move followed by the usual bookkeeping (win check, new tile, loss check).
    pub fn request_move_and_follow_up(&mut self, direction: Direction) -> Result<(), ScheduleError> {
        self.request_move(direction, |game, changed| {
            if changed {
                game.follow_up();
            }
        })
    }

    /// Zero the score, empty the board and drop every pending move.
    pub fn request_reset(&mut self) {
        self.scheduler.reset();
        self.game.reset();
    }

    pub fn request_insert_random(&mut self, value: u32) -> Option<Coord> {
        self.game.insert_random(value)
    }

    /// Advance the move queue's clock.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.scheduler.tick(&mut self.game, elapsed_ms);
    }
}
