//! Move scheduler - a debounced FIFO of direction commands
//!
//! Input may arrive faster than moves should be applied. Commands are queued and
//! drained one at a time:
//!
//! - A move that changes the board arms a cooldown of `delay_ms`; nothing else is
//!   applied until it expires.
//! - A move that changes nothing does not arm the cooldown, so the next queued
//!   command is tried immediately.
//! - When the queue runs dry the timer stays idle until the next [`enqueue`].
//!
//! Time is supplied by the caller through [`tick`], the same fixed-timestep style the
//! game loop uses, so tests drive it with a virtual clock.
//!
//! Overflow policy: when `capacity` commands are already waiting, the new command is
//! rejected with [`ScheduleError::QueueFull`] and its callback is dropped unfired.
//! [`reset`] likewise drops pending callbacks without calling them; a callback that
//! does fire always carries the real result of its move.
//!
//! [`enqueue`]: MoveScheduler::enqueue
//! [`tick`]: MoveScheduler::tick
//! [`reset`]: MoveScheduler::reset

use std::collections::VecDeque;
use std::fmt;

use rand::Rng;
use thiserror::Error;
use tracing::{trace, warn};

use crate::game_state::Game;
use crate::observer::GameObserver;
use crate::types::{Direction, MAX_PENDING_MOVES, QUEUE_DELAY_MS};

/// Called once a queued move has been applied, with whether it changed the board.
pub type MoveCallback<O, R> = Box<dyn FnOnce(&mut Game<O, R>, bool)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("move queue full ({capacity} pending), dropped {}", .direction.as_str())]
    QueueFull {
        direction: Direction,
        capacity: usize,
    },
}

struct MoveCommand<O, R> {
    direction: Direction,
    on_applied: MoveCallback<O, R>,
}

pub struct MoveScheduler<O, R> {
    queue: VecDeque<MoveCommand<O, R>>,
    capacity: usize,
    delay_ms: u32,
    /// Remaining cooldown; `None` while the timer is idle.
    cooldown_ms: Option<u32>,
}

impl<O: GameObserver, R: Rng> MoveScheduler<O, R> {
    pub fn new() -> Self {
        Self::with_config(QUEUE_DELAY_MS, MAX_PENDING_MOVES)
    }

    pub fn with_config(delay_ms: u32, capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity.min(MAX_PENDING_MOVES)),
            capacity: capacity.max(1),
            delay_ms,
            cooldown_ms: None,
        }
    }

    /// Queue a move. If the timer is idle the queue is drained right away.
    pub fn enqueue(
        &mut self,
        game: &mut Game<O, R>,
        direction: Direction,
        on_applied: impl FnOnce(&mut Game<O, R>, bool) + 'static,
    ) -> Result<(), ScheduleError> {
        if self.queue.len() >= self.capacity {
            warn!(
                direction = direction.as_str(),
                capacity = self.capacity,
                "move queue full, rejecting command"
            );
            return Err(ScheduleError::QueueFull {
                direction,
                capacity: self.capacity,
            });
        }

        self.queue.push_back(MoveCommand {
            direction,
            on_applied: Box::new(on_applied),
        });

        if self.cooldown_ms.is_none() {
            self.drain(game);
        }
        Ok(())
    }

    /// Advance the clock by `elapsed_ms`, draining the queue when the cooldown expires.
    pub fn tick(&mut self, game: &mut Game<O, R>, elapsed_ms: u32) {
        let Some(remaining) = self.cooldown_ms else {
            return;
        };

        let remaining = remaining.saturating_sub(elapsed_ms);
        if remaining > 0 {
            self.cooldown_ms = Some(remaining);
            return;
        }

        trace!(pending = self.queue.len(), "move cooldown expired");
        self.cooldown_ms = None;
        self.drain(game);
    }

    /// Apply queued moves until one changes the board or the queue is empty.
    fn drain(&mut self, game: &mut Game<O, R>) {
        while let Some(command) = self.queue.pop_front() {
            let changed = game.apply_move(command.direction);
            (command.on_applied)(game, changed);

            if changed && self.delay_ms > 0 {
                trace!(delay_ms = self.delay_ms, "move cooldown armed");
                self.cooldown_ms = Some(self.delay_ms);
                return;
            }
        }
    }

    /// Drop every pending command without calling it and disarm the timer.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.cooldown_ms = None;
    }

    /// Number of commands waiting
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// True while a cooldown is running
    pub fn is_armed(&self) -> bool {
        self.cooldown_ms.is_some()
    }

    pub fn cooldown_ms(&self) -> Option<u32> {
        self.cooldown_ms
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<O: GameObserver, R: Rng> Default for MoveScheduler<O, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O, R> fmt::Debug for MoveScheduler<O, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoveScheduler")
            .field(
                "queue",
                &self.queue.iter().map(|c| c.direction).collect::<Vec<_>>(),
            )
            .field("capacity", &self.capacity)
            .field("delay_ms", &self.delay_ms)
            .field("cooldown_ms", &self.cooldown_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::config::GameConfig;
    use rand::rngs::mock::StepRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    type TestGame = Game<(), StepRng>;

    fn game_with(values: &[u32]) -> TestGame {
        let board = Board::from_values(values);
        let config = GameConfig::new(board.dimension(), 2048).unwrap();
        let mut game = Game::new(config, (), StepRng::new(0, 0));
        game.load_board(board);
        game
    }

    fn recorder() -> (
        Rc<RefCell<Vec<(Direction, bool)>>>,
        impl Fn(Direction) -> Box<dyn FnOnce(&mut TestGame, bool)>,
    ) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let make = move |dir: Direction| -> Box<dyn FnOnce(&mut TestGame, bool)> {
            let sink = sink.clone();
            Box::new(move |_: &mut TestGame, changed: bool| sink.borrow_mut().push((dir, changed)))
        };
        (log, make)
    }

    #[test]
    fn idle_scheduler_applies_immediately_and_arms() {
        let mut game = game_with(&[0, 2, 0, 0]);
        let mut scheduler = MoveScheduler::with_config(300, 10);
        let (log, cb) = recorder();

        scheduler.enqueue(&mut game, Direction::Left, cb(Direction::Left)).unwrap();
        assert_eq!(*log.borrow(), vec![(Direction::Left, true)]);
        assert_eq!(scheduler.cooldown_ms(), Some(300));
    }

    #[test]
    fn cooldown_holds_queue_until_expiry() {
        let mut game = game_with(&[0, 2, 0, 0]);
        let mut scheduler = MoveScheduler::with_config(300, 10);
        let (log, cb) = recorder();

        scheduler.enqueue(&mut game, Direction::Left, cb(Direction::Left)).unwrap();
        scheduler.enqueue(&mut game, Direction::Down, cb(Direction::Down)).unwrap();
        assert_eq!(scheduler.pending(), 1);

        scheduler.tick(&mut game, 299);
        assert_eq!(log.borrow().len(), 1);

        scheduler.tick(&mut game, 1);
        assert_eq!(
            *log.borrow(),
            vec![(Direction::Left, true), (Direction::Down, true)]
        );
        assert!(scheduler.is_armed());
    }

    #[test]
    fn noop_moves_drain_without_delay() {
        let mut game = game_with(&[2, 0, 0, 0]);
        let mut scheduler = MoveScheduler::with_config(300, 10);
        let (log, cb) = recorder();

        scheduler.enqueue(&mut game, Direction::Up, cb(Direction::Up)).unwrap();
        scheduler.enqueue(&mut game, Direction::Left, cb(Direction::Left)).unwrap();
        assert_eq!(
            *log.borrow(),
            vec![(Direction::Up, false), (Direction::Left, false)]
        );
        assert!(!scheduler.is_armed());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn timer_goes_idle_when_queue_empty_at_expiry() {
        let mut game = game_with(&[0, 2, 0, 0]);
        let mut scheduler = MoveScheduler::with_config(100, 10);
        let (_log, cb) = recorder();

        scheduler.enqueue(&mut game, Direction::Left, cb(Direction::Left)).unwrap();
        scheduler.tick(&mut game, 100);
        assert!(!scheduler.is_armed());
    }

    #[test]
    fn full_queue_rejects_newest() {
        let mut game = game_with(&[0, 2, 0, 0]);
        let mut scheduler = MoveScheduler::with_config(300, 1);
        let (log, cb) = recorder();

        scheduler.enqueue(&mut game, Direction::Left, cb(Direction::Left)).unwrap();
        scheduler.enqueue(&mut game, Direction::Down, cb(Direction::Down)).unwrap();
        let err = scheduler
            .enqueue(&mut game, Direction::Up, cb(Direction::Up))
            .unwrap_err();
        assert_eq!(
            err,
            ScheduleError::QueueFull {
                direction: Direction::Up,
                capacity: 1
            }
        );

        scheduler.tick(&mut game, 300);
        let directions: Vec<_> = log.borrow().iter().map(|&(d, _)| d).collect();
        assert_eq!(directions, vec![Direction::Left, Direction::Down]);
    }

    #[test]
    fn reset_discards_pending_callbacks() {
        let mut game = game_with(&[0, 2, 0, 0]);
        let mut scheduler = MoveScheduler::with_config(300, 10);
        let (log, cb) = recorder();

        scheduler.enqueue(&mut game, Direction::Left, cb(Direction::Left)).unwrap();
        scheduler.enqueue(&mut game, Direction::Down, cb(Direction::Down)).unwrap();
        scheduler.reset();
        assert!(!scheduler.is_armed());

        scheduler.tick(&mut game, 1000);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn zero_delay_never_arms() {
        let mut game = game_with(&[0, 2, 0, 0]);
        let mut scheduler = MoveScheduler::with_config(0, 10);
        let (log, cb) = recorder();

        scheduler.enqueue(&mut game, Direction::Left, cb(Direction::Left)).unwrap();
        scheduler.enqueue(&mut game, Direction::Down, cb(Direction::Down)).unwrap();
        assert!(!scheduler.is_armed());
        assert_eq!(log.borrow().len(), 2);
    }
}
