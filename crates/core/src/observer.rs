//! Observer interface - how the game reports what happened to the board
//!
//! The game calls its observer synchronously while it mutates the board, in the
//! same order as the mutations. Renderers use the events to animate tiles, tests
//! use [`EventLog`] to assert on them.

use crate::types::Coord;

/// Receiver of board and score notifications. All methods default to no-ops.
pub trait GameObserver {
    /// The score changed to `score` (also sent with 0 on reset).
    fn score_changed(&mut self, _score: u32) {}

    /// One tile slid from `from` to `to`; `value` is its value on arrival
    /// (the merged value when it landed on a resting tile).
    fn tile_moved(&mut self, _from: Coord, _to: Coord, _value: u32) {}

    /// Two tiles left `from` and combined into `to` with `value`.
    fn tiles_merged(&mut self, _from: (Coord, Coord), _to: Coord, _value: u32) {}

    /// A new tile appeared at `at`.
    fn tile_inserted(&mut self, _at: Coord, _value: u32) {}
}

/// Ignores every notification.
impl GameObserver for () {}

/// One observer notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ScoreChanged(u32),
    TileMoved { from: Coord, to: Coord, value: u32 },
    TilesMerged { from: (Coord, Coord), to: Coord, value: u32 },
    TileInserted { at: Coord, value: u32 },
}

/// Records notifications in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Remove and return everything recorded so far.
    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GameObserver for EventLog {
    fn score_changed(&mut self, score: u32) {
        self.events.push(GameEvent::ScoreChanged(score));
    }

    fn tile_moved(&mut self, from: Coord, to: Coord, value: u32) {
        self.events.push(GameEvent::TileMoved { from, to, value });
    }

    fn tiles_merged(&mut self, from: (Coord, Coord), to: Coord, value: u32) {
        self.events.push(GameEvent::TilesMerged { from, to, value });
    }

    fn tile_inserted(&mut self, at: Coord, value: u32) {
        self.events.push(GameEvent::TileInserted { at, value });
    }
}
