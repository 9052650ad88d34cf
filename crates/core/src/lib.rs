//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the sliding-tile game: the board, the line
//! transform that computes every slide and merge, the move orchestrator, and the
//! debounced move queue. It has **zero dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: a seeded RNG replays the same game
//! - **Testable**: every notification is an explicit observer call
//! - **Portable**: any frontend can drive it by implementing [`GameObserver`]
//!
//! # Module Structure
//!
//! - [`board`]: square grid of cells, bounds-checked access, line traversal order
//! - [`line`]: condense / collapse / convert pipeline producing [`MoveOrder`]s
//! - [`game_state`]: [`Game`], applies moves, inserts tiles, win/loss checks
//! - [`observer`]: [`GameObserver`] callbacks and the recording [`EventLog`]
//! - [`scheduler`]: [`MoveScheduler`], FIFO of moves with a post-move cooldown
//! - [`session`]: [`Session`], the frontend-facing pair of game and scheduler
//! - [`config`]: validated [`GameConfig`]
//! - [`rng`]: seeded RNG and new-tile values
//!
//! # Game Rules
//!
//! - A move slides every tile as far as it goes towards one edge
//! - Two equal tiles that meet combine into their sum, which is added to the score
//! - A tile takes part in at most one merge per move
//! - After each move that changed the board a 2 (or, one time in ten, a 4) appears
//! - Reaching the threshold tile wins; a full board without equal neighbours loses
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{rng, EventLog, GameConfig, Session};
//! use tui_2048_core::types::{Direction, TICK_MS};
//!
//! let mut session = Session::new(GameConfig::default(), EventLog::new(), rng::seeded(12345));
//! session.start();
//!
//! // Queue a few moves; the first applies immediately, the rest wait for the cooldown.
//! session.request_move_and_follow_up(Direction::Left).unwrap();
//! session.request_move_and_follow_up(Direction::Up).unwrap();
//!
//! for _ in 0..40 {
//!     session.tick(TICK_MS);
//! }
//! assert_eq!(session.scheduler().pending(), 0);
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod line;
pub mod observer;
pub mod rng;
pub mod scheduler;
pub mod session;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use game_state::Game;
pub use line::{transform, MoveOrder};
pub use observer::{EventLog, GameEvent, GameObserver};
pub use scheduler::{MoveScheduler, ScheduleError};
pub use session::Session;
