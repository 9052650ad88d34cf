//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`InputCommand`]s. Repeated presses are not
//! filtered here: pacing is the move scheduler's job.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit, InputCommand};
