//! Terminal "game renderer" module.
//!
//! Renders the board into a plain framebuffer instead of going through a widget
//! toolkit, then flushes only the changed glyphs to the terminal.
//!
//! - [`fb`]: styled glyph grid
//! - [`game_view`]: pure mapping from a game to a framebuffer
//! - [`animation`]: observer that turns moves and merges into cell highlights
//! - [`renderer`]: crossterm backend with full and diff redraws

pub mod animation;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use animation::{HighlightKind, TileAnimator};
pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
