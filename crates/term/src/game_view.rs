//! GameView: maps a [`Game`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use rand::Rng;

use crate::animation::{HighlightKind, TileAnimator};
use crate::core::Game;
use crate::fb::{FrameBuffer, GlyphStyle, Rgb};
use crate::types::{Cell, GameStatus};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Renders the board as a grid of colored tiles with a side panel.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 leaves room for five digits with padding and keeps tiles roughly square.
        Self {
            tile_w: 7,
            tile_h: 3,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
        }
    }

    /// Columns and rows taken by the framed board.
    pub fn board_size(&self, dimension: usize) -> (u16, u16) {
        let d = dimension as u16;
        // One column/row of board background between tiles and around the edge.
        (d * (self.tile_w + 1) + 1, d * (self.tile_h + 1) + 1)
    }

    /// Render the current game into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when the
    /// viewport changes.
    pub fn render_into<R: Rng>(
        &self,
        game: &Game<TileAnimator, R>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(GlyphStyle::default().glyph(' '));

        let board = game.board();
        let (board_w, board_h) = self.board_size(board.dimension());
        let start_x = viewport.width.saturating_sub(board_w + 20) / 2;
        let start_y = viewport.height.saturating_sub(board_h) / 2;

        fb.fill_rect(
            start_x,
            start_y,
            board_w,
            board_h,
            ' ',
            GlyphStyle::new(DARK_TEXT, BOARD_BG),
        );

        let animator = game.observer();
        for at in board.coords() {
            let x = start_x + 1 + at.col as u16 * (self.tile_w + 1);
            let y = start_y + 1 + at.row as u16 * (self.tile_h + 1);
            self.draw_tile(fb, x, y, board.get(at), animator.highlight_at(at));
        }

        self.draw_side_panel(fb, game, viewport, start_x + board_w + 2, start_y);

        let banner = match game.status() {
            GameStatus::Won => Some("YOU WIN!"),
            GameStatus::Lost => Some("GAME OVER"),
            GameStatus::Playing => None,
        };
        if let Some(text) = banner {
            self.draw_banner(fb, start_x, start_y, board_w, board_h, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<R: Rng>(&self, game: &Game<TileAnimator, R>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        cell: Cell,
        highlight: Option<HighlightKind>,
    ) {
        let Cell::Tile(value) = cell else {
            fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', GlyphStyle::new(DARK_TEXT, EMPTY_BG));
            return;
        };

        let (bg, fg) = tile_colors(value);
        let mut style = GlyphStyle::new(fg, bg);
        if value >= 8 || highlight.is_some() {
            style = style.bold();
        }
        let fill = match highlight {
            Some(HighlightKind::Merged) => '░',
            _ => ' ',
        };
        fb.fill_rect(x, y, self.tile_w, self.tile_h, fill, style);
        if highlight == Some(HighlightKind::Inserted) {
            fb.put_char(x, y, '+', style);
        }

        let mut digits = [0u8; 10];
        let text = crate::fb::format_u32(value, &mut digits);
        fb.put_str_centered(x, y + self.tile_h / 2, self.tile_w, text, style);
    }

    fn draw_side_panel<R: Rng>(
        &self,
        fb: &mut FrameBuffer,
        game: &Game<TileAnimator, R>,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = GlyphStyle::default().bold();
        let value = GlyphStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let dim = GlyphStyle::new(Rgb::new(130, 130, 130), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y += 1;
        fb.put_u32(panel_x, y, game.score(), value);
        let gain = game.observer().last_gain();
        if gain > 0 && !game.observer().is_idle() {
            let mut digits = [0u8; 10];
            let text = crate::fb::format_u32(gain, &mut digits);
            fb.put_char(panel_x + 8, y, '+', dim);
            fb.put_str(panel_x + 9, y, text, dim);
        }
        y += 2;

        fb.put_str(panel_x, y, "GOAL", label);
        y += 1;
        fb.put_u32(panel_x, y, game.threshold(), value);
        y += 2;

        fb.put_str(panel_x, y, "MOVES", label);
        y += 1;
        fb.put_u32(panel_x, y, game.moves(), value);
        y += 2;

        match game.status() {
            GameStatus::Won => fb.put_str(panel_x, y, "keep going!", label),
            GameStatus::Lost => fb.put_str(panel_x, y, "r to restart", label),
            GameStatus::Playing => {}
        }
        y += 2;

        for help in ["arrows/wasd/hjkl", "r  restart", "q  quit"] {
            fb.put_str(panel_x, y, help, dim);
            y += 1;
        }
    }

    fn draw_banner(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        board_w: u16,
        board_h: u16,
        text: &str,
    ) {
        let style = GlyphStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let mid_y = start_y + board_h / 2;
        fb.fill_rect(start_x, mid_y, board_w, 1, ' ', style);
        fb.put_str_centered(start_x, mid_y, board_w, text, style);
    }
}

/// Background and text color for a tile, by value.
fn tile_colors(value: u32) -> (Rgb, Rgb) {
    match value {
        2 => (Rgb::new(238, 228, 218), DARK_TEXT),
        4 => (Rgb::new(237, 224, 200), DARK_TEXT),
        8 => (Rgb::new(242, 177, 121), LIGHT_TEXT),
        16 => (Rgb::new(245, 149, 99), LIGHT_TEXT),
        32 => (Rgb::new(246, 124, 95), LIGHT_TEXT),
        64 => (Rgb::new(246, 94, 59), LIGHT_TEXT),
        128 => (Rgb::new(237, 207, 114), LIGHT_TEXT),
        256 => (Rgb::new(237, 204, 97), LIGHT_TEXT),
        512 => (Rgb::new(237, 200, 80), LIGHT_TEXT),
        1024 => (Rgb::new(237, 197, 63), LIGHT_TEXT),
        2048 => (Rgb::new(237, 194, 46), LIGHT_TEXT),
        _ => (Rgb::new(60, 58, 50), LIGHT_TEXT),
    }
}
