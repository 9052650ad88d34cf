//! TileAnimator: turns game notifications into short-lived cell highlights.
//!
//! The terminal cannot tween tiles between cells, so the animator marks the
//! cells a move touched (where tiles landed, merged or appeared) and the view
//! paints them brighter until the highlight expires. It also keeps the last
//! score gain for the side panel.

use crate::core::GameObserver;
use crate::types::{Coord, ANIMATION_MS};

/// Why a cell is highlighted. Later kinds win when a cell is touched twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HighlightKind {
    Moved,
    Inserted,
    Merged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Highlight {
    at: Coord,
    kind: HighlightKind,
    remaining_ms: u32,
}

#[derive(Debug, Clone)]
pub struct TileAnimator {
    highlights: Vec<Highlight>,
    duration_ms: u32,
    score: u32,
    last_gain: u32,
    /// Set by a score increase, consumed by the move notification that follows it.
    merge_pending: bool,
}

impl TileAnimator {
    pub fn new() -> Self {
        Self::with_duration(ANIMATION_MS)
    }

    pub fn with_duration(duration_ms: u32) -> Self {
        Self {
            highlights: Vec::new(),
            duration_ms,
            score: 0,
            last_gain: 0,
            merge_pending: false,
        }
    }

    fn mark(&mut self, at: Coord, kind: HighlightKind) {
        let remaining_ms = self.duration_ms;
        match self.highlights.iter_mut().find(|h| h.at == at) {
            Some(h) => {
                h.kind = h.kind.max(kind);
                h.remaining_ms = remaining_ms;
            }
            None => self.highlights.push(Highlight {
                at,
                kind,
                remaining_ms,
            }),
        }
    }

    /// Age every highlight by `elapsed_ms`, dropping the expired ones.
    pub fn advance(&mut self, elapsed_ms: u32) {
        for h in &mut self.highlights {
            h.remaining_ms = h.remaining_ms.saturating_sub(elapsed_ms);
        }
        self.highlights.retain(|h| h.remaining_ms > 0);
    }

    pub fn highlight_at(&self, at: Coord) -> Option<HighlightKind> {
        self.highlights.iter().find(|h| h.at == at).map(|h| h.kind)
    }

    pub fn is_idle(&self) -> bool {
        self.highlights.is_empty()
    }

    /// Points gained by the most recent merge; cleared on reset.
    pub fn last_gain(&self) -> u32 {
        self.last_gain
    }

    pub fn clear(&mut self) {
        self.highlights.clear();
        self.last_gain = 0;
        self.merge_pending = false;
    }
}

impl Default for TileAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl GameObserver for TileAnimator {
    fn score_changed(&mut self, score: u32) {
        if score < self.score {
            // Only a reset lowers the score.
            self.clear();
        } else if score > self.score {
            self.last_gain = score - self.score;
            self.merge_pending = true;
        }
        self.score = score;
    }

    fn tile_moved(&mut self, from: Coord, to: Coord, _value: u32) {
        self.highlights.retain(|h| h.at != from);
        let kind = if std::mem::take(&mut self.merge_pending) {
            HighlightKind::Merged
        } else {
            HighlightKind::Moved
        };
        self.mark(to, kind);
    }

    fn tiles_merged(&mut self, from: (Coord, Coord), to: Coord, _value: u32) {
        self.merge_pending = false;
        self.highlights.retain(|h| h.at != from.0 && h.at != from.1);
        self.mark(to, HighlightKind::Merged);
    }

    fn tile_inserted(&mut self, at: Coord, _value: u32) {
        self.mark(at, HighlightKind::Inserted);
    }
}
