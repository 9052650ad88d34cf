//! Line transform - the slide-and-merge algorithm for a single row or column
//!
//! A move is computed one line at a time. The line is ordered so that index 0 is
//! the edge the tiles slide towards, and the transform runs in three stages:
//!
//! 1. [`condense`]: squeeze out the gaps, remembering where every tile came from
//!    and whether it had to move at all.
//! 2. [`collapse`]: merge equal neighbours pairwise, left to right, at most once per tile.
//! 3. [`convert`]: turn the surviving tokens into [`MoveOrder`]s whose destination is
//!    the token's position in the collapsed line.
//!
//! Tiles that end up exactly where they started produce no order at all, so an
//! already settled line yields an empty result. The whole pipeline is pure and
//! works on fixed-capacity stack buffers.
//!
//! # Example
//!
//! ```
//! use tui_2048_core::line::{transform, MoveOrder};
//! use tui_2048_core::types::Cell;
//!
//! // [2][ ][2][4] slides left into [4][4][ ][ ]
//! let line = [Cell::Tile(2), Cell::Empty, Cell::Tile(2), Cell::Tile(4)];
//! let orders = transform(&line);
//! assert_eq!(
//!     orders.as_slice(),
//!     &[
//!         MoveOrder::Single { source: 2, destination: 0, value: 4, was_merge: true },
//!         MoveOrder::Single { source: 3, destination: 1, value: 4, was_merge: false },
//!     ]
//! );
//! ```

use arrayvec::ArrayVec;

use crate::types::{Cell, MAX_DIMENSION};

/// Intermediate per-tile decision, alive only inside one [`transform`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Tile sits where it started (so far).
    Unchanged { source: usize, value: u32 },
    /// Tile slides to a new slot without merging.
    Relocated { source: usize, value: u32 },
    /// Tile from `source` slides onto a tile that stays put; `value` is the sum.
    MergedFromOne { source: usize, value: u32 },
    /// Two tiles both travel into one slot; `value` is the sum.
    MergedFromTwo { first: usize, second: usize, value: u32 },
}

impl Token {
    pub fn value(&self) -> u32 {
        match *self {
            Token::Unchanged { value, .. }
            | Token::Relocated { value, .. }
            | Token::MergedFromOne { value, .. }
            | Token::MergedFromTwo { value, .. } => value,
        }
    }

    /// Index of the (first) original tile in the input line.
    pub fn source(&self) -> usize {
        match *self {
            Token::Unchanged { source, .. }
            | Token::Relocated { source, .. }
            | Token::MergedFromOne { source, .. } => source,
            Token::MergedFromTwo { first, .. } => first,
        }
    }
}

/// Instruction for relocating or merging tiles within one line.
///
/// Indices are line positions; the orchestrator maps them back to board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOrder {
    /// One tile moves from `source` to `destination`. With `was_merge` it lands on a
    /// tile that did not move and `value` is the combined value.
    Single {
        source: usize,
        destination: usize,
        value: u32,
        was_merge: bool,
    },
    /// Two tiles leave `first` and `second` and combine into `destination`.
    Double {
        first: usize,
        second: usize,
        destination: usize,
        value: u32,
    },
}

impl MoveOrder {
    pub fn destination(&self) -> usize {
        match *self {
            MoveOrder::Single { destination, .. } | MoveOrder::Double { destination, .. } => {
                destination
            }
        }
    }

    pub fn value(&self) -> u32 {
        match *self {
            MoveOrder::Single { value, .. } | MoveOrder::Double { value, .. } => value,
        }
    }

    /// Points this order scores: the merged value, or 0 for a plain slide.
    pub fn score(&self) -> u32 {
        match *self {
            MoveOrder::Single { was_merge: false, .. } => 0,
            MoveOrder::Single { value, .. } | MoveOrder::Double { value, .. } => value,
        }
    }
}

pub type Tokens = ArrayVec<Token, MAX_DIMENSION>;
pub type MoveOrders = ArrayVec<MoveOrder, MAX_DIMENSION>;

/// Compute the orders that slide `line` towards index 0.
///
/// Panics if the line is longer than [`MAX_DIMENSION`].
pub fn transform(line: &[Cell]) -> MoveOrders {
    convert(&collapse(&condense(line)))
}

/// Remove gaps, keeping relative order.
///
/// A tile whose index already equals its packed position is `Unchanged`,
/// everything behind the first gap is `Relocated`.
pub fn condense(line: &[Cell]) -> Tokens {
    assert!(
        line.len() <= MAX_DIMENSION,
        "line of {} cells exceeds {MAX_DIMENSION}",
        line.len()
    );
    let mut tokens = Tokens::new();
    for (idx, cell) in line.iter().enumerate() {
        if let Cell::Tile(value) = *cell {
            let token = if tokens.len() == idx {
                Token::Unchanged { source: idx, value }
            } else {
                Token::Relocated { source: idx, value }
            };
            tokens.push(token);
        }
    }
    tokens
}

/// Whether an `Unchanged` token still sits where it started.
///
/// `input_position` is its index in the condensed line, `output_position` the slot
/// it would take in the collapsed line and `source` its original index.
#[inline]
fn still_quiescent(input_position: usize, output_position: usize, source: usize) -> bool {
    input_position == output_position && source == input_position
}

/// Merge equal neighbours of a condensed line, each tile at most once.
///
/// Input must come from [`condense`]: a merge token here is a logic error and panics.
pub fn collapse(tokens: &[Token]) -> Tokens {
    let mut out = Tokens::new();
    let mut skip_next = false;

    for (idx, &token) in tokens.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        let next = tokens.get(idx + 1).copied();

        match (token, next) {
            (Token::MergedFromOne { .. } | Token::MergedFromTwo { .. }, _) => {
                panic!("collapse received an already merged token: {token:?}")
            }
            // A tile that never moved absorbs its incoming neighbour.
            (Token::Unchanged { source, value }, Some(next))
                if next.value() == value && still_quiescent(idx, out.len(), source) =>
            {
                skip_next = true;
                out.push(Token::MergedFromOne {
                    source: next.source(),
                    value: value + next.value(),
                });
            }
            (current, Some(next)) if next.value() == current.value() => {
                skip_next = true;
                out.push(Token::MergedFromTwo {
                    first: current.source(),
                    second: next.source(),
                    value: current.value() + next.value(),
                });
            }
            // An earlier merge shifted this tile even though condense left it alone.
            (Token::Unchanged { source, value }, _) if !still_quiescent(idx, out.len(), source) => {
                out.push(Token::Relocated { source, value });
            }
            (Token::Unchanged { .. } | Token::Relocated { .. }, _) => out.push(token),
        }
    }
    out
}

/// Turn collapsed tokens into move orders. `Unchanged` tokens produce nothing.
pub fn convert(tokens: &[Token]) -> MoveOrders {
    tokens
        .iter()
        .enumerate()
        .filter_map(|(destination, token)| match *token {
            Token::Unchanged { .. } => None,
            Token::Relocated { source, value } => Some(MoveOrder::Single {
                source,
                destination,
                value,
                was_merge: false,
            }),
            Token::MergedFromOne { source, value } => Some(MoveOrder::Single {
                source,
                destination,
                value,
                was_merge: true,
            }),
            Token::MergedFromTwo {
                first,
                second,
                value,
            } => Some(MoveOrder::Double {
                first,
                second,
                destination,
                value,
            }),
        })
        .collect()
}
