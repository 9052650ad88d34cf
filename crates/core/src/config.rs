//! Game configuration with validation.

use thiserror::Error;

use crate::types::{
    DEFAULT_DIMENSION, DEFAULT_THRESHOLD, MAX_DIMENSION, MAX_PENDING_MOVES, MIN_DIMENSION,
    MIN_THRESHOLD, QUEUE_DELAY_MS,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board dimension {dimension} must be between {min} and {max}")]
    DimensionOutOfRange {
        dimension: usize,
        min: usize,
        max: usize,
    },
    #[error("winning tile {threshold} must be at least {min}")]
    ThresholdTooLow { threshold: u32, min: u32 },
    #[error("move queue capacity must be at least 1")]
    ZeroQueueCapacity,
}

/// Parameters of one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    dimension: usize,
    threshold: u32,
    queue_delay_ms: u32,
    max_pending_moves: usize,
}

impl GameConfig {
    pub fn new(dimension: usize, threshold: u32) -> Result<Self, ConfigError> {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
            return Err(ConfigError::DimensionOutOfRange {
                dimension,
                min: MIN_DIMENSION,
                max: MAX_DIMENSION,
            });
        }
        if threshold < MIN_THRESHOLD {
            return Err(ConfigError::ThresholdTooLow {
                threshold,
                min: MIN_THRESHOLD,
            });
        }
        Ok(Self {
            dimension,
            threshold,
            ..Self::default()
        })
    }

    /// Minimum gap between two board-changing moves. `0` disables the debounce.
    pub fn with_queue_delay_ms(mut self, delay_ms: u32) -> Self {
        self.queue_delay_ms = delay_ms;
        self
    }

    pub fn with_max_pending_moves(mut self, capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroQueueCapacity);
        }
        self.max_pending_moves = capacity;
        Ok(self)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn queue_delay_ms(&self) -> u32 {
        self.queue_delay_ms
    }

    pub fn max_pending_moves(&self) -> usize {
        self.max_pending_moves
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            threshold: DEFAULT_THRESHOLD,
            queue_delay_ms: QUEUE_DELAY_MS,
            max_pending_moves: MAX_PENDING_MOVES,
        }
    }
}
