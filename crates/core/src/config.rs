//! Game configuration and construction errors.

use thiserror::Error;

use crate::types::{DEFAULT_COLS, DEFAULT_ROWS};

/// Errors raised while building a board or a game session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board needs at least one row and one column, got {rows}x{cols}")]
    EmptyBoard { rows: usize, cols: usize },

    #[error("board of {rows}x{cols} exceeds the supported size")]
    TooLarge { rows: usize, cols: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({row}, {col}) holds {value}, expected a value in 0..=9")]
    ValueOutOfRange { row: usize, col: usize, value: u8 },
}

/// Session parameters: board dimensions and an optional RNG seed.
///
/// A seed of `None` (or `Some(0)`) seeds the board from the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: u16,
    pub cols: u16,
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject dimensions that cannot hold a cursor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyBoard {
                rows: self.rows as usize,
                cols: self.cols as usize,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
