//! Board module - manages the grid of digits
//!
//! The board is a `rows x cols` grid of cell values in `0..=9`. Live cells hold
//! `1..=9`; a `0` marks a cell that has already been scored and removed.
//! Uses a flat vector in row-major order (`row * cols + col`). Dimensions are
//! fixed once the board is built.

use crate::config::ConfigError;
use crate::rng::BoardRng;
use crate::types::{Position, CLEARED, MAX_DIGIT};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u16,
    cols: u16,
    /// Flat array of cells, row-major order
    cells: Vec<u8>,
}

impl Board {
    /// Create a board with every cell cleared
    pub fn new(rows: u16, cols: u16) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyBoard {
                rows: rows as usize,
                cols: cols as usize,
            });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![CLEARED; rows as usize * cols as usize],
        })
    }

    /// Create a board of fresh random digits
    pub fn generate(rows: u16, cols: u16, rng: &mut BoardRng) -> Result<Self, ConfigError> {
        let mut board = Self::new(rows, cols)?;
        board.fill(rng);
        Ok(board)
    }

    /// Build a board from explicit rows of values.
    ///
    /// All rows must have the same length and every value must be `0..=9`.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(ConfigError::EmptyBoard {
                rows: height,
                cols: width,
            });
        }
        if height > u16::MAX as usize || width > u16::MAX as usize {
            return Err(ConfigError::TooLarge {
                rows: height,
                cols: width,
            });
        }

        let mut cells = Vec::with_capacity(height * width);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(ConfigError::RaggedRow {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                if value > MAX_DIGIT {
                    return Err(ConfigError::ValueOutOfRange {
                        row: r,
                        col: c,
                        value,
                    });
                }
                cells.push(value);
            }
        }

        Ok(Self {
            rows: height as u16,
            cols: width as u16,
            cells,
        })
    }

    /// Overwrite every cell with a fresh draw, rows outer and columns inner
    pub fn fill(&mut self, rng: &mut BoardRng) {
        for cell in &mut self.cells {
            *cell = rng.next_digit();
        }
    }

    #[inline(always)]
    fn index(&self, row: u16, col: u16) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get cell value at `(row, col)`.
    /// Returns None if out of bounds
    pub fn get(&self, row: u16, col: u16) -> Option<u8> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    pub fn value_at(&self, pos: Position) -> Option<u8> {
        self.get(pos.row, pos.col)
    }

    /// Mark a cell as scored.
    /// Returns false if out of bounds
    pub fn clear(&mut self, row: u16, col: u16) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = CLEARED;
                true
            }
            None => false,
        }
    }

    /// One row of values, left to right
    pub fn row(&self, row: u16) -> Option<&[u8]> {
        if row >= self.rows {
            return None;
        }
        let start = row as usize * self.cols as usize;
        Some(&self.cells[start..start + self.cols as usize])
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of cells still holding a digit
    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|&&v| v != CLEARED).count()
    }

    /// Sum of every live cell
    pub fn total(&self) -> u32 {
        self.cells.iter().map(|&v| v as u32).sum()
    }

    /// Convert to 2D vector for testing/display
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols as usize)
            .map(|row| row.to_vec())
            .collect()
    }
}
