//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The reference board is 9 rows by 16 columns. Dimensions are configuration,
//! these are only the defaults:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 9 | Rows on a fresh board |
//! | `DEFAULT_COLS` | 16 | Columns on a fresh board |
//! | `MIN_DIGIT` | 1 | Smallest live cell value |
//! | `MAX_DIGIT` | 9 | Largest live cell value |
//! | `CLEARED` | 0 | Value of a scored (removed) cell |
//! | `TARGET_SUM` | 10 | A selection scores only when it sums to this |
//!
//! # Coordinates
//!
//! Positions are `(row, col)`, rows top to bottom, columns left to right,
//! both zero-based.
//!
//! # Examples
//!
//! ```
//! use summax_types::{Count, Direction, GameAction, Position, Rect};
//!
//! // Rectangles are normalized regardless of which corner comes first
//! let rect = Rect::spanning(Position::new(4, 7), Position::new(1, 2));
//! assert_eq!(rect.top_left(), Position::new(1, 2));
//! assert_eq!(rect.bottom_right(), Position::new(4, 7));
//! assert_eq!(rect.area(), 4 * 6);
//!
//! // Parse a direction from its vi key
//! assert_eq!(Direction::from_key('h'), Some(Direction::Left));
//!
//! // Counts only exist for single digits
//! assert!(Count::from_digit(7).is_some());
//! assert!(Count::from_digit(10).is_none());
//!
//! let action = GameAction::Move(Direction::Right);
//! assert!(action.is_motion());
//! ```

use std::fmt;

/// Default number of board rows (9)
pub const DEFAULT_ROWS: u16 = 9;

/// Default number of board columns (16)
pub const DEFAULT_COLS: u16 = 16;

/// Smallest value drawn for a live cell
pub const MIN_DIGIT: u8 = 1;

/// Largest value drawn for a live cell
pub const MAX_DIGIT: u8 = 9;

/// Value stored in a cell after it has been scored
pub const CLEARED: u8 = 0;

/// Sum a selection must reach to score
pub const TARGET_SUM: u32 = 10;


/// A cell coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: u16,
    pub col: u16,
}

impl Position {
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Axis-aligned rectangle with inclusive bounds.
///
/// Always normalized: `top <= bottom` and `left <= right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub top: u16,
    pub left: u16,
    pub bottom: u16,
    pub right: u16,
}

impl Rect {
    /// The rectangle spanned by two corners, in either order.
    pub fn spanning(a: Position, b: Position) -> Self {
        Self {
            top: a.row.min(b.row),
            left: a.col.min(b.col),
            bottom: a.row.max(b.row),
            right: a.col.max(b.col),
        }
    }

    /// A 1x1 rectangle.
    pub fn single(pos: Position) -> Self {
        Self::spanning(pos, pos)
    }

    pub fn top_left(&self) -> Position {
        Position::new(self.top, self.left)
    }

    pub fn bottom_right(&self) -> Position {
        Position::new(self.bottom, self.right)
    }

    pub fn height(&self) -> u16 {
        self.bottom - self.top + 1
    }

    pub fn width(&self) -> u16 {
        self.right - self.left + 1
    }

    /// Number of cells covered
    pub fn area(&self) -> usize {
        self.height() as usize * self.width() as usize
    }

    pub fn contains(&self, row: u16, col: u16) -> bool {
        (self.top..=self.bottom).contains(&row) && (self.left..=self.right).contains(&col)
    }
}

/// Cardinal cursor directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parse from the vi motion keys `h j k l`
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'h' => Some(Direction::Left),
            'j' => Some(Direction::Down),
            'k' => Some(Direction::Up),
            'l' => Some(Direction::Right),
            _ => None,
        }
    }

    /// The vi motion key for this direction
    pub fn key(&self) -> char {
        match self {
            Direction::Left => 'h',
            Direction::Down => 'j',
            Direction::Up => 'k',
            Direction::Right => 'l',
        }
    }
}

/// Repeat count for a motion, taken from a single typed digit.
///
/// The digit is kept as typed so it can be displayed; [`Count::steps`] is the
/// effective repeat factor and is never below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Count(u8);

impl Count {
    pub const ONE: Count = Count(1);

    /// Build a count from a digit `0..=9`.
    pub const fn from_digit(digit: u8) -> Option<Self> {
        if digit <= 9 {
            Some(Count(digit))
        } else {
            None
        }
    }

    /// Build a count from an ASCII digit character.
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).and_then(|d| Self::from_digit(d as u8))
    }

    /// The digit as typed
    pub fn digit(self) -> u8 {
        self.0
    }

    /// Effective repeat factor (at least 1)
    pub fn steps(self) -> u16 {
        self.0.max(1) as u16
    }
}

impl Default for Count {
    fn default() -> Self {
        Count::ONE
    }
}

/// A cursor motion kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    /// Move in a direction, clamped at the board edge
    Step(Direction),
    /// Jump to the start of the next run of live cells
    WordRight,
}

impl Motion {
    pub fn key(&self) -> char {
        match self {
            Motion::Step(dir) => dir.key(),
            Motion::WordRight => 'w',
        }
    }
}

/// The most recent motion, displayed as a vi-style command such as `3l`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LastMotion {
    pub count: Count,
    pub motion: Motion,
}

impl fmt::Display for LastMotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count.digit(), self.motion.key())
    }
}

/// Abstract commands the input dispatcher feeds into a game session
///
/// Quitting is not a game action; it terminates the outer loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the cursor, consuming the pending count
    Move(Direction),
    /// Jump to the next word, consuming the pending count
    JumpWordRight,
    /// Begin a selection, or end and evaluate the current one
    ToggleSelection,
    /// Drop the current selection without scoring
    CancelSelection,
    /// Buffer a repeat count for the next motion
    SetCount(Count),
}

impl GameAction {
    /// True for actions that move the cursor
    pub fn is_motion(&self) -> bool {
        matches!(self, GameAction::Move(_) | GameAction::JumpWordRight)
    }
}
