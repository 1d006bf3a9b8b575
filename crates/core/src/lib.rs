//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the selection-and-scoring engine of SummaX. It has
//! **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical boards
//! - **Testable**: Every rule is covered by unit and property tests
//! - **Portable**: Any renderer can draw it by reading [`GameState`]
//!
//! # Module Structure
//!
//! - [`board`]: grid of digits, `0` for cleared cells
//! - [`selection`]: idle/active selection state and the selection mask
//! - [`motion`]: clamped directional steps and the word jump
//! - [`scoring`]: sum-to-ten evaluation and clearing
//! - [`game_state`]: one play session tying the above together
//! - [`rng`]: seeded digit draws
//! - [`config`]: dimensions, seed and construction errors
//!
//! # Game Rules
//!
//! - The board starts full of random digits `1..=9`
//! - The player anchors a selection at the cursor, moves the cursor to stretch
//!   a rectangle, then ends the selection
//! - If the selected cells add up to exactly 10 they are cleared to `0` and the
//!   score grows by 10; otherwise nothing happens
//! - A digit typed before a motion repeats it, vi style
//!
//! # Example
//!
//! ```
//! use summax_core::{Board, GameState};
//! use summax_types::{Count, Direction, GameAction};
//!
//! let board = Board::from_rows(&[[4u8, 6, 0, 2]]).unwrap();
//! let mut game = GameState::from_board(board);
//!
//! game.apply_action(GameAction::ToggleSelection);
//! game.apply_action(GameAction::Move(Direction::Right));
//! game.apply_action(GameAction::ToggleSelection);
//!
//! assert_eq!(game.score(), 10);
//! assert_eq!(game.board().row(0), Some(&[0u8, 0, 0, 2][..]));
//!
//! game.move_cursor(Direction::Left, Count::from_digit(5).unwrap());
//! assert_eq!(game.cursor().col, 0);
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod motion;
pub mod rng;
pub mod scoring;
pub mod selection;

pub use summax_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use game_state::GameState;
pub use rng::BoardRng;
pub use scoring::{evaluate, selection_sum, Evaluation};
pub use selection::{ActiveSelection, Selection, SelectionMask, SelectionState};
