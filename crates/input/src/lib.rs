//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]s: vi motions and
//! arrows, count digits, selection toggle and cancel. Quitting is reported
//! separately by [`should_quit`] since it ends the loop rather than the game.

pub mod map;

pub use summax_types as types;

pub use map::{handle_key_event, should_quit};
