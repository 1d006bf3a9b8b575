//! Terminal rendering for SummaX.
//!
//! The board is drawn into a plain framebuffer rather than through a widget
//! toolkit, then flushed to the terminal as a diff against the last frame.
//!
//! - [`GameView`] maps a `core::GameState` into a [`FrameBuffer`] (pure, testable)
//! - [`Palette`] and [`GlyphMode`] decide colors and digit glyphs
//! - [`TerminalRenderer`] owns raw mode and the alternate screen

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use summax_core as core;
pub use summax_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Layout, Viewport};
pub use palette::{GlyphMode, Palette};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
