//! Colors and glyphs owned by the renderer.
//!
//! The core only exposes digit values and a selection predicate; how a digit
//! looks on screen is decided here.

use crate::fb::{CellStyle, Rgb};

/// How live digits are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphMode {
    #[default]
    Digits,
    /// Braille dot patterns `⠁`..`⠉` for 1..9
    Braille,
}

impl GlyphMode {
    /// Glyph for a cell value; cleared cells are blank.
    pub fn glyph(self, value: u8) -> char {
        match (self, value) {
            (_, 0) => ' ',
            (GlyphMode::Digits, 1..=9) => (b'0' + value) as char,
            (GlyphMode::Braille, 1..=9) => {
                char::from_u32(0x2800 + value as u32).unwrap_or('?')
            }
            _ => '?',
        }
    }
}

/// Style table for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Foreground per digit, index 0 unused
    pub digits: [Rgb; 10],
    pub board_bg: Rgb,
    pub selected: CellStyle,
    pub cursor: CellStyle,
    pub ruler: CellStyle,
    pub title: CellStyle,
    pub text: CellStyle,
    pub label: CellStyle,
    pub border_top: CellStyle,
    pub border_bottom: CellStyle,
    pub border_left: CellStyle,
    pub border_right: CellStyle,
}

impl Palette {
    pub fn digit(&self, value: u8) -> CellStyle {
        let fg = self.digits.get(value as usize).copied().unwrap_or_default();
        CellStyle::fg(fg).on(self.board_bg)
    }
}

const YELLOW: Rgb = Rgb::new(230, 200, 60);
const GREEN: Rgb = Rgb::new(90, 200, 110);
const RED: Rgb = Rgb::new(220, 70, 70);
const PURPLE: Rgb = Rgb::new(170, 90, 200);
const BLACK: Rgb = Rgb::new(0, 0, 0);

impl Default for Palette {
    fn default() -> Self {
        Self {
            digits: [
                Rgb::new(0, 0, 0),
                Rgb::new(80, 120, 230),
                PURPLE,
                GREEN,
                Rgb::new(160, 100, 50),
                Rgb::new(150, 150, 150),
                Rgb::new(250, 235, 215),
                Rgb::new(255, 255, 255),
                RED,
                YELLOW,
            ],
            board_bg: BLACK,
            selected: CellStyle::fg(PURPLE).on(Rgb::new(240, 240, 240)),
            cursor: CellStyle::fg(BLACK).on(YELLOW).bold(),
            ruler: CellStyle::fg(Rgb::new(105, 105, 105)).dim(),
            title: CellStyle::fg(YELLOW).bold(),
            text: CellStyle::default(),
            label: CellStyle::fg(Rgb::new(220, 220, 220)).bold(),
            border_top: CellStyle::fg(YELLOW),
            border_bottom: CellStyle::fg(GREEN),
            border_left: CellStyle::fg(RED),
            border_right: CellStyle::fg(PURPLE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_glyphs() {
        assert_eq!(GlyphMode::Digits.glyph(0), ' ');
        assert_eq!(GlyphMode::Digits.glyph(7), '7');
        assert_eq!(GlyphMode::Braille.glyph(1), '⠁');
        assert_eq!(GlyphMode::Braille.glyph(9), '⠉');
        assert_eq!(GlyphMode::Braille.glyph(0), ' ');
    }

    #[test]
    fn every_digit_has_a_distinct_color() {
        let p = Palette::default();
        for a in 1..=9 {
            for b in (a + 1)..=9 {
                assert_ne!(p.digits[a], p.digits[b]);
            }
        }
    }

    #[test]
    fn rulers_recede_behind_the_board() {
        let p = Palette::default();
        assert!(p.ruler.dim);
        assert!(!p.digit(5).dim);
    }
}
