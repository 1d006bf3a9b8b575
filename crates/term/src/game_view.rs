//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout, top to bottom:
//!
//! ```text
//!               SummaX
//!     3 2 1 ▒ 1 2 3 ...        <- column ruler (distance from cursor)
//!   ╭─────────────────╮
//! 1 │ 4 6 · 9 ...     │        <- left ruler shows row distance
//! ▒ │ 2 8 3 1 ...     │
//!   ╰─────────────────╯
//!   help, score, motion
//! ```

use crate::core::GameState;
use crate::fb::{CellStyle, FrameBuffer};
use crate::palette::{GlyphMode, Palette};
use crate::types::Position;

/// Terminal columns per board cell: a gap and the glyph.
const CELL_W: u16 = 2;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen positions of the board parts for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub title_y: u16,
    pub ruler_y: u16,
    pub ruler_x: u16,
    /// Top-left corner of the border
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// First row of the help panel
    pub panel_y: u16,
}

impl Layout {
    /// Screen position of a board cell's glyph
    pub fn cell_xy(&self, row: u16, col: u16) -> (u16, u16) {
        (
            self.frame_x
                .saturating_add(col.saturating_mul(CELL_W))
                .saturating_add(2),
            self.frame_y.saturating_add(row).saturating_add(1),
        )
    }
}

/// A lightweight terminal renderer for the board.
pub struct GameView {
    glyphs: GlyphMode,
    palette: Palette,
    anchor_y: AnchorY,
    debug_panel: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            glyphs: GlyphMode::Digits,
            palette: Palette::default(),
            anchor_y: AnchorY::Center,
            debug_panel: false,
        }
    }
}

const HELP: [&str; 5] = [
    "      move: h j k l  or arrows",
    "      jump: w (next word)",
    "     count: 0-9 before a motion",
    "(de)select: v, space or ctrl+v",
    "    cancel: esc     quit: q",
];

impl GameView {
    pub fn new(glyphs: GlyphMode) -> Self {
        Self {
            glyphs,
            ..Self::default()
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_debug_panel(mut self, enabled: bool) -> Self {
        self.debug_panel = enabled;
        self
    }

    fn panel_lines(&self, rows: u16) -> u16 {
        // help + score + motion + count + last, then debug cursor/header/mask rows.
        let base = HELP.len() as u16 + 4;
        if self.debug_panel {
            base.saturating_add(3).saturating_add(rows)
        } else {
            base
        }
    }

    /// Compute where everything goes for a board of `rows x cols`.
    pub fn layout(&self, rows: u16, cols: u16, viewport: Viewport) -> Layout {
        let frame_w = cols.saturating_mul(CELL_W).saturating_add(3);
        let frame_h = rows.saturating_add(2);
        // Left ruler and a spacer column precede the frame.
        let total_w = frame_w.saturating_add(2);
        // Title, column ruler, frame, blank line, panel.
        let total_h = frame_h
            .saturating_add(3)
            .saturating_add(self.panel_lines(rows));

        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        Layout {
            title_y: start_y,
            ruler_y: start_y.saturating_add(1),
            ruler_x: start_x,
            frame_x: start_x.saturating_add(2),
            frame_y: start_y.saturating_add(2),
            frame_w,
            frame_h,
            panel_y: start_y.saturating_add(frame_h).saturating_add(3),
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, game: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let layout = self.layout(game.rows(), game.cols(), viewport);

        self.draw_title(fb, &layout);
        self.draw_border(fb, &layout);
        self.draw_cells(fb, game, &layout);
        self.draw_rulers(fb, game, &layout);
        self.draw_cursor(fb, game, &layout);
        self.draw_panel(fb, game, &layout);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_title(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let title = "SummaX";
        let pad = layout.frame_w.saturating_sub(title.len() as u16) / 2;
        fb.put_str(
            layout.frame_x.saturating_add(pad),
            layout.title_y,
            title,
            self.palette.title,
        );
    }

    /// Wide boards push the right edge off-screen; the framebuffer drops it.
    fn draw_border(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let (x, y, w, h) = (layout.frame_x, layout.frame_y, layout.frame_w, layout.frame_h);
        if w < 2 || h < 2 {
            return;
        }
        let p = &self.palette;
        let x1 = x.saturating_add(w - 1);
        let y1 = y.saturating_add(h - 1);

        fb.put_char(x, y, '╭', p.border_top);
        fb.put_char(x1, y, '╮', p.border_top);
        fb.put_char(x, y1, '╰', p.border_bottom);
        fb.put_char(x1, y1, '╯', p.border_bottom);

        for dx in 1..w - 1 {
            fb.put_char(x.saturating_add(dx), y, '─', p.border_top);
            fb.put_char(x.saturating_add(dx), y1, '─', p.border_bottom);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y.saturating_add(dy), '│', p.border_left);
            fb.put_char(x1, y.saturating_add(dy), '│', p.border_right);
        }
    }

    fn draw_cells(&self, fb: &mut FrameBuffer, game: &GameState, layout: &Layout) {
        let rect = game.selection_rect();
        for row in 0..game.rows() {
            for col in 0..game.cols() {
                let value = game.board().get(row, col).unwrap_or(0);
                let (x, y) = layout.cell_xy(row, col);
                let ch = self.glyphs.glyph(value);

                if game.is_selected(row, col) {
                    fb.put_char(x, y, ch, self.palette.selected);
                    // Fill the gap to the left so the rectangle reads as one block.
                    if rect.is_some_and(|r| col > r.left) {
                        fb.put_char(x - 1, y, ' ', self.palette.selected);
                    }
                } else {
                    fb.put_char(x, y, ch, self.palette.digit(value));
                }
            }
        }
    }

    /// Distances from the cursor along the top and left edges.
    fn draw_rulers(&self, fb: &mut FrameBuffer, game: &GameState, layout: &Layout) {
        let Position { row: cur_row, col: cur_col } = game.cursor();

        for col in 0..game.cols() {
            let (x, _) = layout.cell_xy(0, col);
            let (ch, style) = self.ruler_mark(col.abs_diff(cur_col));
            fb.put_char(x, layout.ruler_y, ch, style);
        }
        for row in 0..game.rows() {
            let (_, y) = layout.cell_xy(row, 0);
            let (ch, style) = self.ruler_mark(row.abs_diff(cur_row));
            fb.put_char(layout.ruler_x, y, ch, style);
        }
    }

    fn ruler_mark(&self, distance: u16) -> (char, CellStyle) {
        match distance {
            0 => (' ', self.palette.cursor),
            1..=9 => ((b'0' + distance as u8) as char, self.palette.ruler),
            _ => ('·', self.palette.ruler),
        }
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, game: &GameState, layout: &Layout) {
        let cursor = game.cursor();
        let value = game.board().value_at(cursor).unwrap_or(0);
        let (x, y) = layout.cell_xy(cursor.row, cursor.col);
        fb.put_char(x, y, self.glyphs.glyph(value), self.palette.cursor);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, game: &GameState, layout: &Layout) {
        let x = layout.frame_x;
        let mut y = layout.panel_y;
        let p = &self.palette;

        for line in HELP {
            fb.put_str(x, y, line, p.text);
            y = y.saturating_add(1);
        }

        let vx = fb.put_str(x, y, "     score: ", p.label);
        fb.put_u32(vx, y, game.score(), p.text);
        y = y.saturating_add(1);

        let vx = fb.put_str(x, y, "    motion: ", p.label);
        match game.last_motion() {
            Some(m) => fb.put_display(vx, y, &m, p.text),
            None => fb.put_str(vx, y, "-", p.text),
        };
        y = y.saturating_add(1);

        let vx = fb.put_str(x, y, "     count: ", p.label);
        fb.put_u32(vx, y, game.pending_count().digit() as u32, p.text);
        y = y.saturating_add(1);

        let vx = fb.put_str(x, y, "       sum: ", p.label);
        if let Some(sum) = game.selection_sum() {
            fb.put_u32(vx, y, sum, p.text);
        } else if let Some(eval) = game.last_evaluation() {
            let verdict = if eval.scored { " cleared" } else { " no match" };
            let end = fb.put_u32(vx, y, eval.sum, p.ruler);
            fb.put_str(end, y, verdict, p.ruler);
        } else {
            fb.put_str(vx, y, "-", p.text);
        }
        y = y.saturating_add(1);

        if self.debug_panel {
            y = y.saturating_add(1);
            let vx = fb.put_str(x, y, "cursor: ", p.label);
            fb.put_display(vx, y, &game.cursor(), p.text);
            y = y.saturating_add(1);
            fb.put_str(x, y, "selection:", p.label);
            y = y.saturating_add(1);
            self.draw_mask(fb, game, x, y);
        }
    }

    fn draw_mask(&self, fb: &mut FrameBuffer, game: &GameState, x: u16, y: u16) {
        for row in 0..game.rows() {
            for col in 0..game.cols() {
                let bit = if game.is_selected(row, col) { '1' } else { '0' };
                fb.put_char(
                    x.saturating_add(col.saturating_mul(CELL_W)),
                    y.saturating_add(row),
                    bit,
                    self.palette.ruler,
                );
            }
        }
    }
}
