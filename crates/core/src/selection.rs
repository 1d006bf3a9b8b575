//! Selection module - anchor/cursor rectangle selection
//!
//! A selection is either idle or active. An active selection remembers the
//! anchor (the cell where it began) and the rectangle spanning anchor and
//! cursor. The rectangle only exists on the active variant, so there is no way
//! to ask for it while idle.
//!
//! The boolean mask mirrors the rectangle cell by cell. It is rebuilt from
//! scratch on every recompute and is all-false exactly when the selection is
//! idle.

use crate::types::{Position, Rect};

/// An in-progress selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSelection {
    anchor: Position,
    rect: Rect,
}

impl ActiveSelection {
    fn new(anchor: Position) -> Self {
        Self {
            anchor,
            rect: Rect::single(anchor),
        }
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Rectangle as of the last recompute
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Rectangle spanning the anchor and `cursor`, inclusive
    pub fn rect_to(&self, cursor: Position) -> Rect {
        Rect::spanning(self.anchor, cursor)
    }
}

/// Two-state selection machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Active(ActiveSelection),
}

/// Boolean grid marking the selected cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionMask {
    rows: u16,
    cols: u16,
    cells: Vec<bool>,
}

impl SelectionMask {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows as usize * cols as usize],
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Out-of-range coordinates read as unselected
    pub fn get(&self, row: u16, col: u16) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.cells[row as usize * self.cols as usize + col as usize]
    }

    /// True when no cell is selected
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&c| c)
    }

    /// Number of selected cells
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Flags in row-major order
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Positions of selected cells in row-major order
    pub fn selected(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c)
            .map(move |(i, _)| Position::new((i / cols) as u16, (i % cols) as u16))
    }

    fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Snap a position onto the mask.
    fn clamp(&self, pos: Position) -> Position {
        Position::new(
            pos.row.min(self.rows.saturating_sub(1)),
            pos.col.min(self.cols.saturating_sub(1)),
        )
    }

    /// Clear, then mark exactly the cells inside `rect`
    fn fill_rect(&mut self, rect: Rect) {
        self.clear();
        if self.cells.is_empty() {
            return;
        }
        let cols = self.cols as usize;
        let right = rect.right.min(self.cols.saturating_sub(1)) as usize;
        for row in rect.top..=rect.bottom.min(self.rows.saturating_sub(1)) {
            let start = row as usize * cols;
            self.cells[start + rect.left as usize..=start + right].fill(true);
        }
    }
}

/// Selection state plus its mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    state: SelectionState,
    mask: SelectionMask,
}

impl Selection {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            state: SelectionState::Idle,
            mask: SelectionMask::new(rows, cols),
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn active(&self) -> Option<&ActiveSelection> {
        match &self.state {
            SelectionState::Active(active) => Some(active),
            SelectionState::Idle => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SelectionState::Active(_))
    }

    pub fn anchor(&self) -> Option<Position> {
        self.active().map(ActiveSelection::anchor)
    }

    pub fn rect(&self) -> Option<Rect> {
        self.active().map(ActiveSelection::rect)
    }

    pub fn mask(&self) -> &SelectionMask {
        &self.mask
    }

    pub fn contains(&self, row: u16, col: u16) -> bool {
        self.mask.get(row, col)
    }

    /// Idle -> Active: anchor at `cursor`, mask holds that single cell.
    ///
    /// Returns false (and changes nothing) if a selection is already active.
    /// A cursor outside the board is snapped to the nearest cell.
    pub fn begin(&mut self, cursor: Position) -> bool {
        if self.is_active() {
            return false;
        }
        let cursor = self.mask.clamp(cursor);
        let active = ActiveSelection::new(cursor);
        self.mask.fill_rect(active.rect);
        self.state = SelectionState::Active(active);
        log::debug!("selection started at {}", cursor);
        true
    }

    /// Rebuild the rectangle and mask for the current cursor. No-op while idle.
    pub fn recompute(&mut self, cursor: Position) {
        let cursor = self.mask.clamp(cursor);
        if let SelectionState::Active(active) = &mut self.state {
            active.rect = active.rect_to(cursor);
            self.mask.fill_rect(active.rect);
        }
    }

    /// Active -> Idle: clear the mask and drop the anchor.
    ///
    /// Returns the selection that was active, if any.
    pub fn reset(&mut self) -> Option<ActiveSelection> {
        let previous = self.active().copied();
        self.state = SelectionState::Idle;
        self.mask.clear();
        previous
    }
}
