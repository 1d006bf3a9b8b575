//! Motion module - cursor movement rules
//!
//! Pure functions from a cursor position to the next one. Directional steps
//! clamp at the board edge instead of wrapping. The word jump treats maximal
//! runs of live cells as words, read in row-major order so a word may continue
//! across the end of a row.

use crate::board::Board;
use crate::types::{Count, Direction, Position, CLEARED};

/// Move `count` cells in `direction`, snapping to the edge on overshoot.
pub fn step(from: Position, direction: Direction, count: Count, rows: u16, cols: u16) -> Position {
    let n = count.steps();
    let last_row = rows.saturating_sub(1);
    let last_col = cols.saturating_sub(1);
    match direction {
        Direction::Up => Position::new(from.row.saturating_sub(n), from.col),
        Direction::Down => Position::new(from.row.saturating_add(n).min(last_row), from.col),
        Direction::Left => Position::new(from.row, from.col.saturating_sub(n)),
        Direction::Right => Position::new(from.row, from.col.saturating_add(n).min(last_col)),
    }
}

/// Jump to the first cell of the next word, `count` times.
///
/// From inside a word the rest of that word is skipped first; from a cleared
/// cell the jump lands on the next live cell. The cursor stops on the last
/// cell of the board if it runs out of words.
pub fn word_right(board: &Board, from: Position, count: Count) -> Position {
    let cols = board.cols() as usize;
    let cells = board.cells();
    let last = cells.len().saturating_sub(1);
    let mut i = from.row as usize * cols + from.col as usize;

    for _ in 0..count.steps() {
        if i >= last {
            break;
        }
        while i < last && cells[i] != CLEARED {
            i += 1;
        }
        while i < last && cells[i] == CLEARED {
            i += 1;
        }
    }

    let i = i.min(last);
    Position::new((i / cols) as u16, (i % cols) as u16)
}
