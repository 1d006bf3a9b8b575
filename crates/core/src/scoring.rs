//! Scoring module - sum-to-ten evaluation
//!
//! A selection scores only when its cells add up to exactly [`TARGET_SUM`].
//! Cleared cells count as zero, so a rectangle may include holes left by
//! earlier clears and still score. Any other sum leaves board and score alone.

use crate::board::Board;
use crate::selection::SelectionMask;
use crate::types::TARGET_SUM;

/// Outcome of evaluating one selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluation {
    /// Sum of the selected cell values
    pub sum: u32,
    /// Number of selected cells
    pub cells: usize,
    /// Whether the sum hit the target and the cells were cleared
    pub scored: bool,
}

impl Evaluation {
    /// Points earned by this selection
    pub fn points(&self) -> u32 {
        if self.scored {
            self.sum
        } else {
            0
        }
    }
}

/// Does this sum clear the selection?
pub fn is_scoring_sum(sum: u32) -> bool {
    sum == TARGET_SUM
}

/// Sum of all board cells under the mask
pub fn selection_sum(board: &Board, mask: &SelectionMask) -> u32 {
    board
        .cells()
        .iter()
        .zip(mask.cells())
        .filter(|&(_, &selected)| selected)
        .map(|(&value, _)| value as u32)
        .sum()
}

/// Evaluate the masked cells and clear them if they sum to the target.
pub fn evaluate(board: &mut Board, mask: &SelectionMask) -> Evaluation {
    let sum = selection_sum(board, mask);
    let cells = mask.count();
    let scored = is_scoring_sum(sum);

    if scored {
        for pos in mask.selected() {
            board.clear(pos.row, pos.col);
        }
    }

    Evaluation { sum, cells, scored }
}
