//! Game state module - one play session
//!
//! Ties together the board, cursor, selection, score and the pending repeat
//! count. Every input event maps to one [`GameAction`] which is applied in
//! full before the next frame is drawn.

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::motion;
use crate::rng::BoardRng;
use crate::scoring::{self, Evaluation};
use crate::selection::Selection;
use crate::types::{Count, Direction, GameAction, LastMotion, Motion, Position, Rect};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    cursor: Position,
    selection: Selection,
    score: u32,
    /// Count typed ahead of the next motion
    pending: Count,
    last_motion: Option<LastMotion>,
    last_evaluation: Option<Evaluation>,
    /// Seed of the current board (0 for fixture boards)
    seed: u64,
}

impl GameState {
    /// Create a new session with a freshly generated board
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = BoardRng::from_seed(config.seed);
        let board = Board::generate(config.rows, config.cols, &mut rng)?;
        log::debug!(
            "generated {}x{} board with seed {}",
            config.rows,
            config.cols,
            rng.seed()
        );

        let mut state = Self::from_board(board);
        state.seed = rng.seed();
        Ok(state)
    }

    /// Create a session around an existing board
    pub fn from_board(board: Board) -> Self {
        let selection = Selection::new(board.rows(), board.cols());
        Self {
            board,
            cursor: Position::default(),
            selection,
            score: 0,
            pending: Count::ONE,
            last_motion: None,
            last_evaluation: None,
            seed: 0,
        }
    }

    /// Refill the board from `seed` (or the clock) and clear the selection.
    ///
    /// Cursor and score are kept. Returns the seed actually used.
    pub fn initialize(&mut self, seed: Option<u64>) -> u64 {
        let mut rng = BoardRng::from_seed(seed);
        self.board.fill(&mut rng);
        self.selection.reset();
        self.seed = rng.seed();
        log::debug!("board re-seeded with {}", self.seed);
        self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rows(&self) -> u16 {
        self.board.rows()
    }

    pub fn cols(&self) -> u16 {
        self.board.cols()
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selecting(&self) -> bool {
        self.selection.is_active()
    }

    pub fn is_selected(&self, row: u16, col: u16) -> bool {
        self.selection.contains(row, col)
    }

    pub fn selection_rect(&self) -> Option<Rect> {
        self.selection.rect()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn pending_count(&self) -> Count {
        self.pending
    }

    pub fn last_motion(&self) -> Option<LastMotion> {
        self.last_motion
    }

    pub fn last_evaluation(&self) -> Option<Evaluation> {
        self.last_evaluation
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Cells that still hold a digit
    pub fn live_cells(&self) -> usize {
        self.board.live_cells()
    }

    /// Sum of the current selection, if one is active
    pub fn selection_sum(&self) -> Option<u32> {
        self.selection
            .is_active()
            .then(|| scoring::selection_sum(&self.board, self.selection.mask()))
    }

    /// Buffer a repeat count for the next motion
    pub fn set_pending_count(&mut self, count: Count) {
        self.pending = count;
    }

    fn take_pending_count(&mut self) -> Count {
        std::mem::replace(&mut self.pending, Count::ONE)
    }

    /// Move the cursor and refresh the selection.
    /// Returns true if the cursor changed position.
    pub fn move_cursor(&mut self, direction: Direction, count: Count) -> bool {
        let next = motion::step(self.cursor, direction, count, self.rows(), self.cols());
        let record = LastMotion {
            count,
            motion: Motion::Step(direction),
        };
        self.finish_motion(next, record)
    }

    /// Jump to the start of the `count`-th next word.
    /// Returns true if the cursor changed position.
    pub fn jump_word_right(&mut self, count: Count) -> bool {
        let next = motion::word_right(&self.board, self.cursor, count);
        let record = LastMotion {
            count,
            motion: Motion::WordRight,
        };
        self.finish_motion(next, record)
    }

    fn finish_motion(&mut self, next: Position, record: LastMotion) -> bool {
        let moved = next != self.cursor;
        self.cursor = next;
        self.selection.recompute(self.cursor);
        self.last_motion = Some(record);
        moved
    }

    /// Anchor a new selection at the cursor
    pub fn begin_selection(&mut self) -> bool {
        self.selection.begin(self.cursor)
    }

    /// Evaluate the active selection, then return to idle.
    ///
    /// Returns `None` if no selection was active.
    pub fn end_selection(&mut self) -> Option<Evaluation> {
        let rect = self.selection.rect()?;
        let eval = scoring::evaluate(&mut self.board, self.selection.mask());
        self.score += eval.points();
        self.selection.reset();
        self.last_evaluation = Some(eval);

        if eval.scored {
            log::info!(
                "cleared {} cells at {}..{} (+{}, score {})",
                eval.cells,
                rect.top_left(),
                rect.bottom_right(),
                eval.points(),
                self.score
            );
        } else {
            log::debug!("selection of {} cells summed to {}", eval.cells, eval.sum);
        }
        Some(eval)
    }

    /// Begin a selection when idle, otherwise end and evaluate it
    pub fn toggle_selection(&mut self) -> bool {
        if self.selection.is_active() {
            self.end_selection().is_some()
        } else {
            self.begin_selection()
        }
    }

    /// Drop the active selection without scoring
    pub fn cancel_selection(&mut self) -> bool {
        let cancelled = self.selection.reset().is_some();
        if cancelled {
            log::debug!("selection cancelled");
        }
        cancelled
    }

    /// Apply an action from the input dispatcher.
    ///
    /// Motions consume the pending count. Returns true if state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => {
                let count = self.take_pending_count();
                self.move_cursor(direction, count)
            }
            GameAction::JumpWordRight => {
                let count = self.take_pending_count();
                self.jump_word_right(count)
            }
            GameAction::ToggleSelection => self.toggle_selection(),
            GameAction::CancelSelection => self.cancel_selection(),
            GameAction::SetCount(count) => {
                self.set_pending_count(count);
                true
            }
        }
    }
}
