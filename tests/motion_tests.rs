//! Cursor motion tests: counts, clamping, word jumps

use summax::core::motion::{step, word_right};
use summax::core::{Board, GameState};
use summax::types::{Count, Direction, GameAction, Motion, Position};

fn count(d: u8) -> Count {
    Count::from_digit(d).unwrap()
}

fn blank_game(rows: u16, cols: u16) -> GameState {
    GameState::from_board(Board::new(rows, cols).unwrap())
}

#[test]
fn test_step_clamps_at_every_edge() {
    let rows = 9;
    let cols = 16;
    let corner = Position::new(8, 15);

    assert_eq!(step(corner, Direction::Down, count(5), rows, cols), corner);
    assert_eq!(step(corner, Direction::Right, count(9), rows, cols), corner);
    assert_eq!(
        step(corner, Direction::Up, count(9), rows, cols),
        Position::new(0, 15)
    );
    assert_eq!(
        step(corner, Direction::Left, count(9), rows, cols),
        Position::new(8, 6)
    );
}

#[test]
fn test_zero_count_moves_one_cell() {
    let p = step(Position::new(0, 0), Direction::Right, count(0), 3, 3);
    assert_eq!(p, Position::new(0, 1));
}

#[test]
fn test_pending_count_applies_once() {
    let mut state = blank_game(9, 16);

    state.apply_action(GameAction::SetCount(count(3)));
    assert_eq!(state.pending_count().digit(), 3);

    state.apply_action(GameAction::Move(Direction::Right));
    assert_eq!(state.cursor(), Position::new(0, 3));
    assert_eq!(state.pending_count(), Count::ONE);

    state.apply_action(GameAction::Move(Direction::Right));
    assert_eq!(state.cursor(), Position::new(0, 4));
}

#[test]
fn test_last_count_digit_wins() {
    let mut state = blank_game(9, 16);
    state.apply_action(GameAction::SetCount(count(2)));
    state.apply_action(GameAction::SetCount(count(7)));
    state.apply_action(GameAction::Move(Direction::Down));
    assert_eq!(state.cursor(), Position::new(7, 0));
}

#[test]
fn test_last_motion_is_recorded() {
    let mut state = blank_game(4, 4);
    assert_eq!(state.last_motion(), None);

    state.apply_action(GameAction::SetCount(count(2)));
    state.apply_action(GameAction::Move(Direction::Right));

    let last = state.last_motion().unwrap();
    assert_eq!(last.motion, Motion::Step(Direction::Right));
    assert_eq!(last.to_string(), "2l");

    state.apply_action(GameAction::JumpWordRight);
    assert_eq!(state.last_motion().unwrap().to_string(), "1w");
}

#[test]
fn test_word_jump_over_runs() {
    let board = Board::from_rows(&[[3u8, 0, 0, 5, 2, 0, 7, 1]]).unwrap();
    let start = Position::new(0, 0);

    assert_eq!(word_right(&board, start, Count::ONE), Position::new(0, 3));
    assert_eq!(word_right(&board, start, count(2)), Position::new(0, 6));
    // Ran out of words: stops on the last cell
    assert_eq!(word_right(&board, start, count(9)), Position::new(0, 7));
}

#[test]
fn test_word_jump_continues_on_next_row() {
    let board = Board::from_rows(&[[1u8, 2, 0], [0, 0, 4], [5, 6, 7]]).unwrap();
    assert_eq!(
        word_right(&board, Position::new(0, 0), Count::ONE),
        Position::new(1, 2)
    );
    // 4 at the end of row 1 runs straight into row 2
    assert_eq!(
        word_right(&board, Position::new(1, 2), Count::ONE),
        Position::new(2, 2)
    );
}

#[test]
fn test_word_jump_on_cleared_board_goes_to_last_cell() {
    let mut state = blank_game(3, 3);
    assert!(state.jump_word_right(Count::ONE));
    assert_eq!(state.cursor(), Position::new(2, 2));
    assert!(!state.jump_word_right(Count::ONE));
}
