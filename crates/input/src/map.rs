//! Key mapping from terminal events to game actions.

use crate::types::{Count, Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('v') | KeyCode::Char('V') => Some(GameAction::ToggleSelection),
            _ => None,
        };
    }

    match key.code {
        // Movement
        KeyCode::Left => Some(GameAction::Move(Direction::Left)),
        KeyCode::Right => Some(GameAction::Move(Direction::Right)),
        KeyCode::Up => Some(GameAction::Move(Direction::Up)),
        KeyCode::Down => Some(GameAction::Move(Direction::Down)),
        KeyCode::Char(c @ ('h' | 'j' | 'k' | 'l')) => Direction::from_key(c).map(GameAction::Move),
        KeyCode::Char('w') => Some(GameAction::JumpWordRight),

        // Repeat count
        KeyCode::Char(c @ '0'..='9') => Count::from_char(c).map(GameAction::SetCount),

        // Selection
        KeyCode::Char('v') | KeyCode::Char(' ') => Some(GameAction::ToggleSelection),
        KeyCode::Esc => Some(GameAction::CancelSelection),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
