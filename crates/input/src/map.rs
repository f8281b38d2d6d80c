//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Letter bindings: A/D move, S soft drop, Space hard drop, E turns
/// clockwise and R counter-clockwise. Arrow keys and Z work as well.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::SoftDrop),
        KeyCode::Char(' ') => Some(GameAction::HardDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('e') | KeyCode::Char('E') => Some(GameAction::RotateCw),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('z') | KeyCode::Char('Z') => {
            Some(GameAction::RotateCcw)
        }

        _ => None,
    }
}

/// Check if key should start a new game.
pub fn is_restart(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::F(2))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
