//! Key mapping from terminal events to game actions.
//!
//! Bindings are fixed: arrows move and rotate, space hard-drops, Esc or q
//! (or Ctrl-C) quits.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// Map a key press to a game action
pub fn map_key(key: KeyEvent) -> Option<GameAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(GameAction::Quit);
    }
    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Up => Some(GameAction::RotateCw),
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameAction::Quit),
        _ => None,
    }
}
