// src/ui/keybindings.rs
//! Keyboard input handling and key mappings.

use crossterm::event::{KeyCode, KeyEvent};

/// Actions derived from key events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationAction {
    TogglePause,
    Quit,
    None,
}

/// Convert a key event to an action.
pub fn key_to_action(key: &KeyEvent) -> NavigationAction {
    match key.code {
        KeyCode::Char(' ') => NavigationAction::TogglePause,
        KeyCode::Char('q') | KeyCode::Esc => NavigationAction::Quit,
        _ => NavigationAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn maps_playback_keys() {
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(key_to_action(&space), NavigationAction::TogglePause);

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(key_to_action(&q), NavigationAction::Quit);

        let other = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(key_to_action(&other), NavigationAction::None);
    }
}
