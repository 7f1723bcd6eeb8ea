//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Vim-style defaults plus arrow/page keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            (KeyEvent::new(code, modifiers), action)
        };

        let bindings = HashMap::from([
            // Vim-style navigation
            bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::SelectNext),
            bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::SelectPrev),
            bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::SelectFirst),
            bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::SelectLast),
            bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown),
            bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp),
            // Arrow / page keys
            bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::SelectNext),
            bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::SelectPrev),
            bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::SelectFirst),
            bind(KeyCode::End, KeyModifiers::NONE, KeyAction::SelectLast),
            bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::PageDown),
            bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PageUp),
            // Card interaction
            bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::ToggleDetails),
            bind(KeyCode::Char(' '), KeyModifiers::NONE, KeyAction::ToggleDetails),
            // Search
            bind(KeyCode::Char('/'), KeyModifiers::NONE, KeyAction::StartSearch),
            bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch),
            bind(KeyCode::Char('l'), KeyModifiers::CONTROL, KeyAction::ClearSearch),
            // Loading
            bind(KeyCode::Char('r'), KeyModifiers::NONE, KeyAction::LoadMore),
            // Application
            bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit),
            bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help),
        ]);

        Self { bindings }
    }
}
