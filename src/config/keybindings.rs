//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings alongside arrow and page keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut kb = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;

        // Row movement
        kb.bind(KeyCode::Char('j'), none, KeyAction::MoveDown);
        kb.bind(KeyCode::Char('k'), none, KeyAction::MoveUp);
        kb.bind(KeyCode::Down, none, KeyAction::MoveDown);
        kb.bind(KeyCode::Up, none, KeyAction::MoveUp);

        // Page movement
        kb.bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown);
        kb.bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp);
        kb.bind(KeyCode::PageDown, none, KeyAction::PageDown);
        kb.bind(KeyCode::PageUp, none, KeyAction::PageUp);

        kb.bind(KeyCode::Char('g'), none, KeyAction::MoveToTop);
        kb.bind(KeyCode::Home, none, KeyAction::MoveToTop);
        kb.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::MoveToBottom);
        kb.bind(KeyCode::End, none, KeyAction::MoveToBottom);

        // Letter sections. Braces arrive with SHIFT on most layouts.
        kb.bind(KeyCode::Char('}'), none, KeyAction::NextSection);
        kb.bind(KeyCode::Char('}'), KeyModifiers::SHIFT, KeyAction::NextSection);
        kb.bind(KeyCode::Char('{'), none, KeyAction::PrevSection);
        kb.bind(KeyCode::Char('{'), KeyModifiers::SHIFT, KeyAction::PrevSection);

        // Navigation
        kb.bind(KeyCode::Enter, none, KeyAction::OpenCountry);
        kb.bind(KeyCode::Esc, none, KeyAction::Back);
        kb.bind(KeyCode::Backspace, none, KeyAction::Back);

        // Search and filters
        kb.bind(KeyCode::Char('/'), none, KeyAction::StartSearch);
        kb.bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch);
        kb.bind(KeyCode::Char('l'), KeyModifiers::CONTROL, KeyAction::ClearSearch);
        kb.bind(KeyCode::Char('f'), none, KeyAction::OpenFilters);
        kb.bind(KeyCode::Char('L'), KeyModifiers::SHIFT, KeyAction::OpenLanguages);

        // Carousel
        kb.bind(KeyCode::Char('h'), none, KeyAction::CarouselPrev);
        kb.bind(KeyCode::Left, none, KeyAction::CarouselPrev);
        kb.bind(KeyCode::Char('['), none, KeyAction::CarouselPrev);
        kb.bind(KeyCode::Char('l'), none, KeyAction::CarouselNext);
        kb.bind(KeyCode::Right, none, KeyAction::CarouselNext);
        kb.bind(KeyCode::Char(']'), none, KeyAction::CarouselNext);

        // Application controls
        kb.bind(KeyCode::Char('t'), none, KeyAction::ToggleTheme);
        kb.bind(KeyCode::Char('r'), none, KeyAction::Refresh);
        kb.bind(KeyCode::Char('?'), none, KeyAction::Help);
        kb.bind(KeyCode::Char('?'), KeyModifiers::SHIFT, KeyAction::Help);
        kb.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        kb.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        kb
    }
}
