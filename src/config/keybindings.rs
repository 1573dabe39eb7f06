//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only the key code and modifiers take part in the lookup, so
    /// events carrying a kind or state flag still match.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
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

        // Vim-style navigation
        kb.bind(KeyCode::Char('j'), none, KeyAction::ScrollDown);
        kb.bind(KeyCode::Char('k'), none, KeyAction::ScrollUp);
        kb.bind(KeyCode::Char('h'), none, KeyAction::ScrollLeft);
        kb.bind(KeyCode::Char('l'), none, KeyAction::ScrollRight);
        kb.bind(KeyCode::Char('g'), none, KeyAction::ScrollToTop);
        kb.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::ScrollToBottom);

        // Arrow keys and paging
        kb.bind(KeyCode::Down, none, KeyAction::ScrollDown);
        kb.bind(KeyCode::Up, none, KeyAction::ScrollUp);
        kb.bind(KeyCode::Left, none, KeyAction::ScrollLeft);
        kb.bind(KeyCode::Right, none, KeyAction::ScrollRight);
        kb.bind(KeyCode::Home, none, KeyAction::ScrollToTop);
        kb.bind(KeyCode::End, none, KeyAction::ScrollToBottom);
        kb.bind(KeyCode::PageDown, none, KeyAction::PageDown);
        kb.bind(KeyCode::PageUp, none, KeyAction::PageUp);
        kb.bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown);
        kb.bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp);

        // Focus
        kb.bind(KeyCode::Tab, none, KeyAction::CycleFocus);
        kb.bind(KeyCode::Enter, none, KeyAction::Activate);
        kb.bind(KeyCode::Esc, none, KeyAction::Back);

        // Menus
        kb.bind(KeyCode::Char('v'), none, KeyAction::CycleView);
        kb.bind(KeyCode::Char('s'), none, KeyAction::CycleSort);
        kb.bind(KeyCode::Char('S'), KeyModifiers::SHIFT, KeyAction::ToggleSortDirection);
        kb.bind(KeyCode::Char('f'), none, KeyAction::CycleFilter);
        kb.bind(KeyCode::Char('o'), none, KeyAction::PosterOptions);

        // Toolbar
        kb.bind(KeyCode::Char('u'), none, KeyAction::RefreshSeries);
        kb.bind(KeyCode::Char('y'), none, KeyAction::RssSync);

        // Pages
        kb.bind(KeyCode::Char('1'), none, KeyAction::ShowIndex);
        kb.bind(KeyCode::Char('2'), none, KeyAction::ShowLogs);

        kb.bind(KeyCode::Char('q'), none, KeyAction::Quit);

        kb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    #[test]
    fn default_bindings_map_v_to_cycle_view() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('v'), KeyModifiers::NONE);
        assert_eq!(bindings.get(key_event), Some(KeyAction::CycleView));
    }

    #[test]
    fn uppercase_s_toggles_sort_direction() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT);
        assert_eq!(bindings.get(key_event), Some(KeyAction::ToggleSortDirection));
    }

    #[test]
    fn control_u_pages_but_plain_u_refreshes() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            Some(KeyAction::PageUp)
        );
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::NONE)),
            Some(KeyAction::RefreshSeries)
        );
    }

    #[test]
    fn lookup_ignores_event_kind_and_state() {
        let bindings = KeyBindings::default();
        let key_event = KeyEvent::new_with_kind_and_state(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
            KeyEventState::KEYPAD,
        );
        assert_eq!(bindings.get(key_event), Some(KeyAction::Activate));
    }

    #[test]
    fn unbound_key_is_none() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE)),
            None
        );
    }
}
