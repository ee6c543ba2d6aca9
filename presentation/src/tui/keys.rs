//! Key bindings
//!
//! Maps key events to [`KeyAction`]s based on the focused control:
//! - Tab / Shift-Tab: move focus
//! - Enter: activate the focused control
//! - Left / Right on the tab row: switch Login / Sign Up
//! - Esc or Ctrl-C: quit

use super::state::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User action derived from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextFocus,
    PrevFocus,
    SwitchTab,
    Activate,
    InsertChar(char),
    DeleteChar,
    ScrollUp,
    ScrollDown,
    None,
}

/// Key event handler
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(focus: Focus, key: KeyEvent) -> KeyAction {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => KeyAction::Quit,
            (KeyCode::Tab, _) => KeyAction::NextFocus,
            (KeyCode::BackTab, _) => KeyAction::PrevFocus,
            (KeyCode::Enter, _) => KeyAction::Activate,
            (KeyCode::PageUp, _) => KeyAction::ScrollUp,
            (KeyCode::PageDown, _) => KeyAction::ScrollDown,
            (KeyCode::Left | KeyCode::Right, _) if focus == Focus::AuthTabs => {
                KeyAction::SwitchTab
            }
            (KeyCode::Up, _) if focus == Focus::ChatInput => KeyAction::ScrollUp,
            (KeyCode::Down, _) if focus == Focus::ChatInput => KeyAction::ScrollDown,
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) if focus.is_text() => {
                KeyAction::InsertChar(c)
            }
            (KeyCode::Backspace, _) if focus.is_text() => KeyAction::DeleteChar,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyHandler::handle(Focus::ChatInput, ctrl_c), KeyAction::Quit);
        assert_eq!(KeyHandler::handle(Focus::Email, key(KeyCode::Esc)), KeyAction::Quit);
    }

    #[test]
    fn test_focus_and_activation() {
        assert_eq!(
            KeyHandler::handle(Focus::Email, key(KeyCode::Tab)),
            KeyAction::NextFocus
        );
        assert_eq!(
            KeyHandler::handle(Focus::Email, key(KeyCode::BackTab)),
            KeyAction::PrevFocus
        );
        assert_eq!(
            KeyHandler::handle(Focus::Logout, key(KeyCode::Enter)),
            KeyAction::Activate
        );
    }

    #[test]
    fn test_typing_only_in_text_controls() {
        assert_eq!(
            KeyHandler::handle(Focus::Password, key(KeyCode::Char('x'))),
            KeyAction::InsertChar('x')
        );
        let shifted = KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT);
        assert_eq!(
            KeyHandler::handle(Focus::ChatInput, shifted),
            KeyAction::InsertChar('X')
        );
        assert_eq!(
            KeyHandler::handle(Focus::Submit, key(KeyCode::Char('x'))),
            KeyAction::None
        );
        assert_eq!(
            KeyHandler::handle(Focus::Logout, key(KeyCode::Backspace)),
            KeyAction::None
        );
    }

    #[test]
    fn test_arrows_depend_on_focus() {
        assert_eq!(
            KeyHandler::handle(Focus::AuthTabs, key(KeyCode::Right)),
            KeyAction::SwitchTab
        );
        assert_eq!(
            KeyHandler::handle(Focus::Email, key(KeyCode::Right)),
            KeyAction::None
        );
        assert_eq!(
            KeyHandler::handle(Focus::ChatInput, key(KeyCode::Up)),
            KeyAction::ScrollUp
        );
    }
}
