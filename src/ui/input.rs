use crate::ui::message::AppMessage;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    /// Fallback key map, consulted only after the focused section declined
    /// the key. Plain characters never land here while a text section has
    /// focus.
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('q'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => Some(AppMessage::Submit),
            (KeyCode::Tab, _) => Some(AppMessage::NextSection),
            (KeyCode::BackTab, _) => Some(AppMessage::PreviousSection),
            (KeyCode::Esc, _) => Some(AppMessage::DismissNotice),
            _ => None,
        }
    }
}
