use crate::ui::message::AppMessage;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    /// The input box always has focus, so plain characters are text.
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        let command = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match (key.code, command) {
            (KeyCode::Char('c'), true) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppMessage::Quit)
            }
            (KeyCode::Char('u'), true) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppMessage::ClearInput)
            }
            (KeyCode::Char(c), false) => Some(AppMessage::InputChar(c)),
            (KeyCode::Enter, _) => Some(AppMessage::Submit),
            (KeyCode::Backspace, _) => Some(AppMessage::Backspace),
            (KeyCode::Esc, _) => Some(AppMessage::Quit),
            (KeyCode::Up, _) => Some(AppMessage::ScrollUp),
            (KeyCode::Down, _) => Some(AppMessage::ScrollDown),
            (KeyCode::PageUp, _) => Some(AppMessage::PageUp),
            (KeyCode::PageDown, _) => Some(AppMessage::PageDown),
            _ => None,
        }
    }
}
