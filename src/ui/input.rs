use crate::ui::message::AppMessage;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    /// Keys accepted while the splash is showing. The intro cannot be
    /// skipped; only quitting works.
    pub fn handle_splash_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            _ => None,
        }
    }

    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('f'), KeyModifiers::CONTROL) => Some(AppMessage::ToggleFavorite),
            (KeyCode::Char('d'), KeyModifiers::CONTROL) => Some(AppMessage::DownloadSelected),
            (KeyCode::Char('o'), KeyModifiers::CONTROL) => Some(AppMessage::OpenSelected),
            (KeyCode::Enter, _) => Some(AppMessage::ToggleFavorite),
            (KeyCode::Tab, _) => Some(AppMessage::ToggleFavoritesView),
            (KeyCode::Esc, _) => Some(AppMessage::ClearSearch),
            (KeyCode::Backspace, _) => Some(AppMessage::SearchBackspace),
            (KeyCode::Down, _) => Some(AppMessage::SelectNext),
            (KeyCode::Up, _) => Some(AppMessage::SelectPrevious),
            (KeyCode::Char(c), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                Some(AppMessage::SearchInput(c))
            }
            _ => None,
        }
    }
}
