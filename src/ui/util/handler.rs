use ratatui::crossterm::event::KeyEvent;

use crate::ui::{
    app::App,
    input::InputHandler,
    tui::{TerminalEvent, Tui},
};

pub struct EventHandler;

impl EventHandler {
    /// Waits for the next terminal event, then drains background events.
    /// Returns whether anything happened that warrants a redraw.
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui)? {
                should_render = true;
            }
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            app.handle_event(evt);
            should_render = true;
        }

        Ok(should_render)
    }

    pub fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Resize(_, _) => {
                tui.autoresize()?;
            }
            TerminalEvent::FocusGained => {
                tui.clear()?;
                app.handle_terminal_event(evt);
            }
            TerminalEvent::Tick => {
                app.handle_terminal_event(evt);
                return Ok(app.has_focus);
            }
            evt => app.handle_terminal_event(evt),
        }

        Ok(true)
    }

    fn handle_key_event(app: &mut App, key: KeyEvent) {
        let msg = if app.is_splash_showing() {
            InputHandler::handle_splash_key(key)
        } else {
            InputHandler::handle_key(key)
        };

        if let Some(msg) = msg {
            app.update(msg);
        }
    }
}
