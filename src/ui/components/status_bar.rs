use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::{media::PlaybackStatus, ui::util::playback_indicator, util::colors};

const HINTS: &str = "Tab 最愛 · Enter/^F 收藏 · ^O 開啟 · ^D 下載 · ^C 離開";

pub struct StatusBar<'a> {
    shown: usize,
    total: usize,
    playback: PlaybackStatus,
    message: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(shown: usize, total: usize, playback: PlaybackStatus) -> Self {
        Self {
            shown,
            total,
            playback,
            message: None,
        }
    }

    pub fn with_message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut line = Line::default();
        line.push_span(Span::styled(
            format!(" {}/{} ", self.shown, self.total),
            Style::default().fg(colors::PRIMARY),
        ));

        if self.playback != PlaybackStatus::Idle {
            line.push_span(
                format!(
                    "{} {} ",
                    playback_indicator(self.playback),
                    self.playback.label()
                )
                .fg(colors::SECONDARY),
            );
        }

        match self.message {
            Some(message) => line.push_span(message.to_string().fg(colors::ACCENT)),
            None => line.push_span(HINTS.fg(colors::NEUTRAL)),
        }

        Paragraph::new(line).render(area, buf);
    }
}
