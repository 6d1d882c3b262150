use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::util::colors;

const PLACEHOLDER: &str = "搜索圖片...";
const PREFIX: &str = " ⌕ ";

pub struct SearchBar<'a> {
    text: &'a str,
}

impl<'a> SearchBar<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Terminal cell right after the typed text, inside `area`.
    pub fn cursor_position(&self, area: Rect) -> Position {
        let offset = u16::try_from(PREFIX.width() + self.text.width()).unwrap_or(u16::MAX);
        let max_x = area.right().saturating_sub(2);
        let x = area.x.saturating_add(1).saturating_add(offset);
        Position::new(x.min(max_x), area.y.saturating_add(1))
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::PRIMARY));

        let mut spans = vec![Span::styled(PREFIX, Style::default().fg(colors::NEUTRAL))];
        if self.text.is_empty() {
            spans.push(Span::styled(PLACEHOLDER, Style::default().fg(colors::NEUTRAL)));
        } else {
            spans.push(Span::raw(self.text));
        }

        let block = if self.text.is_empty() {
            block
        } else {
            block.title_bottom(Line::from(" Esc ✕ ").right_aligned())
        };

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}
