use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    gallery::{GalleryManager, ImageItem},
    ui::components::{SearchBar, StatusBar},
    util::colors,
};

/// Screen state of the gallery: which list is shown and what is selected.
#[derive(Debug, Default)]
pub struct GalleryView {
    list_state: ListState,
    showing_favorites: bool,
    message: Option<String>,
}

impl GalleryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &'static str {
        if self.showing_favorites {
            "我的最愛"
        } else {
            "迷因圖庫"
        }
    }

    pub fn showing_favorites(&self) -> bool {
        self.showing_favorites
    }

    pub fn toggle_favorites(&mut self) {
        self.showing_favorites = !self.showing_favorites;
        self.list_state.select(None);
    }

    /// Items currently on screen, after search filtering.
    pub fn displayed<'a>(&self, manager: &'a GalleryManager) -> Vec<&'a ImageItem> {
        if self.showing_favorites {
            manager.filtered_favorites()
        } else {
            manager.filtered_catalog()
        }
    }

    pub fn selected<'a>(&self, manager: &'a GalleryManager) -> Option<&'a ImageItem> {
        let index = self.list_state.selected()?;
        self.displayed(manager).get(index).copied()
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let previous = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(previous.min(len - 1)));
    }

    /// Keeps the selection inside a list that just changed length.
    pub fn clamp_selection(&mut self, len: usize) {
        match (self.list_state.selected(), len) {
            (_, 0) => self.list_state.select(None),
            (Some(i), len) if i >= len => self.list_state.select(Some(len - 1)),
            (None, _) => self.list_state.select(Some(0)),
            _ => {}
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, manager: &GalleryManager) {
        f.buffer_mut()
            .set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        let search_area = chunks[0];
        let list_area = chunks[1];
        let status_area = chunks[2];

        let search = SearchBar::new(manager.search_text());
        f.set_cursor_position(search.cursor_position(search_area));
        f.render_widget(search, search_area);

        let items = self.displayed(manager);
        let total = if self.showing_favorites {
            manager.favorites().len()
        } else {
            manager.catalog().len()
        };
        let shown = items.len();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title(format!(" {} ", self.title()))
            .title_alignment(Alignment::Center);

        if items.is_empty() {
            let placeholder = if self.showing_favorites && manager.favorites().is_empty() {
                "還沒有最愛，按 Enter 收藏圖片"
            } else {
                "沒有符合的圖片"
            };
            f.render_widget(
                Paragraph::new(placeholder)
                    .style(Style::default().fg(colors::NEUTRAL))
                    .alignment(Alignment::Center)
                    .block(block),
                list_area,
            );
        } else {
            let list_items: Vec<ListItem> = items
                .iter()
                .map(|item| {
                    let heart = if manager.is_favorite(item) {
                        Span::styled("♥ ", Style::default().fg(colors::FAVORITE))
                    } else {
                        Span::styled("♡ ", Style::default().fg(colors::NEUTRAL))
                    };
                    ListItem::new(Line::from(vec![
                        heart,
                        Span::raw(item.caption().trim_start().to_string()),
                        Span::styled(
                            format!("  #{}", item.id),
                            Style::default().fg(colors::NEUTRAL),
                        ),
                    ]))
                })
                .collect();

            let list = List::new(list_items)
                .block(block)
                .highlight_style(
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");

            self.clamp_selection(shown);
            f.render_stateful_widget(list, list_area, &mut self.list_state);
        }

        let status = StatusBar::new(shown, total, manager.playback_status())
            .with_message(self.message.as_deref());
        f.render_widget(status, status_area);
    }
}
