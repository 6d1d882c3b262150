use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Widget,
};
use unicode_width::UnicodeWidthChar;

use crate::{
    splash::{SplashFrame, timeline::PANEL_COUNT},
    util::colors,
};

const LOGOTYPE: &str = "MyGO!!!!!  迷子でもいい、前へ進め";

/// Mark glyphs for each 45° step, clockwise from upright.
const MARK: [&str; 8] = ["▲", "◥", "▶", "◢", "▼", "◣", "◀", "◤"];

pub struct SplashWidget {
    frame: SplashFrame,
}

impl SplashWidget {
    pub fn new(frame: SplashFrame) -> Self {
        Self { frame }
    }

    fn mark(&self) -> &'static str {
        let steps = (self.frame.rotation_angle / 45.0).round() as i64;
        MARK[steps.rem_euclid(MARK.len() as i64) as usize]
    }
}

/// Leading part of `text` covering `progress` of its display width.
pub fn revealed(text: &str, progress: f64) -> String {
    let total: usize = text.chars().filter_map(|c| c.width()).sum();
    let visible = (total as f64 * progress.clamp(0.0, 1.0)).floor() as usize;

    let mut width = 0;
    text.chars()
        .take_while(|c| {
            width += c.width().unwrap_or(0);
            width <= visible
        })
        .collect()
}

impl Widget for SplashWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, PANEL_COUNT as u32); PANEL_COUNT])
            .split(area);
        for (panel, opacity) in panels.iter().zip(self.frame.panel_opacities) {
            let bg = colors::fade(colors::PANEL, colors::BACKGROUND, opacity);
            buf.set_style(*panel, Style::new().bg(bg));
        }

        if area.height < 3 || area.width == 0 {
            return;
        }

        let fg = colors::fade(
            colors::LOGO,
            colors::BACKGROUND,
            self.frame.fade_opacity,
        );
        let center_y = area.y + area.height / 2;

        let mark = self.mark();
        let mark_x = area.x + area.width.saturating_sub(1) / 2;
        buf.set_string(mark_x, center_y - 1, mark, Style::new().fg(fg));

        if let Some(progress) = self.frame.text_reveal_progress {
            let full_width: usize = LOGOTYPE.chars().filter_map(|c| c.width()).sum();
            let x = area.x + area.width.saturating_sub(full_width as u16) / 2;
            buf.set_stringn(
                x,
                center_y + 1,
                revealed(LOGOTYPE, progress),
                area.width as usize,
                Style::new().fg(fg),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(rotation_angle: f64) -> SplashFrame {
        SplashFrame {
            rotation_angle,
            text_reveal_progress: None,
            fade_opacity: 1.0,
            panel_opacities: [1.0; PANEL_COUNT],
        }
    }

    #[test]
    fn mark_follows_rotation() {
        assert_eq!(SplashWidget::new(frame(0.0)).mark(), "▲");
        assert_eq!(SplashWidget::new(frame(-90.0)).mark(), "◀");
        assert_eq!(SplashWidget::new(frame(180.0)).mark(), "▼");
        assert_eq!(SplashWidget::new(frame(44.0)).mark(), "◥");
    }

    #[test]
    fn reveal_respects_wide_characters() {
        assert_eq!(revealed("ab迷子", 0.0), "");
        assert_eq!(revealed("ab迷子", 0.5), "ab");
        assert_eq!(revealed("ab迷子", 0.6), "ab");
        assert_eq!(revealed("ab迷子", 0.67), "ab迷");
        assert_eq!(revealed("ab迷子", 1.0), "ab迷子");
    }

    #[test]
    fn renders_without_panicking_on_tiny_areas() {
        for (w, h) in [(0, 0), (1, 1), (4, 2), (80, 24)] {
            let area = Rect::new(0, 0, w, h);
            let mut buf = Buffer::empty(area);
            let mut f = frame(90.0);
            f.text_reveal_progress = Some(0.5);
            SplashWidget::new(f).render(area, &mut buf);
        }
    }
}
