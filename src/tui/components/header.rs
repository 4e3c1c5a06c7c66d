//! # Header Component
//!
//! Top bar with the app title, the status message, and the theme toggle button.
//!
//! Stateless: all data arrives as props, so rendering is a pure function of
//! them. The toggle's label comes from `ListView::toggle_label()` and names
//! the mode a press switches to, e.g. "☾ Dark Mode" while the light theme is on.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub const APP_TITLE: &str = "Shopster";

pub struct Header<'a> {
    pub toggle_label: &'a str,
    pub status_message: &'a str,
    pub theme: Theme,
}

impl<'a> Header<'a> {
    pub fn new(toggle_label: &'a str, status_message: &'a str, theme: Theme) -> Self {
        Self {
            toggle_label,
            status_message,
            theme,
        }
    }
}

/// Where the toggle button sits inside the header area (right-aligned, middle row).
pub fn toggle_button_area(header: Rect, label: &str) -> Rect {
    let width = (label.width() as u16 + 4).min(header.width);
    let y = header.y + header.height.saturating_sub(1) / 2;
    Rect::new(
        header.x + header.width.saturating_sub(width + 1),
        y,
        width,
        header.height.min(1),
    )
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let bar_style = Style::default().bg(self.theme.header_bg).fg(self.theme.header_fg);
        frame.render_widget(Block::default().style(bar_style), area);

        if area.height == 0 {
            return;
        }
        let middle = area.y + area.height.saturating_sub(1) / 2;
        let row = Rect::new(area.x + 1, middle, area.width.saturating_sub(2), 1);

        let button_area = toggle_button_area(area, self.toggle_label);
        let title_width = APP_TITLE.width() as u16;
        let [title_area, status_area] = Layout::horizontal([
            Constraint::Length(title_width),
            Constraint::Min(0),
        ])
        .areas(Rect::new(row.x, row.y, button_area.x.saturating_sub(row.x), 1));

        let title = Line::from(vec![Span::styled(
            APP_TITLE,
            bar_style.add_modifier(Modifier::BOLD),
        )]);
        frame.render_widget(Paragraph::new(title).style(bar_style), title_area);

        if !self.status_message.is_empty() {
            let status = Paragraph::new(self.status_message)
                .style(bar_style.add_modifier(Modifier::DIM))
                .alignment(Alignment::Center);
            frame.render_widget(status, status_area);
        }

        let button = Paragraph::new(format!("  {}  ", self.toggle_label))
            .style(
                Style::default()
                    .bg(self.theme.button_bg)
                    .fg(self.theme.button_fg)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(button, button_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::{DARK_MODE_LABEL, LIGHT_MODE_LABEL};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(label: &str, status: &str, dark: bool) -> String {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut header = Header::new(label, status, Theme::for_mode(dark));
        terminal
            .draw(|f| {
                header.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_header_shows_title_and_toggle() {
        let text = render_text(DARK_MODE_LABEL, "", false);
        assert!(text.contains("Shopster"));
        assert!(text.contains("Dark Mode"));
    }

    #[test]
    fn test_header_dark_label() {
        let text = render_text(LIGHT_MODE_LABEL, "Filter: All | Dark", true);
        assert!(text.contains("Light Mode"));
        assert!(text.contains("Filter: All | Dark"));
    }

    #[test]
    fn test_toggle_button_area_is_right_aligned() {
        let header = Rect::new(0, 0, 80, 3);
        let button = toggle_button_area(header, DARK_MODE_LABEL);
        assert_eq!(button.y, 1);
        assert_eq!(button.right(), 79);
        assert_eq!(button.width, DARK_MODE_LABEL.width() as u16 + 4);
    }
}
