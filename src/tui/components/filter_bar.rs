//! # FilterBar Component
//!
//! The "Grocery List" heading plus the select-style control that shows the
//! current category filter. Activating the control (Enter, `f`, or a click)
//! opens the category picker overlay.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::filter::CategoryFilter;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub const HEADING: &str = "Grocery List";
const SELECT_WIDTH: u16 = 24;

pub struct FilterBar<'a> {
    pub selected: &'a CategoryFilter,
    pub theme: Theme,
}

impl<'a> FilterBar<'a> {
    pub fn new(selected: &'a CategoryFilter, theme: Theme) -> Self {
        Self { selected, theme }
    }
}

/// The select control's rect: right-aligned, full height of the bar.
pub fn select_area(bar: Rect) -> Rect {
    let width = SELECT_WIDTH.min(bar.width);
    Rect::new(bar.x + bar.width.saturating_sub(width), bar.y, width, bar.height)
}

impl Component for FilterBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let select = select_area(area);
        let heading_area = Rect::new(
            area.x + 1,
            area.y + area.height.saturating_sub(1) / 2,
            select.x.saturating_sub(area.x + 1),
            area.height.min(1),
        );

        let heading = Line::from(vec![
            Span::styled("▣ ", Style::default().fg(self.theme.accent)),
            Span::styled(
                HEADING,
                Style::default().fg(self.theme.text).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(heading), heading_area);

        let control = Paragraph::new(Line::from(vec![
            Span::raw(self.selected.option_label().to_string()),
        ]))
        .style(Style::default().fg(self.theme.text).bg(self.theme.surface))
        .block(
            Block::bordered()
                .border_style(Style::default().fg(self.theme.border))
                .title_bottom(Line::from(" ▾ ").right_aligned())
                .title_style(Style::default().fg(self.theme.muted)),
        );
        frame.render_widget(control, select);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Category;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(selected: &CategoryFilter) -> String {
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = FilterBar::new(selected, Theme::for_mode(false));
        terminal
            .draw(|f| {
                bar.render(f, f.area());
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
    fn test_shows_heading_and_all_label() {
        let text = render_text(&CategoryFilter::All);
        assert!(text.contains("Grocery List"));
        assert!(text.contains("All Categories"));
    }

    #[test]
    fn test_control_mirrors_selection() {
        let text = render_text(&CategoryFilter::Only(Category::Dessert));
        assert!(text.contains("Dessert"));
        assert!(!text.contains("All Categories"));
    }

    #[test]
    fn test_select_area_right_aligned() {
        let area = select_area(Rect::new(0, 4, 60, 3));
        assert_eq!(area, Rect::new(36, 4, 24, 3));
    }
}
