use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::filter_bar::select_area;
use crate::tui::components::header::toggle_button_area;
use crate::tui::components::{CategoryPicker, FilterBar, Header, ItemList};
use crate::tui::theme::Theme;

/// Widest the body grows before it is centered.
const MAX_BODY_WIDTH: u16 = 80;

const HELP_TEXT: &str = "f/Enter Filter  Tab/←→ Cycle  ↑↓ Move  t Theme  q Quit";

/// Screen regions, computed the same way for drawing and for hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub filter_bar: Rect,
    pub list: Rect,
    pub summary: Rect,
    pub help: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        use Constraint::{Length, Min};
        let [header, _, body_rows] = Layout::vertical([Length(3), Length(1), Min(0)]).areas(area);

        let body_width = body_rows.width.min(MAX_BODY_WIDTH);
        let body = Rect::new(
            body_rows.x + (body_rows.width - body_width) / 2,
            body_rows.y,
            body_width,
            body_rows.height,
        );
        let [filter_bar, list, summary, help] =
            Layout::vertical([Length(3), Min(3), Length(1), Length(1)]).areas(body);

        Self {
            header,
            filter_bar,
            list,
            summary,
            help,
        }
    }
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    ThemeToggle,
    FilterControl,
    ListRow(usize),
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let view = &app.view;
    let theme = Theme::for_mode(view.dark_mode);
    let layout = ScreenLayout::new(frame.area());

    frame.render_widget(Block::default().style(theme.base()), frame.area());

    Header::new(view.toggle_label(), &app.status_message, theme).render(frame, layout.header);
    FilterBar::new(&view.selected, theme).render(frame, layout.filter_bar);
    ItemList::new(
        &mut tui.item_list,
        &view.items,
        view.empty_message(),
        theme,
        view.dark_mode,
    )
    .render(frame, layout.list);

    let summary = Paragraph::new(view.summary())
        .style(Style::default().fg(theme.muted))
        .alignment(Alignment::Center);
    frame.render_widget(summary, layout.summary);

    let help = Paragraph::new(HELP_TEXT)
        .style(Style::default().fg(theme.muted))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);

    if let Some(picker) = tui.picker.as_mut() {
        CategoryPicker::new(picker, &view.selected, theme).render(frame, frame.area());
    }
}

/// Hit test: which control (if any) sits under a click at (`column`, `row`).
pub fn hit_test(
    column: u16,
    row: u16,
    frame_area: Rect,
    toggle_label: &str,
    list_offset: usize,
    row_count: usize,
) -> Option<Hit> {
    let layout = ScreenLayout::new(frame_area);
    let position = Position::new(column, row);

    if toggle_button_area(layout.header, toggle_label).contains(position) {
        return Some(Hit::ThemeToggle);
    }
    if select_area(layout.filter_bar).contains(position) {
        return Some(Hit::FilterControl);
    }

    // Rows start inside the top border
    let inner = layout.list.inner(ratatui::layout::Margin::new(1, 1));
    if inner.contains(position) {
        let index = (row - inner.y) as usize + list_offset;
        if index < row_count {
            return Some(Hit::ListRow(index));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::catalog::Category;
    use crate::core::filter::CategoryFilter;
    use crate::core::state::App;
    use crate::core::view::DARK_MODE_LABEL;
    use crate::test_support::{catalog_without_dessert, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                draw_ui(f, app, tui);
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
    fn test_draw_ui_default_view() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = screen_text(&app, &mut tui);
        assert!(text.contains("Shopster"));
        assert!(text.contains("Grocery List"));
        assert!(text.contains("All Categories"));
        assert!(text.contains("Dark Mode"));
        assert!(text.contains("Broccoli Crowns"));
        assert!(text.contains("Showing 7 of 7 total items."));
    }

    #[test]
    fn test_draw_ui_dairy_filter() {
        let mut app = test_app();
        update(&mut app, Action::SetCategory(CategoryFilter::Only(Category::Dairy)));
        let mut tui = TuiState::new();
        let text = screen_text(&app, &mut tui);
        assert!(text.contains("Organic Milk (1 Gal)"));
        assert!(text.contains("Cheddar Cheese Block"));
        assert!(!text.contains("Ripe Bananas"));
        assert!(text.contains("Showing 2 of 7 total items."));
    }

    #[test]
    fn test_draw_ui_empty_state() {
        let mut app = App::new(catalog_without_dessert());
        update(&mut app, Action::SetCategory(CategoryFilter::Only(Category::Dessert)));
        let mut tui = TuiState::new();
        let text = screen_text(&app, &mut tui);
        assert!(text.contains("No items found in the \"Dessert\" category."));
        assert!(text.contains("Showing 0 of 3 total items."));
    }

    #[test]
    fn test_draw_ui_dark_mode_label() {
        let mut app = test_app();
        update(&mut app, Action::ToggleDarkMode);
        let mut tui = TuiState::new();
        let text = screen_text(&app, &mut tui);
        assert!(text.contains("Light Mode"));
        assert!(!text.contains("Dark Mode"));
    }

    #[test]
    fn test_draw_ui_with_picker_open() {
        let app = test_app();
        let mut tui = TuiState::new();
        tui.open_picker(&app.view.selected);
        let text = screen_text(&app, &mut tui);
        assert!(text.contains("Filter by category"));
    }

    #[test]
    fn test_draw_ui_tiny_terminal_does_not_panic() {
        let app = test_app();
        let mut tui = TuiState::new();
        let backend = TestBackend::new(10, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();
    }

    #[test]
    fn test_hit_test_controls() {
        let frame = Rect::new(0, 0, 80, 24);
        let layout = ScreenLayout::new(frame);
        let toggle = toggle_button_area(layout.header, DARK_MODE_LABEL);
        assert_eq!(
            hit_test(toggle.x, toggle.y, frame, DARK_MODE_LABEL, 0, 7),
            Some(Hit::ThemeToggle)
        );

        let select = select_area(layout.filter_bar);
        assert_eq!(
            hit_test(select.x + 1, select.y + 1, frame, DARK_MODE_LABEL, 0, 7),
            Some(Hit::FilterControl)
        );

        let first_row = layout.list.y + 1;
        assert_eq!(
            hit_test(layout.list.x + 3, first_row + 2, frame, DARK_MODE_LABEL, 0, 7),
            Some(Hit::ListRow(2))
        );
        assert_eq!(
            hit_test(layout.list.x + 3, first_row + 2, frame, DARK_MODE_LABEL, 0, 2),
            None
        );
    }
}
