//! # Category Picker Component
//!
//! Overlay listing every filter option (`All Categories`, then each category).
//! Opened from the filter control, dismissed with Esc.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CategoryPickerState` lives in `TuiState` while the overlay is open
//! - `CategoryPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::filter::CategoryFilter;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

const OVERLAY_WIDTH: u16 = 30;

/// Persistent state for the category picker overlay.
pub struct CategoryPickerState {
    pub options: Vec<CategoryFilter>,
    pub selected: usize,
    pub list_state: ListState,
}

impl CategoryPickerState {
    /// Open the picker with the cursor on the currently applied filter.
    pub fn new(current: &CategoryFilter) -> Self {
        let options = CategoryFilter::options();
        let selected = options.iter().position(|o| o == current).unwrap_or(0);
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            options,
            selected,
            list_state,
        }
    }

    fn move_to(&mut self, index: usize) {
        self.selected = index.min(self.options.len().saturating_sub(1));
        self.list_state.select(Some(self.selected));
    }

    /// Handle a key event, returning a PickerEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<PickerEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::Quit => Some(PickerEvent::Dismiss),
            TuiEvent::CursorUp | TuiEvent::ScrollUp | TuiEvent::PreviousCategory => {
                self.move_to(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown | TuiEvent::NextCategory => {
                self.move_to(self.selected + 1);
                None
            }
            TuiEvent::Submit | TuiEvent::OpenPicker => self
                .options
                .get(self.selected)
                .cloned()
                .map(PickerEvent::Select),
            _ => None,
        }
    }

    /// Select the option under a mouse click, or dismiss when the click is outside.
    pub fn handle_click(&mut self, column: u16, row: u16, frame_area: Rect) -> Option<PickerEvent> {
        let overlay = overlay_area(frame_area, self.options.len());
        let inside = column >= overlay.x
            && column < overlay.right()
            && row >= overlay.y
            && row < overlay.bottom();
        if !inside {
            return Some(PickerEvent::Dismiss);
        }
        // Top border, then one row per option
        let index = row.checked_sub(overlay.y + 1)? as usize;
        let option = self.options.get(index)?.clone();
        self.move_to(index);
        Some(PickerEvent::Select(option))
    }
}

/// Events emitted by the category picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    Select(CategoryFilter),
    Dismiss,
}

/// Transient render wrapper for the category picker overlay.
pub struct CategoryPicker<'a> {
    state: &'a mut CategoryPickerState,
    current: &'a CategoryFilter,
    theme: Theme,
}

impl<'a> CategoryPicker<'a> {
    pub fn new(state: &'a mut CategoryPickerState, current: &'a CategoryFilter, theme: Theme) -> Self {
        Self {
            state,
            current,
            theme,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = overlay_area(area, self.state.options.len());

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(Style::default().bg(self.theme.surface).fg(self.theme.text))
            .title(" Filter by category ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = self
            .state
            .options
            .iter()
            .map(|option| {
                let marker = if option == self.current { "✓ " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(self.theme.accent)),
                    Span::raw(option.option_label().to_string()),
                ]))
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Fixed-width box, tall enough for every option plus borders, centered in `outer`.
pub fn overlay_area(outer: Rect, option_count: usize) -> Rect {
    let height = option_count as u16 + 2;
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(OVERLAY_WIDTH),
        Constraint::Fill(1),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Category;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_opens_on_current_filter() {
        let state = CategoryPickerState::new(&CategoryFilter::Only(Category::Dairy));
        assert_eq!(state.selected, 2);
        assert_eq!(state.list_state.selected(), Some(2));
    }

    #[test]
    fn test_navigate_and_select() {
        let mut state = CategoryPickerState::new(&CategoryFilter::All);
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(PickerEvent::Select(CategoryFilter::Only(Category::Produce)))
        );
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        let mut state = CategoryPickerState::new(&CategoryFilter::All);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);
        for _ in 0..10 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.selected, 3);
    }

    #[test]
    fn test_escape_dismisses() {
        let mut state = CategoryPickerState::new(&CategoryFilter::All);
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(PickerEvent::Dismiss));
    }

    #[test]
    fn test_click_selects_row() {
        let frame = Rect::new(0, 0, 80, 24);
        let mut state = CategoryPickerState::new(&CategoryFilter::All);
        let overlay = overlay_area(frame, state.options.len());
        // Row of "Dessert": border + 3
        let event = state.handle_click(overlay.x + 2, overlay.y + 4, frame);
        assert_eq!(
            event,
            Some(PickerEvent::Select(CategoryFilter::Only(Category::Dessert)))
        );
    }

    #[test]
    fn test_click_outside_dismisses() {
        let frame = Rect::new(0, 0, 80, 24);
        let mut state = CategoryPickerState::new(&CategoryFilter::All);
        assert_eq!(state.handle_click(0, 0, frame), Some(PickerEvent::Dismiss));
    }

    #[test]
    fn test_renders_every_option() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = CategoryPickerState::new(&CategoryFilter::All);
        let current = CategoryFilter::All;
        terminal
            .draw(|f| {
                CategoryPicker::new(&mut state, &current, Theme::for_mode(true)).render(f, f.area());
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        for label in ["All Categories", "Produce", "Dairy", "Dessert"] {
            assert!(text.contains(label), "missing {label}");
        }
    }
}
