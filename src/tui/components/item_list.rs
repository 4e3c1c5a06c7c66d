//! # ItemList Component
//!
//! The filtered grocery rows: item name on the left, category badge on the
//! right. When the filter matches nothing, an italic empty-state message
//! naming the selected category is shown instead.
//!
//! ## Architecture
//!
//! `ItemList` is a transient component (created each frame) that wraps
//! `&'a mut ItemListState` (persistent state) and the visible items (props).
//! The state holds the row cursor; it is clamped on every render so it never
//! points past the end of a list that just shrank.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::catalog::Item;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::{Theme, badge_style};

/// Row cursor for the item list. Must be persisted in the parent TuiState.
#[derive(Debug, Default)]
pub struct ItemListState {
    pub list_state: ListState,
    /// Number of rows at the last render, used to bound cursor movement.
    pub row_count: usize,
}

impl ItemListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the cursor inside `0..len`, or clear it when the list is empty.
    pub fn clamp(&mut self, len: usize) {
        self.row_count = len;
        match (self.list_state.selected(), len) {
            (_, 0) => self.list_state.select(None),
            (Some(i), _) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }
}

impl EventHandler for ItemListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        if self.row_count == 0 {
            return None;
        }
        let last = self.row_count - 1;
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                let next = self.selected().map(|i| i.saturating_sub(1)).unwrap_or(last);
                self.list_state.select(Some(next));
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                let next = self.selected().map(|i| (i + 1).min(last)).unwrap_or(0);
                self.list_state.select(Some(next));
            }
            _ => {}
        }
        None
    }
}

pub struct ItemList<'a> {
    state: &'a mut ItemListState,
    items: &'a [Item],
    empty_message: Option<String>,
    theme: Theme,
    dark_mode: bool,
}

impl<'a> ItemList<'a> {
    pub fn new(
        state: &'a mut ItemListState,
        items: &'a [Item],
        empty_message: Option<String>,
        theme: Theme,
        dark_mode: bool,
    ) -> Self {
        Self {
            state,
            items,
            empty_message,
            theme,
            dark_mode,
        }
    }

    fn row(&self, item: &Item, inner_width: usize) -> ListItem<'static> {
        let badge = format!(" {} ", item.category.as_str().to_uppercase());
        let name_width = inner_width.saturating_sub(badge.width() + 1);
        let name = truncate_str(&item.name, name_width);
        let gap = inner_width.saturating_sub(name.width() + badge.width());

        ListItem::new(Line::from(vec![
            Span::styled(
                name,
                Style::default().fg(self.theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(gap)),
            Span::styled(badge, badge_style(&item.category, self.dark_mode)),
        ]))
    }
}

impl Component for ItemList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_style(Style::default().fg(self.theme.border))
            .style(Style::default().bg(self.theme.surface))
            .padding(Padding::horizontal(1));

        self.state.clamp(self.items.len());

        if let Some(message) = self.empty_message.take() {
            let empty = Paragraph::new(message)
                .style(
                    Style::default()
                        .fg(self.theme.muted)
                        .add_modifier(Modifier::ITALIC),
                )
                .alignment(Alignment::Center)
                .block(block.padding(Padding::uniform(1)));
            frame.render_widget(empty, area);
            return;
        }

        // borders + horizontal padding
        let inner_width = area.width.saturating_sub(4) as usize;
        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| self.row(item, inner_width))
            .collect();

        let list = List::new(rows)
            .block(block)
            .highlight_style(Style::default().bg(self.theme.highlight));
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate to `max_width` display columns, ending with "…" when cut.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
