//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the derived
//! view, and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 250ms waiting for input and
//! only redraws after an event arrived (resize included). All pending events
//! are drained before the next frame.

mod component;
pub mod components;
pub mod event;
pub mod theme;
pub mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::filter::CategoryFilter;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{CategoryPickerState, ItemListState, PickerEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::Hit;

const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub item_list: ItemListState,
    // Category picker overlay (None = hidden)
    pub picker: Option<CategoryPickerState>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            item_list: ItemListState::new(),
            picker: None,
        }
    }

    pub fn open_picker(&mut self, current: &CategoryFilter) {
        self.picker = Some(CategoryPickerState::new(current));
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Route one input event. Returns the action it produced, if any.
///
/// Kept free of terminal I/O so the full input → action mapping is testable;
/// `frame_area` is only needed for mouse hit testing.
pub fn dispatch(
    event: &TuiEvent,
    app: &App,
    tui: &mut TuiState,
    frame_area: ratatui::layout::Rect,
) -> Option<Action> {
    // ForceQuit (Ctrl+C) always quits, even with the picker open
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    // When the picker is open, route all events to it
    if let Some(picker) = tui.picker.as_mut() {
        let picked = match event {
            TuiEvent::MouseClick(column, row) => picker.handle_click(*column, *row, frame_area),
            other => picker.handle_event(other),
        };
        return match picked {
            Some(PickerEvent::Select(next)) => {
                tui.picker = None;
                Some(Action::SetCategory(next))
            }
            Some(PickerEvent::Dismiss) => {
                tui.picker = None;
                None
            }
            None => None,
        };
    }

    match event {
        TuiEvent::Quit | TuiEvent::Escape => Some(Action::Quit),
        TuiEvent::ToggleTheme => Some(Action::ToggleDarkMode),
        TuiEvent::NextCategory => Some(Action::NextCategory),
        TuiEvent::PreviousCategory => Some(Action::PreviousCategory),
        TuiEvent::OpenPicker | TuiEvent::Submit => {
            tui.open_picker(&app.view.selected);
            None
        }
        TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
            tui.item_list.handle_event(event);
            None
        }
        TuiEvent::MouseClick(column, row) => {
            let hit = ui::hit_test(
                *column,
                *row,
                frame_area,
                app.view.toggle_label(),
                tui.item_list.list_state.offset(),
                app.view.items.len(),
            );
            match hit {
                Some(Hit::ThemeToggle) => Some(Action::ToggleDarkMode),
                Some(Hit::FilterControl) => {
                    tui.open_picker(&app.view.selected);
                    None
                }
                Some(Hit::ListRow(index)) => {
                    tui.item_list.list_state.select(Some(index));
                    None
                }
                None => None,
            }
        }
        TuiEvent::ForceQuit | TuiEvent::Resize => None,
    }
}

pub fn run(catalog: Catalog, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(catalog, config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));

    info!("Shopster shutting down");
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let frame_area = terminal.get_frame().area();
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = dispatch(&event, app, tui, frame_area) else {
                continue;
            };
            debug!("Event {:?} -> {:?}", event, action);
            if update(app, action) == Effect::Quit {
                return Ok(());
            }
        }
    }
}
