//! # Application State
//!
//! Core state for Shopster. Domain logic only, no TUI-specific types.
//! Presentation state (picker overlay, row cursor) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog          // injected, never mutated
//! ├── display: DisplayState     // selected filter + dark mode
//! ├── view: ListView            // derived from catalog + display
//! └── status_message: String    // status line text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs,
//! which recomputes `view` after every change.

use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::filter::CategoryFilter;
use crate::core::view::ListView;

/// The two UI-local flags. They vary independently of each other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayState {
    pub selected: CategoryFilter,
    pub dark_mode: bool,
}

impl DisplayState {
    pub fn set_category(&mut self, next: CategoryFilter) {
        self.selected = next;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Advance to the next picker option, wrapping after the last one.
    pub fn next_category(&mut self) {
        let options = CategoryFilter::options();
        let next = match options.iter().position(|o| *o == self.selected) {
            Some(i) => options[(i + 1) % options.len()].clone(),
            None => CategoryFilter::All,
        };
        self.set_category(next);
    }

    /// Step back to the previous picker option, wrapping before the first one.
    pub fn previous_category(&mut self) {
        let options = CategoryFilter::options();
        let previous = match options.iter().position(|o| *o == self.selected) {
            Some(i) => options[(i + options.len() - 1) % options.len()].clone(),
            None => CategoryFilter::All,
        };
        self.set_category(previous);
    }
}

pub struct App {
    pub catalog: Catalog,
    pub display: DisplayState,
    pub view: ListView,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_display(catalog, DisplayState::default())
    }

    pub fn with_display(catalog: Catalog, display: DisplayState) -> Self {
        let view = ListView::derive(&catalog, &display);
        Self {
            catalog,
            display,
            view,
            status_message: String::from("Welcome to Shopster!"),
        }
    }

    /// Build the app with the startup display values from config.
    pub fn from_config(catalog: Catalog, config: &ResolvedConfig) -> Self {
        Self::with_display(
            catalog,
            DisplayState {
                selected: config.initial_category.clone(),
                dark_mode: config.dark_mode,
            },
        )
    }

    /// Recompute the derived view from the current catalog and display state.
    pub fn refresh_view(&mut self) {
        self.view = ListView::derive(&self.catalog, &self.display);
    }
}
