//! # Derived View
//!
//! Everything the presentation layer draws, computed from current state:
//!
//! ```text
//! Catalog + DisplayState  →  ListView::derive()  →  render
//! ```
//!
//! `App` keeps the latest `ListView` and `update()` rebuilds it after every
//! action, so renderers never call the filter engine themselves.

use unicode_width::UnicodeWidthStr;

use crate::core::catalog::{Catalog, Item};
use crate::core::filter::{CategoryFilter, filter};
use crate::core::state::DisplayState;

pub const DARK_MODE_LABEL: &str = "☾ Dark Mode";
pub const LIGHT_MODE_LABEL: &str = "☀ Light Mode";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListView {
    /// Visible items in catalog order.
    pub items: Vec<Item>,
    /// Size of the unfiltered catalog.
    pub total: usize,
    pub selected: CategoryFilter,
    pub dark_mode: bool,
}

impl ListView {
    pub fn derive(catalog: &Catalog, display: &DisplayState) -> Self {
        Self {
            items: filter(catalog.items(), &display.selected)
                .into_iter()
                .cloned()
                .collect(),
            total: catalog.len(),
            selected: display.selected.clone(),
            dark_mode: display.dark_mode,
        }
    }

    pub fn summary(&self) -> String {
        format!("Showing {} of {} total items.", self.items.len(), self.total)
    }

    /// `Some` only when nothing matches the current filter.
    pub fn empty_message(&self) -> Option<String> {
        self.items
            .is_empty()
            .then(|| format!("No items found in the \"{}\" category.", self.selected))
    }

    /// Label of the theme toggle. Names the mode a press switches to.
    pub fn toggle_label(&self) -> &'static str {
        if self.dark_mode {
            LIGHT_MODE_LABEL
        } else {
            DARK_MODE_LABEL
        }
    }

    /// Plain-text rendering used by `--print`.
    pub fn to_plain_text(&self) -> String {
        let mut out = format!("Grocery List [{}]\n", self.selected.option_label());
        match self.empty_message() {
            Some(message) => {
                out.push_str(&message);
                out.push('\n');
            }
            None => {
                let width = self
                    .items
                    .iter()
                    .map(|i| i.name.width())
                    .max()
                    .unwrap_or(0);
                for item in &self.items {
                    let pad = width - item.name.width();
                    out.push_str(&format!(
                        "  {}{}  {}\n",
                        item.name,
                        " ".repeat(pad),
                        item.category.as_str().to_uppercase()
                    ));
                }
            }
        }
        out.push_str(&self.summary());
        out.push('\n');
        out
    }
}
