//! # Filter Engine
//!
//! Maps (items, selected filter) to the visible subset. Pure and total: an
//! empty result is an ordinary outcome, never an error.

use std::fmt;

use crate::core::catalog::{Category, Item};

/// The value of the category picker. `All` means no filter is applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Every picker option in display order: `All`, then each known category.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::KNOWN.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    /// Text shown inside the select control.
    pub fn option_label(&self) -> &str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Parse a config or CLI value. Only `All` and the known categories are accepted.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("all") {
            return Some(CategoryFilter::All);
        }
        Category::KNOWN
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value))
            .map(CategoryFilter::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => f.write_str(category.as_str()),
        }
    }
}

/// Return the items matching `selected`, preserving their relative order.
///
/// Accepts any iterator of item references so the output can be filtered again.
pub fn filter<'a, I>(items: I, selected: &CategoryFilter) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    items
        .into_iter()
        .filter(|item| selected.matches(&item.category))
        .collect()
}
