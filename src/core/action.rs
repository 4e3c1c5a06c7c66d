//! # Actions
//!
//! Everything that can happen in Shopster becomes an `Action`.
//! User picks "Dairy" in the picker? That's `Action::SetCategory(..)`.
//! User presses `t`? That's `Action::ToggleDarkMode`.
//!
//! The `update()` function takes the current state and an action, applies it,
//! and rebuilds the derived view. No I/O here besides logging.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ fresh ListView)
//! ```

use log::debug;

use crate::core::filter::CategoryFilter;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetCategory(CategoryFilter),
    NextCategory,
    PreviousCategory,
    ToggleDarkMode,
    Quit,
}

/// What the caller must do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SetCategory(next) => app.display.set_category(next),
        Action::NextCategory => app.display.next_category(),
        Action::PreviousCategory => app.display.previous_category(),
        Action::ToggleDarkMode => app.display.toggle_dark_mode(),
        Action::Quit => return Effect::Quit,
    }

    app.refresh_view();
    app.status_message = format!(
        "Filter: {} | {}",
        app.view.selected,
        if app.view.dark_mode { "Dark" } else { "Light" }
    );
    Effect::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{Catalog, Category};
    use crate::core::state::App;
    use crate::test_support::{catalog_without_dessert, test_app};

    fn visible_names(app: &App) -> Vec<&str> {
        app.view.items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_set_category_recomputes_view() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SetCategory(CategoryFilter::Only(Category::Dairy)));
        assert_eq!(effect, Effect::None);
        assert_eq!(visible_names(&app), ["Organic Milk (1 Gal)", "Cheddar Cheese Block"]);
        assert_eq!(app.view.summary(), "Showing 2 of 7 total items.");
    }

    #[test]
    fn test_toggle_keeps_selection_and_results() {
        let mut app = test_app();
        update(&mut app, Action::SetCategory(CategoryFilter::Only(Category::Produce)));
        let before = app.view.items.clone();

        update(&mut app, Action::ToggleDarkMode);

        assert!(app.display.dark_mode);
        assert!(app.view.dark_mode);
        assert_eq!(app.display.selected, CategoryFilter::Only(Category::Produce));
        assert_eq!(app.view.items, before);
    }

    #[test]
    fn test_toggle_twice_restores_view() {
        let mut app = test_app();
        let original = app.view.clone();
        update(&mut app, Action::ToggleDarkMode);
        update(&mut app, Action::ToggleDarkMode);
        assert_eq!(app.view, original);
    }

    #[test]
    fn test_absent_category_shows_empty_state() {
        let mut app = App::new(catalog_without_dessert());
        update(&mut app, Action::SetCategory(CategoryFilter::Only(Category::Dessert)));
        assert!(app.view.items.is_empty());
        assert_eq!(
            app.view.empty_message().as_deref(),
            Some("No items found in the \"Dessert\" category.")
        );
    }

    #[test]
    fn test_cycle_actions() {
        let mut app = App::new(Catalog::demo());
        update(&mut app, Action::NextCategory);
        assert_eq!(app.view.selected, CategoryFilter::Only(Category::Produce));
        update(&mut app, Action::PreviousCategory);
        update(&mut app, Action::PreviousCategory);
        assert_eq!(app.view.selected, CategoryFilter::Only(Category::Dessert));
        assert_eq!(app.view.items.len(), 2);
    }

    #[test]
    fn test_status_message_tracks_state() {
        let mut app = test_app();
        update(&mut app, Action::ToggleDarkMode);
        assert_eq!(app.status_message, "Filter: All | Dark");
    }

    #[test]
    fn test_quit_leaves_state_untouched() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
        assert_eq!(app.status_message, "Welcome to Shopster!");
    }
}
