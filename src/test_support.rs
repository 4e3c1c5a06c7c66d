//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::catalog::{Catalog, Category, Item};
use crate::core::state::App;

/// Demo groceries minus the desserts.
pub fn catalog_without_dessert() -> Catalog {
    Catalog::new(vec![
        Item::new(1, "Organic Milk (1 Gal)", Category::Dairy),
        Item::new(2, "Fuji Apples (3 lbs)", Category::Produce),
        Item::new(5, "Ripe Bananas", Category::Produce),
    ])
    .unwrap()
}

/// Interleaved categories, including one the picker does not offer.
pub fn mixed_catalog() -> Catalog {
    Catalog::new(vec![
        Item::new(1, "Kale", Category::Produce),
        Item::new(2, "Sourdough Loaf", Category::from("Bakery")),
        Item::new(3, "Butter", Category::Dairy),
        Item::new(4, "Tiramisu", Category::Dessert),
        Item::new(5, "Leeks", Category::Produce),
        Item::new(6, "Kefir", Category::Dairy),
    ])
    .unwrap()
}

/// Creates a test App over the demo catalog with default display state.
pub fn test_app() -> App {
    App::new(Catalog::demo())
}
