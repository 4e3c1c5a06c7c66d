//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `Header`: App title, status message and the theme toggle button
//! - `FilterBar`: "Grocery List" heading and the category select control
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state between frames:
//! - `ItemList`: Filtered rows with category badges and a row cursor
//! - `CategoryPicker`: Overlay for choosing the category filter
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (function parameters), not by
//! reaching into `App`. Everything they draw comes from the derived
//! `ListView`, so a component never calls the filter engine itself.
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! Header::new(app.view.toggle_label(), &app.status_message, theme).render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! Header::render(frame, area); // reads from App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── header.rs           (Title bar + theme toggle)
//! ├── filter_bar.rs       (Heading + select control)
//! ├── item_list.rs        (Rows, badges, empty state)
//! └── category_picker.rs  (Filter overlay)
//! ```

pub mod category_picker;
pub mod filter_bar;
pub mod header;
pub mod item_list;

pub use category_picker::{CategoryPicker, CategoryPickerState, PickerEvent};
pub use filter_bar::FilterBar;
pub use header::Header;
pub use item_list::{ItemList, ItemListState};
