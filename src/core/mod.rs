//! # Core Application Logic
//!
//! This module contains Shopster's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (items)      │
//!                    │  • filter() (engine)    │
//!                    │  • State + Action       │
//!                    │  • ListView (derived)   │
//!                    │                         │
//!                    │  No UI. Pure.           │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │  --print   │
//!           │  Adapter   │              │ plain text │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: `Item`, `Category` and the injected `Catalog`
//! - [`filter`]: `CategoryFilter` and the pure `filter()` function
//! - [`state`]: `DisplayState` and the `App` struct
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`view`]: the `ListView` derived after every update
//! - [`config`]: config file, env and CLI resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod state;
pub mod view;
