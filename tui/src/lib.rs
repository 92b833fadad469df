//! NovaCloud TUI - Terminal preview of the landing page
//!
//! Renders the hero and testimonials headings with their rotating
//! typewriter text, plus the feature grid, customer reviews and pricing
//! table, in a full-screen terminal UI.
//!
//! # Architecture
//!
//! - **App**: event loop merging key presses and typewriter updates
//! - **Widgets**: typewriter heading line, feature cards, reviews, pricing cards
//! - **Theme**: dark/light palettes driven by the persisted preference

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::{App, Section, Slot};
