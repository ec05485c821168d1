//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`layout`]: Screen geometry and mouse hit-testing
//! - [`viewport`]: Scroll position of the item list
//! - [`style`]: Theming and colors

pub mod layout;
pub mod style;
pub mod viewport;

mod overlays;
mod render;
mod status;

pub use layout::{Hit, HitContext, hit_test, list_rows_for, screen_areas};
pub use render::render;
