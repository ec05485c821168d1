// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. todo::TodoList)
    clippy::module_name_repetitions
)]

//! # todo-tui
//!
//! A single-screen terminal to-do list: add, edit, and delete items
//! through one input field and a scrollable list.
//!
//! ## Architecture
//!
//! todo-tui uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`todo`]: Items, draft text, and the add/edit state machine
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`editor`]: Cursor editing of the draft
//! - [`labels`]: On-screen strings per language
//! - [`config`]: Saved launch defaults

pub mod app;
pub mod config;
pub mod editor;
pub mod labels;
pub mod todo;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::todo::{Item, ItemId, Mode, SubmitOutcome, TodoList};
}
