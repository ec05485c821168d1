//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Focus, Model, ToastLevel};
pub use update::{Message, update};

use crate::labels::Lang;
use crate::ui::style::ThemeMode;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    lang: Lang,
    theme: ThemeMode,
    mouse_enabled: bool,
}

impl App {
    /// Create a new application with default settings.
    pub const fn new() -> Self {
        Self {
            lang: Lang::En,
            theme: ThemeMode::Dark,
            mouse_enabled: true,
        }
    }

    /// Choose the language of the on-screen labels.
    pub const fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    /// Choose the color theme.
    pub const fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    /// Enable or disable mouse capture.
    pub const fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
