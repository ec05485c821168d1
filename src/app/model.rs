use std::time::{Duration, Instant};

use crate::editor::LineCursor;
use crate::labels::{Lang, Labels};
use crate::todo::{ItemId, TodoList};
use crate::ui::style::Theme;
use crate::ui::viewport::ListViewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// Which part of the screen receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    List,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Items, draft text, and edit target
    pub todos: TodoList,
    /// Label strings for the chosen language
    pub labels: &'static Labels,
    /// Colors
    pub theme: Theme,
    /// Where keystrokes go
    pub focus: Focus,
    /// Cursor inside the draft text
    pub cursor: LineCursor,
    /// Highlighted list row
    pub selected: Option<usize>,
    /// Scroll window over the list rows
    pub list_view: ListViewport,
    /// Terminal size (columns, rows)
    pub size: (u16, u16),
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Whether the app should quit
    pub should_quit: bool,
    toast: Option<Toast>,
    clear_requested: bool,
}

impl Model {
    /// Create an empty model for a terminal of the given size.
    pub fn new(lang: Lang, terminal_size: (u16, u16)) -> Self {
        let (width, height) = terminal_size;
        Self {
            todos: TodoList::new(),
            labels: Labels::for_lang(lang),
            theme: Theme::default(),
            focus: Focus::Input,
            cursor: LineCursor::new(),
            selected: None,
            list_view: ListViewport::new(crate::ui::list_rows_for(width, height), 0),
            size: terminal_size,
            help_visible: false,
            should_quit: false,
            toast: None,
            clear_requested: false,
        }
    }

    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Id of the highlighted row's item.
    pub fn selected_id(&self) -> Option<ItemId> {
        self.selected
            .and_then(|row| self.todos.items().get(row))
            .map(crate::todo::Item::id)
    }

    /// Item id at a row index, for mouse actions.
    pub fn id_at(&self, row: usize) -> Option<ItemId> {
        self.todos.items().get(row).map(crate::todo::Item::id)
    }

    /// Re-establish view state after the to-do list changed.
    ///
    /// Keeps the cursor inside the draft and the selection inside the
    /// list. With `follow_selection`, also scrolls the selection on screen.
    pub(super) fn sync_view(&mut self, follow_selection: bool) {
        self.cursor.clamp(self.todos.draft());
        let len = self.todos.len();
        self.list_view.set_total_rows(len);
        self.selected = if len == 0 {
            None
        } else {
            self.selected.map(|row| row.min(len - 1))
        };
        if follow_selection && let Some(row) = self.selected {
            self.list_view.ensure_visible(row);
        }
    }

    pub(super) fn resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        self.list_view.resize(crate::ui::list_rows_for(width, height));
        if let Some(row) = self.selected {
            self.list_view.ensure_visible(row);
        }
    }

    pub(super) const fn request_clear(&mut self) {
        self.clear_requested = true;
    }

    /// Whether a full clear was requested since the last call.
    pub(super) fn take_clear_request(&mut self) -> bool {
        std::mem::replace(&mut self.clear_requested, false)
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(3),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

// Implement Default for Model to allow std::mem::take
impl Default for Model {
    fn default() -> Self {
        Self::new(Lang::default(), (80, 24))
    }
}
