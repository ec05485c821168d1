use crate::app::model::{Focus, ToastLevel};
use crate::app::Model;
use crate::editor::LineCursor;
use crate::todo::{ItemId, SubmitOutcome};

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Draft editing
    /// Insert a character at the cursor
    InsertChar(char),
    /// Insert pasted text at the cursor
    Paste(String),
    /// Delete character before cursor (Backspace)
    DeleteBack,
    /// Delete character at cursor (Delete)
    DeleteForward,
    /// Delete the word before the cursor (Ctrl+W)
    DeleteWordBack,
    /// Delete everything before the cursor (Ctrl+U)
    ClearToStart,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    CursorWordLeft,
    CursorWordRight,

    // To-do operations
    /// Add the draft as a new item, or commit the edit in progress
    Submit,
    /// Load an item into the draft for editing
    BeginEdit(ItemId),
    /// Delete an item
    Remove(ItemId),

    // List
    SelectUp,
    SelectDown,
    SelectFirst,
    SelectLast,
    /// Highlight a specific row (mouse click)
    Select(usize),
    /// Scroll the list up by n rows
    ScrollUp(usize),
    /// Scroll the list down by n rows
    ScrollDown(usize),
    PageUp,
    PageDown,

    // Focus
    FocusInput,
    FocusList,
    SwitchFocus,

    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Clear and repaint the whole screen
    Redraw,

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects should occur in this function.
pub fn update(mut model: Model, msg: Message) -> Model {
    // Explicit scrolling may move the highlighted row off screen.
    let follow_selection = !matches!(
        msg,
        Message::ScrollUp(_) | Message::ScrollDown(_) | Message::PageUp | Message::PageDown
    );

    match msg {
        // Draft editing
        Message::InsertChar(ch) => {
            let text = model.cursor.insert_char(model.todos.draft(), ch);
            model.todos.set_draft(text);
        }
        Message::Paste(pasted) => {
            let text = model.cursor.insert_str(model.todos.draft(), &pasted);
            model.todos.set_draft(text);
        }
        Message::DeleteBack => {
            if let Some(text) = model.cursor.delete_back(model.todos.draft()) {
                model.todos.set_draft(text);
            }
        }
        Message::DeleteForward => {
            if let Some(text) = model.cursor.delete_forward(model.todos.draft()) {
                model.todos.set_draft(text);
            }
        }
        Message::DeleteWordBack => {
            if let Some(text) = model.cursor.delete_word_back(model.todos.draft()) {
                model.todos.set_draft(text);
            }
        }
        Message::ClearToStart => {
            if let Some(text) = model.cursor.clear_to_start(model.todos.draft()) {
                model.todos.set_draft(text);
            }
        }
        Message::CursorLeft => model.cursor.move_left(model.todos.draft()),
        Message::CursorRight => model.cursor.move_right(model.todos.draft()),
        Message::CursorHome => model.cursor.move_home(),
        Message::CursorEnd => model.cursor.move_end(model.todos.draft()),
        Message::CursorWordLeft => model.cursor.move_word_left(model.todos.draft()),
        Message::CursorWordRight => model.cursor.move_word_right(model.todos.draft()),

        // To-do operations
        Message::Submit => match model.todos.submit() {
            SubmitOutcome::Ignored => {}
            SubmitOutcome::Added(id) => {
                model.cursor = LineCursor::new();
                model.selected = model.todos.position(id);
                model.show_toast(ToastLevel::Info, model.labels.added);
            }
            SubmitOutcome::Updated(id) => {
                model.cursor = LineCursor::new();
                model.selected = model.todos.position(id);
                model.show_toast(ToastLevel::Info, model.labels.updated);
            }
        },
        Message::BeginEdit(id) => {
            if model.todos.begin_edit(id) {
                model.cursor = LineCursor::at_end(model.todos.draft());
                model.selected = model.todos.position(id);
                model.focus = Focus::Input;
            }
        }
        Message::Remove(id) => {
            if model.todos.remove(id).is_some() {
                model.show_toast(ToastLevel::Info, model.labels.deleted);
            }
        }

        // List
        Message::SelectUp => {
            model.selected = Some(model.selected.map_or(0, |row| row.saturating_sub(1)));
        }
        Message::SelectDown => {
            model.selected = Some(model.selected.map_or(0, |row| row + 1));
        }
        Message::SelectFirst => model.selected = Some(0),
        Message::SelectLast => model.selected = model.todos.len().checked_sub(1),
        Message::Select(row) => {
            model.selected = Some(row);
            model.focus = Focus::List;
        }
        Message::ScrollUp(n) => model.list_view.scroll_up(n),
        Message::ScrollDown(n) => model.list_view.scroll_down(n),
        Message::PageUp => model.list_view.page_up(),
        Message::PageDown => model.list_view.page_down(),

        // Focus
        Message::FocusInput => model.focus = Focus::Input,
        Message::FocusList => focus_list(&mut model),
        Message::SwitchFocus => match model.focus {
            Focus::Input => focus_list(&mut model),
            Focus::List => model.focus = Focus::Input,
        },

        Message::ToggleHelp => model.help_visible = !model.help_visible,
        Message::HideHelp => model.help_visible = false,

        // Window
        Message::Resize(width, height) => model.resize(width, height),
        Message::Redraw => model.request_clear(),

        // Application
        Message::Quit => model.should_quit = true,
    }
    model.sync_view(follow_selection);
    model
}

fn focus_list(model: &mut Model) {
    model.focus = Focus::List;
    if model.selected.is_none() && !model.todos.is_empty() {
        model.selected = Some(0);
    }
}
