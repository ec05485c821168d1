use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::model::Focus;
use crate::app::{App, Message, Model};
use crate::ui::{Hit, HitContext, hit_test};

impl App {
    pub(super) fn handle_event(&self, event: Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(key, model),
            Event::Mouse(mouse) if self.mouse_enabled => Self::handle_mouse(mouse, model),
            Event::Paste(text) if model.focus == Focus::Input && !model.help_visible => {
                Some(Message::Paste(text))
            }
            Event::Resize(w, h) => Some(Message::Resize(w, h)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global bindings
        match key.code {
            KeyCode::Char('c' | 'q') if ctrl => return Some(Message::Quit),
            KeyCode::F(1) => return Some(Message::ToggleHelp),
            KeyCode::Char('l') if ctrl => return Some(Message::Redraw),
            _ => {}
        }

        if model.help_visible {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?' | 'q') => {
                    Some(Message::HideHelp)
                }
                _ => None,
            };
        }

        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            return Some(Message::SwitchFocus);
        }

        match model.focus {
            Focus::Input => Self::handle_input_key(key, ctrl),
            Focus::List => Self::handle_list_key(key, model),
        }
    }

    fn handle_input_key(key: KeyEvent, ctrl: bool) -> Option<Message> {
        match key.code {
            KeyCode::Enter => Some(Message::Submit),
            KeyCode::Esc | KeyCode::Down => Some(Message::FocusList),
            KeyCode::Backspace => Some(Message::DeleteBack),
            KeyCode::Delete => Some(Message::DeleteForward),
            KeyCode::Left if ctrl => Some(Message::CursorWordLeft),
            KeyCode::Right if ctrl => Some(Message::CursorWordRight),
            KeyCode::Left => Some(Message::CursorLeft),
            KeyCode::Right => Some(Message::CursorRight),
            KeyCode::Home => Some(Message::CursorHome),
            KeyCode::End => Some(Message::CursorEnd),
            KeyCode::Char('a') if ctrl => Some(Message::CursorHome),
            KeyCode::Char('e') if ctrl => Some(Message::CursorEnd),
            KeyCode::Char('w') if ctrl => Some(Message::DeleteWordBack),
            KeyCode::Char('u') if ctrl => Some(Message::ClearToStart),
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Char(c) => Some(Message::InsertChar(c)),
            _ => None,
        }
    }

    fn handle_list_key(key: KeyEvent, model: &Model) -> Option<Message> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Message::SelectDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Message::SelectUp),
            KeyCode::Char('g') | KeyCode::Home => Some(Message::SelectFirst),
            KeyCode::Char('G') | KeyCode::End => Some(Message::SelectLast),
            KeyCode::PageDown => Some(Message::PageDown),
            KeyCode::PageUp => Some(Message::PageUp),
            KeyCode::Char('e') | KeyCode::Enter => model.selected_id().map(Message::BeginEdit),
            KeyCode::Char('d' | 'x') | KeyCode::Delete => {
                model.selected_id().map(Message::Remove)
            }
            KeyCode::Char('i' | 'a') | KeyCode::Esc => Some(Message::FocusInput),
            KeyCode::Char('?') => Some(Message::ToggleHelp),
            KeyCode::Char('q') => Some(Message::Quit),
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return matches!(mouse.kind, MouseEventKind::Up(MouseButton::Left))
                .then_some(Message::HideHelp);
        }

        match mouse.kind {
            MouseEventKind::ScrollDown => Some(Message::ScrollDown(3)),
            MouseEventKind::ScrollUp => Some(Message::ScrollUp(3)),
            MouseEventKind::Up(MouseButton::Left) => {
                let hit = hit_test(&hit_context(model), mouse.column, mouse.row)?;
                match hit {
                    Hit::Input => Some(Message::FocusInput),
                    Hit::Button => Some(Message::Submit),
                    Hit::Row(row) => Some(Message::Select(row)),
                    Hit::EditAction(row) => model.id_at(row).map(Message::BeginEdit),
                    Hit::DeleteAction(row) => model.id_at(row).map(Message::Remove),
                    Hit::ListBlank => Some(Message::FocusList),
                }
            }
            _ => None,
        }
    }
}

fn hit_context(model: &Model) -> HitContext<'_> {
    let (width, height) = model.size;
    HitContext {
        area: Rect::new(0, 0, width, height),
        labels: model.labels,
        editing: model.todos.is_editing(),
        list_offset: model.list_view.offset(),
        total_rows: model.todos.len(),
    }
}
