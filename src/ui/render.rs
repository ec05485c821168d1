use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{Focus, Model};

use super::layout::{BUTTON_PADDING, ScreenAreas, button_rect, row_areas, screen_areas};
use super::{overlays, status};

/// Marker drawn before the row currently loaded into the draft.
const EDITING_MARKER: &str = "* ";
const ROW_MARKER: &str = "  ";

/// Render the complete UI.
///
/// Reads the model only; every frame is a fresh pass over the current state.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let areas = screen_areas(area);

    render_title(model, frame, areas.title);
    render_input(model, frame, &areas);
    render_button(model, frame, areas.button);
    render_list(model, frame, &areas);

    if model.active_toast().is_some() {
        status::render_toast_bar(model, frame, areas.status);
    } else {
        status::render_status_bar(model, frame, areas.status);
    }

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

fn render_title(model: &Model, frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(model.labels.title)
        .style(model.theme.title)
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_input(model: &Model, frame: &mut Frame, areas: &ScreenAreas) {
    let focused = model.focus == Focus::Input && !model.help_visible;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            model.theme.border_focused
        } else {
            model.theme.border
        });
    frame.render_widget(block, areas.input);

    let inner = areas.input_inner();
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let draft = model.todos.draft();
    if draft.is_empty() {
        let placeholder = Paragraph::new(model.labels.placeholder).style(model.theme.placeholder);
        frame.render_widget(placeholder, inner);
    } else {
        let scroll = input_scroll(model, inner.width);
        frame.render_widget(Paragraph::new(draft).scroll((0, scroll)), inner);
    }

    if focused {
        let column = cursor_column(model).saturating_sub(input_scroll(model, inner.width));
        frame.set_cursor_position(Position::new(
            inner.x + column.min(inner.width.saturating_sub(1)),
            inner.y,
        ));
    }
}

fn render_button(model: &Model, frame: &mut Frame, band: Rect) {
    let editing = model.todos.is_editing();
    let label = model.labels.submit(editing);
    let rect = button_rect(band, label);
    let pad = " ".repeat(usize::from(BUTTON_PADDING));
    let button = Paragraph::new(format!("{pad}{label}{pad}"))
        .style(model.theme.submit_button(editing))
        .alignment(Alignment::Center);
    frame.render_widget(button, rect);
}

fn render_list(model: &Model, frame: &mut Frame, areas: &ScreenAreas) {
    let focused = model.focus == Focus::List && !model.help_visible;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            model.theme.border_focused
        } else {
            model.theme.border
        });
    frame.render_widget(block, areas.list);

    let inner = areas.list_inner();
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if model.todos.is_empty() {
        let hint = Paragraph::new(model.labels.empty_list)
            .style(model.theme.empty_hint)
            .alignment(Alignment::Center);
        frame.render_widget(hint, inner);
        return;
    }

    let items = model.todos.items();
    let editing = model.todos.editing();
    let rows = model
        .list_view
        .visible_range()
        .take(usize::from(inner.height))
        .enumerate();
    for (line, index) in rows {
        let Some(item) = items.get(index) else {
            break;
        };
        let Ok(line) = u16::try_from(line) else {
            break;
        };
        let row = Rect::new(inner.x, inner.y + line, inner.width, 1);
        let parts = row_areas(row, model.labels);

        let is_editing = editing == Some(item.id());
        let mut text_style = if is_editing {
            model.theme.row_editing
        } else {
            Style::default()
        };
        if focused && model.selected == Some(index) {
            text_style = text_style.patch(model.theme.row_selected);
        }
        let marker = if is_editing { EDITING_MARKER } else { ROW_MARKER };
        let text = Paragraph::new(Line::from(vec![
            Span::raw(marker),
            Span::raw(item.text()),
        ]))
        .style(text_style);
        frame.render_widget(text, parts.text);

        let edit = Paragraph::new(model.labels.edit)
            .style(model.theme.edit_action)
            .alignment(Alignment::Center);
        frame.render_widget(edit, parts.edit);
        let delete = Paragraph::new(model.labels.delete)
            .style(model.theme.delete_action)
            .alignment(Alignment::Center);
        frame.render_widget(delete, parts.delete);
    }
}

fn cursor_column(model: &Model) -> u16 {
    u16::try_from(model.cursor.display_column(model.todos.draft())).unwrap_or(u16::MAX)
}

/// Horizontal scroll that keeps the cursor inside a field `width` wide.
fn input_scroll(model: &Model, width: u16) -> u16 {
    let column = cursor_column(model);
    if width == 0 || column < width {
        0
    } else {
        column - width + 1
    }
}
