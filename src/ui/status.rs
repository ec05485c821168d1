use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};
use crate::todo::Mode;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let labels = model.labels;
    let mode = match model.todos.mode() {
        Mode::Add => labels.mode_add,
        Mode::Editing(_) => labels.mode_edit,
    };
    let position = model
        .selected
        .map(|row| format!("  {}/{}", row + 1, model.todos.len()))
        .unwrap_or_default();

    let status = format!(
        " [{}]  {} {}{}  Tab:focus  F1:help",
        mode,
        model.todos.len(),
        labels.items,
        position
    );

    let status_bar = Paragraph::new(status).style(
        Style::default()
            .bg(model.theme.status_bg)
            .fg(model.theme.status_fg),
    );

    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default()
                .bg(model.theme.status_bg)
                .fg(model.theme.status_fg),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
    };
    let toast = Paragraph::new(format!(" {prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
