use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).clamp(20, 60);
    let popup_height = area.height.saturating_sub(4).clamp(8, 30);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(Color::Indexed(245));

    let lines = vec![
        Line::styled("Input", section_style),
        Line::raw("  Enter               Add / update"),
        Line::raw("  Left/Right          Move cursor"),
        Line::raw("  Ctrl+Left/Right     Word movement"),
        Line::raw("  Home/End, Ctrl-a/e  Line start / end"),
        Line::raw("  Ctrl-w / Ctrl-u     Delete word / to start"),
        Line::raw("  Esc / Down          Go to list"),
        Line::raw(""),
        Line::styled("List", section_style),
        Line::raw("  j/k or Up/Down      Select"),
        Line::raw("  g / G               First / last"),
        Line::raw("  e / Enter           Edit selected"),
        Line::raw("  d / x / Delete      Delete selected"),
        Line::raw("  i / a / Esc         Go to input"),
        Line::raw("  PgUp / PgDn         Scroll a page"),
        Line::raw("  ?                   Toggle help"),
        Line::raw("  q                   Quit"),
        Line::raw(""),
        Line::styled("Other", section_style),
        Line::raw("  Tab                 Switch focus"),
        Line::raw("  Mouse click         Button, edit, delete"),
        Line::raw("  Ctrl-l              Redraw screen"),
        Line::raw("  Ctrl-c / Ctrl-q     Quit"),
        Line::raw("  F1                  Toggle help"),
        Line::raw(""),
        Line::styled("Esc closes", dim_style),
    ];

    let block = Block::default()
        .title(model.labels.help_title)
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
