//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

use crate::labels::Labels;

/// Horizontal padding inside the primary button, per side.
pub const BUTTON_PADDING: u16 = 2;
/// Horizontal padding around each row action label, per side.
pub const ACTION_PADDING: u16 = 1;

/// The fixed vertical bands of the screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub title: Rect,
    pub input: Rect,
    pub button: Rect,
    pub list: Rect,
    pub status: Rect,
}

impl ScreenAreas {
    /// Text area inside the input border.
    pub fn input_inner(&self) -> Rect {
        inset(self.input)
    }

    /// Row area inside the list border.
    pub fn list_inner(&self) -> Rect {
        inset(self.list)
    }
}

pub fn screen_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    ScreenAreas {
        title: chunks[0],
        input: chunks[1],
        button: chunks[2],
        list: chunks[3],
        status: chunks[4],
    }
}

/// Number of item rows that fit inside the list border for a terminal of
/// the given size.
pub fn list_rows_for(width: u16, height: u16) -> u16 {
    screen_areas(Rect::new(0, 0, width, height)).list_inner().height
}

/// Clickable area of the primary button, centered in its band.
pub fn button_rect(band: Rect, label: &str) -> Rect {
    let width = text_width(label)
        .saturating_add(BUTTON_PADDING * 2)
        .min(band.width);
    let x = band.x + (band.width - width) / 2;
    Rect::new(x, band.y, width, band.height.min(1))
}

/// Split one list row into its text area and the edit/delete actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowAreas {
    pub text: Rect,
    pub edit: Rect,
    pub delete: Rect,
}

pub fn row_areas(row: Rect, labels: &Labels) -> RowAreas {
    let delete_w = text_width(labels.delete)
        .saturating_add(ACTION_PADDING * 2)
        .min(row.width);
    let delete_x = row.right().saturating_sub(delete_w);
    let edit_w = text_width(labels.edit)
        .saturating_add(ACTION_PADDING * 2)
        .min(delete_x.saturating_sub(row.x));
    let edit_x = delete_x.saturating_sub(edit_w);
    let text_w = edit_x.saturating_sub(row.x).saturating_sub(1);
    RowAreas {
        text: Rect::new(row.x, row.y, text_w, 1),
        edit: Rect::new(edit_x, row.y, edit_w, 1),
        delete: Rect::new(delete_x, row.y, delete_w, 1),
    }
}

/// What sits under a screen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Input,
    Button,
    /// A list row, by item index.
    Row(usize),
    EditAction(usize),
    DeleteAction(usize),
    /// Inside the list border but below the last row.
    ListBlank,
}

/// Everything [`hit_test`] needs to know about the current screen.
#[derive(Debug, Clone, Copy)]
pub struct HitContext<'a> {
    pub area: Rect,
    pub labels: &'a Labels,
    pub editing: bool,
    pub list_offset: usize,
    pub total_rows: usize,
}

pub fn hit_test(ctx: &HitContext<'_>, column: u16, row: u16) -> Option<Hit> {
    let areas = screen_areas(ctx.area);
    if contains(areas.input, column, row) {
        return Some(Hit::Input);
    }
    if contains(
        button_rect(areas.button, ctx.labels.submit(ctx.editing)),
        column,
        row,
    ) {
        return Some(Hit::Button);
    }
    let inner = areas.list_inner();
    if !contains(inner, column, row) {
        return None;
    }
    let index = ctx.list_offset + usize::from(row - inner.y);
    if index >= ctx.total_rows {
        return Some(Hit::ListBlank);
    }
    let row_rect = Rect::new(inner.x, row, inner.width, 1);
    let parts = row_areas(row_rect, ctx.labels);
    if contains(parts.edit, column, row) {
        Some(Hit::EditAction(index))
    } else if contains(parts.delete, column, row) {
        Some(Hit::DeleteAction(index))
    } else {
        Some(Hit::Row(index))
    }
}

/// Display width of `text` in terminal cells, saturating at `u16::MAX`.
pub fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

fn inset(rect: Rect) -> Rect {
    if rect.width < 2 || rect.height < 2 {
        return Rect::new(rect.x, rect.y, 0, 0);
    }
    Rect::new(rect.x + 1, rect.y + 1, rect.width - 2, rect.height - 2)
}

const fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}
