//! Viewport management for the scrollable item list.
//!
//! The [`ListViewport`] struct tracks which rows of the list fit on screen
//! and handles all scroll operations. One item occupies one row.

use std::ops::Range;

/// Manages the visible portion of the item list.
///
/// # Example
///
/// ```
/// use todo_tui::ui::viewport::ListViewport;
///
/// let mut vp = ListViewport::new(10, 30);
/// assert_eq!(vp.visible_range(), 0..10);
///
/// vp.ensure_visible(14);
/// assert_eq!(vp.visible_range(), 5..15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewport {
    height: u16,
    offset: usize,
    total_rows: usize,
}

impl ListViewport {
    /// Create a viewport `height` rows tall over `total_rows` items.
    pub const fn new(height: u16, total_rows: usize) -> Self {
        Self {
            height,
            offset: 0,
            total_rows,
        }
    }

    /// Index of the first visible row.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Range of row indices currently on screen.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.offset;
        let end = (self.offset + self.height as usize).min(self.total_rows);
        start..end
    }

    pub const fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub const fn page_up(&mut self) {
        self.scroll_up(self.height as usize);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.height as usize);
    }

    /// Scroll the minimum amount needed to bring `row` on screen.
    pub fn ensure_visible(&mut self, row: usize) {
        let height = self.height as usize;
        if height == 0 {
            return;
        }
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + height {
            self.offset = row + 1 - height;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    /// Change the number of visible rows.
    pub fn resize(&mut self, height: u16) {
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the row count after items were added or removed.
    pub fn set_total_rows(&mut self, total: usize) {
        self.total_rows = total;
        self.offset = self.offset.min(self.max_offset());
    }

    const fn max_offset(&self) -> usize {
        self.total_rows.saturating_sub(self.height as usize)
    }
}
