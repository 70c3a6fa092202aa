#![forbid(unsafe_code)]

//! Virtualized row list: scroll state and visible ranges.
//!
//! The picker only ever talks to the [`VirtualList`] trait. Hosts that
//! drive a native virtualization widget implement the trait themselves;
//! [`VirtualRows`] is the built-in, fixed-row-height implementation.
//!
//! # Example
//!
//! ```
//! use emojipick_grid::{VirtualList, VirtualRows};
//!
//! let mut list = VirtualRows::new().with_viewport_rows(5);
//! list.set_row_count(40);
//! list.scroll_to_row(12);
//! assert_eq!(list.visible_range(), 12..17);
//! ```

use std::ops::Range;

/// Scroll interface of the virtualized row list.
pub trait VirtualList {
    /// Replace the total number of rows (after a re-bucket).
    fn set_row_count(&mut self, rows: usize);

    /// Number of rows that fit the viewport.
    fn set_viewport_rows(&mut self, rows: usize);

    /// Scroll so that `index` is the first visible row (clamped).
    fn scroll_to_row(&mut self, index: usize);

    /// Scroll by `delta` rows (positive = down).
    fn scroll_by(&mut self, delta: i32);

    /// Rows currently visible.
    fn visible_range(&self) -> Range<usize>;

    /// Rows to materialize, including overscan.
    fn render_range(&self) -> Range<usize> {
        self.visible_range()
    }

    /// Scroll the minimum amount that makes `index` visible.
    fn ensure_visible(&mut self, index: usize) {
        let visible = self.visible_range();
        if index < visible.start {
            self.scroll_to_row(index);
        } else if index >= visible.end && !visible.is_empty() {
            let span = visible.end - visible.start;
            self.scroll_to_row(index + 1 - span);
        }
    }
}

/// Fixed-height row list state.
#[derive(Debug, Clone)]
pub struct VirtualRows {
    /// Total rows.
    row_count: usize,
    /// First visible row.
    scroll_offset: usize,
    /// Rows that fit the viewport.
    viewport_rows: usize,
    /// Extra rows rendered above/below the viewport.
    overscan: usize,
}

impl Default for VirtualRows {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualRows {
    /// Empty list with no viewport.
    #[must_use]
    pub fn new() -> Self {
        Self {
            row_count: 0,
            scroll_offset: 0,
            viewport_rows: 0,
            overscan: 2,
        }
    }

    /// Set overscan.
    #[must_use]
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Set viewport height in rows.
    #[must_use]
    pub fn with_viewport_rows(mut self, rows: usize) -> Self {
        self.viewport_rows = rows;
        self
    }

    /// Current scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Total rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Viewport height in rows.
    #[must_use]
    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    fn max_offset(&self) -> usize {
        if self.viewport_rows > 0 {
            self.row_count.saturating_sub(self.viewport_rows)
        } else {
            self.row_count.saturating_sub(1)
        }
    }

    /// Page up (scroll by viewport height).
    pub fn page_up(&mut self) {
        if self.viewport_rows > 0 {
            let delta = i32::try_from(self.viewport_rows).unwrap_or(i32::MAX);
            self.scroll_by(-delta);
        }
    }

    /// Page down (scroll by viewport height).
    pub fn page_down(&mut self) {
        if self.viewport_rows > 0 {
            let delta = i32::try_from(self.viewport_rows).unwrap_or(i32::MAX);
            self.scroll_by(delta);
        }
    }

    /// Scroll to the first row.
    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Whether the last row is visible.
    #[must_use]
    pub fn is_at_bottom(&self) -> bool {
        self.scroll_offset >= self.max_offset()
    }
}

impl VirtualList for VirtualRows {
    fn set_row_count(&mut self, rows: usize) {
        self.row_count = rows;
        self.scroll_offset = self.scroll_offset.min(self.max_offset());
    }

    fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows;
        self.scroll_offset = self.scroll_offset.min(self.max_offset());
    }

    fn scroll_to_row(&mut self, index: usize) {
        self.scroll_offset = index.min(self.max_offset());
    }

    fn scroll_by(&mut self, delta: i32) {
        if self.row_count == 0 {
            return;
        }
        let new_offset = (self.scroll_offset as i64 + i64::from(delta))
            .max(0)
            .min(self.max_offset() as i64);
        self.scroll_offset = new_offset as usize;
    }

    fn visible_range(&self) -> Range<usize> {
        if self.row_count == 0 || self.viewport_rows == 0 {
            return 0..0;
        }
        let start = self.scroll_offset;
        let end = (start + self.viewport_rows).min(self.row_count);
        start..end
    }

    fn render_range(&self) -> Range<usize> {
        let visible = self.visible_range();
        let start = visible.start.saturating_sub(self.overscan);
        let end = visible.end.saturating_add(self.overscan).min(self.row_count);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(rows: usize, viewport: usize) -> VirtualRows {
        let mut l = VirtualRows::new().with_viewport_rows(viewport);
        l.set_row_count(rows);
        l
    }

    #[test]
    fn empty_list_has_empty_range() {
        let l = list(0, 10);
        assert_eq!(l.visible_range(), 0..0);
        assert_eq!(l.render_range(), 0..0);
    }

    #[test]
    fn scroll_to_row_clamps() {
        let mut l = list(20, 5);
        l.scroll_to_row(7);
        assert_eq!(l.visible_range(), 7..12);
        l.scroll_to_row(100);
        assert_eq!(l.scroll_offset(), 15);
        assert!(l.is_at_bottom());
    }

    #[test]
    fn scroll_bounds() {
        let mut l = list(10, 4);
        l.scroll_by(-100);
        assert_eq!(l.scroll_offset(), 0);
        l.scroll_by(100);
        assert_eq!(l.scroll_offset(), 6);
    }

    #[test]
    fn paging() {
        let mut l = list(30, 5);
        l.page_down();
        assert_eq!(l.scroll_offset(), 5);
        l.page_down();
        assert_eq!(l.scroll_offset(), 10);
        l.page_up();
        assert_eq!(l.scroll_offset(), 5);
        l.scroll_to_top();
        assert_eq!(l.scroll_offset(), 0);
    }

    #[test]
    fn overscan_extends_render_range() {
        let mut l = list(30, 5).with_overscan(3);
        l.scroll_to_row(10);
        assert_eq!(l.render_range(), 7..18);
        l.scroll_to_top();
        assert_eq!(l.render_range(), 0..8);
    }

    #[test]
    fn shrinking_row_count_clamps_offset() {
        let mut l = list(30, 5);
        l.scroll_to_row(20);
        l.set_row_count(8);
        assert_eq!(l.scroll_offset(), 3);
        assert_eq!(l.visible_range(), 3..8);
    }

    #[test]
    fn ensure_visible_scrolls_minimally() {
        let mut l = list(30, 5);
        l.ensure_visible(3);
        assert_eq!(l.scroll_offset(), 0);
        l.ensure_visible(7);
        assert_eq!(l.visible_range(), 3..8);
        l.ensure_visible(1);
        assert_eq!(l.visible_range(), 1..6);
    }
}
