#![forbid(unsafe_code)]

//! Keyboard navigation over the emoji grid and the category tab bar.
//!
//! [`adjacent_cell`] is pure arithmetic: it wraps the column once and never
//! looks at the real content. [`GridCursor`] applies it to a
//! [`GridLayout`] and treats a target that does not exist as a no-op, so
//! moving down into a shorter row, or off either end of the grid, leaves
//! the cursor where it was.

use crate::rows::GridLayout;

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (row delta, column delta).
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Step for one-dimensional lists: up/left go back, down/right forward.
    #[must_use]
    pub const fn linear_step(self) -> isize {
        match self {
            Self::Up | Self::Left => -1,
            Self::Down | Self::Right => 1,
        }
    }
}

/// Cell reached from (`row`, `col`) by the given deltas.
///
/// The column wraps once into the previous or next row; the row is not
/// clamped.
///
/// ```
/// use emojipick_grid::adjacent_cell;
///
/// assert_eq!(adjacent_cell(0, 0, 0, -1, 8), (-1, 7));
/// assert_eq!(adjacent_cell(0, 7, 0, 1, 8), (1, 0));
/// assert_eq!(adjacent_cell(3, 2, -1, 0, 8), (2, 2));
/// ```
#[must_use]
pub fn adjacent_cell(
    row: isize,
    col: isize,
    row_delta: isize,
    col_delta: isize,
    row_size: isize,
) -> (isize, isize) {
    let mut new_row = row + row_delta;
    let mut new_col = col + col_delta;
    if new_col < 0 {
        new_row -= 1;
        new_col = row_size - 1;
    } else if new_col >= row_size {
        new_row += 1;
        new_col = 0;
    }
    (new_row, new_col)
}

/// `current + delta` wrapped into `0..len`; 0 when `len` is 0.
#[must_use]
pub fn wrap_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (current as isize + delta).rem_euclid(len) as usize
}

/// Roving focus position in the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GridCursor {
    pub row: usize,
    pub col: usize,
}

impl GridCursor {
    /// Cursor at (`row`, `col`).
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the cursor points at a record of `layout`.
    #[must_use]
    pub fn is_valid(&self, layout: &GridLayout) -> bool {
        layout.cell(self.row, self.col).is_some()
    }

    /// Move in `direction`; returns false (and stays put) when the target
    /// cell does not exist.
    pub fn step(&mut self, direction: Direction, layout: &GridLayout, row_size: usize) -> bool {
        let (dr, dc) = direction.delta();
        let (row, col) = adjacent_cell(
            self.row as isize,
            self.col as isize,
            dr,
            dc,
            row_size as isize,
        );
        if row < 0 || col < 0 {
            return false;
        }
        let (row, col) = (row as usize, col as usize);
        if layout.cell(row, col).is_none() {
            return false;
        }
        self.row = row;
        self.col = col;
        true
    }

    /// First record cell of `layout` at or after row `from_row`.
    #[must_use]
    pub fn first_from(layout: &GridLayout, from_row: usize) -> Option<Self> {
        layout
            .rows()
            .iter()
            .enumerate()
            .skip(from_row)
            .find(|(_, row)| !row.is_empty())
            .map(|(row, _)| Self::new(row, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::RowBucketer;
    use emojipick_core::{Category, Dataset, EmojiRecord};
    use emojipick_search::SearchIndex;

    fn layout() -> GridLayout {
        let recs = |prefix: &str, glyphs: &[&str]| -> Vec<EmojiRecord> {
            glyphs
                .iter()
                .enumerate()
                .map(|(i, g)| EmojiRecord::new(*g, format!("{prefix} {i}"), "", ""))
                .collect()
        };
        let ds = Dataset::new(vec![
            Category::new(
                "A",
                recs("a", &["😀", "😃", "😄", "😁", "😆", "😅", "🤣", "😂", "🙂", "🙃"]),
            ),
            Category::new("B", recs("b", &["🐶", "🐱"])),
        ])
        .unwrap();
        let idx = SearchIndex::new(&ds);
        // Row 0 is the recents placeholder, rows 1-2 are A, row 3 is B.
        RowBucketer::new().bucket(&ds, &[], &idx.search(""))
    }

    #[test]
    fn wraps_columns() {
        assert_eq!(adjacent_cell(0, 0, 0, -1, 8), (-1, 7));
        assert_eq!(adjacent_cell(0, 7, 0, 1, 8), (1, 0));
        assert_eq!(adjacent_cell(2, 4, 1, 0, 8), (3, 4));
    }

    #[test]
    fn wrap_index_cycles() {
        assert_eq!(wrap_index(0, -1, 5), 4);
        assert_eq!(wrap_index(4, 1, 5), 0);
        assert_eq!(wrap_index(2, 7, 5), 4);
        assert_eq!(wrap_index(3, 1, 0), 0);
    }

    #[test]
    fn cursor_moves_within_rows() {
        let l = layout();
        let mut c = GridCursor::new(1, 0);
        assert!(c.step(Direction::Right, &l, 8));
        assert_eq!(c, GridCursor::new(1, 1));
        assert!(c.step(Direction::Down, &l, 8));
        assert_eq!(c, GridCursor::new(2, 1));
    }

    #[test]
    fn cursor_wraps_to_next_row() {
        let l = layout();
        let mut c = GridCursor::new(1, 7);
        assert!(c.step(Direction::Right, &l, 8));
        assert_eq!(c, GridCursor::new(2, 0));
        assert!(c.step(Direction::Left, &l, 8));
        assert_eq!(c, GridCursor::new(1, 7));
    }

    #[test]
    fn missing_target_is_noop() {
        let l = layout();
        // Row 2 has two cells; column 2 does not exist.
        let mut c = GridCursor::new(2, 1);
        assert!(!c.step(Direction::Right, &l, 8));
        assert_eq!(c, GridCursor::new(2, 1));

        let mut c = GridCursor::new(1, 5);
        assert!(!c.step(Direction::Down, &l, 8));
        assert_eq!(c, GridCursor::new(1, 5));

        // Down crosses from group A into group B, then falls off the end.
        let mut c = GridCursor::new(2, 1);
        assert!(c.step(Direction::Down, &l, 8));
        assert_eq!(c, GridCursor::new(3, 1));
        assert!(!c.step(Direction::Down, &l, 8));
        assert_eq!(c, GridCursor::new(3, 1));

        // The placeholder row has no cells.
        let mut c = GridCursor::new(1, 0);
        assert!(!c.step(Direction::Up, &l, 8));
        assert!(!c.step(Direction::Left, &l, 8));
    }

    #[test]
    fn first_from_skips_placeholder() {
        let l = layout();
        assert_eq!(GridCursor::first_from(&l, 0), Some(GridCursor::new(1, 0)));
        assert_eq!(GridCursor::first_from(&l, 3), Some(GridCursor::new(3, 0)));
        assert_eq!(GridCursor::first_from(&l, 4), None);
    }
}
