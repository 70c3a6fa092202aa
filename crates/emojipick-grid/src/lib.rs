#![forbid(unsafe_code)]

//! Grid model: rows, groups, virtual scrolling, and keyboard navigation.
//!
//! # Role in emojipick
//! `emojipick-grid` turns a search result and the recents list into the
//! flattened, grouped row sequence the picker scrolls through, and answers
//! the two index questions the UI asks about it: which group is active for
//! a visible range, and which cell an arrow key lands on.
//!
//! # Primary responsibilities
//! - **RowBucketer**: groups matches into fixed-width rows per category.
//! - **active_group**: maps a visible start row to a group index.
//! - **adjacent_cell**: wrapped 2D navigation arithmetic.
//! - **VirtualList**: the scroll interface, with [`VirtualRows`] as the
//!   default implementation.

pub mod active;
pub mod icons;
pub mod nav;
pub mod rows;
pub mod virtual_list;

pub use active::{active_group, group_start};
pub use icons::CategoryIcon;
pub use nav::{Direction, GridCursor, adjacent_cell, wrap_index};
pub use rows::{EmojiRow, GridLayout, Group, GroupKind, RowBucketer};
pub use virtual_list::{VirtualList, VirtualRows};
