#![forbid(unsafe_code)]

//! emojipick: the logic core of an emoji picker popup.
//!
//! This crate re-exports the workspace crates behind one dependency:
//!
//! | Crate | Contents |
//! |-------|----------|
//! | [`data`] | records, datasets, skin tones |
//! | [`search`] | fuzzy index and scorer |
//! | [`grid`] | row bucketing, active group, navigation, virtual list |
//! | [`runtime`] | picker model, recents, storage, config |
//!
//! # Example
//!
//! ```
//! use emojipick::prelude::*;
//!
//! let mut picker = EmojiPicker::new(
//!     Dataset::builtin(),
//!     RecentsTracker::in_memory(),
//!     PickerOptions::new(|| {}),
//! );
//! picker.update(PickerMsg::SetQuery("pizza".into()));
//! let view = picker.view().expect("picker is visible");
//! assert!(view.rows.iter().flat_map(|r| &r.cells).any(|c| c.glyph == "🍕"));
//! ```

pub use emojipick_core as data;
pub use emojipick_grid as grid;
pub use emojipick_runtime as runtime;
pub use emojipick_search as search;

pub use emojipick_core::{Dataset, DatasetError, EmojiRecord, SkinTone};
pub use emojipick_runtime::{EmojiPicker, PickerCmd, PickerMsg, PickerOptions, PickerView};

/// Common imports for hosts.
pub mod prelude {
    pub use emojipick_core::{Category, Dataset, EmojiRecord, SkinTone, skin_tone};
    pub use emojipick_grid::{Direction, VirtualList, VirtualRows};
    pub use emojipick_runtime::{
        AnchorRect, EmojiPicker, EmojiSupport, FileStorage, HorizontalSide, MemoryStorage,
        PickerCmd, PickerEnvConfig, PickerKey, PickerMsg, PickerOptions, PickerView,
        RecentsTracker, RenderMode, Storage, VerticalSide,
    };
    pub use emojipick_search::SearchIndex;
}
