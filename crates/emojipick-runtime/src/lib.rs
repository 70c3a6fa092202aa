#![forbid(unsafe_code)]

//! Runtime: the picker state machine and its host-facing capabilities.
//!
//! # Role in emojipick
//! `emojipick-runtime` ties the data, search and grid crates together into
//! [`EmojiPicker`], an update/command model the host drives with
//! [`PickerMsg`]s and renders from [`PickerView`] snapshots.
//!
//! # Primary responsibilities
//! - **EmojiPicker**: query, layout, active group, focus, skin-tone chooser.
//! - **RecentsTracker**: bounded most-recent-first list with persistence.
//! - **Storage**: injectable key/value capability (memory, file, none).
//! - **Render mode**: native vs. sprite-sheet glyphs.
//! - **Placement**: popup geometry relative to parent or anchor.
//! - **Config**: `EMOJIPICK_*` environment overrides.
//!
//! # Feature flags
//! - `tracing-json`: [`logging::init_json_logging`] installs a JSON
//!   `tracing-subscriber` filtered by `EMOJIPICK_LOG`.

pub mod config;
#[cfg(feature = "tracing-json")]
pub mod logging;
pub mod options;
pub mod picker;
pub mod placement;
pub mod recents;
pub mod render;
pub mod storage;

pub use config::{ConfigError, PickerEnvConfig, PickerEnvConfigParse, RenderModeSetting};
pub use options::PickerOptions;
pub use picker::{
    CellView, ChooserView, EmojiPicker, FocusRegion, GroupView, PickerCmd, PickerKey, PickerMsg,
    PickerView, RowView, SkinToneChooser,
};
pub use placement::{AnchorRect, HorizontalSide, Length, PopupPlacement, VerticalSide};
pub use recents::{DEFAULT_RECENTS_KEY, MAX_RECENTS, RecentsTracker};
pub use render::{EmojiSupport, GlyphImage, RenderMode, SpritePosition};
pub use storage::{
    FileStorage, MemoryStorage, Storage, StorageError, UnavailableStorage, probe_storage,
};
