#![forbid(unsafe_code)]

//! Core: emoji records, categories, datasets, and skin-tone transforms.
//!
//! # Role in emojipick
//! `emojipick-core` is the data layer. It owns the immutable emoji dataset
//! shape, the record wire format used for persisted recents, and the pure
//! skin-tone transform. Every other crate consumes these types.
//!
//! # Primary responsibilities
//! - **EmojiRecord**: glyph, description, shortcut and modifier flags.
//! - **Dataset**: validated, ordered categories loaded once at startup.
//! - **SkinTone**: Fitzpatrick modifier application and stripping.
//! - **Builtin data**: a small sample dataset for demos and tests.

pub mod builtin;
pub mod dataset;
pub mod record;
pub mod skin_tone;

pub use dataset::{Category, Dataset, DatasetError};
pub use record::{EmojiRecord, ModifierFlags};
pub use skin_tone::SkinTone;

/// Number of emoji per grid row.
pub const ROW_SIZE: usize = 8;
