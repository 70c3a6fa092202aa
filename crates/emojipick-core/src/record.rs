#![forbid(unsafe_code)]

//! Emoji records and their modifier flags.
//!
//! A record is stored on the wire as a four element array
//! `[glyph, description, shortcut, modifiers]`, which is also the format the
//! recents list is persisted in.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Capabilities declared by the modifier marker string of a record.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierFlags: u8 {
        /// The emoji accepts a skin-tone modifier (`s` marker).
        const SKIN_TONE = 0b0000_0001;
    }
}

impl ModifierFlags {
    /// Parse a marker string. Unknown markers are ignored.
    #[must_use]
    pub fn parse(markers: &str) -> Self {
        let mut flags = Self::empty();
        for c in markers.chars() {
            if c == 's' {
                flags |= Self::SKIN_TONE;
            }
        }
        flags
    }
}

type RawRecord = (String, String, String, String);

/// One emoji entry of the static dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawRecord", into = "RawRecord")]
pub struct EmojiRecord {
    glyph: String,
    description: String,
    shortcut: String,
    markers: String,
    flags: ModifierFlags,
}

impl EmojiRecord {
    /// Create a record from its four string fields.
    #[must_use]
    pub fn new(
        glyph: impl Into<String>,
        description: impl Into<String>,
        shortcut: impl Into<String>,
        markers: impl Into<String>,
    ) -> Self {
        let markers = markers.into();
        Self {
            glyph: glyph.into(),
            description: description.into(),
            shortcut: shortcut.into(),
            flags: ModifierFlags::parse(&markers),
            markers,
        }
    }

    /// The literal emoji character sequence.
    #[must_use]
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Human-readable description (first search key).
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Shortcut code such as `:thumbsup:` (second search key).
    #[must_use]
    pub fn shortcut(&self) -> &str {
        &self.shortcut
    }

    /// Raw modifier marker string as found in the dataset.
    #[must_use]
    pub fn markers(&self) -> &str {
        &self.markers
    }

    /// Parsed modifier flags.
    #[must_use]
    pub fn flags(&self) -> ModifierFlags {
        self.flags
    }

    /// Whether the emoji accepts a skin-tone variant.
    #[must_use]
    pub fn supports_skin_tone(&self) -> bool {
        self.flags.contains(ModifierFlags::SKIN_TONE)
    }
}

impl From<RawRecord> for EmojiRecord {
    fn from((glyph, description, shortcut, markers): RawRecord) -> Self {
        Self::new(glyph, description, shortcut, markers)
    }
}

impl From<EmojiRecord> for RawRecord {
    fn from(record: EmojiRecord) -> Self {
        (
            record.glyph,
            record.description,
            record.shortcut,
            record.markers,
        )
    }
}
