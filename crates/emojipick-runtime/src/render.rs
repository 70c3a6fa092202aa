#![forbid(unsafe_code)]

//! Native vs. sprite-sheet glyph rendering.
//!
//! Whether the host can draw color emoji is decided once, when the picker is
//! built, from an [`EmojiSupport`] capability. In [`RenderMode::SpriteSheet`]
//! each dataset glyph maps to a cell of a fixed sprite sheet laid out in
//! flattened dataset order; glyphs outside the sheet (skin-tone variants)
//! fall back to a per-glyph image asset.

use std::fmt;

use emojipick_core::Dataset;

/// Columns in the sprite sheet.
pub const SPRITE_COLUMNS: usize = 42;
/// Rows in the sprite sheet.
pub const SPRITE_ROWS: usize = 43;
/// Edge length of one sprite cell, in pixels.
pub const SPRITE_CELL_PX: u32 = 28;

const VARIATION_SELECTOR_16: char = '\u{FE0F}';
const ZERO_WIDTH_JOINER: char = '\u{200D}';

/// How glyphs are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// The host font draws emoji.
    #[default]
    Native,
    /// Glyphs are cut from the sprite sheet.
    SpriteSheet,
}

impl RenderMode {
    /// Parse `native` / `spritesheet` (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "native" => Some(Self::Native),
            "spritesheet" | "sprite-sheet" | "sprite" => Some(Self::SpriteSheet),
            _ => None,
        }
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::SpriteSheet => "spritesheet",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host capability: can native emoji be rendered?
#[derive(Default)]
pub enum EmojiSupport {
    /// Always render natively.
    #[default]
    Always,
    /// Never render natively.
    Never,
    /// Ask the host once.
    Detect(Box<dyn Fn() -> bool>),
}

impl fmt::Debug for EmojiSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => write!(f, "Always"),
            Self::Never => write!(f, "Never"),
            Self::Detect(_) => write!(f, "Detect(..)"),
        }
    }
}

impl EmojiSupport {
    /// Capability backed by a host detector.
    pub fn detect(detector: impl Fn() -> bool + 'static) -> Self {
        Self::Detect(Box::new(detector))
    }

    /// Resolve to a render mode. Detectors run exactly once per call.
    #[must_use]
    pub fn resolve(&self) -> RenderMode {
        let native = match self {
            Self::Always => true,
            Self::Never => false,
            Self::Detect(detector) => detector(),
        };
        if native {
            RenderMode::Native
        } else {
            RenderMode::SpriteSheet
        }
    }
}

/// Cell of the sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpritePosition {
    pub column: usize,
    pub row: usize,
}

impl SpritePosition {
    /// Cell for flattened dataset index `index`; `None` past the sheet.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= SPRITE_COLUMNS * SPRITE_ROWS {
            return None;
        }
        Some(Self {
            column: index % SPRITE_COLUMNS,
            row: index / SPRITE_COLUMNS,
        })
    }

    /// Pixel offset of the cell's top-left corner.
    #[must_use]
    pub const fn offset_px(self) -> (u32, u32) {
        (
            self.column as u32 * SPRITE_CELL_PX,
            self.row as u32 * SPRITE_CELL_PX,
        )
    }
}

/// What to draw for one glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphImage {
    /// Draw the text itself.
    Native(String),
    /// Draw a sprite-sheet cell.
    Sprite(SpritePosition),
    /// Load a standalone image by asset name.
    Asset(String),
}

/// Resolve how to draw `glyph` in `mode`.
#[must_use]
pub fn glyph_image(mode: RenderMode, dataset: &Dataset, glyph: &str) -> GlyphImage {
    match mode {
        RenderMode::Native => GlyphImage::Native(glyph.to_owned()),
        RenderMode::SpriteSheet => dataset
            .position(glyph)
            .and_then(SpritePosition::from_index)
            .map_or_else(|| GlyphImage::Asset(asset_name(glyph)), GlyphImage::Sprite),
    }
}

/// Per-glyph asset name: lowercase hex code points joined by `-`.
///
/// U+FE0F is dropped unless the sequence contains a zero-width joiner.
///
/// ```
/// use emojipick_runtime::render::asset_name;
///
/// assert_eq!(asset_name("👍🏽"), "1f44d-1f3fd");
/// assert_eq!(asset_name("✌️"), "270c");
/// ```
#[must_use]
pub fn asset_name(glyph: &str) -> String {
    let keep_vs16 = glyph.contains(ZERO_WIDTH_JOINER);
    glyph
        .chars()
        .filter(|&c| keep_vs16 || c != VARIATION_SELECTOR_16)
        .map(|c| format!("{:x}", u32::from(c)))
        .collect::<Vec<_>>()
        .join("-")
}
