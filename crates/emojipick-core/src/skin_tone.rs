#![forbid(unsafe_code)]

//! Skin-tone (Fitzpatrick) modifier handling.
//!
//! # Invariants
//!
//! 1. [`apply`] never leaves more than one modifier in its output.
//! 2. `apply(apply(e, t1), SkinTone::None) == strip(e)` for every `e`, `t1`.
//! 3. Both functions are total: any string is accepted, non-emoji input
//!    passes through unchanged apart from modifier removal.
//!
//! # Example
//!
//! ```
//! use emojipick_core::skin_tone::{apply, SkinTone};
//!
//! assert_eq!(apply("👍", SkinTone::DarkBrown), "👍🏿");
//! assert_eq!(apply("👍🏿", SkinTone::None), "👍");
//! assert_eq!(apply("👍🏻", SkinTone::DarkBrown), "👍🏿");
//! ```

use std::fmt;
use std::ops::RangeInclusive;

/// Codepoint range of the five Fitzpatrick modifiers.
pub const MODIFIER_RANGE: RangeInclusive<char> = '\u{1F3FB}'..='\u{1F3FF}';

/// Requested skin tone for a modifiable emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SkinTone {
    /// No modifier: the default yellow glyph.
    #[default]
    None,
    White,
    CreamWhite,
    LightBrown,
    Brown,
    DarkBrown,
}

impl SkinTone {
    /// Every tone in chooser order.
    pub const ALL: [SkinTone; 6] = [
        SkinTone::None,
        SkinTone::White,
        SkinTone::CreamWhite,
        SkinTone::LightBrown,
        SkinTone::Brown,
        SkinTone::DarkBrown,
    ];

    /// The modifier codepoint for this tone, if any.
    #[must_use]
    pub const fn modifier(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::White => Some('\u{1F3FB}'),
            Self::CreamWhite => Some('\u{1F3FC}'),
            Self::LightBrown => Some('\u{1F3FD}'),
            Self::Brown => Some('\u{1F3FE}'),
            Self::DarkBrown => Some('\u{1F3FF}'),
        }
    }

    /// Tone for a modifier codepoint.
    #[must_use]
    pub const fn from_modifier(c: char) -> Option<Self> {
        match c {
            '\u{1F3FB}' => Some(Self::White),
            '\u{1F3FC}' => Some(Self::CreamWhite),
            '\u{1F3FD}' => Some(Self::LightBrown),
            '\u{1F3FE}' => Some(Self::Brown),
            '\u{1F3FF}' => Some(Self::DarkBrown),
            _ => None,
        }
    }

    /// Position of the tone in [`SkinTone::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Step through [`SkinTone::ALL`] with wrap-around in both directions.
    #[must_use]
    pub fn cycle(self, delta: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let next = (self.index() as isize + delta).rem_euclid(len);
        Self::ALL[next as usize]
    }

    /// Parse a tone name (`none`, `white`, `creamWhite`, ...).
    ///
    /// Both camelCase and snake_case spellings are accepted.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace('_', "").as_str() {
            "none" => Some(Self::None),
            "white" => Some(Self::White),
            "creamwhite" => Some(Self::CreamWhite),
            "lightbrown" => Some(Self::LightBrown),
            "brown" => Some(Self::Brown),
            "darkbrown" => Some(Self::DarkBrown),
            _ => None,
        }
    }

    /// Canonical camelCase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::White => "white",
            Self::CreamWhite => "creamWhite",
            Self::LightBrown => "lightBrown",
            Self::Brown => "brown",
            Self::DarkBrown => "darkBrown",
        }
    }
}

impl fmt::Display for SkinTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `c` is a Fitzpatrick modifier.
#[inline]
#[must_use]
pub fn is_modifier(c: char) -> bool {
    MODIFIER_RANGE.contains(&c)
}

/// Remove every skin-tone modifier from `emoji`.
#[must_use]
pub fn strip(emoji: &str) -> String {
    emoji.chars().filter(|c| !is_modifier(*c)).collect()
}

/// Tone currently carried by `emoji` (first modifier found).
#[must_use]
pub fn detect(emoji: &str) -> SkinTone {
    emoji
        .chars()
        .find_map(SkinTone::from_modifier)
        .unwrap_or(SkinTone::None)
}

/// Replace the skin tone of `emoji` with `tone`.
///
/// Existing modifiers are stripped first; a non-`None` tone appends its
/// modifier codepoint to the stripped base.
#[must_use]
pub fn apply(emoji: &str, tone: SkinTone) -> String {
    let mut out = strip(emoji);
    if let Some(m) = tone.modifier() {
        out.push(m);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_tone_to_yellow_emoji() {
        assert_eq!(apply("👍", SkinTone::DarkBrown), "👍🏿");
    }

    #[test]
    fn removes_tone_from_colored_emoji() {
        assert_eq!(apply("👍🏿", SkinTone::None), "👍");
    }

    #[test]
    fn replaces_existing_tone() {
        assert_eq!(apply("👍🏻", SkinTone::DarkBrown), "👍🏿");
    }

    #[test]
    fn strips_every_modifier_in_multi_person_sequence() {
        let couple = "🧑🏻\u{200D}🤝\u{200D}🧑🏿";
        assert_eq!(strip(couple), "🧑\u{200D}🤝\u{200D}🧑");
        assert_eq!(apply(couple, SkinTone::None), strip(couple));
        assert_eq!(apply(couple, SkinTone::Brown), "🧑\u{200D}🤝\u{200D}🧑🏾");
    }

    #[test]
    fn none_on_plain_emoji_is_identity() {
        assert_eq!(apply("😃", SkinTone::None), "😃");
    }

    #[test]
    fn detects_tone() {
        assert_eq!(detect("👋🏽"), SkinTone::LightBrown);
        assert_eq!(detect("👋"), SkinTone::None);
    }

    #[test]
    fn cycle_wraps_both_ways() {
        assert_eq!(SkinTone::None.cycle(-1), SkinTone::DarkBrown);
        assert_eq!(SkinTone::DarkBrown.cycle(1), SkinTone::None);
        assert_eq!(SkinTone::White.cycle(2), SkinTone::LightBrown);
        assert_eq!(SkinTone::Brown.cycle(-13), SkinTone::LightBrown);
    }

    #[test]
    fn parse_accepts_both_spellings() {
        assert_eq!(SkinTone::parse("creamWhite"), Some(SkinTone::CreamWhite));
        assert_eq!(SkinTone::parse("dark_brown"), Some(SkinTone::DarkBrown));
        assert_eq!(SkinTone::parse("purple"), None);
        for tone in SkinTone::ALL {
            assert_eq!(SkinTone::parse(tone.as_str()), Some(tone));
        }
    }

    #[test]
    fn modifier_round_trip() {
        for tone in SkinTone::ALL {
            if let Some(m) = tone.modifier() {
                assert!(is_modifier(m));
                assert_eq!(SkinTone::from_modifier(m), Some(tone));
            }
        }
    }
}
