#![forbid(unsafe_code)]

//! Category tab icons, assigned by position.
//!
//! Position 0 is always the recents tab; dataset category `i` uses
//! position `i + 1`. Datasets with more categories than icons get no icon
//! for the extra tabs.

use std::fmt;

/// Icon shown on a category tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryIcon {
    History,
    Smileys,
    People,
    Nature,
    Food,
    Travel,
    Activities,
    Objects,
    Symbols,
    Flags,
}

impl CategoryIcon {
    /// All icons in position order.
    pub const ALL: [CategoryIcon; 10] = [
        CategoryIcon::History,
        CategoryIcon::Smileys,
        CategoryIcon::People,
        CategoryIcon::Nature,
        CategoryIcon::Food,
        CategoryIcon::Travel,
        CategoryIcon::Activities,
        CategoryIcon::Objects,
        CategoryIcon::Symbols,
        CategoryIcon::Flags,
    ];

    /// Icon for a tab position.
    #[must_use]
    pub fn for_position(position: usize) -> Option<Self> {
        Self::ALL.get(position).copied()
    }

    /// Icon of the recents tab.
    #[must_use]
    pub const fn recents() -> Self {
        Self::History
    }

    /// Icon of dataset category `index`.
    #[must_use]
    pub fn for_category(index: usize) -> Option<Self> {
        Self::for_position(index + 1)
    }

    /// Position of the icon in [`CategoryIcon::ALL`].
    #[must_use]
    pub fn position(self) -> usize {
        self as usize
    }

    /// Stable identifier for host icon sets.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::History => "history",
            Self::Smileys => "grin-alt",
            Self::People => "child",
            Self::Nature => "leaf",
            Self::Food => "mug-tea",
            Self::Travel => "plane",
            Self::Activities => "futbol",
            Self::Objects => "lightbulb",
            Self::Symbols => "hashtag",
            Self::Flags => "flag",
        }
    }
}

impl fmt::Display for CategoryIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
