#![forbid(unsafe_code)]

//! Validated, immutable emoji dataset.
//!
//! # Invariants
//!
//! 1. **Non-empty**: a dataset holds at least one category and every
//!    category holds at least one record.
//! 2. **Unique glyphs**: no glyph appears twice across the whole dataset, so
//!    a glyph identifies exactly one record and one sprite-sheet slot.
//! 3. **Stable order**: [`Dataset::records`] yields categories in load order
//!    and records in category order; this order defines sprite indices and
//!    the unfiltered search result.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | No categories | Empty input | [`DatasetError::Empty`] |
//! | Empty category | Category without records | [`DatasetError::EmptyCategory`] |
//! | Duplicate glyph | Same glyph in two places | [`DatasetError::DuplicateGlyph`] |
//! | Bad glyph | Empty or multi-grapheme glyph | [`DatasetError::InvalidGlyph`] |
//! | Bad JSON | Malformed input | [`DatasetError::Parse`] |

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::record::EmojiRecord;

/// Errors raised while loading a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// The dataset has no categories.
    Empty,
    /// A category has no records.
    EmptyCategory { index: usize, name: String },
    /// A glyph occurs more than once.
    DuplicateGlyph { glyph: String, category: String },
    /// A glyph is empty or not a single grapheme cluster.
    InvalidGlyph { glyph: String, category: String },
    /// The JSON input could not be parsed.
    Parse(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "dataset has no categories"),
            Self::EmptyCategory { index, name } => {
                write!(f, "category #{index} '{name}' has no emoji")
            }
            Self::DuplicateGlyph { glyph, category } => {
                write!(f, "duplicate glyph '{glyph}' in category '{category}'")
            }
            Self::InvalidGlyph { glyph, category } => {
                write!(f, "invalid glyph {glyph:?} in category '{category}'")
            }
            Self::Parse(msg) => write!(f, "dataset parse error: {msg}"),
        }
    }
}

impl std::error::Error for DatasetError {}

/// A named, ordered group of emoji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "category")]
    name: String,
    emojis: Vec<EmojiRecord>,
}

impl Category {
    /// Create a category.
    #[must_use]
    pub fn new(name: impl Into<String>, emojis: Vec<EmojiRecord>) -> Self {
        Self {
            name: name.into(),
            emojis,
        }
    }

    /// Display name of the category.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records in dataset order.
    #[must_use]
    pub fn emojis(&self) -> &[EmojiRecord] {
        &self.emojis
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    /// Whether the category has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }
}

/// The full, validated emoji dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    categories: Vec<Category>,
    /// Glyph -> position in the flattened record order.
    positions: HashMap<String, usize>,
}

impl Dataset {
    /// Validate and index a list of categories.
    pub fn new(categories: Vec<Category>) -> Result<Self, DatasetError> {
        if categories.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut positions = HashMap::new();
        let mut next = 0usize;
        for (index, category) in categories.iter().enumerate() {
            if category.is_empty() {
                return Err(DatasetError::EmptyCategory {
                    index,
                    name: category.name.clone(),
                });
            }
            for record in &category.emojis {
                let glyph = record.glyph();
                if glyph.graphemes(true).count() != 1 {
                    return Err(DatasetError::InvalidGlyph {
                        glyph: glyph.to_owned(),
                        category: category.name.clone(),
                    });
                }
                if positions.insert(glyph.to_owned(), next).is_some() {
                    return Err(DatasetError::DuplicateGlyph {
                        glyph: glyph.to_owned(),
                        category: category.name.clone(),
                    });
                }
                next += 1;
            }
        }

        Ok(Self {
            categories,
            positions,
        })
    }

    /// Parse a JSON array of `{"category": ..., "emojis": [...]}` objects.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let categories: Vec<Category> =
            serde_json::from_str(json).map_err(|e| DatasetError::Parse(e.to_string()))?;
        Self::new(categories)
    }

    /// The built-in sample dataset.
    #[must_use]
    pub fn builtin() -> Self {
        crate::builtin::dataset()
    }

    /// Categories in load order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Total number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false: validation rejects empty datasets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// All records, flattened in dataset order.
    pub fn records(&self) -> impl Iterator<Item = &EmojiRecord> + '_ {
        self.categories.iter().flat_map(|c| c.emojis.iter())
    }

    /// All glyphs, flattened in dataset order.
    #[must_use]
    pub fn glyph_order(&self) -> Vec<&str> {
        self.records().map(EmojiRecord::glyph).collect()
    }

    /// Position of `glyph` in the flattened order (its sprite-sheet index).
    #[must_use]
    pub fn position(&self, glyph: &str) -> Option<usize> {
        self.positions.get(glyph).copied()
    }

    /// Look up a record by glyph.
    #[must_use]
    pub fn record(&self, glyph: &str) -> Option<&EmojiRecord> {
        let pos = self.position(glyph)?;
        self.records().nth(pos)
    }
}
