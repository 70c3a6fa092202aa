#![forbid(unsafe_code)]

//! Search index over the flattened dataset.
//!
//! Each record contributes two keys, its description and its shortcut
//! code. Results keep dataset order; they are never ranked.

use emojipick_core::{Dataset, EmojiRecord};
use rustc_hash::FxHashSet;
use tracing::{debug, debug_span};

use crate::scorer::FuzzyScorer;

/// Glyphs matching a query, in dataset order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResultSet {
    glyphs: Vec<String>,
    members: FxHashSet<String>,
    filtered: bool,
}

impl SearchResultSet {
    fn new(glyphs: Vec<String>, filtered: bool) -> Self {
        let members = glyphs.iter().cloned().collect();
        Self {
            glyphs,
            members,
            filtered,
        }
    }

    /// Matching glyphs in dataset order.
    #[must_use]
    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    /// Whether `glyph` is part of the result.
    #[must_use]
    pub fn contains(&self, glyph: &str) -> bool {
        self.members.contains(glyph)
    }

    /// Number of matching glyphs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// True when nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// True when a non-blank query narrowed the dataset.
    ///
    /// Distinguishes "no search" from "search that matched everything".
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.filtered
    }
}

#[derive(Debug, Clone)]
struct IndexedRecord {
    glyph: String,
    keys: [Vec<char>; 2],
}

impl IndexedRecord {
    fn new(record: &EmojiRecord) -> Self {
        Self {
            glyph: record.glyph().to_owned(),
            keys: [
                FuzzyScorer::fold(record.description()),
                FuzzyScorer::fold(record.shortcut()),
            ],
        }
    }
}

/// Fuzzy index built once from a [`Dataset`].
#[derive(Debug, Clone)]
pub struct SearchIndex {
    records: Vec<IndexedRecord>,
    scorer: FuzzyScorer,
}

impl SearchIndex {
    /// Index every record of `dataset` with the default scorer.
    #[must_use]
    pub fn new(dataset: &Dataset) -> Self {
        Self::with_scorer(dataset, FuzzyScorer::new())
    }

    /// Index with a custom scorer.
    #[must_use]
    pub fn with_scorer(dataset: &Dataset, scorer: FuzzyScorer) -> Self {
        let records = dataset.records().map(IndexedRecord::new).collect();
        Self { records, scorer }
    }

    /// Number of indexed records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every glyph in dataset order, unfiltered.
    #[must_use]
    pub fn all(&self) -> SearchResultSet {
        SearchResultSet::new(self.records.iter().map(|r| r.glyph.clone()).collect(), false)
    }

    /// Glyphs of records whose description or shortcut matches `query`.
    ///
    /// A blank query returns [`SearchIndex::all`].
    #[must_use]
    pub fn search(&self, query: &str) -> SearchResultSet {
        if query.trim().is_empty() {
            return self.all();
        }

        let _span = debug_span!("emoji_search", query_len = query.len()).entered();
        let pattern = FuzzyScorer::fold(query);
        let glyphs: Vec<String> = self
            .records
            .iter()
            .filter(|r| {
                r.keys
                    .iter()
                    .any(|key| self.scorer.is_match_folded(&pattern, key))
            })
            .map(|r| r.glyph.clone())
            .collect();
        debug!(matches = glyphs.len(), "search complete");
        SearchResultSet::new(glyphs, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emojipick_core::Category;
    use tracing_test::traced_test;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Category::new(
                "Smileys",
                vec![
                    EmojiRecord::new("😃", "grinning face with big eyes", ":smiley:", ""),
                    EmojiRecord::new("😢", "crying face", ":cry:", ""),
                ],
            ),
            Category::new(
                "People",
                vec![
                    EmojiRecord::new("👍", "thumbs up", ":+1:", "s"),
                    EmojiRecord::new("👋", "waving hand", ":wave:", "s"),
                ],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn blank_query_returns_everything_unfiltered() {
        let idx = SearchIndex::new(&dataset());
        for q in ["", "   ", "\t\n"] {
            let r = idx.search(q);
            assert!(!r.is_filtered());
            assert_eq!(r.glyphs(), &["😃", "😢", "👍", "👋"]);
        }
    }

    #[test]
    fn matches_description() {
        let idx = SearchIndex::new(&dataset());
        let r = idx.search("crying");
        assert!(r.is_filtered());
        assert_eq!(r.glyphs(), &["😢"]);
    }

    #[test]
    fn matches_shortcut() {
        let idx = SearchIndex::new(&dataset());
        let r = idx.search(":wave");
        assert_eq!(r.glyphs(), &["👋"]);
        assert!(r.contains("👋"));
        assert!(!r.contains("👍"));
    }

    #[test]
    fn preserves_dataset_order() {
        let idx = SearchIndex::new(&dataset());
        let r = idx.search("face");
        assert_eq!(r.glyphs(), &["😃", "😢"]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let idx = SearchIndex::new(&dataset());
        let r = idx.search("zzzzzz");
        assert!(r.is_empty());
        assert!(r.is_filtered());
    }

    #[test]
    #[traced_test]
    fn filtered_search_is_traced() {
        let idx = SearchIndex::new(&dataset());
        let _ = idx.search("thumbs");
        assert!(logs_contain("search complete"));
    }
}
