#![forbid(unsafe_code)]

//! Property tests for the search index.
//!
//! # Invariants
//!
//! 1. A blank query returns the flattened dataset order, unfiltered.
//! 2. A filtered result is a subsequence of the dataset order.
//! 3. Every result glyph has a key the scorer accepts.

use emojipick_core::Dataset;
use emojipick_search::{FuzzyScorer, SearchIndex};
use proptest::prelude::*;

fn index() -> (Dataset, SearchIndex) {
    let dataset = Dataset::builtin();
    let index = SearchIndex::new(&dataset);
    (dataset, index)
}

#[test]
fn empty_query_is_dataset_order() {
    let (dataset, index) = index();
    let result = index.search("");
    assert!(!result.is_filtered());
    assert_eq!(result.glyphs(), dataset.glyph_order().as_slice());
}

#[test]
fn known_queries() {
    let (_, index) = index();
    assert_eq!(index.search("pizza").glyphs(), &["🍕"]);
    assert!(index.search("thumbs").contains("👍"));
    assert!(index.search(":tada:").contains("🎉"));
    assert!(index.search("qqqqqqqq").is_empty());
}

proptest! {
    #[test]
    fn blank_queries_are_unfiltered(ws in "[ \t]{0,6}") {
        let (dataset, index) = index();
        let result = index.search(&ws);
        prop_assert!(!result.is_filtered());
        prop_assert_eq!(result.len(), dataset.len());
    }

    #[test]
    fn results_are_ordered_subsequence(query in "[a-z :]{1,8}") {
        let (dataset, index) = index();
        let result = index.search(&query);
        let order = dataset.glyph_order();
        let mut cursor = 0usize;
        for glyph in result.glyphs() {
            let pos = dataset.position(glyph).expect("result glyph comes from dataset");
            prop_assert!(pos >= cursor);
            cursor = pos + 1;
            prop_assert_eq!(order[pos], glyph.as_str());
        }
    }

    #[test]
    fn results_satisfy_scorer(query in "[a-z]{1,6}") {
        let (dataset, index) = index();
        let scorer = FuzzyScorer::new();
        for glyph in index.search(&query).glyphs() {
            let rec = dataset.record(glyph).expect("known glyph");
            prop_assert!(
                scorer.is_match(&query, rec.description()) || scorer.is_match(&query, rec.shortcut())
            );
        }
    }
}
