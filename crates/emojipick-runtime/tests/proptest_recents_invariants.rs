#![forbid(unsafe_code)]

//! Property tests for the recents tracker.
//!
//! # Invariants
//!
//! 1. Never more than 32 entries.
//! 2. Glyphs are unique.
//! 3. The last pick is always first.
//! 4. The list equals "distinct picks, most recent first, truncated".

use emojipick_core::{Dataset, EmojiRecord};
use emojipick_runtime::{MAX_RECENTS, RecentsTracker};
use proptest::prelude::*;

fn records() -> Vec<EmojiRecord> {
    Dataset::builtin().records().cloned().collect()
}

fn expected(picks: &[usize], all: &[EmojiRecord]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for &i in picks.iter().rev() {
        let glyph = all[i].glyph().to_owned();
        if !out.contains(&glyph) {
            out.push(glyph);
        }
    }
    out.truncate(MAX_RECENTS);
    out
}

proptest! {
    #[test]
    fn recents_model(picks in proptest::collection::vec(0usize..102, 0..120)) {
        let all = records();
        let mut tracker = RecentsTracker::in_memory();
        for &i in &picks {
            tracker.mark_recent(all[i].clone());
            prop_assert!(tracker.len() <= MAX_RECENTS);
            prop_assert_eq!(tracker.entries()[0].glyph(), all[i].glyph());
        }
        let glyphs: Vec<String> = tracker.entries().iter().map(|r| r.glyph().to_owned()).collect();
        prop_assert_eq!(glyphs, expected(&picks, &all));
    }

    #[test]
    fn repick_does_not_grow(picks in proptest::collection::vec(0usize..102, 1..60), again in 0usize..60) {
        let all = records();
        let mut tracker = RecentsTracker::in_memory();
        for &i in &picks {
            tracker.mark_recent(all[i].clone());
        }
        let before = tracker.len();
        let pick = tracker.entries()[again % before].clone();
        tracker.mark_recent(pick.clone());
        prop_assert_eq!(tracker.len(), before);
        prop_assert_eq!(tracker.entries()[0].glyph(), pick.glyph());
    }
}

#[test]
fn forty_distinct_picks_keep_thirty_two() {
    let all = records();
    let mut tracker = RecentsTracker::in_memory();
    for record in all.iter().take(40) {
        tracker.mark_recent(record.clone());
    }
    assert_eq!(tracker.len(), 32);
    assert_eq!(tracker.entries()[0].glyph(), all[39].glyph());
    assert_eq!(tracker.entries()[31].glyph(), all[8].glyph());

    tracker.mark_recent(all[20].clone());
    assert_eq!(tracker.len(), 32);
    assert_eq!(tracker.entries()[0].glyph(), all[20].glyph());
}
