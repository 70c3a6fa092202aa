#![forbid(unsafe_code)]

//! Row bucketing of search matches into grouped, fixed-width rows.
//!
//! # Invariants
//!
//! 1. **Row accounting**: the row counts of all groups sum to the number of
//!    rows, and group `g` owns the `group[g].row_count` rows after the rows
//!    of groups `0..g`.
//! 2. **Fill policy**: every row except the last of its group is full; the
//!    last row holds `1..=row_size` records.
//! 3. **No empty groups**: a group with zero rows is never emitted. The one
//!    exception to invariant 2 is the recents placeholder: in the unfiltered
//!    view an empty recents list still yields a recents group with a single
//!    empty row so the empty-state message has a place to render.
//! 4. **Determinism**: the bucketer holds no state; equal inputs give equal
//!    layouts.

use emojipick_core::{Dataset, EmojiRecord, ROW_SIZE};
use emojipick_search::SearchResultSet;
use smallvec::SmallVec;
use tracing::{debug, debug_span};

use crate::active::{active_group, group_start};
use crate::icons::CategoryIcon;

/// Default title of the recents group.
pub const DEFAULT_RECENTS_LABEL: &str = "Frequently used";

/// What a group is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// The synthetic recents section.
    Recents,
    /// Dataset category at this index.
    Category(usize),
}

/// A named, contiguous run of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub row_count: usize,
    pub icon: Option<CategoryIcon>,
    pub kind: GroupKind,
}

/// One grid row of up to [`ROW_SIZE`] records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiRow {
    records: SmallVec<[EmojiRecord; ROW_SIZE]>,
}

impl EmojiRow {
    /// Records in column order.
    #[must_use]
    pub fn records(&self) -> &[EmojiRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the row is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// An empty row stands in for "no recents yet".
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `col`.
    #[must_use]
    pub fn get(&self, col: usize) -> Option<&EmojiRecord> {
        self.records.get(col)
    }
}

/// Grouped rows produced by [`RowBucketer::bucket`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridLayout {
    groups: Vec<Group>,
    rows: Vec<EmojiRow>,
}

impl GridLayout {
    /// Groups in display order.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Flattened rows.
    #[must_use]
    pub fn rows(&self) -> &[EmojiRow] {
        &self.rows
    }

    /// Total row count.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of records across all rows.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.rows.iter().map(EmojiRow::len).sum()
    }

    /// Row counts per group.
    pub fn row_counts(&self) -> impl Iterator<Item = usize> + Clone + '_ {
        self.groups.iter().map(|g| g.row_count)
    }

    /// First row of group `index`.
    #[must_use]
    pub fn group_start(&self, index: usize) -> usize {
        group_start(index, self.row_counts())
    }

    /// Group owning `row`.
    #[must_use]
    pub fn group_of_row(&self, row: usize) -> Option<usize> {
        if row >= self.rows.len() {
            return None;
        }
        Some(active_group(row, self.row_counts()))
    }

    /// Position of the group with `kind`, if present.
    #[must_use]
    pub fn position_of(&self, kind: GroupKind) -> Option<usize> {
        self.groups.iter().position(|g| g.kind == kind)
    }

    /// Record at (`row`, `col`).
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&EmojiRecord> {
        self.rows.get(row)?.get(col)
    }

    /// Whether the layout has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Stateless row builder.
#[derive(Debug, Clone)]
pub struct RowBucketer {
    row_size: usize,
    recents_label: String,
}

impl Default for RowBucketer {
    fn default() -> Self {
        Self::new()
    }
}

impl RowBucketer {
    /// Bucketer with [`ROW_SIZE`] columns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            row_size: ROW_SIZE,
            recents_label: DEFAULT_RECENTS_LABEL.to_owned(),
        }
    }

    /// Set the recents group title.
    #[must_use]
    pub fn with_recents_label(mut self, label: impl Into<String>) -> Self {
        self.recents_label = label.into();
        self
    }

    /// Set the column count.
    ///
    /// # Panics
    ///
    /// Panics if `row_size` is 0.
    #[must_use]
    pub fn with_row_size(mut self, row_size: usize) -> Self {
        assert!(row_size > 0, "row size must be greater than 0");
        self.row_size = row_size;
        self
    }

    /// Columns per row.
    #[must_use]
    pub fn row_size(&self) -> usize {
        self.row_size
    }

    /// Build the layout for the current search and recents.
    #[must_use]
    pub fn bucket(
        &self,
        dataset: &Dataset,
        recents: &[EmojiRecord],
        results: &SearchResultSet,
    ) -> GridLayout {
        let _span = debug_span!(
            "bucket_rows",
            filtered = results.is_filtered(),
            recents = recents.len()
        )
        .entered();

        let mut layout = GridLayout::default();

        let recents_rows = self.fill(recents.iter().filter(|r| results.contains(r.glyph())));
        if !recents_rows.is_empty() {
            self.push_group(
                &mut layout,
                self.recents_label.clone(),
                GroupKind::Recents,
                Some(CategoryIcon::recents()),
                recents_rows,
            );
        } else if !results.is_filtered() {
            self.push_group(
                &mut layout,
                self.recents_label.clone(),
                GroupKind::Recents,
                Some(CategoryIcon::recents()),
                vec![EmojiRow::default()],
            );
        }

        for (index, category) in dataset.categories().iter().enumerate() {
            let rows = self.fill(
                category
                    .emojis()
                    .iter()
                    .filter(|r| results.contains(r.glyph())),
            );
            if !rows.is_empty() {
                self.push_group(
                    &mut layout,
                    category.name().to_owned(),
                    GroupKind::Category(index),
                    CategoryIcon::for_category(index),
                    rows,
                );
            }
        }

        debug!(
            groups = layout.groups.len(),
            rows = layout.rows.len(),
            "rows bucketed"
        );
        layout
    }

    fn fill<'a>(&self, records: impl Iterator<Item = &'a EmojiRecord>) -> Vec<EmojiRow> {
        let mut rows: Vec<EmojiRow> = Vec::new();
        for record in records {
            match rows.last_mut() {
                Some(last) if last.records.len() < self.row_size => {
                    last.records.push(record.clone());
                }
                _ => {
                    let mut row = EmojiRow::default();
                    row.records.push(record.clone());
                    rows.push(row);
                }
            }
        }
        rows
    }

    fn push_group(
        &self,
        layout: &mut GridLayout,
        name: String,
        kind: GroupKind,
        icon: Option<CategoryIcon>,
        rows: Vec<EmojiRow>,
    ) {
        layout.groups.push(Group {
            name,
            row_count: rows.len(),
            icon,
            kind,
        });
        layout.rows.extend(rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emojipick_core::Category;
    use emojipick_search::SearchIndex;

    fn rec(glyph: &str, desc: &str) -> EmojiRecord {
        EmojiRecord::new(glyph, desc, format!(":{desc}:"), "")
    }

    fn dataset() -> Dataset {
        let smileys = ["😀", "😃", "😄", "😁", "😆", "😅", "🤣", "😂", "🙂", "🙃"]
            .iter()
            .enumerate()
            .map(|(i, g)| rec(g, &format!("smile {i}")))
            .collect();
        Dataset::new(vec![
            Category::new("Smileys", smileys),
            Category::new("Animals", vec![rec("🐶", "dog"), rec("🐱", "cat")]),
            Category::new("Food", vec![rec("🍕", "pizza")]),
        ])
        .unwrap()
    }

    #[test]
    fn default_view_with_empty_recents_has_placeholder() {
        let ds = dataset();
        let idx = SearchIndex::new(&ds);
        let layout = RowBucketer::new().bucket(&ds, &[], &idx.search(""));

        let groups = layout.groups();
        assert_eq!(groups[0].kind, GroupKind::Recents);
        assert_eq!(groups[0].row_count, 1);
        assert!(layout.rows()[0].is_placeholder());
        assert_eq!(groups[0].icon, Some(CategoryIcon::History));

        assert_eq!(groups[1].name, "Smileys");
        assert_eq!(groups[1].row_count, 2);
        assert_eq!(layout.rows()[1].len(), 8);
        assert_eq!(layout.rows()[2].len(), 2);
        assert_eq!(groups[1].icon, Some(CategoryIcon::Smileys));
        assert_eq!(groups[2].icon, Some(CategoryIcon::People));
        assert_eq!(layout.row_count(), 5);
    }

    #[test]
    fn filtered_view_omits_unmatched_recents() {
        let ds = dataset();
        let idx = SearchIndex::new(&ds);
        let recents = vec![rec("😀", "smile 0")];
        let layout = RowBucketer::new().bucket(&ds, &recents, &idx.search("pizza"));

        assert_eq!(layout.groups().len(), 1);
        assert_eq!(layout.groups()[0].name, "Food");
        assert_eq!(layout.groups()[0].kind, GroupKind::Category(2));
        assert_eq!(layout.row_count(), 1);
    }

    #[test]
    fn filtered_view_keeps_matching_recents() {
        let ds = dataset();
        let idx = SearchIndex::new(&ds);
        let recents = vec![rec("🍕", "pizza"), rec("🐶", "dog")];
        let layout = RowBucketer::new().bucket(&ds, &recents, &idx.search("pizza"));

        assert_eq!(layout.groups()[0].kind, GroupKind::Recents);
        assert_eq!(layout.rows()[0].records()[0].glyph(), "🍕");
        assert_eq!(layout.rows()[0].len(), 1);
        assert_eq!(layout.record_count(), 2);
    }

    #[test]
    fn recents_come_first_in_recency_order() {
        let ds = dataset();
        let idx = SearchIndex::new(&ds);
        let recents = vec![rec("🐱", "cat"), rec("😃", "smile 1")];
        let layout = RowBucketer::new().bucket(&ds, &recents, &idx.search(""));
        let glyphs: Vec<_> = layout.rows()[0].records().iter().map(EmojiRecord::glyph).collect();
        assert_eq!(glyphs, vec!["🐱", "😃"]);
    }

    #[test]
    fn no_matches_yield_empty_layout() {
        let ds = dataset();
        let idx = SearchIndex::new(&ds);
        let layout = RowBucketer::new().bucket(&ds, &[], &idx.search("zzzzzzzz"));
        assert!(layout.is_empty());
        assert!(layout.groups().is_empty());
    }

    #[test]
    fn group_lookups() {
        let ds = dataset();
        let idx = SearchIndex::new(&ds);
        let layout = RowBucketer::new().bucket(&ds, &[], &idx.search(""));
        assert_eq!(layout.group_start(0), 0);
        assert_eq!(layout.group_start(1), 1);
        assert_eq!(layout.group_start(2), 3);
        assert_eq!(layout.group_of_row(2), Some(1));
        assert_eq!(layout.group_of_row(4), Some(3));
        assert_eq!(layout.group_of_row(5), None);
        assert_eq!(layout.position_of(GroupKind::Category(1)), Some(2));
        assert_eq!(layout.cell(3, 1).map(EmojiRecord::glyph), Some("🐱"));
        assert_eq!(layout.cell(3, 2), None);
    }

    #[test]
    fn custom_row_size() {
        let ds = dataset();
        let idx = SearchIndex::new(&ds);
        let layout = RowBucketer::new()
            .with_row_size(4)
            .bucket(&ds, &[], &idx.search(""));
        // placeholder + 3 smiley rows + 1 animal row + 1 food row
        assert_eq!(layout.row_count(), 6);
    }

    #[test]
    fn bucketing_is_deterministic() {
        let ds = dataset();
        let idx = SearchIndex::new(&ds);
        let recents = vec![rec("🍕", "pizza")];
        let b = RowBucketer::new();
        assert_eq!(
            b.bucket(&ds, &recents, &idx.search("smile")),
            b.bucket(&ds, &recents, &idx.search("smile"))
        );
    }
}
