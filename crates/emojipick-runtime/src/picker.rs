#![forbid(unsafe_code)]

//! The picker model: search, grouped rows, focus and the skin-tone chooser.
//!
//! [`EmojiPicker`] follows the update/command shape used throughout the
//! runtime: [`EmojiPicker::update`] applies one [`PickerMsg`] and returns a
//! [`PickerCmd`] describing the side effect the host should perform;
//! [`EmojiPicker::dispatch`] does both and runs the effect against the
//! callbacks in [`PickerOptions`].
//!
//! # Invariants
//!
//! 1. The layout is recomputed to completion on every query or recents
//!    change; the virtual list row count always equals the layout's.
//! 2. `active_group` is always a valid group index (or 0 with no groups).
//! 3. The grid cursor, when set, points at an existing record.
//! 4. Recents store the base record; a skin-toned glyph only reaches the
//!    pick callback.
//!
//! # Key handling
//!
//! | State | Key | Effect |
//! |-------|-----|--------|
//! | chooser open | Escape | close the chooser only |
//! | chooser open | arrows | cycle tone with wrap-around |
//! | chooser open | Enter / Space | pick the toned glyph |
//! | any | Escape | dismiss |
//! | any | Tab / BackTab | cycle search, tabs, grid |
//! | tabs | arrows | roving focus with wrap-around |
//! | tabs | Enter / Space | scroll to the focused group |
//! | grid | arrows | move the cursor; missing cells are a no-op |
//! | grid | Enter / Space | activate the focused record |
//! | grid | PageUp / PageDown | scroll by one viewport |
//!
//! The picker owns the scroll position. Hosts report their own list's
//! scrolling with `RangeChanged` (or drive it with `Scroll`); both move the
//! internal list and re-derive the active group from its first row.
//! | search | Down | enter the grid |

use std::ops::Range;

use emojipick_core::{Dataset, EmojiRecord, SkinTone, skin_tone};
use emojipick_grid::{
    CategoryIcon, Direction, GridCursor, GridLayout, GroupKind, RowBucketer, VirtualList,
    VirtualRows, active_group, wrap_index,
};
use emojipick_search::SearchIndex;
use tracing::{debug, debug_span};

use crate::config::PickerEnvConfig;
use crate::options::PickerOptions;
use crate::placement::PopupPlacement;
use crate::recents::RecentsTracker;
use crate::render::{EmojiSupport, GlyphImage, RenderMode, glyph_image};

/// Rows rendered beyond each end of the viewport.
pub const LIST_OVERSCAN: usize = 50;

/// Rows visible in the default popup.
pub const DEFAULT_VIEWPORT_ROWS: usize = 9;

/// Shown in the empty recents row.
pub const RECENTS_HINT: &str = "Your most used emoji will appear here.";

/// Shown when a search has no matches.
pub const NO_RESULTS_TEXT: &str = "No emoji found";

/// Search field placeholder.
pub const SEARCH_PLACEHOLDER: &str = "Search";

/// Key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerKey {
    Arrow(Direction),
    Enter,
    Space,
    Escape,
    Tab,
    BackTab,
    PageUp,
    PageDown,
}

/// Messages accepted by [`EmojiPicker::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerMsg {
    /// Show or hide the popup.
    SetVisible(bool),
    /// Replace the search query.
    SetQuery(String),
    /// Keyboard input.
    Key(PickerKey),
    /// Category tab clicked.
    SelectCategory(usize),
    /// The host's list scrolled; its first visible row becomes ours.
    RangeChanged(Range<usize>),
    /// Scroll by this many rows (positive = down).
    Scroll(i32),
    /// Grid cell clicked.
    Activate { row: usize, col: usize },
    /// Skin-tone chooser entry clicked.
    ChooseSkinTone(SkinTone),
    /// Outside click or focus loss.
    Dismiss,
}

/// Side effect requested by an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PickerCmd {
    #[default]
    None,
    /// Invoke the dismiss callback.
    Dismiss,
    /// Invoke the pick callback with this glyph.
    Pick(String),
}

/// Keyboard focus region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FocusRegion {
    #[default]
    Search,
    Tabs,
    Grid,
}

impl FocusRegion {
    fn cycle(self, forward: bool) -> Self {
        match (self, forward) {
            (Self::Search, true) | (Self::Grid, false) => Self::Tabs,
            (Self::Tabs, true) | (Self::Search, false) => Self::Grid,
            (Self::Grid, true) | (Self::Tabs, false) => Self::Search,
        }
    }
}

/// Open skin-tone chooser for one grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinToneChooser {
    pub row: usize,
    pub col: usize,
    pub record: EmojiRecord,
    pub selected: SkinTone,
}

impl SkinToneChooser {
    /// The six variants in [`SkinTone::ALL`] order.
    #[must_use]
    pub fn variants(&self) -> Vec<String> {
        SkinTone::ALL
            .iter()
            .map(|&tone| skin_tone::apply(self.record.glyph(), tone))
            .collect()
    }
}

/// Tab bar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupView {
    pub name: String,
    pub icon: Option<CategoryIcon>,
    pub first_row: usize,
    pub active: bool,
    pub focused: bool,
}

/// One grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub glyph: String,
    pub description: String,
    pub image: GlyphImage,
    pub focused: bool,
    pub has_skin_tones: bool,
}

/// One materialized row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub index: usize,
    /// Group header to draw above this row, if it starts a group.
    pub header: Option<String>,
    pub cells: Vec<CellView>,
    /// Text for the empty recents row.
    pub hint: Option<&'static str>,
}

/// Skin-tone chooser snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooserView {
    pub row: usize,
    pub col: usize,
    pub variants: Vec<String>,
    pub selected: usize,
}

/// Render snapshot returned by [`EmojiPicker::view`].
#[derive(Debug, Clone, PartialEq)]
pub struct PickerView {
    pub query: String,
    pub search_placeholder: &'static str,
    pub groups: Vec<GroupView>,
    pub rows: Vec<RowView>,
    pub total_rows: usize,
    pub focus_region: FocusRegion,
    pub cursor: Option<GridCursor>,
    pub chooser: Option<ChooserView>,
    pub placement: PopupPlacement,
    pub render_mode: RenderMode,
    /// Set when nothing matches the query.
    pub empty_state: Option<&'static str>,
}

/// Emoji picker state.
pub struct EmojiPicker {
    dataset: Dataset,
    index: SearchIndex,
    bucketer: RowBucketer,
    recents: RecentsTracker,
    options: PickerOptions,
    render_mode: RenderMode,
    list: Box<dyn VirtualList>,
    visible: bool,
    query: String,
    layout: GridLayout,
    active_group: usize,
    tab_focus: usize,
    focus_region: FocusRegion,
    cursor: Option<GridCursor>,
    chooser: Option<SkinToneChooser>,
}

impl std::fmt::Debug for EmojiPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmojiPicker")
            .field("visible", &self.visible)
            .field("query", &self.query)
            .field("rows", &self.layout.row_count())
            .field("active_group", &self.active_group)
            .field("focus_region", &self.focus_region)
            .field("cursor", &self.cursor)
            .field("chooser", &self.chooser)
            .field("render_mode", &self.render_mode)
            .finish_non_exhaustive()
    }
}

impl EmojiPicker {
    /// Build a picker over `dataset`. Renders natively until
    /// [`with_emoji_support`](Self::with_emoji_support) says otherwise.
    pub fn new(dataset: Dataset, recents: RecentsTracker, options: PickerOptions) -> Self {
        let index = SearchIndex::new(&dataset);
        let visible = options.visible;
        let list = VirtualRows::new()
            .with_overscan(LIST_OVERSCAN)
            .with_viewport_rows(DEFAULT_VIEWPORT_ROWS);
        let mut picker = Self {
            dataset,
            index,
            bucketer: RowBucketer::new(),
            recents,
            options,
            render_mode: RenderMode::Native,
            list: Box::new(list),
            visible,
            query: String::new(),
            layout: GridLayout::default(),
            active_group: 0,
            tab_focus: 0,
            focus_region: FocusRegion::Search,
            cursor: None,
            chooser: None,
        };
        picker.recompute();
        picker
    }

    /// Build a picker from environment configuration.
    ///
    /// Recents load from the configured storage and key; the render mode
    /// override is applied on top of `host_support`.
    pub fn from_config(
        config: &PickerEnvConfig,
        dataset: Dataset,
        options: PickerOptions,
        host_support: EmojiSupport,
    ) -> Self {
        let recents = RecentsTracker::load(config.storage(), config.recents_key.clone());
        Self::new(dataset, recents, options).with_emoji_support(config.emoji_support(host_support))
    }

    /// Decide the render mode from a host capability.
    #[must_use]
    pub fn with_emoji_support(mut self, support: EmojiSupport) -> Self {
        self.render_mode = support.resolve();
        debug!(mode = %self.render_mode, "render mode resolved");
        self
    }

    /// Replace the virtual list driver.
    #[must_use]
    pub fn with_virtual_list(mut self, mut list: Box<dyn VirtualList>) -> Self {
        list.set_row_count(self.layout.row_count());
        self.list = list;
        self
    }

    /// Set the recents group title.
    #[must_use]
    pub fn with_recents_label(mut self, label: impl Into<String>) -> Self {
        self.bucketer = self.bucketer.with_recents_label(label);
        self.recompute();
        self
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Group highlighted in the tab bar.
    #[must_use]
    pub fn active_group(&self) -> usize {
        self.active_group
    }

    /// Tab holding keyboard focus.
    #[must_use]
    pub fn tab_focus(&self) -> usize {
        self.tab_focus
    }

    #[must_use]
    pub fn focus_region(&self) -> FocusRegion {
        self.focus_region
    }

    #[must_use]
    pub fn cursor(&self) -> Option<GridCursor> {
        self.cursor
    }

    #[must_use]
    pub fn chooser(&self) -> Option<&SkinToneChooser> {
        self.chooser.as_ref()
    }

    #[must_use]
    pub fn recents(&self) -> &RecentsTracker {
        &self.recents
    }

    #[must_use]
    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn list(&self) -> &dyn VirtualList {
        self.list.as_ref()
    }

    #[must_use]
    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    /// Apply `msg` and run the resulting command against the host callbacks.
    pub fn dispatch(&mut self, msg: PickerMsg) -> PickerCmd {
        let cmd = self.update(msg);
        match &cmd {
            PickerCmd::None => {}
            PickerCmd::Dismiss => self.options.dismiss(),
            PickerCmd::Pick(glyph) => self.options.pick(glyph),
        }
        cmd
    }

    /// Apply `msg`. Everything but `SetVisible` is ignored while hidden.
    pub fn update(&mut self, msg: PickerMsg) -> PickerCmd {
        if !self.visible && !matches!(msg, PickerMsg::SetVisible(_)) {
            return PickerCmd::None;
        }
        match msg {
            PickerMsg::SetVisible(visible) => {
                self.visible = visible;
                if !visible {
                    self.chooser = None;
                }
                PickerCmd::None
            }
            PickerMsg::SetQuery(query) => {
                self.set_query(query);
                PickerCmd::None
            }
            PickerMsg::Key(key) => self.handle_key(key),
            PickerMsg::SelectCategory(index) => {
                self.select_category(index);
                PickerCmd::None
            }
            PickerMsg::RangeChanged(range) => {
                self.list.scroll_to_row(range.start);
                self.set_active_from_row(range.start);
                PickerCmd::None
            }
            PickerMsg::Scroll(delta) => {
                self.list.scroll_by(delta);
                self.sync_active_group();
                PickerCmd::None
            }
            PickerMsg::Activate { row, col } => self.activate(row, col),
            PickerMsg::ChooseSkinTone(tone) => self.choose_skin_tone(tone),
            PickerMsg::Dismiss => {
                self.chooser = None;
                PickerCmd::Dismiss
            }
        }
    }

    /// Render snapshot; `None` while hidden.
    #[must_use]
    pub fn view(&self) -> Option<PickerView> {
        if !self.visible {
            return None;
        }

        let groups = self
            .layout
            .groups()
            .iter()
            .enumerate()
            .map(|(i, group)| GroupView {
                name: group.name.clone(),
                icon: group.icon,
                first_row: self.layout.group_start(i),
                active: i == self.active_group,
                focused: self.focus_region == FocusRegion::Tabs && i == self.tab_focus,
            })
            .collect::<Vec<_>>();

        let rows = self
            .list
            .render_range()
            .filter_map(|index| {
                let row = self.layout.rows().get(index)?;
                let header = groups
                    .iter()
                    .find(|g| g.first_row == index)
                    .map(|g| g.name.clone());
                let cells = row
                    .records()
                    .iter()
                    .enumerate()
                    .map(|(col, record)| CellView {
                        glyph: record.glyph().to_owned(),
                        description: record.description().to_owned(),
                        image: glyph_image(self.render_mode, &self.dataset, record.glyph()),
                        focused: self.focus_region == FocusRegion::Grid
                            && self.cursor == Some(GridCursor::new(index, col)),
                        has_skin_tones: record.supports_skin_tone(),
                    })
                    .collect();
                Some(RowView {
                    index,
                    header,
                    cells,
                    hint: row.is_placeholder().then_some(RECENTS_HINT),
                })
            })
            .collect();

        let chooser = self.chooser.as_ref().map(|c| ChooserView {
            row: c.row,
            col: c.col,
            variants: c.variants(),
            selected: c.selected.index(),
        });

        Some(PickerView {
            query: self.query.clone(),
            search_placeholder: SEARCH_PLACEHOLDER,
            groups,
            rows,
            total_rows: self.layout.row_count(),
            focus_region: self.focus_region,
            cursor: self.cursor,
            chooser,
            placement: self.options.placement(),
            render_mode: self.render_mode,
            empty_state: self.layout.is_empty().then_some(NO_RESULTS_TEXT),
        })
    }

    fn recompute(&mut self) {
        let _span = debug_span!("picker_recompute", query = %self.query).entered();

        let results = self.index.search(&self.query);
        self.layout = self
            .bucketer
            .bucket(&self.dataset, self.recents.entries(), &results);
        self.list.set_row_count(self.layout.row_count());

        let groups = self.layout.groups().len();
        if self.active_group >= groups {
            self.active_group = groups.saturating_sub(1);
        }
        if self.tab_focus >= groups {
            self.tab_focus = groups.saturating_sub(1);
        }
        if let Some(cursor) = self.cursor
            && !cursor.is_valid(&self.layout)
        {
            self.cursor = None;
        }
        if let Some(chooser) = &self.chooser {
            let same = self
                .layout
                .cell(chooser.row, chooser.col)
                .is_some_and(|r| r.glyph() == chooser.record.glyph());
            if !same {
                self.chooser = None;
            }
        }
        debug!(
            matches = results.len(),
            rows = self.layout.row_count(),
            "picker recomputed"
        );
    }

    fn set_query(&mut self, query: String) {
        if query == self.query {
            return;
        }
        debug!(query = %query, "query changed");
        self.query = query;
        self.cursor = None;
        self.chooser = None;
        self.active_group = 0;
        self.recompute();
        self.list.scroll_to_row(0);
    }

    fn set_active_from_row(&mut self, start_row: usize) {
        let group = active_group(start_row, self.layout.row_counts());
        if group != self.active_group {
            debug!(start_row, group, "active group changed");
        }
        self.active_group = group;
    }

    fn sync_active_group(&mut self) {
        let start = self.list.visible_range().start;
        self.set_active_from_row(start);
    }

    fn select_category(&mut self, index: usize) {
        if index >= self.layout.groups().len() {
            return;
        }
        let row = self.layout.group_start(index);
        self.list.scroll_to_row(row);
        self.active_group = index;
        self.tab_focus = index;
        debug!(group = index, row, "category selected");
    }

    fn handle_key(&mut self, key: PickerKey) -> PickerCmd {
        if let Some(chooser) = self.chooser.as_mut() {
            return match key {
                PickerKey::Escape => {
                    self.chooser = None;
                    PickerCmd::None
                }
                PickerKey::Arrow(direction) => {
                    chooser.selected = chooser.selected.cycle(direction.linear_step());
                    PickerCmd::None
                }
                PickerKey::Enter | PickerKey::Space => {
                    let tone = chooser.selected;
                    self.choose_skin_tone(tone)
                }
                _ => PickerCmd::None,
            };
        }

        match key {
            PickerKey::Escape => return PickerCmd::Dismiss,
            PickerKey::Tab => {
                self.set_focus_region(self.focus_region.cycle(true));
                return PickerCmd::None;
            }
            PickerKey::BackTab => {
                self.set_focus_region(self.focus_region.cycle(false));
                return PickerCmd::None;
            }
            _ => {}
        }

        match self.focus_region {
            FocusRegion::Search => {
                if key == PickerKey::Arrow(Direction::Down) {
                    self.set_focus_region(FocusRegion::Grid);
                }
                PickerCmd::None
            }
            FocusRegion::Tabs => match key {
                PickerKey::Arrow(direction) => {
                    self.tab_focus = wrap_index(
                        self.tab_focus,
                        direction.linear_step(),
                        self.layout.groups().len(),
                    );
                    PickerCmd::None
                }
                PickerKey::Enter | PickerKey::Space => {
                    self.select_category(self.tab_focus);
                    PickerCmd::None
                }
                _ => PickerCmd::None,
            },
            FocusRegion::Grid => self.handle_grid_key(key),
        }
    }

    fn handle_grid_key(&mut self, key: PickerKey) -> PickerCmd {
        match key {
            PickerKey::Arrow(direction) => {
                let Some(mut cursor) = self.cursor else {
                    self.cursor = self.first_visible_cell();
                    return PickerCmd::None;
                };
                if cursor.step(direction, &self.layout, self.bucketer.row_size()) {
                    self.cursor = Some(cursor);
                    self.list.ensure_visible(cursor.row);
                    self.sync_active_group();
                }
                PickerCmd::None
            }
            PickerKey::Enter | PickerKey::Space => match self.cursor {
                Some(cursor) => self.activate(cursor.row, cursor.col),
                None => PickerCmd::None,
            },
            PickerKey::PageUp | PickerKey::PageDown => {
                let span = self.list.visible_range().len();
                let span = i32::try_from(span).unwrap_or(i32::MAX);
                let delta = if key == PickerKey::PageUp { -span } else { span };
                self.list.scroll_by(delta);
                self.sync_active_group();
                PickerCmd::None
            }
            _ => PickerCmd::None,
        }
    }

    fn set_focus_region(&mut self, region: FocusRegion) {
        self.focus_region = region;
        match region {
            FocusRegion::Grid if self.cursor.is_none() => {
                self.cursor = self.first_visible_cell();
            }
            FocusRegion::Tabs => self.tab_focus = self.active_group,
            _ => {}
        }
    }

    fn first_visible_cell(&self) -> Option<GridCursor> {
        GridCursor::first_from(&self.layout, self.list.visible_range().start)
            .or_else(|| GridCursor::first_from(&self.layout, 0))
    }

    fn activate(&mut self, row: usize, col: usize) -> PickerCmd {
        let Some(record) = self.layout.cell(row, col).cloned() else {
            return PickerCmd::None;
        };
        self.cursor = Some(GridCursor::new(row, col));

        if !record.supports_skin_tone() {
            let glyph = record.glyph().to_owned();
            return self.pick(record, glyph);
        }

        let toggled_off = self
            .chooser
            .as_ref()
            .is_some_and(|c| c.row == row && c.col == col);
        self.chooser = if toggled_off {
            None
        } else {
            Some(SkinToneChooser {
                row,
                col,
                record,
                selected: SkinTone::None,
            })
        };
        PickerCmd::None
    }

    fn choose_skin_tone(&mut self, tone: SkinTone) -> PickerCmd {
        let Some(chooser) = self.chooser.take() else {
            return PickerCmd::None;
        };
        let glyph = skin_tone::apply(chooser.record.glyph(), tone);
        self.pick(chooser.record, glyph)
    }

    fn pick(&mut self, record: EmojiRecord, glyph: String) -> PickerCmd {
        debug!(glyph = %glyph, base = record.glyph(), "emoji picked");
        let kind = self
            .cursor
            .and_then(|c| self.layout.group_of_row(c.row))
            .map(|g| self.layout.groups()[g].kind);
        self.chooser = None;
        self.recents.mark_recent(record.clone());
        self.recompute();

        // Rows shift when the recents group changes shape; follow the record.
        if self.cursor.is_some() {
            self.cursor = kind
                .and_then(|kind| self.find_in_group(kind, record.glyph()))
                .or_else(|| self.find_in_group_any(record.glyph()));
            if let Some(cursor) = self.cursor
                && self.focus_region == FocusRegion::Grid
            {
                self.list.ensure_visible(cursor.row);
                self.sync_active_group();
            }
        }
        PickerCmd::Pick(glyph)
    }

    fn find_in_group(&self, kind: GroupKind, glyph: &str) -> Option<GridCursor> {
        let group = self.layout.position_of(kind)?;
        let start = self.layout.group_start(group);
        let end = start + self.layout.groups()[group].row_count;
        self.find_in_rows(start..end, glyph)
    }

    fn find_in_group_any(&self, glyph: &str) -> Option<GridCursor> {
        self.find_in_rows(0..self.layout.row_count(), glyph)
    }

    fn find_in_rows(&self, mut rows: Range<usize>, glyph: &str) -> Option<GridCursor> {
        rows.find_map(|row| {
            self.layout.rows()[row]
                .records()
                .iter()
                .position(|r| r.glyph() == glyph)
                .map(|col| GridCursor::new(row, col))
        })
    }
}
