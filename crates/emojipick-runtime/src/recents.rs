#![forbid(unsafe_code)]

//! Most-recently-used emoji list with best-effort persistence.
//!
//! # Invariants
//!
//! 1. At most [`MAX_RECENTS`] entries, most recent first.
//! 2. No two entries share a glyph.
//! 3. [`RecentsTracker::mark_recent`] is the only mutator.
//!
//! # Failure Modes
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | storage fails the availability probe | in-memory only, `warn!` |
//! | persisted value is not a JSON record list | starts empty, `warn!` |
//! | a later write fails | in-memory only from then on, `warn!` |

use emojipick_core::EmojiRecord;
use tracing::{debug, warn};

use crate::storage::{MemoryStorage, Storage, probe_storage};

/// Maximum number of remembered emoji.
pub const MAX_RECENTS: usize = 32;

/// Default storage key.
pub const DEFAULT_RECENTS_KEY: &str = "emojipick__recents";

/// Recently picked emoji.
pub struct RecentsTracker {
    entries: Vec<EmojiRecord>,
    key: String,
    storage: Option<Box<dyn Storage>>,
}

impl std::fmt::Debug for RecentsTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecentsTracker")
            .field("entries", &self.entries.len())
            .field("key", &self.key)
            .field("persistent", &self.storage.is_some())
            .finish()
    }
}

impl Default for RecentsTracker {
    fn default() -> Self {
        Self::load(Box::new(MemoryStorage::new()), DEFAULT_RECENTS_KEY)
    }
}

impl RecentsTracker {
    /// Tracker that never persists.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            entries: Vec::new(),
            key: DEFAULT_RECENTS_KEY.to_owned(),
            storage: None,
        }
    }

    /// Load the list stored under `key`.
    ///
    /// Never fails: an unusable backend leaves the tracker in-memory only and
    /// unreadable data yields an empty list.
    pub fn load(mut storage: Box<dyn Storage>, key: impl Into<String>) -> Self {
        let key = key.into();
        if !probe_storage(storage.as_mut()) {
            warn!(key = %key, "recents storage unavailable; keeping recents in memory");
            return Self {
                entries: Vec::new(),
                key,
                storage: None,
            };
        }

        let entries = match storage.read(&key) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<EmojiRecord>>(&json) {
                Ok(mut entries) => {
                    dedup_by_glyph(&mut entries);
                    entries.truncate(MAX_RECENTS);
                    entries
                }
                Err(err) => {
                    warn!(key = %key, error = %err, "discarding malformed recents");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(key = %key, error = %err, "failed to read recents");
                Vec::new()
            }
        };
        debug!(key = %key, count = entries.len(), "recents loaded");

        Self {
            entries,
            key,
            storage: Some(storage),
        }
    }

    /// Entries, most recent first.
    #[must_use]
    pub fn entries(&self) -> &[EmojiRecord] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been picked yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether changes are still written to storage.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }

    /// Move `record` to the front, dropping any older entry with the same
    /// glyph and anything past [`MAX_RECENTS`], then persist.
    pub fn mark_recent(&mut self, record: EmojiRecord) {
        self.entries.retain(|e| e.glyph() != record.glyph());
        self.entries.insert(0, record);
        self.entries.truncate(MAX_RECENTS);
        self.persist();
    }

    fn persist(&mut self) {
        let Some(storage) = self.storage.as_mut() else {
            return;
        };
        let result = serde_json::to_string(&self.entries)
            .map_err(|err| err.to_string())
            .and_then(|json| storage.write(&self.key, &json).map_err(|err| err.to_string()));
        if let Err(err) = result {
            warn!(key = %self.key, error = %err, "failed to persist recents; keeping them in memory");
            self.storage = None;
        }
    }
}

fn dedup_by_glyph(entries: &mut Vec<EmojiRecord>) {
    let mut seen = std::collections::HashSet::new();
    entries.retain(|e| seen.insert(e.glyph().to_owned()));
}
