#![forbid(unsafe_code)]

//! Fuzzy search over emoji descriptions and shortcut codes.
//!
//! # Example
//!
//! ```
//! use emojipick_core::Dataset;
//! use emojipick_search::SearchIndex;
//!
//! let dataset = Dataset::builtin();
//! let index = SearchIndex::new(&dataset);
//!
//! let hits = index.search("pizza");
//! assert_eq!(hits.glyphs(), &["🍕"]);
//!
//! // A blank query is "no search", not "nothing found".
//! assert!(!index.search("").is_filtered());
//! ```

pub mod index;
pub mod scorer;

pub use index::{SearchIndex, SearchResultSet};
pub use scorer::{DEFAULT_THRESHOLD, FuzzyScorer, ScoreResult};
