#![forbid(unsafe_code)]

//! Approximate substring scorer.
//!
//! The score of a pattern against a text is
//! `errors / pattern_len + match_start / distance`, where `errors` is the
//! minimum edit distance between the pattern and any substring of the text
//! and `match_start` is where that substring begins. Lower is better; `0.0`
//! is an exact match at the start of the text. A text matches when the score
//! is at most the threshold.
//!
//! # Invariants
//!
//! 1. Matching is case-insensitive (Unicode lowercase on both sides).
//! 2. An empty pattern matches everything with score `0.0`.
//! 3. Patterns longer than [`MAX_PATTERN_CHARS`] are scored chunk by chunk;
//!    the best chunk decides.
//!
//! # Complexity
//!
//! | Operation | Time |
//! |-----------|------|
//! | score | O(m * n) for pattern length m, text length n |

use std::ops::Range;

/// Fixed match threshold used by the picker search.
pub const DEFAULT_THRESHOLD: f64 = 0.24;

/// Characters of text over which a match start costs one full error.
pub const DEFAULT_DISTANCE: f64 = 100.0;

/// Longest pattern scored in one pass.
pub const MAX_PATTERN_CHARS: usize = 32;

/// Result of scoring one pattern against one text.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    /// Combined score; lower is better.
    pub score: f64,
    /// Edit errors of the best alignment.
    pub errors: usize,
    /// Matched character range in the text.
    pub range: Range<usize>,
}

/// Approximate substring scorer with a fixed threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyScorer {
    threshold: f64,
    distance: f64,
}

impl Default for FuzzyScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyScorer {
    /// Scorer with the picker's fixed threshold.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            distance: DEFAULT_DISTANCE,
        }
    }

    /// Override the threshold (clamped to `0.0..=1.0`).
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// The match threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Lowercase a string into a char buffer for repeated scoring.
    #[must_use]
    pub fn fold(text: &str) -> Vec<char> {
        text.chars().flat_map(char::to_lowercase).collect()
    }

    /// Score `pattern` against `text`.
    #[must_use]
    pub fn score(&self, pattern: &str, text: &str) -> ScoreResult {
        self.score_folded(&Self::fold(pattern), &Self::fold(text))
    }

    /// Whether `pattern` matches `text` under the threshold.
    #[must_use]
    pub fn is_match(&self, pattern: &str, text: &str) -> bool {
        self.score(pattern, text).score <= self.threshold
    }

    /// Whether an already folded pattern matches an already folded text.
    #[must_use]
    pub fn is_match_folded(&self, pattern: &[char], text: &[char]) -> bool {
        self.score_folded(pattern, text).score <= self.threshold
    }

    /// Score already folded inputs (see [`FuzzyScorer::fold`]).
    #[must_use]
    pub fn score_folded(&self, pattern: &[char], text: &[char]) -> ScoreResult {
        if pattern.is_empty() {
            return ScoreResult {
                score: 0.0,
                errors: 0,
                range: 0..0,
            };
        }
        pattern
            .chunks(MAX_PATTERN_CHARS)
            .map(|chunk| self.score_chunk(chunk, text))
            .min_by(|a, b| a.score.total_cmp(&b.score))
            .unwrap_or(ScoreResult {
                score: f64::INFINITY,
                errors: pattern.len(),
                range: 0..0,
            })
    }

    /// Sellers' approximate substring search over one chunk, tracking where
    /// each alignment starts so the position penalty can be applied.
    fn score_chunk(&self, pattern: &[char], text: &[char]) -> ScoreResult {
        let m = pattern.len();
        let n = text.len();

        // Row 0: an alignment may start anywhere at no cost.
        let mut prev_cost: Vec<usize> = vec![0; n + 1];
        let mut prev_start: Vec<usize> = (0..=n).collect();
        let mut cur_cost: Vec<usize> = vec![0; n + 1];
        let mut cur_start: Vec<usize> = vec![0; n + 1];

        for (i, &pc) in pattern.iter().enumerate() {
            cur_cost[0] = i + 1;
            cur_start[0] = 0;
            for j in 1..=n {
                let diag = prev_cost[j - 1] + usize::from(pc != text[j - 1]);
                let mut best = (diag, prev_start[j - 1]);

                let up = (prev_cost[j] + 1, prev_start[j]);
                if up.0 < best.0 || (up.0 == best.0 && up.1 < best.1) {
                    best = up;
                }
                let left = (cur_cost[j - 1] + 1, cur_start[j - 1]);
                if left.0 < best.0 || (left.0 == best.0 && left.1 < best.1) {
                    best = left;
                }

                cur_cost[j] = best.0;
                cur_start[j] = best.1;
            }
            std::mem::swap(&mut prev_cost, &mut cur_cost);
            std::mem::swap(&mut prev_start, &mut cur_start);
        }

        let mut best = ScoreResult {
            score: f64::INFINITY,
            errors: m,
            range: 0..0,
        };
        for end in 0..=n {
            let errors = prev_cost[end];
            let start = prev_start[end];
            let score = errors as f64 / m as f64 + start as f64 / self.distance;
            if score < best.score {
                best = ScoreResult {
                    score,
                    errors,
                    range: start..end,
                };
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_prefix_scores_zero() {
        let s = FuzzyScorer::new();
        let r = s.score("thumbs", "thumbs up");
        assert_eq!(r.errors, 0);
        assert_eq!(r.score, 0.0);
        assert_eq!(r.range, 0..6);
    }

    #[test]
    fn case_insensitive() {
        let s = FuzzyScorer::new();
        assert!(s.is_match("PIZZA", "pizza"));
        assert!(s.is_match("liberty", "Statue of Liberty"));
    }

    #[test]
    fn position_penalty_applies() {
        let s = FuzzyScorer::new();
        let r = s.score("up", "thumbs up");
        assert_eq!(r.errors, 0);
        assert!((r.score - 0.07).abs() < 1e-9);
    }

    #[test]
    fn far_matches_exceed_threshold() {
        let s = FuzzyScorer::new();
        let text = format!("{}needle", "x".repeat(30));
        assert!(!s.is_match("needle", &text));
        let near = format!("{}needle", "x".repeat(10));
        assert!(s.is_match("needle", &near));
    }

    #[test]
    fn tolerates_one_typo_in_long_pattern() {
        let s = FuzzyScorer::new();
        // 1 error / 9 chars = 0.111
        assert!(s.is_match("watermlon", "watermelon"));
        // 1 error / 3 chars = 0.333
        assert!(!s.is_match("cxt", "cat face"));
    }

    #[test]
    fn empty_pattern_matches() {
        let s = FuzzyScorer::new();
        assert!(s.is_match("", "anything"));
        assert!(s.is_match("", ""));
    }

    #[test]
    fn no_match_against_empty_text() {
        let s = FuzzyScorer::new();
        let r = s.score("abc", "");
        assert_eq!(r.errors, 3);
        assert!(!s.is_match("abc", ""));
    }

    #[test]
    fn long_patterns_use_best_chunk() {
        let s = FuzzyScorer::new();
        let pattern = format!("{}{}", "a".repeat(MAX_PATTERN_CHARS), "zzz");
        let text = "a".repeat(MAX_PATTERN_CHARS);
        assert!(s.is_match(&pattern, &text));
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(FuzzyScorer::new().with_threshold(4.0).threshold(), 1.0);
        assert_eq!(FuzzyScorer::new().with_threshold(-1.0).threshold(), 0.0);
    }
}
