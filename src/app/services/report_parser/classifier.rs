//! Per-line classification for lab report text
//!
//! Every line of page text falls into one of three classes: noise to skip,
//! a test-name candidate, or a numeric result value. Classification is a
//! pure function of line content and is computed on demand, never stored.

use crate::constants::{
    NAME_MIN_CHARS, NAME_UPPERCASE_RATIO, RESULT_VALUE_PATTERN, SEPARATOR_CHARS, SKIP_KEYWORDS,
    WINDOW_METADATA_KEYWORDS,
};
use regex::Regex;

/// Line classifier backed by the static skip-keyword set
///
/// Holds the lowercased keyword set and the compiled result-value pattern so
/// per-line checks allocate as little as possible. Construct once and share;
/// the classifier is read-only after creation.
#[derive(Debug)]
pub struct LineClassifier {
    skip_keywords: Vec<String>,
    value_pattern: Regex,
}

impl LineClassifier {
    /// Create a classifier from the built-in skip-keyword set
    pub fn new() -> Self {
        Self {
            skip_keywords: SKIP_KEYWORDS
                .iter()
                .map(|keyword| keyword.to_lowercase())
                .collect(),
            value_pattern: Regex::new(RESULT_VALUE_PATTERN)
                .expect("result value pattern is a valid regex"),
        }
    }

    /// Check whether a trimmed line is header/footer/metadata noise.
    ///
    /// True when the line contains any skip keyword as a case-insensitive
    /// substring, is at most one character long, or consists solely of
    /// separator characters ('-', ':', '/').
    pub fn should_skip(&self, line: &str) -> bool {
        let lowered = line.to_lowercase();
        if self
            .skip_keywords
            .iter()
            .any(|keyword| lowered.contains(keyword))
        {
            return true;
        }

        if line.chars().count() <= 1 {
            return true;
        }

        line.chars().all(|c| SEPARATOR_CHARS.contains(&c))
    }

    /// Check whether a trimmed line is a potential test name.
    ///
    /// Report headings like "HEMOGLOBIN (Hb)" are mostly uppercase while
    /// narrative sentences are not, so the test requires: length >= 3, an
    /// uppercase first character, at least one letter, and an uppercase
    /// fraction of at least half among the letters. A line with no letters
    /// at all is rejected outright.
    pub fn is_name_candidate(&self, line: &str) -> bool {
        if line.chars().count() < NAME_MIN_CHARS {
            return false;
        }

        if !line.chars().next().is_some_and(char::is_uppercase) {
            return false;
        }

        let letters: Vec<char> = line.chars().filter(|c| c.is_alphabetic()).collect();
        if letters.is_empty() {
            return false;
        }

        let uppercase = letters.iter().filter(|c| c.is_uppercase()).count();
        uppercase as f64 / letters.len() as f64 >= NAME_UPPERCASE_RATIO
    }

    /// Check whether the entire trimmed line is a result value: one or more
    /// digits or decimal points. A line of only dots also matches; that
    /// looseness is preserved deliberately and resolved by the caller's
    /// numeric conversion.
    pub fn is_result_value(&self, line: &str) -> bool {
        self.value_pattern.is_match(line)
    }

    /// Check whether a line inside the lookahead window is interleaved
    /// metadata ("Method:", "Automated", "Calculated") rather than a value.
    /// Matching is case-sensitive, as the source layout prints these
    /// verbatim.
    pub fn is_window_metadata(line: &str) -> bool {
        WINDOW_METADATA_KEYWORDS
            .iter()
            .any(|keyword| line.contains(keyword))
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}
