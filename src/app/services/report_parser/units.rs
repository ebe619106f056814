//! Canonical unit resolution for extracted test names
//!
//! Units are never taken from the document: on-page unit strings are
//! inconsistent or absent in source reports, so a hand-curated table keyed by
//! normalized test-name phrase is the single source of truth. The table is
//! read-only after construction and safe to share across concurrent
//! extraction calls.

use crate::constants::UNIT_TABLE;
use std::collections::HashMap;

/// Normalize a raw test name for table lookup: lowercase, strip '(' ')' ':'
/// entirely, collapse whitespace runs to single spaces, trim.
pub fn normalize_test_name(name: &str) -> String {
    let stripped: String = name
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | ':'))
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Static test-name → unit mapping with order-sensitive partial matching
#[derive(Debug)]
pub struct UnitTable {
    entries: &'static [(&'static str, &'static str)],
    exact: HashMap<&'static str, &'static str>,
}

impl UnitTable {
    /// Create the table from the built-in canonical entries
    pub fn new() -> Self {
        Self::with_entries(UNIT_TABLE)
    }

    /// Create a table over a specific entry slice. Entries must already be
    /// normalized; declaration order drives partial-match precedence.
    pub fn with_entries(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            entries,
            exact: entries.iter().copied().collect(),
        }
    }

    /// Resolve the unit for a raw test name.
    ///
    /// Resolution order:
    /// 1. Exact match on the normalized name.
    /// 2. First entry, in table order, whose key contains the normalized
    ///    name or is contained by it (symmetric containment).
    /// 3. Empty string.
    pub fn resolve(&self, test_name: &str) -> &'static str {
        let normalized = normalize_test_name(test_name);

        if let Some(unit) = self.exact.get(normalized.as_str()).copied() {
            return unit;
        }

        for (key, unit) in self.entries.iter().copied() {
            if normalized.contains(key) || key.contains(normalized.as_str()) {
                return unit;
            }
        }

        ""
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::new()
    }
}
