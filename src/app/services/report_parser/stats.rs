//! Parsing statistics and result structures for report extraction
//!
//! This module provides types for tracking extraction outcomes and
//! organizing parsed markers for downstream processing.

use crate::app::models::Marker;

/// Extraction result with markers and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Deduplicated markers in first-seen page order
    pub markers: Vec<Marker>,

    /// Basic extraction statistics
    pub stats: ParseStats,
}

/// Simple extraction statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of pages processed
    pub pages_processed: usize,

    /// Total number of lines scanned across all pages
    pub lines_scanned: usize,

    /// Number of test-name candidate lines encountered
    pub name_candidates: usize,

    /// Number of candidates successfully paired with a value
    pub markers_paired: usize,

    /// Number of candidates discarded for lack of a value in the window
    pub candidates_unpaired: usize,

    /// Number of duplicate markers dropped during deduplication
    pub duplicates_removed: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            pages_processed: 0,
            lines_scanned: 0,
            name_candidates: 0,
            markers_paired: 0,
            candidates_unpaired: 0,
            duplicates_removed: 0,
        }
    }

    /// Fraction of name candidates that found a value, as a percentage
    pub fn pairing_rate(&self) -> f64 {
        if self.name_candidates == 0 {
            0.0
        } else {
            (self.markers_paired as f64 / self.name_candidates as f64) * 100.0
        }
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
