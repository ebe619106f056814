//! Order-preserving marker deduplication
//!
//! Multi-page reports repeat headers and summary blocks, so the same marker
//! is often extracted more than once. Deduplication runs once over the
//! page-ordered concatenation of all extracted markers: the first occurrence
//! of a key wins and later duplicates are dropped silently.

use super::stats::ParseStats;
use crate::app::models::Marker;
use std::collections::HashSet;
use tracing::debug;

/// Deduplicate markers by (lowercased test name, raw result).
///
/// Insertion order of first occurrences is preserved in the output.
pub fn deduplicate_markers(markers: Vec<Marker>, stats: &mut ParseStats) -> Vec<Marker> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut unique = Vec::with_capacity(markers.len());

    for marker in markers {
        if seen.insert(marker.dedup_key()) {
            unique.push(marker);
        } else {
            stats.duplicates_removed += 1;
            debug!(
                "Dropped duplicate marker '{}' = '{}'",
                marker.test_name, marker.raw_result
            );
        }
    }

    unique
}
