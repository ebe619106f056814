//! Greedy name–value pairing over classified page lines
//!
//! A single forward pass walks the page: each test-name candidate opens a
//! bounded lookahead window, and the first qualifying value line inside the
//! window is consumed as that name's result. Once a value is consumed it
//! cannot be reused for an earlier name, and a name without a value in its
//! window never retries. There is no backtracking.

use super::classifier::LineClassifier;
use super::stats::ParseStats;
use crate::constants::VALUE_LOOKAHEAD_LINES;
use tracing::trace;

/// A test name paired with its raw result line, before unit resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairedResult {
    /// Name line exactly as found (trimmed, not yet cleaned)
    pub name: String,

    /// Result line exactly as found
    pub raw_result: String,
}

/// Pair test-name candidates with result values across one page's lines.
///
/// `lines` must already be trimmed. The scan is an explicit index walk:
/// when a value is found at index `j`, the outer position jumps to `j` so
/// the value line is not reconsidered as a candidate. Blank and interleaved
/// metadata lines inside the window are skipped but still consume window
/// slots, keeping the bound a hard one.
pub(super) fn pair_lines(
    classifier: &LineClassifier,
    lines: &[&str],
    stats: &mut ParseStats,
) -> Vec<PairedResult> {
    let mut pairs = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if line.is_empty() || classifier.should_skip(line) {
            i += 1;
            continue;
        }

        if classifier.is_name_candidate(line) {
            stats.name_candidates += 1;

            let window_end = usize::min(i + 1 + VALUE_LOOKAHEAD_LINES, lines.len());
            let mut found = None;

            #[allow(clippy::needless_range_loop)]
            for j in (i + 1)..window_end {
                let next = lines[j];

                if next.is_empty() || LineClassifier::is_window_metadata(next) {
                    continue;
                }

                if classifier.is_result_value(next) {
                    found = Some((j, next));
                    break;
                }
            }

            match found {
                Some((j, value)) => {
                    trace!("Paired '{}' with '{}'", line, value);
                    pairs.push(PairedResult {
                        name: line.to_string(),
                        raw_result: value.to_string(),
                    });
                    stats.markers_paired += 1;
                    // Jump past the consumed value line
                    i = j;
                }
                None => {
                    trace!("No value within window for candidate '{}'", line);
                    stats.candidates_unpaired += 1;
                }
            }
        }

        i += 1;
    }

    pairs
}

/// Clean a paired test name for emission: collapse whitespace runs to single
/// spaces, drop trailing colons, trim.
pub(super) fn clean_test_name(name: &str) -> String {
    let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_end_matches(':').trim().to_string()
}
