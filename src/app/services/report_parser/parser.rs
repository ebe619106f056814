//! Core report parser implementation
//!
//! This module provides the main extraction orchestration: splitting page
//! text into lines, running classification and pairing per page, resolving
//! units, and deduplicating across the whole document.

use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use super::classifier::LineClassifier;
use super::dedup::deduplicate_markers;
use super::pairing::{clean_test_name, pair_lines};
use super::stats::{ParseResult, ParseStats};
use super::units::UnitTable;
use crate::app::models::Marker;
use crate::app::services::pdf_reader::PdfTextReader;
use crate::Result;

/// Deterministic lab report parser
///
/// This parser focuses on essential functionality:
/// - Pure pattern matching with no statistical or learned model
/// - A static canonical unit table as the only source of units
/// - Greedy single-pass name–value pairing with a hard lookahead bound
/// - Order-preserving deduplication across pages
///
/// The parser is read-only after construction and can be shared across
/// concurrent extraction calls; each call owns its own result accumulation.
#[derive(Debug)]
pub struct ReportParser {
    classifier: LineClassifier,
    units: Arc<UnitTable>,
}

impl ReportParser {
    /// Create a parser over the built-in canonical unit table
    pub fn new() -> Self {
        Self::with_units(Arc::new(UnitTable::new()))
    }

    /// Create a parser with an injected unit table
    pub fn with_units(units: Arc<UnitTable>) -> Self {
        Self {
            classifier: LineClassifier::new(),
            units,
        }
    }

    /// Extract deduplicated markers from per-page document text.
    ///
    /// Pages are processed in order and the results merged; duplicates
    /// collapse to their first occurrence. A document that yields no markers
    /// is a success with an empty list, not an error.
    pub fn extract(&self, pages: &[String]) -> Result<ParseResult> {
        let mut stats = ParseStats::new();
        let mut markers = Vec::new();

        for page_text in pages {
            markers.extend(self.parse_page(page_text, &mut stats));
            stats.pages_processed += 1;
        }

        let markers = deduplicate_markers(markers, &mut stats);

        info!(
            "Extracted {} markers from {} pages ({} duplicates removed)",
            markers.len(),
            stats.pages_processed,
            stats.duplicates_removed
        );

        Ok(ParseResult { markers, stats })
    }

    /// Read a PDF file and extract markers from its page text
    pub fn extract_file(&self, path: &Path) -> Result<ParseResult> {
        info!("Extracting markers from {}", path.display());

        let pages = PdfTextReader::new().read_file(path)?;
        self.extract(&pages)
    }

    /// Read an in-memory PDF document and extract markers from its page text
    pub fn extract_bytes(&self, data: &[u8]) -> Result<ParseResult> {
        let pages = PdfTextReader::new().read_bytes(data)?;
        self.extract(&pages)
    }

    /// Parse one page of text into markers, in page order.
    fn parse_page(&self, text: &str, stats: &mut ParseStats) -> Vec<Marker> {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        stats.lines_scanned += lines.len();

        let pairs = pair_lines(&self.classifier, &lines, stats);

        pairs
            .into_iter()
            .map(|pair| {
                let unit = self.units.resolve(&pair.name);
                let marker = Marker::new(clean_test_name(&pair.name), pair.raw_result, unit);
                debug!(
                    "Marker '{}' = '{}' [{}]",
                    marker.test_name, marker.raw_result, marker.unit
                );
                marker
            })
            .collect()
    }
}

impl Default for ReportParser {
    fn default() -> Self {
        Self::new()
    }
}
