//! Deterministic lab report parser
//!
//! This module provides the core extraction pipeline that turns raw per-page
//! report text into a deduplicated list of lab-test markers. The design is
//! pure pattern matching over static tables so behavior is fully
//! deterministic and auditable.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Extraction orchestration across pages and documents
//! - [`classifier`] - Per-line classification (noise / name candidate / value)
//! - [`pairing`] - Greedy name–value pairing with bounded lookahead
//! - [`units`] - Canonical unit table lookup and name normalization
//! - [`dedup`] - Order-preserving cross-page deduplication
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use labreport_extractor::app::services::report_parser::ReportParser;
//!
//! # fn example() -> labreport_extractor::Result<()> {
//! let parser = ReportParser::new();
//! let pages = vec!["HEMOGLOBIN\n13.5".to_string()];
//! let result = parser.extract(&pages)?;
//!
//! println!("Extracted {} markers from {} pages",
//!          result.markers.len(),
//!          result.stats.pages_processed);
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod dedup;
pub mod pairing;
pub mod parser;
pub mod stats;
pub mod units;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use classifier::LineClassifier;
pub use parser::ReportParser;
pub use stats::{ParseResult, ParseStats};
pub use units::UnitTable;
