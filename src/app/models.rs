//! Data models for lab report extraction
//!
//! This module contains the core data structures for representing extracted
//! lab-test markers and the validated inputs accepted at the service
//! boundary.

use crate::constants::REPORT_DATE_FORMAT;
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Marker Record
// =============================================================================

/// A single extracted lab-test marker.
///
/// The raw result is kept as the exact digit/dot string found in the
/// document; numeric conversion is deliberately left to the caller so the
/// core stays a pure, auditable text transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// Cleaned test name as printed in the report (whitespace collapsed,
    /// trailing colons removed)
    pub test_name: String,

    /// Result value exactly as matched on the page, not yet parsed
    pub raw_result: String,

    /// Unit resolved from the canonical table; empty when no entry matched
    pub unit: String,
}

impl Marker {
    /// Create a new marker record
    pub fn new(
        test_name: impl Into<String>,
        raw_result: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            test_name: test_name.into(),
            raw_result: raw_result.into(),
            unit: unit.into(),
        }
    }

    /// Uniqueness key for cross-document deduplication: two markers with the
    /// same lowercased name and identical raw result collapse to one.
    pub fn dedup_key(&self) -> (String, String) {
        (self.test_name.to_lowercase(), self.raw_result.clone())
    }

    /// Parse the raw result to a finite numeric value.
    ///
    /// Returns `None` for strings that pass the loose result-value pattern
    /// but are not usable numbers: lone or repeated dots, multi-dot
    /// sequences, and digit runs long enough to overflow to infinity.
    pub fn numeric_value(&self) -> Option<f64> {
        self.raw_result
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }

    /// Convert to the caller-facing numeric record, or `None` when the raw
    /// result does not convert
    pub fn to_numeric(&self) -> Option<NumericMarker> {
        self.numeric_value().map(|value| NumericMarker {
            name: self.test_name.clone(),
            value,
            unit: self.unit.clone(),
        })
    }

    /// Validate the invariants every emitted marker must hold
    pub fn validate(&self) -> Result<()> {
        if self.test_name.trim().is_empty() {
            return Err(Error::configuration(
                "Marker test name cannot be empty".to_string(),
            ));
        }

        if self.raw_result.is_empty()
            || !self
                .raw_result
                .chars()
                .all(|c| c.is_ascii_digit() || c == '.')
        {
            return Err(Error::configuration(format!(
                "Marker raw result '{}' does not match the result-value pattern",
                self.raw_result
            )));
        }

        Ok(())
    }
}

// =============================================================================
// Numeric Marker
// =============================================================================

/// Caller-side converted marker used in response payloads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericMarker {
    /// Test name as extracted
    pub name: String,

    /// Parsed finite numeric result
    pub value: f64,

    /// Unit from the canonical table; may be empty
    pub unit: String,
}

// =============================================================================
// Report Date
// =============================================================================

/// A report date accepted only in exactly `YYYY-MM-DD` form.
///
/// Validated at the service boundary before the core runs; the wrapped value
/// is a real calendar date, not just a shape-checked string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportDate(NaiveDate);

impl ReportDate {
    /// Parse a date string, requiring the exact zero-padded ten-character form
    pub fn parse(value: &str) -> Result<Self> {
        // chrono alone would accept unpadded fields like "2024-1-31"
        if value.len() != 10 {
            return Err(Error::invalid_report_date(value, None));
        }

        let date = NaiveDate::parse_from_str(value, REPORT_DATE_FORMAT)
            .map_err(|e| Error::invalid_report_date(value, Some(e)))?;

        Ok(Self(date))
    }

    /// The underlying calendar date
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for ReportDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ReportDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(REPORT_DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod marker_tests {
        use super::*;

        #[test]
        fn test_marker_creation_and_validation() {
            let marker = Marker::new("HEMOGLOBIN", "13.5", "gm/dl");
            assert!(marker.validate().is_ok());
            assert_eq!(marker.test_name, "HEMOGLOBIN");
            assert_eq!(marker.raw_result, "13.5");
        }

        #[test]
        fn test_marker_validation_rejects_empty_name() {
            let marker = Marker::new("", "13.5", "");
            assert!(marker.validate().is_err());

            let marker = Marker::new("   ", "13.5", "");
            assert!(marker.validate().is_err());
        }

        #[test]
        fn test_marker_validation_rejects_non_numeric_result() {
            assert!(Marker::new("WBC", "8500 cells", "").validate().is_err());
            assert!(Marker::new("WBC", "", "").validate().is_err());
            // A line of dots passes the pattern; that looseness is the
            // caller's problem, not a validation failure.
            assert!(Marker::new("WBC", "...", "").validate().is_ok());
        }

        #[test]
        fn test_dedup_key_lowercases_name_only() {
            let marker = Marker::new("Hemoglobin", "13.5", "gm/dl");
            assert_eq!(
                marker.dedup_key(),
                ("hemoglobin".to_string(), "13.5".to_string())
            );
        }

        #[test]
        fn test_numeric_value_conversion() {
            assert_eq!(Marker::new("HB", "13.5", "").numeric_value(), Some(13.5));
            assert_eq!(Marker::new("WBC", "8500", "").numeric_value(), Some(8500.0));

            // Pattern-valid but unparseable results convert to None
            assert_eq!(Marker::new("X", ".", "").numeric_value(), None);
            assert_eq!(Marker::new("X", "...", "").numeric_value(), None);
            assert_eq!(Marker::new("X", "1.2.3", "").numeric_value(), None);

            // A digit run that overflows f64 parses to infinity; non-finite
            // values are dropped
            let huge = "9".repeat(400);
            assert_eq!(Marker::new("X", huge, "").numeric_value(), None);
        }

        #[test]
        fn test_to_numeric() {
            let numeric = Marker::new("GLUCOSE", "98", "mg/dl").to_numeric().unwrap();
            assert_eq!(numeric.name, "GLUCOSE");
            assert_eq!(numeric.value, 98.0);
            assert_eq!(numeric.unit, "mg/dl");

            assert!(Marker::new("GLUCOSE", "...", "mg/dl").to_numeric().is_none());
        }
    }

    mod report_date_tests {
        use super::*;

        #[test]
        fn test_valid_dates() {
            let date = ReportDate::parse("2024-01-31").unwrap();
            assert_eq!(date.to_string(), "2024-01-31");
            assert_eq!(
                date.date(),
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
            );

            assert!(ReportDate::parse("1999-12-01").is_ok());
            assert!("2024-02-29".parse::<ReportDate>().is_ok()); // leap day
        }

        #[test]
        fn test_rejects_wrong_shapes() {
            // Unpadded fields parse under chrono but are not the exact form
            assert!(ReportDate::parse("2024-1-31").is_err());
            assert!(ReportDate::parse("31-01-2024").is_err());
            assert!(ReportDate::parse("2024/01/31").is_err());
            assert!(ReportDate::parse("2024-01-31T00:00:00").is_err());
            assert!(ReportDate::parse("").is_err());
        }

        #[test]
        fn test_rejects_impossible_dates() {
            assert!(ReportDate::parse("2024-13-01").is_err());
            assert!(ReportDate::parse("2024-02-30").is_err());
            assert!(ReportDate::parse("2023-02-29").is_err()); // not a leap year
        }
    }
}
