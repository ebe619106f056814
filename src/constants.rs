//! Application constants for the lab report extractor
//!
//! This module contains the static pattern tables, classification thresholds,
//! and default values used throughout the extraction pipeline. The unit table
//! and skip-keyword set are the single source of truth for the parser and are
//! never mutated after startup.

// =============================================================================
// Line Classification Constants
// =============================================================================

/// Substrings identifying header/footer/metadata lines to discard.
///
/// A line containing any of these as a case-insensitive substring is never
/// considered a test-name candidate. The list is hand-curated from real lab
/// report layouts and includes site-specific boilerplate.
pub const SKIP_KEYWORDS: &[&str] = &[
    "TEST PARAMETER",
    "REFERENCE RANGE",
    "RESULT",
    "UNIT",
    "SAMPLE TYPE",
    "Page",
    "Report Status",
    "Collected On",
    "Reported On",
    "Final",
    "Method:",
    "Automated",
    "Patient Location",
    "Flowcytometry",
    "Lab ID",
    "UH ID",
    "Registered On",
    "Age/Gender",
    "Electrical Impedence",
    "LABORATORY TEST REPORT",
    "HAEMATOLOGY",
    "Ref. By",
    "Calculated",
    "Processed By",
    "End Of Report",
    "EDTA",
    "Pathologist",
    "whole blood",
    "TERMS & CONDITIONS",
    "Dr ",
    "KMC-",
    "Meda Salomi",
    "COMPLETE BLOOD COUNT",
    "Male",
    "Female",
    "Years",
    "Name",
    "Mr.",
    "Mrs.",
    "Ms.",
    "Differential Leucocyte Count",
    "IP/OP No",
    "AKSHAYA NEURO",
];

/// Metadata substrings skipped (case-sensitively) inside the lookahead window.
///
/// These appear interleaved between a test name and its value in the source
/// layout, e.g. "Method: Automated".
pub const WINDOW_METADATA_KEYWORDS: &[&str] = &["Method:", "Automated", "Calculated"];

/// Characters that, alone, make a line pure separator noise
pub const SEPARATOR_CHARS: &[char] = &['-', ':', '/'];

/// Minimum character count for a test-name candidate line
pub const NAME_MIN_CHARS: usize = 3;

/// Minimum fraction of alphabetic characters that must be uppercase for a
/// line to qualify as a test-name candidate
pub const NAME_UPPERCASE_RATIO: f64 = 0.5;

/// Pattern a result-value line must match in full: one or more digits or
/// decimal points. Deliberately loose: a line of only dots also matches;
/// numeric validation happens at the caller boundary.
pub const RESULT_VALUE_PATTERN: &str = r"^[\d.]+$";

// =============================================================================
// Name–Value Pairing Constants
// =============================================================================

/// Number of lines scanned forward from a test-name candidate when searching
/// for its result value. Skipped blank/metadata lines still consume window
/// slots.
pub const VALUE_LOOKAHEAD_LINES: usize = 6;

// =============================================================================
// Canonical Unit Table
// =============================================================================

/// Hardcoded unit mapping keyed by normalized test-name phrase.
///
/// Authoritative source of truth for units: on-page unit strings are
/// inconsistent or missing in source documents, so units are never derived
/// from the document itself. Keys must already be in normalized form
/// (lowercase, no '(' ')' ':' characters, single-spaced); exact lookup
/// depends on it. Entry order matters: partial matching scans the table in
/// declaration order and the first match wins.
pub const UNIT_TABLE: &[(&str, &str)] = &[
    // Complete blood count
    ("hemoglobin", "gm/dl"),
    ("hb", "gm/dl"),
    ("hgb", "gm/dl"),
    ("r.b.c. count", "million/cumm"),
    ("rbc count", "million/cumm"),
    ("rbc", "million/cumm"),
    ("red blood cell count", "million/cumm"),
    ("p.c.v.", "%"),
    ("pcv", "%"),
    ("packed cell volume", "%"),
    ("hematocrit", "%"),
    ("hct", "%"),
    ("mcv", "fL"),
    ("mean corpuscular volume", "fL"),
    ("mch", "pg"),
    ("mean corpuscular hemoglobin", "pg"),
    ("mchc", "gm/dl"),
    ("mean corpuscular hemoglobin concentration", "gm/dl"),
    ("rdw", "%"),
    ("rdw-cv", "%"),
    ("rdw cv", "%"),
    ("red cell distribution width", "%"),
    ("rdw sd", "fL"),
    ("rdw-sd", "fL"),
    ("tlc", "cells/cumm"),
    ("wbc", "cells/cumm"),
    ("wbc count", "cells/cumm"),
    ("total leucocyte count", "cells/cumm"),
    ("total leukocyte count", "cells/cumm"),
    ("white blood cell count", "cells/cumm"),
    // Differential count
    ("neutrophils", "%"),
    ("neutrophil", "%"),
    ("lymphocytes", "%"),
    ("lymphocyte", "%"),
    ("eosinophils", "%"),
    ("eosinophil", "%"),
    ("monocytes", "%"),
    ("monocyte", "%"),
    ("basophils", "%"),
    ("basophil", "%"),
    // Absolute counts
    ("anc", "10³/μL"),
    ("absolute neutrophil count", "10³/μL"),
    ("alc", "10³/μL"),
    ("absolute lymphocyte count", "10³/μL"),
    ("aec", "10³/μL"),
    ("absolute eosinophil count", "10³/μL"),
    ("amc", "10³/μL"),
    ("absolute monocyte count", "10³/μL"),
    ("abc", "10³/μL"),
    ("absolute basophil count", "10³/μL"),
    // Platelets
    ("platelet count", "Lakhs/cmm"),
    ("platelet", "Lakhs/cmm"),
    ("plt", "Lakhs/cmm"),
    ("mpv", "fL"),
    ("mean platelet volume", "fL"),
    // Blood sugar
    ("glucose", "mg/dl"),
    ("fbs", "mg/dl"),
    ("fasting blood sugar", "mg/dl"),
    ("ppbs", "mg/dl"),
    ("post prandial blood sugar", "mg/dl"),
    ("rbs", "mg/dl"),
    ("random blood sugar", "mg/dl"),
    ("hba1c", "%"),
    // Lipid profile
    ("cholesterol", "mg/dl"),
    ("total cholesterol", "mg/dl"),
    ("hdl", "mg/dl"),
    ("ldl", "mg/dl"),
    ("vldl", "mg/dl"),
    ("triglycerides", "mg/dl"),
    ("triglyceride", "mg/dl"),
    // Kidney function
    ("creatinine", "mg/dl"),
    ("urea", "mg/dl"),
    ("blood urea", "mg/dl"),
    ("bun", "mg/dl"),
    ("uric acid", "mg/dl"),
    // Liver function
    ("bilirubin", "mg/dl"),
    ("total bilirubin", "mg/dl"),
    ("direct bilirubin", "mg/dl"),
    ("indirect bilirubin", "mg/dl"),
    ("sgot", "U/L"),
    ("sgpt", "U/L"),
    ("ast", "U/L"),
    ("alt", "U/L"),
    ("alp", "U/L"),
    ("alkaline phosphatase", "U/L"),
    ("ggt", "U/L"),
    ("protein", "g/dl"),
    ("total protein", "g/dl"),
    ("albumin", "g/dl"),
    ("globulin", "g/dl"),
    // Electrolytes
    ("sodium", "mEq/L"),
    ("potassium", "mEq/L"),
    ("calcium", "mg/dl"),
    ("chloride", "mEq/L"),
    // Thyroid
    ("tsh", "μIU/mL"),
    ("t3", "ng/dl"),
    ("t4", "μg/dl"),
    // Others
    ("esr", "mm/hr"),
    ("vitamin d", "ng/mL"),
    ("vitamin b12", "pg/mL"),
];

// =============================================================================
// File and Date Constants
// =============================================================================

/// Accepted document file extension
pub const PDF_EXTENSION: &str = "pdf";

/// Required report date format (exactly YYYY-MM-DD)
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Server Configuration Defaults
// =============================================================================

/// Default bind address for the extraction service
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default port for the extraction service
pub const DEFAULT_SERVER_PORT: u16 = 3003;

/// Origins allowed to call the service cross-origin (the upstream backend)
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] =
    &["http://localhost:3002", "http://127.0.0.1:3002"];

/// Maximum accepted upload size in bytes
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024; // 20MB

// =============================================================================
// Helper Functions
// =============================================================================

/// Check if a path has the accepted document extension (case-insensitive)
pub fn is_pdf_filename(name: &str) -> bool {
    std::path::Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PDF_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_table_keys_are_normalized() {
        // Exact-match lookup assumes keys are already lowercase, free of
        // '(' ')' ':' characters, and single-spaced.
        for (key, _) in UNIT_TABLE {
            assert_eq!(*key, key.to_lowercase(), "key not lowercase: {}", key);
            assert!(
                !key.contains(['(', ')', ':']),
                "key contains stripped punctuation: {}",
                key
            );
            assert!(!key.contains("  "), "key has doubled spaces: {}", key);
            assert_eq!(*key, key.trim(), "key has edge whitespace: {}", key);
        }
    }

    #[test]
    fn test_unit_table_has_no_duplicate_keys() {
        let mut seen = std::collections::HashSet::new();
        for (key, _) in UNIT_TABLE {
            assert!(seen.insert(*key), "duplicate unit table key: {}", key);
        }
    }

    #[test]
    fn test_unit_table_core_biomarkers() {
        let lookup = |name: &str| {
            UNIT_TABLE
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, unit)| *unit)
        };

        assert_eq!(lookup("hemoglobin"), Some("gm/dl"));
        assert_eq!(lookup("wbc"), Some("cells/cumm"));
        assert_eq!(lookup("platelet count"), Some("Lakhs/cmm"));
        assert_eq!(lookup("tsh"), Some("μIU/mL"));
        assert_eq!(lookup("esr"), Some("mm/hr"));
    }

    #[test]
    fn test_skip_keywords_not_empty() {
        assert!(!SKIP_KEYWORDS.is_empty());
        for keyword in SKIP_KEYWORDS {
            assert!(!keyword.is_empty(), "empty skip keyword");
        }
    }

    #[test]
    fn test_pdf_filename_detection() {
        assert!(is_pdf_filename("report.pdf"));
        assert!(is_pdf_filename("report.PDF"));
        assert!(is_pdf_filename("/tmp/dir/report.pdf"));
        assert!(!is_pdf_filename("report.docx"));
        assert!(!is_pdf_filename("report"));
        assert!(!is_pdf_filename("pdf"));
    }
}
