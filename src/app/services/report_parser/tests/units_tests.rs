//! Tests for unit resolution and test-name normalization

use crate::app::services::report_parser::units::{UnitTable, normalize_test_name};

#[test]
fn test_normalization() {
    assert_eq!(normalize_test_name("HEMOGLOBIN"), "hemoglobin");
    assert_eq!(normalize_test_name("HEMOGLOBIN (Hb)"), "hemoglobin hb");
    assert_eq!(normalize_test_name("  Platelet   Count : "), "platelet count");
    assert_eq!(normalize_test_name("R.B.C. Count"), "r.b.c. count");
}

#[test]
fn test_exact_match() {
    let table = UnitTable::new();

    assert_eq!(table.resolve("hemoglobin"), "gm/dl");
    assert_eq!(table.resolve("HEMOGLOBIN"), "gm/dl");
    assert_eq!(table.resolve("R.B.C. Count"), "million/cumm");
    assert_eq!(table.resolve("WBC COUNT"), "cells/cumm");
    assert_eq!(table.resolve("Platelet Count:"), "Lakhs/cmm");
    assert_eq!(table.resolve("TSH"), "μIU/mL");
}

#[test]
fn test_partial_match_symmetric_containment() {
    let table = UnitTable::new();

    // Key contained in the normalized name
    assert_eq!(table.resolve("HEMOGLOBIN (Hb) ESTIMATION"), "gm/dl");
    assert_eq!(table.resolve("T3 (Triiodothyronine)"), "ng/dl");

    // Key "hb" contained in the name
    assert_eq!(table.resolve("HBX"), "gm/dl");
    // Normalized name contained in the key "mean corpuscular volume"
    assert_eq!(table.resolve("CORPUSCULAR"), "fL");
}

#[test]
fn test_unknown_names_resolve_to_empty() {
    let table = UnitTable::new();

    assert_eq!(table.resolve("UNKNOWN MARKER XYZ"), "");
    assert_eq!(table.resolve("ZZZZ"), "");
}

#[test]
fn test_exact_match_takes_priority_over_partial() {
    // In a table where partial scanning would hit a different entry first,
    // the exact match must still win.
    const ENTRIES: &[(&str, &str)] = &[("total count", "A"), ("count", "B")];
    let table = UnitTable::with_entries(ENTRIES);

    // Partial scan order would match "total count" (contains "count") first;
    // exact lookup short-circuits to "B".
    assert_eq!(table.resolve("count"), "B");
}

#[test]
fn test_partial_match_honors_table_order() {
    const ENTRIES: &[(&str, &str)] = &[("alpha", "A"), ("alphabet", "B")];
    let table = UnitTable::with_entries(ENTRIES);

    // Both keys are substrings of the name; the first entry wins.
    assert_eq!(table.resolve("alphabets"), "A");
}

#[test]
fn test_table_size() {
    let table = UnitTable::new();

    assert!(!table.is_empty());
    assert!(table.len() > 30, "canonical table covers 30+ biomarkers");
}
