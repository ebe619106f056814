//! Comprehensive tests for the report parser module
//!
//! This module provides unit tests for every pipeline stage plus shared
//! fixtures, including a generated PDF used by reader round-trip tests.

pub mod units_tests;

use crate::app::models::Marker;

/// Create a test marker
pub fn create_test_marker(name: &str, result: &str, unit: &str) -> Marker {
    Marker::new(name, result, unit)
}

/// Page text resembling a real haematology report fragment
pub fn sample_page_text() -> String {
    [
        "LABORATORY TEST REPORT",
        "TEST PARAMETER",
        "RESULT",
        "HEMOGLOBIN (Hb)",
        "Method: Automated",
        "13.5",
        "TLC",
        "Electrical Impedence",
        "8500",
        "PLATELET COUNT",
        "2.5",
        "End Of Report",
    ]
    .join("\n")
}

/// Build a minimal multi-page PDF with one text block per page.
///
/// Each entry in `pages` becomes one page; lines within an entry become
/// separate text-positioning operations so extraction yields them on
/// separate lines.
pub fn build_pdf(pages: &[&str]) -> Vec<u8> {
    use lopdf::content::{Content, Operation};
    use lopdf::{Document, Object, Stream, dictionary};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page_text in pages {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![50.into(), 780.into()]),
        ];
        for line in page_text.lines() {
            operations.push(Operation::new("Tj", vec![Object::string_literal(line)]));
            operations.push(Operation::new("Td", vec![0.into(), (-14).into()]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("failed to encode test page content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("failed to serialize test PDF");
    bytes
}
