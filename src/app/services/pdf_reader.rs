//! PDF text extraction
//!
//! Reads a PDF document and yields one raw text string per page, in page
//! order. This is the boundary between the binary document format and the
//! pure-text extraction core: an unreadable document is a single top-level
//! error with no partial results, while a single page that fails text
//! extraction degrades to an empty page rather than aborting the document.

use crate::{Error, Result};
use lopdf::Document;
use std::path::Path;
use tracing::{debug, warn};

/// Per-page text reader over lopdf
#[derive(Debug)]
pub struct PdfTextReader;

impl PdfTextReader {
    /// Create a new reader
    pub fn new() -> Self {
        Self
    }

    /// Read a PDF file from disk and return its per-page text
    pub fn read_file(&self, path: &Path) -> Result<Vec<String>> {
        let data = std::fs::read(path)
            .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?;

        self.read_named(&data, &path.display().to_string())
    }

    /// Read an in-memory PDF document and return its per-page text
    pub fn read_bytes(&self, data: &[u8]) -> Result<Vec<String>> {
        self.read_named(data, "<memory>")
    }

    fn read_named(&self, data: &[u8], name: &str) -> Result<Vec<String>> {
        let document = Document::load_mem(data)
            .map_err(|e| Error::pdf_read(name, "failed to load document", Some(e)))?;

        let pages = document.get_pages();
        debug!("Loaded '{}' with {} pages", name, pages.len());

        let mut page_texts = Vec::with_capacity(pages.len());
        for page_number in pages.keys() {
            match document.extract_text(&[*page_number]) {
                Ok(text) => page_texts.push(text),
                Err(e) => {
                    warn!(
                        "Text extraction failed for page {} of '{}': {}",
                        page_number, name, e
                    );
                    page_texts.push(String::new());
                }
            }
        }

        Ok(page_texts)
    }
}

impl Default for PdfTextReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bytes_are_a_single_error() {
        let reader = PdfTextReader::new();
        let result = reader.read_bytes(b"this is not a pdf document");

        assert!(matches!(result, Err(Error::PdfRead { .. })));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let reader = PdfTextReader::new();
        let result = reader.read_file(Path::new("/nonexistent/report.pdf"));

        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_generated_document_round_trip() {
        let reader = PdfTextReader::new();
        let data = crate::app::services::report_parser::tests::build_pdf(&[
            "HEMOGLOBIN\n13.5",
            "WBC\n8500",
        ]);

        let pages = reader.read_bytes(&data).unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages[0].contains("HEMOGLOBIN"));
        assert!(pages[0].contains("13.5"));
        assert!(pages[1].contains("WBC"));
    }
}
