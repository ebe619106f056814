//! Lab Report Extractor Library
//!
//! A Rust library for extracting structured lab-test markers (name, numeric
//! value, unit) from free-text medical lab report PDFs using deterministic
//! pattern matching, with no statistical or learned model involved.
//!
//! This library provides tools for:
//! - Reading PDF documents and yielding raw text per page
//! - Classifying report lines as noise, test-name candidates, or result values
//! - Pairing test names with result values via bounded lookahead
//! - Resolving physical units from a hand-curated canonical table
//! - Deduplicating markers across pages while preserving first-seen order
//! - Serving extraction over HTTP for upstream backends

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod pdf_reader;
        pub mod report_parser;
    }
}

// HTTP service
pub mod server;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Marker, NumericMarker, ReportDate};
pub use app::services::report_parser::{ParseResult, ParseStats, ReportParser};
pub use config::ServerConfig;

/// Result type alias for the lab report extractor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for extraction operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// PDF could not be loaded or read
    #[error("PDF read error in '{file}': {message}")]
    PdfRead {
        file: String,
        message: String,
        #[source]
        source: Option<lopdf::Error>,
    },

    /// Uploaded or supplied file is not a PDF
    #[error("Unsupported file type: {path} (only .pdf files are supported)")]
    UnsupportedFileType { path: String },

    /// Report date string was not in the required YYYY-MM-DD form
    #[error("Invalid report date '{value}': expected YYYY-MM-DD")]
    InvalidReportDate {
        value: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a PDF read error with context
    pub fn pdf_read(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<lopdf::Error>,
    ) -> Self {
        Self::PdfRead {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an unsupported file type error
    pub fn unsupported_file_type(path: impl Into<String>) -> Self {
        Self::UnsupportedFileType { path: path.into() }
    }

    /// Create an invalid report date error
    pub fn invalid_report_date(
        value: impl Into<String>,
        source: Option<chrono::ParseError>,
    ) -> Self {
        Self::InvalidReportDate {
            value: value.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<lopdf::Error> for Error {
    fn from(error: lopdf::Error) -> Self {
        Self::PdfRead {
            file: "unknown".to_string(),
            message: "PDF processing failed".to_string(),
            source: Some(error),
        }
    }
}
