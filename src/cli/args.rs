//! Command-line argument definitions for the lab report extractor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::constants::{DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the lab report extractor
///
/// Extracts structured lab-test markers (name, numeric value, unit) from
/// free-text medical lab report PDFs using deterministic pattern matching.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "labreport-extractor",
    version,
    about = "Extract lab-test markers from medical report PDFs",
    long_about = "A deterministic extraction tool that parses free-text medical lab report \
                  PDFs into structured markers (name, numeric value, unit) using pure \
                  pattern matching. No statistical or learned model is involved, so results \
                  are fully reproducible and auditable."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(short = 'q', long = "quiet", global = true, help = "Suppress non-error output")]
    pub quiet: bool,
}

/// Available subcommands for the lab report extractor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Extract markers from a PDF file or a directory of PDFs
    Extract(ExtractArgs),
    /// Run the HTTP extraction service
    Serve(ServeArgs),
}

/// Arguments for the extract command (main extraction workflow)
#[derive(Debug, Clone, Parser)]
pub struct ExtractArgs {
    /// PDF file to extract, or a directory to scan for *.pdf files
    #[arg(value_name = "PATH", help = "PDF file or directory to process")]
    pub input_path: PathBuf,

    /// Output file for extracted markers as JSON
    ///
    /// Written to stdout if not specified.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write JSON output to this file instead of stdout"
    )]
    pub output_path: Option<PathBuf>,

    /// Emit raw marker records without numeric conversion
    ///
    /// By default, raw results are converted to numbers and records that do
    /// not convert are dropped, mirroring the HTTP service behavior. This
    /// flag emits the core's raw string results instead.
    #[arg(long = "raw", help = "Emit raw results without numeric conversion")]
    pub raw: bool,

    /// Pretty-print the JSON output
    #[arg(long = "pretty", help = "Pretty-print the JSON output")]
    pub pretty: bool,
}

/// Arguments for the serve command (HTTP service)
#[derive(Debug, Clone, Parser)]
pub struct ServeArgs {
    /// Bind address for the service
    #[arg(
        long = "host",
        value_name = "HOST",
        default_value = DEFAULT_SERVER_HOST,
        help = "Bind address for the service"
    )]
    pub host: String,

    /// Bind port for the service
    #[arg(
        short = 'p',
        long = "port",
        value_name = "PORT",
        default_value_t = DEFAULT_SERVER_PORT,
        help = "Bind port for the service"
    )]
    pub port: u16,

    /// Origin allowed to call the service cross-origin (repeatable)
    ///
    /// Defaults to the local upstream backend origins if not specified.
    #[arg(
        long = "allowed-origin",
        value_name = "ORIGIN",
        help = "Origin allowed to call the service cross-origin (repeatable)"
    )]
    pub allowed_origins: Vec<String>,

    /// Maximum accepted upload size in bytes
    #[arg(
        long = "max-upload-bytes",
        value_name = "BYTES",
        default_value_t = DEFAULT_MAX_UPLOAD_BYTES,
        help = "Maximum accepted upload size in bytes"
    )]
    pub max_upload_bytes: usize,
}

impl Args {
    /// Validate argument combinations before running
    pub fn validate(&self) -> Result<()> {
        if let Some(Commands::Extract(extract_args)) = &self.command {
            if !extract_args.input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    extract_args.input_path.display()
                )));
            }
        }

        Ok(())
    }

    /// Resolve the tracing filter level from verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }

        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
