//! Command implementations for the lab report extractor CLI
//!
//! This module contains the main command execution logic, progress
//! reporting, and summary output for the CLI interface.

use crate::app::models::{Marker, NumericMarker};
use crate::app::services::report_parser::ReportParser;
use crate::cli::args::{Args, Commands, ExtractArgs, ServeArgs};
use crate::config::ServerConfig;
use crate::constants::PDF_EXTENSION;
use crate::{Error, Result, server};
use colored::*;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Extraction summary for reporting
#[derive(Debug, Clone, Default)]
pub struct ExtractSummary {
    /// Number of files processed successfully
    pub files_processed: usize,
    /// Number of files that failed to process
    pub files_failed: usize,
    /// Number of markers extracted across all files
    pub markers_extracted: usize,
    /// Number of duplicate markers removed
    pub duplicates_removed: usize,
}

/// Per-file extraction output for JSON serialization
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    markers: MarkerOutput,
    count: usize,
}

/// Markers serialized either as caller-facing numeric records or as the
/// core's raw string records
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MarkerOutput {
    Numeric(Vec<NumericMarker>),
    Raw(Vec<Marker>),
}

/// Main command runner for the lab report extractor
pub async fn run(args: Args) -> Result<()> {
    // Set up logging
    setup_logging(&args)?;

    info!("Starting lab report extractor");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    match &args.command {
        Some(Commands::Extract(extract_args)) => run_extract(extract_args, args.quiet),
        Some(Commands::Serve(serve_args)) => run_serve(serve_args).await,
        None => Ok(()),
    }
}

/// Set up tracing subscriber based on CLI flags
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("labreport_extractor={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

/// Execute the extract command over a file or directory of PDFs
fn run_extract(args: &ExtractArgs, quiet: bool) -> Result<()> {
    let start_time = Instant::now();

    let files = collect_input_files(&args.input_path)?;
    if files.is_empty() {
        warn!(
            "No PDF files found under {}",
            args.input_path.display()
        );
        return Ok(());
    }

    info!("Processing {} file(s)", files.len());

    let progress_bar = if files.len() > 1 && !quiet {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let parser = ReportParser::new();
    let mut summary = ExtractSummary::default();
    let mut reports = Vec::with_capacity(files.len());

    for file in &files {
        if let Some(pb) = &progress_bar {
            pb.set_message(format!("{}", file.display()));
        }

        match parser.extract_file(file) {
            Ok(result) => {
                summary.files_processed += 1;
                summary.duplicates_removed += result.stats.duplicates_removed;

                let output = if args.raw {
                    summary.markers_extracted += result.markers.len();
                    MarkerOutput::Raw(result.markers)
                } else {
                    let numeric: Vec<NumericMarker> = result
                        .markers
                        .iter()
                        .filter_map(|marker| marker.to_numeric())
                        .collect();
                    summary.markers_extracted += numeric.len();
                    MarkerOutput::Numeric(numeric)
                };

                let count = match &output {
                    MarkerOutput::Numeric(markers) => markers.len(),
                    MarkerOutput::Raw(markers) => markers.len(),
                };

                reports.push(FileReport {
                    file: file.display().to_string(),
                    success: true,
                    error: None,
                    markers: output,
                    count,
                });
            }
            Err(e) => {
                // Single-file runs fail hard; batch runs record and continue
                if files.len() == 1 {
                    return Err(e);
                }

                warn!("Failed to extract {}: {}", file.display(), e);
                summary.files_failed += 1;
                reports.push(FileReport {
                    file: file.display().to_string(),
                    success: false,
                    error: Some(e.to_string()),
                    markers: MarkerOutput::Numeric(Vec::new()),
                    count: 0,
                });
            }
        }

        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }

    write_output(args, &reports)?;

    if !quiet {
        print_summary(&summary, start_time.elapsed());
    }

    Ok(())
}

/// Collect PDF files from the input path: the file itself, or every *.pdf
/// under a directory in sorted order
fn collect_input_files(input_path: &Path) -> Result<Vec<PathBuf>> {
    if input_path.is_file() {
        if !input_path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(PDF_EXTENSION))
        {
            return Err(Error::unsupported_file_type(
                input_path.display().to_string(),
            ));
        }
        return Ok(vec![input_path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(input_path) {
        let entry = entry.map_err(|e| {
            Error::configuration(format!(
                "Failed to walk directory {}: {}",
                input_path.display(),
                e
            ))
        })?;

        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(PDF_EXTENSION))
        {
            files.push(entry.path().to_path_buf());
        }
    }

    // Sort for consistent ordering across runs
    files.sort();

    Ok(files)
}

/// Serialize per-file reports to the output target
fn write_output(args: &ExtractArgs, reports: &[FileReport]) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(reports)
    } else {
        serde_json::to_string(reports)
    }
    .map_err(|e| Error::configuration(format!("Failed to serialize output: {}", e)))?;

    match &args.output_path {
        Some(path) => {
            std::fs::write(path, &json).map_err(|e| {
                Error::io(format!("Failed to write output to {}", path.display()), e)
            })?;
            info!("Wrote extraction output to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Print a colored extraction summary
fn print_summary(summary: &ExtractSummary, elapsed: std::time::Duration) {
    eprintln!();
    eprintln!("{}", "Extraction complete".bright_green().bold());
    eprintln!(
        "  {} {}",
        "Files processed:".bright_white(),
        summary.files_processed.to_string().bright_cyan()
    );
    if summary.files_failed > 0 {
        eprintln!(
            "  {} {}",
            "Files failed:".bright_white(),
            summary.files_failed.to_string().bright_red()
        );
    }
    eprintln!(
        "  {} {}",
        "Markers extracted:".bright_white(),
        summary.markers_extracted.to_string().bright_cyan()
    );
    eprintln!(
        "  {} {}",
        "Duplicates removed:".bright_white(),
        summary.duplicates_removed.to_string().bright_cyan()
    );
    eprintln!(
        "  {} {}",
        "Elapsed:".bright_white(),
        format!("{}", HumanDuration(elapsed)).bright_cyan()
    );
}

/// Execute the serve command
async fn run_serve(args: &ServeArgs) -> Result<()> {
    let config = ServerConfig {
        host: args.host.clone(),
        port: args.port,
        allowed_origins: if args.allowed_origins.is_empty() {
            ServerConfig::default().allowed_origins
        } else {
            args.allowed_origins.clone()
        },
        max_upload_bytes: args.max_upload_bytes,
    };

    config.validate()?;

    info!(
        "Starting extraction service on {}:{} for origins {:?}",
        config.host, config.port, config.allowed_origins
    );

    server::serve(config).await
}
