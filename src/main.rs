use clap::Parser;
use labreport_extractor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(()) => {
            // Success - summaries have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print the full error chain and exit non-zero
            eprintln!("Error: {:#}", anyhow::Error::new(error));
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Lab Report Extractor - Deterministic Medical PDF Parsing");
    println!("========================================================");
    println!();
    println!("Extract structured lab-test markers (name, numeric value, unit) from");
    println!("free-text medical lab report PDFs using pure pattern matching.");
    println!();
    println!("USAGE:");
    println!("    labreport-extractor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    extract     Extract markers from a PDF file or directory (main command)");
    println!("    serve       Run the HTTP extraction service");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Extract markers from a single report:");
    println!("    labreport-extractor extract report.pdf --pretty");
    println!();
    println!("    # Extract every report under a directory into one JSON file:");
    println!("    labreport-extractor extract /path/to/reports --output markers.json");
    println!();
    println!("    # Run the extraction service for the upstream backend:");
    println!("    labreport-extractor serve --port 3003 \\");
    println!("                              --allowed-origin http://localhost:3002");
    println!();
    println!("For detailed help on any command, use:");
    println!("    labreport-extractor <COMMAND> --help");
}
