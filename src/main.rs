//! docdiff: section-level document comparison tool
//!
//! Compares two PDF-extracted text documents and reports section changes.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docdiff::config::{CompareConfig, MatchStrategy};
use docdiff::extract::{extractor_for, TextExtractor as _};
use docdiff::pipeline::{self, exit_codes};
use docdiff::reports::{reporter_for, ReportFormat};
use docdiff::summary::NoOpSummarizer;
use std::io::Write as _;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "docdiff")]
#[command(version)]
#[command(about = "Section-level document comparison", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No changes detected
    1  Changes detected
    3  Error occurred

EXAMPLES:
    # Compare two extracted documents, JSON to stdout
    docdiff compare contract-v1.txt contract-v2.txt

    # Short human-readable summary
    docdiff compare contract-v1.txt contract-v2.txt -o summary

    # Optimal section assignment, report to file
    docdiff compare old.txt new.txt --strategy hungarian -O report.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `compare` subcommand
#[derive(Parser)]
struct CompareArgs {
    /// Path to the old/baseline document text
    old: PathBuf,

    /// Path to the new document text
    new: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "json")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Section matching strategy
    #[arg(long, value_enum, default_value_t = MatchStrategy::Greedy)]
    strategy: MatchStrategy,

    /// Minimum similarity for two sections to match
    #[arg(long, default_value_t = 0.3)]
    match_threshold: f64,

    /// Similarity above which a matched pair counts as unchanged
    #[arg(long, default_value_t = 0.95)]
    unchanged_threshold: f64,

    /// Exit with code 0 even when changes are detected
    #[arg(long)]
    no_fail_on_change: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two extracted documents
    Compare(CompareArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Compare(args) => match run_compare(args) {
            Ok(exit_code) => {
                if exit_code != 0 {
                    std::process::exit(exit_code);
                }
            }
            Err(e) => {
                eprintln!("Error: {e:#}");
                std::process::exit(exit_codes::ERROR);
            }
        },
    }

    Ok(())
}

fn run_compare(args: CompareArgs) -> Result<i32> {
    let mut config = CompareConfig::default();
    config.matching.strategy = args.strategy;
    config.matching.match_threshold = args.match_threshold;
    config.matching.unchanged_threshold = args.unchanged_threshold;

    let doc_a = extractor_for(&args.old)?
        .extract(&args.old)
        .with_context(|| format!("loading baseline document {}", args.old.display()))?;
    let doc_b = extractor_for(&args.new)?
        .extract(&args.new)
        .with_context(|| format!("loading revised document {}", args.new.display()))?;

    let result = pipeline::compare_documents(&doc_a, &doc_b, &config, &NoOpSummarizer)?;

    let report = reporter_for(args.output).generate(&result)?;
    match args.output_file {
        Some(path) => std::fs::write(&path, &report)
            .with_context(|| format!("writing report to {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(report.as_bytes())?;
            if !report.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    if result.has_changes() && !args.no_fail_on_change {
        Ok(exit_codes::CHANGES_FOUND)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}
