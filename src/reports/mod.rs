//! Report generation.
//!
//! Renders a [`ComparisonResult`] for consumption: machine-readable JSON or
//! a short human-readable summary.

mod json;
mod summary;

pub use json::JsonReporter;
pub use summary::SummaryReporter;

use crate::error::Result;
use crate::model::ComparisonResult;

/// Output format selector for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// Human-readable text summary
    Summary,
}

/// Trait for rendering a comparison result to text.
pub trait ReportGenerator {
    fn generate(&self, result: &ComparisonResult) -> Result<String>;
}

/// Build the reporter for a format.
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Json => Box::new(JsonReporter::pretty()),
        ReportFormat::JsonCompact => Box::new(JsonReporter::compact()),
        ReportFormat::Summary => Box::new(SummaryReporter),
    }
}
