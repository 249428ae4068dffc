//! Human-readable text summary.

use super::ReportGenerator;
use crate::error::Result;
use crate::model::{ComparisonResult, SectionChangeType, SectionComparison};
use std::fmt::Write;

/// Short console-friendly rendering: aggregate score, change counts, then
/// one line per changed section. Unchanged sections are omitted.
#[derive(Debug, Clone, Copy)]
pub struct SummaryReporter;

impl ReportGenerator for SummaryReporter {
    fn generate(&self, result: &ComparisonResult) -> Result<String> {
        let mut out = String::new();
        let stats = &result.change_statistics;

        // String formatting cannot fail here.
        let _ = writeln!(
            out,
            "Comparison: {} -> {}",
            result.document_a_name, result.document_b_name
        );
        let _ = writeln!(
            out,
            "Overall similarity: {:.1}%",
            result.overall_similarity * 100.0
        );
        let _ = writeln!(
            out,
            "Sections: {} added, {} deleted, {} modified, {} unchanged ({:.1}% changed)",
            stats.added_sections,
            stats.deleted_sections,
            stats.modified_sections,
            stats.unchanged_sections,
            stats.change_percentage()
        );

        let changed: Vec<&SectionComparison> = result
            .section_comparisons
            .iter()
            .filter(|c| c.change_type != SectionChangeType::Unchanged)
            .collect();

        if changed.is_empty() {
            let _ = writeln!(out, "\nNo section changes detected.");
        } else {
            let _ = writeln!(out, "\nChanged sections:");
            for c in changed {
                let _ = writeln!(
                    out,
                    "  [{:?}/{:?}] p{} {}",
                    c.change_type,
                    c.severity,
                    c.sort_page(),
                    c.narrative_summary
                );
            }
        }

        Ok(out)
    }
}
