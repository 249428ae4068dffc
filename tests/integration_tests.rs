//! Integration tests for docdiff
//!
//! These tests verify end-to-end behavior of extraction, the comparison
//! pipeline, and report generation.

use docdiff::config::{CompareConfig, MatchStrategy};
use docdiff::extract::{PlainTextExtractor, TextExtractor};
use docdiff::model::{ChangeKind, Document, SectionChangeType, Severity};
use docdiff::reports::{JsonReporter, ReportGenerator, SummaryReporter};
use docdiff::summary::NoOpSummarizer;
use docdiff::{compare_documents, ComparisonResult};
use std::io::Write as _;

// ============================================================================
// Helpers
// ============================================================================

fn doc(name: &str, pages: &[&str]) -> Document {
    Document::new(name, pages.iter().map(ToString::to_string).collect())
}

fn compare(a: &Document, b: &Document) -> ComparisonResult {
    compare_documents(a, b, &CompareConfig::default(), &NoOpSummarizer)
        .expect("comparison should succeed")
}

const PAGE_SCOPE: &str = "1. SCOPE\n\
    The supplier delivers all items listed in this section according to the \
    agreed schedule of work and the annexes referenced below.\n";

const PAGE_TERMS: &str = "2. TERMS OF PAYMENT\n\
    Invoices are payable within thirty days of receipt. Late payment accrues \
    interest at the statutory rate applicable in the country of the buyer.\n";

// ============================================================================
// Pipeline behavior
// ============================================================================

mod pipeline_tests {
    use super::*;

    #[test]
    fn test_identical_documents_are_fully_unchanged() {
        let a = doc("v1", &[PAGE_SCOPE]);
        let b = doc("v2", &[PAGE_SCOPE]);
        let result = compare(&a, &b);

        assert_eq!(result.section_comparisons.len(), 1);
        assert_eq!(
            result.section_comparisons[0].change_type,
            SectionChangeType::Unchanged
        );
        assert!(result
            .diff_segments
            .iter()
            .all(|s| s.kind == ChangeKind::Unchanged));
        assert!((result.overall_similarity - 1.0).abs() < 1e-12);
        assert!(!result.has_changes());
    }

    #[test]
    fn test_document_against_blank_is_all_deletions() {
        let a = doc("v1", &[PAGE_SCOPE, PAGE_TERMS]);
        let b = doc("v2", &["   \n"]);
        let result = compare(&a, &b);

        assert_eq!(result.change_statistics.deleted_sections, 2);
        assert_eq!(result.change_statistics.unchanged_sections, 0);
        assert!(result
            .diff_segments
            .iter()
            .all(|s| s.kind == ChangeKind::Deleted));
        assert_eq!(result.overall_similarity, 0.0);
        assert!(result.has_changes());
    }

    #[test]
    fn test_added_page_reports_one_added_section() {
        let a = doc("v1", &[PAGE_SCOPE]);
        let b = doc("v2", &[PAGE_SCOPE, PAGE_TERMS]);
        let result = compare(&a, &b);

        assert_eq!(result.change_statistics.added_sections, 1);
        assert_eq!(result.change_statistics.unchanged_sections, 1);
        let added = result
            .section_comparisons
            .iter()
            .find(|c| c.change_type == SectionChangeType::Added)
            .expect("added comparison");
        assert_eq!(added.page_number_b, Some(2));
        assert_eq!(added.page_number_a, None);
        assert!(added.narrative_summary.starts_with("New section added:"));
    }

    #[test]
    fn test_reworded_section_is_modified_with_score() {
        let revised = "1. SCOPE\n\
            The supplier delivers all items listed in this section according to \
            a revised schedule of work and the annexes referenced elsewhere.\n";
        let a = doc("v1", &[PAGE_SCOPE]);
        let b = doc("v2", &[revised]);
        let result = compare(&a, &b);

        assert_eq!(result.change_statistics.modified_sections, 1);
        let modified = &result.section_comparisons[0];
        let score = modified.similarity_score.expect("score for matched pair");
        assert!(score > 0.3 && score < 0.95);
        assert!(result.overall_similarity > 0.0 && result.overall_similarity < 1.0);
    }

    #[test]
    fn test_long_legal_insertion_gets_major_severity() {
        let legal_page = format!(
            "3. LIABILITY\nThe contractor shall indemnify the buyer for {}\n",
            "all damages arising from clause violations ".repeat(10)
        );
        let a = doc("v1", &[PAGE_SCOPE]);
        let b = doc("v2", &[PAGE_SCOPE, &legal_page]);
        let result = compare(&a, &b);

        assert!(result
            .diff_segments
            .iter()
            .any(|s| s.kind == ChangeKind::Inserted && s.severity == Severity::Major));
    }

    #[test]
    fn test_ligature_damage_compares_equal_to_clean_text() {
        let damaged = "1. SCOPE\n\
            The speci\u{FB01}cation covers authen ca on and the exis ng schedule \
            of work agreed between the par es to this contract.\n";
        let clean = "1. SCOPE\n\
            The specification covers authentication and the existing schedule \
            of work agreed between the par es to this contract.\n";
        let a = doc("v1", &[damaged]);
        let b = doc("v2", &[clean]);
        let result = compare(&a, &b);

        assert_eq!(result.change_statistics.unchanged_sections, 1);
        assert!((result.overall_similarity - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_hungarian_strategy_covers_every_section() {
        let mut config = CompareConfig::default();
        config.matching.strategy = MatchStrategy::Hungarian;
        let a = doc("v1", &[PAGE_SCOPE, PAGE_TERMS]);
        let b = doc("v2", &[PAGE_TERMS, PAGE_SCOPE]);
        let result =
            compare_documents(&a, &b, &config, &NoOpSummarizer).expect("comparison succeeds");

        assert_eq!(result.section_comparisons.len(), 2);
        assert_eq!(result.change_statistics.unchanged_sections, 2);
    }

    #[test]
    fn test_comparisons_are_page_ordered() {
        let a = doc("v1", &[PAGE_SCOPE, PAGE_TERMS]);
        let b = doc("v2", &[PAGE_SCOPE]);
        let result = compare(&a, &b);

        let pages: Vec<u32> = result
            .section_comparisons
            .iter()
            .map(docdiff::model::SectionComparison::sort_page)
            .collect();
        let mut sorted = pages.clone();
        sorted.sort_unstable();
        assert_eq!(pages, sorted);
    }
}

// ============================================================================
// Extraction
// ============================================================================

mod extract_tests {
    use super::*;

    #[test]
    fn test_extract_and_compare_from_files() {
        let mut file_a = tempfile::NamedTempFile::with_suffix(".txt").unwrap();
        let mut file_b = tempfile::NamedTempFile::with_suffix(".txt").unwrap();
        write!(file_a, "{PAGE_SCOPE}\u{0C}{PAGE_TERMS}").unwrap();
        write!(file_b, "{PAGE_SCOPE}").unwrap();

        let extractor = PlainTextExtractor::new();
        let a = extractor.extract(file_a.path()).unwrap();
        let b = extractor.extract(file_b.path()).unwrap();
        assert_eq!(a.page_count(), 2);
        assert_eq!(b.page_count(), 1);

        let result = compare(&a, &b);
        assert_eq!(result.change_statistics.deleted_sections, 1);
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let file = tempfile::NamedTempFile::with_suffix(".txt").unwrap();
        let err = PlainTextExtractor::new().extract(file.path()).unwrap_err();
        assert!(err.to_string().contains("extract"));
    }
}

// ============================================================================
// Reports
// ============================================================================

mod report_tests {
    use super::*;

    #[test]
    fn test_json_report_round_trips() {
        let a = doc("v1", &[PAGE_SCOPE]);
        let b = doc("v2", &[PAGE_SCOPE, PAGE_TERMS]);
        let result = compare(&a, &b);

        let json = JsonReporter::pretty().generate(&result).unwrap();
        assert!(json.contains("\"documentAName\": \"v1\""));
        assert!(json.contains("\"addedSections\": 1"));

        let parsed: ComparisonResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.section_comparisons.len(), result.section_comparisons.len());
        assert_eq!(parsed.change_statistics, result.change_statistics);
    }

    #[test]
    fn test_summary_report_mentions_changes() {
        let a = doc("v1", &[PAGE_SCOPE]);
        let b = doc("v2", &[PAGE_SCOPE, PAGE_TERMS]);
        let result = compare(&a, &b);

        let text = SummaryReporter.generate(&result).unwrap();
        assert!(text.contains("Comparison: v1 -> v2"));
        assert!(text.contains("1 added"));
        assert!(text.contains("New section added:"));
    }
}
