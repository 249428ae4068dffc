//! Comparison pipeline.
//!
//! Orchestrates the full flow: normalize page text, segment both documents,
//! align sections, compute the line diff, classify severities, attach
//! narrative summaries, and blend the aggregate similarity score. Stages are
//! pure given their inputs; only summary generation may call out.

use crate::config::CompareConfig;
use crate::diff::DiffEngine;
use crate::error::Result;
use crate::matching::SectionAligner;
use crate::model::{
    ChangeStatistics, ComparisonResult, Document, Section, SectionChangeType,
};
use crate::normalize::Normalizer;
use crate::segment::Segmenter;
use crate::severity::SeverityClassifier;
use crate::summary::{apply_summaries, NarrativeSummarizer};
use chrono::Utc;
use rayon::prelude::*;
use tracing::{debug, info};

/// Process exit codes for the CLI.
pub mod exit_codes {
    /// Comparison ran and found no changes.
    pub const SUCCESS: i32 = 0;
    /// Comparison ran and found changes.
    pub const CHANGES_FOUND: i32 = 1;
    /// Comparison could not run.
    pub const ERROR: i32 = 3;
}

/// Compare two documents end to end.
///
/// `doc_a` is the baseline and `doc_b` the revision. The summarizer fills
/// the narrative text on each section comparison; pass
/// [`crate::summary::NoOpSummarizer`] to get deterministic fallback text.
pub fn compare_documents(
    doc_a: &Document,
    doc_b: &Document,
    config: &CompareConfig,
    summarizer: &dyn NarrativeSummarizer,
) -> Result<ComparisonResult> {
    config.validate()?;

    info!(
        document_a = %doc_a.name,
        document_b = %doc_b.name,
        pages_a = doc_a.page_count(),
        pages_b = doc_b.page_count(),
        "starting document comparison"
    );

    let normalizer = Normalizer::new(config.tables.clone());
    let doc_a = doc_a.map_pages(|p| normalizer.normalize(p));
    let doc_b = doc_b.map_pages(|p| normalizer.normalize(p));

    let segmenter = Segmenter::new(config.segmentation.clone(), config.tables.clone());
    let sections_a = segment_document(&segmenter, &doc_a);
    let sections_b = segment_document(&segmenter, &doc_b);
    debug!(
        sections_a = sections_a.len(),
        sections_b = sections_b.len(),
        "segmentation complete"
    );

    let aligner = SectionAligner::new(config.matching.clone());
    let mut comparisons = aligner.align(&sections_a, &sections_b);

    let diff_engine = DiffEngine::new(config.diff.clone());
    let mut diff_segments = diff_engine.diff(&doc_a, &doc_b);

    let classifier = SeverityClassifier::new(config.tables.clone());
    classifier.classify_segments(&mut diff_segments);
    for comparison in &mut comparisons {
        comparison.severity = classifier.classify_comparison(comparison);
    }

    apply_summaries(&mut comparisons, summarizer, &config.summary);

    let change_statistics = ChangeStatistics::from_comparisons(&comparisons);
    let overall_similarity = overall_similarity(&comparisons);
    info!(
        overall_similarity,
        added = change_statistics.added_sections,
        deleted = change_statistics.deleted_sections,
        modified = change_statistics.modified_sections,
        unchanged = change_statistics.unchanged_sections,
        "comparison complete"
    );

    Ok(ComparisonResult {
        document_a_name: doc_a.name.clone(),
        document_b_name: doc_b.name.clone(),
        sections_a,
        sections_b,
        section_comparisons: comparisons,
        overall_similarity,
        change_statistics,
        diff_segments,
        timestamp: Utc::now(),
    })
}

/// Segment every page of a document in parallel, then merge short fragments
/// across the flattened, page-ordered section list.
fn segment_document(segmenter: &Segmenter, doc: &Document) -> Vec<Section> {
    let sections: Vec<Section> = doc
        .pages
        .par_iter()
        .enumerate()
        .map(|(index, page)| segmenter.segment_page(page, (index + 1) as u32, &doc.name))
        .flatten()
        .collect();
    segmenter.merge_short_sections(sections)
}

/// Blend section comparisons into one aggregate similarity score.
///
/// The base ratio is unchanged over total. Modified sections pull the score
/// up in proportion to their average content similarity, weighted by their
/// share of all sections. No comparisons at all scores 0.0.
#[must_use]
pub fn overall_similarity(comparisons: &[crate::model::SectionComparison]) -> f64 {
    let total = comparisons.len();
    if total == 0 {
        return 0.0;
    }

    let unchanged = comparisons
        .iter()
        .filter(|c| c.change_type == SectionChangeType::Unchanged)
        .count();
    let base = unchanged as f64 / total as f64;

    let modified_scores: Vec<f64> = comparisons
        .iter()
        .filter(|c| c.change_type == SectionChangeType::Modified)
        .filter_map(|c| c.similarity_score)
        .collect();
    if modified_scores.is_empty() {
        return base;
    }

    let modified_avg = modified_scores.iter().sum::<f64>() / modified_scores.len() as f64;
    let modified_weight = modified_scores.len() as f64 / total as f64;
    (base + modified_avg * modified_weight) / (1.0 + modified_weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SectionComparison, SectionSeverity};
    use crate::summary::NoOpSummarizer;

    fn doc(name: &str, pages: &[&str]) -> Document {
        Document::new(name, pages.iter().map(ToString::to_string).collect())
    }

    fn comparison(change_type: SectionChangeType, score: Option<f64>) -> SectionComparison {
        SectionComparison {
            id: "c".into(),
            section_a: None,
            section_b: None,
            change_type,
            similarity_score: score,
            page_number_a: Some(1),
            page_number_b: Some(1),
            narrative_summary: String::new(),
            severity: SectionSeverity::Low,
        }
    }

    #[test]
    fn test_overall_similarity_empty_is_zero() {
        assert_eq!(overall_similarity(&[]), 0.0);
    }

    #[test]
    fn test_overall_similarity_all_unchanged_is_one() {
        let comparisons = vec![
            comparison(SectionChangeType::Unchanged, Some(1.0)),
            comparison(SectionChangeType::Unchanged, Some(1.0)),
        ];
        assert!((overall_similarity(&comparisons) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_overall_similarity_without_modified_is_base_ratio() {
        let comparisons = vec![
            comparison(SectionChangeType::Unchanged, Some(1.0)),
            comparison(SectionChangeType::Added, None),
            comparison(SectionChangeType::Deleted, None),
            comparison(SectionChangeType::Unchanged, Some(1.0)),
        ];
        assert!((overall_similarity(&comparisons) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_overall_similarity_blends_modified_average() {
        // base = 1/2, modified share = 1/2 with avg 0.8:
        // (0.5 + 0.8 * 0.5) / 1.5 = 0.6
        let comparisons = vec![
            comparison(SectionChangeType::Unchanged, Some(1.0)),
            comparison(SectionChangeType::Modified, Some(0.8)),
        ];
        assert!((overall_similarity(&comparisons) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_identical_documents_score_one() {
        let page = "1. INTRODUCTION\nThis agreement covers the full scope of work \
                    performed under the contract terms described below.\n";
        let a = doc("a", &[page]);
        let b = doc("b", &[page]);
        let result =
            compare_documents(&a, &b, &CompareConfig::default(), &NoOpSummarizer).unwrap();
        assert!((result.overall_similarity - 1.0).abs() < 1e-12);
        assert!(!result.has_changes());
        assert_eq!(result.change_statistics.unchanged_sections, 1);
    }

    #[test]
    fn test_added_page_is_reported() {
        let shared = "1. SCOPE\nThe supplier delivers the items listed in this \
                      section according to the agreed schedule of work.\n";
        let extra = "2. PENALTIES\nLate delivery incurs a penalty of 100 euros \
                     per day as described in the annex to this agreement.\n";
        let a = doc("a", &[shared]);
        let b = doc("b", &[shared, extra]);
        let result =
            compare_documents(&a, &b, &CompareConfig::default(), &NoOpSummarizer).unwrap();
        assert_eq!(result.change_statistics.added_sections, 1);
        assert_eq!(result.change_statistics.unchanged_sections, 1);
        assert!(result.has_changes());
        assert!(result.overall_similarity < 1.0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = CompareConfig::default();
        config.matching.match_threshold = 1.5;
        let a = doc("a", &["text"]);
        let err = compare_documents(&a, &a, &config, &NoOpSummarizer).unwrap_err();
        assert!(matches!(err, crate::error::DocDiffError::Config(_)));
    }

    #[test]
    fn test_summaries_filled_for_every_comparison() {
        let a = doc("a", &["1. TERMS\nThe original wording of the terms section \
                            sits here with enough text to stand alone.\n"]);
        let b = doc("b", &["1. TERMS\nA completely different wording of the terms \
                            section sits here with enough text to stand alone.\n"]);
        let result =
            compare_documents(&a, &b, &CompareConfig::default(), &NoOpSummarizer).unwrap();
        assert!(!result.section_comparisons.is_empty());
        assert!(result
            .section_comparisons
            .iter()
            .all(|c| !c.narrative_summary.is_empty()));
    }
}
