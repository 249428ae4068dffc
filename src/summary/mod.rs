//! Narrative change summaries.
//!
//! Summary generation is the only collaborator call in the engine that may
//! block. The [`NarrativeSummarizer`] trait is the seam: a production
//! implementation talks to an external model, while [`NoOpSummarizer`]
//! stands in when none is configured. Summarizer failure never aborts a
//! comparison; the affected record gets a deterministic fallback string
//! keyed by its change type.

use crate::config::SummaryConfig;
use crate::error::Result;
use crate::model::{SectionChangeType, SectionComparison};
use rayon::prelude::*;

/// Trait for narrative summary backends.
pub trait NarrativeSummarizer: Send + Sync {
    /// Produce a natural-language summary for the given prompt.
    fn summarize(&self, prompt: &str) -> Result<String>;

    /// Backend name for logging (e.g. "azure-openai").
    fn name(&self) -> &'static str;

    /// Whether the backend is configured and reachable.
    fn is_available(&self) -> bool;
}

/// Null-object summarizer used when no backend is configured. Never called
/// for actual generation; its presence routes every record to fallback text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSummarizer;

impl NoOpSummarizer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl NarrativeSummarizer for NoOpSummarizer {
    fn summarize(&self, _prompt: &str) -> Result<String> {
        Ok(String::new())
    }

    fn name(&self) -> &'static str {
        "noop"
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Fill in `narrative_summary` on every comparison.
///
/// Summarizer calls run on a dedicated pool capped at
/// `config.concurrency` threads so a slow backend cannot fan out without
/// bound. Any per-record error degrades to [`fallback_summary`].
pub fn apply_summaries(
    comparisons: &mut [SectionComparison],
    summarizer: &dyn NarrativeSummarizer,
    config: &SummaryConfig,
) {
    if !summarizer.is_available() {
        for c in comparisons.iter_mut() {
            c.narrative_summary = fallback_summary(c);
        }
        return;
    }

    let run = |c: &mut SectionComparison| {
        let prompt = build_prompt(c, config.prompt_content_chars);
        c.narrative_summary = match summarizer.summarize(&prompt) {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => fallback_summary(c),
            Err(e) => {
                tracing::debug!(
                    summarizer = summarizer.name(),
                    error = %e,
                    "summarizer call failed, using fallback text"
                );
                fallback_summary(c)
            }
        };
    };

    match rayon::ThreadPoolBuilder::new()
        .num_threads(config.concurrency)
        .build()
    {
        Ok(pool) => pool.install(|| comparisons.par_iter_mut().for_each(run)),
        Err(_) => comparisons.iter_mut().for_each(run),
    }
}

/// Build the summarization prompt for one comparison record.
#[must_use]
pub fn build_prompt(comparison: &SectionComparison, content_chars: usize) -> String {
    let title_a = comparison
        .section_a
        .as_ref()
        .map_or("Untitled", |s| title_or_untitled(&s.title));
    let title_b = comparison
        .section_b
        .as_ref()
        .map_or("Untitled", |s| title_or_untitled(&s.title));

    match comparison.change_type {
        SectionChangeType::Added => {
            let content = comparison
                .section_b
                .as_ref()
                .map_or_else(String::new, |s| truncate(&s.content, content_chars));
            format!("Briefly summarize this new section: {title_b}\nContent: {content}")
        }
        SectionChangeType::Deleted => {
            let content = comparison
                .section_a
                .as_ref()
                .map_or_else(String::new, |s| truncate(&s.content, content_chars));
            format!("Briefly summarize this removed section: {title_a}\nContent: {content}")
        }
        SectionChangeType::Modified => {
            let len_a = comparison.section_a.as_ref().map_or(0, |s| s.content.len());
            let len_b = comparison.section_b.as_ref().map_or(0, |s| s.content.len());
            format!(
                "Briefly describe changes in '{title_a}': Original had {len_a} chars, \
                 new has {len_b} chars. Key changes: {}",
                key_changes_hint(len_a, len_b)
            )
        }
        SectionChangeType::Unchanged => {
            format!("Section '{title_a}' remained unchanged.")
        }
    }
}

/// Deterministic summary used when no backend is available or a call fails.
#[must_use]
pub fn fallback_summary(comparison: &SectionComparison) -> String {
    let title_a = comparison
        .section_a
        .as_ref()
        .map_or("Untitled", |s| title_or_untitled(&s.title));
    let title_b = comparison
        .section_b
        .as_ref()
        .map_or("Untitled", |s| title_or_untitled(&s.title));

    match comparison.change_type {
        SectionChangeType::Added => format!("New section added: {title_b}"),
        SectionChangeType::Deleted => format!("Section removed: {title_a}"),
        SectionChangeType::Modified => format!("Section modified: {title_a}"),
        SectionChangeType::Unchanged => format!("Section unchanged: {title_a}"),
    }
}

fn title_or_untitled(title: &str) -> &str {
    if title.is_empty() {
        "Untitled"
    } else {
        title
    }
}

fn truncate(content: &str, max_chars: usize) -> String {
    if content.is_empty() {
        return "No content".to_string();
    }
    if content.chars().count() <= max_chars {
        content.to_string()
    } else {
        let cut: String = content.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}

/// Coarse description of how much a modified section grew or shrank.
fn key_changes_hint(len_a: usize, len_b: usize) -> &'static str {
    if len_b as f64 > len_a as f64 * 1.5 {
        "significant expansion"
    } else if (len_b as f64) < len_a as f64 * 0.5 {
        "significant reduction"
    } else if len_a.abs_diff(len_b) < 50 {
        "minor text changes"
    } else {
        "moderate changes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Section, SectionSeverity, SectionType};

    fn section(title: &str, content: &str) -> Section {
        Section::new(
            "s-1".into(),
            title.to_string(),
            1,
            SectionType::ContentSection,
            content.to_string(),
            "doc".into(),
        )
    }

    fn comparison(
        change_type: SectionChangeType,
        a: Option<Section>,
        b: Option<Section>,
    ) -> SectionComparison {
        SectionComparison {
            id: "c-1".into(),
            page_number_a: a.as_ref().map(|s| s.page_number),
            page_number_b: b.as_ref().map(|s| s.page_number),
            section_a: a,
            section_b: b,
            change_type,
            similarity_score: None,
            narrative_summary: String::new(),
            severity: SectionSeverity::Low,
        }
    }

    struct FailingSummarizer;

    impl NarrativeSummarizer for FailingSummarizer {
        fn summarize(&self, _prompt: &str) -> Result<String> {
            Err(crate::error::DocDiffError::Validation(
                "backend down".to_string(),
            ))
        }
        fn name(&self) -> &'static str {
            "failing"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    struct EchoSummarizer;

    impl NarrativeSummarizer for EchoSummarizer {
        fn summarize(&self, prompt: &str) -> Result<String> {
            Ok(format!("summary of: {prompt}"))
        }
        fn name(&self) -> &'static str {
            "echo"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_noop_routes_to_fallback() {
        let mut comparisons = vec![comparison(
            SectionChangeType::Added,
            None,
            Some(section("2. New Feature", "2. New Feature\ndetails\n")),
        )];
        apply_summaries(&mut comparisons, &NoOpSummarizer, &SummaryConfig::default());
        assert_eq!(
            comparisons[0].narrative_summary,
            "New section added: 2. New Feature"
        );
    }

    #[test]
    fn test_failing_backend_never_aborts() {
        let mut comparisons = vec![
            comparison(
                SectionChangeType::Deleted,
                Some(section("1. Old", "1. Old\ngone\n")),
                None,
            ),
            comparison(
                SectionChangeType::Unchanged,
                Some(section("", "stable body\n")),
                Some(section("", "stable body\n")),
            ),
        ];
        apply_summaries(
            &mut comparisons,
            &FailingSummarizer,
            &SummaryConfig::default(),
        );
        assert_eq!(comparisons[0].narrative_summary, "Section removed: 1. Old");
        assert_eq!(
            comparisons[1].narrative_summary,
            "Section unchanged: Untitled"
        );
    }

    #[test]
    fn test_available_backend_is_used() {
        let mut comparisons = vec![comparison(
            SectionChangeType::Modified,
            Some(section("1. Terms", "short")),
            Some(section("1. Terms", &"much longer body ".repeat(10))),
        )];
        apply_summaries(&mut comparisons, &EchoSummarizer, &SummaryConfig::default());
        assert!(comparisons[0].narrative_summary.starts_with("summary of:"));
        assert!(comparisons[0]
            .narrative_summary
            .contains("significant expansion"));
    }

    #[test]
    fn test_prompt_truncates_long_content() {
        let long = "x".repeat(500);
        let c = comparison(SectionChangeType::Added, None, Some(section("T", &long)));
        let prompt = build_prompt(&c, 200);
        assert!(prompt.contains(&format!("{}...", "x".repeat(200))));
        assert!(!prompt.contains(&"x".repeat(201)));
    }

    #[test]
    fn test_key_changes_hint_tiers() {
        assert_eq!(key_changes_hint(100, 200), "significant expansion");
        assert_eq!(key_changes_hint(200, 90), "significant reduction");
        assert_eq!(key_changes_hint(100, 120), "minor text changes");
        assert_eq!(key_changes_hint(1000, 1100), "moderate changes");
    }
}
