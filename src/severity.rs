//! Heuristic severity classification.
//!
//! Two intentionally separate taxonomies: line-level diff segments use
//! Minor/Moderate/Major, section comparisons use the coarser
//! Low/Medium/High/Critical scale. Both draw on the same signal family:
//! change size, numeric content, and contractual keywords.

use crate::config::HeuristicTables;
use crate::model::{
    ChangeKind, DiffSegment, SectionChangeType, SectionComparison, SectionSeverity, Severity,
};

/// Lightweight, offline severity classifier. Pure and deterministic.
#[derive(Debug, Clone, Default)]
pub struct SeverityClassifier {
    tables: HeuristicTables,
}

impl SeverityClassifier {
    #[must_use]
    pub fn new(tables: HeuristicTables) -> Self {
        Self { tables }
    }

    /// Assign a severity to every diff segment in place.
    pub fn classify_segments(&self, segments: &mut [DiffSegment]) {
        for seg in segments {
            seg.severity = self.classify_segment(seg);
        }
    }

    /// Severity of a single line-level segment.
    ///
    /// Unchanged lines are always Minor. Otherwise: +2 for text over 300
    /// chars (+1 over 100), +1 for any digit, +2 for a contractual keyword.
    /// Score >= 4 is Major, >= 2 Moderate, else Minor.
    #[must_use]
    pub fn classify_segment(&self, seg: &DiffSegment) -> Severity {
        if seg.kind == ChangeKind::Unchanged {
            return Severity::Minor;
        }

        let len = seg.text.len();
        let mut score = 0u32;
        if len > 300 {
            score += 2;
        } else if len > 100 {
            score += 1;
        }
        if seg.text.chars().any(|c| c.is_ascii_digit()) {
            score += 1;
        }
        if self.tables.contains_legal_keyword(&seg.text) {
            score += 2;
        }

        match score {
            4.. => Severity::Major,
            2..=3 => Severity::Moderate,
            _ => Severity::Minor,
        }
    }

    /// Severity of a section comparison, from the same signal family but on
    /// the coarser four-tier scale: content length delta, keyword presence
    /// on either side, and whether a whole section appeared or vanished.
    #[must_use]
    pub fn classify_comparison(&self, comparison: &SectionComparison) -> SectionSeverity {
        if comparison.change_type == SectionChangeType::Unchanged {
            return SectionSeverity::Low;
        }

        let len_a = comparison
            .section_a
            .as_ref()
            .map_or(0, |s| s.content.len());
        let len_b = comparison
            .section_b
            .as_ref()
            .map_or(0, |s| s.content.len());
        let delta = len_a.abs_diff(len_b);

        let mut score = 0u32;
        if delta > 600 {
            score += 2;
        } else if delta > 200 {
            score += 1;
        }

        let has_keyword = comparison
            .section_a
            .as_ref()
            .is_some_and(|s| self.tables.contains_legal_keyword(&s.content))
            || comparison
                .section_b
                .as_ref()
                .is_some_and(|s| self.tables.contains_legal_keyword(&s.content));
        if has_keyword {
            score += 2;
        }

        if matches!(
            comparison.change_type,
            SectionChangeType::Added | SectionChangeType::Deleted
        ) {
            score += 1;
        }

        match score {
            5.. => SectionSeverity::Critical,
            3..=4 => SectionSeverity::High,
            1..=2 => SectionSeverity::Medium,
            0 => SectionSeverity::Low,
        }
    }
}
