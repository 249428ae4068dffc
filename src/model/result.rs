//! Comparison result structures.

use super::Section;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Change type for a single line-level diff segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    Unchanged,
    Inserted,
    Deleted,
    Modified,
}

/// Change type for a section pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionChangeType {
    Unchanged,
    Added,
    Deleted,
    Modified,
}

/// Line-level severity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Minor,
    Moderate,
    Major,
}

/// Section-level severity tier. Intentionally a separate, coarser taxonomy
/// from the line-level [`Severity`] scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// A single line-level change unit. A line physically exists on at most one
/// page per document, so each side carries at most one page number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSegment {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub text: String,
    /// Set unless the segment is a pure insertion
    pub page_number_a: Option<u32>,
    /// Set unless the segment is a pure deletion
    pub page_number_b: Option<u32>,
    pub severity: Severity,
}

/// The pairing of a Document-A section with a Document-B section (or the
/// absence of one side for Added/Deleted).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionComparison {
    pub id: String,
    pub section_a: Option<Section>,
    pub section_b: Option<Section>,
    pub change_type: SectionChangeType,
    /// Content-only similarity; only set when both sides are present
    pub similarity_score: Option<f64>,
    pub page_number_a: Option<u32>,
    pub page_number_b: Option<u32>,
    pub narrative_summary: String,
    pub severity: SectionSeverity,
}

impl SectionComparison {
    /// Page used for ordering comparisons in the final result.
    #[must_use]
    pub fn sort_page(&self) -> u32 {
        self.page_number_a.or(self.page_number_b).unwrap_or(0)
    }
}

/// Counts of section comparisons partitioned by change type.
///
/// Serialization also emits the derived `totalSections` and
/// `changePercentage` fields existing report consumers read; both are
/// recomputed on deserialization rather than trusted from the payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStatistics {
    pub added_sections: usize,
    pub deleted_sections: usize,
    pub modified_sections: usize,
    pub unchanged_sections: usize,
}

impl Serialize for ChangeStatistics {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ChangeStatistics", 6)?;
        state.serialize_field("addedSections", &self.added_sections)?;
        state.serialize_field("deletedSections", &self.deleted_sections)?;
        state.serialize_field("modifiedSections", &self.modified_sections)?;
        state.serialize_field("unchangedSections", &self.unchanged_sections)?;
        state.serialize_field("totalSections", &self.total_sections())?;
        state.serialize_field("changePercentage", &self.change_percentage())?;
        state.end()
    }
}

impl ChangeStatistics {
    /// Tally comparisons by change type.
    #[must_use]
    pub fn from_comparisons(comparisons: &[SectionComparison]) -> Self {
        let mut stats = Self::default();
        for c in comparisons {
            match c.change_type {
                SectionChangeType::Added => stats.added_sections += 1,
                SectionChangeType::Deleted => stats.deleted_sections += 1,
                SectionChangeType::Modified => stats.modified_sections += 1,
                SectionChangeType::Unchanged => stats.unchanged_sections += 1,
            }
        }
        stats
    }

    #[must_use]
    pub fn total_sections(&self) -> usize {
        self.added_sections + self.deleted_sections + self.modified_sections
            + self.unchanged_sections
    }

    /// Percentage of comparisons that carry any change.
    #[must_use]
    pub fn change_percentage(&self) -> f64 {
        let total = self.total_sections();
        if total == 0 {
            return 0.0;
        }
        let changed = self.added_sections + self.deleted_sections + self.modified_sections;
        changed as f64 / total as f64 * 100.0
    }
}

/// Aggregate root for one comparison request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub document_a_name: String,
    pub document_b_name: String,
    pub sections_a: Vec<Section>,
    pub sections_b: Vec<Section>,
    pub section_comparisons: Vec<SectionComparison>,
    /// Blended similarity in [0.0, 1.0]
    pub overall_similarity: f64,
    pub change_statistics: ChangeStatistics,
    pub diff_segments: Vec<DiffSegment>,
    pub timestamp: DateTime<Utc>,
}

impl ComparisonResult {
    /// True when any comparison or diff segment carries a change.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        let stats = &self.change_statistics;
        stats.added_sections + stats.deleted_sections + stats.modified_sections > 0
            || self
                .diff_segments
                .iter()
                .any(|s| s.kind != ChangeKind::Unchanged)
    }
}
