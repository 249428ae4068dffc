//! Titled document sections produced by the segmenter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category inferred from a section's title.
///
/// Serialized names match the strings existing consumers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionType {
    Introduction,
    Conclusion,
    #[serde(rename = "Table/Figure")]
    TableFigure,
    #[serde(rename = "Numbered Section")]
    NumberedSection,
    #[serde(rename = "Major Header")]
    MajorHeader,
    #[serde(rename = "Content Section")]
    ContentSection,
}

/// A titled, contiguous block of document text inferred from heading
/// heuristics. Frozen at creation; `word_count` is derived from the final
/// content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Opaque id, unique within the owning document
    pub id: String,
    /// Header line the section was opened with; empty for headerless pages
    pub title: String,
    /// 1-based page the section starts on
    pub page_number: u32,
    pub section_type: SectionType,
    /// Raw text body, including the title line
    pub content: String,
    pub document_name: String,
    pub word_count: usize,
    pub extracted_at: DateTime<Utc>,
}

impl Section {
    /// Freeze a section from its accumulated parts.
    #[must_use]
    pub fn new(
        id: String,
        title: String,
        page_number: u32,
        section_type: SectionType,
        content: String,
        document_name: String,
    ) -> Self {
        let word_count = content.split_whitespace().count();
        Self {
            id,
            title,
            page_number,
            section_type,
            content,
            document_name,
            word_count,
            extracted_at: Utc::now(),
        }
    }

    /// Title and content joined, the text the aligner scores candidates on.
    #[must_use]
    pub fn match_text(&self) -> String {
        format!("{} {}", self.title, self.content)
    }
}
