//! Extracted document representation.

use serde::{Deserialize, Serialize};

/// A document as delivered by the extraction collaborator: an ordered list
/// of per-page plain-text strings. Immutable once constructed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Display name (usually the source file name)
    pub name: String,
    /// Ordered page texts; index 0 is page 1
    pub pages: Vec<String>,
    /// All pages joined, for whole-document operations
    pub full_text: String,
}

impl Document {
    /// Build a document from its page texts. `full_text` is derived.
    #[must_use]
    pub fn new(name: impl Into<String>, pages: Vec<String>) -> Self {
        let full_text = pages.join("\n");
        Self {
            name: name.into(),
            pages,
            full_text,
        }
    }

    /// Number of pages in the document.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// True when no page carries any non-whitespace text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.pages.iter().all(|p| p.trim().is_empty())
    }

    /// Return a copy with every page run through the given text transform.
    #[must_use]
    pub fn map_pages<F: Fn(&str) -> String>(&self, f: F) -> Self {
        Self::new(self.name.clone(), self.pages.iter().map(|p| f(p)).collect())
    }
}
