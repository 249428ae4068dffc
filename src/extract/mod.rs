//! Document text extraction.
//!
//! The engine operates on page text that has already been pulled out of the
//! source files. [`TextExtractor`] is the seam for format-specific readers;
//! [`PlainTextExtractor`] handles pre-extracted UTF-8 text where pages are
//! separated by form feed characters, the convention used by most
//! PDF-to-text tools.

use crate::error::{DocDiffError, ErrorContext, ExtractErrorKind, Result};
use crate::model::Document;
use std::fs;
use std::path::Path;

/// Page separator emitted by pdftotext and friends.
const PAGE_SEPARATOR: char = '\u{0C}';

/// Trait for turning an input file into a per-page [`Document`].
pub trait TextExtractor {
    /// Extract page text from the file at `path`. The document name is the
    /// file stem.
    fn extract(&self, path: &Path) -> Result<Document>;

    /// Whether this extractor can handle the given path.
    fn supports(&self, path: &Path) -> bool;
}

/// Extractor for pre-extracted plain text with form-feed page breaks.
///
/// A file with no form feed is a single-page document. A file that is empty
/// or all whitespace is rejected, there is nothing to compare.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Split raw text into a document without touching the filesystem.
    pub fn from_text(name: &str, text: &str) -> Result<Document> {
        if text.trim().is_empty() {
            return Err(DocDiffError::Extract {
                context: name.to_string(),
                source: ExtractErrorKind::EmptyDocument,
            });
        }
        let pages: Vec<String> = text
            .split(PAGE_SEPARATOR)
            .map(ToString::to_string)
            .collect();
        Ok(Document::new(name, pages))
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<Document> {
        let bytes = fs::read(path).with_io_context(path, "reading document")?;
        let text = String::from_utf8(bytes).map_err(|_| DocDiffError::Extract {
            context: path.display().to_string(),
            source: ExtractErrorKind::InvalidEncoding,
        })?;

        let name = path
            .file_stem()
            .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned());
        Self::from_text(&name, &text)
    }

    fn supports(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => matches!(ext.to_ascii_lowercase().as_str(), "txt" | "text"),
            None => true,
        }
    }
}

/// Pick an extractor for `path`, or fail with an unsupported-format error.
pub fn extractor_for(path: &Path) -> Result<Box<dyn TextExtractor>> {
    let plain = PlainTextExtractor::new();
    if plain.supports(path) {
        return Ok(Box::new(plain));
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_string();
    Err(DocDiffError::Extract {
        context: path.display().to_string(),
        source: ExtractErrorKind::UnsupportedFormat(ext),
    })
}
