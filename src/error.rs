//! Unified error types for docdiff.
//!
//! Extraction failures are the only fatal class: a comparison cannot run
//! without page text. Summarizer failures are recovered locally inside the
//! pipeline and never surface through these types.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for docdiff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DocDiffError {
    /// Errors while extracting page text from an input document
    #[error("Failed to extract document text: {context}")]
    Extract {
        context: String,
        #[source]
        source: ExtractErrorKind,
    },

    /// Errors during diff or alignment computation
    #[error("Comparison failed: {context}")]
    Diff {
        context: String,
        #[source]
        source: DiffErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific extraction error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExtractErrorKind {
    #[error("Input is not valid UTF-8 text")]
    InvalidEncoding,

    #[error("Document contains no pages")]
    EmptyDocument,

    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),
}

/// Specific diff error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DiffErrorKind {
    #[error("Section alignment failed: {0}")]
    AlignmentFailed(String),

    #[error("Assignment matrix construction failed: {0}")]
    AssignmentError(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization error: {0}")]
    Serialization(String),

    #[error("Unsupported report format: {0}")]
    UnsupportedFormat(String),
}

/// Convenience result type for docdiff operations.
pub type Result<T> = std::result::Result<T, DocDiffError>;

/// Extension trait for adding context to IO errors.
pub trait ErrorContext<T> {
    /// Attach a file path and message to an IO error.
    fn with_io_context(self, path: &std::path::Path, message: &str) -> Result<T>;
}

impl<T> ErrorContext<T> for std::result::Result<T, std::io::Error> {
    fn with_io_context(self, path: &std::path::Path, message: &str) -> Result<T> {
        self.map_err(|e| DocDiffError::Io {
            path: Some(path.to_path_buf()),
            message: message.to_string(),
            source: e,
        })
    }
}
