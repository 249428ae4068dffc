//! **A library for comparing two versions of an extracted document.**
//!
//! `docdiff` aligns the sections of two PDF-extracted text documents,
//! classifies what changed and how much it matters, and blends the result
//! into a single similarity score. It powers both a command-line interface
//! and a Rust library for programmatic integration.
//!
//! ## Key Features
//!
//! - **PDF artifact repair**: Undoes common extraction damage (ligature
//!   glyphs, dropped "ti" pairs) before any comparison runs.
//! - **Section segmentation**: Splits page text into titled sections using
//!   header heuristics for numbered, all-caps, and title-case headings.
//! - **Section alignment**: Pairs sections across documents by token-set
//!   similarity, with greedy and optimal assignment strategies.
//! - **Page-aware line diff**: A flat line-level diff that tracks each
//!   line's page on both sides.
//! - **Severity classification**: Offline heuristics grade every change by
//!   size, numeric content, and contractual keywords.
//! - **Narrative summaries**: Pluggable summarizer backends with
//!   deterministic fallback text.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The data model: [`Document`], [`model::Section`], and
//!   the [`ComparisonResult`] aggregate every comparison produces.
//! - **[`pipeline`]**: The [`compare_documents`] entry point that runs the
//!   full flow end to end.
//! - **[`matching`]**: Similarity scoring and the section aligner.
//! - **[`diff`]**: The page-aware line diff engine.
//! - **[`severity`]**: Heuristic change severity classification.
//! - **[`reports`]**: JSON and human-readable report generators.
//!
//! ## Getting Started
//!
//! ```no_run
//! use docdiff::config::CompareConfig;
//! use docdiff::extract::PlainTextExtractor;
//! use docdiff::summary::NoOpSummarizer;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let doc_a = PlainTextExtractor::from_text("v1", "1. SCOPE\nOriginal text")?;
//!     let doc_b = PlainTextExtractor::from_text("v2", "1. SCOPE\nRevised text")?;
//!
//!     let result = docdiff::compare_documents(
//!         &doc_a,
//!         &doc_b,
//!         &CompareConfig::default(),
//!         &NoOpSummarizer,
//!     )?;
//!
//!     println!("similarity: {:.2}", result.overall_similarity);
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Cast safety: usize↔f64 casts are pervasive in scoring math and all
    // values are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]

pub mod config;
pub mod diff;
pub mod error;
pub mod extract;
pub mod matching;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod reports;
pub mod segment;
pub mod severity;
pub mod summary;

pub use error::{DocDiffError, Result};
pub use model::{ComparisonResult, Document};
pub use pipeline::compare_documents;
