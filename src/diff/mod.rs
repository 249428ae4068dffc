//! Page-aware line diff engine.
//!
//! Produces a flat, page-ordered sequence of line-level segments between two
//! documents. This view is independent of section structure; it exists for
//! fine-grained inspection alongside the section alignment.

mod lcs;

use crate::config::DiffConfig;
use crate::model::{ChangeKind, DiffSegment, Document, Severity};
use lcs::LineOp;
use strsim::normalized_levenshtein;

/// Line diff engine over per-page document text.
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    config: DiffConfig,
}

impl DiffEngine {
    #[must_use]
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    /// Compute line-level segments between the two documents.
    ///
    /// For each page index: pages present on both sides are line-diffed;
    /// one-sided pages emit pure deletions or insertions carrying only that
    /// side's page number. Blank lines are dropped. Output follows page
    /// order, then diff order within a page.
    #[must_use]
    pub fn diff(&self, doc_a: &Document, doc_b: &Document) -> Vec<DiffSegment> {
        let max_pages = doc_a.pages.len().max(doc_b.pages.len());
        let mut segments = Vec::new();

        for page_index in 0..max_pages {
            let page_a = doc_a.pages.get(page_index).map_or("", String::as_str);
            let page_b = doc_b.pages.get(page_index).map_or("", String::as_str);
            let page_number = (page_index + 1) as u32;

            let a_blank = page_a.trim().is_empty();
            let b_blank = page_b.trim().is_empty();

            if a_blank && b_blank {
                continue;
            }
            if !a_blank && !b_blank {
                self.diff_page_pair(page_a, page_b, page_number, &mut segments);
            } else if !a_blank {
                Self::one_sided(page_a, ChangeKind::Deleted, page_number, &mut segments);
            } else {
                Self::one_sided(page_b, ChangeKind::Inserted, page_number, &mut segments);
            }
        }

        segments
    }

    fn diff_page_pair(
        &self,
        page_a: &str,
        page_b: &str,
        page_number: u32,
        segments: &mut Vec<DiffSegment>,
    ) {
        let lines_a: Vec<&str> = page_a.lines().collect();
        let lines_b: Vec<&str> = page_b.lines().collect();
        let ops = lcs::diff_lines(&lines_a, &lines_b);

        let mut pos = 0;
        while pos < ops.len() {
            match &ops[pos] {
                LineOp::Unchanged(text) => {
                    push_segment(segments, ChangeKind::Unchanged, text, page_number);
                    pos += 1;
                }
                LineOp::Deleted(_) => {
                    // Collect the replace block: a run of deletions followed
                    // by a run of insertions.
                    let mut deleted = Vec::new();
                    while let Some(LineOp::Deleted(text)) = ops.get(pos) {
                        deleted.push(*text);
                        pos += 1;
                    }
                    let mut inserted = Vec::new();
                    while let Some(LineOp::Inserted(text)) = ops.get(pos) {
                        inserted.push(*text);
                        pos += 1;
                    }
                    self.emit_replace_block(&deleted, &inserted, page_number, segments);
                }
                LineOp::Inserted(text) => {
                    push_segment(segments, ChangeKind::Inserted, text, page_number);
                    pos += 1;
                }
            }
        }
    }

    /// Pair a delete run with an insert run index-wise; similar pairs become
    /// a single Modified segment carrying both page numbers, the rest stay
    /// separate deletions and insertions.
    fn emit_replace_block(
        &self,
        deleted: &[&str],
        inserted: &[&str],
        page_number: u32,
        segments: &mut Vec<DiffSegment>,
    ) {
        let paired = deleted.len().min(inserted.len());

        for i in 0..paired {
            let old = deleted[i];
            let new = inserted[i];
            if normalized_levenshtein(old, new) >= self.config.modified_pair_threshold {
                push_segment(segments, ChangeKind::Modified, new, page_number);
            } else {
                push_segment(segments, ChangeKind::Deleted, old, page_number);
                push_segment(segments, ChangeKind::Inserted, new, page_number);
            }
        }
        for old in &deleted[paired..] {
            push_segment(segments, ChangeKind::Deleted, old, page_number);
        }
        for new in &inserted[paired..] {
            push_segment(segments, ChangeKind::Inserted, new, page_number);
        }
    }

    fn one_sided(
        page_text: &str,
        kind: ChangeKind,
        page_number: u32,
        segments: &mut Vec<DiffSegment>,
    ) {
        for line in page_text.lines() {
            let line = line.trim();
            if !line.is_empty() {
                push_segment(segments, kind, line, page_number);
            }
        }
    }
}

/// Append a segment with page attribution derived from its kind: `page_a`
/// unless pure insertion, `page_b` unless pure deletion. Blank lines are
/// dropped.
fn push_segment(segments: &mut Vec<DiffSegment>, kind: ChangeKind, text: &str, page_number: u32) {
    if text.trim().is_empty() {
        return;
    }
    segments.push(DiffSegment {
        kind,
        text: text.to_string(),
        page_number_a: (kind != ChangeKind::Inserted).then_some(page_number),
        page_number_b: (kind != ChangeKind::Deleted).then_some(page_number),
        severity: Severity::Minor,
    });
}
