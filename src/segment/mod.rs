//! Section segmentation.
//!
//! Splits normalized page text into titled sections using header heuristics:
//! numbered headings, all-uppercase lines, and short title-case lines. Short
//! fragments are merged into the preceding section afterwards so single
//! stray lines do not become sections of their own.

use crate::config::{HeuristicTables, SegmentationConfig};
use crate::model::{Section, SectionType};
use crate::normalize::Normalizer;
use regex::Regex;
use std::sync::OnceLock;

/// Numbered heading prefix (`1.`, `1.1`, `IV.`, `A.`) followed by a capital.
fn numbered_heading_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(?:\d+\.(?:\d+\.?)?|[IVXLC]+\.|[A-Z]\.)\s*[A-Z]")
            .expect("heading pattern is valid")
    })
}

/// Leading `1.` style numeric prefix, used for section typing.
fn numeric_prefix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*\d+\.").expect("numeric prefix pattern is valid"))
}

/// Header-heuristic section segmenter.
#[derive(Debug, Clone)]
pub struct Segmenter {
    config: SegmentationConfig,
    tables: HeuristicTables,
    normalizer: Normalizer,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(SegmentationConfig::default(), HeuristicTables::default())
    }
}

/// Accumulates the currently open section during the line scan.
struct OpenSection {
    title: String,
    section_type: SectionType,
    content: String,
}

impl OpenSection {
    fn untitled() -> Self {
        Self {
            title: String::new(),
            section_type: SectionType::ContentSection,
            content: String::new(),
        }
    }
}

impl Segmenter {
    #[must_use]
    pub fn new(config: SegmentationConfig, tables: HeuristicTables) -> Self {
        let normalizer = Normalizer::new(tables.clone());
        Self {
            config,
            tables,
            normalizer,
        }
    }

    /// Segment one page of text into sections.
    ///
    /// A page with no header-like line yields exactly one section with an
    /// empty title; an empty or whitespace-only page yields none.
    #[must_use]
    pub fn segment_page(
        &self,
        page_text: &str,
        page_number: u32,
        document_name: &str,
    ) -> Vec<Section> {
        let mut sections = Vec::new();
        let mut open = OpenSection::untitled();
        let mut index = 0usize;

        for raw_line in page_text.lines() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            if self.is_likely_header(line) {
                if !open.content.is_empty() {
                    sections.push(self.freeze(open, page_number, document_name, &mut index));
                }
                open = OpenSection {
                    title: self.normalizer.normalize_title(line),
                    section_type: self.determine_section_type(line),
                    content: format!("{line}\n"),
                };
            } else {
                open.content.push_str(line);
                open.content.push('\n');
            }
        }

        if !open.content.is_empty() {
            sections.push(self.freeze(open, page_number, document_name, &mut index));
        }

        sections
    }

    /// Post-pass over a whole document's sections: fragments shorter than the
    /// configured minimum merge into the immediately preceding section when
    /// both sit on the same page.
    #[must_use]
    pub fn merge_short_sections(&self, sections: Vec<Section>) -> Vec<Section> {
        let mut merged: Vec<Section> = Vec::with_capacity(sections.len());

        for section in sections {
            if section.content.len() < self.config.min_section_chars {
                if let Some(last) = merged.last_mut() {
                    if last.page_number == section.page_number {
                        let mut combined = last.content.clone();
                        combined.push('\n');
                        combined.push_str(&section.content);
                        *last = Section::new(
                            last.id.clone(),
                            last.title.clone(),
                            last.page_number,
                            last.section_type,
                            combined,
                            last.document_name.clone(),
                        );
                        continue;
                    }
                }
            }
            merged.push(section);
        }

        merged
    }

    /// Header heuristics, cheapest first.
    fn is_likely_header(&self, line: &str) -> bool {
        if line.len() > self.config.max_header_chars {
            return false;
        }

        if numbered_heading_regex().is_match(line) {
            return true;
        }

        // All-caps line of letters
        if line.len() > 3 && line == line.to_uppercase() && line.chars().any(char::is_alphabetic) {
            return true;
        }

        // Short title-case line: every word capitalized or a stop word
        let words: Vec<&str> = line.split_whitespace().collect();
        if !words.is_empty()
            && words.len() <= self.config.max_title_words
            && words.iter().all(|w| {
                w.chars().next().is_some_and(char::is_uppercase) || self.tables.is_stop_word(w)
            })
        {
            return true;
        }

        false
    }

    /// Infer the section category from its title line.
    fn determine_section_type(&self, title: &str) -> SectionType {
        let lower = title.to_lowercase();

        if lower.contains("introduction") || lower.contains("overview") {
            SectionType::Introduction
        } else if lower.contains("conclusion") || lower.contains("summary") {
            SectionType::Conclusion
        } else if lower.contains("table") || lower.contains("figure") {
            SectionType::TableFigure
        } else if numeric_prefix_regex().is_match(title) {
            SectionType::NumberedSection
        } else if title == title.to_uppercase() {
            SectionType::MajorHeader
        } else {
            SectionType::ContentSection
        }
    }

    fn freeze(
        &self,
        open: OpenSection,
        page_number: u32,
        document_name: &str,
        index: &mut usize,
    ) -> Section {
        *index += 1;
        Section::new(
            format!("{document_name}-p{page_number}-s{index}"),
            open.title,
            page_number,
            open.section_type,
            open.content,
            document_name.to_string(),
        )
    }
}
