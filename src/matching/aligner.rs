//! Cross-document section alignment.
//!
//! Matches Document-A sections to Document-B sections by token similarity
//! and classifies each pairing as Unchanged, Modified, Added or Deleted.
//!
//! The default strategy is the historical greedy one: each A-section, in
//! original order, claims the best still-unclaimed B-section scoring above
//! the threshold. This is order-dependent and not an optimal assignment; an
//! earlier A-section can take a B-section that a later A-section matches
//! better. `MatchStrategy::Hungarian` opts into a maximum-weight bipartite
//! assignment over the same similarity matrix instead.

use super::jaccard_similarity;
use crate::config::{MatchStrategy, MatchingConfig};
use crate::model::{Section, SectionChangeType, SectionComparison, SectionSeverity};
use std::collections::HashSet;

/// Section alignment engine.
#[derive(Debug, Clone, Default)]
pub struct SectionAligner {
    config: MatchingConfig,
}

impl SectionAligner {
    #[must_use]
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    /// Align two section lists into comparison records.
    ///
    /// Every section of A and B appears in exactly one comparison. Two-sided
    /// comparisons carry a content-only similarity score and are upgraded to
    /// Unchanged above the configured threshold. Output is sorted by page
    /// (side A, falling back to side B).
    #[must_use]
    pub fn align(&self, sections_a: &[Section], sections_b: &[Section]) -> Vec<SectionComparison> {
        let pairs = match self.config.strategy {
            MatchStrategy::Greedy => self.greedy_pairs(sections_a, sections_b),
            MatchStrategy::Hungarian => self.hungarian_pairs(sections_a, sections_b),
        };

        let matched_b: HashSet<usize> = pairs.iter().map(|&(_, b)| b).collect();

        let mut comparisons = Vec::with_capacity(sections_a.len() + sections_b.len());
        let mut next_id = 0usize;

        for (ai, section_a) in sections_a.iter().enumerate() {
            if let Some(&(_, bi)) = pairs.iter().find(|&&(a, _)| a == ai) {
                comparisons.push(self.two_sided(section_a, &sections_b[bi], &mut next_id));
            } else {
                comparisons.push(one_sided(
                    Some(section_a.clone()),
                    None,
                    SectionChangeType::Deleted,
                    &mut next_id,
                ));
            }
        }

        for (bi, section_b) in sections_b.iter().enumerate() {
            if !matched_b.contains(&bi) {
                comparisons.push(one_sided(
                    None,
                    Some(section_b.clone()),
                    SectionChangeType::Added,
                    &mut next_id,
                ));
            }
        }

        comparisons.sort_by_key(SectionComparison::sort_page);
        comparisons
    }

    /// Historical first-come claiming in A-order.
    fn greedy_pairs(&self, sections_a: &[Section], sections_b: &[Section]) -> Vec<(usize, usize)> {
        let mut claimed: HashSet<usize> = HashSet::new();
        let mut pairs = Vec::new();

        for (ai, section_a) in sections_a.iter().enumerate() {
            let text_a = section_a.match_text();
            let mut best_score = self.config.match_threshold;
            let mut best: Option<usize> = None;

            for (bi, section_b) in sections_b.iter().enumerate() {
                if claimed.contains(&bi) {
                    continue;
                }
                let score = jaccard_similarity(&text_a, &section_b.match_text());
                if score > best_score {
                    best_score = score;
                    best = Some(bi);
                }
            }

            if let Some(bi) = best {
                claimed.insert(bi);
                pairs.push((ai, bi));
            }
        }

        pairs
    }

    /// Maximum-weight assignment over the above-threshold similarity matrix.
    fn hungarian_pairs(
        &self,
        sections_a: &[Section],
        sections_b: &[Section],
    ) -> Vec<(usize, usize)> {
        use pathfinding::kuhn_munkres::kuhn_munkres;
        use pathfinding::matrix::Matrix;

        if sections_a.is_empty() || sections_b.is_empty() {
            return Vec::new();
        }

        let texts_a: Vec<String> = sections_a.iter().map(Section::match_text).collect();
        let texts_b: Vec<String> = sections_b.iter().map(Section::match_text).collect();

        // Scale scores to i64 weights; below-threshold cells get zero weight
        // and are filtered from the assignment afterwards.
        let scale = 1_000_000.0;
        let n = sections_a.len().max(sections_b.len());
        let weights: Vec<Vec<i64>> = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        if i < texts_a.len() && j < texts_b.len() {
                            let score = jaccard_similarity(&texts_a[i], &texts_b[j]);
                            if score > self.config.match_threshold {
                                (score * scale) as i64
                            } else {
                                0
                            }
                        } else {
                            0
                        }
                    })
                    .collect()
            })
            .collect();

        let matrix = match Matrix::from_rows(weights) {
            Ok(m) => m,
            Err(_) => return Vec::new(),
        };
        let (_, assignment) = kuhn_munkres(&matrix);

        assignment
            .into_iter()
            .enumerate()
            .filter(|&(ai, bi)| {
                ai < sections_a.len()
                    && bi < sections_b.len()
                    && jaccard_similarity(&texts_a[ai], &texts_b[bi]) > self.config.match_threshold
            })
            .collect()
    }

    fn two_sided(
        &self,
        section_a: &Section,
        section_b: &Section,
        next_id: &mut usize,
    ) -> SectionComparison {
        // Content-only similarity decides the final classification
        let score = jaccard_similarity(&section_a.content, &section_b.content);
        let change_type = if score > self.config.unchanged_threshold {
            SectionChangeType::Unchanged
        } else {
            SectionChangeType::Modified
        };

        *next_id += 1;
        SectionComparison {
            id: format!("cmp-{next_id}"),
            page_number_a: Some(section_a.page_number),
            page_number_b: Some(section_b.page_number),
            section_a: Some(section_a.clone()),
            section_b: Some(section_b.clone()),
            change_type,
            similarity_score: Some(score),
            narrative_summary: String::new(),
            severity: SectionSeverity::Low,
        }
    }
}

fn one_sided(
    section_a: Option<Section>,
    section_b: Option<Section>,
    change_type: SectionChangeType,
    next_id: &mut usize,
) -> SectionComparison {
    *next_id += 1;
    SectionComparison {
        id: format!("cmp-{next_id}"),
        page_number_a: section_a.as_ref().map(|s| s.page_number),
        page_number_b: section_b.as_ref().map(|s| s.page_number),
        section_a,
        section_b,
        change_type,
        similarity_score: None,
        narrative_summary: String::new(),
        severity: SectionSeverity::Low,
    }
}
