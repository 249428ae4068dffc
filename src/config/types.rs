//! Configuration types for the comparison engine.

use super::HeuristicTables;
use crate::error::{DocDiffError, Result};
use serde::{Deserialize, Serialize};

/// How Document-A sections are assigned to Document-B sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    /// First-come greedy claiming in A-order. Order-dependent; an earlier
    /// A-section can claim a B-section that would have been a better match
    /// for a later one. Kept as the default for behavioral compatibility.
    #[default]
    Greedy,
    /// Maximum-weight assignment over the above-threshold similarity matrix
    /// (Kuhn-Munkres). Opt-in.
    Hungarian,
}

/// Section matching thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Minimum title+content similarity for an A-section to claim a B-section
    pub match_threshold: f64,
    /// Content similarity above which a Modified pairing is upgraded to Unchanged
    pub unchanged_threshold: f64,
    /// Assignment strategy
    pub strategy: MatchStrategy,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            match_threshold: 0.3,
            unchanged_threshold: 0.95,
            strategy: MatchStrategy::Greedy,
        }
    }
}

/// Section segmentation limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Sections with less content than this merge into the preceding
    /// same-page section
    pub min_section_chars: usize,
    /// Lines longer than this are never headers
    pub max_header_chars: usize,
    /// Maximum word count for a title-case header line
    pub max_title_words: usize,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            min_section_chars: 50,
            max_header_chars: 100,
            max_title_words: 8,
        }
    }
}

/// Line diff tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Normalized edit similarity above which a deleted/inserted line pair
    /// inside a replace block is reported as a single Modified segment
    pub modified_pair_threshold: f64,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            modified_pair_threshold: 0.4,
        }
    }
}

/// Narrative summary generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Maximum concurrent outstanding summarizer calls
    pub concurrency: usize,
    /// Characters of section content included in a summary prompt
    pub prompt_content_chars: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            concurrency: 4,
            prompt_content_chars: 200,
        }
    }
}

/// Top-level configuration for one comparison.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    pub matching: MatchingConfig,
    pub segmentation: SegmentationConfig,
    pub diff: DiffConfig,
    pub summary: SummaryConfig,
    pub tables: HeuristicTables,
}

impl CompareConfig {
    /// Check value ranges before running a comparison.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.matching.match_threshold) {
            return Err(DocDiffError::Config(format!(
                "match_threshold must be in [0, 1], got {}",
                self.matching.match_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.matching.unchanged_threshold) {
            return Err(DocDiffError::Config(format!(
                "unchanged_threshold must be in [0, 1], got {}",
                self.matching.unchanged_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.diff.modified_pair_threshold) {
            return Err(DocDiffError::Config(format!(
                "modified_pair_threshold must be in [0, 1], got {}",
                self.diff.modified_pair_threshold
            )));
        }
        if self.summary.concurrency == 0 {
            return Err(DocDiffError::Config(
                "summary concurrency must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(CompareConfig::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let mut config = CompareConfig::default();
        config.matching.match_threshold = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let mut config = CompareConfig::default();
        config.summary.concurrency = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = CompareConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: CompareConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.matching.match_threshold, 0.3);
        assert_eq!(back.matching.strategy, MatchStrategy::Greedy);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: CompareConfig =
            serde_json::from_str(r#"{"matching": {"strategy": "hungarian"}}"#).unwrap();
        assert_eq!(config.matching.strategy, MatchStrategy::Hungarian);
        assert_eq!(config.matching.match_threshold, 0.3);
        assert_eq!(config.segmentation.min_section_chars, 50);
    }
}
