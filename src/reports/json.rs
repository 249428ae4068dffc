//! JSON report output.

use super::ReportGenerator;
use crate::error::{DocDiffError, ReportErrorKind, Result};
use crate::model::ComparisonResult;

/// Serializes the full comparison result as JSON. Field names are camelCase
/// for compatibility with existing consumers of this format.
#[derive(Debug, Clone, Copy)]
pub struct JsonReporter {
    pretty: bool,
}

impl JsonReporter {
    #[must_use]
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    #[must_use]
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, result: &ComparisonResult) -> Result<String> {
        let render = if self.pretty {
            serde_json::to_string_pretty(result)
        } else {
            serde_json::to_string(result)
        };
        render.map_err(|e| DocDiffError::Report {
            context: "serializing comparison result".to_string(),
            source: ReportErrorKind::Serialization(e.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChangeStatistics;
    use chrono::Utc;

    fn result() -> ComparisonResult {
        ComparisonResult {
            document_a_name: "contract-v1".into(),
            document_b_name: "contract-v2".into(),
            sections_a: vec![],
            sections_b: vec![],
            section_comparisons: vec![],
            overall_similarity: 0.75,
            change_statistics: ChangeStatistics::default(),
            diff_segments: vec![],
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_json_uses_camel_case_fields() {
        let json = JsonReporter::pretty().generate(&result()).unwrap();
        assert!(json.contains("\"documentAName\""));
        assert!(json.contains("\"overallSimilarity\""));
        assert!(json.contains("\"changeStatistics\""));
        assert!(json.contains("\"sectionComparisons\""));
    }

    #[test]
    fn test_compact_is_single_line() {
        let json = JsonReporter::compact().generate(&result()).unwrap();
        assert_eq!(json.lines().count(), 1);
    }

    #[test]
    fn test_round_trips_through_serde() {
        let json = JsonReporter::compact().generate(&result()).unwrap();
        let parsed: ComparisonResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.document_b_name, "contract-v2");
        assert!((parsed.overall_similarity - 0.75).abs() < 1e-12);
    }
}
