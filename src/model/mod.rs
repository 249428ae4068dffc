//! Core data model for document comparison.
//!
//! All types here are created fresh per comparison request and live only for
//! that request. JSON field names are camelCase to stay compatible with
//! existing report consumers.

mod document;
mod result;
mod section;

pub use document::Document;
pub use result::{
    ChangeKind, ChangeStatistics, ComparisonResult, DiffSegment, SectionComparison,
    SectionChangeType, SectionSeverity, Severity,
};
pub use section::{Section, SectionType};
