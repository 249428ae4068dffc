//! Comparison configuration.
//!
//! All heuristic knobs live here: matching thresholds, segmentation limits,
//! summary concurrency, and the heuristic text tables (ligature map,
//! word-fix dictionary, legal keyword list). Tables are plain immutable data
//! so tests can run the engine with alternate dictionaries.

mod tables;
mod types;

pub use tables::HeuristicTables;
pub use types::{
    CompareConfig, DiffConfig, MatchStrategy, MatchingConfig, SegmentationConfig, SummaryConfig,
};
