//! Section matching: similarity scoring and cross-document alignment.

mod aligner;
mod similarity;

pub use aligner::SectionAligner;
pub use similarity::jaccard_similarity;
