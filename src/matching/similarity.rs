//! Token-set similarity scoring.

use std::collections::HashSet;

/// Jaccard similarity over lower-cased whitespace-tokenized word sets:
/// `|intersection| / |union|`.
///
/// Symmetric and deterministic; `jaccard_similarity(x, x)` is 1.0 for any x.
/// Two empty inputs score 1.0 (identical empty token sets); one empty side
/// scores 0.0.
#[must_use]
pub fn jaccard_similarity(text_a: &str, text_b: &str) -> f64 {
    let lower_a = text_a.to_lowercase();
    let lower_b = text_b.to_lowercase();

    let tokens_a: HashSet<&str> = lower_a.split_whitespace().collect();
    let tokens_b: HashSet<&str> = lower_b.split_whitespace().collect();

    if tokens_a.is_empty() && tokens_b.is_empty() {
        return 1.0;
    }
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let intersection = tokens_a.intersection(&tokens_b).count();
    let union = tokens_a.union(&tokens_b).count();

    intersection as f64 / union as f64
}
