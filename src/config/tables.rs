//! Built-in heuristic text tables.
//!
//! The defaults reproduce the repair dictionaries tuned against real PDF
//! extractor output. They are ordinary data so callers can swap in their own
//! dictionaries for other domains or languages.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ligature code points and extraction artifacts mapped to their expansions.
const LIGATURE_REPLACEMENTS: &[(&str, &str)] = &[
    ("\u{FB01}", "fi"),
    ("\u{FB02}", "fl"),
    ("\u{FB03}", "ffi"),
    ("\u{FB04}", "ffl"),
    ("\u{FB00}", "ff"),
    ("\u{FB05}", "ft"),
    ("\u{FB06}", "st"),
    // Extraction replacement character
    ("\u{FFFD}", ""),
    // Some extractors emit these where a "ti" or "ft" glyph was
    ("\u{019F}", "ti"),
    ("\u{0275}", "ti"),
    ("\u{0284}", "ft"),
];

/// Words whose "ti" infix is commonly dropped by extraction. The broken
/// forms (spaced and fused, in three casings) are generated from these.
const TI_DROPPED_WORDS: &[&str] = &[
    "specification",
    "authentication",
    "authorization",
    "introduction",
    "information",
    "application",
    "configuration",
    "administration",
    "registration",
    "verification",
    "certification",
    "notification",
    "modification",
    "classification",
    "identification",
    "organization",
    "evaluation",
    "implementation",
    "documentation",
    "optimization",
    "categorization",
    "generation",
    "functional",
    "traditional",
    "optional",
    "additional",
    "conditional",
    "operational",
    "educational",
    "international",
    "reporting",
    "supporting",
    "importing",
    "exporting",
    "existing",
];

/// Endings a reconstructed word must carry for a regex repair to be accepted.
const VALID_WORD_SUFFIXES: &[&str] = &[
    "tion", "sion", "ation", "ication", "ization", "ational", "tional", "ing", "ment", "ness",
    "able", "ible", "ful", "ive", "ory", "ary", "ery", "ual", "ial", "ous", "ious",
];

/// Contractual terms that raise change severity. Stems are matched as
/// case-insensitive substrings, so "indemnif" covers indemnify/indemnification.
const LEGAL_KEYWORDS: &[&str] = &[
    "shall",
    "must",
    "notwithstanding",
    "liability",
    "indemnif",
    "warrant",
    "penalty",
    "terminat",
];

/// Lowercase words allowed between capitalized words in a title-case header.
const TITLE_STOP_WORDS: &[&str] = &[
    "and", "or", "of", "the", "a", "an", "in", "on", "at", "to", "for", "with",
];

/// Immutable heuristic dictionaries used by the normalizer, segmenter and
/// severity classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicTables {
    /// Direct character substitutions, applied first and in order
    pub ligatures: Vec<(String, String)>,
    /// Literal whole-phrase corrections, applied after ligatures
    pub word_fixes: IndexMap<String, String>,
    /// Suffix allow-list validating regex-based word reconstruction
    pub valid_suffixes: Vec<String>,
    /// Severity keyword stems
    pub legal_keywords: Vec<String>,
    /// Stop words permitted lowercase inside title-case headers
    pub stop_words: Vec<String>,
}

impl Default for HeuristicTables {
    fn default() -> Self {
        Self {
            ligatures: LIGATURE_REPLACEMENTS
                .iter()
                .map(|&(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            word_fixes: build_word_fixes(),
            valid_suffixes: VALID_WORD_SUFFIXES.iter().map(ToString::to_string).collect(),
            legal_keywords: LEGAL_KEYWORDS.iter().map(ToString::to_string).collect(),
            stop_words: TITLE_STOP_WORDS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl HeuristicTables {
    /// True when `word` (lowercase comparison) ends in an allowed suffix.
    #[must_use]
    pub fn has_valid_suffix(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.valid_suffixes.iter().any(|s| lower.ends_with(s))
    }

    /// True when `text` contains any legal keyword stem, case-insensitive.
    #[must_use]
    pub fn contains_legal_keyword(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.legal_keywords.iter().any(|k| lower.contains(k))
    }

    /// True when `word` is an allowed lowercase title word.
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.iter().any(|w| w == &word.to_lowercase())
    }
}

/// Expand the base word list into broken-form -> fixed-form literal pairs.
///
/// For each word, the broken spaced form replaces every "ti" infix with a
/// space ("specification" -> "specifica on") and the fused form drops it
/// entirely ("specificaon"), each in lowercase, Capitalized and UPPER
/// casings. Insertion order is preserved so longer entries added first win.
fn build_word_fixes() -> IndexMap<String, String> {
    let mut fixes = IndexMap::new();
    for word in TI_DROPPED_WORDS {
        let spaced = word.replace("ti", " ");
        let fused = word.replace("ti", "");
        for broken in [spaced, fused] {
            fixes.insert(broken.clone(), (*word).to_string());
            fixes.insert(capitalize(&broken), capitalize(word));
            fixes.insert(broken.to_uppercase(), word.to_uppercase());
        }
    }
    fixes
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
