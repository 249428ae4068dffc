//! Text normalization for PDF-extracted text.
//!
//! PDF extractors routinely mangle ligature glyphs: "fi" comes out as a
//! single code point, and the "ti" glyph in words like "specification" is
//! silently dropped, leaving "specifica on". Normalization repairs these
//! artifacts before any structural analysis so that headers and similarity
//! scores see clean text.
//!
//! `normalize` is pure, total and idempotent; running it twice never changes
//! the output further.

use crate::config::HeuristicTables;
use regex::Regex;
use std::sync::OnceLock;

/// The word endings whose "ti" glyph extraction drops. Each `(ending, fixed)`
/// pair rewrites `stem + ending + " on"` to `stem + fixed`.
const TI_REPAIR_ENDINGS: &[(&str, &str)] = &[
    ("ca", "cation"),
    ("za", "zation"),
    ("sa", "sation"),
    ("ra", "ration"),
    ("ta", "tation"),
    ("ma", "mation"),
    ("na", "nation"),
    ("c", "ction"),
];

fn ti_repair_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b([A-Za-z]+?)(ca|za|sa|ra|ta|ma|na|c)[ \t]+on\b")
            .expect("ti repair pattern is valid")
    })
}

/// Table-driven text normalizer.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    tables: HeuristicTables,
}

impl Normalizer {
    /// Build a normalizer over the given heuristic tables.
    #[must_use]
    pub fn new(tables: HeuristicTables) -> Self {
        Self { tables }
    }

    /// Repair ligature and extraction artifacts in `text`.
    ///
    /// Passes run in order: direct character substitutions, literal
    /// whole-phrase word fixes, then regex reconstruction of
    /// `stem + missing "ti" + " on"` endings. The regex pass only accepts a
    /// rewrite when the reconstructed word ends in a known valid suffix.
    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut out = text.to_string();

        for (from, to) in &self.tables.ligatures {
            if out.contains(from.as_str()) {
                out = out.replace(from.as_str(), to);
            }
        }

        for (broken, fixed) in &self.tables.word_fixes {
            if out.contains(broken.as_str()) {
                out = out.replace(broken.as_str(), fixed);
            }
        }

        self.repair_ti_endings(&out)
    }

    /// Title variant: normalize then trim surrounding whitespace.
    #[must_use]
    pub fn normalize_title(&self, title: &str) -> String {
        self.normalize(title).trim().to_string()
    }

    /// Rewrite `...ca on` style endings back to `...cation` etc., keeping the
    /// original text whenever the reconstruction fails the suffix check.
    fn repair_ti_endings(&self, text: &str) -> String {
        ti_repair_regex()
            .replace_all(text, |caps: &regex::Captures<'_>| {
                let stem = &caps[1];
                let ending = &caps[2];
                let fixed = TI_REPAIR_ENDINGS
                    .iter()
                    .find(|(e, _)| *e == ending)
                    .map(|(_, f)| *f);
                match fixed {
                    Some(f) => {
                        let candidate = format!("{stem}{f}");
                        if candidate.len() >= 6 && self.tables.has_valid_suffix(&candidate) {
                            candidate
                        } else {
                            caps[0].to_string()
                        }
                    }
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}
