//! Tokenizer — lowercases text and extracts deduplicated alphabetic word tokens.
//!
//! Deliberately naive: maximal runs of ASCII letters only. Numbers,
//! punctuation-joined compounds ("C++", "Node.js") and multi-word skills
//! ("machine learning") are never captured as single tokens. Presence/absence
//! only; no frequency, no stemming.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD_PATTERN.get_or_init(|| Regex::new(r"\b[A-Za-z]+\b").unwrap())
}

/// Tokenizes arbitrary text into a set of lowercase alphabetic words.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    let lowered = text.to_lowercase();
    word_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
