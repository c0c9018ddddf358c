//! Tokenization shared by skill matching and similarity scoring

use regex::Regex;
use std::collections::HashSet;

/// Splits text into terms.
///
/// Two tokenizers live here because the two consumers disagree on what a
/// word is: skill matching compares whole whitespace-separated tokens, while
/// the TF-IDF analyzer keeps runs of two or more word characters.
#[derive(Debug, Clone)]
pub struct TextProcessor {
    term_regex: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        let term_regex = Regex::new(r"\b\w\w+\b").expect("Invalid term regex");

        Self { term_regex }
    }

    /// Lower-cased analyzer terms in document order, repeats included.
    ///
    /// Single-character words are dropped and punctuation splits words, so
    /// `"Node.js"` yields `["node", "js"]`.
    pub fn terms(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.term_regex
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Set of lower-cased whitespace-separated tokens.
    ///
    /// Punctuation stays attached: `"Python,"` is not the token `"python"`.
    pub fn word_set(text: &str) -> HashSet<String> {
        text.split_whitespace().map(|w| w.to_lowercase()).collect()
    }
}
