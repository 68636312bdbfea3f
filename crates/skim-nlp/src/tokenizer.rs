//! Word tokenizer — lowercase word tokens, punctuation kept as
//! standalone tokens.

use regex::Regex;
use std::sync::LazyLock;

// Word runs (with internal apostrophes, so "don't" stays whole) or a
// single non-word symbol. Punctuation is emitted as its own token and
// removed downstream rather than merged into neighbors.
static RE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+(?:'\w+)*|[^\w\s]").unwrap());

/// Splits text into ordered lowercase tokens.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize the whole input. Works on documents and on single
    /// sentences alike.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        RE_TOKEN
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect()
    }
}
