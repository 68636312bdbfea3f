//! Word frequency table and sentence scoring.

use skim_nlp::{significant_tokens, Tokenizer, Vocabulary};
use std::collections::HashMap;

/// Count occurrences of each distinct significant token across the whole
/// document. The table never holds stopwords, punctuation tokens, or
/// zero counts; iteration order of the map is not meaningful and no
/// consumer may rely on it.
pub fn build_frequency_table(document_tokens: &[String]) -> HashMap<String, u64> {
    let mut table: HashMap<String, u64> = HashMap::new();
    for token in document_tokens {
        *table.entry(token.clone()).or_insert(0) += 1;
    }
    table
}

/// Score one sentence against the document-wide table: tokenize its own
/// text, filter against the same vocabulary, and sum table counts. A
/// token appearing twice contributes twice; a sentence with no
/// significant word scores 0.
pub fn score_sentence(
    sentence: &str,
    table: &HashMap<String, u64>,
    tokenizer: &Tokenizer,
    vocab: &Vocabulary,
) -> u64 {
    let tokens = tokenizer.tokenize(sentence);
    significant_tokens(&tokens, vocab)
        .iter()
        .map(|t| table.get(t).copied().unwrap_or(0))
        .sum()
}
