//! Stopword vocabulary and significance filtering.
//!
//! The vocabulary is built once at startup from the `stop-words` lists
//! for the configured language and is immutable afterwards; sharing it
//! across concurrent summarization calls needs no locking.

use skim_core::{Result, SkimError};
use std::collections::HashSet;
use stop_words::LANGUAGE;

/// Fixed, read-only stopword set for one language.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    language: String,
    stopwords: HashSet<String>,
}

impl Vocabulary {
    /// Load the stopword list for a language code ("en", "de", "fr",
    /// ...). Unknown codes are a startup error, never a per-request one.
    pub fn new(language: &str) -> Result<Self> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            other => return Err(SkimError::UnknownLanguage(other.into())),
        };
        let stopwords: HashSet<String> = stop_words::get(lang).into_iter().collect();
        tracing::debug!(language, words = stopwords.len(), "loaded stopword vocabulary");
        Ok(Self {
            language: language.to_lowercase(),
            stopwords,
        })
    }

    /// Vocabulary from an explicit word list. Used in tests and by
    /// callers with a domain-specific stopword set.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            language: "custom".into(),
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Expects an already-lowercased token.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Token made up entirely of punctuation/symbol characters.
    pub fn is_punctuation(token: &str) -> bool {
        !token.is_empty() && token.chars().all(|c| !c.is_alphanumeric())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

/// Keep the tokens that are neither stopwords nor punctuation. Order and
/// duplicates are preserved; repetition is what frequency counting
/// measures.
pub fn significant_tokens(tokens: &[String], vocab: &Vocabulary) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| !vocab.is_stopword(t) && !Vocabulary::is_punctuation(t))
        .cloned()
        .collect()
}
