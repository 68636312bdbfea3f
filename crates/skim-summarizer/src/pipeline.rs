//! Summarization pipeline — orchestrates split, tokenize, filter,
//! score, and select.

use crate::frequency::{build_frequency_table, score_sentence};
use crate::selector::{assemble, select, Sentence, SummaryOrder};
use skim_core::{Result, SkimError};
use skim_nlp::{significant_tokens, SentenceSplitter, Tokenizer, Vocabulary};
use std::sync::{Arc, OnceLock};

/// Summarization outcome with per-sentence detail.
#[derive(Debug, Clone)]
pub struct SummaryResult {
    /// Selected sentences joined by single spaces. Empty when the ratio
    /// floors the selection count to zero.
    pub text: String,
    /// The selected sentences, in output order.
    pub selected: Vec<Sentence>,
    /// Sentence count of the source document.
    pub total_sentences: usize,
    /// Ratio the caller asked for, before clamping.
    pub requested_ratio: f64,
}

impl SummaryResult {
    /// Fraction of sentences retained.
    pub fn retention(&self) -> f64 {
        if self.total_sentences == 0 {
            return 0.0;
        }
        self.selected.len() as f64 / self.total_sentences as f64
    }
}

/// The extractive summarizer. Holds the read-only vocabulary plus the
/// two stateless text stages; safe to share across threads and calls.
pub struct Summarizer {
    vocab: Arc<Vocabulary>,
    splitter: SentenceSplitter,
    tokenizer: Tokenizer,
    order: SummaryOrder,
}

impl Summarizer {
    pub fn new(vocab: Arc<Vocabulary>) -> Self {
        Self {
            vocab,
            splitter: SentenceSplitter::new(),
            tokenizer: Tokenizer::new(),
            order: SummaryOrder::ByScore,
        }
    }

    /// Emit the summary in reading order instead of score order.
    pub fn with_order(mut self, order: SummaryOrder) -> Self {
        self.order = order;
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Summarize `text`, keeping roughly `ratio` of its sentences.
    ///
    /// Finite out-of-range ratios are clamped (`<= 0` yields an empty
    /// summary, `>= 1` keeps every sentence); non-finite ratios are
    /// rejected. Empty or whitespace-only input is an error.
    pub fn summarize(&self, text: &str, ratio: f64) -> Result<SummaryResult> {
        if !ratio.is_finite() {
            return Err(SkimError::InvalidRatio(ratio));
        }
        if text.trim().is_empty() {
            return Err(SkimError::EmptyInput);
        }

        let sentences = self.splitter.split(text);
        if sentences.is_empty() {
            return Err(SkimError::EmptyInput);
        }

        let document_tokens = self.tokenizer.tokenize(text);
        let document_tokens = significant_tokens(&document_tokens, &self.vocab);
        let table = build_frequency_table(&document_tokens);

        let scored: Vec<Sentence> = sentences
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let score = score_sentence(&text, &table, &self.tokenizer, &self.vocab);
                Sentence { index, text, score }
            })
            .collect();

        let total_sentences = scored.len();
        let selected = select(&scored, ratio, self.order);
        let text = assemble(&selected);

        tracing::debug!(
            total_sentences,
            selected = selected.len(),
            ratio,
            "summarized document"
        );

        Ok(SummaryResult {
            text,
            selected,
            total_sentences,
            requested_ratio: ratio,
        })
    }
}

static DEFAULT_VOCAB: OnceLock<Arc<Vocabulary>> = OnceLock::new();

/// Summarize with the process-wide English vocabulary, loaded on first
/// use and immutable afterwards.
pub fn summarize(text: &str, ratio: f64) -> Result<String> {
    let vocab = DEFAULT_VOCAB.get_or_init(|| {
        // The builtin "en" list always resolves; new() only fails on
        // unknown language codes.
        Arc::new(Vocabulary::new("en").unwrap_or_else(|_| Vocabulary::from_list(&[])))
    });
    let summarizer = Summarizer::new(Arc::clone(vocab));
    Ok(summarizer.summarize(text, ratio)?.text)
}
