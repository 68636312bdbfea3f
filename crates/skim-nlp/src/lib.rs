//! Natural language components for Skim.
//!
//! Three building blocks, all pure:
//! - [`SentenceSplitter`] — boundary-aware sentence segmentation
//! - [`Tokenizer`] — lowercase word tokens with punctuation kept separate
//! - [`Vocabulary`] — process-wide stopword set + significance filtering

pub mod splitter;
pub mod tokenizer;
pub mod vocabulary;

pub use splitter::SentenceSplitter;
pub use tokenizer::Tokenizer;
pub use vocabulary::{significant_tokens, Vocabulary};

#[cfg(test)]
mod tests;
