//! Skim — frequency-based extractive summarization.
//!
//! Pipeline stages, composed by [`Summarizer`]:
//! 1. sentence splitting (skim-nlp)
//! 2. word tokenization (skim-nlp)
//! 3. significance filtering (skim-nlp)
//! 4. document-wide frequency table + per-sentence scoring
//! 5. top-N selection and assembly
//!
//! Every invocation is a pure function of `(text, ratio)`; the only
//! shared state is the read-only stopword vocabulary.

pub mod frequency;
pub mod pipeline;
pub mod selector;

pub use pipeline::{summarize, Summarizer, SummaryResult};
pub use selector::{select, Sentence, SummaryOrder};
