//! Summary selector — top-N ranking and assembly.

use serde::{Deserialize, Serialize};

/// A sentence with its position and score. An explicit record rather
/// than a text-keyed map: two identical sentences at different positions
/// stay distinct entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// 0-based index of first occurrence in the document.
    pub index: usize,
    /// Exact original text, trimmed.
    pub text: String,
    /// Sum of frequency-table counts over the sentence's significant
    /// tokens.
    pub score: u64,
}

/// Ordering of the assembled summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryOrder {
    /// Score descending, index ascending on ties. Matches the reference
    /// behavior, which is generally not the original reading order.
    #[default]
    ByScore,
    /// Re-sort the selected set back into reading order.
    Original,
}

/// Pick the top `floor(n * ratio)` sentences.
///
/// Ranking is an explicit stable sort by `(score descending, index
/// ascending)`, so results are deterministic across runs. `ratio <= 0`
/// selects nothing; `ratio >= 1` selects everything. Below a full
/// ratio, sentences with no significant word (score 0) are never
/// selected, so the result can be shorter than `floor(n * ratio)`.
pub fn select(sentences: &[Sentence], ratio: f64, order: SummaryOrder) -> Vec<Sentence> {
    let n = sentences.len();
    let mut count = ((n as f64 * ratio).floor() as i64).clamp(0, n as i64) as usize;
    if ratio < 1.0 {
        let positive = sentences.iter().filter(|s| s.score > 0).count();
        count = count.min(positive);
    }
    if count == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<Sentence> = sentences.to_vec();
    ranked.sort_by(|a, b| b.score.cmp(&a.score).then(a.index.cmp(&b.index)));
    ranked.truncate(count);

    if order == SummaryOrder::Original {
        ranked.sort_by_key(|s| s.index);
    }
    ranked
}

/// Join selected sentence texts with a single ASCII space. Empty
/// selection assembles to the empty string.
pub fn assemble(selected: &[Sentence]) -> String {
    selected
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
