//! Sentence splitter — boundary detection with abbreviation and
//! decimal handling.

use std::collections::HashSet;

/// English abbreviations whose trailing period does not end a sentence.
const EN_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "sr", "jr", "st", "vs", "etc",
    "e.g", "i.e", "cf", "al", "inc", "ltd", "co", "corp", "fig", "dept",
    "est", "approx", "vol", "no", "pp", "a.m", "p.m", "u.s", "u.k",
];

/// Splits raw text into an ordered list of sentences.
///
/// Terminal punctuation (`.` `!` `?`, including runs like `?!` and `...`)
/// ends a sentence unless the period belongs to a known abbreviation, a
/// single initial, or a decimal number. A boundary is only confirmed when
/// followed by whitespace and a capital letter, digit, or opening
/// quote/bracket (or end of input), so `"e.g. apples"` stays together.
pub struct SentenceSplitter {
    abbreviations: HashSet<String>,
}

impl SentenceSplitter {
    /// Splitter with the built-in English abbreviation list.
    pub fn new() -> Self {
        Self::from_abbreviations(EN_ABBREVIATIONS)
    }

    /// Splitter with a custom abbreviation list (matched lowercase,
    /// without the trailing period).
    pub fn from_abbreviations(words: &[&str]) -> Self {
        Self {
            abbreviations: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Split `text` into sentences, in original order, each an exact
    /// trimmed substring of the input. Text without any sentence boundary
    /// comes back as a single sentence; empty/whitespace input yields an
    /// empty list.
    pub fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0usize;
        let mut i = 0usize;

        while i < chars.len() {
            let c = chars[i].1;
            if !is_terminal(c) {
                i += 1;
                continue;
            }

            // Consume the full terminal run plus trailing closers: `?!`,
            // `...`, `."`, `.)`.
            let mut j = i;
            while j + 1 < chars.len() && is_terminal(chars[j + 1].1) {
                j += 1;
            }
            while j + 1 < chars.len() && is_closer(chars[j + 1].1) {
                j += 1;
            }

            // A lone period needs the abbreviation/decimal checks; runs
            // and `!`/`?` only need lookahead confirmation.
            let boundary = if c == '.' && j == i {
                !self.is_abbreviation(&chars, i)
                    && !is_decimal_point(&chars, i)
                    && confirms_boundary(&chars, j)
            } else {
                confirms_boundary(&chars, j)
            };

            if boundary {
                let end = chars[j].0 + chars[j].1.len_utf8();
                let begin = chars[start].0;
                let sentence = text[begin..end].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
                start = j + 1;
            }
            i = j + 1;
        }

        if start < chars.len() {
            let tail = text[chars[start].0..].trim();
            if !tail.is_empty() {
                sentences.push(tail.to_string());
            }
        }
        sentences
    }

    /// Word immediately before the period at `dot`, checked against the
    /// abbreviation list. Single letters count as initials ("A. Turing").
    fn is_abbreviation(&self, chars: &[(usize, char)], dot: usize) -> bool {
        let mut word: Vec<char> = Vec::new();
        let mut k = dot;
        while k > 0 {
            let prev = chars[k - 1].1;
            if prev.is_alphabetic() || prev == '.' {
                word.push(prev);
                k -= 1;
            } else {
                break;
            }
        }
        if word.is_empty() {
            return false;
        }
        let word: String = word.iter().rev().collect::<String>().to_lowercase();
        if word.len() == 1 && word.chars().all(|c| c.is_alphabetic()) {
            return true;
        }
        self.abbreviations.contains(word.trim_end_matches('.'))
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
}

/// Period with digits on both sides, as in `3.14`.
fn is_decimal_point(chars: &[(usize, char)], dot: usize) -> bool {
    dot > 0
        && dot + 1 < chars.len()
        && chars[dot - 1].1.is_ascii_digit()
        && chars[dot + 1].1.is_ascii_digit()
}

/// The run ending at `last` is a boundary when followed by end of input,
/// or by whitespace and then a sentence-opening character.
fn confirms_boundary(chars: &[(usize, char)], last: usize) -> bool {
    let mut k = last + 1;
    if k >= chars.len() {
        return true;
    }
    if !chars[k].1.is_whitespace() {
        return false;
    }
    while k < chars.len() && chars[k].1.is_whitespace() {
        k += 1;
    }
    if k >= chars.len() {
        return true;
    }
    let next = chars[k].1;
    next.is_uppercase() || next.is_ascii_digit() || is_opener(next)
}

fn is_opener(c: char) -> bool {
    matches!(c, '"' | '\'' | '(' | '[' | '\u{201c}' | '\u{2018}')
}
