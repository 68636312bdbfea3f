use crate::*;

// ========== Sentence splitter ==========

#[test]
fn test_split_simple() {
    let splitter = SentenceSplitter::new();
    let sentences = splitter.split("Dogs are great pets. Cats are independent animals.");
    assert_eq!(
        sentences,
        vec!["Dogs are great pets.", "Cats are independent animals."]
    );
}

#[test]
fn test_split_terminal_variety() {
    let splitter = SentenceSplitter::new();
    let sentences = splitter.split("Really? Yes! It works.");
    assert_eq!(sentences.len(), 3);
    assert_eq!(sentences[0], "Really?");
    assert_eq!(sentences[1], "Yes!");
}

#[test]
fn test_split_no_boundary_is_one_sentence() {
    let splitter = SentenceSplitter::new();
    let sentences = splitter.split("no terminal punctuation here at all");
    assert_eq!(sentences, vec!["no terminal punctuation here at all"]);
}

#[test]
fn test_split_empty() {
    let splitter = SentenceSplitter::new();
    assert!(splitter.split("").is_empty());
    assert!(splitter.split("   \n\t  ").is_empty());
}

#[test]
fn test_split_abbreviation_not_boundary() {
    let splitter = SentenceSplitter::new();
    let sentences = splitter.split("Dr. Smith arrived late. Everyone waited.");
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0], "Dr. Smith arrived late.");
}

#[test]
fn test_split_initials() {
    let splitter = SentenceSplitter::new();
    let sentences = splitter.split("A. Turing wrote the paper. It was influential.");
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0], "A. Turing wrote the paper.");
}

#[test]
fn test_split_decimal_not_boundary() {
    let splitter = SentenceSplitter::new();
    let sentences = splitter.split("Pi is roughly 3.14 in value. Everyone knows that.");
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0], "Pi is roughly 3.14 in value.");
}

#[test]
fn test_split_multi_char_terminal_run() {
    let splitter = SentenceSplitter::new();
    let sentences = splitter.split("What?! Nobody told me... The meeting moved.");
    assert_eq!(sentences.len(), 3);
    assert_eq!(sentences[0], "What?!");
    assert_eq!(sentences[1], "Nobody told me...");
}

#[test]
fn test_split_trailing_quote() {
    let splitter = SentenceSplitter::new();
    let sentences = splitter.split("She said \"stop.\" He did not.");
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0], "She said \"stop.\"");
}

#[test]
fn test_split_unterminated_tail() {
    let splitter = SentenceSplitter::new();
    let sentences = splitter.split("First sentence. And a trailing fragment");
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[1], "And a trailing fragment");
}

#[test]
fn test_split_preserves_order_and_text() {
    let splitter = SentenceSplitter::new();
    let text = "One thing happened. Two things happened. Three things happened.";
    let sentences = splitter.split(text);
    for s in &sentences {
        assert!(text.contains(s.as_str()));
    }
    assert_eq!(sentences[0], "One thing happened.");
    assert_eq!(sentences[2], "Three things happened.");
}

#[test]
fn test_split_custom_abbreviations() {
    let splitter = SentenceSplitter::from_abbreviations(&["bzw"]);
    let sentences = splitter.split("Das gilt bzw. Anderes auch. Zweiter Satz.");
    assert_eq!(sentences.len(), 2);
}

// ========== Tokenizer ==========

#[test]
fn test_tokenize_lowercases() {
    let tokenizer = Tokenizer::new();
    let tokens = tokenizer.tokenize("Dogs ARE Great");
    assert_eq!(tokens, vec!["dogs", "are", "great"]);
}

#[test]
fn test_tokenize_punctuation_standalone() {
    let tokenizer = Tokenizer::new();
    let tokens = tokenizer.tokenize("Dogs, cats.");
    assert_eq!(tokens, vec!["dogs", ",", "cats", "."]);
}

#[test]
fn test_tokenize_apostrophe_stays_in_word() {
    let tokenizer = Tokenizer::new();
    let tokens = tokenizer.tokenize("don't panic");
    assert_eq!(tokens, vec!["don't", "panic"]);
}

#[test]
fn test_tokenize_numbers() {
    let tokenizer = Tokenizer::new();
    let tokens = tokenizer.tokenize("version 2 shipped");
    assert_eq!(tokens, vec!["version", "2", "shipped"]);
}

#[test]
fn test_tokenize_empty() {
    let tokenizer = Tokenizer::new();
    assert!(tokenizer.tokenize("").is_empty());
    assert!(tokenizer.tokenize("   ").is_empty());
}

#[test]
fn test_tokenize_preserves_duplicates() {
    let tokenizer = Tokenizer::new();
    let tokens = tokenizer.tokenize("dogs and dogs and dogs");
    assert_eq!(tokens.iter().filter(|t| *t == "dogs").count(), 3);
}

// ========== Vocabulary ==========

#[test]
fn test_vocabulary_english() {
    let vocab = Vocabulary::new("en").unwrap();
    assert!(vocab.is_stopword("the"));
    assert!(vocab.is_stopword("and"));
    assert!(!vocab.is_stopword("summarization"));
    assert!(!vocab.is_empty());
}

#[test]
fn test_vocabulary_unknown_language() {
    assert!(Vocabulary::new("klingon").is_err());
}

#[test]
fn test_vocabulary_from_list() {
    let vocab = Vocabulary::from_list(&["are", "AND"]);
    assert!(vocab.is_stopword("are"));
    assert!(vocab.is_stopword("and"));
    assert!(!vocab.is_stopword("dogs"));
    assert_eq!(vocab.len(), 2);
    assert_eq!(vocab.language(), "custom");
}

#[test]
fn test_punctuation_detection() {
    assert!(Vocabulary::is_punctuation("."));
    assert!(Vocabulary::is_punctuation("?!"));
    assert!(!Vocabulary::is_punctuation("dogs"));
    assert!(!Vocabulary::is_punctuation("3"));
    assert!(!Vocabulary::is_punctuation(""));
}

#[test]
fn test_significant_tokens_filters_and_preserves_order() {
    let vocab = Vocabulary::from_list(&["are", "and"]);
    let tokens: Vec<String> = ["dogs", "are", "great", ",", "and", "loyal", "."]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let significant = significant_tokens(&tokens, &vocab);
    assert_eq!(significant, vec!["dogs", "great", "loyal"]);
}

#[test]
fn test_significant_tokens_keeps_duplicates() {
    let vocab = Vocabulary::from_list(&["the"]);
    let tokens: Vec<String> = ["dogs", "the", "dogs"].iter().map(|s| s.to_string()).collect();
    let significant = significant_tokens(&tokens, &vocab);
    assert_eq!(significant, vec!["dogs", "dogs"]);
}
