//! Tokenizer tests.
//!
//! Tests normalization, compound decomposition, and the split into main,
//! decimal and multiplier tokens.

use zuelen_foundation::{Category, ErrorKind, Token};
use zuelen_parser::luxembourgish::vocabulary;
use zuelen_parser::{Decomposer, Normalizer, Tokenizer};

fn values(word: &str) -> Vec<u64> {
    Decomposer::new(vocabulary())
        .decompose(word)
        .unwrap()
        .iter()
        .map(|t| t.value)
        .collect()
}

// =============================================================================
// Normalization
// =============================================================================

#[test]
fn normalize_splits_on_whitespace_and_commas() {
    let words = Normalizer::new(vocabulary())
        .words("  Zwee\tdausend,dräi ")
        .unwrap();
    assert_eq!(words, vec!["zwee", "dausend", "dräi"]);
}

#[test]
fn normalize_fuses_hyphenated_parts() {
    let words = Normalizer::new(vocabulary())
        .words("een-honnert-zwee-an-drësseg")
        .unwrap();
    assert_eq!(words, vec!["eenhonnertzweeandrësseg"]);
}

#[test]
fn normalize_rejects_input_without_words() {
    let normalizer = Normalizer::new(vocabulary());
    for input in ["", "   ", "42", "?!", "a an"] {
        let err = normalizer.words(input).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::EmptyInput), "{input:?}");
    }
}

// =============================================================================
// Decomposition
// =============================================================================

#[test]
fn decompose_fused_hundred_and_compound() {
    assert_eq!(values("eenhonnertzweeandrësseg"), vec![100, 32]);
    assert_eq!(values("zweehonnertdausend"), vec![200, 1_000]);
}

#[test]
fn decompose_century() {
    assert_eq!(values("nonnzénghonnertnénganzwanzeg"), vec![1_900, 29]);
}

#[test]
fn decompose_thousands() {
    assert_eq!(values("zweedausendvéier"), vec![2, 1_000, 4]);
    assert_eq!(values("dausendeent"), vec![1_000, 1]);
}

#[test]
fn decompose_unknown_fragment_names_the_word() {
    let err = Decomposer::new(vocabulary())
        .decompose("zweehonnertbonjour")
        .unwrap_err();
    assert!(err.is_tokenization());
}

#[test]
fn decompose_very_long_word_terminates() {
    let word = "zwee".repeat(60);
    let tokens = Decomposer::new(vocabulary()).decompose(&word).unwrap();
    assert_eq!(tokens.len(), 60);
}

#[test]
fn tokenize_rejects_words_beyond_the_length_limit() {
    let tokenizer = Tokenizer::new(vocabulary());
    for word in ["honnert".repeat(5_000), "dausend".repeat(5_000), "zwee".repeat(5_000)] {
        let err = tokenizer.tokenize(&word).unwrap_err();
        assert!(err.is_tokenization());
    }

    let limit = Decomposer::new(vocabulary()).max_word_len();
    let word = "honnert".repeat(limit / "honnert".len());
    assert!(word.len() <= limit);
    assert!(tokenizer.tokenize(&word).is_ok());
}

// =============================================================================
// Token streams
// =============================================================================

#[test]
fn tokenize_plain_phrase() {
    let stream = Tokenizer::new(vocabulary())
        .tokenize("zwee dausend dräi honnert véierafoffzeg")
        .unwrap();
    let values: Vec<u64> = stream.main.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![2, 1_000, 3, 100, 54]);
    assert!(stream.decimal.is_empty());
    assert!(stream.multipliers.is_empty());
}

#[test]
fn tokenize_trailing_multipliers_in_input_order() {
    let stream = Tokenizer::new(vocabulary())
        .tokenize("zwanzeg milliounen billiounen")
        .unwrap();
    assert_eq!(stream.main, vec![Token::new(20, Category::Tens)]);
    let multipliers: Vec<u64> = stream.multipliers.iter().map(|t| t.value).collect();
    assert_eq!(multipliers, vec![1_000_000, 1_000_000_000_000]);
}

#[test]
fn tokenize_tied_trailing_scale_is_a_multiplier() {
    let stream = Tokenizer::new(vocabulary())
        .tokenize("een dausend fënnef honnert dausend")
        .unwrap();
    let values: Vec<u64> = stream.main.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![1, 1_000, 5, 100]);
    assert_eq!(stream.multipliers, vec![Token::new(1_000, Category::Thousand)]);
}

#[test]
fn tokenize_scale_inside_phrase_stays_in_main() {
    let stream = Tokenizer::new(vocabulary())
        .tokenize("dräi milliounen zweehonnertdausend")
        .unwrap();
    assert!(stream.multipliers.is_empty());
    assert_eq!(stream.main.len(), 4);
}

#[test]
fn tokenize_decimal_tail() {
    let stream = Tokenizer::new(vocabulary())
        .tokenize("eenhonnert komma null eent")
        .unwrap();
    assert_eq!(stream.main, vec![Token::new(100, Category::Hundred)]);
    assert_eq!(
        stream.decimal,
        vec![Token::new(0, Category::Zero), Token::new(1, Category::Digit)]
    );
}

#[test]
fn tokenize_ordinal_wins() {
    let stream = Tokenizer::new(vocabulary()).tokenize("éischten").unwrap();
    assert_eq!(stream.ordinal(), Some(Token::new(1, Category::Ordinal)));
}
