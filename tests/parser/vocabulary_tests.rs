//! Vocabulary tests.
//!
//! Tests the Luxembourgish table and custom vocabularies.

use zuelen_foundation::{Category, Number, Token};
use zuelen_parser::luxembourgish::{self, vocabulary};
use zuelen_parser::{Evaluator, Joiner, VocabularyBuilder};

#[test]
fn lookup_ignores_case() {
    let vocab = vocabulary();
    assert_eq!(vocab.lookup("Véier"), Some(Token::new(4, Category::Digit)));
    assert_eq!(vocab.lookup("DAUSEND"), Some(Token::new(1_000, Category::Thousand)));
}

#[test]
fn lookup_has_no_fuzzy_matching() {
    let vocab = vocabulary();
    assert_eq!(vocab.lookup("véierr"), None);
    assert_eq!(vocab.lookup("véie"), None);
    assert_eq!(vocab.lookup(""), None);
}

#[test]
fn every_compound_from_21_to_99_is_present() {
    let vocab = vocabulary();
    let compounds: Vec<u64> = vocab
        .iter()
        .filter(|(_, token)| token.category == Category::Teen && token.value > 20)
        .map(|(_, token)| token.value)
        .collect();
    for n in 21..100 {
        if n % 10 != 0 {
            assert!(compounds.contains(&n), "no compound for {n}");
        }
    }
}

#[test]
fn joiner_classes() {
    let vocab = vocabulary();
    assert_eq!(vocab.joiner_for("zwanzeg"), Some(Joiner::An));
    assert_eq!(vocab.joiner_for("foffzeg"), Some(Joiner::A));
    assert_eq!(vocab.joiner_for("dausend"), None);
    assert!(vocab.is_joiner("an"));
    assert!(vocab.is_joiner("a"));
    assert!(!vocab.is_joiner("zwee"));
}

#[test]
fn ordinals_are_generated() {
    let vocab = vocabulary();
    for word in ["éischten", "éischte", "drëtten", "zéngten", "zwanzegsten", "eenandrëssegsten"] {
        assert_eq!(
            vocab.lookup(word).map(|t| t.category),
            Some(Category::Ordinal),
            "{word}"
        );
    }
    assert_eq!(vocab.lookup("eenandrëssegsten").map(|t| t.value), Some(31));
}

#[test]
fn morphology() {
    let morphology = vocabulary().morphology();
    assert_eq!(morphology.standalone_minimum, luxembourgish::STANDALONE_MINIMUM);
    assert!(morphology.hundred_markers.iter().any(|m| m == "honnert"));
    assert!(morphology.thousand_markers.iter().any(|m| m == "dausend"));
    assert!(morphology.century_prefixes.iter().any(|p| p == "nonnzénghonnert"));
}

#[test]
fn words_are_sorted() {
    let words = vocabulary().words();
    assert!(words.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(words.len(), vocabulary().len());
}

#[test]
fn building_twice_gives_the_same_table() {
    let a = luxembourgish::build_vocabulary();
    let b = luxembourgish::build_vocabulary();
    assert_eq!(a.len(), b.len());
    for (word, token) in a.iter() {
        assert_eq!(b.lookup(word), Some(token), "{word}");
    }
}

#[test]
fn custom_vocabulary_drives_the_evaluator() {
    let mut builder = VocabularyBuilder::new("en");
    builder
        .word("one", 1, Category::Digit)
        .word("two", 2, Category::Digit)
        .word("three", 3, Category::Digit)
        .tens("twenty", 20, Joiner::An)
        .hundred_marker("hundred")
        .thousand_marker("thousand")
        .word("point", 0, Category::DecimalMarker);
    let vocab = builder.build();
    let evaluator = Evaluator::new(&vocab);

    assert_eq!(
        evaluator.evaluate("two thousand three hundred twenty-one").unwrap(),
        Number::Integer(2_321)
    );
    assert_eq!(evaluator.evaluate("two").unwrap(), Number::Integer(2));
    assert_eq!(evaluator.evaluate("one point two").unwrap(), Number::Decimal(1.2));
}
