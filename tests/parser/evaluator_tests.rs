//! End-to-end evaluation tests.
//!
//! Worked scenarios, decimal and multiplier tails, and error kinds.

use zuelen_foundation::{ErrorKind, Number};
use zuelen_parser::luxembourgish::vocabulary;
use zuelen_parser::{Evaluator, EvaluatorConfig, evaluate};

// =============================================================================
// Worked scenarios
// =============================================================================

#[test]
fn twenty_one() {
    assert_eq!(evaluate("eenanzwanzeg").unwrap(), Number::Integer(21));
    assert_eq!(evaluate("een-an-zwanzeg").unwrap(), Number::Integer(21));
}

#[test]
fn one_hundred_thirty_two() {
    assert_eq!(evaluate("een-honnert-zwee-an-drësseg").unwrap(), Number::Integer(132));
    assert_eq!(evaluate("eenhonnertzweeandrësseg").unwrap(), Number::Integer(132));
}

#[test]
fn two_thousand_three_hundred_fifty_four() {
    assert_eq!(
        evaluate("zwee dausend dräi honnert véier-a-foffzeg").unwrap(),
        Number::Integer(2_354)
    );
    assert_eq!(
        evaluate("zweedausenddräihonnertvéierafoffzeg").unwrap(),
        Number::Integer(2_354)
    );
}

#[test]
fn nineteen_twenty_nine() {
    assert_eq!(
        evaluate("nonnzéng-honnert nénganzwanzeg").unwrap(),
        Number::Integer(1_929)
    );
    assert_eq!(
        evaluate("nonnzénghonnertnénganzwanzeg").unwrap(),
        Number::Integer(1_929)
    );
}

#[test]
fn four_fifty() {
    assert_eq!(evaluate("véier foffzeg").unwrap(), Number::Integer(54));
}

#[test]
fn three_million_two_hundred_thousand() {
    assert_eq!(
        evaluate("dräi milliounen zwee-honnert-dausend").unwrap(),
        Number::Integer(3_200_000)
    );
}

#[test]
fn joiner_words_are_ignored() {
    assert_eq!(evaluate("véier an achtzeg").unwrap(), Number::Integer(84));
    assert_eq!(evaluate("dräi a foffzeg").unwrap(), Number::Integer(53));
}

#[test]
fn hyphenated_equals_fused() {
    for (hyphenated, fused) in [
        ("siwen-a-siechzeg", "siwenasiechzeg"),
        ("zwee-honnert", "zweehonnert"),
        ("véier-dausend-véier-a-foffzeg", "véierdausendvéierafoffzeg"),
    ] {
        assert_eq!(evaluate(hyphenated).unwrap(), evaluate(fused).unwrap(), "{hyphenated}");
    }
}

// =============================================================================
// Ordinals
// =============================================================================

#[test]
fn ordinals_keep_their_marker() {
    let third = evaluate("drëtten").unwrap();
    assert_eq!(third, Number::Ordinal(3));
    assert_eq!(third.to_string(), "3.");
    assert_eq!(third.ordinal_value(), Some(3));
    assert_eq!(evaluate("eenanzwanzegsten").unwrap(), Number::Ordinal(21));
}

// =============================================================================
// Decimal and multiplier tails
// =============================================================================

#[test]
fn decimal_tail() {
    assert_eq!(evaluate("zwee komma fënnef").unwrap(), Number::Decimal(2.5));
    assert_eq!(
        evaluate("eenhonnert komma null eent").unwrap(),
        Number::Decimal(100.01)
    );
    assert_eq!(evaluate("null punkt fënnef").unwrap(), Number::Decimal(0.5));
}

#[test]
fn multiplier_tail() {
    assert_eq!(evaluate("dräi milliounen").unwrap(), Number::Integer(3_000_000));
    assert_eq!(
        evaluate("zwee komma fënnef milliounen").unwrap(),
        Number::Decimal(2_500_000.0)
    );
}

#[test]
fn decimal_precision_truncates() {
    let evaluator = Evaluator::new(vocabulary())
        .with_config(EvaluatorConfig::new().with_decimal_precision(2));
    assert_eq!(
        evaluator.evaluate("dräi komma eent véier fënnef").unwrap(),
        Number::Decimal(3.14)
    );
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn unknown_word_is_a_tokenization_error() {
    let err = evaluate("zwee dausend bonjour").unwrap_err();
    assert!(err.is_tokenization());
    let context = err.context.unwrap();
    assert_eq!(context.phrase.as_deref(), Some("zwee dausend bonjour"));
    assert_eq!(context.language.as_deref(), Some("lb"));
}

#[test]
fn malformed_decimal_tail() {
    assert!(evaluate("dräi komma").unwrap_err().is_number_sequence());
    assert!(evaluate("dräi komma zwanzeg").unwrap_err().is_number_sequence());
    assert!(evaluate("eent komma zwee komma dräi").unwrap_err().is_number_sequence());
}

#[test]
fn standalone_minimum() {
    let err = evaluate("véier").unwrap_err();
    assert!(err.is_domain_restriction());
    assert!(matches!(
        err.kind,
        ErrorKind::DomainRestriction { value: 4, minimum: 13, .. }
    ));
    assert!(evaluate("zwielef").unwrap_err().is_domain_restriction());
    assert_eq!(evaluate("dräizéng").unwrap(), Number::Integer(13));
    assert_eq!(evaluate("zwanzeg").unwrap(), Number::Integer(20));
}

#[test]
fn fragment_config_lifts_the_minimum() {
    let evaluator = Evaluator::new(vocabulary()).with_config(EvaluatorConfig::fragment());
    assert_eq!(evaluator.evaluate("véier").unwrap(), Number::Integer(4));
}

#[test]
fn empty_input() {
    for input in ["", "   ", "123", "an"] {
        let err = evaluate(input).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::EmptyInput), "{input:?}");
    }
}

#[test]
fn overflow() {
    let err = evaluate("zwanzeg milliounen billiounen").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Overflow));
}
