//! Integration tests for Number
//!
//! Tests accessors and display of evaluation results.

use zuelen_foundation::Number;

#[test]
fn integer_accessors() {
    let n = Number::Integer(2_004);
    assert_eq!(n.as_integer(), Some(2_004));
    assert_eq!(n.whole(), Some(2_004));
    assert_eq!(n.ordinal_value(), None);
    assert!(!n.is_ordinal());
    assert!((n.as_f64() - 2_004.0).abs() < f64::EPSILON);
}

#[test]
fn ordinal_accessors() {
    let n = Number::Ordinal(3);
    assert_eq!(n.as_integer(), None);
    assert_eq!(n.ordinal_value(), Some(3));
    assert_eq!(n.whole(), Some(3));
    assert!(n.is_ordinal());
}

#[test]
fn decimal_accessors() {
    let n = Number::Decimal(2.5);
    assert_eq!(n.whole(), None);
    assert_eq!(n.as_integer(), None);
    assert!((n.as_f64() - 2.5).abs() < f64::EPSILON);
}

#[test]
fn display() {
    assert_eq!(Number::Integer(54).to_string(), "54");
    assert_eq!(Number::Decimal(100.01).to_string(), "100.01");
    assert_eq!(Number::Ordinal(3).to_string(), "3.");
}

#[test]
fn from_u64() {
    assert_eq!(Number::from(7), Number::Integer(7));
}
