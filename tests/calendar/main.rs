//! Integration tests for Layer 2: Calendar
//!
//! Tests date phrases end to end: month anchoring, day and year evaluation,
//! and the day range check.

use zuelen_calendar::{
    CalendarDate, DateParser, date_to_num, days_in_month, month_number, parse_date,
};
use zuelen_parser::default_registry;

// =============================================================================
// Full dates
// =============================================================================

#[test]
fn ordinal_day_month_year() {
    assert_eq!(
        parse_date("éischte Januar zweedausendvéier"),
        Some(CalendarDate {
            day: 1,
            month: 1,
            year: Some(2_004),
        })
    );
    assert_eq!(
        date_to_num("eenandrëssegsten Dezember nonnzénghonnertnénganzwanzeg").as_deref(),
        Some("31.12.1929")
    );
}

#[test]
fn spaced_year_words() {
    assert_eq!(
        date_to_num("zwanzegsten Oktober zwee dausend zwanzeg").as_deref(),
        Some("20.10.2020")
    );
}

#[test]
fn month_abbreviations_and_case() {
    assert_eq!(date_to_num("FËNNEFTEN aug").as_deref(), Some("5.8."));
    assert_eq!(date_to_num("zweeten Feb").as_deref(), Some("2.2."));
}

#[test]
fn compound_cardinal_day() {
    assert_eq!(date_to_num("véieranzwanzeg Dezember").as_deref(), Some("24.12."));
}

// =============================================================================
// Rejected phrases
// =============================================================================

#[test]
fn day_outside_month() {
    assert_eq!(date_to_num("drëssegsten Februar"), None);
    assert_eq!(date_to_num("eenandrëssegsten November"), None);
    assert_eq!(date_to_num("null Mee"), None);
}

#[test]
fn missing_parts() {
    assert_eq!(date_to_num("Januar"), None);
    assert_eq!(date_to_num("éischten"), None);
    assert_eq!(date_to_num(""), None);
}

#[test]
fn words_before_the_day_are_skipped() {
    assert_eq!(date_to_num("den drëtten Abrëll").as_deref(), Some("3.4."));
}

// =============================================================================
// Parser with a resolved evaluator
// =============================================================================

#[test]
fn parser_from_registry() {
    let evaluator = default_registry().resolve("lb_LU").unwrap();
    let parser = DateParser::new(evaluator);
    assert_eq!(
        parser.parse("drëtten Abrëll").map(|d| d.to_string()).as_deref(),
        Some("3.4.")
    );
}

#[test]
fn month_table() {
    assert_eq!(month_number("Mäerz"), Some(3));
    assert_eq!(month_number("mrz"), Some(3));
    assert_eq!(days_in_month(4), Some(30));
    assert_eq!(days_in_month(2), Some(29));
}
