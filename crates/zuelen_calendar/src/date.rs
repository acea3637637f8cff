//! Date phrase parsing.
//!
//! A date phrase is `[day words] month [year words]`. The month word anchors
//! the phrase; the day and the year are evaluated as number phrases, or read
//! as numerals ("1. Januar 2004").

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use zuelen_foundation::Number;
use zuelen_parser::{Evaluator, EvaluatorConfig, luxembourgish};

use crate::month::{days_in_month, month_number};

/// A calendar date. The year is optional.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDate {
    /// Day of the month, starting at 1.
    pub day: u64,
    /// Month number, 1 to 12.
    pub month: u32,
    /// Year, if the phrase named one.
    pub year: Option<u64>,
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.", self.day, self.month)?;
        if let Some(year) = self.year {
            write!(f, "{year}")?;
        }
        Ok(())
    }
}

/// Parses date phrases with a number evaluator.
#[derive(Clone, Copy, Debug)]
pub struct DateParser<'v> {
    evaluator: Evaluator<'v>,
}

impl<'v> DateParser<'v> {
    /// Creates a parser on top of an evaluator.
    ///
    /// The evaluator's standalone minimum is lifted: "drëtten" and "zwee"
    /// are valid inside a date.
    #[must_use]
    pub fn new(evaluator: Evaluator<'v>) -> Self {
        let config = evaluator.config().with_standalone_minimum(false);
        Self {
            evaluator: evaluator.with_config(config),
        }
    }

    /// Parses a date phrase. Returns `None` if the phrase is not a valid date.
    #[must_use]
    pub fn parse(&self, text: &str) -> Option<CalendarDate> {
        let words: Vec<&str> = text
            .split(|c: char| c.is_whitespace() || c == '-' || c == ',')
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|word| !word.is_empty())
            .collect();

        let Some((index, month)) = words
            .iter()
            .enumerate()
            .find_map(|(index, word)| month_number(word).map(|month| (index, month)))
        else {
            tracing::trace!(text, "no month name");
            return None;
        };

        let day = self.day(&words[..index])?;
        if day == 0 || day > days_in_month(month)? {
            tracing::debug!(text, day, month, "day out of range");
            return None;
        }

        let year = self.year(&words[index + 1..])?;
        Some(CalendarDate { day, month, year })
    }

    /// Evaluates the longest run of words ending at the month.
    fn day(&self, words: &[&str]) -> Option<u64> {
        if let Some(day) = words.last().and_then(|word| numeral(word)) {
            return Some(day);
        }
        (0..words.len()).find_map(|start| {
            match self.evaluator.evaluate(&words[start..].join(" ")) {
                Ok(Number::Ordinal(day) | Number::Integer(day)) => Some(day),
                _ => None,
            }
        })
    }

    /// Evaluates the words after the month. No words means no year; words
    /// that are not a whole number make the phrase invalid.
    #[allow(clippy::option_option)]
    fn year(&self, words: &[&str]) -> Option<Option<u64>> {
        match words {
            [] => return Some(None),
            [word] if numeral(word).is_some() => return Some(numeral(word)),
            _ => {}
        }
        match self.evaluator.evaluate(&words.join(" ")) {
            Ok(Number::Integer(year)) => Some(Some(year)),
            other => {
                tracing::debug!(?other, "year is not a whole number");
                None
            }
        }
    }
}

/// Reads a word written in digits.
fn numeral(word: &str) -> Option<u64> {
    if word.bytes().all(|b| b.is_ascii_digit()) {
        word.parse().ok()
    } else {
        None
    }
}

/// Parses a Luxembourgish date phrase.
///
/// ```
/// let date = zuelen_calendar::parse_date("éischte Januar zweedausendvéier").unwrap();
/// assert_eq!(date.to_string(), "1.1.2004");
/// ```
#[must_use]
pub fn parse_date(text: &str) -> Option<CalendarDate> {
    let evaluator =
        Evaluator::new(luxembourgish::vocabulary()).with_config(EvaluatorConfig::fragment());
    DateParser::new(evaluator).parse(text)
}

/// Parses a Luxembourgish date phrase into `day.month.year` or `day.month.`.
#[must_use]
pub fn date_to_num(text: &str) -> Option<String> {
    parse_date(text).map(|date| date.to_string())
}
