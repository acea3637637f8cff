//! Calendar date phrases for Zuelen.
//!
//! Converts phrases like "éischte Januar zweedausendvéier" into `1.1.2004`.
//! Day and year fragments go through the number evaluator; this crate only
//! adds the month table and the day range check.
//!
//! # Modules
//!
//! - [`date`] - Phrase splitting and [`CalendarDate`]
//! - [`month`] - Month names and days per month

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod date;
pub mod month;

pub use date::{CalendarDate, DateParser, date_to_num, parse_date};
pub use month::{days_in_month, month_number};
