//! Zuelen - number words to numbers
//!
//! This crate re-exports all layers of the Zuelen system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: zuelen_runtime    - Session, REPL, CLI, logging setup
//! Layer 2: zuelen_calendar   - Date phrases ("drëtten Abrëll" -> 3.4.)
//! Layer 1: zuelen_parser     - Vocabulary, tokenizer, accumulation, evaluation
//! Layer 0: zuelen_foundation - Core types (Category, Token, Number, Error)
//! ```
//!
//! ```
//! assert_eq!(zuelen::evaluate("véierafoffzeg").unwrap().to_string(), "54");
//! ```

pub use zuelen_calendar as calendar;
pub use zuelen_foundation as foundation;
pub use zuelen_parser as parser;
pub use zuelen_runtime as runtime;

pub use zuelen_calendar::{date_to_num, parse_date};
pub use zuelen_foundation::{Error, Number, Result};
pub use zuelen_parser::{evaluate, w2n};
