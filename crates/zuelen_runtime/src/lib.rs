//! REPL and CLI support for Zuelen.
//!
//! This crate provides:
//! - [`Session`] - Language, mode, and output format for evaluating phrases
//! - [`Repl`] - Interactive read-eval-print loop
//! - [`init_tracing`] - Log setup for the `zuelen` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod error;
pub mod logging;
pub mod repl;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor, WordCompleter};
pub use error::{Result, RuntimeError};
pub use logging::init_tracing;
pub use repl::{Repl, Reply};
pub use session::{Mode, Session};
