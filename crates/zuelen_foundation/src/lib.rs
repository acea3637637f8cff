//! Core types for Zuelen.
//!
//! This crate provides:
//! - [`Category`] - The grammatical role of a number word
//! - [`Token`] and [`TokenStream`] - Resolved vocabulary entries
//! - [`Number`] - The value of an evaluated phrase
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod category;
pub mod error;
pub mod number;
pub mod token;

pub use category::{Category, place_value};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use number::Number;
pub use token::{Token, TokenStream};
