//! Number-word parser for Zuelen.
//!
//! This crate turns phrases like "zwee dausend dräihonnert véierafoffzeg"
//! into numbers.
//!
//! # Architecture
//!
//! ```text
//! "zwee dausend dräihonnert véierafoffzeg"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   NORMALIZER    │  → ["zwee", "dausend", "dräihonnert", "véierafoffzeg"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   DECOMPOSER    │  → [2:digit, 1000:thousand, 300:hundred, 54:teen]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MULTIPLIER AND  │  → main / decimal / multiplier projections
//! │ DECIMAL SPLIT   │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  ACCUMULATOR    │  → 2000 + 354
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ POST-PROCESSING │  → (2354 + 0) × 1 = 2354
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`vocabulary`] - Word table and compounding rules
//! - [`luxembourgish`] - The Luxembourgish word table
//! - [`tokenizer`] - Normalization, decomposition and stream splitting
//! - [`accumulator`] - The place-value state machine
//! - [`postprocess`] - Decimal fractions and multipliers
//! - [`evaluator`] - Pipeline orchestration
//! - [`language`] - Language tag dispatch
//! - [`config`] - Evaluator configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod accumulator;
pub mod config;
pub mod evaluator;
pub mod language;
pub mod luxembourgish;
pub mod postprocess;
pub mod tokenizer;
pub mod vocabulary;

// Re-export main types for convenience
pub use accumulator::Accumulator;
pub use config::EvaluatorConfig;
pub use evaluator::{Evaluator, evaluate};
pub use language::{LanguageRegistry, default_registry, w2n};
pub use postprocess::{Fraction, compute_decimal, compute_multiplier};
pub use tokenizer::{Decomposer, Normalizer, Tokenizer};
pub use vocabulary::{Joiner, Morphology, Vocabulary, VocabularyBuilder};
