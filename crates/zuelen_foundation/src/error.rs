//! Error types for the Zuelen system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every error is terminal for the evaluation that raised it.

use std::fmt;

use thiserror::Error;

/// The main error type for Zuelen operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Attaches the phrase being evaluated, keeping any existing context.
    #[must_use]
    pub fn in_phrase(mut self, phrase: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_phrase(phrase));
        self
    }

    /// Creates a tokenization error for a fragment no rule could resolve.
    #[must_use]
    pub fn tokenization(word: impl Into<String>) -> Self {
        Self::new(ErrorKind::Tokenization { word: word.into() })
    }

    /// Creates a number sequence error.
    #[must_use]
    pub fn number_sequence(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NumberSequence(message.into()))
    }

    /// Creates a domain restriction error for a bare word below the minimum.
    #[must_use]
    pub fn domain_restriction(word: impl Into<String>, value: u64, minimum: u64) -> Self {
        Self::new(ErrorKind::DomainRestriction {
            word: word.into(),
            value,
            minimum,
        })
    }

    /// Creates an unsupported language error.
    #[must_use]
    pub fn unsupported_language(tag: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedLanguage(tag.into()))
    }

    /// Creates an arithmetic overflow error.
    #[must_use]
    pub fn overflow() -> Self {
        Self::new(ErrorKind::Overflow)
    }

    /// Creates an empty input error.
    #[must_use]
    pub fn empty_input() -> Self {
        Self::new(ErrorKind::EmptyInput)
    }

    /// Returns true if this error came from vocabulary resolution.
    #[must_use]
    pub const fn is_tokenization(&self) -> bool {
        matches!(self.kind, ErrorKind::Tokenization { .. })
    }

    /// Returns true if this error came from place-value or decimal validation.
    #[must_use]
    pub const fn is_number_sequence(&self) -> bool {
        matches!(self.kind, ErrorKind::NumberSequence(_))
    }

    /// Returns true if this error rejected a bare word below the minimum.
    #[must_use]
    pub const fn is_domain_restriction(&self) -> bool {
        matches!(self.kind, ErrorKind::DomainRestriction { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A word or fragment could not be resolved against the vocabulary.
    #[error("unknown number word: '{word}'")]
    Tokenization {
        /// The fragment that no decomposition rule could cover.
        word: String,
    },

    /// Place-value ordering violated, or a malformed decimal tail.
    #[error("invalid number sequence: {0}")]
    NumberSequence(String),

    /// A bare word denotes a value below the language's standalone minimum.
    #[error("'{word}' ({value}) is below the standalone minimum of {minimum}")]
    DomainRestriction {
        /// The isolated word.
        word: String,
        /// The value the word denotes.
        value: u64,
        /// The smallest value accepted as a complete input.
        minimum: u64,
    },

    /// No evaluator is registered for a language tag.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The value does not fit in 64 bits.
    #[error("number too large")]
    Overflow,

    /// The input has no alphabetic content.
    #[error("no number words in input")]
    EmptyInput,
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The phrase that was being evaluated.
    pub phrase: Option<String>,
    /// Language tag of the evaluator.
    pub language: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the phrase.
    #[must_use]
    pub fn with_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.phrase = Some(phrase.into());
        self
    }

    /// Sets the language tag.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(phrase) = &self.phrase {
            write!(f, "in '{phrase}'")?;
        }
        if let Some(language) = &self.language {
            if self.phrase.is_some() {
                write!(f, " ")?;
            }
            write!(f, "[{language}]")?;
        }
        Ok(())
    }
}

/// Result type for Zuelen operations.
pub type Result<T> = std::result::Result<T, Error>;
