//! Resolved tokens and token streams.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::category::{Category, place_value};

/// A vocabulary entry resolved to its value and category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// Numeric value of the word.
    pub value: u64,
    /// Grammatical role of the word.
    pub category: Category,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(value: u64, category: Category) -> Self {
        Self { value, category }
    }

    /// Power-of-ten magnitude of this token. Decimal markers have none.
    #[must_use]
    pub const fn place_value(&self) -> u64 {
        match self.category {
            Category::DecimalMarker => 0,
            _ => place_value(self.value),
        }
    }

    /// Returns true if this token has the given category.
    #[must_use]
    pub fn is(&self, category: Category) -> bool {
        self.category == category
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.value, self.category)
    }
}

/// The three projections produced by the tokenizer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TokenStream {
    /// Cardinal tokens before any decimal marker.
    pub main: Vec<Token>,
    /// Digits after the decimal marker.
    pub decimal: Vec<Token>,
    /// Trailing scale words peeled off as a multiplier.
    pub multipliers: Vec<Token>,
}

impl TokenStream {
    /// Creates a stream holding only main tokens.
    #[must_use]
    pub fn from_main(main: Vec<Token>) -> Self {
        Self {
            main,
            ..Self::default()
        }
    }

    /// Returns true if the stream has no tokens at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.decimal.is_empty() && self.multipliers.is_empty()
    }

    /// Returns the ordinal token if the stream was short-circuited to one.
    #[must_use]
    pub fn ordinal(&self) -> Option<Token> {
        match self.main.as_slice() {
            [token] if token.is(Category::Ordinal) => Some(*token),
            _ => None,
        }
    }
}

impl fmt::Display for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |tokens: &[Token]| {
            tokens
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        };
        write!(f, "[{}]", join(&self.main))?;
        if !self.decimal.is_empty() {
            write!(f, " . [{}]", join(&self.decimal))?;
        }
        if !self.multipliers.is_empty() {
            write!(f, " x [{}]", join(&self.multipliers))?;
        }
        Ok(())
    }
}
