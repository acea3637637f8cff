//! The result of evaluating a number phrase.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A numeric value produced by evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value", rename_all = "lowercase"))]
pub enum Number {
    /// A whole cardinal number.
    Integer(u64),
    /// A number with a decimal tail.
    Decimal(f64),
    /// A rank. Displayed with a trailing `.` marker.
    Ordinal(u64),
}

impl Number {
    /// Returns the value as a float, regardless of kind.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Integer(n) | Self::Ordinal(n) => n as f64,
            Self::Decimal(x) => x,
        }
    }

    /// Returns the integer value of a cardinal, if this is one.
    #[must_use]
    pub const fn as_integer(&self) -> Option<u64> {
        match *self {
            Self::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the bare value of an ordinal, if this is one.
    #[must_use]
    pub const fn ordinal_value(&self) -> Option<u64> {
        match *self {
            Self::Ordinal(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the whole value of an integer or an ordinal.
    #[must_use]
    pub const fn whole(&self) -> Option<u64> {
        match *self {
            Self::Integer(n) | Self::Ordinal(n) => Some(n),
            Self::Decimal(_) => None,
        }
    }

    /// Returns true if this is an ordinal.
    #[must_use]
    pub const fn is_ordinal(&self) -> bool {
        matches!(self, Self::Ordinal(_))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(x) => write!(f, "{x}"),
            Self::Ordinal(n) => write!(f, "{n}."),
        }
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Self::Integer(n)
    }
}
