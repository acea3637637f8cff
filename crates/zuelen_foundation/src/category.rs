//! Token categories and place values.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The grammatical role of a vocabulary entry.
///
/// The accumulation engine chooses between addition and multiplication
/// by looking at the category of the previous and the incoming token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    /// The word for zero.
    Zero,
    /// 1 through 9.
    Digit,
    /// 10 through 19, and pre-expanded digit+tens compounds.
    Teen,
    /// Exact multiples of ten from 20 to 90.
    Tens,
    /// The hundred marker and fused hundred forms.
    Hundred,
    /// The thousand marker.
    Thousand,
    /// Million, billion and larger scale words.
    LargeScale,
    /// The word that starts a decimal tail.
    DecimalMarker,
    /// A rank word ("first", "third").
    Ordinal,
}

impl Category {
    /// Returns true for categories that close a group by multiplication.
    #[must_use]
    pub const fn is_scale(self) -> bool {
        matches!(self, Self::Thousand | Self::LargeScale)
    }

    /// Returns true for categories allowed after a decimal marker.
    #[must_use]
    pub const fn is_decimal_digit(self) -> bool {
        matches!(self, Self::Zero | Self::Digit)
    }

    /// Short label used in token dumps.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Digit => "digit",
            Self::Teen => "teen",
            Self::Tens => "tens",
            Self::Hundred => "hundred",
            Self::Thousand => "thousand",
            Self::LargeScale => "scale",
            Self::DecimalMarker => "decimal",
            Self::Ordinal => "ordinal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the power-of-ten magnitude of `n`.
///
/// `place_value(0)` is 0, `place_value(7)` is 1, `place_value(354)` is 100.
#[must_use]
pub const fn place_value(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut magnitude = 1;
    let mut rest = n;
    while rest >= 10 {
        rest /= 10;
        magnitude *= 10;
    }
    magnitude
}
