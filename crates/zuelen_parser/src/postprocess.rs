//! Decimal and multiplier post-processing.
//!
//! The decimal tail is kept as an exact scaled integer and only converted to
//! a float once the integer part and the multiplier have been applied.

use zuelen_foundation::{Error, Number, Result, Token};

/// Largest number of decimal digits a [`Fraction`] can hold exactly.
pub const MAX_DECIMAL_PRECISION: usize = 18;

/// An exact decimal fraction: `numerator / 10^scale`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fraction {
    /// Digits after the decimal marker, read as an integer.
    pub numerator: u64,
    /// Number of digits after the decimal marker.
    pub scale: u32,
}

impl Fraction {
    /// Returns the fraction as a float.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        self.numerator as f64 / 10_u64.pow(self.scale) as f64
    }

    /// Combines an integer part and a multiplier with this fraction.
    ///
    /// Computes `(integer + fraction) * multiplier` in scaled integers, then
    /// divides once.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the scaled value does not fit in 128 bits.
    #[allow(clippy::cast_precision_loss)]
    pub fn compose(self, integer: u64, multiplier: u64) -> Result<Number> {
        let denominator = 10_u128.pow(self.scale);
        let scaled = u128::from(integer)
            .checked_mul(denominator)
            .and_then(|n| n.checked_add(u128::from(self.numerator)))
            .and_then(|n| n.checked_mul(u128::from(multiplier)))
            .ok_or_else(Error::overflow)?;
        Ok(Number::Decimal(scaled as f64 / denominator as f64))
    }
}

/// Reads the decimal tail as a fraction of at most `precision` digits.
///
/// Digits past the precision are dropped.
///
/// # Errors
///
/// Returns `NumberSequence` if a token is not a digit or zero.
pub fn compute_decimal(tokens: &[Token], precision: usize) -> Result<Fraction> {
    if let Some(token) = tokens.iter().find(|t| !t.category.is_decimal_digit()) {
        return Err(Error::number_sequence(format!(
            "only single digits may follow the decimal marker, found {token}"
        )));
    }

    let mut fraction = Fraction::default();
    for token in tokens.iter().take(precision.min(MAX_DECIMAL_PRECISION)) {
        fraction.numerator = fraction.numerator * 10 + token.value;
        fraction.scale += 1;
    }
    Ok(fraction)
}

/// Multiplies the peeled scale words. The empty product is 1.
///
/// # Errors
///
/// Returns `Overflow` if the product does not fit in 64 bits.
pub fn compute_multiplier(tokens: &[Token]) -> Result<u64> {
    tokens
        .iter()
        .try_fold(1_u64, |product, token| product.checked_mul(token.value))
        .ok_or_else(Error::overflow)
}
