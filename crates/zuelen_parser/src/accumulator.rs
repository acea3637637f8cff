//! Accumulation engine.
//!
//! Folds the main tokens of a stream into one value. The state machine is
//! keyed on the category of the previous token; the running value lives in
//! the accumulator rather than in the state label.
//!
//! Scale words close a group: the group's subtotal is multiplied by the
//! scale and emitted into the running total. Every emitted group must have a
//! strictly smaller place value than the group before it.

use zuelen_foundation::{Category, Error, Number, Result, Token, place_value};

/// Transient state of one reduction.
#[derive(Clone, Debug, Default)]
pub struct Accumulator {
    subtotal: u64,
    running_total: u64,
    last_place_value: Option<u64>,
    previous: Option<Category>,
    hundreds: bool,
}

impl Accumulator {
    /// Creates an accumulator in the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduces a token sequence to a number.
    ///
    /// A leading ordinal is returned as is. An empty sequence is zero.
    ///
    /// # Errors
    ///
    /// Returns `NumberSequence` for an invalid ordering and `Overflow` when
    /// the value does not fit in 64 bits.
    pub fn reduce(tokens: &[Token]) -> Result<Number> {
        match tokens {
            [first, ..] if first.is(Category::Ordinal) => Ok(Number::Ordinal(first.value)),
            _ => {
                let mut accumulator = Self::new();
                for token in tokens {
                    accumulator.push(*token)?;
                }
                accumulator.finish().map(Number::Integer)
            }
        }
    }

    /// Feeds one token.
    ///
    /// # Errors
    ///
    /// Returns `NumberSequence` if the token cannot follow the previous one.
    pub fn push(&mut self, token: Token) -> Result<()> {
        if self.previous == Some(Category::Zero) {
            return Err(Error::number_sequence("null must stand alone"));
        }

        match token.category {
            Category::Zero if self.previous.is_some() => {
                return Err(Error::number_sequence("null must stand alone"));
            }
            Category::Zero => {}
            Category::Digit | Category::Teen | Category::Tens => self.add(token)?,
            Category::Hundred => self.hundred(token)?,
            Category::Thousand | Category::LargeScale => self.scale(token)?,
            Category::Ordinal => {
                return Err(Error::number_sequence(
                    "an ordinal cannot continue a cardinal",
                ));
            }
            Category::DecimalMarker => {
                return Err(Error::number_sequence("unexpected decimal marker"));
            }
        }

        self.previous = Some(token.category);
        Ok(())
    }

    /// Emits the open group and returns the total.
    ///
    /// # Errors
    ///
    /// Returns `NumberSequence` if the open group breaks the ordering.
    pub fn finish(mut self) -> Result<u64> {
        if self.subtotal > 0 {
            self.emit(self.subtotal)?;
        }
        Ok(self.running_total)
    }

    /// The value of the open group.
    #[must_use]
    pub const fn subtotal(&self) -> u64 {
        self.subtotal
    }

    /// The sum of all emitted groups.
    #[must_use]
    pub const fn running_total(&self) -> u64 {
        self.running_total
    }

    /// Place value of the last emitted group, if any.
    #[must_use]
    pub const fn last_place_value(&self) -> Option<u64> {
        self.last_place_value
    }

    /// Digits, teens and tens add into the open group. Nothing may follow a
    /// teen or a compound until the next hundred or scale word.
    fn add(&mut self, token: Token) -> Result<()> {
        if self.previous == Some(Category::Teen) {
            return Err(Error::number_sequence(format!(
                "{} cannot follow {}",
                token.value, self.subtotal
            )));
        }
        self.subtotal = self
            .subtotal
            .checked_add(token.value)
            .ok_or_else(Error::overflow)?;
        Ok(())
    }

    fn hundred(&mut self, token: Token) -> Result<()> {
        if self.hundreds {
            return Err(Error::number_sequence("hundred repeated within one group"));
        }
        let after_number = matches!(
            self.previous,
            Some(Category::Digit | Category::Teen | Category::Tens)
        );
        let subtotal = if !after_number {
            self.subtotal.checked_add(token.value)
        } else if token.value == 100 {
            self.subtotal.checked_mul(100)
        } else {
            return Err(Error::number_sequence(format!(
                "{} cannot follow {}",
                token.value, self.subtotal
            )));
        };
        self.subtotal = subtotal.ok_or_else(Error::overflow)?;
        self.hundreds = true;
        Ok(())
    }

    fn scale(&mut self, token: Token) -> Result<()> {
        match self.previous {
            None => self.emit(token.value),
            Some(Category::Thousand | Category::LargeScale) => Err(Error::number_sequence(
                "a scale word cannot follow a scale word",
            )),
            Some(_) => {
                let group = self
                    .subtotal
                    .checked_mul(token.value)
                    .ok_or_else(Error::overflow)?;
                self.emit(group)
            }
        }
    }

    fn emit(&mut self, value: u64) -> Result<()> {
        let place = place_value(value);
        if let Some(last) = self.last_place_value {
            if place >= last {
                return Err(Error::number_sequence(format!(
                    "{value} cannot follow a group of magnitude {last}"
                )));
            }
        }
        self.running_total = self
            .running_total
            .checked_add(value)
            .ok_or_else(Error::overflow)?;
        self.last_place_value = Some(place);
        self.subtotal = 0;
        self.hundreds = false;
        Ok(())
    }
}
