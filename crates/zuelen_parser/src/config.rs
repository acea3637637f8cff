//! Configuration for evaluation.

use crate::postprocess::MAX_DECIMAL_PRECISION;

/// Configuration for an [`Evaluator`](crate::Evaluator).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Reject bare digit and teen words below the language's minimum.
    pub enforce_standalone_minimum: bool,

    /// Number of decimal digits kept after the decimal marker.
    pub decimal_precision: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            enforce_standalone_minimum: true,
            decimal_precision: 15,
        }
    }
}

impl EvaluatorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration for evaluating fragments of a larger phrase.
    ///
    /// Bare small numbers are accepted, since the surrounding text already
    /// marks them as numbers.
    #[must_use]
    pub fn fragment() -> Self {
        Self {
            enforce_standalone_minimum: false,
            ..Self::default()
        }
    }

    /// Builder method to enable/disable the standalone minimum.
    #[must_use]
    pub fn with_standalone_minimum(mut self, enforce: bool) -> Self {
        self.enforce_standalone_minimum = enforce;
        self
    }

    /// Builder method to set the decimal precision. Capped at 18 digits.
    #[must_use]
    pub fn with_decimal_precision(mut self, precision: usize) -> Self {
        self.decimal_precision = precision.min(MAX_DECIMAL_PRECISION);
        self
    }
}
