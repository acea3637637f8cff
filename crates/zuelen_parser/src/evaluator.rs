//! Phrase evaluation.
//!
//! Ties the pipeline together: tokenize, reduce the main tokens, then apply
//! the decimal tail and the multiplier.

use zuelen_foundation::{Category, Error, Number, Result, TokenStream};

use crate::accumulator::Accumulator;
use crate::config::EvaluatorConfig;
use crate::luxembourgish;
use crate::postprocess::{compute_decimal, compute_multiplier};
use crate::tokenizer::Tokenizer;
use crate::vocabulary::Vocabulary;

/// Evaluates number phrases against one vocabulary.
#[derive(Clone, Copy, Debug)]
pub struct Evaluator<'v> {
    vocabulary: &'v Vocabulary,
    config: EvaluatorConfig,
}

impl<'v> Evaluator<'v> {
    /// Creates an evaluator with the default configuration.
    #[must_use]
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self {
            vocabulary,
            config: EvaluatorConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: EvaluatorConfig) -> Self {
        self.config = config;
        self
    }

    /// The vocabulary this evaluator reads.
    #[must_use]
    pub const fn vocabulary(&self) -> &'v Vocabulary {
        self.vocabulary
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Tokenizes a phrase without evaluating it.
    ///
    /// # Errors
    ///
    /// Returns the tokenizer's error, with the phrase attached.
    pub fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Tokenizer::new(self.vocabulary)
            .tokenize(text)
            .map_err(|err| self.annotate(err, text))
    }

    /// Evaluates a phrase.
    ///
    /// # Errors
    ///
    /// Returns an error if the phrase cannot be tokenized, its words are in
    /// an invalid order, it is a bare word below the standalone minimum, or
    /// the value overflows.
    pub fn evaluate(&self, text: &str) -> Result<Number> {
        let number = self.run(text).map_err(|err| self.annotate(err, text))?;
        tracing::debug!(phrase = text, %number, "evaluated");
        Ok(number)
    }

    fn run(&self, text: &str) -> Result<Number> {
        let stream = Tokenizer::new(self.vocabulary).tokenize(text)?;
        if let Some(ordinal) = stream.ordinal() {
            return Ok(Number::Ordinal(ordinal.value));
        }
        self.check_standalone(text, &stream)?;

        let integer = match Accumulator::reduce(&stream.main)? {
            Number::Integer(n) => n,
            other => return Ok(other),
        };
        let multiplier = compute_multiplier(&stream.multipliers)?;

        if stream.decimal.is_empty() {
            return integer
                .checked_mul(multiplier)
                .map(Number::Integer)
                .ok_or_else(Error::overflow);
        }
        compute_decimal(&stream.decimal, self.config.decimal_precision)?
            .compose(integer, multiplier)
    }

    fn check_standalone(&self, text: &str, stream: &TokenStream) -> Result<()> {
        if !self.config.enforce_standalone_minimum
            || !stream.decimal.is_empty()
            || !stream.multipliers.is_empty()
        {
            return Ok(());
        }
        let minimum = self.vocabulary.morphology().standalone_minimum;
        match stream.main.as_slice() {
            [token]
                if matches!(token.category, Category::Digit | Category::Teen)
                    && token.value < minimum =>
            {
                Err(Error::domain_restriction(text.trim(), token.value, minimum))
            }
            _ => Ok(()),
        }
    }

    fn annotate(&self, mut err: Error, text: &str) -> Error {
        let context = err
            .context
            .take()
            .unwrap_or_default()
            .with_language(self.vocabulary.language());
        err.with_context(context).in_phrase(text)
    }
}

/// Evaluates a Luxembourgish phrase with the default configuration.
///
/// # Errors
///
/// See [`Evaluator::evaluate`].
pub fn evaluate(text: &str) -> Result<Number> {
    Evaluator::new(luxembourgish::vocabulary()).evaluate(text)
}
