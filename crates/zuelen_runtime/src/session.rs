//! Session state shared by the CLI and the REPL.
//!
//! A session remembers the language tag, what a phrase should be read as,
//! and how results are rendered.

use std::fmt;

use zuelen_calendar::DateParser;
use zuelen_parser::{Evaluator, LanguageRegistry, default_registry};

use crate::error::{Result, RuntimeError};

/// What a phrase is read as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// A number phrase.
    #[default]
    Number,
    /// A date phrase.
    Date,
    /// A number phrase, shown as its token stream.
    Tokens,
}

impl Mode {
    /// Parses a mode name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "number" | "num" => Some(Self::Number),
            "date" => Some(Self::Date),
            "tokens" | "tok" => Some(Self::Tokens),
            _ => None,
        }
    }

    /// The mode's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Date => "date",
            Self::Tokens => "tokens",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Session state for evaluating phrases.
#[derive(Clone, Debug)]
pub struct Session {
    registry: &'static LanguageRegistry,
    language: String,
    mode: Mode,
    json: bool,
}

impl Session {
    /// Default language tag.
    pub const DEFAULT_LANGUAGE: &'static str = "lb";

    /// Creates a session for Luxembourgish number phrases with text output.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: default_registry(),
            language: Self::DEFAULT_LANGUAGE.to_string(),
            mode: Mode::Number,
            json: false,
        }
    }

    /// Sets the mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Enables or disables JSON output.
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Sets the language tag.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedLanguage` if no vocabulary is registered for the tag.
    pub fn with_language(mut self, tag: &str) -> Result<Self> {
        self.set_language(tag)?;
        Ok(self)
    }

    /// Returns the language tag.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns whether results are rendered as JSON.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Returns the registered language tags.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        self.registry.tags()
    }

    /// Switches the language.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedLanguage` if no vocabulary is registered for the tag.
    pub fn set_language(&mut self, tag: &str) -> Result<()> {
        self.registry.resolve(tag)?;
        tracing::debug!(tag, "language set");
        self.language = tag.to_string();
        Ok(())
    }

    /// Switches the mode.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Enables or disables JSON output.
    pub fn set_json(&mut self, json: bool) {
        self.json = json;
    }

    /// Returns the evaluator for the current language.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedLanguage` if the language is no longer registered.
    pub fn evaluator(&self) -> Result<Evaluator<'static>> {
        Ok(self.registry.resolve(&self.language)?)
    }

    /// Evaluates a phrase in the session's mode and renders the result.
    ///
    /// # Errors
    ///
    /// Returns the evaluation error, `InvalidDate` for a phrase that is not
    /// a date, or `Json` if rendering fails.
    pub fn evaluate(&self, phrase: &str) -> Result<String> {
        self.evaluate_as(self.mode, phrase)
    }

    /// Evaluates a phrase in the given mode and renders the result.
    ///
    /// # Errors
    ///
    /// See [`Session::evaluate`].
    pub fn evaluate_as(&self, mode: Mode, phrase: &str) -> Result<String> {
        let evaluator = self.evaluator()?;
        match mode {
            Mode::Number => {
                let number = evaluator.evaluate(phrase)?;
                self.render(&number)
            }
            Mode::Tokens => {
                let stream = evaluator.tokenize(phrase)?;
                self.render(&stream)
            }
            Mode::Date => {
                let date = DateParser::new(evaluator)
                    .parse(phrase)
                    .ok_or_else(|| RuntimeError::InvalidDate(phrase.trim().to_string()))?;
                self.render(&date)
            }
        }
    }

    fn render<T>(&self, value: &T) -> Result<String>
    where
        T: serde::Serialize + fmt::Display,
    {
        if self.json {
            Ok(serde_json::to_string(value)?)
        } else {
            Ok(value.to_string())
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
