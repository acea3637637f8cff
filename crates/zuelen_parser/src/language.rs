//! Language dispatch.
//!
//! Routes a language tag to the evaluator for that language. Tags are
//! matched exactly first, then by their two-letter primary subtag, so
//! `lb_LU` and `lb-LU` both reach the Luxembourgish table.

use std::collections::HashMap;
use std::sync::OnceLock;

use zuelen_foundation::{Error, Number, Result};

use crate::config::EvaluatorConfig;
use crate::evaluator::Evaluator;
use crate::luxembourgish;
use crate::vocabulary::Vocabulary;

/// Maps language tags to vocabularies.
#[derive(Clone, Debug, Default)]
pub struct LanguageRegistry {
    languages: HashMap<String, &'static Vocabulary>,
    config: EvaluatorConfig,
}

impl LanguageRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with every built-in language.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("lb", luxembourgish::vocabulary());
        registry.register("lb_LU", luxembourgish::vocabulary());
        registry
    }

    /// Builder method to set the configuration of resolved evaluators.
    #[must_use]
    pub fn with_config(mut self, config: EvaluatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Registers a vocabulary under a tag, replacing any previous one.
    pub fn register(&mut self, tag: impl Into<String>, vocabulary: &'static Vocabulary) {
        self.languages.insert(tag.into(), vocabulary);
    }

    /// Returns true if the tag resolves to a language.
    #[must_use]
    pub fn supports(&self, tag: &str) -> bool {
        self.lookup(tag).is_some()
    }

    /// Registered tags, sorted.
    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Returns the evaluator for a tag.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedLanguage` if neither the tag nor its primary
    /// subtag is registered.
    pub fn resolve(&self, tag: &str) -> Result<Evaluator<'static>> {
        let vocabulary = self
            .lookup(tag)
            .ok_or_else(|| Error::unsupported_language(tag))?;
        Ok(Evaluator::new(vocabulary).with_config(self.config))
    }

    /// Evaluates a phrase in the given language.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedLanguage` for an unknown tag, otherwise the
    /// evaluator's error.
    pub fn evaluate(&self, text: &str, tag: &str) -> Result<Number> {
        self.resolve(tag)?.evaluate(text)
    }

    fn lookup(&self, tag: &str) -> Option<&'static Vocabulary> {
        if let Some(vocabulary) = self.languages.get(tag) {
            return Some(*vocabulary);
        }
        let primary = tag.get(..2)?.to_ascii_lowercase();
        self.languages.get(&primary).copied()
    }
}

/// Returns the shared registry of built-in languages.
pub fn default_registry() -> &'static LanguageRegistry {
    static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();
    REGISTRY.get_or_init(LanguageRegistry::with_defaults)
}

/// Evaluates a phrase in the given language using the built-in languages.
///
/// # Errors
///
/// See [`LanguageRegistry::evaluate`].
pub fn w2n(text: &str, lang: &str) -> Result<Number> {
    default_registry().evaluate(text, lang)
}
