//! Vocabulary table for number words.
//!
//! Maps surface word-forms to resolved tokens and records the morphology the
//! decomposer needs: joiner particles, hundred and thousand markers, and the
//! fused century prefixes. A [`Vocabulary`] is immutable once built; all
//! mutation happens in [`VocabularyBuilder`].

use std::collections::HashMap;

use zuelen_foundation::{Category, Token};

/// The connective particle a tens word takes in a digit+tens compound.
///
/// Which class a tens word belongs to depends on how it is pronounced, so
/// each tens spelling is registered with its class explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Joiner {
    /// The short particle, used before most consonants.
    A,
    /// The particle that keeps its final consonant.
    An,
}

impl Joiner {
    /// Returns the surface form of this joiner.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::An => "an",
        }
    }
}

/// Compounding rules of a language.
#[derive(Clone, Debug, Default)]
pub struct Morphology {
    /// Joiner words, tried in order during compound splitting.
    pub joiners: Vec<String>,
    /// Surface forms of the hundred marker.
    pub hundred_markers: Vec<String>,
    /// Surface forms of the thousand marker.
    pub thousand_markers: Vec<String>,
    /// Fused century forms, longest first.
    pub century_prefixes: Vec<String>,
    /// Smallest value a bare digit or teen word may denote on its own.
    pub standalone_minimum: u64,
}

/// An immutable word table.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    language: String,
    entries: HashMap<String, Token>,
    tens_joiners: HashMap<String, Joiner>,
    morphology: Morphology,
    longest: usize,
}

impl Vocabulary {
    /// Language tag this table was built for.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Looks up a word, ignoring case. No fuzzy matching.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<Token> {
        if let Some(token) = self.entries.get(word) {
            return Some(*token);
        }
        if word.chars().any(char::is_uppercase) {
            return self.entries.get(&word.to_lowercase()).copied();
        }
        None
    }

    /// Length in bytes of the longest surface form.
    #[must_use]
    pub const fn longest_word_len(&self) -> usize {
        self.longest
    }

    /// Returns true if the word is in the table.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Returns the fused digit+tens compound for a pair of words, if defined.
    ///
    /// The compound is spelled with the tens word's own joiner, whichever
    /// joiner the caller found between them.
    #[must_use]
    pub fn fused(&self, digit: &str, tens: &str) -> Option<Token> {
        let joiner = self.tens_joiners.get(tens)?;
        self.lookup(&format!("{digit}{}{tens}", joiner.as_str()))
    }

    /// Returns the joiner class of a tens spelling.
    #[must_use]
    pub fn joiner_for(&self, tens: &str) -> Option<Joiner> {
        self.tens_joiners.get(tens).copied()
    }

    /// Returns true if the word is a free-standing joiner.
    #[must_use]
    pub fn is_joiner(&self, word: &str) -> bool {
        self.morphology.joiners.iter().any(|j| j == word)
    }

    /// The compounding rules of this table.
    #[must_use]
    pub fn morphology(&self) -> &Morphology {
        &self.morphology
    }

    /// Number of surface forms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all surface forms and their tokens.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Token)> {
        self.entries.iter().map(|(word, token)| (word.as_str(), *token))
    }

    /// All surface forms, sorted.
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.entries.keys().cloned().collect();
        words.sort();
        words
    }
}

/// Collects atoms and generated compounds into a [`Vocabulary`].
#[derive(Clone, Debug, Default)]
pub struct VocabularyBuilder {
    language: String,
    entries: HashMap<String, Token>,
    tens: Vec<(String, u64, Joiner)>,
    tens_joiners: HashMap<String, Joiner>,
    morphology: Morphology,
}

impl VocabularyBuilder {
    /// Creates an empty builder for a language tag.
    #[must_use]
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Self::default()
        }
    }

    /// Registers a word. A duplicate key keeps the last value written.
    pub fn word(&mut self, word: &str, value: u64, category: Category) -> &mut Self {
        let word = word.to_lowercase();
        let token = Token::new(value, category);
        if let Some(previous) = self.entries.insert(word.clone(), token) {
            if previous != token {
                tracing::debug!(%word, %previous, %token, "vocabulary entry overwritten");
            }
        }
        self
    }

    /// Registers several spellings of the same value.
    pub fn words(&mut self, words: &[&str], value: u64, category: Category) -> &mut Self {
        for word in words {
            self.word(word, value, category);
        }
        self
    }

    /// Registers a word only if the key is still free.
    pub fn word_if_absent(&mut self, word: &str, value: u64, category: Category) -> &mut Self {
        let word = word.to_lowercase();
        self.entries
            .entry(word)
            .or_insert_with(|| Token::new(value, category));
        self
    }

    /// Registers a tens word together with its joiner class.
    pub fn tens(&mut self, word: &str, value: u64, joiner: Joiner) -> &mut Self {
        self.word(word, value, Category::Tens);
        self.tens.push((word.to_lowercase(), value, joiner));
        self.tens_joiners.insert(word.to_lowercase(), joiner);
        self
    }

    /// Registers a free-standing joiner word.
    pub fn joiner(&mut self, word: &str) -> &mut Self {
        self.morphology.joiners.push(word.to_lowercase());
        self
    }

    /// Registers a hundred marker spelling.
    pub fn hundred_marker(&mut self, word: &str) -> &mut Self {
        self.word(word, 100, Category::Hundred);
        self.morphology.hundred_markers.push(word.to_lowercase());
        self
    }

    /// Registers a thousand marker spelling.
    pub fn thousand_marker(&mut self, word: &str) -> &mut Self {
        self.word(word, 1_000, Category::Thousand);
        self.morphology.thousand_markers.push(word.to_lowercase());
        self
    }

    /// Sets the smallest value a bare digit or teen word may denote.
    pub fn standalone_minimum(&mut self, minimum: u64) -> &mut Self {
        self.morphology.standalone_minimum = minimum;
        self
    }

    /// Generates `digit + joiner + tens` compounds for every registered tens word.
    pub fn digit_tens_compounds(&mut self, digits: &[(&str, u64)]) -> &mut Self {
        let tens = self.tens.clone();
        for (digit, digit_value) in digits {
            for (word, tens_value, joiner) in &tens {
                let compound = format!("{digit}{}{word}", joiner.as_str());
                self.word(&compound, tens_value + digit_value, Category::Teen);
            }
        }
        self
    }

    /// Generates fused `prefix + hundred-marker` forms for every marker.
    pub fn fused_hundreds(&mut self, prefixes: &[(&str, u64)]) -> &mut Self {
        let markers = self.morphology.hundred_markers.clone();
        for (prefix, value) in prefixes {
            for marker in &markers {
                self.word(&format!("{prefix}{marker}"), value * 100, Category::Hundred);
            }
        }
        self
    }

    /// Generates fused century forms and records them as peelable prefixes.
    pub fn century_prefixes(&mut self, teens: &[(&str, u64)]) -> &mut Self {
        let markers = self.morphology.hundred_markers.clone();
        for (teen, value) in teens {
            for marker in &markers {
                let prefix = format!("{teen}{marker}");
                self.word(&prefix, value * 100, Category::Hundred);
                self.morphology.century_prefixes.push(prefix.to_lowercase());
            }
        }
        self
    }

    /// Generates ordinal forms from stems, with and without the final `-n`.
    ///
    /// The bare stem is added too unless it already names a cardinal.
    pub fn ordinals<S: AsRef<str>>(&mut self, stems: &[(S, u64)]) -> &mut Self {
        for (stem, value) in stems {
            let stem = stem.as_ref();
            self.word(&format!("{stem}en"), *value, Category::Ordinal);
            self.word(&format!("{stem}e"), *value, Category::Ordinal);
            self.word_if_absent(stem, *value, Category::Ordinal);
        }
        self
    }

    /// Freezes the table.
    #[must_use]
    pub fn build(mut self) -> Vocabulary {
        self.morphology
            .century_prefixes
            .sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        self.morphology.century_prefixes.dedup();
        tracing::debug!(
            language = %self.language,
            entries = self.entries.len(),
            "vocabulary built"
        );
        let longest = self.entries.keys().map(String::len).max().unwrap_or(0);
        Vocabulary {
            language: self.language,
            entries: self.entries,
            tens_joiners: self.tens_joiners,
            morphology: self.morphology,
            longest,
        }
    }
}
