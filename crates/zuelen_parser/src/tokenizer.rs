//! Input tokenization.
//!
//! Converts a raw phrase into a [`TokenStream`] in three stages:
//!
//! - [`Normalizer`] folds case, fuses hyphenated fragments and splits words
//! - [`Decomposer`] resolves each word, splitting fused compounds
//! - [`Tokenizer`] peels trailing multipliers, splits off the decimal tail
//!   and short-circuits ordinals

use std::collections::HashMap;

use zuelen_foundation::{Category, Error, Result, Token, TokenStream};

use crate::vocabulary::Vocabulary;

/// Splits raw input into lowercase words.
#[derive(Clone, Copy, Debug)]
pub struct Normalizer<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> Normalizer<'v> {
    /// Creates a normalizer for a vocabulary.
    #[must_use]
    pub const fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Splits a phrase into words.
    ///
    /// - Converts words to lowercase
    /// - Fuses `a-b` into `ab` when both sides are letters
    /// - Splits on whitespace and commas, strips other punctuation
    /// - Drops free-standing joiner words
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` if the phrase has no number words left.
    pub fn words(&self, input: &str) -> Result<Vec<String>> {
        if !input.chars().any(char::is_alphabetic) {
            return Err(Error::empty_input());
        }

        let mut words = Vec::new();
        let mut chars = input.chars().peekable();
        let mut current_word = String::new();

        while let Some(ch) = chars.next() {
            match ch {
                '-' => {
                    let joins_letters = current_word
                        .chars()
                        .next_back()
                        .is_some_and(char::is_alphabetic)
                        && chars.peek().is_some_and(|c| c.is_alphabetic());
                    if !joins_letters {
                        flush(&mut current_word, &mut words);
                    }
                }
                ',' => flush(&mut current_word, &mut words),
                c if c.is_whitespace() => flush(&mut current_word, &mut words),
                '.' | '!' | '?' | ';' | ':' | '\'' | '"' => {}
                _ => current_word.extend(ch.to_lowercase()),
            }
        }
        flush(&mut current_word, &mut words);

        words.retain(|word| !self.vocabulary.is_joiner(word));
        if words.is_empty() {
            return Err(Error::empty_input());
        }
        Ok(words)
    }
}

fn flush(current_word: &mut String, words: &mut Vec<String>) {
    if !current_word.is_empty() {
        words.push(std::mem::take(current_word));
    }
}

/// Resolves single words against the vocabulary.
///
/// A word that is not an entry is split by the first rule that covers it
/// completely: century prefix, hundred infix, thousand infix, joiner infix,
/// and finally the longest known prefix. Sub-fragments are memoized by their
/// byte span in the word, so every fragment is resolved at most once.
///
/// Words longer than [`MAX_FRAGMENTS`] vocabulary entries are rejected up
/// front, which bounds both the memo and the recursion depth.
#[derive(Clone, Copy, Debug)]
pub struct Decomposer<'v> {
    vocabulary: &'v Vocabulary,
}

/// The most vocabulary entries a single fused word may be built from.
pub const MAX_FRAGMENTS: usize = 16;

impl<'v> Decomposer<'v> {
    /// Creates a decomposer for a vocabulary.
    #[must_use]
    pub const fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Length in bytes of the longest word this decomposer accepts.
    #[must_use]
    pub fn max_word_len(&self) -> usize {
        self.vocabulary.longest_word_len().saturating_mul(MAX_FRAGMENTS)
    }

    /// Decomposes one lowercase word into tokens.
    ///
    /// # Errors
    ///
    /// Returns a tokenization error if the word is longer than
    /// [`Self::max_word_len`] or no rule covers the whole word.
    pub fn decompose(&self, word: &str) -> Result<Vec<Token>> {
        if word.len() > self.max_word_len() {
            tracing::debug!(len = word.len(), max = self.max_word_len(), "word too long");
            return Err(Error::tokenization(word));
        }
        let mut memo = Memo::new();
        let tokens = self
            .resolve(word, (0, word.len()), &mut memo)
            .ok_or_else(|| Error::tokenization(word))?;
        tracing::trace!(word, tokens = tokens.len(), "decomposed");
        Ok(tokens)
    }

    fn resolve(&self, word: &str, span: Span, memo: &mut Memo) -> Option<Vec<Token>> {
        let fragment = &word[span.0..span.1];
        if fragment.is_empty() {
            return None;
        }
        if let Some(token) = self.vocabulary.lookup(fragment) {
            return Some(vec![token]);
        }
        if let Some(known) = memo.get(&span) {
            return known.clone();
        }
        let tokens = self
            .peel_century(word, span, memo)
            .or_else(|| self.split_hundred(word, span, memo))
            .or_else(|| self.split_thousand(word, span, memo))
            .or_else(|| self.split_joiner(fragment))
            .or_else(|| self.longest_prefix(word, span, memo));
        memo.insert(span, tokens.clone());
        tokens
    }

    fn peel_century(
        &self,
        word: &str,
        (start, end): Span,
        memo: &mut Memo,
    ) -> Option<Vec<Token>> {
        let fragment = &word[start..end];
        for prefix in &self.vocabulary.morphology().century_prefixes {
            if !fragment.starts_with(prefix.as_str()) {
                continue;
            }
            let Some(head) = self.vocabulary.lookup(prefix) else {
                continue;
            };
            if let Some(tail) = self.resolve(word, (start + prefix.len(), end), memo) {
                return Some(prepend(head, tail));
            }
        }
        None
    }

    fn split_hundred(
        &self,
        word: &str,
        (start, end): Span,
        memo: &mut Memo,
    ) -> Option<Vec<Token>> {
        let markers = &self.vocabulary.morphology().hundred_markers;
        let (index, marker) = first_marker(&word[start..end], markers)?;
        let at = start + index;
        let after = at + marker.len();

        let mut tokens = if at == start {
            vec![self.vocabulary.lookup(marker)?]
        } else if let Some(fused) = self.vocabulary.lookup(&word[start..after]) {
            vec![fused]
        } else {
            let mut head = self.resolve(word, (start, at), memo)?;
            head.push(self.vocabulary.lookup(marker)?);
            head
        };
        if after < end {
            tokens.extend(self.resolve(word, (after, end), memo)?);
        }
        Some(tokens)
    }

    fn split_thousand(
        &self,
        word: &str,
        (start, end): Span,
        memo: &mut Memo,
    ) -> Option<Vec<Token>> {
        let markers = &self.vocabulary.morphology().thousand_markers;
        let (index, marker) = first_marker(&word[start..end], markers)?;
        let at = start + index;
        let after = at + marker.len();

        let mut tokens = if at == start {
            Vec::new()
        } else {
            self.resolve(word, (start, at), memo)?
        };
        tokens.push(self.vocabulary.lookup(marker)?);
        if after < end {
            tokens.extend(self.resolve(word, (after, end), memo)?);
        }
        Some(tokens)
    }

    fn split_joiner(&self, word: &str) -> Option<Vec<Token>> {
        for joiner in &self.vocabulary.morphology().joiners {
            for (index, _) in word.match_indices(joiner.as_str()) {
                let left = &word[..index];
                let right = &word[index + joiner.len()..];
                if left.is_empty() || right.is_empty() {
                    continue;
                }
                let (Some(first), Some(second)) =
                    (self.vocabulary.lookup(left), self.vocabulary.lookup(right))
                else {
                    continue;
                };
                return Some(match self.vocabulary.fused(left, right) {
                    Some(fused) => vec![fused],
                    None => vec![first, second],
                });
            }
        }
        None
    }

    fn longest_prefix(
        &self,
        word: &str,
        (start, end): Span,
        memo: &mut Memo,
    ) -> Option<Vec<Token>> {
        let fragment = &word[start..end];
        let longest = self.vocabulary.longest_word_len();
        let (len, head) = fragment
            .char_indices()
            .rev()
            .map(|(len, _)| len)
            .filter(|&len| len > 0 && len <= longest)
            .find_map(|len| self.vocabulary.lookup(&fragment[..len]).map(|token| (len, token)))?;
        let tail = self.resolve(word, (start + len, end), memo)?;
        Some(prepend(head, tail))
    }
}

/// Byte range of a fragment within the word being decomposed.
type Span = (usize, usize);

type Memo = HashMap<Span, Option<Vec<Token>>>;

/// Finds the earliest occurrence of any marker in a word.
fn first_marker<'m>(word: &str, markers: &'m [String]) -> Option<(usize, &'m str)> {
    markers
        .iter()
        .filter_map(|marker| word.find(marker.as_str()).map(|index| (index, marker.as_str())))
        .min_by_key(|(index, _)| *index)
}

fn prepend(head: Token, tail: Vec<Token>) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(tail.len() + 1);
    tokens.push(head);
    tokens.extend(tail);
    tokens
}

/// Full tokenization pipeline.
#[derive(Clone, Copy, Debug)]
pub struct Tokenizer<'v> {
    normalizer: Normalizer<'v>,
    decomposer: Decomposer<'v>,
}

impl<'v> Tokenizer<'v> {
    /// Creates a tokenizer for a vocabulary.
    #[must_use]
    pub const fn new(vocabulary: &'v Vocabulary) -> Self {
        Self {
            normalizer: Normalizer::new(vocabulary),
            decomposer: Decomposer::new(vocabulary),
        }
    }

    /// Tokenizes a phrase into main, decimal and multiplier tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if the phrase is empty, a word cannot be resolved,
    /// or the decimal tail is malformed.
    pub fn tokenize(&self, input: &str) -> Result<TokenStream> {
        let words = self.normalizer.words(input)?;
        tracing::trace!(?words, "normalized");

        let mut tokens = Vec::new();
        for word in &words {
            tokens.extend(self.decomposer.decompose(word)?);
        }

        let multipliers = extract_multipliers(&mut tokens);
        let (main, decimal) = split_decimal(tokens)?;
        let stream = short_circuit_ordinal(TokenStream {
            main,
            decimal,
            multipliers,
        });
        tracing::trace!(%stream, "tokenized");
        Ok(stream)
    }
}

/// Pops trailing scale words while nothing before them is larger.
///
/// A tie counts: in "eent dausend fënnef honnert dausend" the last `dausend`
/// multiplies the whole phrase. Returns the multipliers in input order.
fn extract_multipliers(tokens: &mut Vec<Token>) -> Vec<Token> {
    let mut multipliers = Vec::new();
    while let [rest @ .., last] = tokens.as_slice() {
        let last = *last;
        let place = last.place_value();
        let peel = !rest.is_empty()
            && last.category.is_scale()
            && place > 1
            && rest.iter().all(|token| token.place_value() <= place);
        if !peel {
            break;
        }
        tokens.pop();
        multipliers.push(last);
    }
    multipliers.reverse();
    multipliers
}

fn split_decimal(mut tokens: Vec<Token>) -> Result<(Vec<Token>, Vec<Token>)> {
    let Some(index) = tokens.iter().position(|t| t.is(Category::DecimalMarker)) else {
        return Ok((tokens, Vec::new()));
    };
    let decimal = tokens.split_off(index + 1);
    tokens.pop();

    if decimal.is_empty() {
        return Err(Error::number_sequence("decimal marker without digits"));
    }
    if decimal.iter().any(|t| t.is(Category::DecimalMarker)) {
        return Err(Error::number_sequence("more than one decimal marker"));
    }
    Ok((tokens, decimal))
}

fn short_circuit_ordinal(stream: TokenStream) -> TokenStream {
    match stream.main.iter().find(|t| t.is(Category::Ordinal)) {
        Some(ordinal) => TokenStream::from_main(vec![*ordinal]),
        None => stream,
    }
}
