//! Word registry
//!
//! Owns every `Word` of a run. Tokens are normalized, deduplicated on their
//! normalized form and given dense `WordId`s in first-seen order.

use super::external::WordFilter;
use super::word::{Word, WordError, WordId};
use rustc_hash::FxHashMap;

/// Accepted word length range, in letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: usize,
    pub max: Option<usize>,
}

impl LengthBounds {
    #[must_use]
    pub const fn new(min: usize, max: Option<usize>) -> Self {
        Self { min, max }
    }

    fn check(self, word: &Word) -> Result<(), WordError> {
        if word.len() < self.min {
            return Err(WordError::TooShort {
                word: word.text().to_string(),
                min: self.min,
            });
        }
        match self.max {
            Some(max) if word.len() > max => Err(WordError::TooLong {
                word: word.text().to_string(),
                max,
            }),
            _ => Ok(()),
        }
    }
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self::new(1, None)
    }
}

/// Registry of normalized words
#[derive(Debug, Clone, Default)]
pub struct WordRegistry {
    words: Vec<Word>,
    index: FxHashMap<String, WordId>,
    bounds: LengthBounds,
    tokens_seen: usize,
    skipped: usize,
}

impl WordRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry that skips words outside `bounds`
    #[must_use]
    pub fn with_bounds(bounds: LengthBounds) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    /// Register a raw token
    ///
    /// Returns the id of the (possibly pre-existing) word. A repeat of an
    /// already registered word returns its existing id and records the new
    /// spelling.
    ///
    /// # Errors
    /// Returns the `WordError` explaining why the token was skipped. Skips are
    /// counted and never fatal.
    ///
    /// # Examples
    /// ```
    /// use lexiglyph::core::WordRegistry;
    ///
    /// let mut registry = WordRegistry::new();
    /// let first = registry.register("Cat").unwrap();
    /// let again = registry.register("cat!").unwrap();
    /// assert_eq!(first, again);
    /// assert!(registry.register("123").is_err());
    /// assert_eq!(registry.skipped(), 1);
    /// ```
    pub fn register(&mut self, raw: &str) -> Result<WordId, WordError> {
        self.tokens_seen += 1;

        let word = match Word::new(raw).and_then(|word| {
            self.bounds.check(&word)?;
            Ok(word)
        }) {
            Ok(word) => word,
            Err(e) => {
                self.skipped += 1;
                tracing::trace!(token = raw, reason = %e, "token skipped");
                return Err(e);
            }
        };

        if let Some(&id) = self.index.get(word.text()) {
            self.words[id.index()].add_spelling(raw);
            return Ok(id);
        }

        let id = WordId::new(self.words.len() as u32);
        self.index.insert(word.text().to_string(), id);
        self.words.push(word);
        Ok(id)
    }

    /// Register every token from an iterator, ignoring skips
    pub fn extend<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            let _ = self.register(token.as_ref());
        }
    }

    /// Drop every word the filter blocks
    ///
    /// Survivors keep their relative order and spellings but are renumbered so
    /// ids stay dense. Returns the new registry and the number of words removed.
    #[must_use]
    pub fn without(self, filter: &dyn WordFilter) -> (Self, usize) {
        let mut kept = Self {
            bounds: self.bounds,
            tokens_seen: self.tokens_seen,
            skipped: self.skipped,
            ..Self::default()
        };
        let mut removed = 0;

        for word in self.words {
            if filter.contains(word.text()) {
                tracing::debug!(word = word.text(), "word filtered");
                removed += 1;
                continue;
            }
            let id = WordId::new(kept.words.len() as u32);
            kept.index.insert(word.text().to_string(), id);
            kept.words.push(word);
        }

        (kept, removed)
    }

    /// All words in first-seen order
    #[inline]
    #[must_use]
    pub fn all_words(&self) -> &[Word] {
        &self.words
    }

    /// Look up a word by id
    #[inline]
    #[must_use]
    pub fn get(&self, id: WordId) -> Option<&Word> {
        self.words.get(id.index())
    }

    /// Look up a word id by any spelling
    #[must_use]
    pub fn id_of(&self, raw: &str) -> Option<WordId> {
        self.index.get(&super::normalize(raw)).copied()
    }

    /// Iterate `(id, word)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &Word)> {
        self.words
            .iter()
            .enumerate()
            .map(|(i, word)| (WordId::new(i as u32), word))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of tokens offered to `register`
    #[inline]
    #[must_use]
    pub const fn tokens_seen(&self) -> usize {
        self.tokens_seen
    }

    /// Number of tokens skipped as malformed or out of bounds
    #[inline]
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }
}
