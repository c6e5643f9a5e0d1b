//! Word representation
//!
//! A Word is identified by its normalized form and carries the derived keys
//! (signature, phonetic code) that the confusion detector buckets on.

use super::letters;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::fmt;

/// Stable identity of a word within one registry
///
/// Ids are dense indices in first-seen order, so they double as positions in
/// per-word vectors (scores, tiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordId(u32);

impl WordId {
    #[inline]
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Position of this word in registry order
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Error type for tokens that cannot become words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("token is empty")]
    Empty,
    #[error("token '{0}' contains no alphabetic characters")]
    NoAlphabetic(String),
    #[error("word '{word}' is shorter than {min} letters")]
    TooShort { word: String, min: usize },
    #[error("word '{word}' is longer than {max} letters")]
    TooLong { word: String, max: usize },
}

/// Normalize a raw token: lowercase, letters only
///
/// Normalizing an already-normalized word returns it unchanged.
///
/// # Examples
/// ```
/// use lexiglyph::core::normalize;
///
/// assert_eq!(normalize("  Don't! "), "dont");
/// assert_eq!(normalize(&normalize("Co-Op")), normalize("Co-Op"));
/// assert_eq!(normalize("123"), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphabetic())
        .collect()
}

/// A normalized vocabulary word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: Vec<char>,
    spellings: BTreeSet<String>,
    signature: String,
    phonetic: String,
}

impl Word {
    /// Create a new Word from a raw token
    ///
    /// The trimmed token is kept as the word's first original spelling.
    ///
    /// # Errors
    /// Returns `WordError` if the token is blank or has no alphabetic content.
    ///
    /// # Examples
    /// ```
    /// use lexiglyph::core::Word;
    ///
    /// let word = Word::new("Listen").unwrap();
    /// assert_eq!(word.text(), "listen");
    /// assert_eq!(word.signature(), "eilnst");
    ///
    /// assert!(Word::new("   ").is_err());
    /// assert!(Word::new("42").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, WordError> {
        let trimmed = raw.trim();
        let text = normalize(trimmed);

        if text.is_empty() {
            return Err(if trimmed.is_empty() {
                WordError::Empty
            } else {
                WordError::NoAlphabetic(trimmed.to_string())
            });
        }

        let letters: Vec<char> = text.chars().collect();
        let signature = letters::signature(&letters);
        let phonetic = letters::phonetic_code(&letters);

        let mut spellings = BTreeSet::new();
        spellings.insert(trimmed.to_string());

        Ok(Self {
            text,
            letters,
            spellings,
            signature,
            phonetic,
        })
    }

    /// Normalized form (the word's identity)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letters of the normalized form
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: a Word has at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Sorted-letter key shared by anagrams
    #[inline]
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Coarse sound-alike key
    #[inline]
    #[must_use]
    pub fn phonetic_code(&self) -> &str {
        &self.phonetic
    }

    /// Original spellings that normalized to this word, in sorted order
    pub fn spellings(&self) -> impl Iterator<Item = &str> {
        self.spellings.iter().map(String::as_str)
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Count of each letter in the word
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            let count = counts.entry(ch).or_insert(0u8);
            *count = count.saturating_add(1);
        }
        counts
    }

    pub(crate) fn add_spelling(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if !self.spellings.contains(trimmed) {
            self.spellings.insert(trimmed.to_string());
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letters(), &['c', 'r', 'a', 'n', 'e']);
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_strips_punctuation_and_whitespace() {
        let word = Word::new("  rock'n'roll\t").unwrap();
        assert_eq!(word.text(), "rocknroll");
        assert_eq!(word.spellings().collect::<Vec<_>>(), vec!["rock'n'roll"]);
    }

    #[test]
    fn word_creation_rejects_blank() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("  \t "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_rejects_non_alphabetic() {
        assert_eq!(
            Word::new("123"),
            Err(WordError::NoAlphabetic("123".to_string()))
        );
        assert!(Word::new("--!").is_err());
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["Hello", "O'Brien", "  naïve  ", "ÉCOLE", "x-ray", "123", ""] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn signature_groups_anagrams() {
        let listen = Word::new("listen").unwrap();
        let silent = Word::new("silent").unwrap();
        let tinsel = Word::new("Tinsel").unwrap();
        assert_eq!(listen.signature(), silent.signature());
        assert_eq!(listen.signature(), tinsel.signature());
        assert_eq!(listen.signature(), "eilnst");
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter('c'));
        assert!(word.has_letter('e'));
        assert!(!word.has_letter('z'));
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&'s'), Some(&1));
        assert_eq!(counts.get(&'e'), Some(&2));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn spellings_are_deduplicated_and_sorted() {
        let mut word = Word::new("Cat").unwrap();
        word.add_spelling("cat");
        word.add_spelling(" Cat ");
        word.add_spelling("CAT");
        assert_eq!(word.spellings().collect::<Vec<_>>(), vec!["CAT", "Cat", "cat"]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("Crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_id_index_roundtrip() {
        let id = WordId::new(7);
        assert_eq!(id.index(), 7);
        assert_eq!(id.to_string(), "#7");
        assert!(WordId::new(1) < WordId::new(2));
    }
}
