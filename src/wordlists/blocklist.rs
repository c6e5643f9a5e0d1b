//! Profanity blocklist
//!
//! A static set of normalized forbidden words, subtracted from the
//! vocabulary before scoring. Also usable on its own to clean a word file.

use crate::core::{WordFilter, normalize};
use rustc_hash::FxHashSet;
use std::fs;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

/// Set of blocked words, stored in normalized form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blocklist {
    words: FxHashSet<String>,
}

/// Counts from cleaning a word file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterReport {
    pub read: usize,
    pub filtered: usize,
    pub written: usize,
}

impl Blocklist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw entries; entries that normalize to nothing are ignored
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = entries
            .into_iter()
            .map(|entry| normalize(entry.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Load a one-word-per-line blocklist file
    ///
    /// A missing file is not an error: a warning is logged and the returned
    /// list blocks nothing.
    ///
    /// # Errors
    /// Returns an I/O error if the file exists but cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %path.display(),
                    "blocklist not found; no words will be filtered"
                );
                return Ok(Self::new());
            }
            Err(e) => return Err(e),
        };

        let list = Self::from_words(content.lines());
        tracing::info!(path = %path.display(), words = list.len(), "blocklist loaded");
        Ok(list)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check any spelling against the list
    #[must_use]
    pub fn blocks(&self, raw: &str) -> bool {
        self.words.contains(&normalize(raw))
    }

    /// Copy `reader` to `writer` line by line, dropping blocked words
    ///
    /// Kept lines are written trimmed.
    ///
    /// # Errors
    /// Returns an I/O error if reading or writing fails.
    pub fn filter_lines<R: BufRead, W: Write>(
        &self,
        reader: R,
        mut writer: W,
    ) -> io::Result<FilterReport> {
        let mut report = FilterReport::default();

        for line in reader.lines() {
            let line = line?;
            report.read += 1;
            let word = line.trim();
            if self.blocks(word) {
                report.filtered += 1;
                tracing::debug!(word, "blocked word removed");
            } else {
                writeln!(writer, "{word}")?;
                report.written += 1;
            }
        }

        writer.flush()?;
        Ok(report)
    }

    /// Clean a word file into a new file
    ///
    /// # Errors
    /// Returns an I/O error if the input cannot be read or the output written.
    pub fn filter_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> io::Result<FilterReport> {
        let reader = io::BufReader::new(fs::File::open(input)?);
        let writer = BufWriter::new(fs::File::create(output)?);
        self.filter_lines(reader, writer)
    }
}

impl WordFilter for Blocklist {
    fn contains(&self, normalized: &str) -> bool {
        self.words.contains(normalized)
    }
}
