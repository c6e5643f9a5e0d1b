//! Word list loading utilities
//!
//! Input files hold one candidate word per line. Lines are passed through
//! raw (minus surrounding whitespace); normalization and skip counting are
//! the registry's job.

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

/// Load tokens from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use lexiglyph::wordlists::loader::load_tokens;
///
/// let tokens = load_tokens("data/words.txt").unwrap();
/// println!("Loaded {} tokens", tokens.len());
/// ```
pub fn load_tokens<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = fs::File::open(path)?;
    tokens_from_reader(io::BufReader::new(file))
}

/// Read one token per line from any buffered reader
///
/// Blank lines are kept so the registry can count them as skipped.
///
/// # Errors
///
/// Returns an I/O error if reading fails or the input is not UTF-8.
pub fn tokens_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader
        .lines()
        .map(|line| line.map(|l| l.trim().to_string()))
        .collect()
}

/// Convert a string slice into owned tokens
///
/// # Examples
/// ```
/// use lexiglyph::wordlists::loader::tokens_from_slice;
///
/// let tokens = tokens_from_slice(&["cat", " act "]);
/// assert_eq!(tokens, vec!["cat", "act"]);
/// ```
#[must_use]
pub fn tokens_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|s| s.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reader_keeps_blank_lines() {
        let input = "cat\n\n  act  \n123\n";
        let tokens = tokens_from_reader(input.as_bytes()).unwrap();
        assert_eq!(tokens, vec!["cat", "", "act", "123"]);
    }

    #[test]
    fn reader_empty() {
        let tokens = tokens_from_reader(&b""[..]).unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Listen").unwrap();
        writeln!(file, "silent").unwrap();

        let tokens = load_tokens(file.path()).unwrap();
        assert_eq!(tokens, vec!["Listen", "silent"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_tokens(dir.path().join("absent.txt")).is_err());
    }
}
