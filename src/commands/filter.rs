//! Filter command
//!
//! Copies a word file minus blocklisted words, without scoring anything.

use crate::wordlists::{Blocklist, FilterReport};
use anyhow::{Context, Result};
use std::path::Path;

/// Clean `input` into `output` using the blocklist at `blocklist`
///
/// A missing blocklist file filters nothing.
///
/// # Errors
/// Returns an error if the input cannot be read or the output cannot be written.
pub fn run_filter(input: &Path, output: &Path, blocklist: &Path) -> Result<FilterReport> {
    let list = Blocklist::load(blocklist)
        .with_context(|| format!("Failed to read blocklist {}", blocklist.display()))?;

    let report = list.filter_file(input, output).with_context(|| {
        format!(
            "Failed to filter {} into {}",
            input.display(),
            output.display()
        )
    })?;

    tracing::info!(
        read = report.read,
        filtered = report.filtered,
        written = report.written,
        "filter complete"
    );
    Ok(report)
}
