//! Build command
//!
//! Reads a word file, runs the full pipeline and writes the tiered dataset.

use crate::config::EngineConfig;
use crate::output::{Layout, write_json};
use crate::pipeline::{Pipeline, PipelineOutput, Stage};
use crate::wordlists::loader::load_tokens;
use crate::wordlists::{Blocklist, FrequencyRanks};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

/// Inputs and destinations of a build run
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub input: PathBuf,
    /// Write JSON here; stdout when absent
    pub output: Option<PathBuf>,
    pub blocklist: Option<PathBuf>,
    pub frequency: Option<PathBuf>,
    pub layout: Layout,
    /// Show a spinner on stderr while stages run
    pub progress: bool,
}

/// Load collaborators, run the pipeline and write the JSON document
///
/// Nothing is written if any stage fails.
///
/// # Errors
/// Returns an error if an input file cannot be read, the run fails or the
/// output cannot be written.
pub fn run_build(config: EngineConfig, options: &BuildOptions) -> Result<PipelineOutput> {
    let output = build_dataset(config, options)?;

    match &options.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_json(&mut writer, &output, options.layout)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            writeln!(writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_json(&mut writer, &output, options.layout)
                .context("Failed to write JSON to stdout")?;
            writeln!(writer)?;
        }
    }

    Ok(output)
}

/// Run the pipeline over the configured input without writing anything
///
/// # Errors
/// Returns an error if an input file cannot be read or the run fails.
pub fn build_dataset(config: EngineConfig, options: &BuildOptions) -> Result<PipelineOutput> {
    let frequency = load_frequency(options)?;
    build_with_frequency(config, options, frequency.as_ref())
}

/// Read the frequency ranks named in `options`, if any
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn load_frequency(options: &BuildOptions) -> Result<Option<FrequencyRanks>> {
    options
        .frequency
        .as_ref()
        .map(|path| {
            FrequencyRanks::load(path)
                .with_context(|| format!("Failed to read frequency ranks {}", path.display()))
        })
        .transpose()
}

/// Like [`build_dataset`], with frequency ranks the caller already loaded
///
/// `options.frequency` is ignored.
///
/// # Errors
/// Returns an error if an input file cannot be read or the run fails.
pub fn build_with_frequency(
    config: EngineConfig,
    options: &BuildOptions,
    frequency: Option<&FrequencyRanks>,
) -> Result<PipelineOutput> {
    let tokens = load_tokens(&options.input)
        .with_context(|| format!("Failed to read word list {}", options.input.display()))?;

    let blocklist = match &options.blocklist {
        Some(path) => Blocklist::load(path)
            .with_context(|| format!("Failed to read blocklist {}", path.display()))?,
        None => Blocklist::new(),
    };

    let spinner = options.progress.then(stage_spinner);
    let report = |stage: Stage| {
        if let Some(pb) = &spinner {
            pb.set_message(stage.activity());
        }
    };

    let mut pipeline = Pipeline::new(config).with_filter(&blocklist).on_stage(&report);
    if let Some(ranks) = frequency {
        pipeline = pipeline.with_frequency(ranks);
    }

    let result = pipeline.run(&tokens);
    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }

    Ok(result?)
}

fn stage_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn build_writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("words.txt");
        let output = dir.path().join("out.json");
        fs::write(&input, "cat\nact\ncats\n").unwrap();

        let options = BuildOptions {
            input,
            output: Some(output.clone()),
            ..BuildOptions::default()
        };
        let config = EngineConfig {
            tier_count: 2,
            ..EngineConfig::default()
        };
        let result = run_build(config, &options).unwrap();
        assert_eq!(result.words.len(), 3);

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["cats"]["tier"], 2);
    }

    #[test]
    fn build_applies_blocklist_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("words.txt");
        let blocked = dir.path().join("blocked.txt");
        fs::write(&input, "bad\nword\n").unwrap();
        fs::write(&blocked, "BAD\n").unwrap();

        let options = BuildOptions {
            input,
            blocklist: Some(blocked),
            ..BuildOptions::default()
        };
        let config = EngineConfig {
            tier_count: 1,
            ..EngineConfig::default()
        };
        let output = build_dataset(config, &options).unwrap();
        assert_eq!(output.diagnostics.filtered, 1);
        assert_eq!(output.words[0].word, "word");
    }

    #[test]
    fn failed_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("words.txt");
        let output = dir.path().join("out.json");
        fs::write(&input, "\n123\n").unwrap();

        let options = BuildOptions {
            input,
            output: Some(output.clone()),
            ..BuildOptions::default()
        };
        assert!(run_build(EngineConfig::default(), &options).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn missing_input_is_an_error() {
        let options = BuildOptions {
            input: PathBuf::from("/nonexistent/words.txt"),
            ..BuildOptions::default()
        };
        assert!(build_dataset(EngineConfig::default(), &options).is_err());
    }
}
