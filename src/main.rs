//! LexiGlyph - CLI
//!
//! Builds difficulty-tiered word datasets, explains single words and cleans
//! word files against a blocklist.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lexiglyph::{
    commands::{BuildOptions, run_analyze, run_build, run_filter},
    config::EngineConfig,
    output::{Layout, print_analysis_result, print_build_summary, print_filter_report},
};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "lexiglyph",
    about = "Difficulty-tiered word dictionaries with confusable-word detection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Engine configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log detail (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Options that override the configuration file
#[derive(Args, Debug, Default)]
struct EngineOverrides {
    /// Number of difficulty tiers
    #[arg(short = 't', long)]
    tiers: Option<usize>,

    /// Weight of the summed confusion strengths
    #[arg(long)]
    confusion_weight: Option<f64>,

    /// Abort if the vocabulary exceeds this many words
    #[arg(long)]
    max_words: Option<usize>,

    /// Abort if the run takes longer than this many seconds
    #[arg(long)]
    time_limit: Option<f64>,
}

impl EngineOverrides {
    fn apply(&self, mut config: EngineConfig) -> EngineConfig {
        if let Some(tiers) = self.tiers {
            config.tier_count = tiers;
        }
        if let Some(weight) = self.confusion_weight {
            config.confusion_weight = weight;
        }
        if self.max_words.is_some() {
            config.max_words = self.max_words;
        }
        if self.time_limit.is_some() {
            config.time_limit_secs = self.time_limit;
        }
        config
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build the tiered dataset from a word list
    Build {
        /// Word list, one word per line
        input: PathBuf,

        /// Output JSON file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Blocklist of words to drop before scoring
        #[arg(short, long)]
        blocklist: Option<PathBuf>,

        /// Frequency ranks ("word rank" or one word per line)
        #[arg(short, long)]
        frequency: Option<PathBuf>,

        /// Output layout
        #[arg(short, long, value_enum, default_value_t = Layout::Words)]
        layout: Layout,

        /// Skip the summary and progress display
        #[arg(short, long)]
        quiet: bool,

        #[command(flatten)]
        overrides: EngineOverrides,
    },

    /// Explain the score, tier and confusions of one word
    Analyze {
        /// Word to analyze
        word: String,

        /// Word list the word belongs to
        input: PathBuf,

        /// Blocklist of words to drop before scoring
        #[arg(short, long)]
        blocklist: Option<PathBuf>,

        /// Frequency ranks ("word rank" or one word per line)
        #[arg(short, long)]
        frequency: Option<PathBuf>,

        #[command(flatten)]
        overrides: EngineOverrides,
    },

    /// Copy a word list without blocklisted words
    Filter {
        /// Word list to clean
        input: PathBuf,

        /// Where to write the clean list
        output: PathBuf,

        /// Blocklist, one word per line
        #[arg(short, long, default_value = "profanity_list.txt")]
        blocklist: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let base = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Build {
            input,
            output,
            blocklist,
            frequency,
            layout,
            quiet,
            overrides,
        } => {
            let config = overrides.apply(base);
            config.validate().context("Invalid configuration")?;

            let to_stdout = output.is_none();
            let options = BuildOptions {
                input,
                output,
                blocklist,
                frequency,
                layout,
                progress: !quiet,
            };
            let result = run_build(config, &options)?;

            // JSON on stdout stays machine-readable
            if !quiet && !to_stdout {
                print_build_summary(&result, options.output.as_deref());
            }
        }

        Commands::Analyze {
            word,
            input,
            blocklist,
            frequency,
            overrides,
        } => {
            let config = overrides.apply(base);
            config.validate().context("Invalid configuration")?;

            let options = BuildOptions {
                input,
                blocklist,
                frequency,
                progress: true,
                ..BuildOptions::default()
            };
            let result = run_analyze(&word, config, &options)?;
            print_analysis_result(&result);
        }

        Commands::Filter {
            input,
            output,
            blocklist,
        } => {
            let report = run_filter(&input, &output, &blocklist)?;
            print_filter_report(&report, &input, &output);
        }
    }

    Ok(())
}
