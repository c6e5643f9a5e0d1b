//! LexiGlyph
//!
//! Turns a flat word list into a difficulty-tiered dataset for word-guessing
//! games, flagging words that are easy to mistake for one another.
//!
//! # Quick Start
//!
//! ```rust
//! use lexiglyph::config::EngineConfig;
//! use lexiglyph::output::{Layout, to_json};
//! use lexiglyph::pipeline::Pipeline;
//!
//! let config = EngineConfig { tier_count: 2, ..EngineConfig::default() };
//! let output = Pipeline::new(config).run(["listen", "silent", "rotate", "ration"]).unwrap();
//!
//! let listen = output.find("listen").unwrap();
//! assert_eq!(listen.tier.value(), 2);
//! assert_eq!(listen.confused_with[0].word, "silent");
//!
//! let json = to_json(&output, Layout::Words).unwrap();
//! assert!(json.contains("\"listen\""));
//! ```

// Core domain types
pub mod core;

// Engine options
pub mod config;

// Per-word complexity
pub mod scoring;

// Confusable pair detection
pub mod confusion;

// Quantile tiering
pub mod tiers;

// Stage orchestration and result projection
pub mod pipeline;

// Word list collaborators
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal and JSON output
pub mod output;
