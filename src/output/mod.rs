//! Terminal and file output
//!
//! JSON documents for game data, colored summaries for people.

pub mod display;
pub mod formatters;
pub mod json;

pub use display::{print_analysis_result, print_build_summary, print_filter_report};
pub use json::{Layout, to_json, write_json};
