//! Command implementations

pub mod analyze;
pub mod build;
pub mod filter;

pub use analyze::{AnalysisResult, analyze_word, run_analyze};
pub use build::{BuildOptions, build_dataset, build_with_frequency, load_frequency, run_build};
pub use filter::run_filter;
