//! End-to-end run: ingest, filter, score, detect, tier, project

mod budget;
mod engine;
mod error;
mod projection;

pub use budget::{RunBudget, Stage};
pub use engine::{Diagnostics, Pipeline, PipelineOutput};
pub use error::PipelineError;
pub use projection::{Confusable, ProjectedWord, project};
