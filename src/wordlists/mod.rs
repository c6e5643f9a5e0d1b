//! Word list collaborators: token files, blocklists and frequency ranks

mod blocklist;
mod frequency;
pub mod loader;

pub use blocklist::{Blocklist, FilterReport};
pub use frequency::FrequencyRanks;
