//! Core domain types
//!
//! Words, their identities and derived keys, the registry that owns them, and
//! the traits describing outside collaborators.

mod external;
pub mod letters;
mod registry;
mod word;

pub use external::{FrequencySource, NoFilter, WordFilter};
pub use registry::{LengthBounds, WordRegistry};
pub use word::{Word, WordError, WordId, normalize};
