pub mod archive;
pub mod config;
pub mod core;
pub mod error;
pub mod fs;
pub mod runner;

// Re-export key items for convenience
pub use config::ResfixConfig;
pub use crate::core::{CandidateIndex, ChangeRecord, Outcome, RefKind, rewrite_text};
pub use error::ResfixError;
pub use runner::{RunSummary, run};
