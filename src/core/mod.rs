//! Core module for resfix
//!
//! Candidate indexing, the hardcoded move table and the reference rewriter.

pub mod index;
pub mod moves;
pub mod rewrite;
mod types;

pub use index::{CandidateIndex, Resolution};
pub use rewrite::{RewriteResult, rewrite_text};
pub use types::*;
