use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default archive name written next to the project.
pub const DEFAULT_OUTPUT: &str = "voxeltools_spellbox_fixed.zip";

/// Main configuration for resfix
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResfixConfig {
    /// Project root to scan (the directory holding `project.godot`)
    pub path: PathBuf,
    /// Path of the zip archive to write
    pub output: PathBuf,
    /// Glob patterns excluded from both indexing and editing (e.g. ".git")
    pub ignore_patterns: Vec<String>,
    /// Honour .gitignore and hidden-file rules while walking
    pub respect_gitignore: bool,
    /// Print every per-file change as it happens
    pub verbose: bool,
    /// How many ambiguous basenames to list in the summary
    pub max_examples: usize,
}

impl ResfixConfig {
    /// Validates the configuration, ensuring the scan root exists.
    pub fn validate(&self) -> Result<(), crate::error::ResfixError> {
        if !self.path.is_dir() {
            return Err(crate::error::ResfixError::MissingRoot(self.path.clone()));
        }
        Ok(())
    }

    /// Attempts to load configuration from `resfix.toml` in the current directory.
    pub fn load_from_file() -> Option<Self> {
        std::fs::read_to_string("resfix.toml")
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
    }
}

impl Default for ResfixConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            ignore_patterns: vec![".git".to_string()],
            respect_gitignore: false,
            verbose: false,
            max_examples: 10,
        }
    }
}
