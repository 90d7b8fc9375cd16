//! Core types shared across resfix modules

use std::fmt;
use std::path::{Path, PathBuf};

/// Prefix of every project-root-relative resource path.
pub const RES_PREFIX: &str = "res://";

/// Extensions of files that get rewritten and packed.
pub const EDIT_EXTS: &[&str] = &["gd", "tscn", "tres"];

/// Extensions of files that can be the target of a reference.
pub const INDEX_EXTS: &[&str] = &["gd", "tres", "res"];

/// A file under the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    pub path: PathBuf,
    /// Root-relative path with `/` separators
    pub relative: String,
    pub extension: String,
}

impl ProjectFile {
    /// Builds a project file from an absolute path under `root`.
    /// Returns `None` when the path is outside `root` or has no extension.
    pub fn new(path: PathBuf, root: &Path) -> Option<Self> {
        let relative = path
            .strip_prefix(root)
            .ok()?
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let extension = path.extension()?.to_string_lossy().to_string();
        Some(Self {
            path,
            relative,
            extension,
        })
    }

    pub fn canonical(&self) -> String {
        format!("{}{}", RES_PREFIX, self.relative)
    }

    pub fn basename(&self) -> &str {
        basename(&self.relative)
    }

    pub fn is_editable(&self) -> bool {
        EDIT_EXTS.contains(&self.extension.as_str())
    }

    pub fn is_indexable(&self) -> bool {
        INDEX_EXTS.contains(&self.extension.as_str())
    }
}

/// Final component of a `/`-separated path, ignoring trailing slashes.
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Whether a basename carries one of the indexable extensions.
pub fn has_indexable_ext(name: &str) -> bool {
    INDEX_EXTS
        .iter()
        .any(|ext| name.strip_suffix(ext).is_some_and(|s| s.ends_with('.')))
}

/// Syntactic form in which a reference was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    /// Literal hit from the hardcoded move table
    Hardcoded,
    /// `preload("res://...")` / `load("res://...")`
    Load,
    /// `preload("./...")` / `load("./...")`
    RelativeLoad,
    /// `path="res://..."`
    ExtResource,
}

/// What happened to a reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Replaced(String),
    Ambiguous(Vec<String>),
    Deprecated,
}

/// One resolved or flagged reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub kind: RefKind,
    /// The path as it appeared in the source text
    pub original: String,
    pub outcome: Outcome,
}

impl ChangeRecord {
    pub fn new(kind: RefKind, original: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            kind,
            original: original.into(),
            outcome,
        }
    }

    /// Log key, e.g. `preload:res://old/Utils.gd`
    pub fn key(&self) -> String {
        match self.kind {
            RefKind::Hardcoded => format!("hardcoded:{}", self.original),
            RefKind::Load => format!("preload:{}", self.original),
            RefKind::RelativeLoad => format!("preload:./{}", self.original),
            RefKind::ExtResource => format!("ext:{}", self.original),
        }
    }

    pub fn is_warning(&self) -> bool {
        !matches!(self.outcome, Outcome::Replaced(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Replaced(target) => write!(f, "-> {}", target),
            Outcome::Ambiguous(candidates) => write!(f, "AMBIGUOUS among: {:?}", candidates),
            Outcome::Deprecated => write!(f, "WARN: deprecated; no replacement set"),
        }
    }
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key(), self.outcome)
    }
}
