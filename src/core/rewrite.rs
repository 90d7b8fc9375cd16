//! Reference rewriting over raw file text.
//!
//! Stages run in a fixed order, each scanning the output of the previous one:
//! hardcoded moves, `load("res://..")`, `load("./..")`, then `path="res://.."`.
//! Anything that does not resolve is left byte-for-byte as found.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::index::{CandidateIndex, Resolution};
use super::moves::{HARDCODED_MOVES, MoveTarget};
use super::types::{ChangeRecord, Outcome, RefKind, basename, has_indexable_ext};

lazy_static! {
    static ref RE_LOAD: Regex =
        Regex::new(r#"(?P<func>\bpreload|load)\(\s*["'](?P<path>res://[^"']+)["']\s*\)"#).unwrap();
    static ref RE_REL_LOAD: Regex =
        Regex::new(r#"(?P<func>\bpreload|load)\(\s*["']\./(?P<rel>[^"']+)["']\s*\)"#).unwrap();
    static ref RE_EXT_RESOURCE: Regex =
        Regex::new(r#"path=["'](?P<path>res://[^"']+)["']"#).unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
    pub text: String,
    pub changes: Vec<ChangeRecord>,
}

impl RewriteResult {
    pub fn is_modified(&self, original: &str) -> bool {
        self.text != original
    }
}

/// Rewrite every resolvable reference in `text`.
pub fn rewrite_text(text: &str, index: &CandidateIndex) -> RewriteResult {
    let mut changes = Vec::new();

    let text = apply_hardcoded_moves(text, &mut changes);

    let text = RE_LOAD.replace_all(&text, |caps: &Captures| {
        let path = &caps["path"];
        match index.resolve(basename(path)) {
            Resolution::Unique(chosen) if chosen != path => {
                changes.push(ChangeRecord::new(
                    RefKind::Load,
                    path,
                    Outcome::Replaced(chosen.to_string()),
                ));
                format!("{}(\"{}\")", &caps["func"], chosen)
            }
            Resolution::Ambiguous(candidates) => {
                changes.push(ChangeRecord::new(
                    RefKind::Load,
                    path,
                    Outcome::Ambiguous(candidates.to_vec()),
                ));
                caps[0].to_string()
            }
            _ => caps[0].to_string(),
        }
    });

    // The shorthand never equals a canonical path, so a hit always rewrites.
    let text = RE_REL_LOAD.replace_all(&text, |caps: &Captures| {
        let rel = &caps["rel"];
        match index.resolve(basename(rel)) {
            Resolution::Unique(chosen) => {
                changes.push(ChangeRecord::new(
                    RefKind::RelativeLoad,
                    rel,
                    Outcome::Replaced(chosen.to_string()),
                ));
                format!("{}(\"{}\")", &caps["func"], chosen)
            }
            Resolution::Ambiguous(candidates) => {
                changes.push(ChangeRecord::new(
                    RefKind::RelativeLoad,
                    rel,
                    Outcome::Ambiguous(candidates.to_vec()),
                ));
                caps[0].to_string()
            }
            Resolution::NotFound => caps[0].to_string(),
        }
    });

    let text = RE_EXT_RESOURCE.replace_all(&text, |caps: &Captures| {
        let path = &caps["path"];
        let base = basename(path);
        if !has_indexable_ext(base) {
            return caps[0].to_string();
        }
        match index.resolve(base) {
            Resolution::Unique(chosen) if chosen != path => {
                changes.push(ChangeRecord::new(
                    RefKind::ExtResource,
                    path,
                    Outcome::Replaced(chosen.to_string()),
                ));
                format!("path=\"{}\"", chosen)
            }
            Resolution::Ambiguous(candidates) => {
                changes.push(ChangeRecord::new(
                    RefKind::ExtResource,
                    path,
                    Outcome::Ambiguous(candidates.to_vec()),
                ));
                caps[0].to_string()
            }
            _ => caps[0].to_string(),
        }
    });

    RewriteResult {
        text: text.into_owned(),
        changes,
    }
}

fn apply_hardcoded_moves(text: &str, changes: &mut Vec<ChangeRecord>) -> String {
    let mut result = text.to_string();
    for (old, target) in HARDCODED_MOVES {
        if !result.contains(old) {
            continue;
        }
        match target {
            MoveTarget::To(new) => {
                result = result.replace(old, new);
                changes.push(ChangeRecord::new(
                    RefKind::Hardcoded,
                    *old,
                    Outcome::Replaced(new.to_string()),
                ));
            }
            MoveTarget::Removed => {
                changes.push(ChangeRecord::new(RefKind::Hardcoded, *old, Outcome::Deprecated));
            }
        }
    }
    result
}
