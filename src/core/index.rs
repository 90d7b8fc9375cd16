//! Candidate index: every indexable file grouped by basename, plus the
//! preferred target for each basename when one can be picked.
//!
//! Ranking of colliding basenames:
//! 1. Paths under a `Scripts/` directory (0)
//! 2. Paths under a `VoxelToolFiles/` directory (1)
//! 3. Everything else (2)
//!
//! A basename resolves only when a single candidate holds the best rank.
//! Ties at the best rank stay unresolved; the tied subset is kept for reporting.

use std::collections::BTreeMap;

use super::types::{ProjectFile, basename};

/// Outcome of looking up a basename in the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Exactly one preferred target
    Unique(&'a str),
    /// Tied candidates at the best rank
    Ambiguous(&'a [String]),
    /// No indexable file has this basename
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Preferred {
    Path(String),
    Unresolved,
}

#[derive(Debug, Clone, Default)]
pub struct CandidateIndex {
    preferred: BTreeMap<String, Preferred>,
    groups: BTreeMap<String, Vec<String>>,
}

/// Rank of a canonical path; lower wins.
pub fn rank_of(path: &str) -> u8 {
    if path.contains("/Scripts/") {
        0
    } else if path.contains("/VoxelToolFiles/") {
        1
    } else {
        2
    }
}

impl CandidateIndex {
    /// Index the indexable subset of `files`.
    pub fn build(files: &[ProjectFile]) -> Self {
        Self::from_paths(
            files
                .iter()
                .filter(|f| f.is_indexable())
                .map(ProjectFile::canonical),
        )
    }

    /// Index a set of canonical paths directly.
    pub fn from_paths<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for path in paths {
            groups
                .entry(basename(&path).to_string())
                .or_default()
                .push(path);
        }

        let mut preferred = BTreeMap::new();
        for (base, paths) in groups.iter_mut() {
            if paths.len() == 1 {
                preferred.insert(base.clone(), Preferred::Path(paths[0].clone()));
                continue;
            }

            paths.sort_by(|a, b| {
                (rank_of(a), a.len())
                    .cmp(&(rank_of(b), b.len()))
                    .then_with(|| a.cmp(b))
            });
            let best = rank_of(&paths[0]);
            let tied = paths.iter().take_while(|p| rank_of(p) == best).count();

            if tied > 1 {
                paths.truncate(tied);
                preferred.insert(base.clone(), Preferred::Unresolved);
            } else {
                preferred.insert(base.clone(), Preferred::Path(paths[0].clone()));
            }
        }

        Self { preferred, groups }
    }

    pub fn resolve(&self, base: &str) -> Resolution<'_> {
        match self.preferred.get(base) {
            Some(Preferred::Path(p)) => Resolution::Unique(p),
            Some(Preferred::Unresolved) => {
                Resolution::Ambiguous(self.groups.get(base).map(Vec::as_slice).unwrap_or(&[]))
            }
            None => Resolution::NotFound,
        }
    }

    /// Unresolved basenames with their tied candidates, ordered by basename.
    pub fn ambiguous(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.preferred
            .iter()
            .filter(|(_, p)| **p == Preferred::Unresolved)
            .filter_map(|(base, _)| {
                self.groups
                    .get(base)
                    .map(|g| (base.as_str(), g.as_slice()))
            })
    }

    pub fn ambiguous_basenames(&self) -> Vec<String> {
        self.ambiguous().map(|(b, _)| b.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.preferred.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preferred.is_empty()
    }
}
