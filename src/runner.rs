use crate::archive::ArchiveBuilder;
use crate::config::ResfixConfig;
use crate::core::{CandidateIndex, ChangeRecord, ProjectFile, rewrite_text};
use crate::fs::{WalkConfig, collect_project_files, read_lossy};
use anyhow::{Context, Result};
use std::path::Path;

/// Totals for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Editable files found under the root
    pub files: usize,
    /// Files that could not be read and were left out of the archive
    pub skipped: usize,
    /// Change records emitted across all files
    pub changes: usize,
    /// Change records that only warn (ambiguous or removed targets)
    pub warnings: usize,
    /// Files whose text differs from what is on disk
    pub rewritten: usize,
    /// Basenames left unresolved, sorted
    pub ambiguous: Vec<String>,
}

/// Main entry point in CLI mode.
///
/// Indexes the project once, rewrites every editable file against that index,
/// writes the zip and prints the summary. Unresolved references never fail the
/// run; only an unwritable archive does.
pub fn run(config: ResfixConfig) -> Result<RunSummary> {
    config.validate()?;

    let root = config
        .path
        .canonicalize()
        .with_context(|| format!("Failed to find directory: {:?}", config.path))?;

    let files = discover_files(&config, &root)?;
    let index = CandidateIndex::build(&files);
    let editable: Vec<&ProjectFile> = files.iter().filter(|f| f.is_editable()).collect();

    if config.verbose {
        println!(
            "Indexed {} basenames, {} editable files.",
            index.len(),
            editable.len()
        );
    }

    let mut archive = ArchiveBuilder::new();
    let summary = pack_files(&editable, &index, &mut archive, config.verbose, read_lossy)?;

    archive
        .write_to(&config.output)
        .with_context(|| format!("Failed to write archive: {:?}", config.output))?;

    print_summary(&config, &summary);

    Ok(summary)
}

/// Rewrite each editable file and add it to `archive`.
///
/// A file that `read` fails on is reported on stderr and left out; the rest
/// of the run carries on.
pub fn pack_files<F>(
    files: &[&ProjectFile],
    index: &CandidateIndex,
    archive: &mut ArchiveBuilder,
    verbose: bool,
    mut read: F,
) -> Result<RunSummary>
where
    F: FnMut(&Path) -> std::io::Result<String>,
{
    let mut summary = RunSummary {
        files: files.len(),
        ambiguous: index.ambiguous_basenames(),
        ..Default::default()
    };

    for file in files {
        let text = match read(&file.path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("WARN: could not read {}: {}", file.path.display(), e);
                summary.skipped += 1;
                continue;
            }
        };

        let result = rewrite_text(&text, index);
        if verbose && !result.changes.is_empty() {
            print_changes(&file.relative, &result.changes);
        }

        archive.add(&file.relative, &result.text)?;
        summary.changes += result.changes.len();
        summary.warnings += result.changes.iter().filter(|c| c.is_warning()).count();
        if result.is_modified(&text) {
            summary.rewritten += 1;
        }
    }

    Ok(summary)
}

/// Walk the root once; both the index and the edit list are drawn from this.
pub fn discover_files(config: &ResfixConfig, root: &Path) -> Result<Vec<ProjectFile>> {
    collect_project_files(
        root,
        WalkConfig {
            ignore_patterns: &config.ignore_patterns,
            standard_filters: config.respect_gitignore,
        },
    )
}

fn print_changes(relative: &str, changes: &[ChangeRecord]) {
    println!("-- {}", relative);
    for change in changes {
        println!("   {}", change);
    }
}

fn print_summary(config: &ResfixConfig, summary: &RunSummary) {
    println!(
        "Wrote {} with {} files. Total replacements: {}.",
        config.output.display(),
        summary.files,
        summary.changes
    );
    if summary.warnings > 0 {
        println!(
            "{} files rewritten, {} references flagged and left unchanged.",
            summary.rewritten, summary.warnings
        );
    }
    if summary.skipped > 0 {
        println!("Skipped {} unreadable files.", summary.skipped);
    }
    if !summary.ambiguous.is_empty() {
        println!(
            "Note: {} ambiguous basenames could not be auto-resolved.",
            summary.ambiguous.len()
        );
        let examples: Vec<&String> = summary.ambiguous.iter().take(config.max_examples).collect();
        println!("Examples: {:?}", examples);
    }
}
