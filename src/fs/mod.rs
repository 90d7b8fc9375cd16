use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::core::ProjectFile;

/// Options for walking a project tree
#[derive(Debug, Clone, Copy)]
pub struct WalkConfig<'a> {
    /// Globs to skip entirely
    pub ignore_patterns: &'a [String],
    /// Apply .gitignore / hidden-file filtering
    pub standard_filters: bool,
}

pub fn walk_directory_with_config(path: &Path, config: WalkConfig<'_>) -> Result<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(path);

    // In the override builder "!glob" ignores and "glob" whitelists.
    let mut override_builder = ignore::overrides::OverrideBuilder::new(path);
    for pattern in config.ignore_patterns {
        override_builder.add(&format!("!{}", pattern))?;
    }
    let overrides = override_builder.build()?;

    builder.overrides(overrides);
    builder.standard_filters(config.standard_filters);

    let walker = builder.build();
    let mut files = Vec::new();

    for result in walker {
        match result {
            Ok(entry) => {
                // Symlinked files count; the walker itself does not follow links.
                if entry.path().is_file() {
                    files.push(entry.into_path());
                }
            }
            Err(err) => eprintln!("Error walking directory: {}", err),
        }
    }

    files.sort();
    Ok(files)
}

/// Walk `root` and keep the files that are editable or indexable.
pub fn collect_project_files(root: &Path, config: WalkConfig<'_>) -> Result<Vec<ProjectFile>> {
    Ok(walk_directory_with_config(root, config)?
        .into_iter()
        .filter_map(|p| ProjectFile::new(p, root))
        .filter(|f| f.is_editable() || f.is_indexable())
        .collect())
}

/// Read a file as text, replacing invalid UTF-8 with U+FFFD.
pub fn read_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::fs::File;
    use tempfile::TempDir;

    fn walk_directory(path: &Path, ignore_patterns: &[String]) -> Result<Vec<PathBuf>> {
        walk_directory_with_config(
            path,
            WalkConfig {
                ignore_patterns,
                standard_filters: false,
            },
        )
    }

    #[test]
    fn test_walk_directory_ignore_logic() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();

        File::create(root.join("player.gd"))?;
        fs::create_dir(root.join(".git"))?;
        File::create(root.join(".git").join("stale.gd"))?;

        let paths = walk_directory(root, &[".git".to_string()])?;

        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert!(names.contains(&"player.gd".to_string()));
        assert!(!names.contains(&"stale.gd".to_string()));

        Ok(())
    }

    #[test]
    fn test_hidden_dirs_walked_without_standard_filters() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        fs::create_dir(root.join(".hidden"))?;
        File::create(root.join(".hidden").join("a.tres"))?;

        assert_eq!(walk_directory(root, &[])?.len(), 1);

        let filtered = walk_directory_with_config(
            root,
            WalkConfig {
                ignore_patterns: &[],
                standard_filters: true,
            },
        )?;
        assert!(filtered.is_empty());

        Ok(())
    }

    #[test]
    fn test_collect_project_files_filters_extensions() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        fs::create_dir(root.join("Scripts"))?;
        File::create(root.join("Scripts").join("Utils.gd"))?;
        File::create(root.join("main.tscn"))?;
        File::create(root.join("mesh.res"))?;
        File::create(root.join("icon.png"))?;
        File::create(root.join("README"))?;

        let files = collect_project_files(
            root,
            WalkConfig {
                ignore_patterns: &[],
                standard_filters: false,
            },
        )?;
        let relative: Vec<&str> = files.iter().map(|f| f.relative.as_str()).collect();
        assert_eq!(relative, vec!["Scripts/Utils.gd", "main.tscn", "mesh.res"]);

        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_files_are_collected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        let shared = TempDir::new()?;
        fs::write(shared.path().join("Utils.gd"), "extends Node\n")?;

        fs::create_dir(root.join("Scripts"))?;
        std::os::unix::fs::symlink(shared.path().join("Utils.gd"), root.join("Scripts/Utils.gd"))?;
        std::os::unix::fs::symlink(shared.path(), root.join("linked_dir"))?;

        let files = collect_project_files(
            root,
            WalkConfig {
                ignore_patterns: &[],
                standard_filters: false,
            },
        )?;
        let relative: Vec<&str> = files.iter().map(|f| f.relative.as_str()).collect();
        assert_eq!(relative, vec!["Scripts/Utils.gd"]);
        assert_eq!(read_lossy(&files[0].path)?, "extends Node\n");

        Ok(())
    }

    #[test]
    fn test_read_lossy_replaces_invalid_bytes() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("bad.gd");
        fs::write(&path, b"var a = 1 \xff\xfe end")?;

        let text = read_lossy(&path)?;
        assert!(text.starts_with("var a = 1 "));
        assert!(text.contains('\u{FFFD}'));
        assert!(text.ends_with(" end"));

        Ok(())
    }
}
