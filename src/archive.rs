//! In-memory zip archive of rewritten project files
//!
//! Entries are buffered in memory and only hit the disk in `write_to`,
//! so a failed run never leaves a partial archive behind.

use std::io::{Cursor, Write};
use std::path::Path;

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::result::ZipError;
use zip::write::FileOptions;

use crate::error::ResfixError;

pub struct ArchiveBuilder {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    options: FileOptions,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            options: FileOptions::default().compression_method(CompressionMethod::Deflated),
        }
    }

    /// Add a file under its root-relative `/`-separated name.
    pub fn add(&mut self, name: &str, content: &str) -> Result<(), ResfixError> {
        let entry_err = |source: ZipError| ResfixError::ArchiveEntry {
            name: name.to_string(),
            source,
        };

        self.zip.start_file(name, self.options).map_err(entry_err)?;
        self.zip
            .write_all(content.as_bytes())
            .map_err(|e| entry_err(ZipError::Io(e)))?;
        Ok(())
    }

    /// Finalize the central directory and return the archive bytes.
    pub fn finish(mut self) -> Result<Vec<u8>, ResfixError> {
        let cursor = self.zip.finish().map_err(ResfixError::ArchiveFinish)?;
        Ok(cursor.into_inner())
    }

    /// Finalize and write the archive to `path` in one go.
    pub fn write_to(self, path: &Path) -> Result<(), ResfixError> {
        let bytes = self.finish()?;
        std::fs::write(path, bytes).map_err(|source| ResfixError::ArchiveWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}
