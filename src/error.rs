//! Fatal errors that abort a run

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResfixError {
    #[error("project root does not exist: {0:?}")]
    MissingRoot(PathBuf),

    #[error("failed to add {name} to archive: {source}")]
    ArchiveEntry {
        name: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("failed to finalize archive: {0}")]
    ArchiveFinish(#[source] zip::result::ZipError),

    #[error("failed to write archive {path:?}: {source}")]
    ArchiveWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
