use std::path::PathBuf;
use thiserror::Error;

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that stop a scan before or while listing the directory.
///
/// Per-file extraction failures are not represented here; the scanner
/// reports them and moves on.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: walkdir::Error,
    },
}
