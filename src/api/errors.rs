use std::path::PathBuf;
use thiserror::Error;

/// Invalid invocation parameters or unusable input locations.
///
/// All of these are fatal and are raised before any pass over the data starts.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to list directory {path}: {source}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory contains no data files: {0}")]
    NoDataFiles(PathBuf),

    #[error("Directory contains no part files (part_*.jsonl): {0}")]
    NoPartFiles(PathBuf),

    #[error("Number of parts must be >= 1")]
    InvalidParts,

    #[error("--ratio and --count cannot be specified together")]
    ConflictingAmount,

    #[error("Selection count must be >= 1")]
    InvalidCount,

    #[error("Selection ratio must be a finite number greater than 0, got {0}")]
    InvalidRatio(f64),

    #[error("Unknown selection mode '{0}' (supported: even, random)")]
    InvalidMode(String),
}
