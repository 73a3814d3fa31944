//! Error types for repostatslib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while profiling a repository
#[derive(Error, Debug)]
pub enum RepoStatsError {
    /// Failed to read a file while counting lines
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Root path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Root path exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A per-extension query named an extension that was never observed
    #[error("extension never observed: '{0}'")]
    UnknownExtension(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
