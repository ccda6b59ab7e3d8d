//! Error types.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RepoError>;

#[derive(Debug, Error)]
pub enum RepoError {
    /// The addon directory has no manifest file at the expected path.
    #[error("manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    /// The manifest file exists but could not be read or decoded as UTF-8.
    #[error("manifest unreadable: {0}")]
    ManifestUnreadable(String),

    /// A release's target directory could not be listed.
    #[error("target directory unreadable: {0}")]
    TargetUnreadable(String),

    /// An output file could not be written.
    #[error("write failed: {0}")]
    WriteFailed(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
