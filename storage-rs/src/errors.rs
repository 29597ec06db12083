//! Error types for flowstore

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// The logical URI would resolve outside the tenant's storage root.
    /// Raised on syntactic grounds, before any filesystem access.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// A file or directory whose existence was required is absent.
    /// Delete-family operations never raise this; absence is a no-op there.
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;
