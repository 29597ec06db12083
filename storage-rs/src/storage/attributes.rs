// storage/attributes.rs - Metadata snapshots for stored entries
//
// Produced per query from filesystem metadata; never cached. Size and
// modification time are only meaningful for File entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::Metadata;

use crate::errors::Result;

/// Classification of a stored entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileType {
    File,
    Directory,
}

/// Immutable metadata snapshot for a single stored entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileAttributes {
    /// Last path segment of the entry
    pub file_name: String,
    /// File or Directory
    pub file_type: FileType,
    /// Byte length (directories may report 0)
    pub size: u64,
    /// Filesystem modification time
    pub last_modified: DateTime<Utc>,
}

impl FileAttributes {
    pub(crate) fn from_metadata(file_name: String, metadata: &Metadata) -> Result<Self> {
        let file_type = if metadata.is_dir() {
            FileType::Directory
        } else {
            FileType::File
        };

        Ok(Self {
            file_name,
            file_type,
            size: metadata.len(),
            last_modified: DateTime::<Utc>::from(metadata.modified()?),
        })
    }

    pub fn is_directory(&self) -> bool {
        self.file_type == FileType::Directory
    }
}
