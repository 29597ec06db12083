//! Local file storage for workflow artifacts
//!
//! Provides the storage operations the orchestration engine persists
//! through, addressed by logical URIs rather than raw paths:
//! - Existence, size, and modification-time queries
//! - Streamed get/put of opaque payloads
//! - Directory creation and listing with classified attributes
//! - Idempotent delete and recursive delete-by-prefix
//! - Move of a file or an entire subtree
//!
//! Every operation resolves its URI through [`PathResolver`] first, so
//! the traversal guard applies uniformly before any I/O.

pub mod attributes;

pub use attributes::{FileAttributes, FileType};

use std::fs::{self, File};
use std::io::{self, ErrorKind, Read};
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::config::StorageConfig;
use crate::errors::{Result, StorageError};
use crate::resolver::{canonical_uri, PathResolver};

/// Local filesystem storage rooted at a configured base directory
///
/// Stateless between calls: each operation independently resolves its
/// path and performs one filesystem action. Callers needing
/// serialization for a given key coordinate externally.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    resolver: PathResolver,
}

impl LocalStorage {
    /// Create a storage instance from a validated config, ensuring the
    /// base directory exists.
    pub fn new(config: StorageConfig) -> Result<Self> {
        config.validate()?;
        fs::create_dir_all(config.base_path())?;
        Ok(Self {
            resolver: PathResolver::new(config.base_path().to_path_buf()),
        })
    }

    /// Create a storage instance rooted at a base directory
    pub fn with_base(base: impl Into<std::path::PathBuf>) -> Result<Self> {
        Self::new(StorageConfig::with_base(base.into()))
    }

    /// Resolver owned by this storage instance
    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Whether an entry exists at the URI. Absence is not an error.
    pub fn exists(&self, tenant: Option<&str>, uri: &str) -> Result<bool> {
        let path = self.resolver.resolve(tenant, uri)?;
        Ok(path.exists())
    }

    /// Byte length of a file. Fails for a missing entry or a directory.
    pub fn size(&self, tenant: Option<&str>, uri: &str) -> Result<u64> {
        let path = self.resolver.resolve(tenant, uri)?;
        let metadata = fs::metadata(&path).map_err(|e| not_found_or_io(e, uri))?;
        if metadata.is_dir() {
            return Err(StorageError::FileNotFound(uri.to_string()));
        }
        Ok(metadata.len())
    }

    /// Filesystem modification time of an entry
    pub fn last_modified_time(
        &self,
        tenant: Option<&str>,
        uri: &str,
    ) -> Result<chrono::DateTime<chrono::Utc>> {
        let path = self.resolver.resolve(tenant, uri)?;
        let metadata = fs::metadata(&path).map_err(|e| not_found_or_io(e, uri))?;
        Ok(chrono::DateTime::from(metadata.modified()?))
    }

    /// Open a readable stream of file contents.
    ///
    /// Fails with [`StorageError::FileNotFound`] when the entry is
    /// absent or is a directory.
    pub fn get(&self, tenant: Option<&str>, uri: &str) -> Result<File> {
        let path = self.resolver.resolve(tenant, uri)?;
        if path.is_dir() {
            return Err(StorageError::FileNotFound(uri.to_string()));
        }
        File::open(&path).map_err(|e| not_found_or_io(e, uri))
    }

    /// Write a stream to the URI, creating parent directories and
    /// overwriting any existing file. Returns the canonical
    /// scheme-qualified URI of the written entry.
    pub fn put(&self, tenant: Option<&str>, uri: &str, source: &mut dyn Read) -> Result<String> {
        let path = self.resolver.resolve(tenant, uri)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = File::create(&path)?;
        let written = io::copy(source, &mut file)?;
        debug!(uri = %uri, bytes = written, "stored file");

        Ok(canonical_uri(&self.resolver.logical_path(tenant, &path)?))
    }

    /// Create the directory and any missing parents. Idempotent.
    pub fn create_directory(&self, tenant: Option<&str>, uri: &str) -> Result<()> {
        let path = self.resolver.resolve(tenant, uri)?;
        fs::create_dir_all(&path)?;
        Ok(())
    }

    /// Metadata snapshot for a single file or directory entry
    pub fn get_attributes(&self, tenant: Option<&str>, uri: &str) -> Result<FileAttributes> {
        let path = self.resolver.resolve(tenant, uri)?;
        let metadata = fs::metadata(&path).map_err(|e| not_found_or_io(e, uri))?;
        FileAttributes::from_metadata(file_name(&path), &metadata)
    }

    /// Immediate children of a directory, non-recursive, each
    /// classified as File or Directory. Fails when the directory
    /// itself does not exist.
    pub fn list(&self, tenant: Option<&str>, uri: &str) -> Result<Vec<FileAttributes>> {
        let path = self.resolver.resolve(tenant, uri)?;
        let entries = fs::read_dir(&path).map_err(|e| not_found_or_io(e, uri))?;

        let mut attributes = Vec::new();
        for entry in entries {
            let entry = entry?;
            let metadata = entry.metadata()?;
            attributes.push(FileAttributes::from_metadata(
                entry.file_name().to_string_lossy().into_owned(),
                &metadata,
            )?);
        }
        attributes.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(attributes)
    }

    /// Remove a file, or a directory and everything beneath it.
    ///
    /// Returns `true` if something was removed, `false` if the target
    /// did not exist. Absence is a successful no-op, never an error.
    pub fn delete(&self, tenant: Option<&str>, uri: &str) -> Result<bool> {
        let path = self.resolver.resolve(tenant, uri)?;
        if !path.exists() {
            return Ok(false);
        }

        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
        debug!(uri = %uri, "deleted entry");
        Ok(true)
    }

    /// Recursively remove every file at or beneath the prefix,
    /// returning the canonical URI of each deleted file. Directories
    /// are removed but not reported. An empty prefix yields an empty
    /// sequence, not an error.
    pub fn delete_by_prefix(&self, tenant: Option<&str>, prefix: &str) -> Result<Vec<String>> {
        let path = self.resolver.resolve(tenant, prefix)?;
        if !path.exists() {
            return Ok(Vec::new());
        }

        let mut deleted = Vec::new();
        if path.is_dir() {
            for entry in WalkDir::new(&path) {
                let entry = entry.map_err(io::Error::from)?;
                if entry.file_type().is_file() {
                    deleted.push(canonical_uri(
                        &self.resolver.logical_path(tenant, entry.path())?,
                    ));
                }
            }
            fs::remove_dir_all(&path)?;
        } else {
            deleted.push(canonical_uri(&self.resolver.logical_path(tenant, &path)?));
            fs::remove_file(&path)?;
        }

        debug!(prefix = %prefix, files = deleted.len(), "deleted by prefix");
        Ok(deleted)
    }

    /// Relocate a file or an entire directory subtree.
    ///
    /// Afterward the source no longer exists and the destination holds
    /// the full content. Fails when the source is absent.
    pub fn rename(&self, tenant: Option<&str>, from: &str, to: &str) -> Result<()> {
        let source = self.resolver.resolve(tenant, from)?;
        let dest = self.resolver.resolve(tenant, to)?;

        if !source.exists() {
            return Err(StorageError::FileNotFound(from.to_string()));
        }
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::rename(&source, &dest)?;
        debug!(from = %from, to = %to, "moved entry");
        Ok(())
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn not_found_or_io(err: io::Error, uri: &str) -> StorageError {
    if err.kind() == ErrorKind::NotFound {
        StorageError::FileNotFound(uri.to_string())
    } else {
        StorageError::Io(err)
    }
}
