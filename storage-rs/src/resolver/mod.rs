//! Path resolver for mapping logical storage URIs to filesystem paths
//!
//! Translates a (tenant, logical URI) pair into a physical path under the
//! configured base directory. Resolution is purely syntactic and runs
//! before any filesystem access: a URI that would escape the tenant's
//! root is rejected without touching the disk.

use crate::errors::{Result, StorageError};
use crate::STORAGE_SCHEME;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Strip the storage scheme prefix from a URI, if present.
///
/// Bare (`/ns/flow/file.yml`) and scheme-qualified
/// (`flowstore:///ns/flow/file.yml`) forms resolve identically; the
/// scheme is a convention for round-tripped URIs, not part of the key.
///
/// # Examples
///
/// ```
/// use flowstore::resolver::strip_scheme;
///
/// assert_eq!(strip_scheme("flowstore:///ns/flow/file.yml"), "/ns/flow/file.yml");
/// assert_eq!(strip_scheme("/ns/flow/file.yml"), "/ns/flow/file.yml");
/// ```
pub fn strip_scheme(uri: &str) -> &str {
    match uri.split_once("://") {
        Some((scheme, rest)) if scheme == STORAGE_SCHEME => rest,
        _ => uri,
    }
}

/// Re-express a rooted logical path as a canonical scheme-qualified URI.
///
/// # Examples
///
/// ```
/// use flowstore::resolver::canonical_uri;
///
/// assert_eq!(canonical_uri("/ns/flow/file.yml"), "flowstore:///ns/flow/file.yml");
/// ```
pub fn canonical_uri(logical: &str) -> String {
    if logical.starts_with('/') {
        format!("{}://{}", STORAGE_SCHEME, logical)
    } else {
        format!("{}:///{}", STORAGE_SCHEME, logical)
    }
}

/// Resolver from logical URIs to physical paths under a fixed base root
///
/// The base root is explicit injected configuration; one resolver is
/// constructed per storage tree, never looked up from global state.
#[derive(Debug, Clone)]
pub struct PathResolver {
    base: PathBuf,
}

impl PathResolver {
    /// Create a resolver rooted at the given base directory
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Base directory under which all tenants live
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Storage root for a tenant: `base/<tenant>` when a tenant is
    /// supplied, the shared `base` otherwise.
    ///
    /// The tenant is subject to the same syntactic guard as URI
    /// segments: it must be a single path segment, so `..`, `.`, an
    /// empty string, or anything containing a path separator is
    /// rejected before the base is joined.
    pub fn tenant_root(&self, tenant: Option<&str>) -> Result<PathBuf> {
        match tenant {
            Some(tenant) => {
                if tenant.is_empty()
                    || tenant == "."
                    || tenant == ".."
                    || tenant.contains('/')
                    || tenant.contains('\\')
                {
                    return Err(StorageError::InvalidPath(format!(
                        "{} (invalid tenant)",
                        tenant
                    )));
                }
                Ok(self.base.join(tenant))
            }
            None => Ok(self.base.clone()),
        }
    }

    /// Resolve a logical URI to a physical path under the tenant's root.
    ///
    /// Resolution is a pure function of (base, tenant, uri). Any `..`
    /// segment is rejected with [`StorageError::InvalidPath`] wherever it
    /// appears: even a URI like `/storage/level1/..` that would land back
    /// inside the root is treated as a traversal attempt. `.` and empty
    /// segments are dropped. The tenant is held to the same guard via
    /// [`tenant_root`](Self::tenant_root).
    ///
    /// # Examples
    ///
    /// ```
    /// use flowstore::resolver::PathResolver;
    /// use std::path::PathBuf;
    ///
    /// let resolver = PathResolver::new(PathBuf::from("/data/storage"));
    ///
    /// let path = resolver.resolve(None, "/ns/flow/file.yml").unwrap();
    /// assert_eq!(path, PathBuf::from("/data/storage/ns/flow/file.yml"));
    ///
    /// let path = resolver.resolve(Some("acme"), "/ns/flow/file.yml").unwrap();
    /// assert_eq!(path, PathBuf::from("/data/storage/acme/ns/flow/file.yml"));
    ///
    /// assert!(resolver.resolve(None, "/storage/level1/..").is_err());
    /// ```
    pub fn resolve(&self, tenant: Option<&str>, uri: &str) -> Result<PathBuf> {
        let stripped = strip_scheme(uri);

        let mut resolved = self.tenant_root(tenant)?;
        for segment in stripped.split('/') {
            match segment {
                "" | "." => continue,
                ".." => {
                    return Err(StorageError::InvalidPath(format!(
                        "{} (no traversal)",
                        uri
                    )));
                }
                segment => resolved.push(segment),
            }
        }

        trace!(uri = %uri, path = %resolved.display(), "resolved logical uri");
        Ok(resolved)
    }

    /// Map a physical path back to its rooted logical path for a tenant.
    ///
    /// Inverse of [`resolve`](Self::resolve) for paths produced by it;
    /// used to report canonical URIs for entries found on disk.
    pub fn logical_path(&self, tenant: Option<&str>, physical: &Path) -> Result<String> {
        let root = self.tenant_root(tenant)?;
        let relative = physical.strip_prefix(&root).map_err(|_| {
            StorageError::InvalidPath(format!(
                "{} (outside storage root)",
                physical.display()
            ))
        })?;

        let mut logical = String::new();
        for component in relative.components() {
            logical.push('/');
            logical.push_str(&component.as_os_str().to_string_lossy());
        }
        if logical.is_empty() {
            logical.push('/');
        }
        Ok(logical)
    }
}
