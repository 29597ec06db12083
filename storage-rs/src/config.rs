/**
 * config.rs
 * Parser for flowstore storage configuration (YAML format)
 *
 * Format:
 * ```yaml
 * apiVersion: flowstore/v1
 * kind: Storage
 * spec:
 *   basePath: /var/lib/flowstore
 * ```
 */

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{Result, StorageError};

/// Storage configuration document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StorageConfig {
    pub api_version: String,
    pub kind: String,
    pub spec: StorageSpec,
}

/// Storage spec section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StorageSpec {
    /// Root directory under which all tenant storage lives
    pub base_path: PathBuf,
}

impl StorageConfig {
    /// Build a config programmatically from a base path, for embedding
    /// without a config file on disk.
    pub fn with_base(base_path: impl Into<PathBuf>) -> Self {
        Self {
            api_version: "flowstore/v1".to_string(),
            kind: "Storage".to_string(),
            spec: StorageSpec {
                base_path: base_path.into(),
            },
        }
    }

    /// Load and validate a config from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: StorageConfig = serde_yaml::from_str(&content)
            .map_err(|e| StorageError::Config(format!("invalid storage config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config contents
    pub fn validate(&self) -> Result<()> {
        if self.api_version != "flowstore/v1" {
            return Err(StorageError::Config(format!(
                "expected apiVersion 'flowstore/v1', got '{}'",
                self.api_version
            )));
        }
        if self.kind != "Storage" {
            return Err(StorageError::Config(format!(
                "expected kind 'Storage', got '{}'",
                self.kind
            )));
        }
        if self.spec.base_path.as_os_str().is_empty() {
            return Err(StorageError::Config(
                "spec.basePath must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Root directory of the storage tree
    pub fn base_path(&self) -> &Path {
        &self.spec.base_path
    }
}
