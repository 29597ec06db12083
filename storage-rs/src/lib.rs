//! # flowstore - Namespaced local artifact storage
//!
//! Path-safe file storage for a workflow-orchestration engine: task
//! outputs, execution logs, cached values, and trigger state are
//! persisted under logical URIs rather than raw filesystem paths.
//!
//! ## Core Principle
//!
//! **Callers never see physical paths**: every operation takes a
//! (tenant, logical URI) pair, resolves it under the configured base
//! directory, and rejects any URI that would escape that root before
//! touching the disk.
//!
//! ## Key Features
//!
//! - Logical URIs, bare or scheme-qualified (`flowstore:///...`)
//! - Per-tenant storage roots under one configured base directory
//! - Syntactic traversal rejection ahead of any I/O
//! - CRUD, listing, move, and recursive delete-by-prefix operations
//! - Deterministic key derivation for executions, caches, states, and
//!   output locations
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │  Orchestration engine (caller)       │
//! │  builds URIs via keys::*             │
//! └──────────────┬───────────────────────┘
//!                │ (tenant, logical URI)
//!        ┌───────▼────────┐
//!        │  LocalStorage  │──▶ PathResolver ──▶ base/<tenant>/...
//!        └────────────────┘
//! ```

pub mod config;
pub mod errors;
pub mod keys;
pub mod resolver;
pub mod storage;

pub use config::{StorageConfig, StorageSpec};
pub use errors::{Result, StorageError};
pub use keys::{Execution, Flow, TaskRun, TriggerContext};
pub use resolver::PathResolver;
pub use storage::{FileAttributes, FileType, LocalStorage};

/// Scheme prefix used for canonical round-tripped URIs
pub const STORAGE_SCHEME: &str = "flowstore";
