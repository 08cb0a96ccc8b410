//! dcm - Docker Compose manager for multi-service development environments.
//!
//! dcm wraps `docker-compose`, `git`, and `docker` to manage a development
//! environment described by a compose-style YAML manifest: it clones service
//! repositories, drives compose lifecycle commands, opens shells inside
//! containers, pulls updates, and purges images and containers.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, command implementations, dispatching
//! - [`config`] - Project context, manifest loading, nested value resolution
//! - [`docker`] - docker / docker-compose invocation helpers
//! - [`error`] - Error types and result alias
//! - [`git`] - git invocation helpers
//! - [`process`] - External process execution behind a mockable trait
//! - [`services`] - Per-service iteration with soft/hard failure semantics
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use dcm::config::value::lookup_str;
//!
//! let manifest: serde_yaml::Value = serde_yaml::from_str(
//!     "api:\n  labels:\n    dcm.branch: develop",
//! ).unwrap();
//!
//! let branch = lookup_str(&manifest, &["api", "labels", "dcm.branch"]);
//! assert_eq!(branch, Some("develop"));
//! ```

pub mod cli;
pub mod config;
pub mod docker;
pub mod error;
pub mod git;
pub mod process;
pub mod services;
pub mod ui;

pub use error::{DcmError, Result};
