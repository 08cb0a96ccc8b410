//! Configuration loading and resolution for dcm.
//!
//! This module handles all aspects of configuration:
//! - Project context (base dir, project name, derived paths) in [`project`]
//! - Manifest loading and compose-v2 unwrapping in [`loader`]
//! - Defensive nested-value resolution in [`value`]
//!
//! The manifest is parsed once at startup and held as a raw ordered YAML
//! mapping for the lifetime of the process; `serde_yaml`'s `Mapping`
//! preserves insertion order, so services are always visited in the order
//! they are declared.

pub mod loader;
pub mod project;
pub mod value;

pub use loader::{load_services, parse_services};
pub use project::Project;
pub use value::{lookup, lookup_str};
