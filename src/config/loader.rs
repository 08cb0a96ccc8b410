//! Manifest loading.
//!
//! The manifest is a compose-style YAML file. dcm reads it once at startup
//! and keeps the parsed document as a raw [`serde_yaml::Mapping`] for the
//! lifetime of the process.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{DcmError, Result};

/// Load the per-service configuration mapping from a manifest file.
///
/// Compose v2 manifests wrap the services under a `services` key next to a
/// string `version` key; both shapes are accepted transparently. The
/// returned mapping's keys are service names, its values the per-service
/// sub-configurations.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist and `ConfigParse` if
/// the YAML is invalid or the document is not a mapping.
pub fn load_services(path: &Path) -> Result<Mapping> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DcmError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DcmError::Io(e)
        }
    })?;

    parse_services(&content, path)
}

/// Parse manifest content into the per-service configuration mapping.
pub fn parse_services(content: &str, source_path: &Path) -> Result<Mapping> {
    let document: Value =
        serde_yaml::from_str(content).map_err(|e| DcmError::ConfigParse {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    let Value::Mapping(mut document) = document else {
        return Err(DcmError::ConfigParse {
            path: source_path.to_path_buf(),
            message: "manifest root must be a mapping".to_string(),
        });
    };

    // Compose v2 layout: a string `version` plus a `services` mapping.
    let versioned = matches!(document.get("version"), Some(Value::String(_)))
        && matches!(document.get("services"), Some(Value::Mapping(_)));
    if versioned {
        if let Some(Value::Mapping(services)) = document.remove("services") {
            tracing::debug!("unwrapped compose v2 services block");
            return Ok(services);
        }
    }

    Ok(document)
}
