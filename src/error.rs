//! Error types for dcm operations.
//!
//! This module defines [`DcmError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DcmError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `DcmError::Other`) for unexpected errors
//! - Soft failures (printed, non-fatal) and hard failures (abort the run)
//!   are distinguished by the exit code carried next to the error, not by
//!   the error type itself

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dcm operations.
#[derive(Debug, Error)]
pub enum DcmError {
    /// Manifest file not found at expected location.
    #[error("Manifest not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the manifest file.
    #[error("Failed to parse manifest at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// A service entry in the manifest is not itself a mapping.
    #[error("Malformed configuration for service '{service}': expected a mapping")]
    MalformedService { service: String },

    /// A local-build service has no git repository label.
    #[error("No git repository configured for service '{service}'")]
    MissingRepository { service: String },

    /// The named service does not exist in the manifest.
    #[error("Unknown service '{name}'")]
    UnknownService { name: String },

    /// Update was requested for a service that opted out.
    #[error("Service '{service}' is not updateable, skipping")]
    NotUpdateable { service: String },

    /// A sub-command that needs a service name was called without one.
    #[error("No service name specified")]
    NoServiceName,

    /// No running container matched the expected name prefix.
    #[error("No running container name starts with {prefix}")]
    ContainerNotFound { prefix: String },

    /// Cloning a service repository failed.
    #[error("Failed to clone repository for service '{service}': {message}")]
    CloneFailed { service: String, message: String },

    /// A service init script exited with an error.
    #[error("Init script '{script}' failed for service '{service}': {message}")]
    InitScriptFailed {
        script: String,
        service: String,
        message: String,
    },

    /// An external command exited non-zero (or could not be spawned).
    #[error("Command failed with exit code {code:?}: {command}{}", format_output(.output))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        output: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn format_output(output: &str) -> String {
    if output.is_empty() {
        String::new()
    } else {
        format!(": {}", output)
    }
}

/// Result type alias for dcm operations.
pub type Result<T> = std::result::Result<T, DcmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = DcmError::ConfigNotFound {
            path: PathBuf::from("/foo/bar.yml"),
        };
        assert!(err.to_string().contains("/foo/bar.yml"));
    }

    #[test]
    fn config_parse_displays_path_and_message() {
        let err = DcmError::ConfigParse {
            path: PathBuf::from("/proj.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/proj.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn malformed_service_displays_name() {
        let err = DcmError::MalformedService {
            service: "postgres".into(),
        };
        assert!(err.to_string().contains("postgres"));
    }

    #[test]
    fn missing_repository_displays_service() {
        let err = DcmError::MissingRepository {
            service: "api".into(),
        };
        assert!(err.to_string().contains("api"));
    }

    #[test]
    fn container_not_found_displays_prefix() {
        let err = DcmError::ContainerNotFound {
            prefix: "myproj_web_".into(),
        };
        assert!(err.to_string().contains("myproj_web_"));
    }

    #[test]
    fn command_failed_includes_trimmed_output() {
        let err = DcmError::CommandFailed {
            command: "docker ps".into(),
            code: Some(1),
            output: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("docker ps"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn command_failed_without_output_has_no_trailing_colon() {
        let err = DcmError::CommandFailed {
            command: "git pull".into(),
            code: Some(128),
            output: String::new(),
        };
        assert!(err.to_string().ends_with("git pull"));
    }

    #[test]
    fn not_updateable_displays_service() {
        let err = DcmError::NotUpdateable {
            service: "redis".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("redis"));
        assert!(msg.contains("not updateable"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DcmError = io_err.into();
        assert!(matches!(err, DcmError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(DcmError::NoServiceName)
        }
        assert!(returns_error().is_err());
    }
}
