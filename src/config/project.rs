//! Project context resolution.
//!
//! A dcm invocation operates on one project: a base directory holding the
//! compose manifest, a project name, and the checkout root under which
//! local-build services are cloned. The context is resolved once at startup
//! and stays immutable for the lifetime of the process.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Immutable per-invocation project context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Base directory containing the compose manifest.
    pub dir: PathBuf,

    /// Project name, used for compose project naming and container/image
    /// name prefixes.
    pub name: String,

    /// Path to the compose manifest file.
    pub file: PathBuf,

    /// Checkout root: each local-build service is cloned to `<srv>/<name>`.
    pub srv: PathBuf,
}

impl Project {
    /// Resolve the project context from explicit overrides.
    ///
    /// `dir` defaults to the current directory and `name` to the base
    /// directory's file name. The derived paths follow the fixed layout
    /// `<dir>/<name>.yml` and `<dir>/srv/<name>`.
    pub fn resolve(dir: Option<PathBuf>, name: Option<String>) -> Result<Self> {
        let dir = match dir {
            Some(dir) => dir,
            None => env::current_dir()?,
        };
        let name = name.unwrap_or_else(|| default_name(&dir));
        let file = dir.join(format!("{}.yml", name));
        let srv = dir.join("srv").join(&name);

        Ok(Self {
            dir,
            name,
            file,
            srv,
        })
    }

    /// Checkout directory for a single service.
    pub fn service_dir(&self, service: &str) -> PathBuf {
        self.srv.join(service)
    }
}

fn default_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dcm".to_string())
}
