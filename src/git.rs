//! git invocation helpers.
//!
//! All operations take an explicit working directory; dcm never changes its
//! own working directory.

use std::path::Path;

use crate::error::Result;
use crate::process::{CommandSpec, ProcessRunner};

/// Clone `url` into `dest`, running from `cwd`, streams inherited.
pub fn clone(runner: &dyn ProcessRunner, url: &str, dest: &Path, cwd: &Path) -> Result<()> {
    let dest = dest.display().to_string();
    let mut spec = CommandSpec::new("git", ["clone", url, dest.as_str()]);
    spec.cwd = Some(cwd.to_path_buf());
    runner.run(&spec)
}

/// Checkout `branch` inside the checkout at `dir`.
pub fn checkout(runner: &dyn ProcessRunner, dir: &Path, branch: &str) -> Result<()> {
    let mut spec = CommandSpec::new("git", ["checkout", branch]);
    spec.cwd = Some(dir.to_path_buf());
    runner.run(&spec)
}

/// Pull the tracked branch inside the checkout at `dir`.
pub fn pull(runner: &dyn ProcessRunner, dir: &Path) -> Result<()> {
    let mut spec = CommandSpec::new("git", ["pull"]);
    spec.cwd = Some(dir.to_path_buf());
    runner.run(&spec)
}

/// Current branch name of the checkout at `dir`.
pub fn current_branch(runner: &dyn ProcessRunner, dir: &Path) -> Result<String> {
    let mut spec = CommandSpec::new("git", ["rev-parse", "--abbrev-ref", "HEAD"]);
    spec.cwd = Some(dir.to_path_buf());
    Ok(runner.capture(&spec)?.trim().to_string())
}
