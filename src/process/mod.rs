//! External process execution.
//!
//! Everything dcm does ends in an invocation of `git`, `docker`, or
//! `docker-compose`. [`CommandSpec`] describes one invocation as plain data
//! (program, arguments, working directory, environment overrides) and
//! [`ProcessRunner`] executes it, either interactively ([`ProcessRunner::run`])
//! or capturing combined output ([`ProcessRunner::capture`]).
//!
//! The trait exists so command logic can be exercised against
//! [`MockRunner`] without spawning anything.

pub mod mock;

pub use mock::MockRunner;

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{DcmError, Result};

/// One external command invocation, described as plain data.
///
/// The working directory is always explicit; dcm never changes its own
/// process-wide working directory, so invocations stay independent of each
/// other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program name, resolved via `PATH`.
    pub program: String,

    /// Arguments, passed verbatim.
    pub args: Vec<String>,

    /// Working directory for the child process.
    pub cwd: Option<PathBuf>,

    /// Environment overrides, merged over the inherited environment.
    pub env: Vec<(String, String)>,
}

impl CommandSpec {
    /// Create a spec for a program and its arguments.
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
            env: Vec::new(),
        }
    }

    /// Render the invocation for error messages and logging.
    pub fn rendered(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Executes [`CommandSpec`]s.
pub trait ProcessRunner {
    /// Execute with inherited standard streams.
    ///
    /// Used for interactive invocations (compose output, `docker exec`,
    /// clone progress). A non-zero exit becomes `CommandFailed` with empty
    /// captured output.
    fn run(&self, spec: &CommandSpec) -> Result<()>;

    /// Execute and return combined stdout+stderr, trimmed.
    ///
    /// A non-zero exit becomes `CommandFailed` carrying the trimmed output.
    fn capture(&self, spec: &CommandSpec) -> Result<String>;
}

/// [`ProcessRunner`] backed by `std::process`.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    fn command(spec: &CommandSpec) -> Command {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);
        if let Some(cwd) = &spec.cwd {
            cmd.current_dir(cwd);
        }
        for (key, value) in &spec.env {
            cmd.env(key, value);
        }
        cmd
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> Result<()> {
        tracing::debug!(command = %spec.rendered(), cwd = ?spec.cwd, "running");

        let status = Self::command(spec)
            .status()
            .map_err(|e| spawn_error(spec, e))?;

        if status.success() {
            Ok(())
        } else {
            Err(DcmError::CommandFailed {
                command: spec.rendered(),
                code: status.code(),
                output: String::new(),
            })
        }
    }

    fn capture(&self, spec: &CommandSpec) -> Result<String> {
        tracing::debug!(command = %spec.rendered(), cwd = ?spec.cwd, "capturing");

        let output = Self::command(spec)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| spawn_error(spec, e))?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        let combined = combined.trim().to_string();

        if output.status.success() {
            Ok(combined)
        } else {
            Err(DcmError::CommandFailed {
                command: spec.rendered(),
                code: output.status.code(),
                output: combined,
            })
        }
    }
}

fn spawn_error(spec: &CommandSpec, err: std::io::Error) -> DcmError {
    DcmError::CommandFailed {
        command: spec.rendered(),
        code: None,
        output: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_new_collects_args() {
        let spec = CommandSpec::new("git", ["clone", "url", "dest"]);
        assert_eq!(spec.program, "git");
        assert_eq!(spec.args, vec!["clone", "url", "dest"]);
        assert!(spec.cwd.is_none());
        assert!(spec.env.is_empty());
    }

    #[test]
    fn rendered_joins_program_and_args() {
        let spec = CommandSpec::new("docker", ["ps", "-q"]);
        assert_eq!(spec.rendered(), "docker ps -q");
    }

    #[test]
    fn rendered_without_args_is_just_the_program() {
        let spec = CommandSpec::new("docker-compose", Vec::<String>::new());
        assert_eq!(spec.rendered(), "docker-compose");
    }

    #[test]
    fn run_succeeds_for_zero_exit() {
        let spec = CommandSpec::new("true", Vec::<String>::new());
        assert!(SystemRunner.run(&spec).is_ok());
    }

    #[test]
    fn run_reports_non_zero_exit() {
        let spec = CommandSpec::new("false", Vec::<String>::new());
        let err = SystemRunner.run(&spec).unwrap_err();
        match err {
            DcmError::CommandFailed { command, code, .. } => {
                assert_eq!(command, "false");
                assert_eq!(code, Some(1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn run_reports_missing_program() {
        let spec = CommandSpec::new("definitely-not-a-real-program", Vec::<String>::new());
        let err = SystemRunner.run(&spec).unwrap_err();
        assert!(matches!(err, DcmError::CommandFailed { code: None, .. }));
    }

    #[test]
    fn capture_returns_trimmed_combined_output() {
        let spec = CommandSpec::new("echo", ["hello"]);
        let out = SystemRunner.capture(&spec).unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn capture_failure_carries_output() {
        let temp = tempfile::TempDir::new().unwrap();
        let spec = CommandSpec::new("ls", [temp.path().join("missing").display().to_string()]);
        let err = SystemRunner.capture(&spec).unwrap_err();
        match err {
            DcmError::CommandFailed { code, output, .. } => {
                assert!(code.is_some());
                assert!(!output.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn capture_respects_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut spec = CommandSpec::new("pwd", Vec::<String>::new());
        spec.cwd = Some(temp.path().to_path_buf());
        let out = SystemRunner.capture(&spec).unwrap();
        assert!(out.contains(temp.path().file_name().unwrap().to_str().unwrap()));
    }

    #[test]
    fn capture_applies_env_overrides() {
        let mut spec = CommandSpec::new("sh", ["-c", "echo $DCM_TEST_VAR"]);
        spec.env
            .push(("DCM_TEST_VAR".to_string(), "from-spec".to_string()));
        let out = SystemRunner.capture(&spec).unwrap();
        assert_eq!(out, "from-spec");
    }
}
