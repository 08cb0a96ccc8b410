//! Mock process runner for testing.
//!
//! `MockRunner` implements [`ProcessRunner`] without spawning anything: it
//! records every spec it receives and replies from a scripted table, so
//! command logic can be tested for both the invocations it makes and the
//! way it reacts to failures.
//!
//! # Example
//!
//! ```
//! use dcm::process::{CommandSpec, MockRunner, ProcessRunner};
//!
//! let runner = MockRunner::new();
//! runner.respond("docker ps", "abc123");
//! runner.fail_on("git pull");
//!
//! let out = runner.capture(&CommandSpec::new("docker", ["ps"])).unwrap();
//! assert_eq!(out, "abc123");
//! assert!(runner.run(&CommandSpec::new("git", ["pull"])).is_err());
//! assert_eq!(runner.calls().len(), 2);
//! ```

use std::cell::RefCell;

use crate::error::{DcmError, Result};

use super::{CommandSpec, ProcessRunner};

/// Scripted [`ProcessRunner`] that records all invocations.
///
/// Responses and failures are matched by substring against the rendered
/// command (`program arg1 arg2 …`). Unmatched captures return an empty
/// string; unmatched runs succeed.
#[derive(Debug, Default)]
pub struct MockRunner {
    outputs: RefCell<Vec<(String, String)>>,
    failures: RefCell<Vec<String>>,
    calls: RefCell<Vec<CommandSpec>>,
}

impl MockRunner {
    /// Create a mock that succeeds silently for everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a captured output for commands matching `pattern`.
    pub fn respond(&self, pattern: &str, output: &str) {
        self.outputs
            .borrow_mut()
            .push((pattern.to_string(), output.to_string()));
    }

    /// Script a failure for commands matching `pattern`.
    pub fn fail_on(&self, pattern: &str) {
        self.failures.borrow_mut().push(pattern.to_string());
    }

    /// All specs this runner has been asked to execute, in order.
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.borrow().clone()
    }

    /// Whether any recorded invocation matches `pattern`.
    pub fn invoked(&self, pattern: &str) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|spec| spec.rendered().contains(pattern))
    }

    fn record(&self, spec: &CommandSpec) {
        self.calls.borrow_mut().push(spec.clone());
    }

    fn scripted_failure(&self, rendered: &str) -> Option<DcmError> {
        let failures = self.failures.borrow();
        failures
            .iter()
            .find(|pattern| rendered.contains(pattern.as_str()))
            .map(|_| DcmError::CommandFailed {
                command: rendered.to_string(),
                code: Some(1),
                output: "exit status 1".to_string(),
            })
    }
}

impl ProcessRunner for MockRunner {
    fn run(&self, spec: &CommandSpec) -> Result<()> {
        self.record(spec);
        match self.scripted_failure(&spec.rendered()) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn capture(&self, spec: &CommandSpec) -> Result<String> {
        self.record(spec);
        let rendered = spec.rendered();

        if let Some(err) = self.scripted_failure(&rendered) {
            return Err(err);
        }

        let outputs = self.outputs.borrow();
        Ok(outputs
            .iter()
            .find(|(pattern, _)| rendered.contains(pattern))
            .map(|(_, output)| output.clone())
            .unwrap_or_default())
    }
}
