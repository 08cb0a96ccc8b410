//! Shell command implementation.
//!
//! `dcm shell <service>` resolves the service's running container by name
//! prefix and execs an interactive bash inside it. A missing service name
//! or a missing container is a hard failure.

use crate::config::Project;
use crate::docker;
use crate::error::{DcmError, Result};
use crate::process::ProcessRunner;
use crate::services::Outcome;
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// The shell command implementation.
pub struct ShellCommand<'a> {
    project: &'a Project,
    runner: &'a dyn ProcessRunner,
    service: Option<String>,
}

impl<'a> ShellCommand<'a> {
    /// Create a new shell command.
    pub fn new(
        project: &'a Project,
        runner: &'a dyn ProcessRunner,
        service: Option<String>,
    ) -> Self {
        Self {
            project,
            runner,
            service,
        }
    }
}

impl Command for ShellCommand<'_> {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<Outcome> {
        let Some(service) = &self.service else {
            return Ok(Outcome::hard(1, DcmError::NoServiceName));
        };

        let container = match docker::container_id(self.runner, self.project, service) {
            Ok(container) => container,
            Err(err) => return Ok(Outcome::hard(1, err)),
        };

        match docker::exec_shell(self.runner, &container) {
            Ok(()) => Ok(Outcome::success()),
            Err(err) => Ok(Outcome::hard(1, err)),
        }
    }
}
