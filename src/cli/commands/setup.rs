//! Setup command implementation.
//!
//! `dcm setup` clones the repository of every local-build service into the
//! checkout root. Image services have nothing to clone and are skipped, as
//! are services whose checkout already exists. A missing repository label
//! or a failed clone/checkout is a hard failure: a half-prepared
//! environment is worse than an early stop.

use std::fs;

use serde_yaml::Mapping;

use crate::config::Project;
use crate::error::{DcmError, Result};
use crate::git;
use crate::process::ProcessRunner;
use crate::services::{for_each_service, Outcome};
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// The setup command implementation.
pub struct SetupCommand<'a> {
    project: &'a Project,
    services: &'a Mapping,
    runner: &'a dyn ProcessRunner,
}

impl<'a> SetupCommand<'a> {
    /// Create a new setup command.
    pub fn new(
        project: &'a Project,
        services: &'a Mapping,
        runner: &'a dyn ProcessRunner,
    ) -> Self {
        Self {
            project,
            services,
            runner,
        }
    }
}

impl Command for SetupCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<Outcome> {
        if !self.project.srv.exists() {
            fs::create_dir_all(&self.project.srv)?;
        }

        Ok(for_each_service(self.services, ui, |name, service, ui| {
            if service.image().is_some() {
                ui.status(&format!("Skipping registry image service '{}'", name));
                return Outcome::success();
            }

            let dest = self.project.service_dir(name);
            if dest.exists() {
                ui.status(&format!("Checkout for '{}' already exists, skipping", name));
                return Outcome::success();
            }

            let Some(repository) = service.repository() else {
                return Outcome::hard(
                    1,
                    DcmError::MissingRepository {
                        service: name.to_string(),
                    },
                );
            };

            ui.status(&format!("Cloning '{}' from {}", name, repository));
            if let Err(err) = git::clone(self.runner, repository, &dest, &self.project.dir) {
                return Outcome::hard(
                    1,
                    DcmError::CloneFailed {
                        service: name.to_string(),
                        message: err.to_string(),
                    },
                );
            }

            if let Some(branch) = service.branch() {
                if let Err(err) = git::checkout(self.runner, &dest, branch) {
                    return Outcome::hard(1, err);
                }
            }

            ui.success(&format!("Checked out '{}'", name));
            Outcome::success()
        }))
    }
}
