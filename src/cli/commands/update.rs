//! Update command implementation.
//!
//! `dcm update [service]` brings services up to date: image services pull
//! their registry image, local-build services checkout the configured
//! branch (`master` when none is set) and pull. Every failure is soft:
//! updates are independent, so one stale remote must not block the rest.

use serde_yaml::Mapping;

use crate::config::Project;
use crate::docker;
use crate::error::{DcmError, Result};
use crate::git;
use crate::process::ProcessRunner;
use crate::services::{for_each_service, Outcome, ServiceConfig};
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// Branch used when a service has no `dcm.branch` label.
const DEFAULT_BRANCH: &str = "master";

/// The update command implementation.
pub struct UpdateCommand<'a> {
    project: &'a Project,
    services: &'a Mapping,
    runner: &'a dyn ProcessRunner,
    service: Option<String>,
}

impl<'a> UpdateCommand<'a> {
    /// Create a new update command.
    pub fn new(
        project: &'a Project,
        services: &'a Mapping,
        runner: &'a dyn ProcessRunner,
        service: Option<String>,
    ) -> Self {
        Self {
            project,
            services,
            runner,
            service,
        }
    }

    fn update_for_one(&self, ui: &mut dyn UserInterface, name: &str) -> Outcome {
        let Some(service) = self
            .services
            .get(name)
            .and_then(|value| value.as_mapping())
            .map(ServiceConfig::new)
        else {
            return Outcome::soft(DcmError::UnknownService {
                name: name.to_string(),
            });
        };

        self.update_service(ui, name, service)
    }

    fn update_service(
        &self,
        ui: &mut dyn UserInterface,
        name: &str,
        service: ServiceConfig<'_>,
    ) -> Outcome {
        if !service.updateable() {
            return Outcome::soft(DcmError::NotUpdateable {
                service: name.to_string(),
            });
        }

        if let Some(image) = service.image() {
            ui.status(&format!("Pulling image for '{}'...", name));
            return match docker::pull(self.runner, image) {
                Ok(()) => Outcome::success(),
                Err(err) => Outcome::soft(err),
            };
        }

        let dir = self.project.service_dir(name);
        let branch = service.branch().unwrap_or(DEFAULT_BRANCH);

        ui.status(&format!("Updating '{}' on branch {}...", name, branch));
        if let Err(err) = git::checkout(self.runner, &dir, branch) {
            return Outcome::soft(err);
        }
        if let Err(err) = git::pull(self.runner, &dir) {
            return Outcome::soft(err);
        }

        Outcome::success()
    }
}

impl Command for UpdateCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<Outcome> {
        if let Some(service) = &self.service {
            return Ok(self.update_for_one(ui, service));
        }

        Ok(for_each_service(self.services, ui, |name, service, ui| {
            self.update_service(ui, name, service)
        }))
    }
}
