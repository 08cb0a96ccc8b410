//! Purge command implementation.
//!
//! `dcm purge [type]` tears down per-service docker state: `containers`
//! (the default) kills and removes each running container, `images` removes
//! each locally built image, `all` does both in sequence. Failures are soft
//! so a service that is already gone never blocks the rest.

use serde_yaml::Mapping;

use crate::config::Project;
use crate::docker;
use crate::error::Result;
use crate::process::ProcessRunner;
use crate::services::{for_each_service, Outcome};
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// The purge command implementation.
pub struct PurgeCommand<'a> {
    project: &'a Project,
    services: &'a Mapping,
    runner: &'a dyn ProcessRunner,
    target: Option<String>,
}

impl<'a> PurgeCommand<'a> {
    /// Create a new purge command.
    pub fn new(
        project: &'a Project,
        services: &'a Mapping,
        runner: &'a dyn ProcessRunner,
        target: Option<String>,
    ) -> Self {
        Self {
            project,
            services,
            runner,
            target,
        }
    }

    fn purge_containers(&self, ui: &mut dyn UserInterface) -> Outcome {
        for_each_service(self.services, ui, |name, _, ui| {
            let container = match docker::container_id(self.runner, self.project, name) {
                Ok(container) => container,
                Err(err) => return Outcome::soft(err),
            };
            if let Err(err) = docker::kill(self.runner, &container) {
                return Outcome::soft(err);
            }
            if let Err(err) = docker::remove_container(self.runner, &container) {
                return Outcome::soft(err);
            }
            ui.success(&format!("Removed container for '{}'", name));
            Outcome::success()
        })
    }

    fn purge_images(&self, ui: &mut dyn UserInterface) -> Outcome {
        for_each_service(self.services, ui, |name, _, ui| {
            let repository = match docker::image_repository(self.runner, self.project, name) {
                Ok(Some(repository)) => repository,
                Ok(None) => {
                    ui.status(&format!("No local image for '{}'", name));
                    return Outcome::success();
                }
                Err(err) => return Outcome::soft(err),
            };
            if let Err(err) = docker::remove_image(self.runner, &repository) {
                return Outcome::soft(err);
            }
            ui.success(&format!("Removed image {}", repository));
            Outcome::success()
        })
    }
}

impl Command for PurgeCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<Outcome> {
        match self.target.as_deref() {
            Some("img" | "images") => Ok(self.purge_images(ui)),
            Some("all") => {
                let containers = self.purge_containers(ui);
                if containers.is_hard() {
                    return Ok(containers);
                }
                Ok(self.purge_images(ui))
            }
            // `containers`, nothing, and unrecognized types all purge
            // containers.
            _ => Ok(self.purge_containers(ui)),
        }
    }
}
