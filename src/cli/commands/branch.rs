//! Branch command implementation.
//!
//! `dcm branch [service]` reports where each service is: image services
//! show their registry image, local-build services the current branch of
//! their checkout. Without a service argument the tool's own repository is
//! reported first, then every configured service. Per-service failures are
//! soft so one broken checkout does not hide the rest.

use serde_yaml::Mapping;

use crate::config::Project;
use crate::error::{DcmError, Result};
use crate::git;
use crate::process::ProcessRunner;
use crate::services::{for_each_service, Outcome, ServiceConfig};
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// Name under which the tool's own repository is reported.
const SELF_SERVICE: &str = "dcm";

/// The branch command implementation.
pub struct BranchCommand<'a> {
    project: &'a Project,
    services: &'a Mapping,
    runner: &'a dyn ProcessRunner,
    service: Option<String>,
}

impl<'a> BranchCommand<'a> {
    /// Create a new branch command.
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

    fn service_config(&self, name: &str) -> Option<ServiceConfig<'_>> {
        self.services
            .get(name)
            .and_then(|value| value.as_mapping())
            .map(ServiceConfig::new)
    }

    fn branch_for_one(&self, ui: &mut dyn UserInterface, name: &str) -> Outcome {
        let dir = if name == SELF_SERVICE {
            self.project.dir.clone()
        } else {
            let Some(service) = self.service_config(name) else {
                return Outcome::soft(DcmError::UnknownService {
                    name: name.to_string(),
                });
            };
            if let Some(image) = service.image() {
                ui.message(&format!("{}: Docker hub image: {}", name, image));
                return Outcome::success();
            }
            self.project.service_dir(name)
        };

        match git::current_branch(self.runner, &dir) {
            Ok(branch) => {
                ui.message(&format!("{}: {}", name, branch));
                Outcome::success()
            }
            Err(err) => Outcome::soft(err),
        }
    }
}

impl Command for BranchCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<Outcome> {
        if let Some(service) = &self.service {
            return Ok(self.branch_for_one(ui, service));
        }

        let own = self.branch_for_one(ui, SELF_SERVICE);
        if let Some(error) = own.error {
            ui.warning(&error.to_string());
        }

        Ok(for_each_service(self.services, ui, |name, _, ui| {
            self.branch_for_one(ui, name)
        }))
    }
}
