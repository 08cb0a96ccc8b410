//! Run command implementation.
//!
//! `dcm run` drives docker-compose lifecycle operations. The first argument
//! selects the sub-operation; everything else is forwarded verbatim when
//! the sub-operation is `execute`:
//!
//! - `execute <args...>`: docker-compose with the project's name and
//!   manifest injected through the environment
//! - `init`: run each service's init script inside its checkout
//! - `build` / `start` / `stop` / `restart`: `execute` with that verb
//! - `up` (also the default): `execute up -d --force-recreate`, then `init`

use serde_yaml::Mapping;

use crate::config::Project;
use crate::docker;
use crate::error::{DcmError, Result};
use crate::process::{CommandSpec, ProcessRunner};
use crate::services::{for_each_service, Outcome};
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// The run command implementation.
pub struct RunCommand<'a> {
    project: &'a Project,
    services: &'a Mapping,
    runner: &'a dyn ProcessRunner,
    args: Vec<String>,
}

impl<'a> RunCommand<'a> {
    /// Create a new run command.
    pub fn new(
        project: &'a Project,
        services: &'a Mapping,
        runner: &'a dyn ProcessRunner,
        args: Vec<String>,
    ) -> Self {
        Self {
            project,
            services,
            runner,
            args,
        }
    }

    fn run(&self, ui: &mut dyn UserInterface, args: &[String]) -> Result<Outcome> {
        match args.first().map(String::as_str) {
            Some("execute") => Ok(self.execute_compose(&args[1..])),
            Some("init") => {
                ui.status(&format!("Initializing project [{}]...", self.project.name));
                Ok(self.run_init(ui))
            }
            Some(verb @ ("build" | "start" | "stop" | "restart")) => {
                let doing = match verb {
                    "build" => "Building",
                    "start" => "Starting",
                    "stop" => "Stopping",
                    _ => "Restarting",
                };
                ui.status(&format!("{} project [{}]...", doing, self.project.name));
                Ok(self.execute_compose(&[verb.to_string()]))
            }
            Some("up") => {
                ui.status(&format!("Bringing up project [{}]...", self.project.name));
                self.run_up(ui)
            }
            // No sub-operation, or an unrecognized one: bring the project up.
            _ => self.run(ui, &["up".to_string()]),
        }
    }

    fn execute_compose(&self, args: &[String]) -> Outcome {
        match docker::compose(self.runner, self.project, args) {
            Ok(()) => Outcome::success(),
            Err(err) => Outcome::hard(1, err),
        }
    }

    fn run_up(&self, ui: &mut dyn UserInterface) -> Result<Outcome> {
        let up = self.execute_compose(&[
            "up".to_string(),
            "-d".to_string(),
            "--force-recreate".to_string(),
        ]);
        if up.is_hard() {
            return Ok(up);
        }
        self.run(ui, &["init".to_string()])
    }

    fn run_init(&self, ui: &mut dyn UserInterface) -> Outcome {
        for_each_service(self.services, ui, |name, service, ui| {
            let Some(script) = service.init_script() else {
                ui.status(&format!("Skipping init script for service '{}'", name));
                return Outcome::success();
            };

            let mut spec = CommandSpec::new("/bin/bash", [script]);
            spec.cwd = Some(self.project.service_dir(name));

            match self.runner.run(&spec) {
                Ok(()) => Outcome::success(),
                Err(err) => Outcome::hard(
                    1,
                    DcmError::InitScriptFailed {
                        script: script.to_string(),
                        service: name.to_string(),
                        message: err.to_string(),
                    },
                ),
            }
        })
    }
}

impl Command for RunCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<Outcome> {
        self.run(ui, &self.args)
    }
}
