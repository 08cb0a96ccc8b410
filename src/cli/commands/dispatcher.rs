//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandDispatcher`] for routing CLI subcommands
//!
//! The dispatcher loads the manifest once per invocation and hands each
//! command the immutable project context, the service mapping, and a
//! process runner.

use std::path::PathBuf;

use clap::CommandFactory;

use crate::cli::args::{Cli, Commands};
use crate::config::{load_services, Project};
use crate::error::Result;
use crate::process::SystemRunner;
use crate::services::Outcome;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// Returns an [`Outcome`]; `Err` is reserved for failures outside the
    /// soft/hard protocol (manifest loading, filesystem access).
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<Outcome>;
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project: Project,
    manifest: PathBuf,
}

impl CommandDispatcher {
    /// Create a dispatcher for the given project context.
    ///
    /// `manifest_override` replaces the derived `<dir>/<project>.yml` path.
    pub fn new(project: Project, manifest_override: Option<PathBuf>) -> Self {
        let manifest = manifest_override.unwrap_or_else(|| project.file.clone());
        Self { project, manifest }
    }

    /// The resolved project context.
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<Outcome> {
        let command = match &cli.command {
            None => {
                print_usage();
                return Ok(Outcome::failure(1));
            }
            Some(Commands::Help) => {
                print_usage();
                return Ok(Outcome::success());
            }
            Some(Commands::External(args)) => {
                if let Some(name) = args.first() {
                    ui.error(&format!("Unrecognized command '{}'", name));
                }
                print_usage();
                return Ok(Outcome::failure(127));
            }
            Some(command) => command,
        };

        // Parsed once per invocation and immutable from here on.
        let services = load_services(&self.manifest)?;
        let runner = SystemRunner;
        let project = &self.project;

        match command {
            Commands::Setup => {
                super::setup::SetupCommand::new(project, &services, &runner).execute(ui)
            }
            Commands::Run(args) => {
                super::run::RunCommand::new(project, &services, &runner, args.args.clone())
                    .execute(ui)
            }
            Commands::Build => {
                super::run::RunCommand::new(project, &services, &runner, vec!["build".into()])
                    .execute(ui)
            }
            Commands::Dir(args) => {
                super::dir::DirCommand::new(project, args.service.clone()).execute(ui)
            }
            Commands::Shell(args) => {
                super::shell::ShellCommand::new(project, &runner, args.service.clone())
                    .execute(ui)
            }
            Commands::Branch(args) => {
                super::branch::BranchCommand::new(project, &services, &runner, args.service.clone())
                    .execute(ui)
            }
            Commands::Update(args) => {
                super::update::UpdateCommand::new(project, &services, &runner, args.service.clone())
                    .execute(ui)
            }
            Commands::Purge(args) => {
                super::purge::PurgeCommand::new(project, &services, &runner, args.target.clone())
                    .execute(ui)
            }
            Commands::List => super::list::ListCommand::new(&services).execute(ui),
            Commands::Help | Commands::External(_) => unreachable!("handled above"),
        }
    }
}

fn print_usage() {
    Cli::command().print_help().ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn dispatcher_for(temp: &TempDir) -> CommandDispatcher {
        let project = Project::resolve(
            Some(temp.path().to_path_buf()),
            Some("testproj".to_string()),
        )
        .unwrap();
        CommandDispatcher::new(project, None)
    }

    #[test]
    fn no_command_prints_usage_and_exits_1() {
        let temp = TempDir::new().unwrap();
        let dispatcher = dispatcher_for(&temp);
        let mut ui = MockUI::new();

        let cli = Cli::parse_from(["dcm"]);
        let outcome = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert_eq!(outcome.code, 1);
        assert!(outcome.error.is_none());
    }

    #[test]
    fn help_exits_0() {
        let temp = TempDir::new().unwrap();
        let dispatcher = dispatcher_for(&temp);
        let mut ui = MockUI::new();

        let cli = Cli::parse_from(["dcm", "help"]);
        let outcome = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert_eq!(outcome.code, 0);
    }

    #[test]
    fn unrecognized_command_exits_127() {
        let temp = TempDir::new().unwrap();
        let dispatcher = dispatcher_for(&temp);
        let mut ui = MockUI::new();

        let cli = Cli::parse_from(["dcm", "frobnicate"]);
        let outcome = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert_eq!(outcome.code, 127);
        assert!(ui.has_error("frobnicate"));
    }

    #[test]
    fn service_commands_require_the_manifest() {
        let temp = TempDir::new().unwrap();
        let dispatcher = dispatcher_for(&temp);
        let mut ui = MockUI::new();

        let cli = Cli::parse_from(["dcm", "list"]);
        assert!(dispatcher.dispatch(&cli, &mut ui).is_err());
    }

    #[test]
    fn list_routes_to_the_manifest_services() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("testproj.yml"),
            "web:\n  image: nginx:latest\napi:\n  build: ./api",
        )
        .unwrap();
        let dispatcher = dispatcher_for(&temp);
        let mut ui = MockUI::new();

        let cli = Cli::parse_from(["dcm", "list"]);
        let outcome = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert_eq!(outcome.code, 0);
        assert!(ui.has_message("web"));
        assert!(ui.has_message("api"));
    }

    #[test]
    fn manifest_override_takes_precedence() {
        let temp = TempDir::new().unwrap();
        let custom = temp.path().join("custom.yml");
        fs::write(&custom, "solo:\n  image: redis:7").unwrap();

        let project = Project::resolve(
            Some(temp.path().to_path_buf()),
            Some("testproj".to_string()),
        )
        .unwrap();
        let dispatcher = CommandDispatcher::new(project, Some(custom));
        let mut ui = MockUI::new();

        let cli = Cli::parse_from(["dcm", "list"]);
        let outcome = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert_eq!(outcome.code, 0);
        assert!(ui.has_message("solo"));
    }
}
