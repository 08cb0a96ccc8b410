//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.
//!
//! The built-in `help` subcommand is disabled in favor of our own so the
//! exit codes stay stable: bare invocations exit 1, unrecognized
//! subcommands (captured via `external_subcommand`) exit 127.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// dcm - Docker Compose manager for multi-service development environments.
#[derive(Debug, Parser)]
#[command(name = "dcm")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Base directory containing the compose manifest
    #[arg(short, long, global = true, env = "DCM_DIR")]
    pub dir: Option<PathBuf>,

    /// Project name (defaults to the base directory name)
    #[arg(short, long, global = true, env = "DCM_PROJECT")]
    pub project: Option<String>,

    /// Path to the manifest file (overrides <dir>/<project>.yml)
    #[arg(long, global = true, env = "DCM_CONFIG_FILE", hide = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show usage
    #[command(visible_alias = "h")]
    Help,

    /// Clone the repositories of all local-build services
    Setup,

    /// Run docker-compose lifecycle operations (defaults to `up`)
    #[command(visible_alias = "r")]
    Run(RunArgs),

    /// Shorthand for `run build`
    #[command(visible_alias = "b")]
    Build,

    /// Print the checkout folder of a service, or the project directory
    Dir(DirArgs),

    /// Open an interactive shell inside a service's container
    #[command(visible_alias = "sh")]
    Shell(ShellArgs),

    /// Show the current branch (or image) of services
    #[command(visible_alias = "br")]
    Branch(BranchArgs),

    /// Update service checkouts and registry images
    Update(UpdateArgs),

    /// Remove service containers and/or images
    #[command(visible_alias = "rm")]
    Purge(PurgeArgs),

    /// Print the configured service names
    #[command(visible_alias = "ls")]
    List,

    #[command(external_subcommand)]
    External(Vec<String>),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Operation (execute, init, build, start, stop, restart, up) and, for
    /// `execute`, the docker-compose arguments to forward
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `dir` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DirArgs {
    /// Service whose checkout folder to print
    pub service: Option<String>,
}

/// Arguments for the `shell` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShellArgs {
    /// Service whose container to enter
    pub service: Option<String>,
}

/// Arguments for the `branch` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BranchArgs {
    /// Service to report (all services plus dcm itself when omitted)
    pub service: Option<String>,
}

/// Arguments for the `update` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct UpdateArgs {
    /// Service to update (all services when omitted)
    pub service: Option<String>,
}

/// Arguments for the `purge` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PurgeArgs {
    /// What to purge: images|img, containers|con (default), all
    pub target: Option<String>,
}
