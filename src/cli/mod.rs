//! Command-line interface for dcm.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations and dispatching

pub mod args;
pub mod commands;

pub use args::{
    BranchArgs, Cli, Commands, DirArgs, PurgeArgs, RunArgs, ShellArgs, UpdateArgs,
};
pub use commands::{Command, CommandDispatcher};
