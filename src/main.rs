//! dcm CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use dcm::cli::{Cli, CommandDispatcher};
use dcm::config::Project;
use dcm::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("dcm=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dcm=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("dcm starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(output_mode);

    // Resolve the immutable project context
    let project = match Project::resolve(cli.dir.clone(), cli.project.clone()) {
        Ok(project) => project,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    let dispatcher = CommandDispatcher::new(project, cli.config.clone());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(outcome) => {
            // An error next to exit code 0 is user-visible but non-fatal.
            if let Some(error) = &outcome.error {
                ui.error(&format!("Error: {}", error));
            }
            ExitCode::from(outcome.code.clamp(0, 255) as u8)
        }
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
