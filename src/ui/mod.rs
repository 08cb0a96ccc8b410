//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for capturing output in tests
//!
//! dcm's sub-commands run external tools with inherited standard streams,
//! so the UI layer stays deliberately thin: styled status lines around the
//! tools' own output, nothing interactive.
//!
//! # Example
//!
//! ```
//! use dcm::ui::{create_ui, OutputMode, UserInterface};
//!
//! let mut ui = create_ui(OutputMode::Quiet);
//! ui.message("Cloning service repositories");
//! ui.success("Setup complete");
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, DcmTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing the output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message on stdout.
    ///
    /// Used for command deliverables (`dir` paths, `list` names, `branch`
    /// reports), printed in every output mode.
    fn message(&mut self, msg: &str);

    /// Display a progress/status line on stdout, suppressed in quiet mode.
    fn status(&mut self, msg: &str);

    /// Display a success message, suppressed in quiet mode.
    fn success(&mut self, msg: &str);

    /// Display a warning message on stderr.
    ///
    /// Soft per-service failures are surfaced here.
    fn warning(&mut self, msg: &str);

    /// Display an error message on stderr.
    fn error(&mut self, msg: &str);
}
