//! Terminal UI implementation.

use console::Term;
use std::io::Write;

use super::{should_use_colors, DcmTheme, OutputMode, UserInterface};

/// Terminal-backed UI implementation.
///
/// Status lines and deliverables go to stdout; warnings and errors go to
/// stderr so shell substitution over `dir`/`list` output stays clean.
pub struct TerminalUI {
    stdout: Term,
    stderr: Term,
    theme: DcmTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            DcmTheme::new()
        } else {
            DcmTheme::plain()
        };

        Self {
            stdout: Term::stdout(),
            stderr: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.stdout, "{}", msg).ok();
    }

    fn status(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.stdout, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.stdout, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.stderr, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.stderr, "{}", self.theme.format_error(msg)).ok();
    }
}

/// Create a UI appropriate for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
