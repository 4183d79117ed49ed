//! Colored console logger writing to stderr

use super::{Hint, Logger, Verbosity};
use colored::Colorize;

/// Logger for interactive use; stdout stays free for `--json`
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger {
    verbosity: Verbosity,
}

impl ConsoleLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Render a message the way it will appear on the terminal
    pub fn render(message: &str, hint: Hint) -> String {
        match hint {
            Hint::Normal => message.to_string(),
            Hint::Muted => message.dimmed().to_string(),
            Hint::Debug => format!("{} {}", "debug:".cyan(), message.dimmed()),
        }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, message: &str, hint: Hint) {
        if self.verbosity.shows(hint) {
            eprintln!("{}", Self::render(message, hint));
        }
    }
}
