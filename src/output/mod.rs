//! Console output for pinning runs
//!
//! This module provides:
//! - The `Logger` seam the pinning engine reports progress through
//! - Colored console logging on stderr
//! - JSON report output for machine processing

mod console;
mod json;

pub use console::ConsoleLogger;
pub use json::JsonFormatter;

use std::cell::RefCell;

/// How a log message should be displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Hint {
    /// Regular progress message
    #[default]
    Normal,
    /// Secondary "nothing to do" message, rendered dimmed
    Muted,
    /// Diagnostic detail, only shown in verbose mode
    Debug,
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// No log output
    Quiet,
    /// Normal output
    #[default]
    Normal,
    /// Normal output plus debug detail
    Verbose,
}

impl Verbosity {
    /// Create a verbosity level from CLI flags (quiet wins)
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    /// Whether a message with this hint should be shown
    pub fn shows(&self, hint: Hint) -> bool {
        match self {
            Verbosity::Quiet => false,
            Verbosity::Normal => hint != Hint::Debug,
            Verbosity::Verbose => true,
        }
    }
}

/// Sink for progress messages
pub trait Logger {
    fn log(&self, message: &str, hint: Hint);

    fn info(&self, message: &str) {
        self.log(message, Hint::Normal);
    }

    fn muted(&self, message: &str) {
        self.log(message, Hint::Muted);
    }

    fn debug(&self, message: &str) {
        self.log(message, Hint::Debug);
    }
}

/// Logger that keeps every message in memory
#[derive(Debug, Default)]
pub struct MemoryLogger {
    messages: RefCell<Vec<(String, Hint)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages logged so far, in order
    pub fn messages(&self) -> Vec<(String, Hint)> {
        self.messages.borrow().clone()
    }

    /// Messages logged with the given hint
    pub fn with_hint(&self, hint: Hint) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(_, h)| *h == hint)
            .map(|(m, _)| m.clone())
            .collect()
    }

    /// Returns true if any message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.borrow().iter().any(|(m, _)| m.contains(needle))
    }
}

impl Logger for MemoryLogger {
    fn log(&self, message: &str, hint: Hint) {
        self.messages.borrow_mut().push((message.to_string(), hint));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_shows() {
        assert!(Verbosity::Normal.shows(Hint::Normal));
        assert!(Verbosity::Normal.shows(Hint::Muted));
        assert!(!Verbosity::Normal.shows(Hint::Debug));
        assert!(Verbosity::Verbose.shows(Hint::Debug));
        assert!(!Verbosity::Quiet.shows(Hint::Normal));
    }

    #[test]
    fn test_memory_logger_records_hints() {
        let logger = MemoryLogger::new();
        logger.info("Done");
        logger.muted("nothing");
        logger.debug("detail");

        assert_eq!(logger.messages().len(), 3);
        assert_eq!(logger.with_hint(Hint::Muted), vec!["nothing"]);
        assert!(logger.contains("Do"));
        assert!(!logger.contains("missing"));
    }
}
