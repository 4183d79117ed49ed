//! `gem search` integration
//!
//! Runs `gem search --remote --all <pattern>` and hands back its stdout.
//! The pattern is an anchored regex, so `rack` does not also match
//! `rack-test`.

use crate::error::RegistryError;
use crate::registry::RegistryQuery;
use std::process::{Command, Output};

/// Default program used for registry queries
pub const DEFAULT_GEM_PROGRAM: &str = "gem";

/// Registry query backed by the `gem` command line tool
#[derive(Debug, Clone)]
pub struct GemCommand {
    /// Program to execute (`gem`, or a path to it)
    program: String,
}

impl GemCommand {
    /// Create a query runner using the given program
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Anchored search pattern matching exactly the given names
    pub fn search_pattern(names: &[String]) -> String {
        let escaped: Vec<String> = names.iter().map(|n| regex::escape(n)).collect();
        match escaped.as_slice() {
            [single] => format!("^{}$", single),
            _ => format!("^({})$", escaped.join("|")),
        }
    }

    /// Arguments passed to the program for a search
    pub fn search_args(names: &[String]) -> Vec<String> {
        vec![
            "search".to_string(),
            "--remote".to_string(),
            "--all".to_string(),
            Self::search_pattern(names),
        ]
    }

    /// Printable form of the command line, used in logs and errors
    pub fn command_line(&self, names: &[String]) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(Self::search_args(names));
        parts.join(" ")
    }

    /// Run a command and capture output
    fn run_command(&self, args: &[String]) -> std::io::Result<Output> {
        Command::new(&self.program).args(args).output()
    }

    fn search(&self, names: &[String]) -> Result<String, RegistryError> {
        let command_line = self.command_line(names);
        let output = self
            .run_command(&Self::search_args(names))
            .map_err(|e| RegistryError::spawn(&command_line, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(RegistryError::command_failed(
                command_line,
                output.status.code().unwrap_or(-1),
                stderr,
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl Default for GemCommand {
    fn default() -> Self {
        Self::new(DEFAULT_GEM_PROGRAM)
    }
}

impl RegistryQuery for GemCommand {
    fn query_one(&self, name: &str) -> Result<String, RegistryError> {
        self.search(&[name.to_string()])
    }

    fn query_many(&self, names: &[String]) -> Result<String, RegistryError> {
        self.search(names)
    }

    fn describe(&self, names: &[String]) -> String {
        self.command_line(names)
    }
}
