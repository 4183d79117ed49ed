//! JSON output formatter for machine processing

use crate::domain::{PinPolicy, PinReport, UpdateDecision};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for a pinning run
pub struct JsonFormatter {
    /// Whether this was a dry-run
    dry_run: bool,
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    policy: PinPolicy,
    dry_run: bool,
    /// Whether the Gemfile was written
    written: bool,
    updates: Vec<JsonUpdate<'a>>,
    /// Gems with no newer version under the policy
    unchanged: Vec<JsonUnchanged<'a>>,
}

#[derive(Serialize)]
struct JsonUpdate<'a> {
    name: &'a str,
    from: &'a str,
    to: &'a str,
}

#[derive(Serialize)]
struct JsonUnchanged<'a> {
    name: &'a str,
    current: &'a str,
}

impl JsonFormatter {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Write the report as pretty-printed JSON
    pub fn format(&self, report: &PinReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let mut updates = Vec::new();
        let mut unchanged = Vec::new();

        for decision in &report.decisions {
            match decision {
                UpdateDecision::Update { name, from, to } => updates.push(JsonUpdate {
                    name: name.as_str(),
                    from: from.as_str(),
                    to: to.as_str(),
                }),
                UpdateDecision::NoNewerVersion { name, current } => {
                    unchanged.push(JsonUnchanged {
                        name: name.as_str(),
                        current: current.as_str(),
                    })
                }
            }
        }

        let output = JsonOutput {
            policy: report.policy,
            dry_run: self.dry_run,
            written: report.written,
            updates,
            unchanged,
        };

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }
}
