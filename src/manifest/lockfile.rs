//! Gemfile.lock reader
//!
//! Only top-level spec entries are read:
//!
//! ```text
//! GEM
//!   remote: https://rubygems.org/
//!   specs:
//!     nokogiri (1.15.4-x86_64-linux)
//!       racc (~> 1.4)
//!     rack (2.2.7)
//! ```
//!
//! Entries nested deeper are dependency requirements, not locked versions.

use crate::domain::{LockedDependency, Version};
use crate::error::LockfileError;
use crate::manifest::LockReader;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

// Exactly four spaces of indentation: `    name (version[-platform])`
static SPEC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {4}([A-Za-z0-9_.\-]+) \(([^)\s]+)\)$").unwrap());

/// Sections whose `specs:` blocks list locked gems
const SPEC_SECTIONS: &[&str] = &["GEM", "GIT", "PATH"];

/// Parsed Gemfile.lock
#[derive(Debug, Clone, Default)]
pub struct GemfileLock {
    specs: Vec<LockedDependency>,
}

impl GemfileLock {
    /// Read a Gemfile.lock from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LockfileError> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| LockfileError::read_error(path, e))?;
        Ok(Self::parse(&content))
    }

    /// Parse lockfile content
    pub fn parse(content: &str) -> Self {
        let mut specs = Vec::new();
        let mut seen = HashSet::new();
        let mut in_spec_section = false;
        let mut in_specs = false;

        for line in content.lines() {
            let line = line.trim_end();

            if !line.starts_with(' ') {
                in_spec_section = SPEC_SECTIONS.contains(&line);
                in_specs = false;
                continue;
            }
            if !in_spec_section {
                continue;
            }
            if line == "  specs:" {
                in_specs = true;
                continue;
            }
            if !in_specs {
                continue;
            }

            let Some(caps) = SPEC_RE.captures(line) else {
                continue;
            };
            // Platform gems are locked as `1.15.4-x86_64-linux`
            let raw_version = caps[2].split('-').next().unwrap_or_default();
            let Some(version) = Version::parse(raw_version) else {
                continue;
            };
            let name = caps[1].to_string();
            if seen.insert(name.clone()) {
                specs.push(LockedDependency::new(name, version));
            }
        }

        Self { specs }
    }

    /// Locked entry for `name`, if any
    pub fn get(&self, name: &str) -> Option<&LockedDependency> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl LockReader for GemfileLock {
    fn locked(&self) -> Vec<LockedDependency> {
        self.specs.clone()
    }
}
