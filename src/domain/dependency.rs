//! Locked dependencies and their Gemfile declarations

use super::{Version, VersionSpec};
use serde::Serialize;
use std::fmt;

/// A gem as resolved in Gemfile.lock
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockedDependency {
    /// Gem name
    pub name: String,
    /// Currently locked version
    pub version: Version,
}

impl LockedDependency {
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }
}

impl fmt::Display for LockedDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.version)
    }
}

/// A `gem` line in the Gemfile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GemDeclaration {
    /// Gem name
    pub name: String,
    /// Zero-based line index in the Gemfile
    pub line: usize,
    /// Version constraints given on the line, in order
    pub constraints: Vec<VersionSpec>,
}

impl GemDeclaration {
    pub fn new(name: impl Into<String>, line: usize, constraints: Vec<VersionSpec>) -> Self {
        Self {
            name: name.into(),
            line,
            constraints,
        }
    }

    /// Returns true if the line already pins a single exact version
    pub fn is_pinned(&self) -> bool {
        self.constraints.len() == 1 && self.constraints[0].is_pinned()
    }
}
