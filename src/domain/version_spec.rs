//! Gemfile version constraint types
//!
//! Handles constraints like `~> 1.2`, `= 1.2.3`, `>= 1.0`, `1.2.3` and
//! compound lists such as `>= 1.0, < 2.0`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of version constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionSpecKind {
    /// Exact version (`= 1.2.3` or bare `1.2.3`)
    Exact,
    /// Pessimistic constraint (`~> 1.2`)
    Pessimistic,
    /// Greater than or equal (`>= 1.2.3`)
    GreaterOrEqual,
    /// Greater than (`> 1.2.3`)
    Greater,
    /// Less than or equal (`<= 1.2.3`)
    LessOrEqual,
    /// Less than (`< 1.2.3`)
    Less,
    /// Not equal (`!= 1.2.3`)
    NotEqual,
    /// Several constraints in one string (`>= 1.0, < 2.0`)
    Range,
}

impl VersionSpecKind {
    /// Returns true if this constraint allows exactly one version
    pub fn is_pinned(&self) -> bool {
        matches!(self, VersionSpecKind::Exact)
    }
}

/// A version constraint with its original string representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSpec {
    /// The kind of constraint
    pub kind: VersionSpecKind,
    /// The raw constraint as it appears in the Gemfile
    pub raw: String,
    /// The version number without the operator
    pub version: String,
    /// Operator prefix as written (e.g. `~> `, `>= `)
    pub prefix: Option<String>,
}

impl VersionSpec {
    /// Creates a new VersionSpec
    pub fn new(kind: VersionSpecKind, raw: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
            version: version.into(),
            prefix: None,
        }
    }

    /// Creates a new VersionSpec with prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Returns true if this constraint pins a single version
    pub fn is_pinned(&self) -> bool {
        self.kind.is_pinned()
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
