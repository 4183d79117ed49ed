//! Gemfile version constraint parser
//!
//! Handles:
//! - Fixed versions: `= 1.2.3`, `1.2.3`
//! - Pessimistic constraints: `~> 1.2`, `~> 1.2.3`
//! - Comparison operators: `>=`, `<`, `>`, `<=`, `!=`
//! - Compound constraints: `>= 1.0, < 2.0`

use crate::domain::{VersionSpec, VersionSpecKind};
use regex::Regex;
use std::sync::LazyLock;

/// Parser for Gemfile version constraints
pub struct RubyVersionParser;

// Ruby allows optional space between operator and version, and
// prerelease suffixes such as `7.1.0.rc1`
static CONSTRAINT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(~>|>=|<=|!=|=|>|<)?\s*(\d+(?:\.[0-9A-Za-z]+)*)$").unwrap()
});

impl RubyVersionParser {
    /// Parse a single constraint (not compound)
    fn parse_single(&self, version_str: &str) -> Option<VersionSpec> {
        let trimmed = version_str.trim();
        let caps = CONSTRAINT_RE.captures(trimmed)?;
        let version = caps.get(2)?.as_str();

        let Some(operator) = caps.get(1).map(|m| m.as_str()) else {
            // Bare version is treated as exact
            return Some(VersionSpec::new(VersionSpecKind::Exact, trimmed, version));
        };

        let kind = match operator {
            "~>" => VersionSpecKind::Pessimistic,
            "=" => VersionSpecKind::Exact,
            ">=" => VersionSpecKind::GreaterOrEqual,
            ">" => VersionSpecKind::Greater,
            "<=" => VersionSpecKind::LessOrEqual,
            "<" => VersionSpecKind::Less,
            "!=" => VersionSpecKind::NotEqual,
            _ => return None,
        };

        Some(VersionSpec::new(kind, trimmed, version).with_prefix(format!("{} ", operator)))
    }

    /// Parse a constraint string, returning `None` for anything that is not one
    pub fn parse(&self, version_str: &str) -> Option<VersionSpec> {
        let trimmed = version_str.trim();

        if trimmed.is_empty() {
            return None;
        }

        // Compound constraints (>= 1.0, < 2.0) keep the first version for reference
        if trimmed.contains(',') {
            let mut parts = trimmed.split(',');
            let first_spec = self.parse_single(parts.next()?)?;
            if parts.any(|part| self.parse_single(part).is_none()) {
                return None;
            }
            return Some(VersionSpec::new(
                VersionSpecKind::Range,
                trimmed,
                first_spec.version,
            ));
        }

        self.parse_single(trimmed)
    }
}
