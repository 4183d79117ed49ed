//! Per-dependency outcome of a pinning run

use super::{PinPolicy, Version};
use serde::Serialize;
use std::fmt;

/// What the engine decided for one locked and declared gem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UpdateDecision {
    /// A newer version satisfying the policy was found
    Update {
        name: String,
        from: Version,
        to: Version,
    },
    /// No candidate satisfied the policy
    NoNewerVersion { name: String, current: Version },
}

impl UpdateDecision {
    pub fn update(name: impl Into<String>, from: Version, to: Version) -> Self {
        UpdateDecision::Update {
            name: name.into(),
            from,
            to,
        }
    }

    pub fn no_newer_version(name: impl Into<String>, current: Version) -> Self {
        UpdateDecision::NoNewerVersion {
            name: name.into(),
            current,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            UpdateDecision::Update { name, .. } => name,
            UpdateDecision::NoNewerVersion { name, .. } => name,
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, UpdateDecision::Update { .. })
    }
}

impl fmt::Display for UpdateDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateDecision::Update { name, from, to } => write!(f, "{}: {} → {}", name, from, to),
            UpdateDecision::NoNewerVersion { name, current } => {
                write!(f, "{}: no newer version than {}", name, current)
            }
        }
    }
}

/// All decisions of one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PinReport {
    /// Policy the run used
    pub policy: PinPolicy,
    /// Decisions in processing order
    pub decisions: Vec<UpdateDecision>,
    /// Whether the Gemfile was written
    pub written: bool,
}

impl PinReport {
    pub fn new(policy: PinPolicy) -> Self {
        Self {
            policy,
            decisions: Vec::new(),
            written: false,
        }
    }

    pub fn updates(&self) -> impl Iterator<Item = &UpdateDecision> {
        self.decisions.iter().filter(|d| d.is_update())
    }

    /// Names of the gems that received a new pin
    pub fn updated_names(&self) -> Vec<&str> {
        self.updates().map(|d| d.name()).collect()
    }

    pub fn has_updates(&self) -> bool {
        self.decisions.iter().any(|d| d.is_update())
    }
}
