//! Pin policies controlling which segments must stay fixed during an update

use super::Version;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which upgrade a dependency is allowed to receive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PinPolicy {
    /// Any newer release
    Available,
    /// Same major, newer minor
    Minor,
    /// Same major and minor, newer patch
    #[default]
    Patch,
}

impl PinPolicy {
    /// Check the pinned-segment constraint of this policy
    ///
    /// Only meaningful for candidates already known to be higher than `current`.
    pub fn accepts(&self, candidate: &Version, current: &Version) -> bool {
        match self {
            PinPolicy::Available => true,
            PinPolicy::Minor => {
                candidate.major() == current.major() && candidate.minor() > current.minor()
            }
            PinPolicy::Patch => {
                candidate.major() == current.major()
                    && candidate.minor() == current.minor()
                    && candidate.patch() > current.patch()
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PinPolicy::Available => "available",
            PinPolicy::Minor => "minor",
            PinPolicy::Patch => "patch",
        }
    }
}

impl fmt::Display for PinPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
