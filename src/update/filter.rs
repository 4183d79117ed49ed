//! Candidate selection under a pin policy
//!
//! The first qualifying version in registry order wins. `gem search` lists
//! versions newest first, so this is the newest qualifying release as long
//! as the registry keeps that order; the list is never re-sorted here.

use crate::domain::{PinPolicy, Version};

/// Picks the version a locked gem should be pinned to
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyFilter {
    policy: PinPolicy,
}

impl PolicyFilter {
    pub fn new(policy: PinPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> PinPolicy {
        self.policy
    }

    /// Candidates strictly higher than `current`, in registry order
    pub fn newer_versions<'a>(
        candidates: &'a [Version],
        current: &'a Version,
    ) -> impl Iterator<Item = &'a Version> + 'a {
        candidates.iter().filter(move |c| c.is_higher(current))
    }

    /// First candidate that is higher than `current` and satisfies the policy
    pub fn best_candidate<'a>(
        &self,
        candidates: &'a [Version],
        current: &Version,
    ) -> Option<&'a Version> {
        candidates
            .iter()
            .filter(|c| c.is_higher(current))
            .find(|c| self.policy.accepts(c, current))
    }
}
