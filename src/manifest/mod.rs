//! Gemfile and Gemfile.lock access
//!
//! This module provides:
//! - The `ManifestStore` trait for reading declarations and recording pins
//! - The `LockReader` trait for the currently resolved versions
//! - Gemfile and Gemfile.lock backed implementations

mod gemfile;
mod lockfile;

pub use gemfile::Gemfile;
pub use lockfile::GemfileLock;

use crate::domain::{GemDeclaration, LockedDependency};
use crate::error::ManifestError;

/// Editable dependency declarations
pub trait ManifestStore {
    /// Find the declaration of a gem by name
    fn find(&self, name: &str) -> Option<GemDeclaration>;

    /// Record a pending pin of `declaration` to `version`
    fn update(&mut self, declaration: &GemDeclaration, version: &str);

    /// Number of pending changes
    fn pending(&self) -> usize;

    /// Persist pending changes, returning whether storage was modified
    fn write(&mut self) -> Result<bool, ManifestError>;
}

/// Source of locked dependency versions
pub trait LockReader {
    /// Every locked gem, in lockfile order
    fn locked(&self) -> Vec<LockedDependency>;
}

impl LockReader for Vec<LockedDependency> {
    fn locked(&self) -> Vec<LockedDependency> {
        self.clone()
    }
}
