//! Version selection for pinning
//!
//! This module provides:
//! - A per-run cache of published versions, filled lazily or in bulk
//! - The policy filter choosing the version to pin

mod cache;
mod filter;

pub use cache::VersionCache;
pub use filter::PolicyFilter;
