//! Core domain models for gempin
//!
//! This module contains the fundamental types used throughout the application:
//! - Versions and their segment-wise comparison
//! - Pin policies
//! - Locked dependencies and Gemfile declarations
//! - Gemfile version constraints
//! - Update decisions and run reports

mod decision;
mod dependency;
mod policy;
mod version;
mod version_spec;

pub use decision::{PinReport, UpdateDecision};
pub use dependency::{GemDeclaration, LockedDependency};
pub use policy::PinPolicy;
pub use version::{compare_segments, is_higher, Version};
pub use version_spec::{VersionSpec, VersionSpecKind};
