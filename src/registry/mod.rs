//! Registry queries for published gem versions
//!
//! This module provides:
//! - The `RegistryQuery` trait the version cache fetches through
//! - A `gem search` backed implementation

mod gem_command;

pub use gem_command::{GemCommand, DEFAULT_GEM_PROGRAM};

use crate::error::RegistryError;

/// Source of raw version listings
///
/// Both query methods return the registry's text output unparsed; the caller
/// extracts the `name (v1, v2, ...)` lines it cares about.
pub trait RegistryQuery {
    /// Query the published versions of one gem
    fn query_one(&self, name: &str) -> Result<String, RegistryError>;

    /// Query the published versions of several gems at once
    fn query_many(&self, names: &[String]) -> Result<String, RegistryError>;

    /// Human readable description of a query, for debug output
    fn describe(&self, names: &[String]) -> String {
        names.join(" ")
    }
}

impl<Q: RegistryQuery + ?Sized> RegistryQuery for &Q {
    fn query_one(&self, name: &str) -> Result<String, RegistryError> {
        (**self).query_one(name)
    }

    fn query_many(&self, names: &[String]) -> Result<String, RegistryError> {
        (**self).query_many(names)
    }

    fn describe(&self, names: &[String]) -> String {
        (**self).describe(names)
    }
}
