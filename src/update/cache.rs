//! Per-run memoization of published versions
//!
//! Every gem is queried at most once per run. A batch query fills the cache
//! for all gems it returns; gems missing from a batch response are queried
//! individually on first access.

use crate::domain::Version;
use crate::output::Logger;
use crate::parser;
use crate::registry::RegistryQuery;
use std::collections::HashMap;

/// Version lists keyed by gem name, in registry emission order
pub struct VersionCache<'q, Q: RegistryQuery + ?Sized> {
    query: &'q Q,
    versions: HashMap<String, Vec<Version>>,
}

impl<'q, Q: RegistryQuery + ?Sized> VersionCache<'q, Q> {
    pub fn new(query: &'q Q) -> Self {
        Self {
            query,
            versions: HashMap::new(),
        }
    }

    /// Returns true if `name` has already been fetched
    pub fn contains(&self, name: &str) -> bool {
        self.versions.contains_key(name)
    }

    /// Number of gems fetched so far
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Published versions of `name`, querying the registry on first access
    ///
    /// A failed or empty query caches an empty list.
    pub fn versions_for(&mut self, name: &str, logger: &dyn Logger) -> &[Version] {
        if !self.versions.contains_key(name) {
            logger.info(&format!("Searching for versions of \"{}\" ...", name));
            logger.debug(&self.query.describe(&[name.to_string()]));

            let versions = match self.query.query_one(name) {
                Ok(output) => parser::versions_for(&output, name),
                Err(e) => {
                    logger.debug(&e.to_string());
                    Vec::new()
                }
            };
            self.versions.insert(name.to_string(), versions);
        }

        self.versions
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Fetch the versions of several gems with a single query
    ///
    /// Only requested gems present in the response are cached.
    pub fn preload(&mut self, names: &[String], logger: &dyn Logger) {
        if names.is_empty() {
            return;
        }

        logger.info(&format!("Searching for versions of {} ...", names.join(", ")));
        logger.debug(&self.query.describe(names));

        let output = match self.query.query_many(names) {
            Ok(output) => output,
            Err(e) => {
                logger.debug(&e.to_string());
                return;
            }
        };

        for entry in parser::parse_query_output(&output) {
            if names.contains(&entry.name) {
                self.versions.entry(entry.name).or_insert(entry.versions);
            }
        }
    }
}
