//! Pinning workflow
//!
//! This module coordinates one run: read locked versions → fetch published
//! versions → pick a candidate per gem → record pins → write the Gemfile.
//!
//! A gem that cannot be updated never stops the others; the only error a
//! run returns is a failure to persist the Gemfile.

use crate::domain::{PinPolicy, PinReport, UpdateDecision};
use crate::error::ManifestError;
use crate::manifest::{LockReader, ManifestStore};
use crate::output::Logger;
use crate::registry::RegistryQuery;
use crate::update::{PolicyFilter, VersionCache};

/// Pins Gemfile entries to the best version allowed by a policy
pub struct Pinner<Q: RegistryQuery> {
    filter: PolicyFilter,
    query: Q,
}

impl<Q: RegistryQuery> Pinner<Q> {
    /// Create a pinner for the given policy and registry
    pub fn new(policy: PinPolicy, query: Q) -> Self {
        Self {
            filter: PolicyFilter::new(policy),
            query,
        }
    }

    pub fn policy(&self) -> PinPolicy {
        self.filter.policy()
    }

    /// Run the pinning workflow
    ///
    /// With `target` only that gem is considered; otherwise every locked gem
    /// is, with one batched registry query up front. Each run starts with an
    /// empty version cache.
    pub fn run(
        &self,
        target: Option<&str>,
        lock: &dyn LockReader,
        manifest: &mut dyn ManifestStore,
        logger: &dyn Logger,
    ) -> Result<PinReport, ManifestError> {
        let locked = lock.locked();
        let targets: Vec<String> = match target {
            Some(name) => vec![name.to_string()],
            None => locked.iter().map(|dep| dep.name.clone()).collect(),
        };

        let mut cache = VersionCache::new(&self.query);
        if targets.len() > 1 {
            cache.preload(&targets, logger);
        }

        let mut report = PinReport::new(self.policy());

        for name in &targets {
            let Some(dependency) = locked.iter().find(|dep| &dep.name == name) else {
                if target.is_some() {
                    logger.muted(&format!("\"{}\" is not in the lockfile", name));
                }
                continue;
            };

            // Transitive dependencies are locked but not declared
            let Some(declaration) = manifest.find(name) else {
                if target.is_some() {
                    logger.muted(&format!("\"{}\" is not declared in the Gemfile", name));
                }
                continue;
            };

            let constraints: Vec<&str> = declaration
                .constraints
                .iter()
                .map(|spec| spec.raw.as_str())
                .collect();
            logger.debug(&format!(
                "{} declared on line {} [{}]{}",
                name,
                declaration.line + 1,
                constraints.join(", "),
                if declaration.is_pinned() { " (pinned)" } else { "" }
            ));

            let current = &dependency.version;
            let candidates = cache.versions_for(name, logger);
            let newer: Vec<&str> = PolicyFilter::newer_versions(candidates, current)
                .map(|v| v.as_str())
                .collect();
            logger.debug(&format!(
                "{} {}: {} newer version(s) [{}]",
                name,
                current,
                newer.len(),
                newer.join(", ")
            ));

            match self.filter.best_candidate(candidates, current) {
                Some(latest) => {
                    let latest = latest.clone();
                    logger.info(&format!(
                        "Updating \"{}\" from {} to {}",
                        name, current, latest
                    ));
                    manifest.update(&declaration, latest.as_str());
                    report
                        .decisions
                        .push(UpdateDecision::update(name, current.clone(), latest));
                }
                None => {
                    logger.muted(&format!(
                        "No newer {} versions found for \"{}\"",
                        self.policy(),
                        name
                    ));
                    report
                        .decisions
                        .push(UpdateDecision::no_newer_version(name, current.clone()));
                }
            }
        }

        logger.info("Done");

        if report.has_updates() {
            logger.info(&format!(
                "You may want to run: \"bundle update {}\"",
                report.updated_names().join(" ")
            ));
            report.written = manifest.write()?;
        }

        Ok(report)
    }
}
