//! Parser for `gem search` output
//!
//! Each matched gem is printed on its own line:
//!
//! ```text
//! *** REMOTE GEMS ***
//!
//! nokogiri (1.15.4 ruby x86_64-linux, 1.15.3 ruby java, 1.15.2)
//! rack (3.0.8, 2.2.8, 2.2.7)
//! ```

use crate::domain::Version;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// name (comma separated version tokens)
static GEM_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_.\-]+) \(([^)]*)\)$").unwrap());

/// Versions listed for one gem in a query response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GemVersions {
    pub name: String,
    pub versions: Vec<Version>,
}

/// Parse a comma separated version list, keeping the first occurrence of each literal
///
/// Platform names after a version (`1.15.4 x86_64-linux`) and the
/// `default:` marker of bundled gems are ignored.
pub fn parse_version_list(list: &str) -> Vec<Version> {
    let mut seen = HashSet::new();
    list.split(',')
        .filter_map(|token| {
            let token = token.trim();
            let token = token.strip_prefix("default:").unwrap_or(token);
            Version::parse(token)
        })
        .filter(|version| seen.insert(version.as_str().to_string()))
        .collect()
}

/// Parse every `name (versions)` line of a query response, in output order
pub fn parse_query_output(output: &str) -> Vec<GemVersions> {
    output
        .lines()
        .filter_map(|line| {
            let caps = GEM_LINE_RE.captures(line.trim())?;
            Some(GemVersions {
                name: caps[1].to_string(),
                versions: parse_version_list(&caps[2]),
            })
        })
        .collect()
}

/// Versions listed for `name`, or an empty list when the gem is not in the output
pub fn versions_for(output: &str, name: &str) -> Vec<Version> {
    parse_query_output(output)
        .into_iter()
        .find(|entry| entry.name == name)
        .map(|entry| entry.versions)
        .unwrap_or_default()
}
