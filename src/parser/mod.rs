//! Text parsers
//!
//! This module provides parsers for:
//! - Gemfile version constraints (`~> 1.2`, `>= 1.0, < 2.0`)
//! - `gem search` output listing published versions

mod query;
mod ruby;

pub use query::{parse_query_output, parse_version_list, versions_for, GemVersions};
pub use ruby::RubyVersionParser;
