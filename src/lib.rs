//! gempin - Gemfile version pinning library
//!
//! This library pins the gems declared in a Gemfile to newer published
//! versions of what Gemfile.lock currently resolves, under one of three
//! policies:
//! - available: any newer version
//! - minor: newer versions within the same major line
//! - patch: newer versions within the same major.minor line

pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod output;
pub mod parser;
pub mod pinner;
pub mod registry;
pub mod update;
