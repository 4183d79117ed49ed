//! CLI argument parsing module for gempin

use crate::domain::PinPolicy;
use crate::registry::DEFAULT_GEM_PROGRAM;
use clap::Parser;
use std::path::PathBuf;

/// Pin Gemfile entries to newer versions of their locked gems
#[derive(Parser, Debug, Clone)]
#[command(
    name = "gempin",
    version,
    about = "Pin Gemfile entries to newer versions of their locked gems"
)]
pub struct CliArgs {
    /// Gem to update (default: every gem in the lockfile)
    pub gem: Option<String>,

    /// Which newer versions qualify
    #[arg(long, value_enum, default_value_t = PinPolicy::Patch)]
    pub policy: PinPolicy,

    /// Path to the Gemfile
    #[arg(long, default_value = "Gemfile")]
    pub gemfile: PathBuf,

    /// Path to the lockfile (default: <gemfile>.lock)
    #[arg(long)]
    pub lockfile: Option<PathBuf>,

    /// Program used to query published versions
    #[arg(long, default_value = DEFAULT_GEM_PROGRAM)]
    pub gem_command: String,

    /// Dry run mode - show what would be pinned without writing the Gemfile
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable quiet mode - no progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Print a JSON report on stdout
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Lockfile to read, next to the Gemfile unless given explicitly
    pub fn lockfile_path(&self) -> PathBuf {
        match &self.lockfile {
            Some(path) => path.clone(),
            None => {
                let mut path = self.gemfile.clone().into_os_string();
                path.push(".lock");
                PathBuf::from(path)
            }
        }
    }
}
