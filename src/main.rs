//! gempin - Gemfile version pinning CLI tool
//!
//! Reads Gemfile.lock, asks `gem search` for newer releases and rewrites the
//! matching Gemfile lines with exact version pins.

use clap::Parser;
use colored::Colorize;
use gempin::cli::CliArgs;
use gempin::error::AppError;
use gempin::manifest::{Gemfile, GemfileLock, ManifestStore};
use gempin::output::{ConsoleLogger, JsonFormatter, Logger, Verbosity};
use gempin::pinner::Pinner;
use gempin::registry::GemCommand;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Load the Gemfile and its lockfile
fn load(args: &CliArgs) -> Result<(Gemfile, GemfileLock), AppError> {
    let gemfile = Gemfile::load(&args.gemfile, args.dry_run)?;
    let lock = GemfileLock::load(args.lockfile_path())?;
    Ok((gemfile, lock))
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<()> {
    let logger = ConsoleLogger::new(Verbosity::from_flags(args.quiet, args.verbose));

    logger.debug(&format!("gempin v{}", env!("CARGO_PKG_VERSION")));
    logger.debug(&format!(
        "Gemfile: {}, lockfile: {}, policy: {}",
        args.gemfile.display(),
        args.lockfile_path().display(),
        args.policy
    ));

    let (mut gemfile, lock) = load(&args)?;

    let pinner = Pinner::new(args.policy, GemCommand::new(args.gem_command.clone()));
    let report = pinner.run(args.gem.as_deref(), &lock, &mut gemfile, &logger)?;

    if args.dry_run && report.has_updates() {
        logger.muted(&format!(
            "Dry run: {} pin(s) not written to {}",
            gemfile.pending(),
            gemfile.path().display()
        ));
    }

    if args.json {
        let mut stdout = io::stdout().lock();
        JsonFormatter::new(args.dry_run).format(&report, &mut stdout)?;
        stdout.flush()?;
    }

    Ok(())
}
