//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues reading or writing the Gemfile
//! - LockfileError: Issues reading Gemfile.lock
//! - RegistryError: Issues running the `gem` query command
//!
//! None of these are raised by version selection itself; a failed registry
//! query only means "no versions found" for that gem.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Gemfile related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Gemfile.lock related errors
    #[error(transparent)]
    Lockfile(#[from] LockfileError),
}

/// Errors related to Gemfile operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Gemfile not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read Gemfile
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write Gemfile
    #[error("failed to write manifest file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to Gemfile.lock
#[derive(Error, Debug)]
pub enum LockfileError {
    /// Gemfile.lock not found
    #[error("lockfile not found: {path} (run `bundle install` first)")]
    NotFound { path: PathBuf },

    /// Failed to read Gemfile.lock
    #[error("failed to read lockfile {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to the registry query command
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The command could not be started
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command exited unsuccessfully
    #[error("`{command}` exited with status {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: i32,
        stderr: String,
    },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError, mapping a missing file to NotFound
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::not_found(path);
        }
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }
}

impl LockfileError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        LockfileError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError, mapping a missing file to NotFound
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::not_found(path);
        }
        LockfileError::ReadError {
            path: path.into(),
            source,
        }
    }
}

impl RegistryError {
    /// Creates a new Spawn error
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        RegistryError::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Creates a new CommandFailed error
    pub fn command_failed(
        command: impl Into<String>,
        status: i32,
        stderr: impl Into<String>,
    ) -> Self {
        RegistryError::CommandFailed {
            command: command.into(),
            status,
            stderr: stderr.into(),
        }
    }
}
