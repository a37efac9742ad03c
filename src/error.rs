//! Error types for install operations.
//!
//! This module defines [`InstallError`], the error type used throughout the
//! crate, the coarse [`FailureKind`] taxonomy, and a [`Result`] alias.
//!
//! # Error Handling Strategy
//!
//! - Use `InstallError` for failures the user can act on (missing source,
//!   unwritable destination, bad config)
//! - Use `anyhow::Error` (via `InstallError::Other`) for unexpected errors
//! - Every error aborts the operation; there is no retry

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Coarse classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Something that should exist does not.
    NotFound,
    /// The filesystem refused a write or removal.
    PermissionDenied,
    /// Anything else.
    Other,
}

/// Core error type for install operations.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The file to install does not exist.
    #[error("Source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// The file to install exists but is not a regular file.
    #[error("Source is not a regular file: {path}")]
    SourceNotFile { path: PathBuf },

    /// The destination directory does not exist.
    #[error("Destination directory not found: {path}")]
    DestinationNotFound { path: PathBuf },

    /// The filesystem refused the operation.
    #[error("Permission denied: cannot {action} {path}")]
    PermissionDenied { path: PathBuf, action: String },

    /// Explicitly requested config file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the config file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InstallError {
    /// Classify this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::SourceNotFound { .. }
            | Self::SourceNotFile { .. }
            | Self::DestinationNotFound { .. }
            | Self::ConfigNotFound { .. } => FailureKind::NotFound,
            Self::PermissionDenied { .. } => FailureKind::PermissionDenied,
            Self::Io(e) if e.kind() == io::ErrorKind::NotFound => FailureKind::NotFound,
            Self::Io(e) if is_permission_error(e) => FailureKind::PermissionDenied,
            _ => FailureKind::Other,
        }
    }

    /// Build a `PermissionDenied` error for `path`.
    pub fn permission_denied(path: &Path, action: &str) -> Self {
        Self::PermissionDenied {
            path: path.to_path_buf(),
            action: action.to_string(),
        }
    }
}

/// Whether an IO error means the filesystem refused to let us write.
///
/// A read-only mount is treated the same as missing write permission.
pub fn is_permission_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem
    )
}

/// Map an IO error from writing, replacing, or removing `path`.
///
/// Permission and read-only filesystem failures become `PermissionDenied`;
/// anything else stays an `Io` error.
pub fn write_error(err: io::Error, path: &Path, action: &str) -> InstallError {
    if is_permission_error(&err) {
        InstallError::permission_denied(path, action)
    } else {
        InstallError::Io(err)
    }
}

/// Result type alias for install operations.
pub type Result<T> = std::result::Result<T, InstallError>;
