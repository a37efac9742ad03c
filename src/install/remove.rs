//! The uninstaller.
//!
//! Removal is idempotent: a target that is already gone counts as success.
//! Only a permission failure is reported as an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{is_permission_error, write_error, Result};

/// What happened when removing the installed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The file existed and was deleted.
    Removed,
    /// Nothing was installed.
    AlreadyAbsent,
    /// Removal failed for a reason other than permissions and was tolerated.
    Skipped { reason: String },
}

/// Removes the installed script.
pub struct Uninstaller {
    target: PathBuf,
}

impl Uninstaller {
    /// Create an uninstaller for the installed file at `target`.
    pub fn new(target: impl AsRef<Path>) -> Self {
        Self {
            target: target.as_ref().to_path_buf(),
        }
    }

    /// Whether the target currently exists (symlinks count, even dangling ones).
    pub fn is_installed(&self) -> bool {
        fs::symlink_metadata(&self.target).is_ok()
    }

    /// Delete the target if present.
    pub fn remove(&self) -> Result<RemoveOutcome> {
        classify_removal(&self.target, fs::remove_file(&self.target))
    }
}

/// Turn the result of deleting `target` into an outcome.
fn classify_removal(target: &Path, result: io::Result<()>) -> Result<RemoveOutcome> {
    match result {
        Ok(()) => {
            debug!("Removed {}", target.display());
            Ok(RemoveOutcome::Removed)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("Nothing to remove at {}", target.display());
            Ok(RemoveOutcome::AlreadyAbsent)
        }
        Err(e) if is_permission_error(&e) => Err(write_error(e, target, "remove")),
        Err(e) => {
            warn!("Ignoring failure to remove {}: {}", target.display(), e);
            Ok(RemoveOutcome::Skipped {
                reason: e.to_string(),
            })
        }
    }
}
