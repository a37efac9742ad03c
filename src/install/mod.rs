//! Installing and removing the checkbook script.
//!
//! The whole job is one file: the source script is force-copied into a
//! destination directory, and `clean` removes the copy again.
//!
//! - [`copy`] - the installer (`install`, `update`, `checkbook`)
//! - [`remove`] - the uninstaller (`clean`)
//! - [`status`] - comparison of the installed copy with its source
//!
//! # Example
//!
//! ```
//! use checkbook_install::install::{InstallPaths, Installer, Uninstaller, RemoveOutcome};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let src = TempDir::new().unwrap();
//! let bin = TempDir::new().unwrap();
//! fs::write(src.path().join("checkbook.py"), "print('hi')\n").unwrap();
//!
//! let paths = InstallPaths::new(src.path().join("checkbook.py"), bin.path());
//! let report = Installer::new(&paths).install().unwrap();
//! assert_eq!(fs::read(&report.target).unwrap(), b"print('hi')\n");
//!
//! let outcome = Uninstaller::new(&report.target).remove().unwrap();
//! assert_eq!(outcome, RemoveOutcome::Removed);
//! ```

pub mod copy;
pub mod remove;
pub mod status;

pub use copy::{InstallPlan, InstallReport, Installer};
pub use remove::{RemoveOutcome, Uninstaller};
pub use status::{check_status, InstallStatus, Mismatch, StatusReport};

use std::fs::Metadata;
use std::path::PathBuf;

/// Default source script, relative to the project root.
pub const DEFAULT_SOURCE: &str = "checkbook.py";

/// Default destination directory.
pub const DEFAULT_DEST_DIR: &str = "/usr/local/bin";

/// Where the script comes from and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPaths {
    /// The script to install.
    pub source: PathBuf,
    /// Directory the script is copied into.
    pub dest_dir: PathBuf,
}

impl InstallPaths {
    /// Create a new pair of paths.
    pub fn new(source: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dest_dir: dest_dir.into(),
        }
    }

    /// The installed file: the source's file name inside the destination directory.
    ///
    /// Returns `None` when the source path has no file name (e.g. `/` or `..`).
    pub fn target(&self) -> Option<PathBuf> {
        self.source.file_name().map(|name| self.dest_dir.join(name))
    }
}

/// Permission bits of a file, where the platform has them.
#[cfg(unix)]
pub(crate) fn mode_of(meta: &Metadata) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    Some(meta.permissions().mode() & 0o7777)
}

#[cfg(not(unix))]
pub(crate) fn mode_of(_meta: &Metadata) -> Option<u32> {
    None
}

/// Format permission bits the way `ls -l` users expect (`0755`).
pub fn format_mode(mode: Option<u32>) -> String {
    match mode {
        Some(m) => format!("{:04o}", m),
        None => "n/a".to_string(),
    }
}
