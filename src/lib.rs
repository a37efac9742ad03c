//! checkbook-install - install, update and remove the checkbook script.
//!
//! The tool force-copies a single script into a binary directory
//! (`/usr/local/bin` by default) and removes it again on `clean`.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Config file loading and path resolution
//! - [`error`] - Error types and result aliases
//! - [`install`] - The installer, uninstaller, and status check
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use checkbook_install::install::{InstallPaths, Installer};
//! use checkbook_install::FailureKind;
//!
//! let paths = InstallPaths::new("/no/such/checkbook.py", "/usr/local/bin");
//! let err = Installer::new(&paths).install().unwrap_err();
//! assert_eq!(err.kind(), FailureKind::NotFound);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod install;
pub mod ui;

pub use error::{FailureKind, InstallError, Result};
