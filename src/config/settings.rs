//! Resolution of the effective install paths.
//!
//! Precedence, highest first: command-line flag, environment variable,
//! config file, built-in default. Flags and environment variables arrive
//! already merged by clap, so they share one [`Overrides`] value.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::schema::InstallConfig;
use crate::install::{InstallPaths, DEFAULT_DEST_DIR, DEFAULT_SOURCE};

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub source: Option<PathBuf>,
    pub dest_dir: Option<PathBuf>,
}

/// Combine overrides, config file, and defaults into concrete paths.
///
/// Relative paths are anchored at `project_root`.
pub fn resolve_paths(
    project_root: &Path,
    overrides: &Overrides,
    config: &InstallConfig,
) -> InstallPaths {
    let source = overrides
        .source
        .clone()
        .or_else(|| config.source.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE));
    let dest_dir = overrides
        .dest_dir
        .clone()
        .or_else(|| config.dest_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DEST_DIR));

    let paths = InstallPaths::new(
        anchor(project_root, source),
        anchor(project_root, dest_dir),
    );
    debug!(
        "Resolved source {} and destination {}",
        paths.source.display(),
        paths.dest_dir.display()
    );
    paths
}

fn anchor(root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}
