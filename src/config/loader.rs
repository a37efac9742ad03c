//! Configuration file discovery and loading.

use crate::config::schema::InstallConfig;
use crate::error::{InstallError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the config file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".checkbook-install.yml";

/// Default config path for a project.
pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<InstallConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            InstallError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            InstallError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into an [`InstallConfig`].
///
/// `source_path` is only used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<InstallConfig> {
    serde_yaml::from_str(content).map_err(|e| InstallError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit path must exist. Without one, the project's
/// `.checkbook-install.yml` is used when present and defaults otherwise.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<InstallConfig> {
    if let Some(path) = config_override {
        debug!("Loading config from {}", path.display());
        return load_config_file(path);
    }

    let path = default_config_path(project_root);
    if path.is_file() {
        debug!("Loading config from {}", path.display());
        load_config_file(&path)
    } else {
        Ok(InstallConfig::default())
    }
}
