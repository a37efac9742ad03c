//! Configuration file schema.
//!
//! Maps the optional `.checkbook-install.yml` file:
//!
//! ```yaml
//! source: checkbook.py
//! dest_dir: /usr/local/bin
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings read from the config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallConfig {
    /// Script to install, relative to the project root unless absolute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    /// Directory to install into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest_dir: Option<PathBuf>,
}
