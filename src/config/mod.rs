//! Configuration for the installer.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Path resolution and precedence in [`settings`]
//!
//! # Example
//!
//! ```
//! use checkbook_install::config::{load_config, resolve_paths, Overrides};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".checkbook-install.yml"), "dest_dir: /opt/bin").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! let paths = resolve_paths(temp.path(), &Overrides::default(), &config);
//! assert_eq!(paths.dest_dir, std::path::PathBuf::from("/opt/bin"));
//! assert_eq!(paths.source, temp.path().join("checkbook.py"));
//! ```

pub mod loader;
pub mod schema;
pub mod settings;

pub use loader::{
    default_config_path, load_config, load_config_file, parse_config, CONFIG_FILE_NAME,
};
pub use schema::InstallConfig;
pub use settings::{resolve_paths, Overrides};
