//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. Subcommands mirror the
//! classic make targets: `install`, `update`, `checkbook`, and `clean`.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::Overrides;
use crate::ui::OutputMode;

/// Install, update and remove the checkbook script.
#[derive(Debug, Parser)]
#[command(name = "checkbook-install")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Script to install [default: checkbook.py]
    #[arg(short, long, global = true, env = "CHECKBOOK_SOURCE")]
    pub source: Option<PathBuf>,

    /// Directory to install into [default: /usr/local/bin]
    #[arg(short, long, global = true, env = "CHECKBOOK_DEST_DIR")]
    pub dest_dir: Option<PathBuf>,

    /// Path to config file (overrides default .checkbook-install.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory relative paths are resolved against (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Output mode selected by `--verbose` / `--quiet`.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }

    /// Path overrides from flags and environment.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            source: self.source.clone(),
            dest_dir: self.dest_dir.clone(),
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install the script (default if no command specified)
    Install(InstallArgs),

    /// Reinstall the script over an existing copy
    Update(InstallArgs),

    /// Copy the script into the destination directory
    Checkbook(InstallArgs),

    /// Remove the installed script
    Clean(CleanArgs),

    /// Compare the installed script with its source
    Status(StatusArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments shared by `install`, `update`, and `checkbook`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Check paths and show what would be copied without writing
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `clean` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CleanArgs {
    /// Show what would be removed without deleting
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
