//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands, InstallArgs};
use crate::config::{load_config, resolve_paths};
use crate::error::Result;
use crate::install::InstallPaths;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// Returns a [`CommandResult`] carrying the exit code. Failures that
    /// abort the operation are returned as errors instead.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Resolve the install paths from flags, environment, and config file.
    pub fn resolve(&self, cli: &Cli) -> Result<InstallPaths> {
        let config = load_config(&self.project_root, cli.config.as_deref())?;
        Ok(resolve_paths(&self.project_root, &cli.overrides(), &config))
    }

    /// Dispatch and execute a command.
    ///
    /// With no subcommand, installs (the first make target).
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Install(args))
            | Some(Commands::Update(args))
            | Some(Commands::Checkbook(args)) => {
                let cmd = super::install::InstallCommand::new(self.resolve(cli)?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Clean(args)) => {
                let cmd = super::clean::CleanCommand::new(self.resolve(cli)?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Status(args)) => {
                let cmd = super::status::StatusCommand::new(self.resolve(cli)?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd =
                    super::install::InstallCommand::new(self.resolve(cli)?, InstallArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
