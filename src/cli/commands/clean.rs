//! Clean command implementation.
//!
//! Removes the installed script. Nothing installed is not an error.

use crate::cli::args::CleanArgs;
use crate::error::{InstallError, Result};
use crate::install::{InstallPaths, RemoveOutcome, Uninstaller};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The clean command implementation.
pub struct CleanCommand {
    paths: InstallPaths,
    args: CleanArgs,
}

impl CleanCommand {
    /// Create a new clean command.
    pub fn new(paths: InstallPaths, args: CleanArgs) -> Self {
        Self { paths, args }
    }
}

impl Command for CleanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let target = self
            .paths
            .target()
            .ok_or_else(|| InstallError::SourceNotFile {
                path: self.paths.source.clone(),
            })?;
        let uninstaller = Uninstaller::new(&target);

        if self.args.dry_run {
            ui.message("Running in dry-run mode - nothing will be removed");
            if uninstaller.is_installed() {
                ui.message(&format!("Would remove {}", target.display()));
            } else {
                ui.message(&format!("Nothing to remove at {}", target.display()));
            }
            return Ok(CommandResult::success());
        }

        match uninstaller.remove()? {
            RemoveOutcome::Removed => ui.success(&format!("Removed {}", target.display())),
            RemoveOutcome::AlreadyAbsent => {
                ui.message(&format!("Nothing to remove at {}", target.display()))
            }
            RemoveOutcome::Skipped { reason } => ui.warning(&format!(
                "Could not remove {}: {}",
                target.display(),
                reason
            )),
        }

        Ok(CommandResult::success())
    }
}
