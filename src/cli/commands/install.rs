//! Install command implementation.
//!
//! Backs `install`, `update`, and `checkbook`: force-copy the script into
//! the destination directory.

use crate::cli::args::InstallArgs;
use crate::error::Result;
use crate::install::{format_mode, InstallPaths, Installer};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand {
    paths: InstallPaths,
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(paths: InstallPaths, args: InstallArgs) -> Self {
        Self { paths, args }
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let installer = Installer::new(&self.paths);

        if self.args.dry_run {
            let plan = installer.plan()?;
            ui.message("Running in dry-run mode - nothing will be written");
            ui.message(&format!(
                "Would copy {} to {}",
                plan.source.display(),
                plan.target.display()
            ));
            if plan.replaces_existing {
                ui.detail("an existing file would be overwritten");
            }
            ui.detail(&format!("{} bytes, mode {}", plan.size, format_mode(plan.mode)));
            return Ok(CommandResult::success());
        }

        let report = installer.install()?;
        ui.success(&format!("Installed {}", report.target.display()));
        if report.replaced {
            ui.detail("replaced the previous copy");
        }
        ui.detail(&format!(
            "{} bytes, mode {}",
            report.bytes,
            format_mode(report.mode)
        ));

        Ok(CommandResult::success())
    }
}
