//! Status command implementation.
//!
//! Shows whether the installed script matches its source. Exits non-zero
//! unless the installed copy is current.

use crate::cli::args::StatusArgs;
use crate::error::{InstallError, Result};
use crate::install::{
    check_status, format_mode, InstallPaths, InstallStatus, Mismatch, StatusReport,
};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    paths: InstallPaths,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(paths: InstallPaths, args: StatusArgs) -> Self {
        Self { paths, args }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = check_status(&self.paths)?;

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&report).map_err(|e| InstallError::Other(e.into()))?;
            ui.output(&json);
        } else {
            show_report(&report, ui);
        }

        if report.status.is_current() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

fn show_report(report: &StatusReport, ui: &mut dyn UserInterface) {
    ui.message(&format!("Source: {}", report.source.display()));
    ui.message(&format!("Target: {}", report.target.display()));

    match &report.status {
        InstallStatus::SourceMissing => ui.warning("Source script not found"),
        InstallStatus::NotInstalled => ui.warning("Not installed"),
        InstallStatus::Current => ui.success("Installed and up to date"),
        InstallStatus::Outdated { reasons } => {
            let reasons: Vec<&str> = reasons
                .iter()
                .map(|r| match r {
                    Mismatch::Content => "content differs",
                    Mismatch::Permissions => "permissions differ",
                })
                .collect();
            ui.warning(&format!("Outdated ({})", reasons.join(", ")));
        }
    }

    if let Some(sha) = &report.source_sha256 {
        ui.detail(&format!(
            "source    sha256 {} mode {}",
            sha,
            format_mode(report.source_mode)
        ));
    }
    if let Some(sha) = &report.installed_sha256 {
        ui.detail(&format!(
            "installed sha256 {} mode {}",
            sha,
            format_mode(report.installed_mode)
        ));
    }
    if let Some(at) = report.installed_at {
        ui.detail(&format!("installed {}", at.format("%Y-%m-%d %H:%M")));
    }
}
