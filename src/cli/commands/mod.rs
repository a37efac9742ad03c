//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. `install`, `update`, and `checkbook` all run
//! [`install::InstallCommand`].

pub mod clean;
pub mod completions;
pub mod dispatcher;
pub mod install;
pub mod status;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
