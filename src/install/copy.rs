//! The installer.
//!
//! Installing force-copies the source script into the destination directory,
//! keeping its permission bits. The copy is staged next to the target and
//! renamed into place, so a failed install never leaves a half-written file
//! and never disturbs a previously installed copy.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{is_permission_error, write_error, InstallError, Result};

use super::{mode_of, InstallPaths};

/// What an install would do, after all checks have passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    /// Resolved source file.
    pub source: PathBuf,
    /// File that will be written.
    pub target: PathBuf,
    /// Size of the source in bytes.
    pub size: u64,
    /// Permission bits that will be applied to the target.
    pub mode: Option<u32>,
    /// Whether a file already exists at the target.
    pub replaces_existing: bool,
}

/// Outcome of a completed install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// File that was copied.
    pub source: PathBuf,
    /// File that was written.
    pub target: PathBuf,
    /// Bytes copied.
    pub bytes: u64,
    /// Permission bits now on the target.
    pub mode: Option<u32>,
    /// Whether an existing file was overwritten.
    pub replaced: bool,
}

/// Copies the source script into the destination directory.
pub struct Installer<'a> {
    paths: &'a InstallPaths,
}

impl<'a> Installer<'a> {
    /// Create an installer for the given paths.
    pub fn new(paths: &'a InstallPaths) -> Self {
        Self { paths }
    }

    /// Validate the source and destination without writing anything.
    pub fn plan(&self) -> Result<InstallPlan> {
        let source = &self.paths.source;
        let meta = fs::metadata(source).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => InstallError::SourceNotFound {
                path: source.clone(),
            },
            _ if is_permission_error(&e) => InstallError::permission_denied(source, "read"),
            _ => InstallError::Io(e),
        })?;

        if !meta.is_file() {
            return Err(InstallError::SourceNotFile {
                path: source.clone(),
            });
        }

        let target = self
            .paths
            .target()
            .ok_or_else(|| InstallError::SourceNotFile {
                path: source.clone(),
            })?;

        let dest_dir = &self.paths.dest_dir;
        match fs::metadata(dest_dir) {
            Ok(m) if m.is_dir() => {}
            Ok(_) => {
                return Err(InstallError::DestinationNotFound {
                    path: dest_dir.clone(),
                })
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(InstallError::DestinationNotFound {
                    path: dest_dir.clone(),
                })
            }
            Err(e) if is_permission_error(&e) => {
                return Err(InstallError::permission_denied(dest_dir, "access"))
            }
            Err(e) => return Err(e.into()),
        }

        Ok(InstallPlan {
            source: source.clone(),
            replaces_existing: fs::symlink_metadata(&target).is_ok(),
            target,
            size: meta.len(),
            mode: mode_of(&meta),
        })
    }

    /// Force-copy the source to the target.
    ///
    /// Overwrites any existing target. On failure the destination directory
    /// is left as it was.
    pub fn install(&self) -> Result<InstallReport> {
        let plan = self.plan()?;
        let staging = staging_path(&plan.target);

        debug!(
            "Copying {} to {} via {}",
            plan.source.display(),
            plan.target.display(),
            staging.display()
        );

        let bytes = match self.stage(&plan, &staging) {
            Ok(bytes) => bytes,
            Err(e) => {
                discard(&staging);
                return Err(e);
            }
        };

        commit(&staging, &plan.target, |from, to| fs::rename(from, to))?;

        let mode = fs::metadata(&plan.target)
            .ok()
            .and_then(|m| mode_of(&m));
        debug!("Installed {} ({} bytes)", plan.target.display(), bytes);

        Ok(InstallReport {
            source: plan.source,
            target: plan.target,
            bytes,
            mode,
            replaced: plan.replaces_existing,
        })
    }

    fn stage(&self, plan: &InstallPlan, staging: &Path) -> Result<u64> {
        let dest_dir = &self.paths.dest_dir;
        let bytes = fs::copy(&plan.source, staging)
            .map_err(|e| write_error(e, dest_dir, "write to"))?;

        let permissions = fs::metadata(&plan.source)?.permissions();
        fs::set_permissions(staging, permissions)
            .map_err(|e| write_error(e, staging, "set permissions on"))?;

        Ok(bytes)
    }
}

/// Move the staged copy over `target`.
///
/// If the move fails the staged copy is discarded and `target` is untouched.
fn commit<F>(staging: &Path, target: &Path, rename: F) -> Result<()>
where
    F: FnOnce(&Path, &Path) -> io::Result<()>,
{
    rename(staging, target).map_err(|e| {
        discard(staging);
        write_error(e, target, "replace")
    })
}

/// Hidden sibling of the target used while copying.
fn staging_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}

fn discard(staging: &Path) {
    if fs::remove_file(staging).is_ok() {
        debug!("Removed staging file {}", staging.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use tempfile::TempDir;

    #[cfg(unix)]
    use std::os::unix::fs::PermissionsExt;

    #[cfg(unix)]
    fn running_as_root() -> bool {
        unsafe { libc::geteuid() == 0 }
    }

    fn setup(content: &str) -> (TempDir, TempDir, InstallPaths) {
        let src = TempDir::new().unwrap();
        let bin = TempDir::new().unwrap();
        let source = src.path().join("checkbook.py");
        fs::write(&source, content).unwrap();
        let paths = InstallPaths::new(source, bin.path());
        (src, bin, paths)
    }

    fn leftover_entries(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| n != "checkbook.py")
            .collect()
    }

    #[test]
    fn install_copies_content() {
        let (_src, bin, paths) = setup("#!/usr/bin/env python3\nprint('ledger')\n");
        let report = Installer::new(&paths).install().unwrap();

        assert_eq!(report.target, bin.path().join("checkbook.py"));
        assert_eq!(
            fs::read(&report.target).unwrap(),
            fs::read(&paths.source).unwrap()
        );
        assert_eq!(report.bytes, fs::metadata(&paths.source).unwrap().len());
        assert!(!report.replaced);
    }

    #[cfg(unix)]
    #[test]
    fn install_preserves_permission_bits() {
        let (_src, _bin, paths) = setup("echo hi\n");
        fs::set_permissions(&paths.source, fs::Permissions::from_mode(0o750)).unwrap();

        let report = Installer::new(&paths).install().unwrap();

        let mode = fs::metadata(&report.target).unwrap().permissions().mode() & 0o7777;
        assert_eq!(mode, 0o750);
        assert_eq!(report.mode, Some(0o750));
    }

    #[test]
    fn install_overwrites_existing_target() {
        let (_src, bin, paths) = setup("new contents\n");
        let target = bin.path().join("checkbook.py");
        fs::write(&target, "old contents, much longer than the new ones\n").unwrap();

        let report = Installer::new(&paths).install().unwrap();

        assert!(report.replaced);
        assert_eq!(fs::read_to_string(&target).unwrap(), "new contents\n");
    }

    #[test]
    fn install_twice_matches_install_once() {
        let (_src, bin, paths) = setup("same\n");
        let installer = Installer::new(&paths);
        installer.install().unwrap();
        let first = fs::read(bin.path().join("checkbook.py")).unwrap();

        installer.install().unwrap();
        let second = fs::read(bin.path().join("checkbook.py")).unwrap();

        assert_eq!(first, second);
        assert!(leftover_entries(bin.path()).is_empty());
    }

    #[test]
    fn missing_source_is_not_found_and_leaves_destination_alone() {
        let (src, bin, _) = setup("unused");
        let target = bin.path().join("missing.py");
        fs::write(&target, "previous install").unwrap();
        let paths = InstallPaths::new(src.path().join("missing.py"), bin.path());

        let err = Installer::new(&paths).install().unwrap_err();

        assert!(matches!(err, InstallError::SourceNotFound { .. }));
        assert_eq!(err.kind(), FailureKind::NotFound);
        assert_eq!(fs::read_to_string(&target).unwrap(), "previous install");
    }

    #[test]
    fn directory_source_is_rejected() {
        let src = TempDir::new().unwrap();
        let bin = TempDir::new().unwrap();
        let paths = InstallPaths::new(src.path(), bin.path());

        let err = Installer::new(&paths).install().unwrap_err();
        assert!(matches!(err, InstallError::SourceNotFile { .. }));
    }

    #[test]
    fn missing_destination_directory_is_not_found() {
        let (_src, bin, mut paths) = setup("x");
        paths.dest_dir = bin.path().join("does-not-exist");

        let err = Installer::new(&paths).install().unwrap_err();

        assert!(matches!(err, InstallError::DestinationNotFound { .. }));
        assert_eq!(err.kind(), FailureKind::NotFound);
        assert!(!paths.dest_dir.exists());
    }

    #[cfg(unix)]
    #[test]
    fn read_only_destination_is_permission_denied_and_keeps_old_file() {
        if running_as_root() {
            return;
        }
        let (_src, bin, paths) = setup("fresh\n");
        let target = bin.path().join("checkbook.py");
        fs::write(&target, "installed earlier\n").unwrap();
        fs::set_permissions(bin.path(), fs::Permissions::from_mode(0o555)).unwrap();

        let result = Installer::new(&paths).install();

        fs::set_permissions(bin.path(), fs::Permissions::from_mode(0o755)).unwrap();
        let err = result.unwrap_err();
        assert_eq!(err.kind(), FailureKind::PermissionDenied);
        assert_eq!(fs::read_to_string(&target).unwrap(), "installed earlier\n");
        assert!(leftover_entries(bin.path()).is_empty());
    }

    #[test]
    fn refused_replace_is_permission_denied_and_keeps_old_file() {
        for kind in [io::ErrorKind::PermissionDenied, io::ErrorKind::ReadOnlyFilesystem] {
            let bin = TempDir::new().unwrap();
            let target = bin.path().join("checkbook.py");
            fs::write(&target, "installed earlier\n").unwrap();
            let staging = staging_path(&target);
            fs::write(&staging, "fresh\n").unwrap();

            let err = commit(&staging, &target, |_, _| Err(io::Error::from(kind))).unwrap_err();

            assert_eq!(err.kind(), FailureKind::PermissionDenied);
            assert!(matches!(
                err,
                InstallError::PermissionDenied { ref path, .. } if *path == target
            ));
            assert_eq!(fs::read_to_string(&target).unwrap(), "installed earlier\n");
            assert!(!staging.exists());
        }
    }

    #[cfg(unix)]
    #[test]
    fn install_replaces_symlink_instead_of_writing_through_it() {
        let (src, bin, paths) = setup("new\n");
        let elsewhere = src.path().join("elsewhere.py");
        fs::write(&elsewhere, "untouched\n").unwrap();
        let target = bin.path().join("checkbook.py");
        std::os::unix::fs::symlink(&elsewhere, &target).unwrap();

        let report = Installer::new(&paths).install().unwrap();

        assert!(report.replaced);
        assert!(fs::symlink_metadata(&target).unwrap().file_type().is_file());
        assert_eq!(fs::read_to_string(&target).unwrap(), "new\n");
        assert_eq!(fs::read_to_string(&elsewhere).unwrap(), "untouched\n");
    }

    #[test]
    fn commit_replaces_target() {
        let bin = TempDir::new().unwrap();
        let target = bin.path().join("checkbook.py");
        fs::write(&target, "old\n").unwrap();
        let staging = staging_path(&target);
        fs::write(&staging, "new\n").unwrap();

        commit(&staging, &target, |from, to| fs::rename(from, to)).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new\n");
        assert!(!staging.exists());
    }

    #[test]
    fn plan_does_not_write() {
        let (_src, bin, paths) = setup("planned\n");
        let plan = Installer::new(&paths).plan().unwrap();

        assert_eq!(plan.size, 8);
        assert!(!plan.replaces_existing);
        assert!(!plan.target.exists());
        assert!(fs::read_dir(bin.path()).unwrap().next().is_none());
    }

    #[test]
    fn staging_path_is_hidden_sibling() {
        let staging = staging_path(Path::new("/usr/local/bin/checkbook.py"));
        assert_eq!(staging.parent(), Some(Path::new("/usr/local/bin")));
        let name = staging.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".checkbook.py."));
        assert!(name.ends_with(".tmp"));
    }
}
