//! Comparison of the installed copy with its source.
//!
//! An install is current when the target's SHA-256 digest and permission bits
//! match the source's.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::{is_permission_error, InstallError, Result};

use super::{mode_of, InstallPaths};

/// Why an installed copy differs from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mismatch {
    /// File contents differ.
    Content,
    /// Permission bits differ.
    Permissions,
}

/// State of the installed copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum InstallStatus {
    /// The source script cannot be found.
    SourceMissing,
    /// Nothing is installed.
    NotInstalled,
    /// Installed copy matches the source.
    Current,
    /// Installed copy differs from the source.
    Outdated { reasons: Vec<Mismatch> },
}

impl InstallStatus {
    /// Whether the installed copy is up to date.
    pub fn is_current(&self) -> bool {
        matches!(self, Self::Current)
    }
}

/// Everything `status` knows about one install.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub source: PathBuf,
    pub target: PathBuf,
    pub status: InstallStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_sha256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installed_sha256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_mode: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installed_mode: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installed_at: Option<DateTime<Utc>>,
}

struct FileFacts {
    sha256: String,
    mode: Option<u32>,
    modified: Option<DateTime<Utc>>,
}

/// Inspect the source and the installed copy.
pub fn check_status(paths: &InstallPaths) -> Result<StatusReport> {
    let target = paths.target().ok_or_else(|| InstallError::SourceNotFile {
        path: paths.source.clone(),
    })?;

    let source_facts = inspect(&paths.source)?;
    let installed_facts = inspect(&target)?;

    let status = match (&source_facts, &installed_facts) {
        (None, _) => InstallStatus::SourceMissing,
        (Some(_), None) => InstallStatus::NotInstalled,
        (Some(src), Some(dst)) => {
            let mut reasons = Vec::new();
            if src.sha256 != dst.sha256 {
                reasons.push(Mismatch::Content);
            }
            if src.mode != dst.mode {
                reasons.push(Mismatch::Permissions);
            }
            if reasons.is_empty() {
                InstallStatus::Current
            } else {
                InstallStatus::Outdated { reasons }
            }
        }
    };

    Ok(StatusReport {
        source: paths.source.clone(),
        target,
        status,
        source_sha256: source_facts.as_ref().map(|f| f.sha256.clone()),
        source_mode: source_facts.as_ref().and_then(|f| f.mode),
        installed_sha256: installed_facts.as_ref().map(|f| f.sha256.clone()),
        installed_mode: installed_facts.as_ref().and_then(|f| f.mode),
        installed_at: installed_facts.and_then(|f| f.modified),
    })
}

/// Digest and metadata of a regular file, or `None` if there is no such file.
fn inspect(path: &Path) -> Result<Option<FileFacts>> {
    let meta = match fs::metadata(path) {
        Ok(m) if m.is_file() => m,
        Ok(_) => return Ok(None),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) if is_permission_error(&e) => {
            return Err(InstallError::permission_denied(path, "read"))
        }
        Err(e) => return Err(e.into()),
    };

    let content = fs::read(path).map_err(|e| {
        if is_permission_error(&e) {
            InstallError::permission_denied(path, "read")
        } else {
            e.into()
        }
    })?;

    Ok(Some(FileFacts {
        sha256: sha256_hex(&content),
        mode: mode_of(&meta),
        modified: meta.modified().ok().map(DateTime::from),
    }))
}

/// Hex-encoded SHA-256 of `content`.
pub fn sha256_hex(content: &[u8]) -> String {
    let digest = Sha256::digest(content);
    hex::encode(&digest[..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    use std::os::unix::fs::PermissionsExt;

    fn setup() -> (TempDir, TempDir, InstallPaths) {
        let src = TempDir::new().unwrap();
        let bin = TempDir::new().unwrap();
        let source = src.path().join("checkbook.py");
        fs::write(&source, "print('v1')\n").unwrap();
        let paths = InstallPaths::new(source, bin.path());
        (src, bin, paths)
    }

    #[test]
    fn sha256_of_empty_input() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn reports_not_installed() {
        let (_src, _bin, paths) = setup();
        let report = check_status(&paths).unwrap();

        assert_eq!(report.status, InstallStatus::NotInstalled);
        assert!(report.source_sha256.is_some());
        assert!(report.installed_sha256.is_none());
        assert!(report.installed_at.is_none());
    }

    #[test]
    fn reports_source_missing() {
        let (_src, _bin, paths) = setup();
        fs::remove_file(&paths.source).unwrap();

        let report = check_status(&paths).unwrap();
        assert_eq!(report.status, InstallStatus::SourceMissing);
    }

    #[test]
    fn reports_current_after_copy() {
        let (_src, bin, paths) = setup();
        let target = bin.path().join("checkbook.py");
        fs::copy(&paths.source, &target).unwrap();
        #[cfg(unix)]
        fs::set_permissions(&target, fs::metadata(&paths.source).unwrap().permissions()).unwrap();

        let report = check_status(&paths).unwrap();
        assert!(report.status.is_current());
        assert_eq!(report.source_sha256, report.installed_sha256);
        assert!(report.installed_at.is_some());
    }

    #[test]
    fn reports_content_mismatch() {
        let (_src, bin, paths) = setup();
        let target = bin.path().join("checkbook.py");
        fs::copy(&paths.source, &target).unwrap();
        fs::write(&paths.source, "print('v2')\n").unwrap();

        let report = check_status(&paths).unwrap();
        match report.status {
            InstallStatus::Outdated { reasons } => assert!(reasons.contains(&Mismatch::Content)),
            other => panic!("expected outdated, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn reports_permission_mismatch() {
        let (_src, bin, paths) = setup();
        let target = bin.path().join("checkbook.py");
        fs::copy(&paths.source, &target).unwrap();
        fs::set_permissions(&paths.source, fs::Permissions::from_mode(0o755)).unwrap();
        fs::set_permissions(&target, fs::Permissions::from_mode(0o644)).unwrap();

        let report = check_status(&paths).unwrap();
        assert_eq!(
            report.status,
            InstallStatus::Outdated {
                reasons: vec![Mismatch::Permissions]
            }
        );
    }

    #[test]
    fn status_serializes_with_state_tag() {
        let json = serde_json::to_value(InstallStatus::Outdated {
            reasons: vec![Mismatch::Content],
        })
        .unwrap();
        assert_eq!(json["state"], "outdated");
        assert_eq!(json["reasons"][0], "content");

        let json = serde_json::to_value(InstallStatus::NotInstalled).unwrap();
        assert_eq!(json["state"], "not_installed");
    }
}
