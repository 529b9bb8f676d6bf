//! Preflight checks - advisory only, never block the launch.

use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

use crate::paths;

/// Variables the application expects to find in `.env`.
pub const REQUIRED_VARS: &[&str] = &["DATABASE_URL", "FIREBASE_SERVICE_ACCOUNT_FILE"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvFileStatus {
    Present,
    Missing,
}

impl EnvFileStatus {
    pub fn is_missing(self) -> bool {
        self == EnvFileStatus::Missing
    }
}

/// Test for `<base>/.env`. Contents are never read.
pub fn check_env_file(base: &Path) -> EnvFileStatus {
    if paths::env_file(base).exists() {
        EnvFileStatus::Present
    } else {
        EnvFileStatus::Missing
    }
}

/// The advisory shown when `.env` is missing.
pub fn advisory() -> String {
    format!(
        "{} {} not found. Copy {} to {} and set {}.",
        "Warning:".yellow().bold(),
        paths::ENV_FILE,
        paths::ENV_EXAMPLE,
        paths::ENV_FILE,
        REQUIRED_VARS.join(" and ")
    )
}

/// Check for `.env` and write the advisory to `out` if it is missing.
pub fn warn_if_missing(base: &Path, out: &mut dyn Write) -> io::Result<EnvFileStatus> {
    let status = check_env_file(base);
    tracing::debug!(base = %base.display(), ?status, "checked env file");

    if status.is_missing() {
        writeln!(out, "{}", advisory())?;
        out.flush()?;
    }

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_env_file_warns() {
        let dir = TempDir::new().unwrap();
        let mut out: Vec<u8> = Vec::new();

        let status = warn_if_missing(dir.path(), &mut out).unwrap();

        assert_eq!(status, EnvFileStatus::Missing);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains(".env.example"));
        assert!(text.contains("DATABASE_URL"));
        assert!(text.contains("FIREBASE_SERVICE_ACCOUNT_FILE"));
    }

    #[test]
    fn test_present_env_file_is_silent() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env"), "DATABASE_URL=postgres://x\n").unwrap();
        let mut out: Vec<u8> = Vec::new();

        let status = warn_if_missing(dir.path(), &mut out).unwrap();

        assert_eq!(status, EnvFileStatus::Present);
        assert!(out.is_empty());
    }

    #[test]
    fn test_env_directory_counts_as_present() {
        // Presence only; the launcher never opens it.
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".env")).unwrap();
        assert_eq!(check_env_file(dir.path()), EnvFileStatus::Present);
    }
}
