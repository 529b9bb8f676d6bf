//! Launcher configuration stored in `<base>/devlaunch.toml`.
//!
//! The file is optional. Every field defaults to the stock development
//! setup: `uvicorn app.main:app --reload --host 0.0.0.0 --port 8000`, run by
//! the interpreter in `../../.venv` when present.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LaunchError, Result};
use crate::paths;

// =============================================================================
// Config Types
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LauncherConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub interpreter: InterpreterSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSection {
    /// Python module run with `-m`
    #[serde(default = "default_module")]
    pub module: String,
    /// ASGI application target, `package.module:attribute`
    #[serde(default = "default_app")]
    pub app: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Restart on source change
    #[serde(default = "default_reload")]
    pub reload: bool,
}

fn default_module() -> String {
    "uvicorn".to_string()
}
fn default_app() -> String {
    "app.main:app".to_string()
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_reload() -> bool {
    true
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            module: default_module(),
            app: default_app(),
            host: default_host(),
            port: default_port(),
            reload: default_reload(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpreterSection {
    /// Virtual environment directory, relative to the base directory
    #[serde(default = "default_venv_dir")]
    pub venv_dir: PathBuf,
    /// Search-path candidates when the venv interpreter is missing
    #[serde(default = "default_ambient")]
    pub ambient: Vec<String>,
}

fn default_venv_dir() -> PathBuf {
    PathBuf::from(paths::DEFAULT_VENV_DIR)
}
fn default_ambient() -> Vec<String> {
    vec!["python3".to_string(), "python".to_string()]
}

impl Default for InterpreterSection {
    fn default() -> Self {
        Self {
            venv_dir: default_venv_dir(),
            ambient: default_ambient(),
        }
    }
}

// =============================================================================
// Load
// =============================================================================

/// Load `devlaunch.toml` from the base directory, or defaults when absent.
pub fn load(base: &Path) -> Result<LauncherConfig> {
    let path = paths::config_file(base);

    if !path.exists() {
        return Ok(LauncherConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(|source| LaunchError::ConfigRead {
        path: path.clone(),
        source,
    })?;

    toml::from_str(&contents).map_err(|source| LaunchError::Config { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_dev_setup() {
        let config = LauncherConfig::default();
        assert_eq!(config.server.module, "uvicorn");
        assert_eq!(config.server.app, "app.main:app");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert!(config.server.reload);
        assert_eq!(config.interpreter.venv_dir, PathBuf::from("../../.venv"));
        assert_eq!(config.interpreter.ambient, vec!["python3", "python"]);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load(dir.path()).unwrap();
        assert_eq!(config, LauncherConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("devlaunch.toml"),
            "[server]\nport = 9000\n\n[interpreter]\nambient = [\"python3.12\"]\n",
        )
        .unwrap();

        let config = load(dir.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.server.reload);
        assert_eq!(config.interpreter.ambient, vec!["python3.12"]);
        assert_eq!(config.interpreter.venv_dir, PathBuf::from("../../.venv"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("devlaunch.toml"), "[server\nport = ").unwrap();

        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, LaunchError::Config { .. }));
    }
}
