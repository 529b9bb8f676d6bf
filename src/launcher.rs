//! Launch flow: env check → working dir → interpreter → server.
//!
//! Planning is separated from the handoff so the decision can be inspected
//! (`--dry-run`) and tested without starting a server.

use serde::Serialize;
use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{self, LauncherConfig};
use crate::environment::{self, Interpreter};
use crate::error::{LaunchError, Result};
use crate::preflight::{self, EnvFileStatus};
use crate::server::ServerCommand;

/// Everything decided before the server takes over.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    pub base_dir: PathBuf,
    pub env_file: EnvFileStatus,
    pub interpreter: Interpreter,
    pub command: ServerCommand,
}

/// JSON view of a plan for `--dry-run --json`.
#[derive(Debug, Serialize)]
pub struct PlanSummary<'a> {
    pub base_dir: String,
    pub env_file: EnvFileStatus,
    pub interpreter: &'a Interpreter,
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchPlan {
    pub fn summary(&self) -> PlanSummary<'_> {
        PlanSummary {
            base_dir: self.base_dir.display().to_string(),
            env_file: self.env_file,
            interpreter: &self.interpreter,
            program: self.command.program().display().to_string(),
            args: self.command.args_lossy(),
        }
    }
}

pub struct Launcher {
    base_dir: PathBuf,
    config: LauncherConfig,
}

impl Launcher {
    pub fn new(base_dir: PathBuf, config: LauncherConfig) -> Self {
        Self { base_dir, config }
    }

    /// Launcher for a base directory, reading its `devlaunch.toml` if any.
    pub fn from_base_dir(base_dir: PathBuf) -> Result<Self> {
        let config = config::load(&base_dir)?;
        Ok(Self::new(base_dir, config))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Check `.env` (writing the advisory to `out`), pick the interpreter and
    /// build the server command. A missing `.env` never stops the plan.
    pub fn plan(&self, out: &mut dyn Write) -> Result<LaunchPlan> {
        let env_file = preflight::warn_if_missing(&self.base_dir, out)?;
        let interpreter =
            environment::select_interpreter(&self.base_dir, &self.config.interpreter);
        let command = ServerCommand::new(&interpreter, &self.base_dir, &self.config.server);

        Ok(LaunchPlan {
            base_dir: self.base_dir.clone(),
            env_file,
            interpreter,
            command,
        })
    }
}

/// Directory the launcher lives in, or an explicit override.
///
/// The result is canonical so `--app-dir` and the working directory agree.
pub fn resolve_base_dir(override_dir: Option<&str>) -> Result<PathBuf> {
    let path = match override_dir {
        Some(p) => PathBuf::from(shellexpand::tilde(p).as_ref()),
        None => {
            let exe = env::current_exe().map_err(|source| LaunchError::BaseDir {
                path: PathBuf::from("<current executable>"),
                source,
            })?;
            exe.parent().map(Path::to_path_buf).unwrap_or(exe)
        }
    };

    path.canonicalize()
        .map_err(|source| LaunchError::BaseDir { path, source })
}

/// Switch into the base directory and hand off to the server.
///
/// On Unix the launcher process is replaced by the server, so this only
/// returns on failure. Elsewhere the server runs as a child and its exit code
/// is returned.
pub fn run(plan: &LaunchPlan) -> Result<i32> {
    env::set_current_dir(&plan.base_dir).map_err(|source| LaunchError::WorkingDir {
        path: plan.base_dir.clone(),
        source,
    })?;

    tracing::info!(
        interpreter = %plan.command.program().display(),
        venv = plan.interpreter.is_venv(),
        cwd = %plan.base_dir.display(),
        "starting server"
    );

    let mut cmd = plan.command.to_command();

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        let source = cmd.exec();
        // exec only returns on error
        return Err(LaunchError::Spawn {
            program: plan.command.program().to_path_buf(),
            source,
        });
    }

    #[cfg(not(unix))]
    {
        let status = cmd.status().map_err(|source| LaunchError::Spawn {
            program: plan.command.program().to_path_buf(),
            source,
        })?;
        tracing::debug!(%status, "server exited");
        Ok(status.code().unwrap_or(1))
    }
}
