//! Interpreter detection.
//!
//! Prefers the project-local virtual environment; otherwise falls back to
//! whatever interpreter the caller's search path provides.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::InterpreterSection;
use crate::paths;

/// Name used when nothing on the search path matches.
const FALLBACK_INTERPRETER: &str = "python";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", content = "path", rename_all = "lowercase")]
pub enum Interpreter {
    /// Interpreter inside the virtual environment
    Venv(PathBuf),
    /// Interpreter resolved from the ambient environment
    Ambient(PathBuf),
}

impl Interpreter {
    pub fn program(&self) -> &Path {
        match self {
            Interpreter::Venv(path) | Interpreter::Ambient(path) => path,
        }
    }

    pub fn is_venv(&self) -> bool {
        matches!(self, Interpreter::Venv(_))
    }
}

/// Candidate interpreter for a base directory and interpreter settings.
pub fn venv_candidate(base: &Path, settings: &InterpreterSection) -> PathBuf {
    paths::interpreter_in(&base.join(&settings.venv_dir))
}

/// Pick the interpreter that will run the server.
pub fn select_interpreter(base: &Path, settings: &InterpreterSection) -> Interpreter {
    let candidate = venv_candidate(base, settings);

    if candidate.is_file() {
        tracing::debug!(path = %candidate.display(), "using virtual environment interpreter");
        return Interpreter::Venv(candidate);
    }

    tracing::debug!(
        path = %candidate.display(),
        "no virtual environment interpreter, searching PATH"
    );
    Interpreter::Ambient(resolve_ambient(&settings.ambient))
}

/// First candidate found on the search path.
///
/// When none is found the bare fallback name is returned, so the spawn fails
/// with the platform's own "not found" error.
pub fn resolve_ambient(candidates: &[String]) -> PathBuf {
    for name in candidates {
        if let Ok(path) = which::which(name) {
            tracing::debug!(name = %name, path = %path.display(), "found ambient interpreter");
            return path;
        }
    }

    let fallback = candidates
        .first()
        .map(String::as_str)
        .unwrap_or(FALLBACK_INTERPRETER);
    tracing::warn!(candidates = ?candidates, "no interpreter found on PATH");
    PathBuf::from(fallback)
}
