//! Launcher error definitions.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop the launcher before the server takes over.
///
/// Failures inside the server process itself are never mapped here; they
/// surface as the server's own output and exit code.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Base directory could not be determined or does not exist.
    #[error("cannot resolve base directory {}", .path.display())]
    BaseDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Switching the process working directory failed.
    #[error("cannot change working directory to {}", .path.display())]
    WorkingDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `devlaunch.toml` exists but could not be read.
    #[error("cannot read {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `devlaunch.toml` is not valid.
    #[error("invalid {}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The interpreter could not be started at all.
    #[error("failed to start {}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the advisory or dry-run output failed.
    #[error("failed to write output")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, LaunchError>;
