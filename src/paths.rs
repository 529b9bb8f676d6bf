//! Single source of truth for the filesystem layout the launcher inspects.
//!
//! Everything is relative to the base directory (the directory holding the
//! launcher). No I/O happens here.
//!
//! ```text
//! <workspace>/
//! ├── .venv/                   # Project-local interpreter (preferred)
//! │   └── bin/python
//! └── <group>/
//!     └── <base>/
//!         ├── .env             # Local settings (checked, never read)
//!         ├── .env.example     # Template the advisory points at
//!         └── devlaunch.toml   # Optional launcher overrides
//! ```

use std::path::{Path, PathBuf};

/// Local settings consumed by the application: `<base>/.env`
pub const ENV_FILE: &str = ".env";

/// Template operators copy from: `<base>/.env.example`
pub const ENV_EXAMPLE: &str = ".env.example";

/// Launcher overrides: `<base>/devlaunch.toml`
pub const CONFIG_FILE: &str = "devlaunch.toml";

/// Default virtual environment location, relative to the base directory.
pub const DEFAULT_VENV_DIR: &str = "../../.venv";

pub fn env_file(base: &Path) -> PathBuf {
    base.join(ENV_FILE)
}

pub fn env_example(base: &Path) -> PathBuf {
    base.join(ENV_EXAMPLE)
}

pub fn config_file(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Interpreter inside the default virtual environment.
pub fn venv_interpreter(base: &Path) -> PathBuf {
    interpreter_in(&base.join(DEFAULT_VENV_DIR))
}

/// Interpreter binary inside a virtual environment directory.
///
/// Unix venvs put it at `bin/python`, Windows venvs at `Scripts/python.exe`.
pub fn interpreter_in(venv: &Path) -> PathBuf {
    #[cfg(windows)]
    {
        venv.join("Scripts").join("python.exe")
    }

    #[cfg(not(windows))]
    {
        venv.join("bin").join("python")
    }
}
