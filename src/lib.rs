pub mod config;
pub mod environment;
pub mod error;
pub mod launcher;
pub mod paths;
pub mod preflight;
pub mod server;

// Re-export commonly used types
pub use config::LauncherConfig;
pub use environment::Interpreter;
pub use error::{LaunchError, Result};
pub use launcher::{LaunchPlan, Launcher};
pub use preflight::EnvFileStatus;
pub use server::ServerCommand;
