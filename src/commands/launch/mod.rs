//! Launch command - start the backend dev server
//!
//! # Usage
//!
//! ```bash
//! devlaunch                          # From the directory holding the binary
//! devlaunch --base-dir ~/app/backend # Explicit backend directory
//! devlaunch --dry-run                # Show the server command
//! devlaunch --dry-run --json         # Show the full launch plan
//! ```

mod internal;

use anyhow::Result;

/// Launch options
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Backend directory (default: directory containing the executable)
    pub base_dir: Option<String>,
    /// Print the command instead of running it
    pub dry_run: bool,
    /// Print the plan as JSON (dry run only)
    pub json: bool,
}

/// Execute the launch command. Returns the exit code to pass on.
pub fn execute(options: LaunchOptions) -> Result<i32> {
    internal::launch(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = LaunchOptions::default();
        assert!(opts.base_dir.is_none());
        assert!(!opts.dry_run);
        assert!(!opts.json);
    }
}
