//! Internal implementation for launch command
//!
//! Handles the launch flow: base dir → plan (env check, interpreter) → output or handoff

use anyhow::{Context, Result};
use std::io::{self, Write};

use devlaunch::launcher::{self, LaunchPlan, Launcher};

use super::LaunchOptions;

/// Main launch entry point
pub fn launch(options: LaunchOptions) -> Result<i32> {
    let base_dir = launcher::resolve_base_dir(options.base_dir.as_deref())
        .context("Cannot determine the backend directory")?;
    tracing::debug!(base = %base_dir.display(), "resolved base directory");

    let launcher = Launcher::from_base_dir(base_dir)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let plan = launcher.plan(&mut out)?;

    if options.dry_run {
        print_plan(&plan, options.json, &mut out)?;
        return Ok(0);
    }
    drop(out);

    let code = launcher::run(&plan)
        .with_context(|| format!("Failed to start server in {}", plan.base_dir.display()))?;
    Ok(code)
}

fn print_plan(plan: &LaunchPlan, json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        let summary = serde_json::to_string_pretty(&plan.summary())?;
        writeln!(out, "{}", summary)?;
    } else {
        writeln!(out, "{}", plan.command)?;
    }
    out.flush()?;
    Ok(())
}
