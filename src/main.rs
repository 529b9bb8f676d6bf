use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::launch::LaunchOptions;

/// Environment variable holding the log filter, e.g. `DEVLAUNCH_LOG=debug`.
const LOG_ENV: &str = "DEVLAUNCH_LOG";

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Start the backend dev server (uvicorn, auto-reload, 0.0.0.0:8000)", long_about = None)]
struct Cli {
    /// Backend directory (default: directory containing this executable)
    #[arg(long, value_name = "DIR")]
    base_dir: Option<String>,

    /// Print the server command instead of running it
    #[arg(long)]
    dry_run: bool,

    /// With --dry-run, print the launch plan as JSON
    #[arg(short, long, requires = "dry_run")]
    json: bool,

    /// Log every decision to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = commands::launch::execute(LaunchOptions {
        base_dir: cli.base_dir,
        dry_run: cli.dry_run,
        json: cli.json,
    })?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

/// Logs go to stderr; stdout is reserved for the advisory and dry-run output.
fn init_logging(verbose: bool) {
    let default = if verbose { "devlaunch=debug" } else { "devlaunch=warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}
