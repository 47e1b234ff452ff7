//! drivepath binary.
//!
//! Path-level access to a drive kept in a JSON snapshot file.
//!
//! Usage:
//!   drivepath mkdir reports/2024/q1
//!   drivepath resolve reports/2024 --all
//!   drivepath paths 0192f3a1c2d34e5f8a9b0c1d2e3f4a5b
//!   drivepath exists reports/2025 || echo missing
//!
//! The snapshot lives at `--store`, else `store_path` from the config file,
//! else the platform data directory. Logs go to stderr; set `RUST_LOG` or
//! pass `-v` for more.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use drivepath_kernel::{DriveConfig, DrivePaths, SnapshotStore};

use commands::Command;

/// Path-based addressing over an id-based drive.
#[derive(Parser, Debug)]
#[command(name = "drivepath")]
#[command(about = "Resolve and create paths in an id-addressed drive")]
struct Args {
    /// Config file (RON). Defaults to the platform config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Snapshot file holding the drive.
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// More logging (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    match run(args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<bool> {
    let config = match &args.config {
        Some(path) => DriveConfig::load(path)
            .await
            .with_context(|| format!("loading config {}", path.display()))?,
        None => match DriveConfig::default_path() {
            Some(path) => DriveConfig::load_or_default(&path).await?,
            None => DriveConfig::default(),
        },
    };

    let store_path = args
        .store
        .clone()
        .or_else(|| config.effective_store_path())
        .context("no snapshot location: pass --store or set store_path in the config")?;
    let store = SnapshotStore::open(&store_path)
        .await
        .with_context(|| format!("opening snapshot {}", store_path.display()))?;
    tracing::debug!(store = %store_path.display(), "drive ready");

    let paths = DrivePaths::with_config(Arc::new(store), config.resolver);
    let report = commands::execute(&args.command, &paths).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(report.success())
}
