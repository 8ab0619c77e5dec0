//! Fills in `*****UPDATE_WITH_<NAME>*****` placeholders in configuration files.
//!
//! Each `--item NAME=FILE[,OUTPUT]` names a value and the file (relative to
//! `--root`) holding its placeholder. Values come from a JSON command file:
//! ```
//! cargo run -p fleet-gen --bin update-config -- \
//!     --item PROJECT_ID=backend/config.properties commands.json
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fleet_gen::update::{ConfigItem, ConfigUpdater};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory item files are relative to.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// A value to update, as NAME=FILE or NAME=FILE,OUTPUT.
    #[arg(short, long = "item", required = true)]
    items: Vec<ConfigItem>,

    /// JSON object mapping item names to their new values.
    command_file: PathBuf,

    /// Enable debug logging.
    #[arg(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let commands = std::fs::read_to_string(&cli.command_file)
        .with_context(|| format!("Failed to read {}", cli.command_file.display()))?;

    let updater = ConfigUpdater::new(cli.root, cli.items);
    let report = updater.apply_command_json(&commands)?;

    info!(
        updated = report.updated.len(),
        not_found = report.not_found.len(),
        skipped = report.skipped.len(),
        "Configuration updated"
    );
    if !report.unknown.is_empty() {
        warn!(unknown = ?report.unknown, "Command file had unknown items");
    }

    Ok(())
}
