mod calc;
mod cmd;
mod data;
mod error;
mod format;
mod logging;
mod ui;
mod widget;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "courtside", about = "Tennis session booking form with wheel pickers")]
struct Cli {
    /// Path to the data directory holding config.yaml and draft.json (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the sample config.yaml and an empty draft.json
    Init,
    /// Print a month calendar with the date shortcuts
    Calendar {
        /// Month to show (e.g. 2025-03); defaults to the current month
        month: Option<String>,
        /// Days before this date (YYYY-MM-DD) are shown as unavailable
        #[arg(long)]
        min_date: Option<String>,
    },
    /// Estimate the distance and travel time between two points
    Distance {
        /// Origin as "lat,lng"
        from: String,
        /// Destination as "lat,lng"
        to: String,
        /// Print the estimate as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the saved draft
    Show,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };
    data::persistence::set_data_dir(data_dir.clone());

    // Checked before logging creates the logs/ subdirectory.
    let needs_init = dir_needs_init(&data_dir);
    let log_path = logging::init_logging(&data_dir)?;
    info!(log = %log_path.display(), data_dir = %data_dir.display(), "courtside starting");

    let is_init_command = matches!(cli.command, Some(Commands::Init));
    if !is_init_command && needs_init {
        eprintln!(
            "Data directory '{}' is missing or empty, running init...",
            data_dir.display()
        );
        cmd::init::run()?;
    }

    match cli.command {
        None => cmd::root::run(),
        Some(Commands::Init) => cmd::init::run(),
        Some(Commands::Calendar { month, min_date }) => {
            cmd::calendar::run(month.as_deref(), min_date.as_deref())
        }
        Some(Commands::Distance { from, to, json }) => cmd::distance::run(&from, &to, json),
        Some(Commands::Show) => cmd::show::run(),
    }
}

/// Returns true when `dir` does not exist or exists but contains no files.
fn dir_needs_init(dir: &std::path::Path) -> bool {
    if !dir.exists() {
        return true;
    }
    dir.read_dir()
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}
