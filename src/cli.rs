use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// calpick headless date picker toolkit.
#[derive(Parser)]
#[command(
    name = "calpick",
    version,
    about = "Headless date picker: month grids, date formats and session replay"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the 42-cell grid for a month.
    Grid(GridArgs),
    /// Render an ISO date in a picker format.
    Format(FormatArgs),
    /// Parse text written in a picker format and print the ISO date.
    Parse(ParseArgs),
    /// Replay a scripted picker session and print every emitted event.
    Replay(ReplayArgs),
}

/// Arguments for the `grid` subcommand.
#[derive(clap::Args)]
pub struct GridArgs {
    /// Month to show as YYYY-MM. Defaults to the current month.
    #[arg(short, long)]
    pub month: Option<String>,

    /// Path to a TOML file with a `[picker]` table.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// First column of the grid: 0 for Sunday, 1 for Monday.
    #[arg(short, long = "week-start")]
    pub week_start: Option<u8>,
}

/// Arguments for the `format` subcommand.
#[derive(clap::Args)]
pub struct FormatArgs {
    /// Date as YYYY-MM-DD.
    pub date: String,

    /// Target format, e.g. "DD MMM YYYY".
    #[arg(short, long, default_value = "MM/DD/YYYY")]
    pub format: String,
}

/// Arguments for the `parse` subcommand.
#[derive(clap::Args)]
pub struct ParseArgs {
    /// Text to parse.
    pub text: String,

    /// Format the text is written in.
    #[arg(short, long, default_value = "MM/DD/YYYY")]
    pub format: String,
}

/// Arguments for the `replay` subcommand.
#[derive(clap::Args)]
pub struct ReplayArgs {
    /// Path to the session TOML file.
    pub session: PathBuf,

    /// Print the report as pretty JSON.
    #[arg(long)]
    pub json: bool,
}
