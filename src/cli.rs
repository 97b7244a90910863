use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Clima daily-temperature climatology tool.
#[derive(Parser)]
#[command(
    name = "clima",
    version,
    about = "Historical daily-temperature normals and extremity statistics"
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
    /// Fetch the raw archive response for the configured location.
    Fetch(FetchArgs),
    /// Aggregate a fetched response into day-of-year statistics.
    Stats(StatsArgs),
}

/// Arguments for the `fetch` subcommand.
#[derive(clap::Args)]
pub struct FetchArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "clima.toml")]
    pub config: PathBuf,

    /// Path for the raw response body.
    #[arg(short, long, default_value = "archive.json")]
    pub output: PathBuf,
}

/// Arguments for the `stats` subcommand.
#[derive(clap::Args)]
pub struct StatsArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "clima.toml")]
    pub config: PathBuf,

    /// Path to a previously fetched raw response body.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Year to extract alongside the statistics (overrides config).
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Path for the statistics JSON; stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
