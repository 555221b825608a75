use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Selene: citizen-science observations by lunar phase.
#[derive(Parser)]
#[command(
    name = "selene",
    version,
    about = "Aggregate observations of a taxon by lunar phase"
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
    /// Aggregate a taxon's observations for one year by lunar phase and chart them.
    Analyze(AnalyzeArgs),
    /// Print the lunar phase of every day of a year.
    Phases(PhasesArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Numeric taxon id (the taxon and all its descendants are counted).
    #[arg(short, long)]
    pub taxon_id: u64,

    /// Calendar year to analyse.
    #[arg(short, long)]
    pub year: i32,

    /// Override the observation export path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path to TOML configuration file [default: selene.toml, if present].
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the per-phase report as JSON to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the chart bar width from config.
    #[arg(short, long)]
    pub width: Option<usize>,
}

/// Arguments for the `phases` subcommand.
#[derive(clap::Args)]
pub struct PhasesArgs {
    /// Calendar year to list.
    #[arg(short, long)]
    pub year: i32,

    /// Path to TOML configuration file [default: selene.toml, if present].
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print only the number of days per phase.
    #[arg(long)]
    pub summary: bool,
}
