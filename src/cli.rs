use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Calendar date dimension generator.
#[derive(Parser)]
#[command(
    name = "dimdate",
    version,
    about = "Generate and load a calendar date dimension"
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
    /// Generate every row in the configured range and load it into the table file.
    Generate(GenerateArgs),
    /// Print the dimension attributes of a single date as JSON.
    Show(ShowArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file [default: dimdate.toml, if present].
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override output Parquet path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override first date of the range (YYYY-MM-DD).
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Override last date of the range (YYYY-MM-DD).
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Override rows per load batch.
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Generate and batch rows without writing any file.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Date to describe (YYYY-MM-DD).
    pub date: NaiveDate,
}
