use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Swelter NOAA heat index calculator.
#[derive(Parser)]
#[command(
    name = "swelter",
    version,
    about = "NOAA heat index over n-dimensional grids"
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
    /// Compute the heat index for one temperature/humidity pair.
    Compute(ComputeArgs),
    /// Check that every grid strategy agrees with the elementwise reference.
    Parity(ParityArgs),
}

/// Arguments for the `compute` subcommand.
#[derive(clap::Args)]
pub struct ComputeArgs {
    /// Air temperature in degrees Fahrenheit.
    #[arg(short, long, allow_negative_numbers = true)]
    pub temp: f64,

    /// Relative humidity as a 0-1 fraction.
    #[arg(short, long, allow_negative_numbers = true)]
    pub rh: f64,
}

/// Arguments for the `parity` subcommand.
#[derive(clap::Args)]
pub struct ParityArgs {
    /// Path to a parity TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the grid shape, e.g. `4,100,300`.
    #[arg(long, value_delimiter = ',')]
    pub shape: Option<Vec<usize>>,

    /// Override the absolute tolerance.
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Strategy to compare (repeatable); defaults to all.
    #[arg(long = "strategy")]
    pub strategies: Vec<String>,
}
