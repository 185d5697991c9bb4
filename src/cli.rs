//! Defines command-line interface options using `clap` for the tardis binary.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// A CLI tool for finding canonical coordinates in NetCDF files
#[derive(Parser, Debug)]
#[command(
    version,
    name = "tardis",
    about = "Find the longitude, latitude, time and vertical coordinates of a NetCDF variable"
)]
pub struct Args {
    /// Path to the NetCDF file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Data variable whose coordinates are resolved
    #[arg(short = 'n', long)]
    pub variable: String,

    /// Resolve a single coordinate instead of all four
    #[arg(short, long, value_enum)]
    pub coord: Option<CoordKind>,

    /// List every coordinate with its axis and standard name
    #[arg(long)]
    pub list: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Which canonical coordinate to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CoordKind {
    X,
    Y,
    Z,
    T,
}
