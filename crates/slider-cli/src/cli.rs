//! CLI argument definitions for slider.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "slider")]
#[command(about = "osu! slider input judge", version)]
pub struct Args {
    /// Path to config file (defaults to slider.toml when present)
    #[arg(short, long, value_name = "FILE", env = "SLIDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Judge a scenario and print every result
    Judge {
        /// Scenario file (JSON)
        scenario: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Print the judgement schedule of a scenario's slider
    Schedule {
        /// Scenario file (JSON)
        scenario: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print tracking state after every frame
    Trace {
        /// Scenario file (JSON)
        scenario: PathBuf,
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}
