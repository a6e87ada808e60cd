mod cli;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("slider={}", level).parse()?)
                .add_directive(format!("slider_core={}", level).parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::CliConfig::load_or_default(args.config.as_deref())?;

    match args.command {
        Command::Judge {
            scenario,
            json,
            no_color,
        } => commands::judge::run(&scenario, &config, json, no_color),
        Command::Schedule { scenario, json } => commands::schedule::run(&scenario, &config, json),
        Command::Trace {
            scenario,
            no_color,
        } => commands::trace::run(&scenario, &config, no_color),
    }
}
