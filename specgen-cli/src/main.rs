//! Specgen CLI
//!
//! Writes the default config and runtime specs for a minimal shell container.

use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

mod cli;
mod commands;

use cli::Cli;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // --verbose sets the default level; RUST_LOG directives refine it
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = commands::dispatch(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
