//! jotter - quick title + content notes in a local SQLite file

pub mod cli;
pub mod domain;
pub mod screen;
pub mod store;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_add, handle_completions, handle_list, handle_shell},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Add(args) => handle_add(args, &resolve_db_path(&cli)?),
        Command::List(args) => handle_list(args, &resolve_db_path(&cli)?),
        Command::Shell => handle_shell(&resolve_db_path(&cli)?),
        Command::Completions(args) => handle_completions(args),
    }
}

/// Picks the database file from `--db` or the config file.
fn resolve_db_path(cli: &Cli) -> Result<PathBuf> {
    let config = Config::load()?;
    let db_path = config.db_path(cli.db.as_ref());
    tracing::debug!(path = %db_path.display(), "using notes database");
    Ok(db_path)
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins over the `-v` count when set.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
