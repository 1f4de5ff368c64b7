//! Checkers in the terminal
//!
//! Usage:
//!   checkers [--coach] [--seed N] [--config checkers.toml]
//!   checkers list
//!   checkers replay <id>

use anyhow::{Context, Result};
use checkers_cli::{list_games, show_replay, Action, Args, Table};
use checkers_session::{GameStore, JsonFileStore, SessionConfig};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    let mut config = SessionConfig::load_or_default(args.config.as_deref())?;
    args.apply(&mut config);
    debug!(?config, "configuration loaded");

    let mut stdout = std::io::stdout();
    match args.subcommand() {
        Action::Play => {
            let mut table = Table::from_config(&config);
            let mut input = BufReader::new(tokio::io::stdin()).lines();
            table.play(&mut input, &mut stdout).await?;
        }
        Action::List => {
            let store = JsonFileStore::new(config.store.dir.clone());
            list_games(&store, &mut stdout)?;
        }
        Action::Replay { id } => {
            let store = JsonFileStore::new(config.store.dir.clone());
            let record = store
                .load(id)
                .with_context(|| format!("could not open game {id}"))?;
            show_replay(&record, &mut stdout)?;
        }
    }
    Ok(())
}
