use checkers_session::SessionConfig;
use clap::Parser;
use std::path::PathBuf;
use uuid::Uuid;

/// Command-line arguments. Flags override values from the config file.
#[derive(Parser, Debug)]
#[command(name = "checkers", author, version, about = "Play checkers against the computer")]
pub struct Args {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the random policy
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show a suggested move before each of your turns
    #[arg(long)]
    pub coach: bool,

    /// Suggestion endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Use only the local policy for suggestions
    #[arg(long, conflicts_with = "endpoint")]
    pub offline: bool,

    /// How long to wait for the suggestion endpoint
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Let the suggestion endpoint pick the computer's moves too
    #[arg(long)]
    pub remote_ai: bool,

    /// Directory finished games are saved to
    #[arg(long)]
    pub store_dir: Option<PathBuf>,

    /// Don't save finished games
    #[arg(long)]
    pub no_save: bool,

    /// Log filter, e.g. `debug` or `checkers_session=trace` (defaults to RUST_LOG, then `info`)
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Action>,
}

#[derive(clap::Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Play a game (the default)
    Play,
    /// List saved games
    List,
    /// Step through a saved game
    Replay { id: Uuid },
}

impl Args {
    pub fn apply(&self, config: &mut SessionConfig) {
        if let Some(seed) = self.seed {
            config.ai.seed = Some(seed);
        }
        if self.coach {
            config.coach.enabled = true;
        }
        if let Some(endpoint) = &self.endpoint {
            config.coach.endpoint = Some(endpoint.clone());
        }
        if self.offline {
            config.coach.endpoint = None;
        }
        if let Some(ms) = self.timeout_ms {
            config.coach.timeout_ms = ms;
        }
        if self.remote_ai {
            config.ai.use_remote = true;
        }
        if let Some(dir) = &self.store_dir {
            config.store.dir = dir.clone();
        }
        if self.no_save {
            config.store.save_games = false;
        }
    }

    pub fn subcommand(&self) -> Action {
        self.command.clone().unwrap_or(Action::Play)
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod args_tests;
