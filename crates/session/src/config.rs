//! Session configuration, loaded from TOML

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Default suggestion endpoint, matching the web front end's API route.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/checkers/suggestion";

/// Default time allowed for an external suggestion before falling back.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub coach: CoachConfig,
    pub ai: AiConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachConfig {
    /// Show a suggested move before each human turn
    pub enabled: bool,
    /// Suggestion endpoint (None = local policy only)
    pub endpoint: Option<String>,
    pub timeout_ms: u64,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: Some(DEFAULT_ENDPOINT.to_string()),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl CoachConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Ask the suggestion endpoint for the automated side's moves as well
    pub use_remote: bool,
    /// Fixed seed for the random policy (None = fresh entropy each run)
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub dir: PathBuf,
    pub save_games: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("games"),
            save_games: true,
        }
    }
}

impl SessionConfig {
    pub fn from_toml_str(s: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
