//! Finished-game records and their storage

use chrono::{DateTime, Utc};
use checkers_core::{replay, Board, GameStatus, Move, Side};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::controller::{EndReason, Session, HUMAN_SIDE};
use crate::error::StoreError;

/// How a stored game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// `red-wins` or `black-wins`
    pub status: GameStatus,
    pub reason: EndReason,
}

impl GameResult {
    pub fn winner(&self) -> Option<Side> {
        self.status.winner()
    }
}

/// A completed game as written to the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: Uuid,
    /// Final position in the `e/r/R/b/B` row encoding
    pub final_board: String,
    pub moves: Vec<Move>,
    pub result: GameResult,
    pub human_side: Side,
    pub timestamp: DateTime<Utc>,
}

impl GameRecord {
    /// Captures a finished session. Games still in progress are refused.
    pub fn from_session(session: &Session) -> Result<Self, StoreError> {
        let outcome = session.outcome().ok_or(StoreError::Unfinished)?;
        Ok(Self {
            id: Uuid::new_v4(),
            final_board: session.board().encode(),
            moves: session.history().to_vec(),
            result: GameResult {
                status: outcome.status(),
                reason: outcome.reason,
            },
            human_side: HUMAN_SIDE,
            timestamp: Utc::now(),
        })
    }

    /// Every position of the game, starting from the initial board. The
    /// last frame must match `final_board`.
    pub fn replay(&self) -> Result<Vec<Board>, StoreError> {
        let frames = replay(&self.moves).map_err(|source| StoreError::BadHistory {
            id: self.id,
            source,
        })?;
        match frames.last() {
            Some(last) if last.encode() == self.final_board => Ok(frames),
            _ => Err(StoreError::FinalBoardMismatch(self.id)),
        }
    }

    /// One-line description for listings
    pub fn summary(&self) -> String {
        format!(
            "{}  {}  {:<10} {:>3} moves",
            self.id,
            self.timestamp.format("%Y-%m-%d %H:%M"),
            self.result.status.to_string(),
            self.moves.len()
        )
    }
}

/// Somewhere finished games can be kept.
pub trait GameStore {
    fn save(&self, record: &GameRecord) -> Result<Uuid, StoreError>;
    fn load(&self, id: Uuid) -> Result<GameRecord, StoreError>;
    /// All stored games, oldest first.
    fn list(&self) -> Result<Vec<GameRecord>, StoreError>;
}

/// Stores each game as `<dir>/<id>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    fn read(path: &Path) -> Result<GameRecord, StoreError> {
        let contents = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl GameStore for JsonFileStore {
    fn save(&self, record: &GameRecord) -> Result<Uuid, StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path_for(record.id);
        let json = serde_json::to_string_pretty(record).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        std::fs::write(&path, json).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        debug!(id = %record.id, path = %path.display(), "game saved");
        Ok(record.id)
    }

    fn load(&self, id: Uuid) -> Result<GameRecord, StoreError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(StoreError::NotFound(id));
        }
        Self::read(&path)
    }

    fn list(&self) -> Result<Vec<GameRecord>, StoreError> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.dir.clone(),
                    source,
                })
            }
        };

        let mut records = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|source| StoreError::Io {
                    path: self.dir.clone(),
                    source,
                })?
                .path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            // One bad file should not hide the rest.
            match Self::read(&path) {
                Ok(record) => records.push(record),
                Err(err) => warn!(error = %err, "skipping unreadable game record"),
            }
        }
        records.sort_by_key(|r| r.timestamp);
        Ok(records)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
