//! Move suggestions from an external service, with a local fallback.
//!
//! The external call runs under a timeout. Any failure (timeout, transport,
//! HTTP status, a declined request, or a suggestion the local policy would
//! not consider) degrades to the capture-first random policy, so a caller
//! always gets a move when one exists. Dropping the future returned by
//! [`Coach::suggest`] abandons the request.

use async_trait::async_trait;
use checkers_core::{Board, Side, Step};
use rand::rngs::StdRng;
use rand::SeedableRng;
use random_engine::{candidate_moves, pick_move};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::CoachConfig;
use crate::error::CoachError;

/// Body returned by the suggestion endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Step>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Something that can propose a move for an encoded board.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn fetch(&self, board: &str, side: Side) -> Result<SuggestionResponse, CoachError>;
}

#[async_trait]
impl<T: SuggestionSource + ?Sized> SuggestionSource for Box<T> {
    async fn fetch(&self, board: &str, side: Side) -> Result<SuggestionResponse, CoachError> {
        (**self).fetch(board, side).await
    }
}

/// `GET {endpoint}?board=<encoding>&side=<red|black>`
#[derive(Debug, Clone)]
pub struct HttpSuggestionSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSuggestionSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SuggestionSource for HttpSuggestionSource {
    async fn fetch(&self, board: &str, side: Side) -> Result<SuggestionResponse, CoachError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("board", board), ("side", side.name())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoachError::Status(status.as_u16()));
        }
        Ok(response.json::<SuggestionResponse>().await?)
    }
}

/// Source used when no endpoint is configured; every request falls back.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalOnly;

#[async_trait]
impl SuggestionSource for LocalOnly {
    async fn fetch(&self, _board: &str, _side: Side) -> Result<SuggestionResponse, CoachError> {
        Err(CoachError::NoEndpoint)
    }
}

/// Where a suggestion came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Remote,
    Fallback { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// `None` only when the side has no legal move at all
    pub step: Option<Step>,
    pub origin: Origin,
}

impl Suggestion {
    pub fn is_remote(&self) -> bool {
        self.origin == Origin::Remote
    }
}

pub struct Coach<S> {
    source: S,
    timeout: Duration,
    rng: StdRng,
}

impl Coach<LocalOnly> {
    pub fn without_remote() -> Self {
        Coach::new(LocalOnly, Duration::ZERO)
    }
}

impl Coach<Box<dyn SuggestionSource>> {
    /// Builds a coach from config: HTTP when an endpoint is set, local otherwise.
    pub fn from_config(config: &CoachConfig, seed: Option<u64>) -> Self {
        let source: Box<dyn SuggestionSource> = match &config.endpoint {
            Some(endpoint) => Box::new(HttpSuggestionSource::new(endpoint.clone())),
            None => Box::new(LocalOnly),
        };
        let coach = Coach::new(source, config.timeout());
        match seed {
            Some(seed) => coach.with_seed(seed),
            None => coach,
        }
    }
}

impl<S: SuggestionSource> Coach<S> {
    pub fn new(source: S, timeout: Duration) -> Self {
        Self {
            source,
            timeout,
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixes the fallback policy's randomness.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Suggests a move for `side`, preferring the external source.
    pub async fn suggest(&mut self, board: &Board, side: Side) -> Suggestion {
        match self.fetch_remote(board, side).await {
            Ok(step) => {
                debug!(?step, "remote suggestion accepted");
                Suggestion {
                    step: Some(step),
                    origin: Origin::Remote,
                }
            }
            Err(err) => {
                if !matches!(err, CoachError::NoEndpoint) {
                    warn!(error = %err, "suggestion endpoint failed, using local policy");
                }
                Suggestion {
                    step: pick_move(board, side, &mut self.rng),
                    origin: Origin::Fallback {
                        reason: err.to_string(),
                    },
                }
            }
        }
    }

    async fn fetch_remote(&self, board: &Board, side: Side) -> Result<Step, CoachError> {
        let encoded = board.encode();
        let response = tokio::time::timeout(self.timeout, self.source.fetch(&encoded, side))
            .await
            .map_err(|_| CoachError::Timeout(self.timeout.as_millis()))??;

        if !response.success {
            let message = response
                .message
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(CoachError::Declined(message));
        }
        let step = response
            .suggestion
            .ok_or_else(|| CoachError::Declined("response carried no suggestion".to_string()))?;

        // Held to the same rule as the local policy: jump if any piece can.
        if !candidate_moves(board, side).contains(&step) {
            return Err(CoachError::IllegalSuggestion {
                from: step.from,
                to: step.to,
            });
        }
        Ok(step)
    }
}

#[cfg(test)]
#[path = "coach_tests.rs"]
mod coach_tests;
