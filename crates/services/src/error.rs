//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{ConfigError, QuizResultError, SessionId};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

use crate::sessions::SessionPhase;

/// Errors emitted by a `QuizBackend`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BackendError {
    #[error("quiz backend is not configured: {0}")]
    NotConfigured(#[from] ConfigError),
    #[error("quiz backend rejected the request with status {status}")]
    Rejected {
        status: reqwest::StatusCode,
        message: Option<String>,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl BackendError {
    /// Human readable reason, preferring the message sent by the backend.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            BackendError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            BackendError::Rejected {
                status,
                message: None,
            } => format!("HTTP error! Status: {}", status.as_u16()),
            other => other.to_string(),
        }
    }
}

/// Reasons a quiz could not be generated.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("the backend returned no questions")]
    Empty,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Invalid setup form input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SetupError {
    #[error("subject is required")]
    MissingSubject,
    #[error("chapter is required")]
    MissingChapter,
    #[error("question count must be between 1 and {max}, got {requested}")]
    InvalidLimit { requested: u32, max: u32 },
}

/// Errors emitted by the `QuizSession` state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no option selected for the current question")]
    NoSelection,
    #[error("option {index} does not exist (question has {len} options)")]
    OptionOutOfRange { index: usize, len: usize },
    #[error("question {requested} is not the current question ({current})")]
    NotCurrent { requested: usize, current: usize },
    #[error("operation not allowed while the session is {actual:?}")]
    InvalidPhase { actual: SessionPhase },
    #[error("completion belongs to an earlier session ({ticket:?})")]
    Stale { ticket: SessionId },
    #[error(transparent)]
    Result(#[from] QuizResultError),
}

/// Errors surfaced by `QuizFlowService` to the presentation layer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizFlowError {
    #[error("configuration error: {0}")]
    Configuration(ConfigError),
    #[error(transparent)]
    InvalidSetup(#[from] SetupError),
    #[error("failed to generate quiz: {0}")]
    Generation(#[from] GenerationError),
    #[error("no option selected for the current question")]
    NoSelection,
    #[error(transparent)]
    Session(SessionError),
}

impl From<SessionError> for QuizFlowError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NoSelection => QuizFlowError::NoSelection,
            other => QuizFlowError::Session(other),
        }
    }
}

/// Errors emitted by `LanguageService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LanguageServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
