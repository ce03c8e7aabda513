//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::SessionError;
use quiz_core::parse::QuizParseError;
use storage::StorageError;

/// Errors raised while reading generator configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
    #[error(transparent)]
    Client(#[from] reqwest::Error),
}

/// Errors from a single call to the generator endpoint.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("could not reach the quiz generator: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("quiz generator returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("quiz generator response is malformed: {0}")]
    MalformedResponse(String),
}

/// Why one generation attempt produced no quiz.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AttemptFailure {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] QuizParseError),
}

impl AttemptFailure {
    /// True when the generator answered but its text could not be understood.
    #[must_use]
    pub fn is_content(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

/// Errors emitted by `QuizGenerationService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("enter at least one topic")]
    EmptyTopics,
    #[error(
        "failed to generate a valid quiz after {} attempts ({} unreachable, {} unreadable)",
        .attempts.len(),
        count_unreachable(.attempts),
        count_unreadable(.attempts)
    )]
    RetryExhausted { attempts: Vec<AttemptFailure> },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl GenerationError {
    /// Attempts that failed before any text came back.
    #[must_use]
    pub fn transport_failures(&self) -> Vec<&FetchError> {
        match self {
            Self::RetryExhausted { attempts } => attempts
                .iter()
                .filter_map(|a| match a {
                    AttemptFailure::Fetch(err) => Some(err),
                    AttemptFailure::Parse(_) => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Attempts whose generated text could not be parsed.
    #[must_use]
    pub fn content_failures(&self) -> Vec<&QuizParseError> {
        match self {
            Self::RetryExhausted { attempts } => attempts
                .iter()
                .filter_map(|a| match a {
                    AttemptFailure::Parse(err) => Some(err),
                    AttemptFailure::Fetch(_) => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn count_unreachable(attempts: &[AttemptFailure]) -> usize {
    attempts.iter().filter(|a| !a.is_content()).count()
}

fn count_unreadable(attempts: &[AttemptFailure]) -> usize {
    attempts.iter().filter(|a| a.is_content()).count()
}

/// Errors emitted by `QuizTakingService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizTakingError {
    #[error("quiz not generated yet")]
    NoQuiz,
    #[error("stored quiz cannot be read: {0}")]
    Unreadable(#[from] QuizParseError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ResultsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResultsError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
