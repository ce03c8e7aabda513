use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quiz_core::model::QuizResult;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("io error: {0}")]
    Io(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound
        } else {
            Self::Io(err.to_string())
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Holds the most recently generated quiz as raw generator text.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Replace the stored quiz. Last writer wins.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the quiz cannot be written.
    async fn save_latest(&self, quiz_text: &str) -> Result<(), StorageError>;

    /// Raw text of the stored quiz, or `None` if no quiz was generated yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the stored quiz cannot be read.
    async fn load_latest(&self) -> Result<Option<String>, StorageError>;
}

/// Append-only collection of scored attempts.
#[async_trait]
pub trait ResultRepository: Send + Sync {
    /// Store a result and return the name it was stored under.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the result cannot be written.
    async fn append_result(
        &self,
        result: &QuizResult,
        submitted_at: DateTime<Utc>,
    ) -> Result<String, StorageError>;

    /// Every stored result, ordered by stored name.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the collection cannot be listed.
    async fn list_results(&self) -> Result<Vec<QuizResult>, StorageError>;
}

/// Name a result is stored under: `results_<student>_<YYYY-MM-DD_HH-MM-SS>.json`.
///
/// Characters outside `[A-Za-z0-9_-]` in the student name become `_` so the name
/// is always a plain file name.
#[must_use]
pub fn result_file_name(student_name: &str, submitted_at: DateTime<Utc>) -> String {
    let student: String = student_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!(
        "results_{student}_{}.json",
        submitted_at.format("%Y-%m-%d_%H-%M-%S")
    )
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    latest_quiz: Arc<Mutex<Option<String>>>,
    results: Arc<Mutex<Vec<(String, QuizResult)>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizRepository for InMemoryRepository {
    async fn save_latest(&self, quiz_text: &str) -> Result<(), StorageError> {
        let mut guard = self
            .latest_quiz
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(quiz_text.to_owned());
        Ok(())
    }

    async fn load_latest(&self) -> Result<Option<String>, StorageError> {
        let guard = self
            .latest_quiz
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }
}

#[async_trait]
impl ResultRepository for InMemoryRepository {
    async fn append_result(
        &self,
        result: &QuizResult,
        submitted_at: DateTime<Utc>,
    ) -> Result<String, StorageError> {
        let name = result_file_name(&result.student_name, submitted_at);
        let mut guard = self
            .results
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        // Same student in the same second overwrites, like the file store.
        guard.retain(|(existing, _)| existing != &name);
        guard.push((name.clone(), result.clone()));
        guard.sort_by(|(left, _), (right, _)| left.cmp(right));
        Ok(name)
    }

    async fn list_results(&self) -> Result<Vec<QuizResult>, StorageError> {
        let guard = self
            .results
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.iter().map(|(_, result)| result.clone()).collect())
    }
}

/// Aggregates the quiz and result repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub quizzes: Arc<dyn QuizRepository>,
    pub results: Arc<dyn ResultRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let quizzes: Arc<dyn QuizRepository> = Arc::new(repo.clone());
        let results: Arc<dyn ResultRepository> = Arc::new(repo);
        Self { quizzes, results }
    }
}
