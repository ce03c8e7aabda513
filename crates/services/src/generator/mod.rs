//! Prompt-and-fetch: one request to the text generator per call.

use async_trait::async_trait;

use crate::error::FetchError;

mod config;
mod gemini;

pub use config::GeminiConfig;
pub use gemini::GeminiClient;

/// A source of raw quiz text.
///
/// Implementations make exactly one attempt per call; retrying is the caller's
/// job.
#[async_trait]
pub trait QuizSource: Send + Sync {
    /// Ask for a quiz on `topics` and return the generated text, trimmed.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the endpoint is unreachable, answers with a
    /// non-success status, or sends a body without generated text.
    async fn fetch_quiz_text(&self, topics: &str) -> Result<String, FetchError>;
}
