use std::sync::Arc;

use quiz_core::model::QuestionRecord;
use quiz_core::parse::{ParseStage, parse_quiz};
use storage::QuizRepository;

use crate::error::{AttemptFailure, GenerationError};
use crate::generator::QuizSource;

/// Attempts made before giving up on a quiz.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// A quiz that parsed successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQuiz {
    pub questions: Vec<QuestionRecord>,
    /// Generator output exactly as received; this is what gets persisted.
    pub raw_text: String,
    /// 1-based attempt that produced the quiz.
    pub attempt: u32,
    pub stage: ParseStage,
}

/// Fetches quizzes with a bounded retry budget and stores the winner.
///
/// Attempts run one after another with no delay. A transport failure and an
/// unparsable response both use up one attempt.
#[derive(Clone)]
pub struct QuizGenerationService {
    source: Arc<dyn QuizSource>,
    quizzes: Arc<dyn QuizRepository>,
    max_attempts: u32,
}

impl QuizGenerationService {
    #[must_use]
    pub fn new(source: Arc<dyn QuizSource>, quizzes: Arc<dyn QuizRepository>) -> Self {
        Self {
            source,
            quizzes,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Fetch until one response parses to a non-empty quiz.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::EmptyTopics` for blank input and
    /// `GenerationError::RetryExhausted` with every attempt's failure once the
    /// budget is spent.
    pub async fn generate_with_retry(&self, topics: &str) -> Result<GeneratedQuiz, GenerationError> {
        if topics.trim().is_empty() {
            return Err(GenerationError::EmptyTopics);
        }

        let mut failures = Vec::new();
        for attempt in 1..=self.max_attempts {
            log::debug!("quiz generation attempt {attempt}/{}", self.max_attempts);

            let raw_text = match self.source.fetch_quiz_text(topics).await {
                Ok(raw_text) => raw_text,
                Err(err) => {
                    log::warn!("attempt {attempt}: {err}");
                    failures.push(AttemptFailure::Fetch(err));
                    continue;
                }
            };

            match parse_quiz(&raw_text) {
                Ok(parsed) => {
                    for (index, question) in parsed.questions.iter().enumerate() {
                        if let Err(err) = question.validate() {
                            log::warn!("question {} does not follow the format: {err}", index + 1);
                        }
                    }
                    log::info!(
                        "generated {} questions on attempt {attempt} ({:?} parse)",
                        parsed.questions.len(),
                        parsed.stage
                    );
                    return Ok(GeneratedQuiz {
                        questions: parsed.questions,
                        raw_text,
                        attempt,
                        stage: parsed.stage,
                    });
                }
                Err(err) => {
                    log::warn!("attempt {attempt}: {err}");
                    failures.push(AttemptFailure::Parse(err));
                }
            }
        }

        log::error!(
            "failed to generate a valid quiz after {} attempts",
            failures.len()
        );
        Err(GenerationError::RetryExhausted { attempts: failures })
    }

    /// Generate a quiz and make it the latest stored quiz.
    ///
    /// Nothing is stored when generation fails.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` from generation, or `GenerationError::Storage`
    /// if the quiz cannot be saved.
    pub async fn generate_and_save(&self, topics: &str) -> Result<GeneratedQuiz, GenerationError> {
        let generated = self.generate_with_retry(topics).await?;
        self.quizzes.save_latest(&generated.raw_text).await?;
        Ok(generated)
    }
}
