use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::{QuestionRecord, QuizResult, QuizSession, StudentName};
use quiz_core::parse::parse_quiz;
use storage::{QuizRepository, ResultRepository};

use crate::error::QuizTakingError;

/// A scored submission and the name it was stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub result: QuizResult,
    pub saved_as: String,
}

/// Loads the latest quiz for students and records their results.
#[derive(Clone)]
pub struct QuizTakingService {
    clock: Clock,
    quizzes: Arc<dyn QuizRepository>,
    results: Arc<dyn ResultRepository>,
}

impl QuizTakingService {
    #[must_use]
    pub fn new(
        clock: Clock,
        quizzes: Arc<dyn QuizRepository>,
        results: Arc<dyn ResultRepository>,
    ) -> Self {
        Self {
            clock,
            quizzes,
            results,
        }
    }

    /// Re-parse the stored quiz text.
    ///
    /// # Errors
    ///
    /// Returns `QuizTakingError::NoQuiz` if nothing was generated yet and
    /// `QuizTakingError::Unreadable` if the stored text no longer parses.
    pub async fn load_questions(&self) -> Result<Vec<QuestionRecord>, QuizTakingError> {
        let raw_text = self
            .quizzes
            .load_latest()
            .await?
            .filter(|text| !text.is_empty())
            .ok_or(QuizTakingError::NoQuiz)?;
        Ok(parse_quiz(&raw_text)?.questions)
    }

    /// Start a fresh session on the latest quiz.
    ///
    /// # Errors
    ///
    /// See [`QuizTakingService::load_questions`].
    pub async fn start_session(&self) -> Result<QuizSession, QuizTakingError> {
        let questions = self.load_questions().await?;
        Ok(QuizSession::new(questions)?)
    }

    /// Score `session` for the student and append the result.
    ///
    /// # Errors
    ///
    /// Returns `QuizTakingError::Session` listing unanswered questions, or
    /// `QuizTakingError::Storage` if the result cannot be saved.
    pub async fn submit(
        &self,
        session: &QuizSession,
        raw_name: &str,
    ) -> Result<Submission, QuizTakingError> {
        let student = StudentName::normalize(raw_name);
        let result = session.submit(&student)?;
        let saved_as = self
            .results
            .append_result(&result, self.clock.now())
            .await?;
        log::info!(
            "{student} scored {} / {}",
            result.score,
            result.total()
        );
        Ok(Submission { result, saved_as })
    }
}
