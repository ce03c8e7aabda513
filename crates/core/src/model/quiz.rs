use serde::{Deserialize, Serialize};

use super::QuestionRecord;

/// Number of questions the generator is asked to author per quiz.
///
/// This is part of the prompt contract only; parsing accepts any non-empty list.
pub const QUESTIONS_PER_QUIZ: usize = 10;

/// The JSON document the generator is asked to return: `{"quiz": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDocument {
    pub quiz: Vec<QuestionRecord>,
}

impl QuizDocument {
    #[must_use]
    pub fn new(quiz: Vec<QuestionRecord>) -> Self {
        Self { quiz }
    }

    /// Serialize to the compact text form the generator would produce.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// On-disk shape of the latest quiz: the generator's raw text, kept unparsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredQuiz {
    pub quiz_text: String,
}

impl StoredQuiz {
    #[must_use]
    pub fn new(quiz_text: impl Into<String>) -> Self {
        Self {
            quiz_text: quiz_text.into(),
        }
    }
}
