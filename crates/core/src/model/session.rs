use thiserror::Error;

use super::{QuestionRecord, QuizResult, StudentName};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("quiz has no questions")]
    Empty,

    #[error("question {index} is out of range (quiz has {total})")]
    OutOfRange { index: usize, total: usize },

    #[error("{option:?} is not an option of question {index}")]
    UnknownOption { index: usize, option: String },

    /// 1-based question numbers still waiting for an answer.
    #[error("unanswered questions: {0:?}")]
    Unanswered(Vec<usize>),
}

/// Per-student state while taking a quiz.
///
/// Created when a student opens the quiz and dropped when they leave; nothing
/// here is shared between students.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<QuestionRecord>,
    answers: Vec<Option<String>>,
    current: usize,
}

impl QuizSession {
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if `questions` is empty.
    pub fn new(questions: Vec<QuestionRecord>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }
        let answers = vec![None; questions.len()];
        Ok(Self {
            questions,
            answers,
            current: 0,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&QuestionRecord> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &QuestionRecord {
        &self.questions[self.current]
    }

    /// Move to question `index` (0-based).
    ///
    /// # Errors
    ///
    /// Returns `SessionError::OutOfRange` if there is no such question.
    pub fn go_to(&mut self, index: usize) -> Result<(), SessionError> {
        self.check_index(index)?;
        self.current = index;
        Ok(())
    }

    pub fn next(&mut self) {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        }
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Record the chosen option for question `index`, replacing any earlier choice.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::OutOfRange` for a bad index and
    /// `SessionError::UnknownOption` if `option` is not one of the question's options.
    pub fn select_answer(&mut self, index: usize, option: &str) -> Result<(), SessionError> {
        self.check_index(index)?;
        if !self.questions[index].options.iter().any(|o| o == option) {
            return Err(SessionError::UnknownOption {
                index,
                option: option.to_owned(),
            });
        }
        self.answers[index] = Some(option.to_owned());
        Ok(())
    }

    #[must_use]
    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(index).and_then(|a| a.as_deref())
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// Fraction of questions answered, in `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f32 {
        self.answered_count() as f32 / self.total() as f32
    }

    /// 1-based numbers of the questions without an answer.
    #[must_use]
    pub fn unanswered(&self) -> Vec<usize> {
        self.answers
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_none())
            .map(|(index, _)| index + 1)
            .collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    /// Score the session for `student`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Unanswered` listing every question still open.
    pub fn submit(&self, student: &StudentName) -> Result<QuizResult, SessionError> {
        let unanswered = self.unanswered();
        if !unanswered.is_empty() {
            return Err(SessionError::Unanswered(unanswered));
        }
        let answers: Vec<String> = self.answers.iter().flatten().cloned().collect();
        Ok(QuizResult::grade(student, &self.questions, &answers))
    }

    fn check_index(&self, index: usize) -> Result<(), SessionError> {
        if index < self.questions.len() {
            Ok(())
        } else {
            Err(SessionError::OutOfRange {
                index,
                total: self.questions.len(),
            })
        }
    }
}
