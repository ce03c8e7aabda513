use services::{GeneratedQuiz, GenerationError};

use crate::vm::quiz_vm::{QuestionPreviewVm, map_question_previews};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    MissingTopics,
    /// Every attempt failed before any text came back.
    Unreachable,
    /// The generator answered each time but nothing parsed.
    Unreadable,
    Mixed,
    Storage,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationSummaryVm {
    pub question_count: usize,
    pub attempt: u32,
    pub previews: Vec<QuestionPreviewVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationStatus {
    Idle,
    Generating,
    Generated(GenerationSummaryVm),
    Failed { kind: FailureKind, message: String },
}

impl GenerationStatus {
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Generating)
    }
}

#[must_use]
pub fn map_generation(outcome: &Result<GeneratedQuiz, GenerationError>) -> GenerationStatus {
    match outcome {
        Ok(quiz) => GenerationStatus::Generated(GenerationSummaryVm {
            question_count: quiz.questions.len(),
            attempt: quiz.attempt,
            previews: map_question_previews(&quiz.questions),
        }),
        Err(err) => {
            let (kind, message) = describe_failure(err);
            GenerationStatus::Failed { kind, message }
        }
    }
}

fn describe_failure(err: &GenerationError) -> (FailureKind, String) {
    match err {
        GenerationError::EmptyTopics => (
            FailureKind::MissingTopics,
            "Please enter at least one topic.".to_string(),
        ),
        GenerationError::RetryExhausted { attempts } => {
            let unreachable = err.transport_failures().len();
            let unreadable = err.content_failures().len();
            let total = attempts.len();
            if unreadable == 0 {
                (
                    FailureKind::Unreachable,
                    format!(
                        "Could not reach the quiz generator after {total} attempts. \
                         Check the network connection and API key."
                    ),
                )
            } else if unreachable == 0 {
                (
                    FailureKind::Unreadable,
                    format!(
                        "The generator answered, but its content could not be understood \
                         after {total} attempts. Try again or adjust the topics."
                    ),
                )
            } else {
                (
                    FailureKind::Mixed,
                    format!(
                        "Failed to generate a valid quiz after {total} attempts: \
                         {unreachable} could not reach the generator, \
                         {unreadable} returned content that could not be understood."
                    ),
                )
            }
        }
        GenerationError::Storage(_) => (
            FailureKind::Storage,
            "The quiz was generated but could not be saved.".to_string(),
        ),
        other => (FailureKind::Mixed, other.to_string()),
    }
}
