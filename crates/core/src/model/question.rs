use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Labels expected in front of each option, in display order.
pub const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// One multiple-choice quiz item as authored by the generator.
///
/// `options` keep their generated order ("A. ...", "B. ...", ...) because they are
/// displayed and indexed by position. `correct` holds the bare letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    pub correct: String,
    pub explanation: String,
}

impl QuestionRecord {
    /// The label the generator marked as correct, if it is a single character.
    #[must_use]
    pub fn correct_label(&self) -> Option<char> {
        single_label(&self.correct)
    }

    /// The option whose label matches `correct`.
    #[must_use]
    pub fn correct_option(&self) -> Option<&str> {
        let label = self.correct_label()?;
        self.options
            .iter()
            .map(String::as_str)
            .find(|option| option_label(option) == Some(label))
    }

    /// Whether the chosen option text carries the correct label.
    ///
    /// Only the first character of `chosen` is compared, so "A. Firewall" and "A"
    /// both count as choosing A.
    #[must_use]
    pub fn is_correct(&self, chosen: &str) -> bool {
        label_matches(chosen, &self.correct)
    }

    /// Check the shape requested from the generator: four labeled options and a
    /// `correct` letter that names one of them.
    ///
    /// # Errors
    ///
    /// Returns the first `QuestionError` found.
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.options.len() != OPTION_LABELS.len() {
            return Err(QuestionError::WrongOptionCount {
                found: self.options.len(),
            });
        }

        for (index, (option, expected)) in self.options.iter().zip(OPTION_LABELS).enumerate() {
            let prefix = format!("{expected}.");
            if !option.trim_start().starts_with(&prefix) {
                return Err(QuestionError::UnlabeledOption { index, expected });
            }
        }

        if self.correct_option().is_none() {
            return Err(QuestionError::UnknownCorrectLabel {
                correct: self.correct.clone(),
            });
        }

        Ok(())
    }
}

/// Whether `chosen` carries the label named by `correct`.
///
/// `correct` must be a single letter; anything longer never matches.
#[must_use]
pub fn label_matches(chosen: &str, correct: &str) -> bool {
    match (option_label(chosen), single_label(correct)) {
        (Some(chosen), Some(correct)) => chosen == correct,
        _ => false,
    }
}

fn single_label(correct: &str) -> Option<char> {
    let mut chars = correct.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(label), None) => Some(label),
        _ => None,
    }
}

/// Label of an option text: its first non-space character.
#[must_use]
pub fn option_label(option: &str) -> Option<char> {
    option.trim_start().chars().next()
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("expected 4 options, found {found}")]
    WrongOptionCount { found: usize },

    #[error("option {index} is not labeled \"{expected}.\"")]
    UnlabeledOption { index: usize, expected: char },

    #[error("correct label {correct:?} does not match any option")]
    UnknownCorrectLabel { correct: String },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
