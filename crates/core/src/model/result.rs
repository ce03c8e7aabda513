use std::fmt;

use serde::{Deserialize, Serialize};

use super::{QuestionRecord, label_matches};

/// Student-facing review line stored with a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question: String,
    pub student_answer: String,
    pub correct_answer: String,
    pub explanation: String,
}

impl AnswerRecord {
    /// Same rule the score is computed with.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        label_matches(&self.student_answer, &self.correct_answer)
    }
}

/// A completed, scored quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub student_name: String,
    pub score: u32,
    pub answers: Vec<AnswerRecord>,
}

impl QuizResult {
    /// Build a result from the questions and the chosen option texts.
    ///
    /// `answers` is matched to `questions` by position; missing answers are stored
    /// as empty strings and score nothing.
    #[must_use]
    pub fn grade(student: &StudentName, questions: &[QuestionRecord], answers: &[String]) -> Self {
        let answers_out = questions
            .iter()
            .enumerate()
            .map(|(index, q)| AnswerRecord {
                question: q.question.clone(),
                student_answer: answers.get(index).cloned().unwrap_or_default(),
                correct_answer: q.correct.clone(),
                explanation: q.explanation.clone(),
            })
            .collect();

        Self {
            student_name: student.as_str().to_owned(),
            score: score_answers(questions, answers),
            answers: answers_out,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.answers.len()
    }
}

/// Count answers whose leading letter matches the question's `correct` label.
#[must_use]
pub fn score_answers(questions: &[QuestionRecord], answers: &[String]) -> u32 {
    let hits = questions
        .iter()
        .zip(answers)
        .filter(|(q, answer)| q.is_correct(answer))
        .count();
    u32::try_from(hits).unwrap_or(u32::MAX)
}

//
// ─── STUDENT NAME ──────────────────────────────────────────────────────────────
//

/// Display name used to label a result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StudentName(String);

impl StudentName {
    pub const ANONYMOUS: &'static str = "Unknown";

    /// Trim, replace spaces with underscores, fall back to `Unknown`.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        let cleaned = raw.trim().replace(' ', "_");
        if cleaned.is_empty() {
            Self(Self::ANONYMOUS.to_owned())
        } else {
            Self(cleaned)
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
