use quiz_core::model::SessionError;
use services::{LeaderboardRow, QuizTakingError, Submission};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRowVm {
    pub rank: usize,
    pub student: String,
    pub score: u32,
}

/// Rows arrive ranked; equal scores share a rank.
#[must_use]
pub fn map_leaderboard(rows: &[LeaderboardRow]) -> Vec<LeaderboardRowVm> {
    let mut out: Vec<LeaderboardRowVm> = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let rank = match out.last() {
            Some(prev) if prev.score == row.score => prev.rank,
            _ => index + 1,
        };
        out.push(LeaderboardRowVm {
            rank,
            student: row.student.clone(),
            score: row.score,
        });
    }
    out
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerReviewVm {
    pub number: usize,
    pub question: String,
    pub student_answer: String,
    pub correct_answer: String,
    pub explanation: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionVm {
    pub student: String,
    pub score: u32,
    pub total: usize,
    pub saved_as: String,
    pub review: Vec<AnswerReviewVm>,
}

impl SubmissionVm {
    #[must_use]
    pub fn score_line(&self) -> String {
        format!("Your score: {}/{}", self.score, self.total)
    }
}

#[must_use]
pub fn map_submission(submission: &Submission) -> SubmissionVm {
    let result = &submission.result;
    SubmissionVm {
        student: result.student_name.clone(),
        score: result.score,
        total: result.total(),
        saved_as: submission.saved_as.clone(),
        review: result
            .answers
            .iter()
            .enumerate()
            .map(|(index, answer)| AnswerReviewVm {
                number: index + 1,
                question: answer.question.clone(),
                student_answer: answer.student_answer.clone(),
                correct_answer: answer.correct_answer.clone(),
                explanation: answer.explanation.clone(),
                is_correct: answer.is_correct(),
            })
            .collect(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Editing,
    Submitting,
    Incomplete(Vec<usize>),
    Submitted(SubmissionVm),
    Failed(String),
}

#[must_use]
pub fn map_submit_error(err: &QuizTakingError) -> SubmitStatus {
    match err {
        QuizTakingError::Session(SessionError::Unanswered(missing)) => {
            SubmitStatus::Incomplete(missing.clone())
        }
        QuizTakingError::Storage(_) => {
            SubmitStatus::Failed("Your answers were scored but could not be saved.".to_string())
        }
        other => SubmitStatus::Failed(other.to_string()),
    }
}
