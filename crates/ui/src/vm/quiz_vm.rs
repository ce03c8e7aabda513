use quiz_core::model::{QuestionRecord, QuizSession};

/// Questions shown to the teacher after a successful generation.
pub const PREVIEW_QUESTIONS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionPreviewVm {
    pub number: usize,
    pub question: String,
    pub options: Vec<String>,
}

#[must_use]
pub fn map_question_previews(questions: &[QuestionRecord]) -> Vec<QuestionPreviewVm> {
    questions
        .iter()
        .take(PREVIEW_QUESTIONS)
        .enumerate()
        .map(|(index, q)| QuestionPreviewVm {
            number: index + 1,
            question: q.question.clone(),
            options: q.options.clone(),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub text: String,
    pub selected: bool,
}

/// The question a student is looking at, with their earlier choice marked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    pub number: usize,
    pub total: usize,
    pub question: String,
    pub options: Vec<OptionVm>,
    pub is_first: bool,
    pub is_last: bool,
}

#[must_use]
pub fn map_current_question(session: &QuizSession) -> QuestionVm {
    let index = session.current_index();
    let record = session.current_question();
    let chosen = session.answer(index);
    QuestionVm {
        index,
        number: index + 1,
        total: session.total(),
        question: record.question.clone(),
        options: record
            .options
            .iter()
            .map(|text| OptionVm {
                text: text.clone(),
                selected: chosen == Some(text.as_str()),
            })
            .collect(),
        is_first: index == 0,
        is_last: index + 1 == session.total(),
    }
}

#[must_use]
pub fn progress_label(session: &QuizSession) -> String {
    format!(
        "Question {} of {} ({} answered)",
        session.current_index() + 1,
        session.total(),
        session.answered_count()
    )
}

/// Answered share as a whole percentage for the progress bar.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn progress_percent(session: &QuizSession) -> u32 {
    (session.progress() * 100.0).round() as u32
}
