//! Tolerant parsing of generated quiz text.
//!
//! Generators are asked for a bare `{"quiz": [...]}` document but sometimes wrap
//! it in prose. Parsing runs in two stages:
//!
//! 1. strict: the whole text must be JSON with a non-empty `"quiz"` array;
//! 2. salvage: only when stage 1 hit a JSON *syntax* error, the span from the
//!    first `{` to the last `}` is parsed strictly instead.
//!
//! A text that is valid JSON but has no `"quiz"` key is reported as
//! [`QuizParseError::MissingQuiz`] and is not salvaged.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::model::QuestionRecord;

/// Which stage produced the questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStage {
    Strict,
    Salvaged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuiz {
    pub questions: Vec<QuestionRecord>,
    pub stage: ParseStage,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizParseError {
    #[error("generated JSON has no \"quiz\" key")]
    MissingQuiz,

    #[error("\"quiz\" entries do not match the question shape: {0}")]
    InvalidShape(String),

    #[error("\"quiz\" array is empty")]
    EmptyQuiz,

    #[error("could not find JSON in generated text")]
    NoJsonFound,

    #[error("generated text contains invalid JSON: {reason}")]
    SalvageInvalid { reason: String },
}

impl QuizParseError {
    /// True for failures raised after the salvage stage ran.
    #[must_use]
    pub fn is_salvage_failure(&self) -> bool {
        matches!(self, Self::NoJsonFound | Self::SalvageInvalid { .. })
    }
}

enum StrictFailure {
    Syntax(serde_json::Error),
    Document(QuizParseError),
}

/// Parse generated text into questions, salvaging an embedded object if needed.
///
/// # Errors
///
/// Returns `QuizParseError` when neither stage yields a non-empty `"quiz"` array.
pub fn parse_quiz(raw_text: &str) -> Result<ParsedQuiz, QuizParseError> {
    match parse_strict(raw_text) {
        Ok(questions) => Ok(ParsedQuiz {
            questions,
            stage: ParseStage::Strict,
        }),
        Err(StrictFailure::Document(err)) => Err(err),
        Err(StrictFailure::Syntax(_)) => {
            let candidate = embedded_object(raw_text).ok_or(QuizParseError::NoJsonFound)?;
            match parse_strict(candidate) {
                Ok(questions) => Ok(ParsedQuiz {
                    questions,
                    stage: ParseStage::Salvaged,
                }),
                Err(StrictFailure::Syntax(err)) => Err(QuizParseError::SalvageInvalid {
                    reason: err.to_string(),
                }),
                Err(StrictFailure::Document(err)) => Err(QuizParseError::SalvageInvalid {
                    reason: err.to_string(),
                }),
            }
        }
    }
}

/// Like [`parse_quiz`] but collapses every failure to an empty list.
#[must_use]
pub fn parse_questions(raw_text: &str) -> Vec<QuestionRecord> {
    parse_quiz(raw_text)
        .map(|parsed| parsed.questions)
        .unwrap_or_default()
}

fn parse_strict(text: &str) -> Result<Vec<QuestionRecord>, StrictFailure> {
    let document: Value = serde_json::from_str(text).map_err(StrictFailure::Syntax)?;
    let quiz = document
        .get("quiz")
        .ok_or(StrictFailure::Document(QuizParseError::MissingQuiz))?;
    let questions = Vec::<QuestionRecord>::deserialize(quiz)
        .map_err(|e| StrictFailure::Document(QuizParseError::InvalidShape(e.to_string())))?;
    if questions.is_empty() {
        return Err(StrictFailure::Document(QuizParseError::EmptyQuiz));
    }
    Ok(questions)
}

/// Greedy span from the first `{` to the last `}`, newlines included.
fn embedded_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuizDocument;

    const ONE_QUESTION: &str = r#"{"quiz":[{"question":"Q1","options":["A. x","B. y","C. z","D. w"],"correct":"A","explanation":"e"}]}"#;

    fn sample_document() -> QuizDocument {
        QuizDocument::new(vec![
            QuestionRecord {
                question: "What does MFA stand for?".into(),
                options: vec![
                    "A. Multi-factor authentication".into(),
                    "B. Main firewall access".into(),
                    "C. Managed file archive".into(),
                    "D. Message forwarding agent".into(),
                ],
                correct: "A".into(),
                explanation: "MFA combines independent factors.".into(),
            },
            QuestionRecord {
                question: "Which attack floods a service?".into(),
                options: vec![
                    "A. XSS".into(),
                    "B. DDoS".into(),
                    "C. CSRF".into(),
                    "D. SQLi".into(),
                ],
                correct: "B".into(),
                explanation: "Distributed denial of service.".into(),
            },
        ])
    }

    #[test]
    fn strict_document_parses() {
        let parsed = parse_quiz(ONE_QUESTION).unwrap();
        assert_eq!(parsed.stage, ParseStage::Strict);
        assert_eq!(parsed.questions[0].question, "Q1");
    }

    #[test]
    fn prose_around_json_is_salvaged() {
        let raw = format!("Here is your quiz: {ONE_QUESTION} Thanks!");
        let parsed = parse_quiz(&raw).unwrap();
        assert_eq!(parsed.stage, ParseStage::Salvaged);
        assert_eq!(parsed.questions.len(), 1);
        assert_eq!(parsed.questions[0].question, "Q1");
    }

    #[test]
    fn fenced_multiline_output_is_salvaged() {
        let raw = format!("```json\n{}\n```", serde_json::to_string_pretty(&sample_document()).unwrap());
        let parsed = parse_quiz(&raw).unwrap();
        assert_eq!(parsed.stage, ParseStage::Salvaged);
        assert_eq!(parsed.questions, sample_document().quiz);
    }

    #[test]
    fn serialized_document_round_trips() {
        let doc = sample_document();
        let parsed = parse_quiz(&doc.to_json().unwrap()).unwrap();
        assert_eq!(parsed.questions, doc.quiz);
    }

    #[test]
    fn parsing_is_repeatable() {
        let raw = format!("Sure! {ONE_QUESTION}");
        assert_eq!(parse_quiz(&raw), parse_quiz(&raw));
        assert_eq!(parse_questions(&raw), parse_questions(&raw));
    }

    #[test]
    fn valid_json_without_quiz_key_is_not_salvaged() {
        assert_eq!(parse_quiz(r#"{"other":[]}"#), Err(QuizParseError::MissingQuiz));
        // The embedded object would parse, but salvage only runs on syntax errors.
        let nested = format!(r#"{{"data": {ONE_QUESTION}}}"#);
        assert_eq!(parse_quiz(&nested), Err(QuizParseError::MissingQuiz));
        assert!(parse_questions(r#"{"other":[]}"#).is_empty());
    }

    #[test]
    fn text_without_braces_reports_not_found() {
        let err = parse_quiz("I cannot help with that.").unwrap_err();
        assert_eq!(err, QuizParseError::NoJsonFound);
        assert!(err.is_salvage_failure());
        assert_eq!(parse_quiz(""), Err(QuizParseError::NoJsonFound));
        assert_eq!(parse_quiz("} backwards {"), Err(QuizParseError::NoJsonFound));
    }

    #[test]
    fn broken_embedded_json_reports_salvage_invalid() {
        let err = parse_quiz(r#"Quiz: {"quiz": [ {"question": } ] } done"#).unwrap_err();
        assert!(matches!(err, QuizParseError::SalvageInvalid { .. }));

        let err = parse_quiz(r#"Note: {"other": 1} ok"#).unwrap_err();
        assert!(matches!(err, QuizParseError::SalvageInvalid { .. }));
    }

    #[test]
    fn empty_or_misshapen_quiz_is_rejected() {
        assert_eq!(parse_quiz(r#"{"quiz": []}"#), Err(QuizParseError::EmptyQuiz));
        let err = parse_quiz(r#"{"quiz": [{"question": "Q"}]}"#).unwrap_err();
        assert!(matches!(err, QuizParseError::InvalidShape(_)));
    }
}
