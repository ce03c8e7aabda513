use std::sync::Arc;

use async_trait::async_trait;
use quiz_core::model::{QuestionRecord, QuizDocument, SessionError};
use quiz_core::time::fixed_clock;
use services::{AppServices, FetchError, QuizSource, QuizTakingError};
use storage::Storage;

struct FixedSource(String);

#[async_trait]
impl QuizSource for FixedSource {
    async fn fetch_quiz_text(&self, _topics: &str) -> Result<String, FetchError> {
        Ok(self.0.clone())
    }
}

fn question(n: usize, correct: &str) -> QuestionRecord {
    QuestionRecord {
        question: format!("Question {n}"),
        options: vec![
            "A. Encryption".into(),
            "B. Hashing".into(),
            "C. Encoding".into(),
            "D. Obfuscation".into(),
        ],
        correct: correct.into(),
        explanation: format!("Explanation {n}"),
    }
}

fn quiz_text() -> String {
    let doc = QuizDocument::new(vec![question(1, "A"), question(2, "B"), question(3, "C")]);
    format!("```json\n{}\n```", doc.to_json().unwrap())
}

fn build_services(storage: &Storage) -> AppServices {
    AppServices::new(storage, Arc::new(FixedSource(quiz_text())), fixed_clock())
}

#[tokio::test]
async fn no_quiz_until_one_is_generated() {
    let storage = Storage::in_memory();
    let services = build_services(&storage);

    let err = services.quiz_taking().start_session().await.unwrap_err();
    assert!(matches!(err, QuizTakingError::NoQuiz));

    services
        .quiz_generation()
        .generate_and_save("Cryptography basics")
        .await
        .unwrap();
    let session = services.quiz_taking().start_session().await.unwrap();
    assert_eq!(session.total(), 3);
}

#[tokio::test]
async fn unreadable_stored_quiz_is_reported() {
    let storage = Storage::in_memory();
    storage.quizzes.save_latest("not a quiz").await.unwrap();
    let services = build_services(&storage);

    let err = services.quiz_taking().start_session().await.unwrap_err();
    assert!(matches!(err, QuizTakingError::Unreadable(_)));
}

#[tokio::test]
async fn submission_is_scored_saved_and_ranked() {
    let storage = Storage::in_memory();
    let services = build_services(&storage);
    services
        .quiz_generation()
        .generate_and_save("Cryptography basics")
        .await
        .unwrap();
    let taking = services.quiz_taking();

    let mut first = taking.start_session().await.unwrap();
    first.select_answer(0, "A. Encryption").unwrap();
    first.select_answer(1, "A. Encryption").unwrap();
    first.select_answer(2, "C. Encoding").unwrap();
    let submission = taking.submit(&first, " Bob Smith ").await.unwrap();
    assert_eq!(submission.result.score, 2);
    assert_eq!(submission.result.student_name, "Bob_Smith");
    assert_eq!(
        submission.saved_as,
        "results_Bob_Smith_2023-11-14_22-13-20.json"
    );
    assert_eq!(submission.result.answers[1].correct_answer, "B");
    assert_eq!(submission.result.answers[1].explanation, "Explanation 2");

    let mut second = taking.start_session().await.unwrap();
    second.select_answer(0, "A. Encryption").unwrap();
    second.select_answer(1, "B. Hashing").unwrap();
    second.select_answer(2, "C. Encoding").unwrap();
    taking.submit(&second, "Ada").await.unwrap();

    let board = services.results().leaderboard().await.unwrap();
    let ranked: Vec<(&str, u32)> = board.iter().map(|r| (r.student.as_str(), r.score)).collect();
    assert_eq!(ranked, vec![("Ada", 3), ("Bob_Smith", 2)]);
}

#[tokio::test]
async fn incomplete_submission_is_refused() {
    let storage = Storage::in_memory();
    let services = build_services(&storage);
    services
        .quiz_generation()
        .generate_and_save("Cryptography basics")
        .await
        .unwrap();

    let mut session = services.quiz_taking().start_session().await.unwrap();
    session.select_answer(1, "B. Hashing").unwrap();
    let err = services
        .quiz_taking()
        .submit(&session, "Eve")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        QuizTakingError::Session(SessionError::Unanswered(ref missing)) if missing == &vec![1, 3]
    ));
    assert!(services.results().list_results().await.unwrap().is_empty());
}

#[tokio::test]
async fn file_storage_survives_a_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let storage = Storage::files(dir.path()).await.unwrap();
        build_services(&storage)
            .quiz_generation()
            .generate_and_save("Cryptography basics")
            .await
            .unwrap();
    }

    let storage = Storage::files(dir.path()).await.unwrap();
    let session = build_services(&storage)
        .quiz_taking()
        .start_session()
        .await
        .unwrap();
    assert_eq!(session.question(2).unwrap().question, "Question 3");
}
