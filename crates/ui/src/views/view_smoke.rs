use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quiz_core::model::QuizResult;
use std::sync::Arc;
use storage::{ResultRepository, Storage, StorageError};

use super::test_harness::{ViewKind, sample_quiz_text, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn teacher_view_smoke_renders_defaults() {
    let mut harness = setup_view_harness(ViewKind::Teacher, Storage::in_memory());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Introduction to Cybersecurity"), "missing topics in {html}");
    assert!(html.contains("Generate Quiz"), "missing button in {html}");
    assert!(html.contains("All Student Results"), "missing heading in {html}");
    assert!(html.contains("No student results yet."), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn teacher_view_smoke_ranks_results() {
    let mut harness = setup_view_harness(ViewKind::Teacher, Storage::in_memory());
    harness
        .storage
        .quizzes
        .save_latest(&sample_quiz_text())
        .await
        .expect("save quiz");
    let taking = harness.services.quiz_taking();
    let mut session = taking.start_session().await.expect("session");
    for (index, option) in ["A. Encryption", "B. Hashing", "D. Obfuscation"].iter().enumerate() {
        session.select_answer(index, option).expect("select");
    }
    taking.submit(&session, "Grace Hopper").await.expect("submit");

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Grace_Hopper"), "missing student in {html}");
    assert!(!html.contains("No student results yet."), "unexpected empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn student_view_smoke_warns_without_quiz() {
    let mut harness = setup_view_harness(ViewKind::Student, Storage::in_memory());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Quiz not generated yet"), "missing warning in {html}");
    assert!(!html.contains("Submit Quiz"), "unexpected submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn student_view_smoke_shows_first_question() {
    let storage = Storage::in_memory();
    storage
        .quizzes
        .save_latest(&sample_quiz_text())
        .await
        .expect("save quiz");
    let mut harness = setup_view_harness(ViewKind::Student, storage);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Question 1 of 3 (0 answered)"), "missing progress in {html}");
    assert!(html.contains("What does control 1 protect?"), "missing question in {html}");
    assert!(html.contains("A. Encryption"), "missing option in {html}");
    assert!(html.contains("Submit Quiz"), "missing submit in {html}");
}

struct FailingResults;

#[async_trait]
impl ResultRepository for FailingResults {
    async fn append_result(
        &self,
        _result: &QuizResult,
        _at: DateTime<Utc>,
    ) -> Result<String, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn list_results(&self) -> Result<Vec<QuizResult>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn teacher_view_smoke_renders_error_state() {
    let mut storage = Storage::in_memory();
    storage.results = Arc::new(FailingResults);
    let mut harness = setup_view_harness(ViewKind::Teacher, storage);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
}
