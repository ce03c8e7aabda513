use quiz_core::model::{QuestionRecord, QuizResult, StoredQuiz, StudentName};
use quiz_core::time::fixed_now;
use storage::fs::LATEST_QUIZ_FILE;
use storage::{FileRepository, QuizRepository, ResultRepository, Storage};

fn build_result(name: &str, answer: &str) -> QuizResult {
    let question = QuestionRecord {
        question: "Which protocol encrypts web traffic?".into(),
        options: vec![
            "A. HTTP".into(),
            "B. HTTPS".into(),
            "C. FTP".into(),
            "D. Telnet".into(),
        ],
        correct: "B".into(),
        explanation: "HTTPS wraps HTTP in TLS.".into(),
    };
    QuizResult::grade(&StudentName::normalize(name), &[question], &[answer.to_string()])
}

#[tokio::test]
async fn latest_quiz_round_trips_as_raw_text() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = FileRepository::open(dir.path()).await.expect("open");

    assert_eq!(repo.load_latest().await.unwrap(), None);

    let raw = "Here you go: {\"quiz\": []}\n";
    repo.save_latest(raw).await.unwrap();
    assert_eq!(repo.load_latest().await.unwrap().as_deref(), Some(raw));

    let on_disk = std::fs::read_to_string(dir.path().join(LATEST_QUIZ_FILE)).unwrap();
    let stored: StoredQuiz = serde_json::from_str(&on_disk).unwrap();
    assert_eq!(stored.quiz_text, raw);
}

#[tokio::test]
async fn open_creates_missing_data_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("quiz-data").join("nested");
    let storage = Storage::files(&nested).await.expect("files");

    storage.quizzes.save_latest("{}").await.unwrap();
    assert!(nested.join(LATEST_QUIZ_FILE).exists());
}

#[tokio::test]
async fn results_are_written_one_file_each() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = FileRepository::open(dir.path()).await.expect("open");
    let now = fixed_now();

    let name = repo
        .append_result(&build_result("Ada Lovelace", "B. HTTPS"), now)
        .await
        .unwrap();
    repo.append_result(&build_result("Bob", "A. HTTP"), now)
        .await
        .unwrap();

    assert_eq!(name, "results_Ada_Lovelace_2023-11-14_22-13-20.json");
    assert!(dir.path().join(&name).exists());

    let results = repo.list_results().await.unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].student_name, "Ada_Lovelace");
    assert_eq!(results[0].score, 1);
    assert_eq!(results[1].student_name, "Bob");
    assert_eq!(results[1].score, 0);
}

#[tokio::test]
async fn malformed_and_unrelated_files_are_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = FileRepository::open(dir.path()).await.expect("open");

    std::fs::write(dir.path().join("results_broken_x.json"), "not json").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();
    repo.save_latest("{}").await.unwrap();
    repo.append_result(&build_result("Eve", "B. HTTPS"), fixed_now())
        .await
        .unwrap();

    let results = repo.list_results().await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].student_name, "Eve");
}
