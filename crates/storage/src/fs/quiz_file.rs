use async_trait::async_trait;
use quiz_core::model::StoredQuiz;

use super::FileRepository;
use crate::repository::{QuizRepository, StorageError};

#[async_trait]
impl QuizRepository for FileRepository {
    async fn save_latest(&self, quiz_text: &str) -> Result<(), StorageError> {
        let body = serde_json::to_string_pretty(&StoredQuiz::new(quiz_text))?;
        tokio::fs::write(self.latest_quiz_path(), body).await?;
        log::info!("saved latest quiz to {}", self.latest_quiz_path().display());
        Ok(())
    }

    async fn load_latest(&self) -> Result<Option<String>, StorageError> {
        let body = match tokio::fs::read_to_string(self.latest_quiz_path()).await {
            Ok(body) => body,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let stored: StoredQuiz = serde_json::from_str(&body)?;
        Ok(Some(stored.quiz_text))
    }
}
