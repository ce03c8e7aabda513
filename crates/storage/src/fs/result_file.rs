use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quiz_core::model::QuizResult;

use super::{FileRepository, is_result_file};
use crate::repository::{ResultRepository, StorageError, result_file_name};

#[async_trait]
impl ResultRepository for FileRepository {
    async fn append_result(
        &self,
        result: &QuizResult,
        submitted_at: DateTime<Utc>,
    ) -> Result<String, StorageError> {
        let name = result_file_name(&result.student_name, submitted_at);
        let body = serde_json::to_string_pretty(result)?;
        tokio::fs::write(self.result_path(&name), body).await?;
        log::info!("saved result for {} as {name}", result.student_name);
        Ok(name)
    }

    async fn list_results(&self) -> Result<Vec<QuizResult>, StorageError> {
        let mut names = Vec::new();
        let mut entries = tokio::fs::read_dir(self.root()).await?;
        while let Some(entry) = entries.next_entry().await? {
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if is_result_file(&name) {
                names.push(name);
            }
        }
        names.sort();

        let mut results = Vec::with_capacity(names.len());
        for name in names {
            let body = match tokio::fs::read_to_string(self.result_path(&name)).await {
                Ok(body) => body,
                Err(err) => {
                    log::warn!("skipping unreadable result file {name}: {err}");
                    continue;
                }
            };
            match serde_json::from_str::<QuizResult>(&body) {
                Ok(result) => results.push(result),
                Err(err) => log::warn!("skipping malformed result file {name}: {err}"),
            }
        }
        Ok(results)
    }
}
