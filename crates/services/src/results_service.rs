use std::sync::Arc;

use quiz_core::model::QuizResult;
use storage::ResultRepository;

use crate::error::ResultsError;

/// One leaderboard line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub student: String,
    pub score: u32,
}

#[derive(Clone)]
pub struct ResultsService {
    results: Arc<dyn ResultRepository>,
}

impl ResultsService {
    #[must_use]
    pub fn new(results: Arc<dyn ResultRepository>) -> Self {
        Self { results }
    }

    /// # Errors
    ///
    /// Returns `ResultsError::Storage` if results cannot be listed.
    pub async fn list_results(&self) -> Result<Vec<QuizResult>, ResultsError> {
        Ok(self.results.list_results().await?)
    }

    /// All results ranked by score, highest first. Ties keep storage order.
    ///
    /// # Errors
    ///
    /// Returns `ResultsError::Storage` if results cannot be listed.
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardRow>, ResultsError> {
        let mut rows: Vec<LeaderboardRow> = self
            .list_results()
            .await?
            .into_iter()
            .map(|result| LeaderboardRow {
                student: result.student_name,
                score: result.score,
            })
            .collect();
        rows.sort_by(|left, right| right.score.cmp(&left.score));
        Ok(rows)
    }
}
