//! Flat-file storage in a single data directory.
//!
//! Layout:
//! - `latest_quiz.json` holds `{"quiz_text": "<raw generator text>"}`;
//! - `results_<student>_<timestamp>.json` holds one scored attempt each.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::repository::{QuizRepository, ResultRepository, Storage, StorageError};

mod quiz_file;
mod result_file;

pub const LATEST_QUIZ_FILE: &str = "latest_quiz.json";
pub const RESULT_FILE_PREFIX: &str = "results_";
pub const RESULT_FILE_SUFFIX: &str = ".json";

/// Repository backed by JSON files under one directory.
///
/// Writes are plain overwrites with no locking; concurrent writers of the latest
/// quiz race and the last one wins.
#[derive(Clone, Debug)]
pub struct FileRepository {
    root: PathBuf,
}

impl FileRepository {
    /// Open (and create if needed) the data directory.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn latest_quiz_path(&self) -> PathBuf {
        self.root.join(LATEST_QUIZ_FILE)
    }

    fn result_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

fn is_result_file(name: &str) -> bool {
    name.starts_with(RESULT_FILE_PREFIX) && name.ends_with(RESULT_FILE_SUFFIX)
}

impl Storage {
    /// Build storage backed by files under `root`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the data directory cannot be prepared.
    pub async fn files(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let repo = FileRepository::open(root).await?;
        let quizzes: Arc<dyn QuizRepository> = Arc::new(repo.clone());
        let results: Arc<dyn ResultRepository> = Arc::new(repo);
        Ok(Self { quizzes, results })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_prefixed_json_files_are_results() {
        assert!(is_result_file("results_Ada_2023-11-14_22-13-20.json"));
        assert!(!is_result_file(LATEST_QUIZ_FILE));
        assert!(!is_result_file("results_Ada.json.bak"));
    }
}
