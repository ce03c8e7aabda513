#![forbid(unsafe_code)]

pub mod fs;
pub mod repository;

pub use fs::FileRepository;
pub use repository::{
    InMemoryRepository, QuizRepository, ResultRepository, Storage, StorageError,
    result_file_name,
};
