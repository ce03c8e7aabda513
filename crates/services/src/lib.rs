#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod generation_service;
pub mod generator;
pub mod quiz_taking_service;
pub mod results_service;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use error::{
    AttemptFailure, ConfigError, FetchError, GenerationError, QuizTakingError, ResultsError,
};
pub use generation_service::{DEFAULT_MAX_ATTEMPTS, GeneratedQuiz, QuizGenerationService};
pub use generator::{GeminiClient, GeminiConfig, QuizSource};
pub use quiz_taking_service::{QuizTakingService, Submission};
pub use results_service::{LeaderboardRow, ResultsService};
