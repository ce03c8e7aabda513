use std::sync::Arc;

use storage::Storage;

use crate::Clock;
use crate::generation_service::QuizGenerationService;
use crate::generator::QuizSource;
use crate::quiz_taking_service::QuizTakingService;
use crate::results_service::ResultsService;

/// Assembles app-facing services over one storage backend and quiz source.
#[derive(Clone)]
pub struct AppServices {
    quiz_generation: Arc<QuizGenerationService>,
    quiz_taking: Arc<QuizTakingService>,
    results: Arc<ResultsService>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, source: Arc<dyn QuizSource>, clock: Clock) -> Self {
        let quiz_generation = Arc::new(QuizGenerationService::new(
            source,
            Arc::clone(&storage.quizzes),
        ));
        let quiz_taking = Arc::new(QuizTakingService::new(
            clock,
            Arc::clone(&storage.quizzes),
            Arc::clone(&storage.results),
        ));
        let results = Arc::new(ResultsService::new(Arc::clone(&storage.results)));

        Self {
            quiz_generation,
            quiz_taking,
            results,
        }
    }

    #[must_use]
    pub fn quiz_generation(&self) -> Arc<QuizGenerationService> {
        Arc::clone(&self.quiz_generation)
    }

    #[must_use]
    pub fn quiz_taking(&self) -> Arc<QuizTakingService> {
        Arc::clone(&self.quiz_taking)
    }

    #[must_use]
    pub fn results(&self) -> Arc<ResultsService> {
        Arc::clone(&self.results)
    }
}
