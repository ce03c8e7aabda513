use std::sync::Arc;

use services::{QuizGenerationService, QuizTakingService, ResultsService};

/// Topics pre-filled in the teacher's text area.
pub const DEFAULT_TOPICS: &str = "Introduction to Cybersecurity";

pub trait UiApp: Send + Sync {
    fn quiz_generation(&self) -> Arc<QuizGenerationService>;
    fn quiz_taking(&self) -> Arc<QuizTakingService>;
    fn results(&self) -> Arc<ResultsService>;

    fn default_topics(&self) -> String {
        DEFAULT_TOPICS.to_string()
    }
}

#[derive(Clone)]
pub struct AppContext {
    default_topics: String,

    quiz_generation: Arc<QuizGenerationService>,
    quiz_taking: Arc<QuizTakingService>,
    results: Arc<ResultsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            default_topics: app.default_topics(),
            quiz_generation: app.quiz_generation(),
            quiz_taking: app.quiz_taking(),
            results: app.results(),
        }
    }

    #[must_use]
    pub fn default_topics(&self) -> &str {
        &self.default_topics
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

// Provided by the composition root in `crates/app`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
