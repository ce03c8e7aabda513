use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{QuestionRecord, QuizDocument};
use quiz_core::time::fixed_clock;
use services::{
    AppServices, FetchError, QuizGenerationService, QuizSource, QuizTakingService, ResultsService,
};
use storage::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::{StudentView, TeacherView};

/// Answers every request with the same text.
pub struct CannedSource(pub String);

#[async_trait]
impl QuizSource for CannedSource {
    async fn fetch_quiz_text(&self, _topics: &str) -> Result<String, FetchError> {
        Ok(self.0.clone())
    }
}

pub fn sample_quiz_text() -> String {
    let questions = ["A", "B", "C"]
        .iter()
        .enumerate()
        .map(|(index, correct)| QuestionRecord {
            question: format!("What does control {} protect?", index + 1),
            options: vec![
                "A. Encryption".into(),
                "B. Hashing".into(),
                "C. Encoding".into(),
                "D. Obfuscation".into(),
            ],
            correct: (*correct).into(),
            explanation: format!("Control {} explained.", index + 1),
        })
        .collect();
    QuizDocument::new(questions).to_json().expect("serialize quiz")
}

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn quiz_generation(&self) -> Arc<QuizGenerationService> {
        self.services.quiz_generation()
    }

    fn quiz_taking(&self) -> Arc<QuizTakingService> {
        self.services.quiz_taking()
    }

    fn results(&self) -> Arc<ResultsService> {
        self.services.results()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Teacher,
    Student,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    match props.view {
        ViewKind::Teacher => rsx! { TeacherView {} },
        ViewKind::Student => rsx! { StudentView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then let resources settle over a few work cycles.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, storage: Storage) -> ViewHarness {
    let services = AppServices::new(
        &storage,
        Arc::new(CannedSource(sample_quiz_text())),
        fixed_clock(),
    );
    let app = Arc::new(TestApp {
        services: services.clone(),
    });
    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        storage,
        services,
    }
}
