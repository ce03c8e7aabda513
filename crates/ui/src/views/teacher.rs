use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    GenerationStatus, GenerationSummaryVm, LeaderboardRowVm, QuestionPreviewVm, map_generation,
    map_leaderboard,
};

#[component]
pub fn TeacherView() -> Element {
    let ctx = use_context::<AppContext>();
    let generation = ctx.quiz_generation();
    let results = ctx.results();
    let default_topics = ctx.default_topics().to_string();

    let mut topics = use_signal(move || default_topics);
    let mut status = use_signal(|| GenerationStatus::Idle);

    let mut leaderboard = use_resource(move || {
        let results = results.clone();
        async move {
            let rows = results
                .leaderboard()
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_leaderboard(&rows))
        }
    });
    let board_state = view_state_from_resource(&leaderboard);

    let on_generate = move |_| {
        if status.read().is_busy() {
            return;
        }
        let generation = generation.clone();
        let requested = topics();
        status.set(GenerationStatus::Generating);
        spawn(async move {
            let outcome = generation.generate_and_save(&requested).await;
            status.set(map_generation(&outcome));
        });
    };

    let busy = status.read().is_busy();

    rsx! {
        div { class: "page",
            h2 { "Generate Quiz" }
            label { r#for: "topics", "Quiz topics" }
            textarea {
                id: "topics",
                rows: "5",
                value: "{topics}",
                oninput: move |evt| topics.set(evt.value()),
            }
            button {
                id: "generate-quiz",
                class: "primary",
                disabled: busy,
                onclick: on_generate,
                "Generate Quiz"
            }

            match status() {
                GenerationStatus::Idle => rsx! {},
                GenerationStatus::Generating => rsx! {
                    p { class: "status", "Generating quiz..." }
                },
                GenerationStatus::Generated(summary) => rsx! {
                    GenerationSummary { summary }
                },
                GenerationStatus::Failed { message, .. } => rsx! {
                    p { class: "error", "{message}" }
                },
            }

            section { class: "results",
                div { class: "section-header",
                    h3 { "All Student Results" }
                    button { onclick: move |_| leaderboard.restart(), "Refresh" }
                }

                match board_state {
                    ViewState::Idle => rsx! {},
                    ViewState::Loading => rsx! {
                        p { "Loading..." }
                    },
                    ViewState::Ready(rows) => rsx! {
                        if rows.is_empty() {
                            p { "No student results yet." }
                        } else {
                            Leaderboard { rows }
                        }
                    },
                    ViewState::Error(err) => rsx! {
                        p { class: "error", "{err.message()}" }
                    },
                }
            }
        }
    }
}

#[component]
fn GenerationSummary(summary: GenerationSummaryVm) -> Element {
    rsx! {
        div { class: "success",
            p { "Quiz generated successfully with {summary.question_count} questions!" }
            if summary.attempt > 1 {
                p { class: "hint", "Succeeded on attempt {summary.attempt}." }
            }
        }
        h3 { "Preview" }
        ol { class: "preview",
            for preview in summary.previews.iter().cloned() {
                PreviewItem { preview }
            }
        }
    }
}

#[component]
fn PreviewItem(preview: QuestionPreviewVm) -> Element {
    rsx! {
        li {
            p { class: "question", "{preview.question}" }
            ul {
                for option in preview.options.iter() {
                    li { "{option}" }
                }
            }
        }
    }
}

#[component]
fn Leaderboard(rows: Vec<LeaderboardRowVm>) -> Element {
    rsx! {
        table { class: "leaderboard",
            thead {
                tr {
                    th { "Rank" }
                    th { "Student" }
                    th { "Score" }
                }
            }
            tbody {
                for row in rows.iter() {
                    tr {
                        td { "{row.rank}" }
                        td { "{row.student}" }
                        td { "{row.score}" }
                    }
                }
            }
        }
    }
}
