use dioxus::prelude::*;

use quiz_core::model::QuizSession;
use services::QuizTakingError;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    OptionVm, SubmissionVm, SubmitStatus, map_current_question, map_submission, map_submit_error,
    progress_label, progress_percent,
};

fn view_error(err: &QuizTakingError) -> ViewError {
    match err {
        QuizTakingError::NoQuiz => ViewError::NoQuiz,
        QuizTakingError::Unreadable(_) => ViewError::Unreadable,
        _ => ViewError::Unknown,
    }
}

#[component]
pub fn StudentView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_taking = ctx.quiz_taking();

    let mut name = use_signal(String::new);
    let session = use_signal(|| None::<QuizSession>);
    let submit_status = use_signal(|| SubmitStatus::Editing);

    let quiz_taking_for_resource = quiz_taking.clone();
    let mut loaded = use_resource(move || {
        let quiz_taking = quiz_taking_for_resource.clone();
        let mut session = session;
        async move {
            let started = quiz_taking
                .start_session()
                .await
                .map_err(|err| view_error(&err))?;
            session.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&loaded);

    let on_submit = move |_| {
        let mut submit_status = submit_status;
        let Some(current) = session.read().clone() else {
            return;
        };
        if submit_status.read().clone() == SubmitStatus::Submitting {
            return;
        }
        let quiz_taking = quiz_taking.clone();
        let raw_name = name();
        submit_status.set(SubmitStatus::Submitting);
        spawn(async move {
            let next = match quiz_taking.submit(&current, &raw_name).await {
                Ok(submission) => SubmitStatus::Submitted(map_submission(&submission)),
                Err(err) => {
                    log::warn!("quiz submission failed: {err}");
                    map_submit_error(&err)
                }
            };
            submit_status.set(next);
        });
    };

    let on_retake = move |_| {
        let mut submit_status = submit_status;
        let mut session = session;
        session.set(None);
        submit_status.set(SubmitStatus::Editing);
        loaded.restart();
    };

    rsx! {
        div { class: "page",
            h2 { "Take Quiz" }
            label { r#for: "student-name", "Your name" }
            input {
                id: "student-name",
                r#type: "text",
                placeholder: "Enter your name",
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading quiz..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "warning", "{err.message()}" }
                    button { onclick: move |_| loaded.restart(), "Check again" }
                },
                ViewState::Ready(()) => match submit_status() {
                    SubmitStatus::Submitted(submission) => rsx! {
                        SubmissionReport { submission }
                        button { onclick: on_retake, "Take the quiz again" }
                    },
                    status => rsx! {
                        QuizForm { session, status }
                        button {
                            id: "submit-quiz",
                            class: "primary",
                            disabled: status_is_submitting(&submit_status.read()),
                            onclick: on_submit,
                            "Submit Quiz"
                        }
                    },
                },
            }
        }
    }
}

fn status_is_submitting(status: &SubmitStatus) -> bool {
    matches!(status, SubmitStatus::Submitting)
}

#[component]
fn QuizForm(mut session: Signal<Option<QuizSession>>, status: SubmitStatus) -> Element {
    let snapshot = session.read().as_ref().map(|current| {
        (
            map_current_question(current),
            progress_label(current),
            progress_percent(current),
            (0..current.total())
                .map(|index| current.answer(index).is_some())
                .collect::<Vec<bool>>(),
        )
    });
    let Some((question, progress, percent, answered)) = snapshot else {
        return rsx! {};
    };
    let index = question.index;

    rsx! {
        div { class: "quiz",
            div { class: "progress",
                div { class: "progress-bar", style: "width: {percent}%" }
            }
            p { class: "progress-label", "{progress}" }

            nav { class: "question-nav",
                for (position, done) in answered.into_iter().enumerate() {
                    button {
                        class: nav_class(position == index, done),
                        onclick: move |_| {
                            if let Some(current) = session.write().as_mut() {
                                if let Err(err) = current.go_to(position) {
                                    log::warn!("cannot open question {}: {err}", position + 1);
                                }
                            }
                        },
                        "{position + 1}"
                    }
                }
            }

            fieldset { class: "question",
                legend { "Question {question.number}: {question.question}" }
                for option in question.options.iter().cloned() {
                    OptionRow {
                        group: format!("question-{index}"),
                        option,
                        on_select: move |text: String| {
                            if let Some(current) = session.write().as_mut() {
                                if let Err(err) = current.select_answer(index, &text) {
                                    log::warn!("answer not recorded: {err}");
                                }
                            }
                        },
                    }
                }
            }

            div { class: "nav-buttons",
                button {
                    disabled: question.is_first,
                    onclick: move |_| {
                        if let Some(current) = session.write().as_mut() {
                            current.previous();
                        }
                    },
                    "Previous"
                }
                button {
                    disabled: question.is_last,
                    onclick: move |_| {
                        if let Some(current) = session.write().as_mut() {
                            current.next();
                        }
                    },
                    "Next"
                }
            }

            match status {
                SubmitStatus::Incomplete(missing) => rsx! {
                    p { class: "error",
                        "Please answer all questions before submitting. Unanswered: {join_numbers(&missing)}"
                    }
                },
                SubmitStatus::Failed(message) => rsx! {
                    p { class: "error", "{message}" }
                },
                SubmitStatus::Submitting => rsx! {
                    p { class: "status", "Submitting..." }
                },
                SubmitStatus::Editing | SubmitStatus::Submitted(_) => rsx! {},
            }
        }
    }
}

#[component]
fn OptionRow(group: String, option: OptionVm, on_select: EventHandler<String>) -> Element {
    let text = option.text.clone();
    rsx! {
        label { class: "option",
            input {
                r#type: "radio",
                name: "{group}",
                checked: option.selected,
                onchange: move |_| on_select.call(text.clone()),
            }
            "{option.text}"
        }
    }
}

#[component]
fn SubmissionReport(submission: SubmissionVm) -> Element {
    rsx! {
        div { class: "success",
            p { "Quiz submitted! {submission.score_line()}" }
            p { class: "hint", "Results saved as {submission.saved_as}" }
        }
        h3 { "Correct Answers and Explanations" }
        ol { class: "review",
            for answer in submission.review.iter() {
                li { class: review_class(answer.is_correct),
                    p { class: "question", "{answer.question}" }
                    p { "Your answer: {answer.student_answer}" }
                    p { "Correct answer: {answer.correct_answer}" }
                    p { class: "explanation", "Explanation: {answer.explanation}" }
                }
            }
        }
    }
}

fn nav_class(current: bool, answered: bool) -> &'static str {
    if current {
        "current"
    } else if answered {
        "answered"
    } else {
        ""
    }
}

fn review_class(correct: bool) -> &'static str {
    if correct { "correct" } else { "incorrect" }
}

fn join_numbers(numbers: &[usize]) -> String {
    numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
