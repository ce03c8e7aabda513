mod generation_vm;
mod quiz_vm;
mod results_vm;

pub use generation_vm::{FailureKind, GenerationStatus, GenerationSummaryVm, map_generation};
pub use quiz_vm::{
    OptionVm, PREVIEW_QUESTIONS, QuestionPreviewVm, QuestionVm, map_current_question,
    map_question_previews, progress_label, progress_percent,
};
pub use results_vm::{
    AnswerReviewVm, LeaderboardRowVm, SubmissionVm, SubmitStatus, map_leaderboard, map_submission,
    map_submit_error,
};
