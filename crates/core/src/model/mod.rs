mod question;
mod quiz;
mod result;
mod session;

pub use question::{OPTION_LABELS, QuestionError, QuestionRecord, label_matches, option_label};
pub use quiz::{QUESTIONS_PER_QUIZ, QuizDocument, StoredQuiz};
pub use result::{AnswerRecord, QuizResult, StudentName, score_answers};
pub use session::{QuizSession, SessionError};
