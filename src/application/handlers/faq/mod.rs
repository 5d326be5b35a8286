//! Help chat handlers.

mod ask_question;

pub use ask_question::{AskQuestionCommand, AskQuestionHandler, AskQuestionResult};
