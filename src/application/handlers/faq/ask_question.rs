//! AskQuestionHandler - Command handler for the help chat.

use tracing::debug;

use crate::domain::faq::{CannedResponses, ChatMessage, Transcript};
use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::roi::Assumptions;

/// Command to ask the help chat a question.
#[derive(Debug, Clone)]
pub struct AskQuestionCommand {
    pub question: String,
    /// Current assumptions; some answers quote them.
    pub assumptions: Assumptions,
}

/// Result of a successful question.
pub type AskQuestionResult = ChatMessage;

/// Handler that answers from a canned table and records the exchange.
pub struct AskQuestionHandler {
    responses: &'static CannedResponses,
}

impl AskQuestionHandler {
    pub fn new(responses: &'static CannedResponses) -> Self {
        Self { responses }
    }

    pub fn handle(
        &self,
        transcript: &mut Transcript,
        cmd: AskQuestionCommand,
    ) -> Result<AskQuestionResult, DomainError> {
        let matched = self.responses.lookup(&cmd.question).is_some();

        let reply = transcript
            .ask(&cmd.question, self.responses, &cmd.assumptions)
            .cloned()
            .ok_or_else(|| DomainError::from(ValidationError::empty_field("question")))?;

        debug!(matched, messages = transcript.len(), "Answered chat question");
        Ok(reply)
    }
}

impl Default for AskQuestionHandler {
    fn default() -> Self {
        Self::new(CannedResponses::standard())
    }
}
