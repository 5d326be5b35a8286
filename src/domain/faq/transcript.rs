//! Chat transcript.

use serde::{Deserialize, Serialize};

use super::CannedResponses;
use crate::domain::roi::Assumptions;

/// Who sent a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One line of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// Append-only conversation history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a question and its answer.
    ///
    /// Blank input is ignored and returns `None`; otherwise returns the answer.
    pub fn ask(
        &mut self,
        question: &str,
        responses: &CannedResponses,
        assumptions: &Assumptions,
    ) -> Option<&ChatMessage> {
        if question.trim().is_empty() {
            return None;
        }

        let answer = responses.respond(question, assumptions);
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            text: question.to_string(),
        });
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            text: answer,
        });
        self.messages.last()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
