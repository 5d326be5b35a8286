//! FAQ module - canned answers for the calculator's help chat.
//!
//! Questions are matched by exact string. There is no language processing;
//! anything unrecognized gets the fallback answer.

mod responses;
mod transcript;

pub use responses::{Answer, CannedResponses, FALLBACK_ANSWER};
pub use transcript::{ChatMessage, ChatRole, Transcript};
