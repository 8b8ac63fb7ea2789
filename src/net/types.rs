//! Wire DTOs for the answering-service `/chat` exchange.
//!
//! DESIGN
//! ======
//! These types mirror the service's JSON contract field-for-field so serde
//! round-trips stay lossless and no hand-written mapping code is needed at
//! the request boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Who authored a conversation turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One prior turn as sent in `conversation_history`.
///
/// Only role and content travel over the wire; local fields such as message
/// IDs, timestamps, and sources stay client-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

/// Request body for `POST {API_URL}/chat`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The newly submitted user message.
    pub message: String,
    /// All turns that preceded `message`, oldest first. Excludes `message`
    /// itself.
    pub conversation_history: Vec<ChatTurn>,
}

/// Response body from a successful `/chat` call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The generated reply, as Markdown.
    pub response: String,
    /// Optional citation strings backing the reply.
    #[serde(default)]
    pub sources: Option<Vec<String>>,
}
