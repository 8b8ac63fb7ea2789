//! Conversation state — the append-only message thread and loading flag.
//!
//! DESIGN
//! ======
//! Plain structs with mutating methods so submit/response logic is unit
//! testable without a reactive runtime. The chat page wraps one [`ChatState`]
//! in an `RwSignal` and components mutate it through `update`.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{ChatRole, ChatTurn};

/// Fixed assistant reply appended when the remote call fails.
pub const FALLBACK_REPLY: &str = "抱歉，發生了錯誤。請稍後再試。";

/// One chat turn as displayed in the thread.
///
/// Immutable once created: messages are appended, never edited or removed.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    /// Unique ID derived from the creation wall-clock millisecond.
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    /// Citation strings attached to an assistant reply, if any.
    pub sources: Option<Vec<String>>,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: f64,
}

impl Message {
    /// A user message carrying the submitted text verbatim.
    pub fn user(content: String, ts_ms: f64) -> Self {
        Self {
            id: message_id(ts_ms),
            role: ChatRole::User,
            content,
            sources: None,
            timestamp: ts_ms,
        }
    }

    /// An assistant message carrying the service reply and its sources.
    pub fn assistant(content: String, sources: Option<Vec<String>>, ts_ms: f64) -> Self {
        Self {
            id: message_id(ts_ms),
            role: ChatRole::Assistant,
            content,
            sources,
            timestamp: ts_ms,
        }
    }
}

/// Stringify a millisecond timestamp into a message ID.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn message_id(ts_ms: f64) -> String {
    // Negative or NaN clock readings clamp to zero rather than panicking.
    let ms = if ts_ms.is_finite() && ts_ms > 0.0 { ts_ms as u64 } else { 0 };
    ms.to_string()
}

/// The conversation thread plus the single in-flight request flag.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// All turns this session, oldest first. Append-only.
    pub messages: Vec<Message>,
    /// `true` exactly while a `/chat` request is outstanding.
    pub loading: bool,
}

impl ChatState {
    /// Whether a submission with `text` should proceed.
    ///
    /// Blank (after trimming) input and submissions while a request is
    /// outstanding are both rejected, which also enforces the
    /// one-request-in-flight invariant.
    #[must_use]
    pub fn can_submit(&self, text: &str) -> bool {
        !text.trim().is_empty() && !self.loading
    }

    /// Whether the welcome view (title + suggested questions) should show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Project the thread into wire turns for `conversation_history`.
    ///
    /// Callers must capture this *before* appending the message being
    /// submitted, so the history excludes the current `message`.
    #[must_use]
    pub fn history(&self) -> Vec<ChatTurn> {
        self.messages
            .iter()
            .map(|m| ChatTurn {
                role: m.role,
                content: m.content.clone(),
            })
            .collect()
    }

    /// Append the submitted user message and mark the request in flight.
    pub fn push_user(&mut self, content: String, ts_ms: f64) {
        let ts = self.unique_ts(ts_ms);
        self.messages.push(Message::user(content, ts));
        self.loading = true;
    }

    /// Append a successful assistant reply and clear the loading flag.
    pub fn push_reply(&mut self, content: String, sources: Option<Vec<String>>, ts_ms: f64) {
        let ts = self.unique_ts(ts_ms);
        self.messages.push(Message::assistant(content, sources, ts));
        self.loading = false;
    }

    /// Append the fixed fallback reply after a failed call and clear the
    /// loading flag. The fallback never carries sources.
    pub fn push_fallback(&mut self, ts_ms: f64) {
        let ts = self.unique_ts(ts_ms);
        self.messages
            .push(Message::assistant(FALLBACK_REPLY.to_owned(), None, ts));
        self.loading = false;
    }

    /// Bump the clock reading past the previous message when a reply lands
    /// within the same millisecond, keeping IDs unique.
    fn unique_ts(&self, ts_ms: f64) -> f64 {
        match self.messages.last() {
            Some(last) if last.timestamp >= ts_ms => last.timestamp + 1.0,
            _ => ts_ms,
        }
    }
}
