use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::MessageId;
use crate::model::progress::UnderstandingLevel;
use crate::model::quiz::ReviewResource;

//
// ─── SENDER ────────────────────────────────────────────────────────────────────
//

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sender {
    Tutor,
    Student,
}

//
// ─── CHAT MESSAGE ──────────────────────────────────────────────────────────────
//

/// One entry in a week's tutor conversation.
///
/// Tutor feedback messages optionally carry the understanding level for the
/// answer they respond to, plus the review resources offered for it. Both
/// stay empty on plain prompt announcements and student messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender: Sender,
    pub content: String,
    pub sent_at: DateTime<Utc>,
    pub understanding: Option<UnderstandingLevel>,
    pub review_resources: Vec<ReviewResource>,
}

impl ChatMessage {
    /// Builds a message authored by the student.
    #[must_use]
    pub fn student(content: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            id: MessageId::generate(),
            sender: Sender::Student,
            content: content.into(),
            sent_at,
            understanding: None,
            review_resources: Vec::new(),
        }
    }

    /// Builds a plain tutor message (prompt announcement, no evaluation data).
    #[must_use]
    pub fn tutor(content: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            id: MessageId::generate(),
            sender: Sender::Tutor,
            content: content.into(),
            sent_at,
            understanding: None,
            review_resources: Vec::new(),
        }
    }

    /// Attaches the evaluated understanding level.
    #[must_use]
    pub fn with_understanding(mut self, level: UnderstandingLevel) -> Self {
        self.understanding = Some(level);
        self
    }

    /// Attaches review resources to show beneath the message.
    #[must_use]
    pub fn with_resources(mut self, resources: Vec<ReviewResource>) -> Self {
        self.review_resources = resources;
        self
    }
}

//
// ─── CHAT LOG ──────────────────────────────────────────────────────────────────
//

/// Append-only conversation log for one week.
///
/// Session-local and never persisted. Exposes no mutation beyond `push`, so
/// existing entries cannot be edited or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message and returns a reference to the stored entry.
    pub fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        // Just pushed, so the log cannot be empty.
        self.messages.last().expect("log has at least one message")
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
