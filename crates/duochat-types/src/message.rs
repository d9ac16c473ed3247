//! Message types.
//!
//! A `Message` is owned by exactly one chat and stored once by the service;
//! the chat keeps only the ordered ids of its messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{ChatId, MessageId, UserId};

/// A single message within a chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub chat_id: ChatId,
    pub sender: UserId,
    pub text: String,
    /// Set once the message has been handed out by a chat read.
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    /// Last time the text was changed, if ever.
    #[serde(default)]
    pub edited_at: Option<DateTime<Utc>>,
}

impl Message {
    /// Replace the text. Returns false (and leaves `edited_at` alone) when
    /// the text is unchanged.
    pub fn set_text(&mut self, text: String) -> bool {
        if self.text == text {
            return false;
        }
        self.text = text;
        self.edited_at = Some(Utc::now());
        true
    }
}

/// Input for sending a message. The service assigns id, chat and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMessage {
    pub sender: UserId,
    pub text: String,
}

impl NewMessage {
    pub fn new(sender: UserId, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
        }
    }
}
