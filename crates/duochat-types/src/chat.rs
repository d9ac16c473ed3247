//! Two-party chat types.
//!
//! A chat is created implicitly by the first message between two distinct
//! users and lives until it is deleted. At most one chat exists per
//! unordered pair of users; pairs are compared by `UserId` only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{ChatId, MessageId, UserId};

/// A conversation between exactly two users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: ChatId,
    pub user1: UserId,
    pub user2: UserId,
    /// Ids of the messages in this chat, oldest first.
    pub message_ids: Vec<MessageId>,
    pub created_at: DateTime<Utc>,
}

impl Chat {
    /// Create an empty chat between two users.
    pub fn new(id: ChatId, user1: UserId, user2: UserId) -> Self {
        Self {
            id,
            user1,
            user2,
            message_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Whether `user` is one of the two participants.
    pub fn involves(&self, user: UserId) -> bool {
        self.user1 == user || self.user2 == user
    }

    /// Whether this chat is between `a` and `b`, in either order.
    pub fn is_between(&self, a: UserId, b: UserId) -> bool {
        (self.user1 == a && self.user2 == b) || (self.user1 == b && self.user2 == a)
    }

    /// The participant that is not `user`, or `None` if `user` is not in the chat.
    pub fn other_participant(&self, user: UserId) -> Option<UserId> {
        if self.user1 == user {
            Some(self.user2)
        } else if self.user2 == user {
            Some(self.user1)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.message_ids.is_empty()
    }
}

/// Read-only overview of a chat, as returned by chat listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSummary {
    pub chat_id: ChatId,
    pub user1: UserId,
    pub user2: UserId,
    pub message_count: usize,
    pub unread_count: usize,
    /// Text of the newest message, `None` when the chat is empty.
    pub last_message: Option<String>,
}
