use thiserror::Error;

use std::fmt;

use crate::id::{ChatId, MessageId, UserId};

/// What a failed chat lookup was searching by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatLookup {
    /// Chat id.
    Id(ChatId),
    /// Any chat that has this user as a participant.
    Participant(UserId),
}

impl fmt::Display for ChatLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatLookup::Id(id) => write!(f, "id {id}"),
            ChatLookup::Participant(user) => write!(f, "participant {user}"),
        }
    }
}

/// Errors returned by chat service operations.
///
/// Every operation performs its lookups before touching state, so an error
/// always means nothing was changed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("user {0} not found")]
    UserNotFound(UserId),

    #[error("chat with {0} not found")]
    ChatNotFound(ChatLookup),

    #[error("message {0} not found")]
    MessageNotFound(MessageId),

    #[error("user {0} cannot open a chat with themselves")]
    SelfChat(UserId),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
