//! Chat service implementing the user-facing chat operations.
//!
//! ChatService owns a `ChatStore` and a `ChatConfig`. It resolves chats for
//! a pair of users, tracks read state, and applies edits and deletions. All
//! lookups in an operation run before any mutation, so a returned error
//! means the state is untouched.

use duochat_types::chat::{Chat, ChatSummary};
use duochat_types::config::ChatConfig;
use duochat_types::error::{ChatError, ChatLookup};
use duochat_types::id::{ChatId, MessageId, UserId};
use duochat_types::message::{Message, NewMessage};
use duochat_types::user::User;
use tracing::{debug, info, warn};

use crate::chat::store::ChatStore;

/// Single-owner chat bookkeeping service.
///
/// Not synchronized; wrap it in a [`SharedChatService`](crate::SharedChatService)
/// to hand it to concurrent callers.
#[derive(Debug, Default)]
pub struct ChatService {
    store: ChatStore,
    config: ChatConfig,
}

impl ChatService {
    /// Create an empty service with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty service with a custom configuration.
    pub fn with_config(config: ChatConfig) -> Result<Self, ChatError> {
        config.validate()?;
        Ok(Self {
            store: ChatStore::new(),
            config,
        })
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    // --- Users ---

    /// Register a user, replacing any record with the same id.
    ///
    /// Returns the replaced record, if there was one.
    pub fn add_user(&mut self, user: User) -> Option<User> {
        let user_id = user.id;
        let previous = self.store.insert_user(user);
        if previous.is_some() {
            debug!(user_id = %user_id, "User replaced");
        } else {
            info!(user_id = %user_id, "User added");
        }
        previous
    }

    pub fn get_user(&self, user_id: UserId) -> Option<&User> {
        self.store.user(user_id)
    }

    /// All registered users, ordered by id.
    pub fn users(&self) -> Vec<&User> {
        self.store.users()
    }

    // --- Sending ---

    /// Send a message from `message.sender` to `user_id`.
    ///
    /// The first message between two users opens their chat; later messages
    /// between the same pair (in either direction) go to that chat. Returns
    /// the stored message with its assigned id.
    pub fn create_message(
        &mut self,
        user_id: UserId,
        message: NewMessage,
    ) -> Result<Message, ChatError> {
        let sender = message.sender;
        for id in [user_id, sender] {
            if !self.store.has_user(id) {
                warn!(user_id = %id, "Message addressed to or from unknown user");
                return Err(ChatError::UserNotFound(id));
            }
        }
        if user_id == sender {
            warn!(user_id = %user_id, "Rejected message to self");
            return Err(ChatError::SelfChat(user_id));
        }

        let chat_id = match self.store.chat_between(user_id, sender) {
            Some(chat) => chat.id,
            None => {
                let chat_id = self.store.open_chat(user_id, sender);
                info!(chat_id = %chat_id, user1 = %user_id, user2 = %sender, "Chat created");
                chat_id
            }
        };

        let stored = self
            .store
            .push_message(chat_id, sender, message.text)
            .cloned()
            .ok_or(ChatError::ChatNotFound(ChatLookup::Id(chat_id)))?;
        info!(chat_id = %chat_id, message_id = %stored.id, sender = %sender, "Message created");
        Ok(stored)
    }

    // --- Queries ---

    /// Number of chats holding at least one unread message.
    pub fn get_unread_chats_count(&self) -> usize {
        self.store
            .chats()
            .iter()
            .filter(|chat| self.store.messages_in(chat).any(|m| !m.is_read))
            .count()
    }

    /// Text of the newest message of every chat, in chat creation order.
    ///
    /// Chats without messages report the configured placeholder.
    pub fn get_last_messages(&self) -> Vec<String> {
        self.store
            .chats()
            .iter()
            .map(|chat| {
                self.last_message(chat)
                    .map(|m| m.text.clone())
                    .unwrap_or_else(|| self.config.empty_chat_placeholder.clone())
            })
            .collect()
    }

    /// The last `count` messages of the first chat involving `user_id`,
    /// oldest first. Every returned message is marked as read.
    pub fn get_messages_from_chat(
        &mut self,
        user_id: UserId,
        count: usize,
    ) -> Result<Vec<Message>, ChatError> {
        let Some(chat) = self.store.first_chat_with(user_id) else {
            warn!(user_id = %user_id, "No chat found for participant");
            return Err(ChatError::ChatNotFound(ChatLookup::Participant(user_id)));
        };
        let chat_id = chat.id;
        let ids = &chat.message_ids;
        let selected: Vec<MessageId> = ids[ids.len().saturating_sub(count)..].to_vec();

        let mut returned = Vec::with_capacity(selected.len());
        for id in selected {
            if let Some(message) = self.store.message_mut(id) {
                message.is_read = true;
                returned.push(message.clone());
            }
        }

        debug!(chat_id = %chat_id, user_id = %user_id, count = returned.len(), "Messages read");
        Ok(returned)
    }

    /// `get_messages_from_chat` with the configured default page size.
    pub fn get_recent_messages(&mut self, user_id: UserId) -> Result<Vec<Message>, ChatError> {
        let count = self.config.default_page_size;
        self.get_messages_from_chat(user_id, count)
    }

    /// All chats in creation order.
    pub fn get_chats(&self) -> &[Chat] {
        self.store.chats()
    }

    /// An overview of every chat, in creation order.
    pub fn list_chats(&self) -> Vec<ChatSummary> {
        self.store
            .chats()
            .iter()
            .map(|chat| ChatSummary {
                chat_id: chat.id,
                user1: chat.user1,
                user2: chat.user2,
                message_count: chat.message_ids.len(),
                unread_count: self.store.messages_in(chat).filter(|m| !m.is_read).count(),
                last_message: self.last_message(chat).map(|m| m.text.clone()),
            })
            .collect()
    }

    pub fn get_chat(&self, chat_id: ChatId) -> Result<&Chat, ChatError> {
        self.store
            .chat(chat_id)
            .ok_or(ChatError::ChatNotFound(ChatLookup::Id(chat_id)))
    }

    /// The chat between two users, in either order.
    pub fn find_chat_between(&self, a: UserId, b: UserId) -> Option<&Chat> {
        self.store.chat_between(a, b)
    }

    pub fn get_message(&self, message_id: MessageId) -> Result<&Message, ChatError> {
        self.store
            .message(message_id)
            .ok_or(ChatError::MessageNotFound(message_id))
    }

    pub fn chat_count(&self) -> usize {
        self.store.chats().len()
    }

    pub fn message_count(&self) -> usize {
        self.store.message_count()
    }

    /// Unread messages sent to `user_id` by their chat partners.
    pub fn unread_count_for(&self, user_id: UserId) -> usize {
        self.store
            .chats()
            .iter()
            .filter(|chat| chat.involves(user_id))
            .flat_map(|chat| self.store.messages_in(chat))
            .filter(|m| m.sender != user_id && !m.is_read)
            .count()
    }

    // --- Mutations ---

    /// Replace the text of a message.
    pub fn edit_message(
        &mut self,
        message_id: MessageId,
        text: impl Into<String>,
    ) -> Result<(), ChatError> {
        let Some(message) = self.store.message_mut(message_id) else {
            warn!(message_id = %message_id, "Attempted to edit non-existent message");
            return Err(ChatError::MessageNotFound(message_id));
        };
        if message.set_text(text.into()) {
            debug!(message_id = %message_id, chat_id = %message.chat_id, "Message edited");
        }
        Ok(())
    }

    /// Delete a single message. The chat itself stays, even when emptied.
    pub fn delete_message(&mut self, message_id: MessageId) -> Result<Message, ChatError> {
        let Some(removed) = self.store.remove_message(message_id) else {
            warn!(message_id = %message_id, "Attempted to delete non-existent message");
            return Err(ChatError::MessageNotFound(message_id));
        };
        info!(message_id = %message_id, chat_id = %removed.chat_id, "Message deleted");
        Ok(removed)
    }

    /// Delete a chat and every message in it.
    pub fn delete_chat(&mut self, chat_id: ChatId) -> Result<Chat, ChatError> {
        let Some((chat, removed)) = self.store.remove_chat(chat_id) else {
            warn!(chat_id = %chat_id, "Attempted to delete non-existent chat");
            return Err(ChatError::ChatNotFound(ChatLookup::Id(chat_id)));
        };
        info!(chat_id = %chat_id, messages = removed.len(), "Chat deleted");
        Ok(chat)
    }

    fn last_message<'a>(&'a self, chat: &'a Chat) -> Option<&'a Message> {
        chat.message_ids
            .last()
            .and_then(|id| self.store.message(*id))
    }
}
