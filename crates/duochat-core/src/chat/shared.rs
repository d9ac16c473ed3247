//! Thread-safe handle around a [`ChatService`].
//!
//! Every call takes one lock over the whole service, so operations from
//! concurrent callers are applied one at a time and chat/message id
//! assignment stays strictly increasing. Cloning produces a shared view
//! (backed by `Arc<Mutex<...>>`).

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use duochat_types::chat::{Chat, ChatSummary};
use duochat_types::config::ChatConfig;
use duochat_types::error::ChatError;
use duochat_types::id::{ChatId, MessageId, UserId};
use duochat_types::message::{Message, NewMessage};
use duochat_types::user::User;

use crate::chat::service::ChatService;

#[derive(Debug, Clone, Default)]
pub struct SharedChatService {
    inner: Arc<Mutex<ChatService>>,
}

impl SharedChatService {
    pub fn new(service: ChatService) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    /// Create a shared service with a custom configuration.
    pub fn with_config(config: ChatConfig) -> Result<Self, ChatError> {
        Ok(Self::new(ChatService::with_config(config)?))
    }

    /// Run `f` with exclusive access to the service.
    ///
    /// Useful for reads that borrow from the service or for several calls
    /// that must not interleave with other callers.
    pub fn with<R>(&self, f: impl FnOnce(&mut ChatService) -> R) -> R {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    // Service operations validate before they mutate, so the state behind a
    // poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, ChatService> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_user(&self, user: User) -> Option<User> {
        self.lock().add_user(user)
    }

    pub fn get_user(&self, user_id: UserId) -> Option<User> {
        self.lock().get_user(user_id).cloned()
    }

    pub fn create_message(&self, user_id: UserId, message: NewMessage) -> Result<Message, ChatError> {
        self.lock().create_message(user_id, message)
    }

    pub fn get_unread_chats_count(&self) -> usize {
        self.lock().get_unread_chats_count()
    }

    pub fn get_last_messages(&self) -> Vec<String> {
        self.lock().get_last_messages()
    }

    pub fn get_messages_from_chat(
        &self,
        user_id: UserId,
        count: usize,
    ) -> Result<Vec<Message>, ChatError> {
        self.lock().get_messages_from_chat(user_id, count)
    }

    pub fn get_recent_messages(&self, user_id: UserId) -> Result<Vec<Message>, ChatError> {
        self.lock().get_recent_messages(user_id)
    }

    pub fn get_chats(&self) -> Vec<Chat> {
        self.lock().get_chats().to_vec()
    }

    pub fn list_chats(&self) -> Vec<ChatSummary> {
        self.lock().list_chats()
    }

    pub fn get_chat(&self, chat_id: ChatId) -> Result<Chat, ChatError> {
        self.lock().get_chat(chat_id).cloned()
    }

    pub fn find_chat_between(&self, a: UserId, b: UserId) -> Option<Chat> {
        self.lock().find_chat_between(a, b).cloned()
    }

    pub fn get_message(&self, message_id: MessageId) -> Result<Message, ChatError> {
        self.lock().get_message(message_id).cloned()
    }

    pub fn chat_count(&self) -> usize {
        self.lock().chat_count()
    }

    pub fn message_count(&self) -> usize {
        self.lock().message_count()
    }

    pub fn unread_count_for(&self, user_id: UserId) -> usize {
        self.lock().unread_count_for(user_id)
    }

    pub fn edit_message(&self, message_id: MessageId, text: impl Into<String>) -> Result<(), ChatError> {
        self.lock().edit_message(message_id, text)
    }

    pub fn delete_message(&self, message_id: MessageId) -> Result<Message, ChatError> {
        self.lock().delete_message(message_id)
    }

    pub fn delete_chat(&self, chat_id: ChatId) -> Result<Chat, ChatError> {
        self.lock().delete_chat(chat_id)
    }
}

impl From<ChatService> for SharedChatService {
    fn from(service: ChatService) -> Self {
        Self::new(service)
    }
}
