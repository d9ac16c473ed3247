//! In-memory storage for users, chats, and messages.
//!
//! Every message is stored exactly once, in an arena keyed by `MessageId`.
//! Chats keep the ordered ids of their messages, so the chat view and the
//! global id index always see the same message.
//!
//! The store does no validation of its own beyond keeping the two indexes
//! consistent; `ChatService` checks inputs before calling in.

use std::collections::HashMap;

use chrono::Utc;
use duochat_types::chat::Chat;
use duochat_types::id::{ChatId, IdSequence, MessageId, UserId};
use duochat_types::message::Message;
use duochat_types::user::User;

#[derive(Debug, Default)]
pub struct ChatStore {
    users: HashMap<UserId, User>,
    /// Chats in creation order.
    chats: Vec<Chat>,
    messages: HashMap<MessageId, Message>,
    chat_ids: IdSequence,
    message_ids: IdSequence,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Users ---

    /// Insert or replace a user. Returns the replaced record.
    pub fn insert_user(&mut self, user: User) -> Option<User> {
        self.users.insert(user.id, user)
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn has_user(&self, id: UserId) -> bool {
        self.users.contains_key(&id)
    }

    /// All users, ordered by id.
    pub fn users(&self) -> Vec<&User> {
        let mut users: Vec<&User> = self.users.values().collect();
        users.sort_by_key(|u| u.id);
        users
    }

    // --- Chats ---

    pub fn chats(&self) -> &[Chat] {
        &self.chats
    }

    pub fn chat(&self, id: ChatId) -> Option<&Chat> {
        self.chats.iter().find(|c| c.id == id)
    }

    /// The chat between `a` and `b`, in either order.
    pub fn chat_between(&self, a: UserId, b: UserId) -> Option<&Chat> {
        self.chats.iter().find(|c| c.is_between(a, b))
    }

    /// The oldest chat that has `user` as a participant.
    pub fn first_chat_with(&self, user: UserId) -> Option<&Chat> {
        self.chats.iter().find(|c| c.involves(user))
    }

    /// Create an empty chat and return its id.
    pub fn open_chat(&mut self, user1: UserId, user2: UserId) -> ChatId {
        let id = ChatId(self.chat_ids.next_value());
        self.chats.push(Chat::new(id, user1, user2));
        id
    }

    /// Remove a chat together with all of its messages.
    ///
    /// Returns the chat and the removed messages (oldest first), or `None`
    /// if no chat has this id.
    pub fn remove_chat(&mut self, id: ChatId) -> Option<(Chat, Vec<Message>)> {
        let index = self.chats.iter().position(|c| c.id == id)?;
        let chat = self.chats.remove(index);
        let removed = chat
            .message_ids
            .iter()
            .filter_map(|message_id| self.messages.remove(message_id))
            .collect();
        Some((chat, removed))
    }

    // --- Messages ---

    pub fn message(&self, id: MessageId) -> Option<&Message> {
        self.messages.get(&id)
    }

    pub fn message_mut(&mut self, id: MessageId) -> Option<&mut Message> {
        self.messages.get_mut(&id)
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Messages of a chat, oldest first.
    pub fn messages_in<'a>(&'a self, chat: &'a Chat) -> impl Iterator<Item = &'a Message> + 'a {
        chat.message_ids
            .iter()
            .filter_map(move |id| self.messages.get(id))
    }

    /// Append a new message to an existing chat.
    ///
    /// Returns `None` if the chat does not exist; nothing is stored then.
    pub fn push_message(&mut self, chat_id: ChatId, sender: UserId, text: String) -> Option<&Message> {
        let chat = self.chats.iter_mut().find(|c| c.id == chat_id)?;
        let id = MessageId(self.message_ids.next_value());
        chat.message_ids.push(id);

        let message = Message {
            id,
            chat_id,
            sender,
            text,
            is_read: false,
            created_at: Utc::now(),
            edited_at: None,
        };
        let stored: &Message = self.messages.entry(id).or_insert(message);
        Some(stored)
    }

    /// Remove a message from the arena and from its chat.
    pub fn remove_message(&mut self, id: MessageId) -> Option<Message> {
        let message = self.messages.remove(&id)?;
        if let Some(chat) = self.chats.iter_mut().find(|c| c.id == message.chat_id) {
            chat.message_ids.retain(|m| *m != id);
        }
        Some(message)
    }
}
