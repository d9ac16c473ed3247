//! Business logic for Duochat.
//!
//! Holds the in-memory chat store and the `ChatService` that implements the
//! chat operations on top of it. Depends only on `duochat-types` for its
//! domain types.

pub mod chat;
pub mod config;

pub use chat::service::ChatService;
pub use chat::shared::SharedChatService;
