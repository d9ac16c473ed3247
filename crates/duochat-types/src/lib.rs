//! Shared domain types for Duochat.
//!
//! This crate contains the core domain types used across the Duochat crates:
//! User, Chat, Message, the service configuration, and the error type.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod id;
pub mod message;
pub mod user;
