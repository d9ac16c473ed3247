//! User records.

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// A participant in chats. Immutable once registered with the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Display name (duplicates allowed).
    pub name: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
