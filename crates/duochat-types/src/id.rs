//! Integer identifiers for users, chats, and messages.
//!
//! User ids are assigned by the caller. Chat and message ids are handed out
//! by the service: 1-based, strictly increasing, never reused.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// The raw integer value.
            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

numeric_id!(
    /// Caller-assigned identifier of a user.
    UserId
);

numeric_id!(
    /// Service-assigned identifier of a two-party chat.
    ChatId
);

numeric_id!(
    /// Service-assigned identifier of a message, unique across all chats.
    MessageId
);

/// Hands out 1-based, strictly increasing ids.
///
/// The counter only moves forward, so an id freed by a deletion is never
/// handed out again.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the sequence and return the new value.
    pub fn next_value(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    /// The most recently issued value (0 before the first call).
    pub fn last_value(&self) -> u64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_parse() {
        let id = UserId(42);
        assert_eq!(id.to_string(), "42");
        let parsed: UserId = " 42 ".parse().unwrap();
        assert_eq!(parsed, id);
        assert!("abc".parse::<ChatId>().is_err());
    }

    #[test]
    fn test_id_serde_is_transparent() {
        let json = serde_json::to_string(&MessageId(7)).unwrap();
        assert_eq!(json, "7");
        let parsed: MessageId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, MessageId(7));
    }

    #[test]
    fn test_id_sequence_starts_at_one() {
        let mut seq = IdSequence::new();
        assert_eq!(seq.last_value(), 0);
        assert_eq!(seq.next_value(), 1);
        assert_eq!(seq.next_value(), 2);
        assert_eq!(seq.last_value(), 2);
    }
}
