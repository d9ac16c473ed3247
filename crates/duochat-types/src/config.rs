//! Service configuration for Duochat.
//!
//! `ChatConfig` is usually loaded from a `duochat.toml` file. All fields have
//! defaults, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// Tunables for the chat service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Text reported as the last message of a chat with no messages.
    #[serde(default = "default_empty_chat_placeholder")]
    pub empty_chat_placeholder: String,

    /// Number of messages returned by `get_recent_messages`.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

fn default_empty_chat_placeholder() -> String {
    "no messages".to_string()
}

fn default_page_size() -> usize {
    20
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            empty_chat_placeholder: default_empty_chat_placeholder(),
            default_page_size: default_page_size(),
        }
    }
}

impl ChatConfig {
    /// Reject settings the service cannot work with.
    pub fn validate(&self) -> Result<(), ChatError> {
        if self.default_page_size == 0 {
            return Err(ChatError::InvalidConfig(
                "default_page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_config_default_values() {
        let config = ChatConfig::default();
        assert_eq!(config.empty_chat_placeholder, "no messages");
        assert_eq!(config.default_page_size, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_chat_config_deserialize_with_defaults() {
        let config: ChatConfig = toml::from_str("").unwrap();
        assert_eq!(config, ChatConfig::default());
    }

    #[test]
    fn test_chat_config_deserialize_with_values() {
        let toml_str = r#"
empty_chat_placeholder = "(empty)"
default_page_size = 5
"#;
        let config: ChatConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.empty_chat_placeholder, "(empty)");
        assert_eq!(config.default_page_size, 5);
    }

    #[test]
    fn test_chat_config_zero_page_size_is_invalid() {
        let config = ChatConfig {
            default_page_size: 0,
            ..ChatConfig::default()
        };
        assert!(matches!(config.validate(), Err(ChatError::InvalidConfig(_))));
    }
}
