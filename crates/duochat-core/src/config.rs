//! Configuration loader for Duochat.
//!
//! Reads `duochat.toml` and deserializes it into [`ChatConfig`]. Falls back
//! to defaults when the file is missing, unreadable, malformed, or invalid.

use std::path::Path;

use duochat_types::config::ChatConfig;

/// File name looked up by [`load_config_from_dir`].
pub const CONFIG_FILE_NAME: &str = "duochat.toml";

/// Load configuration from `{dir}/duochat.toml`.
pub fn load_config_from_dir(dir: &Path) -> ChatConfig {
    load_config(&dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from a TOML file.
///
/// - If the file does not exist, returns [`ChatConfig::default()`].
/// - If the file cannot be read, fails to parse, or fails validation, logs a
///   warning and returns the default.
pub fn load_config(path: &Path) -> ChatConfig {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return ChatConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return ChatConfig::default();
        }
    };

    let config = match toml::from_str::<ChatConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            return ChatConfig::default();
        }
    };

    match config.validate() {
        Ok(()) => config,
        Err(err) => {
            tracing::warn!("Rejected {}: {err}, using defaults", path.display());
            ChatConfig::default()
        }
    }
}
