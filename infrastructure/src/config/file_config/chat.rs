//! Chat configuration from TOML (`[chat]` section)

use memchat_domain::DEFAULT_USER_ID;
use serde::{Deserialize, Serialize};

/// Raw chat configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Number of memories retrieved per turn
    pub memory_limit: usize,
    /// User id of the terminal chat
    pub default_user_id: String,
    /// Show the thinking spinner
    pub show_progress: bool,
    /// Path to the line-editing history file
    pub history_file: Option<String>,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            memory_limit: 3,
            default_user_id: DEFAULT_USER_ID.to_string(),
            show_progress: true,
            history_file: None,
        }
    }
}
