//! Configuration loading for memchat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `DATABASE_URL`, `SUPABASE_URL`, `SUPABASE_KEY`, `MEMCHAT_*`
//! 2. `--config <path>` specified file
//! 3. Project root: `./memchat.toml` or `./.memchat.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/memchat/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigError, FileAuthConfig, FileChatConfig, FileConfig};
pub use loader::ConfigLoader;
