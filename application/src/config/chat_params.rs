//! Chat turn parameters.

use memchat_domain::UserId;

/// Memories retrieved per turn unless configured otherwise
pub const DEFAULT_MEMORY_LIMIT: usize = 3;

/// Parameters controlling chat turns
#[derive(Debug, Clone)]
pub struct ChatParams {
    /// Maximum memories embedded into the system prompt
    pub memory_limit: usize,
    /// User id for sessions without a signed-in account
    pub default_user_id: UserId,
}

impl Default for ChatParams {
    fn default() -> Self {
        Self {
            memory_limit: DEFAULT_MEMORY_LIMIT,
            default_user_id: UserId::default(),
        }
    }
}

impl ChatParams {
    pub fn with_memory_limit(mut self, limit: usize) -> Self {
        self.memory_limit = limit;
        self
    }

    pub fn with_default_user_id(mut self, user_id: UserId) -> Self {
        self.default_user_id = user_id;
        self
    }
}
