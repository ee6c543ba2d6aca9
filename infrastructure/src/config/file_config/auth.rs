//! Auth service configuration from TOML (`[auth]` section)

use serde::{Deserialize, Serialize};

/// Supabase project credentials (`SUPABASE_URL`, `SUPABASE_KEY`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuthConfig {
    pub supabase_url: String,
    pub supabase_key: String,
}

impl FileAuthConfig {
    pub fn is_complete(&self) -> bool {
        !self.supabase_url.trim().is_empty() && !self.supabase_key.trim().is_empty()
    }
}
