//! Authentication entities

use serde::{Deserialize, Serialize};

/// A user account known to the auth provider (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

impl AuthUser {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: Some(email.into()),
            full_name: None,
        }
    }

    /// Text shown in account panels
    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or("(no email)")
    }
}

/// Tokens issued for a signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<u64>,
}

/// Result of a sign-up or sign-in call.
///
/// `user` is absent when the provider accepted a sign-up but still waits
/// for e-mail confirmation; `session` is absent in that case as well.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthResponse {
    pub user: Option<AuthUser>,
    pub session: Option<AuthSession>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_email_falls_back() {
        let user = AuthUser {
            id: "1".to_string(),
            email: None,
            full_name: None,
        };
        assert_eq!(user.display_email(), "(no email)");
    }
}
