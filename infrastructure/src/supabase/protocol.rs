//! GoTrue REST wire types

use memchat_domain::{AuthResponse, AuthSession, AuthUser};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct SignUpRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub data: SignUpData<'a>,
}

#[derive(Debug, Serialize)]
pub struct SignUpData<'a> {
    pub full_name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct PasswordRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct UserBody {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: Value,
}

impl From<UserBody> for AuthUser {
    fn from(body: UserBody) -> Self {
        AuthUser {
            id: body.id,
            email: body.email.filter(|e| !e.is_empty()),
            full_name: body
                .user_metadata
                .get("full_name")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

/// Token grant: a session with its user
#[derive(Debug, Deserialize)]
pub struct SessionBody {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub user: Option<UserBody>,
}

/// Parse a sign-up or token reply.
///
/// GoTrue answers with a session when the account is usable right away and
/// with a bare user object while e-mail confirmation is pending.
pub fn parse_auth_response(body: Value) -> Result<AuthResponse, serde_json::Error> {
    if body.get("access_token").is_some() {
        let session: SessionBody = serde_json::from_value(body)?;
        return Ok(AuthResponse {
            user: session.user.map(AuthUser::from),
            session: Some(AuthSession {
                access_token: session.access_token,
                refresh_token: session.refresh_token,
                expires_in: session.expires_in,
            }),
        });
    }
    if body.get("id").is_some() {
        let user: UserBody = serde_json::from_value(body)?;
        return Ok(AuthResponse {
            user: Some(user.into()),
            session: None,
        });
    }
    Ok(AuthResponse::default())
}

/// Best human-readable message from an error body
pub fn error_message(body: &Value) -> Option<String> {
    ["error_description", "msg", "message", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}
